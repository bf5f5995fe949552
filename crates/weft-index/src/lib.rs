//! Index machinery shared by every collection family in the Weft toolkit.
//!
//! Two pieces live here:
//!
//! - [`RadixMap`]: per-dimension extents with precomputed row-major
//!   strides, mapping linear offsets to coordinate vectors and back in
//!   O(arity).
//! - [`PositionIndex`]: a coordinate position paired with its cached
//!   linear offset, with closure-parameterized validation, equivalence
//!   and three-way comparison so that each container family chooses
//!   which coordinates participate without duplicating the machinery.
//!
//! # Radix convention
//!
//! The leftmost dimension is the most significant (slowest-varying);
//! the rightmost varies fastest. Under this convention the
//! lexicographic order of coordinate vectors coincides with linear
//! offset order, so one comparison serves both contracts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod position;
pub mod radix;

pub use error::IndexError;
pub use position::PositionIndex;
pub use radix::{Coords, RadixMap};
