//! Collection families over independently-indexable random-access
//! sequences.
//!
//! This crate defines the [`Sequence`] trait, the random-access seam
//! every family builds on, along with four structural families:
//!
//! - [`cartesian`]: the flattened Cartesian product of N sequences,
//!   presented as a random-access collection of N-tuples.
//! - [`adjacent`]: every length-N run of consecutive elements of one
//!   sequence.
//! - [`zip`]: element-wise pairing of N sequences, stopping at the
//!   shortest.
//! - [`chain`]: concatenation of N sequences with possibly-distinct
//!   element types, exposed through a tagged union per element.
//!
//! All four reuse the position-index machinery from `weft-index`: an
//! index carries its coordinate position plus a cached linear offset,
//! and each family selects which coordinates participate in equality
//! and ordering.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacent;
pub mod cartesian;
pub mod chain;
pub mod index;
pub mod sequence;
pub mod zip;

mod macros;

pub use adjacent::{
    Adjacent2, Adjacent3, Adjacent4, Adjacent5, Adjacent6, Adjacent7, Adjacent8, Adjacent9,
};
pub use cartesian::{
    Cartesian2, Cartesian3, Cartesian4, Cartesian5, Cartesian6, Cartesian7, Cartesian8, Cartesian9,
};
pub use chain::{
    Chain2, Chain3, Chain4, Chain5, Chain6, Chain7, Chain8, Chain9, Sum2, Sum3, Sum4, Sum5, Sum6,
    Sum7, Sum8, Sum9,
};
pub use index::{DiagonalIndex, ProductIndex, WindowIndex};
pub use sequence::{SeqIter, Sequence};
pub use zip::{Zip2, Zip3, Zip4, Zip5, Zip6, Zip7, Zip8, Zip9};
