//! Test fixtures for Weft development.
//!
//! Provides an opaque (non-contiguous) sequence wrapper for forcing
//! the generic traversal path, a synchronized coverage recorder for
//! exactly-once assertions, and deterministic seeded test data.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{seeded_values, CoverageRecorder, OpaqueSeq};
