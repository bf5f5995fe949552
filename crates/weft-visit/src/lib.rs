//! Parallel strided visitation of random-access collections.
//!
//! Given any [`Sequence`](weft_collect::Sequence) and a visitor
//! callback, [`visit`] and [`visit_enumerated`] partition the index
//! space into fixed-size buckets and fan the buckets out across a pool
//! of worker threads. The guarantees:
//!
//! - every index in `[0, len)` is visited exactly once, regardless of
//!   worker count or scheduling order;
//! - the call blocks until every worker finishes (a join barrier), so
//!   visitation is synchronous from the caller's point of view;
//! - any lazily-memoized lengths the collection depends on are forced
//!   from the calling thread before fan-out, never populated
//!   concurrently;
//! - sequences backed by contiguous storage are walked through the
//!   backing slice instead of the generic element path.
//!
//! No inter-bucket ordering is guaranteed. Visitors run concurrently
//! with each other and must be internally synchronized if they
//! accumulate shared state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bucket;
pub mod config;
pub mod engine;

pub use bucket::Buckets;
pub use config::VisitConfig;
pub use engine::{visit, visit_enumerated};
