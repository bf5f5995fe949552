//! Weft: Cartesian-product collections, product tuples, and parallel
//! strided visitation.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! // The Cartesian product of two ranges, flattened row-major.
//! let product = Cartesian2::new(0u32..2, 0u32..3);
//! assert_eq!(product.len(), 6);
//! assert_eq!(product.get(4), Product2::new(1, 1));
//!
//! // Walk it with a pool of workers; every tuple is visited exactly
//! // once, in no particular order.
//! let sum = std::sync::Mutex::new(0u32);
//! visit(&product, &VisitConfig::with_stride(2), |tuple| {
//!     *sum.lock().unwrap() += tuple.a * 10 + tuple.b;
//! });
//! assert_eq!(sum.into_inner().unwrap(), 36);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`tuple`] | `weft-core` | Inline and copy-on-write product tuples, validity, fixed-arity access |
//! | [`index`] | `weft-index` | Mixed-radix arithmetic and position-index storage |
//! | [`collect`] | `weft-collect` | Cartesian, adjacent, zipped and chained collection families |
//! | [`visit`](mod@visit) | `weft-visit` | Parallel strided visitation engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Product tuple families and validity (`weft-core`).
///
/// Inline tuples [`tuple::Product2`]..[`tuple::Product9`], their
/// copy-on-write twins, the [`tuple::Validity`] sanity contract, and
/// the [`tuple::FixedArity`] homogeneous view.
pub use weft_core as tuple;

/// Mixed-radix index arithmetic (`weft-index`).
///
/// [`index::RadixMap`] for offset/coordinate bijections and
/// [`index::PositionIndex`] for cached-offset index storage.
pub use weft_index as index;

/// Collection families (`weft-collect`).
///
/// The [`collect::Sequence`] seam plus the Cartesian, adjacent, zipped
/// and chained families at every arity from 2 through 9.
pub use weft_collect as collect;

/// Parallel strided visitation (`weft-visit`).
///
/// [`visit::visit`] and [`visit::visit_enumerated`] with
/// [`visit::VisitConfig`] worker/stride control.
pub use weft_visit as visit;

/// Common imports for typical Weft usage.
///
/// ```rust
/// use weft::prelude::*;
/// ```
///
/// Imports the low-arity collection types, their tuple elements, the
/// `Sequence` trait, and the visitation entry points.
pub mod prelude {
    pub use weft_collect::{
        Adjacent2, Adjacent3, Cartesian2, Cartesian3, Cartesian4, Chain2, Chain3, Sequence, Sum2,
        Sum3, Zip2, Zip3,
    };
    pub use weft_core::{
        CowProduct2, CowProduct3, CowProduct4, FixedArity, Product2, Product3, Product4, Validity,
    };
    pub use weft_index::{PositionIndex, RadixMap};
    pub use weft_visit::{visit, visit_enumerated, VisitConfig};
}
