//! Product tuple families for the Weft container toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the algebraic product tuples (arities 2 through 9) in their two
//! storage layouts, the [`Validity`] sanity-check trait, and the
//! [`FixedArity`] homogeneous fixed-size view.
//!
//! # Storage layouts
//!
//! - [`Product2`]..[`Product9`]: fields stored inline, copied by value,
//!   no allocation.
//! - [`CowProduct2`]..[`CowProduct9`]: fields stored once behind a
//!   shared buffer, copied only when mutated while shared.
//!
//! The two layouts convert losslessly in both directions and are
//! interchangeable wherever only field values matter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cow;
pub mod fixed;
pub mod product;
pub mod validity;

pub use cow::{
    CowProduct2, CowProduct3, CowProduct4, CowProduct5, CowProduct6, CowProduct7, CowProduct8,
    CowProduct9,
};
pub use fixed::FixedArity;
pub use product::{
    Product2, Product3, Product4, Product5, Product6, Product7, Product8, Product9,
};
pub use validity::Validity;
