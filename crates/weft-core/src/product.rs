//! Inline product tuples: all fields stored directly, copied by value.
//!
//! One type per arity, generated by [`inline_product!`]. Fields are
//! named `a` through `i` in declared order and are public; ordering,
//! equality, hashing and serde encoding are available whenever every
//! field type supports them. The serde encoding is a fixed-order keyed
//! struct with one key per field letter; a payload with missing or
//! extra keys is a decode error, not a silent partial fill.

use crate::validity::Validity;

/// Generates one inline product tuple type.
///
/// Invoked once per arity with the ordered list of field names and
/// their type parameters.
macro_rules! inline_product {
    ($name:ident, $arity:literal, $( ($f:ident, $T:ident) ),+ $(,)?) => {
        #[doc = concat!(
            "An algebraic product of arity ",
            stringify!($arity),
            " with all fields stored inline.",
        )]
        ///
        /// Assignment and copy duplicate every field; there is no shared
        /// ownership and no allocation. The derived ordering is
        /// lexicographic over the fields in declared order: the first
        /// field is the most significant, ties break to the next field.
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(deny_unknown_fields)]
        pub struct $name<$($T),+> {
            $(
                #[doc = concat!("Field `", stringify!($f), "`.")]
                pub $f: $T,
            )+
        }

        impl<$($T),+> $name<$($T),+> {
            /// Number of fields.
            pub const ARITY: usize = $arity;

            #[doc = concat!(
                "Builds a tuple from exactly ",
                stringify!($arity),
                " values, one per declared field.",
            )]
            pub fn new($($f: $T),+) -> Self {
                Self { $($f),+ }
            }
        }

        /// Valid iff every field is individually valid.
        impl<$($T: Validity),+> Validity for $name<$($T),+> {
            fn is_valid(&self) -> bool {
                $( self.$f.is_valid() )&&+
            }
        }
    };
}

inline_product!(Product2, 2, (a, A), (b, B));
inline_product!(Product3, 3, (a, A), (b, B), (c, C));
inline_product!(Product4, 4, (a, A), (b, B), (c, C), (d, D));
inline_product!(Product5, 5, (a, A), (b, B), (c, C), (d, D), (e, E));
inline_product!(Product6, 6, (a, A), (b, B), (c, C), (d, D), (e, E), (f, F));
inline_product!(Product7, 7, (a, A), (b, B), (c, C), (d, D), (e, E), (f, F), (g, G));
inline_product!(Product8, 8, (a, A), (b, B), (c, C), (d, D), (e, E), (f, F), (g, G), (h, H));
inline_product!(
    Product9, 9, (a, A), (b, B), (c, C), (d, D), (e, E), (f, F), (g, G), (h, H), (i, I)
);
