//! Copy-on-write product tuples: fields stored once behind a shared buffer.
//!
//! Each `CowProductN` is the heap-indirect twin of the matching inline
//! [`product`](crate::product) type. Clones bump a reference count
//! instead of duplicating fields; the first mutation observed while the
//! buffer is shared copies it, after which the handle owns its buffer
//! uniquely. Conversion to and from the inline layout is lossless in
//! both directions.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::product::{
    Product2, Product3, Product4, Product5, Product6, Product7, Product8, Product9,
};
use crate::validity::Validity;

/// Generates one copy-on-write product tuple type and its conversions
/// to and from the matching inline type.
macro_rules! cow_product {
    ($inline:ident, $cow:ident, $arity:literal, $( ($f:ident, $set:ident, $T:ident) ),+ $(,)?) => {
        #[doc = concat!(
            "An algebraic product of arity ",
            stringify!($arity),
            " with fields stored once behind a shared buffer.",
        )]
        ///
        /// Clones are reference-count bumps only. Setters promote the
        /// buffer to unique ownership before mutating (copy-on-write),
        /// so no clone ever observes another handle's mutation.
        pub struct $cow<$($T),+> {
            shared: Arc<$inline<$($T),+>>,
        }

        impl<$($T),+> $cow<$($T),+> {
            /// Number of fields.
            pub const ARITY: usize = $arity;

            #[doc = concat!(
                "Builds a tuple from exactly ",
                stringify!($arity),
                " values in a freshly-owned buffer.",
            )]
            pub fn new($($f: $T),+) -> Self {
                Self {
                    shared: Arc::new($inline::new($($f),+)),
                }
            }

            $(
                #[doc = concat!("Field `", stringify!($f), "`.")]
                pub fn $f(&self) -> &$T {
                    &self.shared.$f
                }
            )+

            /// Returns `true` if no other handle shares this buffer.
            ///
            /// A unique handle mutates its buffer in place; a shared one
            /// copies it on the next setter call.
            pub fn is_unique(&self) -> bool {
                Arc::strong_count(&self.shared) == 1
            }
        }

        impl<$($T: Clone),+> $cow<$($T),+> {
            $(
                #[doc = concat!(
                    "Sets field `", stringify!($f),
                    "`, copying the buffer first if it is shared.",
                )]
                pub fn $set(&mut self, value: $T) {
                    Arc::make_mut(&mut self.shared).$f = value;
                }
            )+

            /// Promotes this handle to unique ownership and returns a
            /// mutable reference to the buffered fields.
            ///
            /// The buffer is copied iff it is currently shared.
            pub fn make_mut(&mut self) -> &mut $inline<$($T),+> {
                Arc::make_mut(&mut self.shared)
            }

            /// Copies the fields out into the inline layout, leaving this
            /// handle untouched.
            pub fn to_inline(&self) -> $inline<$($T),+> {
                (*self.shared).clone()
            }
        }

        impl<$($T: Clone + Validity),+> $cow<$($T),+> {
            /// Unwraps into the inline layout, moving the buffer out when
            /// this handle is unique and copying otherwise.
            ///
            /// Debug builds assert the validity invariant on entry and exit.
            pub fn into_inline(self) -> $inline<$($T),+> {
                debug_assert!(self.is_valid(), "invalid tuple entering layout conversion");
                let inline = $inline::from(self);
                debug_assert!(inline.is_valid(), "invalid tuple leaving layout conversion");
                inline
            }
        }

        impl<$($T: Validity),+> $inline<$($T),+> {
            /// Converts into the copy-on-write layout, wrapping the fields
            /// in a freshly-owned shared buffer.
            ///
            /// Debug builds assert the validity invariant on entry and exit.
            pub fn into_cow(self) -> $cow<$($T),+> {
                debug_assert!(self.is_valid(), "invalid tuple entering layout conversion");
                let cow = $cow::from(self);
                debug_assert!(cow.is_valid(), "invalid tuple leaving layout conversion");
                cow
            }
        }

        impl<$($T),+> From<$inline<$($T),+>> for $cow<$($T),+> {
            fn from(inline: $inline<$($T),+>) -> Self {
                Self {
                    shared: Arc::new(inline),
                }
            }
        }

        impl<$($T: Clone),+> From<$cow<$($T),+>> for $inline<$($T),+> {
            fn from(cow: $cow<$($T),+>) -> Self {
                Arc::try_unwrap(cow.shared).unwrap_or_else(|shared| (*shared).clone())
            }
        }

        /// Reference-count bump; the buffer is not copied.
        impl<$($T),+> Clone for $cow<$($T),+> {
            fn clone(&self) -> Self {
                Self {
                    shared: Arc::clone(&self.shared),
                }
            }
        }

        impl<$($T: Default),+> Default for $cow<$($T),+> {
            fn default() -> Self {
                Self::from($inline::default())
            }
        }

        impl<$($T: fmt::Debug),+> fmt::Debug for $cow<$($T),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cow))
                    $( .field(stringify!($f), &self.shared.$f) )+
                    .finish()
            }
        }

        impl<$($T: PartialEq),+> PartialEq for $cow<$($T),+> {
            fn eq(&self, other: &Self) -> bool {
                *self.shared == *other.shared
            }
        }

        impl<$($T: Eq),+> Eq for $cow<$($T),+> {}

        impl<$($T: PartialOrd),+> PartialOrd for $cow<$($T),+> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                (*self.shared).partial_cmp(&*other.shared)
            }
        }

        /// Lexicographic over the buffered fields in declared order.
        impl<$($T: Ord),+> Ord for $cow<$($T),+> {
            fn cmp(&self, other: &Self) -> Ordering {
                (*self.shared).cmp(&*other.shared)
            }
        }

        impl<$($T: Hash),+> Hash for $cow<$($T),+> {
            fn hash<HS: Hasher>(&self, state: &mut HS) {
                (*self.shared).hash(state);
            }
        }

        /// Valid iff the buffered fields are valid.
        impl<$($T: Validity),+> Validity for $cow<$($T),+> {
            fn is_valid(&self) -> bool {
                self.shared.is_valid()
            }
        }

        /// Encodes exactly like the inline layout: a fixed-order keyed
        /// struct, one key per field letter.
        impl<$($T: serde::Serialize),+> serde::Serialize for $cow<$($T),+> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.shared.serialize(serializer)
            }
        }

        impl<'de, $($T: serde::Deserialize<'de>),+> serde::Deserialize<'de> for $cow<$($T),+> {
            fn deserialize<DES: serde::Deserializer<'de>>(deserializer: DES) -> Result<Self, DES::Error> {
                $inline::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

cow_product!(Product2, CowProduct2, 2, (a, set_a, A), (b, set_b, B));
cow_product!(Product3, CowProduct3, 3, (a, set_a, A), (b, set_b, B), (c, set_c, C));
cow_product!(
    Product4, CowProduct4, 4,
    (a, set_a, A), (b, set_b, B), (c, set_c, C), (d, set_d, D)
);
cow_product!(
    Product5, CowProduct5, 5,
    (a, set_a, A), (b, set_b, B), (c, set_c, C), (d, set_d, D), (e, set_e, E)
);
cow_product!(
    Product6, CowProduct6, 6,
    (a, set_a, A), (b, set_b, B), (c, set_c, C), (d, set_d, D), (e, set_e, E), (f, set_f, F)
);
cow_product!(
    Product7, CowProduct7, 7,
    (a, set_a, A), (b, set_b, B), (c, set_c, C), (d, set_d, D), (e, set_e, E), (f, set_f, F),
    (g, set_g, G)
);
cow_product!(
    Product8, CowProduct8, 8,
    (a, set_a, A), (b, set_b, B), (c, set_c, C), (d, set_d, D), (e, set_e, E), (f, set_f, F),
    (g, set_g, G), (h, set_h, H)
);
cow_product!(
    Product9, CowProduct9, 9,
    (a, set_a, A), (b, set_b, B), (c, set_c, C), (d, set_d, D), (e, set_e, E), (f, set_f, F),
    (g, set_g, G), (h, set_h, H), (i, set_i, I)
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_handle_is_unique() {
        let t = CowProduct2::new(1, 2);
        assert!(t.is_unique());
    }

    #[test]
    fn clone_shares_the_buffer() {
        let t = CowProduct2::new(1, 2);
        let u = t.clone();
        assert!(!t.is_unique());
        assert!(!u.is_unique());
        assert_eq!(t, u);
    }

    #[test]
    fn set_on_unique_handle_mutates_in_place() {
        let mut t = CowProduct3::new(1, 2, 3);
        t.set_b(20);
        assert!(t.is_unique());
        assert_eq!(*t.b(), 20);
    }

    #[test]
    fn set_on_shared_handle_copies_before_mutating() {
        let mut t = CowProduct2::new(1, 2);
        let u = t.clone();
        t.set_a(10);
        // The mutation promoted `t` to a private buffer; `u` kept the old one.
        assert!(t.is_unique());
        assert!(u.is_unique());
        assert_eq!(*t.a(), 10);
        assert_eq!(*u.a(), 1);
    }

    #[test]
    fn getters_expose_every_field() {
        let t = CowProduct4::new(1u8, 2u16, 3u32, 4u64);
        assert_eq!(*t.a(), 1);
        assert_eq!(*t.b(), 2);
        assert_eq!(*t.c(), 3);
        assert_eq!(*t.d(), 4);
    }

    #[test]
    fn inline_to_cow_round_trips() {
        let inline = Product3::new(7i32, String::from("x"), true);
        let back = inline.clone().into_cow().into_inline();
        assert_eq!(back, inline);
    }

    #[test]
    fn cow_to_inline_round_trips() {
        let cow = CowProduct2::new(String::from("left"), 9u64);
        let back = cow.clone().into_inline().into_cow();
        assert_eq!(back, cow);
    }

    #[test]
    fn into_inline_on_unique_handle_moves_without_cloning() {
        // A non-Clone-observable move: unique unwrap must succeed even for
        // values whose clone would be detectable, so use a counter.
        #[derive(Debug, PartialEq)]
        struct CloneCounter(std::rc::Rc<std::cell::Cell<usize>>);
        impl Clone for CloneCounter {
            fn clone(&self) -> Self {
                self.0.set(self.0.get() + 1);
                CloneCounter(std::rc::Rc::clone(&self.0))
            }
        }
        impl Validity for CloneCounter {
            fn is_valid(&self) -> bool {
                true
            }
        }

        let clones = std::rc::Rc::new(std::cell::Cell::new(0));
        let cow = CowProduct2::new(CloneCounter(std::rc::Rc::clone(&clones)), 1u8);
        let _inline = cow.into_inline();
        assert_eq!(clones.get(), 0);
    }

    #[test]
    fn ordering_matches_inline_layout() {
        let lo = CowProduct2::new(1, 9);
        let hi = CowProduct2::new(2, 0);
        assert!(lo < hi && hi > lo);
        assert!(lo <= hi && hi >= lo);
        assert_eq!(lo.cmp(&hi), Ordering::Less);
    }

    #[test]
    fn hashing_agrees_with_equality() {
        let mut set = std::collections::HashSet::new();
        set.insert(CowProduct2::new(1, 2));
        set.insert(CowProduct2::new(1, 2));
        set.insert(CowProduct2::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn default_delegates_to_field_defaults() {
        let t: CowProduct2<u32, String> = CowProduct2::default();
        assert_eq!(*t.a(), 0);
        assert_eq!(t.b(), "");
    }

    #[test]
    fn debug_lists_fields_by_letter() {
        let t = CowProduct2::new(1, 2);
        let s = format!("{t:?}");
        assert!(s.contains("CowProduct2"), "debug was: {s}");
        assert!(s.contains("a: 1") && s.contains("b: 2"), "debug was: {s}");
    }

    // ── serde ────────────────────────────────────────────────────

    #[test]
    fn encodes_identically_to_inline_layout() {
        let inline = Product3::new(1, 2, 3);
        let cow = CowProduct3::new(1, 2, 3);
        assert_eq!(
            serde_json::to_string(&cow).unwrap(),
            serde_json::to_string(&inline).unwrap(),
        );
    }

    #[test]
    fn decode_round_trips_through_a_fresh_buffer() {
        let cow = CowProduct2::new(String::from("k"), 5i32);
        let json = serde_json::to_string(&cow).unwrap();
        let back: CowProduct2<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cow);
        assert!(back.is_unique());
    }

    #[test]
    fn decode_missing_key_fails() {
        assert!(serde_json::from_str::<CowProduct2<i32, i32>>(r#"{"a":1}"#).is_err());
    }

    // ── validity gating ──────────────────────────────────────────

    struct Checked(i32);
    impl Validity for Checked {
        fn is_valid(&self) -> bool {
            self.0 >= 0
        }
    }
    impl Clone for Checked {
        fn clone(&self) -> Self {
            Checked(self.0)
        }
    }

    #[test]
    fn validity_delegates_to_buffer() {
        assert!(CowProduct2::new(Checked(1), Checked(0)).is_valid());
        assert!(!CowProduct2::new(Checked(1), Checked(-1)).is_valid());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "invalid tuple entering layout conversion")]
    fn debug_build_rejects_invalid_tuple_at_conversion() {
        let _ = Product2::new(Checked(-1), Checked(0)).into_cow();
    }

    // ── property tests ───────────────────────────────────────────

    proptest! {
        #[test]
        fn round_trip_preserves_fields(a in any::<i64>(), b in any::<String>(), c in any::<bool>()) {
            let inline = Product3::new(a, b.clone(), c);
            let via_cow = inline.clone().into_cow().into_inline();
            prop_assert_eq!(via_cow, inline);

            let cow = CowProduct3::new(a, b, c);
            let via_inline = cow.clone().into_inline().into_cow();
            prop_assert_eq!(via_inline, cow);
        }

        #[test]
        fn shared_mutation_never_leaks_into_clones(a in any::<i32>(), b in any::<i32>(), next in any::<i32>()) {
            let mut t = CowProduct2::new(a, b);
            let u = t.clone();
            t.set_a(next);
            prop_assert_eq!(*u.a(), a);
            prop_assert_eq!(*t.a(), next);
            prop_assert_eq!(*t.b(), b);
        }
    }
}
