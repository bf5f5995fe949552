//! Element-wise zipped products: like the plain Cartesian product, but
//! element `i` pairs the `i`-th element of every source, and the
//! collection stops at the shortest dimension.

use std::fmt;
use std::sync::OnceLock;

use weft_core::{
    Product2, Product3, Product4, Product5, Product6, Product7, Product8, Product9,
};

use crate::index::DiagonalIndex;
use crate::macros::{one_usize, same_expr};
use crate::sequence::{SeqIter, Sequence};

/// Generates one zipped-product collection type.
macro_rules! zip_family {
    (
        $name:ident, $product:ident, $arity:literal,
        $( ($S:ident, $s:ident, $i:tt) ),+ $(,)?
    ) => {
        #[doc = concat!(
            "The element-wise pairing of ",
            stringify!($arity),
            " sequences, truncated to the shortest.",
        )]
        ///
        /// Element `i` packages the `i`-th element of every source as a
        /// tuple. The index position is the diagonal coordinate tuple
        /// `(i, ..., i)`; only the first coordinate participates in
        /// index equality and ordering, the rest being copies of it.
        pub struct $name<$($S),+> {
            sources: ($($S,)+),
            shortest: OnceLock<usize>,
        }

        impl<$($S: Sequence),+> $name<$($S),+> {
            /// Composes the source sequences.
            pub fn new($($s: $S),+) -> Self {
                Self {
                    sources: ($($s,)+),
                    shortest: OnceLock::new(),
                }
            }

            /// Borrows the composed sources.
            pub fn sources(&self) -> &($($S,)+) {
                &self.sources
            }

            /// Number of tuples: the shortest dimension length,
            /// memoized on first access.
            pub fn len(&self) -> usize {
                *self.shortest.get_or_init(|| {
                    let lens = [$( self.sources.$i.len() ),+];
                    lens.into_iter().min().unwrap_or(0)
                })
            }

            /// `true` iff some dimension is empty.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// The tuple at offset `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            pub fn get(&self, index: usize) -> $product<$($S::Item),+> {
                assert!(
                    index < self.len(),
                    "index {index} out of range for {} elements",
                    self.len(),
                );
                $product::new($( self.sources.$i.get(index) ),+)
            }

            /// The index at offset `linear`; `len()` gives the
            /// one-past-the-end index.
            ///
            /// # Panics
            ///
            /// Panics if `linear > len()`.
            pub fn index_at(
                &self,
                linear: usize,
            ) -> DiagonalIndex<$product<$( one_usize!($S) ),+>> {
                assert!(
                    linear <= self.len(),
                    "offset {linear} past the end index {}",
                    self.len(),
                );
                DiagonalIndex::new($product::new($( same_expr!($S, linear) ),+), linear)
            }

            /// The index of the first tuple.
            pub fn start_index(&self) -> DiagonalIndex<$product<$( one_usize!($S) ),+>> {
                self.index_at(0)
            }

            /// The index one past the last tuple.
            pub fn end_index(&self) -> DiagonalIndex<$product<$( one_usize!($S) ),+>> {
                self.index_at(self.len())
            }

            /// The index `by` places away from `index`. O(1).
            ///
            /// # Panics
            ///
            /// Panics if the target falls outside `0..=len()`.
            pub fn offset_index(
                &self,
                index: &DiagonalIndex<$product<$( one_usize!($S) ),+>>,
                by: isize,
            ) -> DiagonalIndex<$product<$( one_usize!($S) ),+>> {
                let target = index
                    .linear()
                    .checked_add_signed(by)
                    .unwrap_or_else(|| {
                        panic!("offset {by} from linear {} underflows", index.linear())
                    });
                self.index_at(target)
            }

            /// The index immediately after `index`.
            pub fn index_after(
                &self,
                index: &DiagonalIndex<$product<$( one_usize!($S) ),+>>,
            ) -> DiagonalIndex<$product<$( one_usize!($S) ),+>> {
                self.offset_index(index, 1)
            }

            /// Signed distance from `from` to `to`. O(1); antisymmetric.
            pub fn distance(
                &self,
                from: &DiagonalIndex<$product<$( one_usize!($S) ),+>>,
                to: &DiagonalIndex<$product<$( one_usize!($S) ),+>>,
            ) -> isize {
                to.linear() as isize - from.linear() as isize
            }

            /// Iterates the tuples front to back.
            pub fn iter(&self) -> SeqIter<'_, Self> {
                SeqIter::new(self)
            }
        }

        impl<$($S: Sequence),+> Sequence for $name<$($S),+> {
            type Item = $product<$($S::Item),+>;

            fn len(&self) -> usize {
                $name::len(self)
            }

            fn get(&self, index: usize) -> Self::Item {
                $name::get(self, index)
            }

            fn prepare(&self) {
                let _ = self.len();
                debug_assert!(self.shortest.get().is_some(), "length cache not populated");
            }
        }

        impl<'a, $($S: Sequence),+> IntoIterator for &'a $name<$($S),+> {
            type Item = $product<$($S::Item),+>;
            type IntoIter = SeqIter<'a, $name<$($S),+>>;

            fn into_iter(self) -> Self::IntoIter {
                SeqIter::new(self)
            }
        }

        impl<$($S: Sequence),+> fmt::Debug for $name<$($S),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("arity", &$arity)
                    .field("shortest", &self.shortest.get())
                    .finish()
            }
        }
    };
}

zip_family!(Zip2, Product2, 2, (S0, s0, 0), (S1, s1, 1));
zip_family!(Zip3, Product3, 3, (S0, s0, 0), (S1, s1, 1), (S2, s2, 2));
zip_family!(Zip4, Product4, 4, (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3));
zip_family!(
    Zip5, Product5, 5,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4)
);
zip_family!(
    Zip6, Product6, 6,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5)
);
zip_family!(
    Zip7, Product7, 7,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5), (S6, s6, 6)
);
zip_family!(
    Zip8, Product8, 8,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5), (S6, s6, 6),
    (S7, s7, 7)
);
zip_family!(
    Zip9, Product9, 9,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5), (S6, s6, 6),
    (S7, s7, 7), (S8, s8, 8)
);
