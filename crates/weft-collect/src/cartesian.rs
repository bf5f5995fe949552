//! Flattened Cartesian products of N random-access sequences.
//!
//! `CartesianN` composes N sequences and presents every combination of
//! one element per source as a single random-access collection of
//! N-tuples, ordered row-major: the leftmost dimension varies slowest,
//! the rightmost fastest. Dimension lengths and the radix layout are
//! memoized on first access; [`Sequence::prepare`] forces them eagerly
//! for concurrent traversals.

use std::fmt;
use std::sync::OnceLock;

use weft_core::{
    Product2, Product3, Product4, Product5, Product6, Product7, Product8, Product9,
};
use weft_index::RadixMap;

use crate::index::ProductIndex;
use crate::macros::one_usize;
use crate::sequence::{SeqIter, Sequence};

/// Generates one Cartesian-product collection type.
macro_rules! cartesian_family {
    (
        $name:ident, $product:ident, $arity:literal,
        $( ($S:ident, $s:ident, $i:tt) ),+ $(,)?
    ) => {
        #[doc = concat!(
            "The Cartesian product of ",
            stringify!($arity),
            " sequences, flattened into a random-access collection of ",
            stringify!($arity),
            "-tuples.",
        )]
        ///
        /// The element at linear offset `L` is found by mixed-radix
        /// decomposition of `L` over the dimension lengths; the map
        /// between offsets and coordinate vectors is a bijection, and
        /// iteration order is lexicographic in the coordinates. If any
        /// dimension is empty the whole product is empty, regardless of
        /// the other dimensions.
        ///
        /// The collection is immutable as a whole: sources are held by
        /// value and never mutated through it.
        pub struct $name<$($S),+> {
            sources: ($($S,)+),
            extents: [OnceLock<usize>; $arity],
            layout: OnceLock<RadixMap>,
        }

        impl<$($S: Sequence),+> $name<$($S),+> {
            /// Composes the source sequences. Nothing is computed until
            /// first access.
            pub fn new($($s: $S),+) -> Self {
                Self {
                    sources: ($($s,)+),
                    extents: std::array::from_fn(|_| OnceLock::new()),
                    layout: OnceLock::new(),
                }
            }

            /// Borrows the composed sources.
            pub fn sources(&self) -> &($($S,)+) {
                &self.sources
            }

            /// The length of dimension `k`, memoized on first access.
            ///
            /// # Panics
            ///
            /// Panics if `k` is not a dimension of this product.
            pub fn extent(&self, k: usize) -> usize {
                match k {
                    $( $i => *self.extents[$i].get_or_init(|| self.sources.$i.len()), )+
                    _ => panic!("dimension {k} out of range for arity {}", $arity),
                }
            }

            /// The memoized radix layout over all dimension lengths.
            fn layout(&self) -> &RadixMap {
                self.layout.get_or_init(|| {
                    RadixMap::new([$( self.extent($i) ),+])
                        .expect("product of dimension lengths overflows usize")
                })
            }

            /// Total number of tuples: the product of all dimension
            /// lengths. O(1) once the layout cache is populated.
            pub fn len(&self) -> usize {
                self.layout().total()
            }

            /// `true` iff any dimension is empty.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// The tuple at linear offset `linear`.
            ///
            /// # Panics
            ///
            /// Panics if `linear >= len()`; an empty product has no
            /// addressable tuples at all.
            pub fn get(&self, linear: usize) -> $product<$($S::Item),+> {
                let coords = self.layout().delinearize(linear);
                $product::new($( self.sources.$i.get(coords[$i]) ),+)
            }

            /// The tuple at `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index` is the one-past-the-end index.
            pub fn at(
                &self,
                index: &ProductIndex<$product<$( one_usize!($S) ),+>>,
            ) -> $product<$($S::Item),+> {
                self.get(index.linear())
            }

            /// The coordinate position for `linear` in `0..=len()`;
            /// `len()` maps to the one-past-the-end position.
            fn position_of(&self, linear: usize) -> $product<$( one_usize!($S) ),+> {
                let len = self.len();
                if linear == len {
                    let mut coords = [0usize; $arity];
                    if len > 0 {
                        coords[0] = self.extent(0);
                    }
                    return $product::from_array(coords);
                }
                let coords = self.layout().delinearize(linear);
                $product::new($( coords[$i] ),+)
            }

            /// The index at linear offset `linear`; `len()` gives the
            /// one-past-the-end index.
            ///
            /// # Panics
            ///
            /// Panics if `linear > len()`.
            pub fn index_at(
                &self,
                linear: usize,
            ) -> ProductIndex<$product<$( one_usize!($S) ),+>> {
                assert!(
                    linear <= self.len(),
                    "linear offset {linear} past the end index {}",
                    self.len(),
                );
                ProductIndex::new(self.position_of(linear), linear)
            }

            /// The index of the first tuple; equals
            /// [`end_index`](Self::end_index) when the product is empty.
            pub fn start_index(&self) -> ProductIndex<$product<$( one_usize!($S) ),+>> {
                self.index_at(0)
            }

            /// The index one past the last tuple.
            pub fn end_index(&self) -> ProductIndex<$product<$( one_usize!($S) ),+>> {
                self.index_at(self.len())
            }

            /// Builds the index for a coordinate position, flattening it
            /// through the dimension lengths.
            pub fn index_of(
                &self,
                position: $product<$( one_usize!($S) ),+>,
            ) -> ProductIndex<$product<$( one_usize!($S) ),+>> {
                let linear = self.layout().linearize(&position.into_array());
                ProductIndex::new(position, linear)
            }

            /// The index `by` places away from `index`. O(1): operates
            /// on the cached linear offset, not by walking coordinates.
            ///
            /// # Panics
            ///
            /// Panics if the target falls outside `0..=len()`.
            pub fn offset_index(
                &self,
                index: &ProductIndex<$product<$( one_usize!($S) ),+>>,
                by: isize,
            ) -> ProductIndex<$product<$( one_usize!($S) ),+>> {
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
                index: &ProductIndex<$product<$( one_usize!($S) ),+>>,
            ) -> ProductIndex<$product<$( one_usize!($S) ),+>> {
                self.offset_index(index, 1)
            }

            /// Signed distance from `from` to `to`. O(1) through the
            /// cached linear offsets; antisymmetric.
            pub fn distance(
                &self,
                from: &ProductIndex<$product<$( one_usize!($S) ),+>>,
                to: &ProductIndex<$product<$( one_usize!($S) ),+>>,
            ) -> isize {
                to.linear() as isize - from.linear() as isize
            }

            /// Iterates the tuples in linear (lexicographic) order.
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

            /// Forces every per-dimension length and the radix layout.
            fn prepare(&self) {
                let _ = self.len();
                debug_assert!(
                    self.layout.get().is_some()
                        && [$( self.extents[$i].get().is_some() ),+].iter().all(|p| *p),
                    "length caches not fully populated",
                );
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
                    .field("extents", &self.extents)
                    .field("total", &self.layout.get().map(RadixMap::total))
                    .finish()
            }
        }
    };
}

cartesian_family!(Cartesian2, Product2, 2, (S0, s0, 0), (S1, s1, 1));
cartesian_family!(Cartesian3, Product3, 3, (S0, s0, 0), (S1, s1, 1), (S2, s2, 2));
cartesian_family!(
    Cartesian4, Product4, 4,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3)
);
cartesian_family!(
    Cartesian5, Product5, 5,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4)
);
cartesian_family!(
    Cartesian6, Product6, 6,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5)
);
cartesian_family!(
    Cartesian7, Product7, 7,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5), (S6, s6, 6)
);
cartesian_family!(
    Cartesian8, Product8, 8,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5), (S6, s6, 6),
    (S7, s7, 7)
);
cartesian_family!(
    Cartesian9, Product9, 9,
    (S0, s0, 0), (S1, s1, 1), (S2, s2, 2), (S3, s3, 3), (S4, s4, 4), (S5, s5, 5), (S6, s6, 6),
    (S7, s7, 7), (S8, s8, 8)
);
