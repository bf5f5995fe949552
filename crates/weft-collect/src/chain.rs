//! Chained collections: N sequences concatenated end to end, with a
//! tagged union per element.
//!
//! Unlike the Cartesian family, a chain adds lengths instead of
//! multiplying them. Element types may differ per dimension; every
//! element is wrapped in the matching `SumN` variant, and `contains`
//! dispatches to the source whose variant tag matches.

use std::fmt;
use std::sync::OnceLock;

use weft_core::Product2;

use crate::index::ProductIndex;
use crate::sequence::{SeqIter, Sequence};

/// Generates one tagged-union element type and its chained collection.
macro_rules! chain_family {
    (
        $name:ident, $sum:ident, $arity:literal,
        $( ($S:ident, $s:ident, $V:ident, $i:tt) ),+ $(,)?
    ) => {
        #[doc = concat!(
            "An element of a ",
            stringify!($arity),
            "-way chained collection: one variant per source dimension.",
        )]
        ///
        /// Equality compares the variant tag first; values from
        /// different dimensions are never equal, even when their
        /// payloads would be.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $sum<$($S),+> {
            $(
                #[doc = concat!("Element drawn from dimension ", stringify!($i), ".")]
                $V($S),
            )+
        }

        #[doc = concat!(
            stringify!($arity),
            " sequences concatenated end to end, as a single random-access collection.",
        )]
        ///
        /// The length is the sum of the source lengths; element `L`
        /// resolves to the dimension whose prefix range contains `L`.
        /// The index position is the `(dimension, offset)` pair,
        /// compared lexicographically, so indices order exactly as
        /// their linear offsets do.
        pub struct $name<$($S),+> {
            sources: ($($S,)+),
            extents: [OnceLock<usize>; $arity],
            total: OnceLock<usize>,
        }

        impl<$($S: Sequence),+> $name<$($S),+> {
            /// Composes the source sequences.
            pub fn new($($s: $S),+) -> Self {
                Self {
                    sources: ($($s,)+),
                    extents: std::array::from_fn(|_| OnceLock::new()),
                    total: OnceLock::new(),
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
            /// Panics if `k` is not a dimension of this chain.
            pub fn extent(&self, k: usize) -> usize {
                match k {
                    $( $i => *self.extents[$i].get_or_init(|| self.sources.$i.len()), )+
                    _ => panic!("dimension {k} out of range for arity {}", $arity),
                }
            }

            /// Total number of elements: the sum of all dimension
            /// lengths. Memoized on first access.
            pub fn len(&self) -> usize {
                *self.total.get_or_init(|| {
                    let mut total: usize = 0;
                    for k in 0..$arity {
                        total = total
                            .checked_add(self.extent(k))
                            .expect("sum of dimension lengths overflows usize");
                    }
                    total
                })
            }

            /// `true` iff every dimension is empty.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// The element at linear offset `linear`, tagged with its
            /// source dimension.
            ///
            /// # Panics
            ///
            /// Panics if `linear >= len()`.
            pub fn get(&self, linear: usize) -> $sum<$($S::Item),+> {
                assert!(
                    linear < self.len(),
                    "offset {linear} out of range for {} elements",
                    self.len(),
                );
                let mut rem = linear;
                $(
                    let extent = self.extent($i);
                    if rem < extent {
                        return $sum::$V(self.sources.$i.get(rem));
                    }
                    rem -= extent;
                )+
                unreachable!("offset {rem} left after the last dimension")
            }

            /// The `(dimension, offset)` position for `linear` in
            /// `0..=len()`; `len()` maps to the one-past-the-end
            /// position.
            fn position_of(&self, linear: usize) -> Product2<usize, usize> {
                if linear == self.len() {
                    return Product2::new($arity, 0);
                }
                let mut rem = linear;
                $(
                    let extent = self.extent($i);
                    if rem < extent {
                        return Product2::new($i, rem);
                    }
                    rem -= extent;
                )+
                unreachable!("offset {rem} left after the last dimension")
            }

            /// The index at linear offset `linear`; `len()` gives the
            /// one-past-the-end index.
            ///
            /// # Panics
            ///
            /// Panics if `linear > len()`.
            pub fn index_at(&self, linear: usize) -> ProductIndex<Product2<usize, usize>> {
                assert!(
                    linear <= self.len(),
                    "offset {linear} past the end index {}",
                    self.len(),
                );
                ProductIndex::new(self.position_of(linear), linear)
            }

            /// The index of the first element; equals
            /// [`end_index`](Self::end_index) when every dimension is
            /// empty.
            pub fn start_index(&self) -> ProductIndex<Product2<usize, usize>> {
                self.index_at(0)
            }

            /// The index one past the last element.
            pub fn end_index(&self) -> ProductIndex<Product2<usize, usize>> {
                self.index_at(self.len())
            }

            /// The index `by` places away from `index`. O(1) through
            /// the cached linear offset.
            ///
            /// # Panics
            ///
            /// Panics if the target falls outside `0..=len()`.
            pub fn offset_index(
                &self,
                index: &ProductIndex<Product2<usize, usize>>,
                by: isize,
            ) -> ProductIndex<Product2<usize, usize>> {
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
                index: &ProductIndex<Product2<usize, usize>>,
            ) -> ProductIndex<Product2<usize, usize>> {
                self.offset_index(index, 1)
            }

            /// Signed distance from `from` to `to`. O(1); antisymmetric.
            pub fn distance(
                &self,
                from: &ProductIndex<Product2<usize, usize>>,
                to: &ProductIndex<Product2<usize, usize>>,
            ) -> isize {
                to.linear() as isize - from.linear() as isize
            }

            /// Iterates the elements front to back, dimension by
            /// dimension.
            pub fn iter(&self) -> SeqIter<'_, Self> {
                SeqIter::new(self)
            }
        }

        impl<$($S: Sequence),+> $name<$($S),+>
        where
            $($S::Item: PartialEq,)+
        {
            /// Returns `true` if the dimension matching the element's
            /// variant tag holds an equal value.
            ///
            /// Only that one dimension is searched: a payload that
            /// exists in a different dimension does not count.
            pub fn contains(&self, element: &$sum<$($S::Item),+>) -> bool {
                match element {
                    $(
                        $sum::$V(value) => {
                            let extent = self.extent($i);
                            (0..extent).any(|j| self.sources.$i.get(j) == *value)
                        }
                    )+
                }
            }
        }

        impl<$($S: Sequence),+> Sequence for $name<$($S),+> {
            type Item = $sum<$($S::Item),+>;

            fn len(&self) -> usize {
                $name::len(self)
            }

            fn get(&self, index: usize) -> Self::Item {
                $name::get(self, index)
            }

            fn prepare(&self) {
                let _ = self.len();
                debug_assert!(
                    self.total.get().is_some()
                        && [$( self.extents[$i].get().is_some() ),+].iter().all(|p| *p),
                    "length caches not fully populated",
                );
            }
        }

        impl<'a, $($S: Sequence),+> IntoIterator for &'a $name<$($S),+> {
            type Item = $sum<$($S::Item),+>;
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
                    .field("total", &self.total.get())
                    .finish()
            }
        }
    };
}

chain_family!(Chain2, Sum2, 2, (S0, s0, A, 0), (S1, s1, B, 1));
chain_family!(Chain3, Sum3, 3, (S0, s0, A, 0), (S1, s1, B, 1), (S2, s2, C, 2));
chain_family!(
    Chain4, Sum4, 4,
    (S0, s0, A, 0), (S1, s1, B, 1), (S2, s2, C, 2), (S3, s3, D, 3)
);
chain_family!(
    Chain5, Sum5, 5,
    (S0, s0, A, 0), (S1, s1, B, 1), (S2, s2, C, 2), (S3, s3, D, 3), (S4, s4, E, 4)
);
chain_family!(
    Chain6, Sum6, 6,
    (S0, s0, A, 0), (S1, s1, B, 1), (S2, s2, C, 2), (S3, s3, D, 3), (S4, s4, E, 4),
    (S5, s5, F, 5)
);
chain_family!(
    Chain7, Sum7, 7,
    (S0, s0, A, 0), (S1, s1, B, 1), (S2, s2, C, 2), (S3, s3, D, 3), (S4, s4, E, 4),
    (S5, s5, F, 5), (S6, s6, G, 6)
);
chain_family!(
    Chain8, Sum8, 8,
    (S0, s0, A, 0), (S1, s1, B, 1), (S2, s2, C, 2), (S3, s3, D, 3), (S4, s4, E, 4),
    (S5, s5, F, 5), (S6, s6, G, 6), (S7, s7, H, 7)
);
chain_family!(
    Chain9, Sum9, 9,
    (S0, s0, A, 0), (S1, s1, B, 1), (S2, s2, C, 2), (S3, s3, D, 3), (S4, s4, E, 4),
    (S5, s5, F, 5), (S6, s6, G, 6), (S7, s7, H, 7), (S8, s8, I, 8)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_dimension_by_dimension() {
        let c = Chain2::new(vec![1i32, 2], 10u8..13);
        assert_eq!(c.len(), 5);
        let all: Vec<_> = c.iter().collect();
        assert_eq!(
            all,
            vec![
                Sum2::A(1),
                Sum2::A(2),
                Sum2::B(10),
                Sum2::B(11),
                Sum2::B(12),
            ],
        );
    }

    #[test]
    fn empty_dimensions_are_skipped() {
        let c = Chain3::new(vec![1], Vec::<i32>::new(), vec![7, 8]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.get(0), Sum3::A(1));
        assert_eq!(c.get(1), Sum3::C(7));
        assert_eq!(c.get(2), Sum3::C(8));
    }

    #[test]
    fn all_dimensions_empty_is_empty() {
        let c = Chain2::new(Vec::<u8>::new(), 0u8..0);
        assert!(c.is_empty());
        assert_eq!(c.start_index(), c.end_index());
    }

    #[test]
    fn positions_carry_dimension_and_offset() {
        let c = Chain2::new(vec![1, 2, 3], vec![9]);
        assert_eq!(*c.index_at(1).position(), Product2::new(0, 1));
        assert_eq!(*c.index_at(3).position(), Product2::new(1, 0));
        let end = c.end_index();
        assert_eq!(*end.position(), Product2::new(2, 0));
        assert!(c.index_at(3) < end);
    }

    #[test]
    fn indices_order_across_dimension_boundaries() {
        let c = Chain2::new(vec![1, 2], vec![3, 4]);
        let indices: Vec<_> = (0..=c.len()).map(|l| c.index_at(l)).collect();
        for pair in indices.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn index_arithmetic_is_coherent() {
        let c = Chain2::new(vec![1, 2], vec![3, 4, 5]);
        let start = c.start_index();
        let end = c.end_index();
        assert_eq!(c.distance(&start, &end), 5);
        assert_eq!(c.distance(&end, &start), -5);
        let mid = c.offset_index(&start, 3);
        assert_eq!(*mid.position(), Product2::new(1, 1));
        assert_eq!(c.offset_index(&mid, -3), start);
    }

    #[test]
    fn contains_dispatches_by_variant_tag() {
        let c = Chain2::new(vec![1i32, 2], vec![2i32, 9]);
        assert!(c.contains(&Sum2::A(1)));
        assert!(c.contains(&Sum2::B(9)));
        // 9 lives only in dimension 1; the A variant never finds it.
        assert!(!c.contains(&Sum2::A(9)));
        // 2 exists in both dimensions, reachable through either tag.
        assert!(c.contains(&Sum2::A(2)));
        assert!(c.contains(&Sum2::B(2)));
    }

    #[test]
    fn cross_dimension_payloads_are_never_equal() {
        let a: Sum2<i32, i32> = Sum2::A(5);
        let b: Sum2<i32, i32> = Sum2::B(5);
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_past_the_end_panics() {
        let c = Chain2::new(vec![1], vec![2]);
        let _ = c.get(2);
    }
}
