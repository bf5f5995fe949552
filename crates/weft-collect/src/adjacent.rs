//! Adjacent-window collections: every length-N run of consecutive
//! elements of one source sequence.

use std::fmt;
use std::sync::OnceLock;

use weft_core::{
    Product2, Product3, Product4, Product5, Product6, Product7, Product8, Product9,
};

use crate::index::WindowIndex;
use crate::macros::one_usize;
use crate::sequence::{SeqIter, Sequence};

/// Generates one adjacent-window collection type.
macro_rules! adjacent_family {
    (
        $name:ident, $product:ident, $arity:literal,
        $( $i:tt ),+ $(,)?
    ) => {
        #[doc = concat!(
            "Every run of ",
            stringify!($arity),
            " consecutive elements of one sequence, as a random-access collection of ",
            stringify!($arity),
            "-tuples.",
        )]
        ///
        /// Window `i` covers source offsets `i..i+N`; a source shorter
        /// than N yields no windows at all. The index position is the
        /// strictly-increasing coordinate run itself, and only its
        /// first coordinate participates in index equality and
        /// ordering.
        pub struct $name<S> {
            source: S,
            windows: OnceLock<usize>,
        }

        impl<S: Sequence> $name<S> {
            /// Wraps the source sequence.
            pub fn new(source: S) -> Self {
                Self {
                    source,
                    windows: OnceLock::new(),
                }
            }

            /// Borrows the underlying sequence.
            pub fn source(&self) -> &S {
                &self.source
            }

            /// Number of windows: `source.len() - (N - 1)`, saturating
            /// at zero. Memoized on first access.
            pub fn len(&self) -> usize {
                *self
                    .windows
                    .get_or_init(|| self.source.len().saturating_sub($arity - 1))
            }

            /// `true` iff the source is shorter than the window width.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// The window starting at source offset `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= len()`.
            pub fn get(&self, index: usize) -> $product<$( one_item!(S, $i) ),+> {
                assert!(
                    index < self.len(),
                    "window {index} out of range for {} windows",
                    self.len(),
                );
                $product::new($( self.source.get(index + $i) ),+)
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
            ) -> WindowIndex<$product<$( one_usize!($i) ),+>> {
                assert!(
                    linear <= self.len(),
                    "offset {linear} past the end index {}",
                    self.len(),
                );
                WindowIndex::new($product::new($( linear + $i ),+), linear)
            }

            /// The index of the first window.
            pub fn start_index(&self) -> WindowIndex<$product<$( one_usize!($i) ),+>> {
                self.index_at(0)
            }

            /// The index one past the last window.
            pub fn end_index(&self) -> WindowIndex<$product<$( one_usize!($i) ),+>> {
                self.index_at(self.len())
            }

            /// The index `by` places away from `index`. O(1).
            ///
            /// # Panics
            ///
            /// Panics if the target falls outside `0..=len()`.
            pub fn offset_index(
                &self,
                index: &WindowIndex<$product<$( one_usize!($i) ),+>>,
                by: isize,
            ) -> WindowIndex<$product<$( one_usize!($i) ),+>> {
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
                index: &WindowIndex<$product<$( one_usize!($i) ),+>>,
            ) -> WindowIndex<$product<$( one_usize!($i) ),+>> {
                self.offset_index(index, 1)
            }

            /// Signed distance from `from` to `to`. O(1); antisymmetric.
            pub fn distance(
                &self,
                from: &WindowIndex<$product<$( one_usize!($i) ),+>>,
                to: &WindowIndex<$product<$( one_usize!($i) ),+>>,
            ) -> isize {
                to.linear() as isize - from.linear() as isize
            }

            /// Iterates the windows front to back.
            pub fn iter(&self) -> SeqIter<'_, Self> {
                SeqIter::new(self)
            }
        }

        impl<S: Sequence> Sequence for $name<S> {
            type Item = $product<$( one_item!(S, $i) ),+>;

            fn len(&self) -> usize {
                $name::len(self)
            }

            fn get(&self, index: usize) -> Self::Item {
                $name::get(self, index)
            }

            fn prepare(&self) {
                let _ = self.len();
                debug_assert!(self.windows.get().is_some(), "window cache not populated");
            }
        }

        impl<'a, S: Sequence> IntoIterator for &'a $name<S> {
            type Item = $product<$( one_item!(S, $i) ),+>;
            type IntoIter = SeqIter<'a, $name<S>>;

            fn into_iter(self) -> Self::IntoIter {
                SeqIter::new(self)
            }
        }

        impl<S: Sequence> fmt::Debug for $name<S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("width", &$arity)
                    .field("windows", &self.windows.get())
                    .finish()
            }
        }
    };
}

/// Substitutes a captured fragment with the source's item type; used to
/// spell the homogeneous window tuple.
macro_rules! one_item {
    ($S:ident, $_i:tt) => {
        $S::Item
    };
}

adjacent_family!(Adjacent2, Product2, 2, 0, 1);
adjacent_family!(Adjacent3, Product3, 3, 0, 1, 2);
adjacent_family!(Adjacent4, Product4, 4, 0, 1, 2, 3);
adjacent_family!(Adjacent5, Product5, 5, 0, 1, 2, 3, 4);
adjacent_family!(Adjacent6, Product6, 6, 0, 1, 2, 3, 4, 5);
adjacent_family!(Adjacent7, Product7, 7, 0, 1, 2, 3, 4, 5, 6);
adjacent_family!(Adjacent8, Product8, 8, 0, 1, 2, 3, 4, 5, 6, 7);
adjacent_family!(Adjacent9, Product9, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_cover_consecutive_runs() {
        let w = Adjacent2::new(vec![1, 2, 3, 4]);
        assert_eq!(w.len(), 3);
        let pairs: Vec<_> = w.iter().map(|t| (t.a, t.b)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn wider_windows_shrink_the_count() {
        let w = Adjacent4::new(0u8..6);
        assert_eq!(w.len(), 3);
        assert_eq!(w.get(2), Product4::new(2, 3, 4, 5));
    }

    #[test]
    fn source_shorter_than_the_window_is_empty() {
        let w = Adjacent3::new(vec![1, 2]);
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
        assert_eq!(w.start_index(), w.end_index());
    }

    #[test]
    fn index_positions_are_strictly_increasing_runs() {
        let w = Adjacent3::new(0u8..9);
        let idx = w.index_at(4);
        assert_eq!(*idx.position(), Product3::new(4, 5, 6));
        assert_eq!(idx.start(), 4);
    }

    #[test]
    fn indices_compare_by_window_start() {
        let w = Adjacent2::new(0u8..5);
        let a = w.index_at(1);
        let b = w.index_at(3);
        assert!(a < b && b > a);
        assert_eq!(w.distance(&a, &b), 2);
        assert_eq!(w.distance(&b, &a), -2);
        assert_eq!(w.offset_index(&a, 2), b);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn window_past_the_end_panics() {
        let w = Adjacent2::new(vec![1, 2, 3]);
        let _ = w.get(2);
    }
}
