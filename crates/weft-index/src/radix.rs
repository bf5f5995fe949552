//! Mixed-radix decomposition of linear offsets into coordinate vectors.

use crate::error::IndexError;
use smallvec::{smallvec, SmallVec};

/// A coordinate vector, one entry per dimension.
///
/// Stays on the stack for up to 8 dimensions and spills to the heap
/// transparently above that.
pub type Coords = SmallVec<[usize; 8]>;

/// Per-dimension extents with precomputed row-major strides.
///
/// Treats the extents `(c_0, ..., c_{n-1})` as the radices of a
/// mixed-radix number system: a linear offset `L` in `0..total()`
/// decomposes into coordinates `(i_0, ..., i_{n-1})` with
/// `L = sum(i_k * stride_k)` where `stride_k` is the product of the
/// extents to the right of `k`. The leftmost dimension is the most
/// significant; the rightmost varies fastest.
///
/// The offset-to-coordinate map is a bijection from `0..total()` onto
/// the full coordinate box, and coordinate vectors compare
/// lexicographically in the same order as their offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixMap {
    extents: SmallVec<[usize; 8]>,
    strides: SmallVec<[usize; 8]>,
    total: usize,
}

impl RadixMap {
    /// Builds a map from per-dimension extents.
    ///
    /// Returns [`IndexError::NoDimensions`] for an empty extent list and
    /// [`IndexError::ExtentOverflow`] when the extent product does not
    /// fit in `usize`. A zero extent anywhere is fine: it makes the
    /// whole box empty (`total() == 0`).
    pub fn new(extents: impl IntoIterator<Item = usize>) -> Result<Self, IndexError> {
        let extents: SmallVec<[usize; 8]> = extents.into_iter().collect();
        if extents.is_empty() {
            return Err(IndexError::NoDimensions);
        }

        let mut total: usize = 1;
        for &extent in &extents {
            total = total
                .checked_mul(extent)
                .ok_or_else(|| IndexError::ExtentOverflow {
                    extents: extents.to_vec(),
                })?;
        }

        // strides[k] = product(extents[j] for j > k); rightmost dimension
        // varies fastest.
        let n = extents.len();
        let mut strides: SmallVec<[usize; 8]> = smallvec![1; n];
        for k in (0..n.saturating_sub(1)).rev() {
            strides[k] = strides[k + 1] * extents[k + 1];
        }

        Ok(Self {
            extents,
            strides,
            total,
        })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// The per-dimension extents.
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// The extent of dimension `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= ndim()`.
    pub fn extent(&self, k: usize) -> usize {
        self.extents[k]
    }

    /// Total number of cells: the product of all extents. Zero if any
    /// dimension is empty.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if the coordinate box holds no cells.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Flattens a coordinate vector into its linear offset.
    ///
    /// # Panics
    ///
    /// Panics if `coords` has the wrong dimensionality. Per-coordinate
    /// bounds are a debug-only assertion: callers are expected to pass
    /// coordinates inside the box.
    pub fn linearize(&self, coords: &[usize]) -> usize {
        assert_eq!(
            coords.len(),
            self.extents.len(),
            "coordinate dimensionality {} does not match radix map dimensionality {}",
            coords.len(),
            self.extents.len(),
        );
        debug_assert!(
            coords.iter().zip(&self.extents).all(|(c, e)| c < e),
            "coordinate {coords:?} outside extents {:?}",
            self.extents,
        );
        coords
            .iter()
            .zip(&self.strides)
            .map(|(coord, stride)| coord * stride)
            .sum()
    }

    /// Decomposes a linear offset into its coordinate vector.
    ///
    /// # Panics
    ///
    /// Panics if `linear >= total()`; an empty box has no decomposable
    /// offsets at all.
    pub fn delinearize(&self, linear: usize) -> Coords {
        assert!(
            linear < self.total,
            "linear offset {linear} out of range for {} cells",
            self.total,
        );
        self.extents
            .iter()
            .zip(&self.strides)
            .map(|(extent, stride)| (linear / stride) % extent)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strides_make_the_rightmost_dimension_fastest() {
        let map = RadixMap::new([2, 3, 4]).unwrap();
        assert_eq!(map.total(), 24);
        // Offsets 0 and 1 differ only in the last coordinate.
        assert_eq!(map.delinearize(0).as_slice(), &[0, 0, 0]);
        assert_eq!(map.delinearize(1).as_slice(), &[0, 0, 1]);
        assert_eq!(map.delinearize(4).as_slice(), &[0, 1, 0]);
        assert_eq!(map.delinearize(12).as_slice(), &[1, 0, 0]);
        assert_eq!(map.delinearize(23).as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn offset_coordinate_map_is_a_bijection() {
        let map = RadixMap::new([3, 2, 5]).unwrap();
        let mut seen = std::collections::HashSet::new();
        for linear in 0..map.total() {
            let coords = map.delinearize(linear);
            assert_eq!(map.linearize(&coords), linear);
            assert!(seen.insert(coords.to_vec()), "duplicate {coords:?}");
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn coordinate_order_is_lexicographic() {
        let map = RadixMap::new([2, 3]).unwrap();
        let all: Vec<_> = (0..map.total()).map(|l| map.delinearize(l).to_vec()).collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ],
        );
    }

    #[test]
    fn zero_extent_empties_the_whole_box() {
        let map = RadixMap::new([2, 0, 1_000_000]).unwrap();
        assert_eq!(map.total(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn single_dimension_is_the_identity_map() {
        let map = RadixMap::new([7]).unwrap();
        for linear in 0..7 {
            assert_eq!(map.delinearize(linear).as_slice(), &[linear]);
            assert_eq!(map.linearize(&[linear]), linear);
        }
    }

    #[test]
    fn empty_extent_list_is_rejected() {
        assert_eq!(RadixMap::new([0usize; 0]), Err(IndexError::NoDimensions));
    }

    #[test]
    fn extent_product_overflow_is_rejected() {
        let err = RadixMap::new([usize::MAX, 2]).unwrap_err();
        assert!(matches!(err, IndexError::ExtentOverflow { .. }));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn delinearize_past_the_end_panics() {
        let map = RadixMap::new([2, 3]).unwrap();
        let _ = map.delinearize(6);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn empty_box_has_no_decomposable_offsets() {
        let map = RadixMap::new([2, 0]).unwrap();
        let _ = map.delinearize(0);
    }

    #[test]
    #[should_panic(expected = "dimensionality")]
    fn linearize_rejects_wrong_dimensionality() {
        let map = RadixMap::new([2, 3]).unwrap();
        let _ = map.linearize(&[1]);
    }

    proptest! {
        #[test]
        fn round_trip_over_random_extents(
            extents in proptest::collection::vec(1usize..6, 1..5),
            seed in any::<usize>(),
        ) {
            let map = RadixMap::new(extents).unwrap();
            let linear = seed % map.total();
            let coords = map.delinearize(linear);
            prop_assert_eq!(map.linearize(&coords), linear);
        }

        #[test]
        fn adjacent_offsets_differ_in_lexicographic_order(
            extents in proptest::collection::vec(1usize..5, 2..4),
            seed in any::<usize>(),
        ) {
            let map = RadixMap::new(extents).unwrap();
            prop_assume!(map.total() >= 2);
            let linear = seed % (map.total() - 1);
            let lo = map.delinearize(linear).to_vec();
            let hi = map.delinearize(linear + 1).to_vec();
            prop_assert!(lo < hi);
        }
    }
}
