//! Index newtypes: each collection family picks which coordinates of
//! its position tuple participate in equality and ordering.
//!
//! All three wrap [`PositionIndex`] and derive their operators from a
//! single three-way comparison per call.

use std::cmp::Ordering;

use weft_core::{FixedArity, Validity};
use weft_index::PositionIndex;

/// Index of a Cartesian-product or chained collection: every
/// coordinate participates, lexicographically, first coordinate most
/// significant.
///
/// Under the row-major radix convention this order coincides with
/// linear-offset order.
#[derive(Clone, Copy, Debug)]
pub struct ProductIndex<P>(PositionIndex<P>);

impl<P> ProductIndex<P> {
    /// Pairs a position with its precomputed linear offset.
    pub fn new(position: P, linear: usize) -> Self {
        Self(PositionIndex::new(position, linear))
    }

    /// Borrows the coordinate position.
    pub fn position(&self) -> &P {
        self.0.position()
    }

    /// The cached linear offset.
    pub fn linear(&self) -> usize {
        self.0.linear()
    }
}

impl<P: Ord + Validity> PartialEq for ProductIndex<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0.customized_equivalence(&other.0, |a, b| a == b)
    }
}

impl<P: Ord + Validity> Eq for ProductIndex<P> {}

impl<P: Ord + Validity> PartialOrd for ProductIndex<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord + Validity> Ord for ProductIndex<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.customized_comparison(&other.0, |a, b| a.cmp(b))
    }
}

/// Index of an adjacent-window collection: the position is the
/// strictly-increasing run of source coordinates covered by the
/// window, and only the first coordinate participates in equality and
/// ordering (the rest are determined by it).
#[derive(Clone, Copy, Debug)]
pub struct WindowIndex<P>(PositionIndex<P>);

impl<P: FixedArity<usize>> WindowIndex<P> {
    /// Pairs a window position with its precomputed linear offset.
    ///
    /// Debug builds assert the coordinates are strictly increasing.
    pub fn new(position: P, linear: usize) -> Self {
        let index = Self(PositionIndex::new(position, linear));
        debug_assert!(
            index.0.customized_validation(strictly_increasing),
            "window coordinates must be strictly increasing",
        );
        index
    }

    /// Borrows the coordinate position.
    pub fn position(&self) -> &P {
        self.0.position()
    }

    /// The cached linear offset.
    pub fn linear(&self) -> usize {
        self.0.linear()
    }

    /// First coordinate: the source offset the window starts at.
    pub fn start(&self) -> usize {
        *self.0.position().field(0)
    }
}

/// Strictly increasing coordinates, checked pairwise.
fn strictly_increasing<P: FixedArity<usize>>(position: &P) -> bool {
    (1..P::ARITY).all(|k| position.field(k - 1) < position.field(k))
}

impl<P: FixedArity<usize> + Validity> PartialEq for WindowIndex<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .customized_equivalence(&other.0, |a, b| a.field(0) == b.field(0))
    }
}

impl<P: FixedArity<usize> + Validity> Eq for WindowIndex<P> {}

impl<P: FixedArity<usize> + Validity> PartialOrd for WindowIndex<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FixedArity<usize> + Validity> Ord for WindowIndex<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .customized_comparison(&other.0, |a, b| a.field(0).cmp(b.field(0)))
    }
}

/// Index of a zipped collection: the position is the diagonal tuple
/// repeating the shared per-dimension offset, and only the first
/// coordinate participates in equality and ordering.
#[derive(Clone, Copy, Debug)]
pub struct DiagonalIndex<P>(PositionIndex<P>);

impl<P: FixedArity<usize>> DiagonalIndex<P> {
    /// Pairs a diagonal position with its precomputed linear offset.
    ///
    /// Debug builds assert every coordinate is equal.
    pub fn new(position: P, linear: usize) -> Self {
        let index = Self(PositionIndex::new(position, linear));
        debug_assert!(
            index
                .0
                .customized_validation(|p| (1..P::ARITY).all(|k| p.field(k) == p.field(0))),
            "diagonal coordinates must all be equal",
        );
        index
    }

    /// Borrows the coordinate position.
    pub fn position(&self) -> &P {
        self.0.position()
    }

    /// The cached linear offset.
    pub fn linear(&self) -> usize {
        self.0.linear()
    }
}

impl<P: FixedArity<usize> + Validity> PartialEq for DiagonalIndex<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .customized_equivalence(&other.0, |a, b| a.field(0) == b.field(0))
    }
}

impl<P: FixedArity<usize> + Validity> Eq for DiagonalIndex<P> {}

impl<P: FixedArity<usize> + Validity> PartialOrd for DiagonalIndex<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FixedArity<usize> + Validity> Ord for DiagonalIndex<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .customized_comparison(&other.0, |a, b| a.field(0).cmp(b.field(0)))
    }
}
