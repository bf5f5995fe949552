//! Shared fixtures: opaque sequences, coverage recording, seeded data.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use indexmap::IndexSet;
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use weft_collect::Sequence;

/// A sequence that hides its backing storage.
///
/// Wraps a `Vec` but never reports contiguous storage, forcing
/// traversals onto the generic element path. Counts `len()` calls so
/// tests can assert that callers memoize instead of re-querying.
pub struct OpaqueSeq<T> {
    items: Vec<T>,
    len_calls: AtomicUsize,
}

impl<T> OpaqueSeq<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            len_calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `len()` has been called so far.
    pub fn len_calls(&self) -> usize {
        self.len_calls.load(Ordering::Relaxed)
    }
}

impl<T: Clone> Sequence for OpaqueSeq<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len_calls.fetch_add(1, Ordering::Relaxed);
        self.items.len()
    }

    fn get(&self, index: usize) -> T {
        self.items[index].clone()
    }

    // as_contiguous deliberately stays at the default `None`.
}

/// Interior state of a [`CoverageRecorder`].
struct Coverage {
    seen: IndexSet<usize>,
    visits: usize,
}

/// A synchronized visited-index set plus visit counter.
///
/// Every access goes through one mutex; the set and the counter are
/// never read or written without holding it. The insertion-ordered set
/// keeps failure output deterministic.
pub struct CoverageRecorder {
    inner: Mutex<Coverage>,
}

impl CoverageRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Coverage {
                seen: IndexSet::new(),
                visits: 0,
            }),
        }
    }

    /// Records one visit of `index`; returns `false` if it was already
    /// recorded (a double visit).
    pub fn record(&self, index: usize) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.visits += 1;
        inner.seen.insert(index)
    }

    /// Total number of `record` calls.
    pub fn visits(&self) -> usize {
        self.inner.lock().unwrap().visits
    }

    /// Number of distinct indices recorded.
    pub fn distinct(&self) -> usize {
        self.inner.lock().unwrap().seen.len()
    }

    /// The indices in `0..count` that were never recorded.
    pub fn missing(&self, count: usize) -> Vec<usize> {
        let inner = self.inner.lock().unwrap();
        (0..count).filter(|i| !inner.seen.contains(i)).collect()
    }
}

impl Default for CoverageRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic pseudo-random test data: same seed, same values.
pub fn seeded_values(seed: u64, n: usize) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}
