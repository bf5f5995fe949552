//! The fan-out engine: bucket queue, worker pool, join barrier.

use weft_collect::Sequence;

use crate::bucket::Buckets;
use crate::config::VisitConfig;

/// Visits every element of `seq` exactly once across a pool of worker
/// threads, blocking until all workers finish.
///
/// Equivalent to [`visit_enumerated`] with the index discarded; see
/// there for the full contract.
pub fn visit<S, F>(seq: &S, config: &VisitConfig, visitor: F)
where
    S: Sequence + Sync,
    F: Fn(&S::Item) + Sync,
{
    visit_enumerated(seq, config, |_, item| visitor(item));
}

/// Visits every `(index, element)` pair of `seq` exactly once across a
/// pool of worker threads, blocking until all workers finish.
///
/// The index space `[0, len)` is partitioned into buckets of
/// `config.stride` consecutive indices; each bucket is claimed by
/// exactly one worker, so every index is visited exactly once no
/// matter how the buckets are scheduled. No inter-bucket ordering is
/// guaranteed: the visitor must not assume a visit order and must be
/// internally synchronized if it accumulates shared state.
///
/// Before any worker starts, [`Sequence::prepare`] runs on the calling
/// thread so that every lazily-memoized length the collection depends
/// on is populated exactly once, single-threaded; workers then only
/// read them. When the sequence exposes contiguous backing storage,
/// workers index the backing slice directly instead of materializing
/// elements through [`Sequence::get`].
///
/// # Panics
///
/// Panics if `config.stride == 0`. A panicking visitor aborts the
/// visitation and propagates from this call.
pub fn visit_enumerated<S, F>(seq: &S, config: &VisitConfig, visitor: F)
where
    S: Sequence + Sync,
    F: Fn(usize, &S::Item) + Sync,
{
    // Force memoized state from this thread, before any fan-out.
    seq.prepare();
    let count = seq.len();
    let buckets = Buckets::new(count, config.stride);
    if count == 0 {
        return;
    }

    let total_buckets = buckets.total_buckets();
    let workers = config.resolved_workers().min(total_buckets);
    log::debug!(
        "visiting {count} elements: {total_buckets} buckets of {}, {workers} workers",
        config.stride,
    );

    // Queue every bucket up front, then drop the sender so workers
    // drain to disconnection.
    let (bucket_tx, bucket_rx) = crossbeam_channel::bounded::<std::ops::Range<usize>>(total_buckets);
    for bucket in buckets {
        bucket_tx
            .send(bucket)
            .expect("bucket queue outlives the send loop");
    }
    drop(bucket_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let bucket_rx = bucket_rx.clone();
            let visitor = &visitor;
            scope.spawn(move || {
                // One contiguity probe per worker; the answer cannot
                // change while the collection is borrowed.
                match seq.as_contiguous() {
                    Some(slice) => {
                        log::trace!("worker draining buckets via contiguous storage");
                        while let Ok(bucket) = bucket_rx.recv() {
                            for (offset, item) in slice[bucket.clone()].iter().enumerate() {
                                visitor(bucket.start + offset, item);
                            }
                        }
                    }
                    None => {
                        log::trace!("worker draining buckets via the generic element path");
                        while let Ok(bucket) = bucket_rx.recv() {
                            for index in bucket {
                                let item = seq.get(index);
                                visitor(index, &item);
                            }
                        }
                    }
                }
            });
        }
    });
}
