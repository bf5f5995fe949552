//! Exactly-once coverage under every stride and both traversal paths.

use weft_collect::{Cartesian2, Cartesian3, Chain2, Sequence, Zip2};
use weft_test_utils::{seeded_values, CoverageRecorder, OpaqueSeq};
use weft_visit::{visit_enumerated, VisitConfig};

const STRIDES: [usize; 6] = [1, 2, 3, 10, 17, 100];

fn assert_exactly_once<S: Sequence + Sync>(seq: &S, stride: usize, workers: usize) {
    let count = seq.len();
    let recorder = CoverageRecorder::new();
    let config = VisitConfig {
        workers: Some(workers),
        stride,
    };
    visit_enumerated(seq, &config, |index, _| {
        assert!(recorder.record(index), "index {index} visited twice");
    });
    assert_eq!(recorder.visits(), count, "visit counter mismatch");
    assert_eq!(recorder.distinct(), count, "distinct index mismatch");
    assert_eq!(recorder.missing(count), Vec::<usize>::new());
}

#[test_log::test]
fn contiguous_path_covers_every_stride() {
    let data = seeded_values(7, 421);
    for stride in STRIDES {
        assert_exactly_once(&data, stride, 4);
    }
}

#[test_log::test]
fn generic_path_covers_every_stride() {
    let data = OpaqueSeq::new(seeded_values(11, 421));
    for stride in STRIDES {
        assert_exactly_once(&data, stride, 4);
    }
}

#[test_log::test]
fn coverage_is_independent_of_worker_count() {
    let data = seeded_values(3, 123);
    for workers in [1, 2, 7, 64] {
        assert_exactly_once(&data, 10, workers);
    }
}

#[test_log::test]
fn product_collections_are_visited_exactly_once() {
    let product = Cartesian3::new(0u8..7, 0u8..5, 0u8..11);
    for stride in STRIDES {
        assert_exactly_once(&product, stride, 4);
    }
}

#[test_log::test]
fn zipped_and_chained_collections_are_visited_exactly_once() {
    let zipped = Zip2::new(0u16..300, 0u16..257);
    assert_exactly_once(&zipped, 17, 3);

    let chained = Chain2::new(seeded_values(1, 40), 0u32..61);
    assert_exactly_once(&chained, 10, 3);
}

#[test_log::test]
fn both_paths_deliver_identical_elements() {
    let values = seeded_values(5, 200);
    let opaque = OpaqueSeq::new(values.clone());

    let via_slice = CoverageRecorder::new();
    visit_enumerated(&values, &VisitConfig::with_stride(17), |index, value| {
        assert_eq!(*value, values[index]);
        via_slice.record(index);
    });

    let via_generic = CoverageRecorder::new();
    visit_enumerated(&opaque, &VisitConfig::with_stride(17), |index, value| {
        assert_eq!(*value, values[index]);
        via_generic.record(index);
    });

    assert_eq!(via_slice.distinct(), via_generic.distinct());
}

#[test_log::test]
fn lengths_are_populated_before_fan_out_and_read_once() {
    let opaque = OpaqueSeq::new((0..100u32).collect());
    visit_enumerated(&opaque, &VisitConfig::with_stride(9), |_, _| {});
    // One len() call from the dispatching thread; workers never
    // re-query the length.
    assert_eq!(opaque.len_calls(), 1);
}

#[test_log::test]
fn visited_tuples_match_sequential_iteration() {
    let product = Cartesian2::new(0u32..13, 0u32..17);
    let sequential: Vec<_> = product.iter().collect();

    let sum = std::sync::Mutex::new(0u64);
    visit_enumerated(
        &product,
        &VisitConfig {
            workers: Some(5),
            stride: 17,
        },
        |index, tuple| {
            assert_eq!(*tuple, sequential[index]);
            *sum.lock().unwrap() += u64::from(tuple.a) + u64::from(tuple.b);
        },
    );

    let expected: u64 = sequential
        .iter()
        .map(|t| u64::from(t.a) + u64::from(t.b))
        .sum();
    assert_eq!(*sum.lock().unwrap(), expected);
}
