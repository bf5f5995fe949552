//! Benchmark profiles for the Weft container toolkit.
//!
//! Provides pre-built collections at two scales:
//!
//! - [`reference_product`]: 32 x 32 x 32 (~33K tuples)
//! - [`stress_product`]: 128 x 64 x 64 (~524K tuples)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::ops::Range;

use weft_collect::Cartesian3;

/// A 32 x 32 x 32 product (~33K tuples) for micro-benchmarks.
pub fn reference_product() -> Cartesian3<Range<u32>, Range<u32>, Range<u32>> {
    Cartesian3::new(0..32, 0..32, 0..32)
}

/// A 128 x 64 x 64 product (~524K tuples) for throughput benchmarks.
pub fn stress_product() -> Cartesian3<Range<u32>, Range<u32>, Range<u32>> {
    Cartesian3::new(0..128, 0..64, 0..64)
}
