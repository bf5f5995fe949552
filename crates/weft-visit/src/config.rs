//! Visitation configuration: worker pool sizing and bucket stride.

/// Configuration for a parallel visitation.
///
/// The stride is the number of consecutive indices handed to a worker
/// as one unit of work. A stride of 1 degrades to one task per
/// element; larger strides amortize dispatch overhead.
#[derive(Clone, Debug)]
pub struct VisitConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[2, 16]`).
    pub workers: Option<usize>,
    /// Bucket size in elements. Must be positive. Default: 1024.
    pub stride: usize,
}

impl VisitConfig {
    /// Default bucket size.
    pub const DEFAULT_STRIDE: usize = 1024;

    /// A configuration with the given stride and auto-detected workers.
    pub fn with_stride(stride: usize) -> Self {
        Self {
            workers: None,
            stride,
        }
    }

    /// Resolve the actual worker count, applying auto-detection if
    /// `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`. Zero workers would
    /// make every visitation hang with no one to drain the buckets.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }
}

impl Default for VisitConfig {
    fn default() -> Self {
        Self {
            workers: None,
            stride: Self::DEFAULT_STRIDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_workers_clamps_zero() {
        let cfg = VisitConfig {
            workers: Some(0),
            ..VisitConfig::default()
        };
        assert_eq!(cfg.resolved_workers(), 1);
    }

    #[test]
    fn resolved_workers_clamps_large() {
        let cfg = VisitConfig {
            workers: Some(200),
            ..VisitConfig::default()
        };
        assert_eq!(cfg.resolved_workers(), 64);
    }

    #[test]
    fn resolved_workers_auto_stays_in_range() {
        let count = VisitConfig::default().resolved_workers();
        assert!((2..=16).contains(&count), "auto count {count} out of [2,16]");
    }

    #[test]
    fn with_stride_keeps_auto_workers() {
        let cfg = VisitConfig::with_stride(17);
        assert_eq!(cfg.stride, 17);
        assert!(cfg.workers.is_none());
    }
}
