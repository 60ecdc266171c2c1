//! Per-pattern match counters

use std::sync::atomic::{AtomicUsize, Ordering};

/// Side table of match counts, indexed by group position then pattern position
///
/// Counters are atomic so classification only needs `&Configuration`, and
/// paths may be classified from several threads.
#[derive(Debug, Default)]
pub struct PatternUsage {
    counts: Vec<Vec<AtomicUsize>>,
}

impl PatternUsage {
    /// Create a zeroed table shaped after `pattern_counts` (patterns per group)
    pub fn new(pattern_counts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            counts: pattern_counts
                .into_iter()
                .map(|n| (0..n).map(|_| AtomicUsize::new(0)).collect())
                .collect(),
        }
    }

    pub(crate) fn record(&self, group: usize, pattern: usize) {
        if let Some(counter) = self.counts.get(group).and_then(|g| g.get(pattern)) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Current count for one pattern; out-of-range indices read as zero
    pub fn count(&self, group: usize, pattern: usize) -> usize {
        self.counts
            .get(group)
            .and_then(|g| g.get(pattern))
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    /// Snapshot of every counter
    pub fn snapshot(&self) -> Vec<Vec<usize>> {
        self.counts
            .iter()
            .map(|g| g.iter().map(|c| c.load(Ordering::Relaxed)).collect())
            .collect()
    }

    /// `(group, pattern)` indices whose counter is still zero
    pub fn unused(&self) -> Vec<(usize, usize)> {
        self.snapshot()
            .into_iter()
            .enumerate()
            .flat_map(|(g, counts)| {
                counts
                    .into_iter()
                    .enumerate()
                    .filter(|(_, count)| *count == 0)
                    .map(move |(p, _)| (g, p))
            })
            .collect()
    }

    /// Set every counter back to zero
    pub fn reset(&self) {
        for counter in self.counts.iter().flatten() {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
