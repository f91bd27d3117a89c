//! Metadata cache counters.
//!
//! Counters are best-effort only and never read for correctness, so relaxed
//! atomics are sufficient.

use std::sync::atomic::{AtomicU64, Ordering};

///
/// MetadataEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetadataEvent {
    IdHit,
    IdMiss,
    IdResolved,
    ColumnsHit,
    ColumnsMiss,
    ColumnsResolved,
    Failed,
}

///
/// MetadataMetrics
///

#[derive(Debug, Default)]
pub struct MetadataMetrics {
    id_hits: AtomicU64,
    id_misses: AtomicU64,
    id_resolutions: AtomicU64,
    column_hits: AtomicU64,
    column_misses: AtomicU64,
    column_resolutions: AtomicU64,
    failures: AtomicU64,
}

impl MetadataMetrics {
    pub fn record(&self, event: MetadataEvent) {
        let counter = match event {
            MetadataEvent::IdHit => &self.id_hits,
            MetadataEvent::IdMiss => &self.id_misses,
            MetadataEvent::IdResolved => &self.id_resolutions,
            MetadataEvent::ColumnsHit => &self.column_hits,
            MetadataEvent::ColumnsMiss => &self.column_misses,
            MetadataEvent::ColumnsResolved => &self.column_resolutions,
            MetadataEvent::Failed => &self.failures,
        };

        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            id_hits: self.id_hits.load(Ordering::Relaxed),
            id_misses: self.id_misses.load(Ordering::Relaxed),
            id_resolutions: self.id_resolutions.load(Ordering::Relaxed),
            column_hits: self.column_hits.load(Ordering::Relaxed),
            column_misses: self.column_misses.load(Ordering::Relaxed),
            column_resolutions: self.column_resolutions.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

///
/// MetricsReport
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MetricsReport {
    pub id_hits: u64,
    pub id_misses: u64,
    /// Successful primary key computations.
    pub id_resolutions: u64,
    pub column_hits: u64,
    pub column_misses: u64,
    /// Successful column map computations.
    pub column_resolutions: u64,
    pub failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_bumps_only_its_counter() {
        let metrics = MetadataMetrics::default();
        metrics.record(MetadataEvent::ColumnsMiss);
        metrics.record(MetadataEvent::ColumnsResolved);
        metrics.record(MetadataEvent::ColumnsHit);
        metrics.record(MetadataEvent::ColumnsHit);

        assert_eq!(
            metrics.report(),
            MetricsReport {
                column_hits: 2,
                column_misses: 1,
                column_resolutions: 1,
                ..MetricsReport::default()
            }
        );
    }
}
