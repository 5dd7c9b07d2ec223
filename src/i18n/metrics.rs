//! Translation lookup metrics.
//!
//! Counts where each resolved UI string came from, so that keys missing from
//! both the site overrides and the built-in table show up in logs instead of
//! only as raw keys on a rendered page.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Lookups answered by the site's own override table
    override_hits: AtomicUsize,

    /// Lookups answered by the built-in table
    default_hits: AtomicUsize,

    /// Lookups that fell back to the raw key
    fallbacks: AtomicUsize,
}

/// Snapshot of the translation metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub override_hits: usize,
    pub default_hits: usize,
    pub fallbacks: usize,
    pub total_lookups: usize,
    /// Percentage of lookups that fell back to the key (0.0 - 100.0)
    pub fallback_rate: f64,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            override_hits: AtomicUsize::new(0),
            default_hits: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
        })
    }

    pub fn record_override_hit(&self) {
        self.override_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_default_hit(&self) {
        self.default_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn override_hits(&self) -> usize {
        self.override_hits.load(Ordering::Relaxed)
    }

    pub fn default_hits(&self) -> usize {
        self.default_hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let override_hits = self.override_hits();
        let default_hits = self.default_hits();
        let fallbacks = self.fallbacks();
        let total_lookups = override_hits + default_hits + fallbacks;
        let fallback_rate = if total_lookups > 0 {
            (fallbacks as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            override_hits,
            default_hits,
            fallbacks,
            total_lookups,
            fallback_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> TranslationMetrics {
        TranslationMetrics {
            override_hits: AtomicUsize::new(0),
            default_hits: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = fresh().report();
        assert_eq!(report.total_lookups, 0);
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    fn test_report_counts_and_rate() {
        let metrics = fresh();
        metrics.record_override_hit();
        metrics.record_default_hit();
        metrics.record_default_hit();
        metrics.record_fallback();

        let report = metrics.report();
        assert_eq!(report.override_hits, 1);
        assert_eq!(report.default_hits, 2);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.total_lookups, 4);
        assert!((report.fallback_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(
            TranslationMetrics::global(),
            TranslationMetrics::global()
        ));
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(fresh().report()).unwrap();
        assert_eq!(json["fallbacks"], 0);
        assert!(json.get("fallback_rate").is_some());
    }
}
