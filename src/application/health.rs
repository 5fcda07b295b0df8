//! # Health Reporter
//!
//! Synchronous snapshot of liveness, uptime and rotation progress.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::application::tracker::TipTracker;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub uptime_seconds: f64,
    pub used: usize,
    pub total: usize,
}

pub struct HealthReporter {
    tracker: Arc<TipTracker>,
    started: Instant,
}

impl HealthReporter {
    pub fn new(tracker: Arc<TipTracker>) -> Self {
        Self {
            tracker,
            started: Instant::now(),
        }
    }

    pub fn report(&self) -> HealthReport {
        let status = self.tracker.status();
        HealthReport {
            status: "healthy",
            uptime_seconds: self.started.elapsed().as_secs_f64(),
            used: status.used,
            total: status.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tracker::tests::{FirstSource, small_catalog};

    #[test]
    fn test_report_reflects_tracker() {
        let tracker = Arc::new(TipTracker::new(small_catalog(), Box::new(FirstSource)));
        let reporter = HealthReporter::new(tracker.clone());

        tracker.pick_unused();
        let report = reporter.report();
        assert_eq!(report.status, "healthy");
        assert_eq!(report.used, 1);
        assert_eq!(report.total, 3);
        assert!(report.uptime_seconds >= 0.0);
    }

    #[test]
    fn test_report_json_shape() {
        let report = HealthReport {
            status: "healthy",
            uptime_seconds: 12.5,
            used: 4,
            total: 53,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "uptimeSeconds": 12.5,
                "used": 4,
                "total": 53
            })
        );
    }
}
