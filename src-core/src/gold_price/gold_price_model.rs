use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;

/// A gold rate observed from the upstream source at a point in time.
///
/// Exactly one live snapshot exists at a time; it is replaced wholesale so a
/// reader never sees a price paired with a foreign timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSnapshot {
    pub price_per_gram: f64,
    pub captured_at: DateTime<Utc>,
}

impl RateSnapshot {
    pub fn new(price_per_gram: f64, captured_at: DateTime<Utc>) -> Self {
        Self {
            price_per_gram,
            captured_at,
        }
    }

    /// Whether the snapshot is still within its time-to-live window.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let ttl = ChronoDuration::from_std(ttl).unwrap_or(ChronoDuration::MAX);
        now.signed_duration_since(self.captured_at) < ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_fresh_within_ttl() {
        let now = Utc::now();
        let snapshot = RateSnapshot::new(124.0, now);
        assert!(snapshot.is_fresh(Duration::from_secs(60), now));
    }

    #[test]
    fn test_snapshot_stale_after_ttl() {
        let now = Utc::now();
        let snapshot = RateSnapshot::new(124.0, now - ChronoDuration::seconds(120));
        assert!(!snapshot.is_fresh(Duration::from_secs(60), now));
    }

    #[test]
    fn test_snapshot_stale_at_exact_ttl() {
        let now = Utc::now();
        let snapshot = RateSnapshot::new(124.0, now - ChronoDuration::seconds(60));
        assert!(!snapshot.is_fresh(Duration::from_secs(60), now));
    }
}
