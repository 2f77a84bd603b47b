//! Per-email sliding-window rate limiting.

use serde::{Deserialize, Serialize};

/// One recorded submission attempt.
///
/// Serialized as `{"email": "...", "time": <unix seconds>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitEntry {
    pub email: String,
    pub time: i64,
}

/// Sliding-window limit: at most `max_requests` per email within
/// `window_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_requests: usize,
    pub window_secs: i64,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window_secs: 3600,
        }
    }
}

/// Outcome of applying a [`RateLimitPolicy`] to a set of recorded attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// The attempt is admitted; `entries` is the pruned history including it.
    Admitted { entries: Vec<RateLimitEntry> },
    /// The email already used its quota inside the window.
    Limited,
}

impl RateLimitPolicy {
    /// Decides whether `email` may submit at `now`.
    ///
    /// Entries at or before `now - window_secs` are dropped. If the email
    /// still has `max_requests` entries in the window the attempt is
    /// [`RateLimitDecision::Limited`]; otherwise it is appended.
    pub fn apply(&self, entries: Vec<RateLimitEntry>, email: &str, now: i64) -> RateLimitDecision {
        let cutoff = now - self.window_secs;
        let mut entries: Vec<RateLimitEntry> =
            entries.into_iter().filter(|e| e.time > cutoff).collect();

        let used = entries.iter().filter(|e| e.email == email).count();
        if used >= self.max_requests {
            return RateLimitDecision::Limited;
        }

        entries.push(RateLimitEntry {
            email: email.to_string(),
            time: now,
        });

        RateLimitDecision::Admitted { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(email: &str, time: i64) -> RateLimitEntry {
        RateLimitEntry {
            email: email.to_string(),
            time,
        }
    }

    #[test]
    fn test_admits_under_limit() {
        let policy = RateLimitPolicy::default();

        let decision = policy.apply(vec![entry("a@example.com", 1_000)], "a@example.com", 1_010);

        match decision {
            RateLimitDecision::Admitted { entries } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[1], entry("a@example.com", 1_010));
            }
            RateLimitDecision::Limited => panic!("expected admission"),
        }
    }

    #[test]
    fn test_limits_sixth_attempt_in_window() {
        let policy = RateLimitPolicy::default();
        let history: Vec<_> = (0..5).map(|i| entry("a@example.com", 10_000 + i)).collect();

        let decision = policy.apply(history, "a@example.com", 10_100);

        assert_eq!(decision, RateLimitDecision::Limited);
    }

    #[test]
    fn test_other_emails_not_affected() {
        let policy = RateLimitPolicy::default();
        let history: Vec<_> = (0..5).map(|i| entry("a@example.com", 10_000 + i)).collect();

        let decision = policy.apply(history, "b@example.com", 10_100);

        assert!(matches!(decision, RateLimitDecision::Admitted { .. }));
    }

    #[test]
    fn test_expired_entries_are_pruned() {
        let policy = RateLimitPolicy::default();
        let history: Vec<_> = (0..5).map(|i| entry("a@example.com", i)).collect();

        let decision = policy.apply(history, "a@example.com", 3_600 + 4);

        match decision {
            RateLimitDecision::Admitted { entries } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].time, 3_604);
            }
            RateLimitDecision::Limited => panic!("old entries should have expired"),
        }
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let policy = RateLimitPolicy {
            max_requests: 1,
            window_secs: 60,
        };

        let at_boundary = policy.apply(vec![entry("a@example.com", 40)], "a@example.com", 100);
        assert!(matches!(at_boundary, RateLimitDecision::Admitted { .. }));

        let inside = policy.apply(vec![entry("a@example.com", 41)], "a@example.com", 100);
        assert_eq!(inside, RateLimitDecision::Limited);
    }
}
