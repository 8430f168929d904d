use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::utils::log_debug;

/// Request ids marked for cancellation. Entries are consumed by the first
/// checkpoint that sees them, or dropped once older than the ttl.
#[derive(Clone)]
pub struct CancellationRegistry {
    inner: Arc<Mutex<HashMap<String, Instant>>>,
    ttl: Duration,
}

impl CancellationRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn with_ttl_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mark a request as cancelled. Re-cancelling refreshes the entry.
    pub fn cancel(&self, request_id: &str) {
        self.cancel_at(request_id, Instant::now());
    }

    fn cancel_at(&self, request_id: &str, at: Instant) {
        if request_id.trim().is_empty() {
            return;
        }
        if let Ok(mut map) = self.inner.lock() {
            Self::purge_locked(&mut map, self.ttl, at);
            map.insert(request_id.to_string(), at);
        }
        log_debug("cancellation", format!("request {} marked cancelled", request_id));
    }

    /// Non-consuming check. Expired entries count as not cancelled.
    pub fn is_cancelled(&self, request_id: &str) -> bool {
        let now = Instant::now();
        if let Ok(map) = self.inner.lock() {
            map.get(request_id)
                .map(|at| now.saturating_duration_since(*at) <= self.ttl)
                .unwrap_or(false)
        } else {
            false
        }
    }

    /// Consume the cancellation mark for `request_id`, returning whether it was live.
    pub fn take(&self, request_id: &str) -> bool {
        let now = Instant::now();
        if let Ok(mut map) = self.inner.lock() {
            match map.remove(request_id) {
                Some(at) => now.saturating_duration_since(at) <= self.ttl,
                None => false,
            }
        } else {
            false
        }
    }

    /// Drop entries older than the ttl. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        if let Ok(mut map) = self.inner.lock() {
            Self::purge_locked(&mut map, self.ttl, now)
        } else {
            0
        }
    }

    fn purge_locked(map: &mut HashMap<String, Instant>, ttl: Duration, now: Instant) -> usize {
        let before = map.len();
        map.retain(|_, at| now.saturating_duration_since(*at) <= ttl);
        before - map.len()
    }

    pub fn len(&self) -> usize {
        if let Ok(map) = self.inner.lock() {
            map.len()
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CancellationRegistry {
    fn default() -> Self {
        Self::with_ttl_secs(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_entry() {
        let registry = CancellationRegistry::default();
        registry.cancel("req-1");
        assert!(registry.is_cancelled("req-1"));
        assert!(registry.take("req-1"));
        assert!(!registry.take("req-1"));
        assert!(!registry.is_cancelled("req-1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_request_is_not_cancelled() {
        let registry = CancellationRegistry::default();
        assert!(!registry.is_cancelled("nope"));
        assert!(!registry.take("nope"));
    }

    #[test]
    fn blank_ids_are_ignored() {
        let registry = CancellationRegistry::default();
        registry.cancel("   ");
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn expired_entries_are_purged() {
        let registry = CancellationRegistry::new(Duration::from_secs(30));
        let old = Instant::now()
            .checked_sub(Duration::from_secs(120))
            .unwrap();
        registry.cancel("fresh");
        registry.cancel_at("stale", old);

        assert!(!registry.is_cancelled("stale"));
        assert_eq!(registry.purge_expired(), 1);
        assert_eq!(registry.len(), 1);
        assert!(registry.is_cancelled("fresh"));
    }

    #[test]
    fn clones_share_state() {
        let registry = CancellationRegistry::default();
        let handle = registry.clone();
        handle.cancel("shared");
        assert!(registry.take("shared"));
    }
}
