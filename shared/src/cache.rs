//! Session-scoped cache of normalized commit timelines.
//!
//! Entries live in a key/value store with the semantics of the browser's
//! `sessionStorage`. Each value is the JSON array of records; the time it was
//! written sits under the sibling key `<key>_saved_at` so an optional TTL can
//! be enforced on read.

use std::{cell::RefCell, collections::HashMap};

use crate::iterative::IterativeRecord;

/// String key/value storage scoped to the browser session.
pub trait SessionStore {
    /// Read a value.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value. Returns `false` when the store refused it.
    fn set_item(&self, key: &str, value: &str) -> bool;

    /// Drop a value.
    fn remove_item(&self, key: &str);
}

/// In-memory [`SessionStore`], used when `sessionStorage` is unavailable
/// and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Expiry policy of cached timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CachePolicy {
    /// Maximum age in milliseconds; `None` keeps entries until the session
    /// storage itself is cleared.
    pub ttl_ms: Option<i64>,
}

fn stamp_key(key: &str) -> String {
    format!("{key}_saved_at")
}

/// Timeline cache over a [`SessionStore`].
#[derive(Debug)]
pub struct TimelineCache<S> {
    store: S,
    policy: CachePolicy,
}

impl<S: SessionStore> TimelineCache<S> {
    /// Wrap `store` with `policy`.
    pub fn new(store: S, policy: CachePolicy) -> Self {
        Self {
            store,
            policy,
        }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cached records under `key`, if present, non-empty and fresh at
    /// `now_ms`. Corrupt entries count as misses and are dropped. With a TTL
    /// set, an entry without a readable write stamp counts as expired.
    pub fn get(&self, key: &str, now_ms: i64) -> Option<Vec<IterativeRecord>> {
        let raw = self.store.get_item(key)?;
        let records = match serde_json::from_str::<Vec<IterativeRecord>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable timeline cache entry");
                self.store.remove_item(key);
                self.store.remove_item(&stamp_key(key));
                return None;
            },
        };

        if let Some(ttl) = self.policy.ttl_ms {
            let saved_at = self
                .store
                .get_item(&stamp_key(key))
                .and_then(|raw| raw.parse::<i64>().ok());
            match saved_at {
                Some(saved_at) if now_ms.saturating_sub(saved_at) <= ttl => {},
                _ => {
                    tracing::debug!(key, ?saved_at, "timeline cache entry expired");
                    return None;
                },
            }
        }

        if records.is_empty() {
            return None;
        }
        Some(records)
    }

    /// Store `records` under `key` and stamp the write with `now_ms`.
    pub fn put(&self, key: &str, records: &[IterativeRecord], now_ms: i64) {
        match serde_json::to_string(records) {
            Ok(raw) => {
                let stored = self.store.set_item(key, &raw)
                    && self.store.set_item(&stamp_key(key), &now_ms.to_string());
                if !stored {
                    tracing::warn!(key, "session storage rejected timeline cache entry");
                }
            },
            Err(err) => tracing::warn!(key, error = %err, "failed to encode timeline cache entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> IterativeRecord {
        IterativeRecord {
            label: label.to_string(),
            children: "fix: typo".to_string(),
        }
    }

    #[test]
    fn stored_records_come_back_without_ttl_forever() {
        let cache = TimelineCache::new(MemoryStore::default(), CachePolicy::default());
        cache.put("blog_project_iterative", &[record("2024-01-01 00:00:00")], 0);
        let hit = cache.get("blog_project_iterative", i64::MAX).expect("cache hit");
        assert_eq!(hit, vec![record("2024-01-01 00:00:00")]);
    }

    #[test]
    fn expired_entries_are_misses() {
        let cache = TimelineCache::new(
            MemoryStore::default(),
            CachePolicy {
                ttl_ms: Some(1_000),
            },
        );
        cache.put("k", &[record("a")], 10_000);
        assert!(cache.get("k", 10_500).is_some());
        assert!(cache.get("k", 11_001).is_none());
    }

    #[test]
    fn empty_and_corrupt_entries_are_misses() {
        let cache = TimelineCache::new(MemoryStore::default(), CachePolicy::default());
        cache.put("empty", &[], 0);
        assert!(cache.get("empty", 0).is_none());

        cache.store().set_item("broken", "[not json");
        assert!(cache.get("broken", 0).is_none());
        assert!(cache.store().get_item("broken").is_none());
    }

    #[test]
    fn stored_value_is_the_bare_record_array() {
        let cache = TimelineCache::new(MemoryStore::default(), CachePolicy::default());
        cache.put("server_project_iterative", &[record("2024-03-01 10:00:00")], 42);

        let raw = cache
            .store()
            .get_item("server_project_iterative")
            .expect("entry written");
        let records: Vec<IterativeRecord> = serde_json::from_str(&raw).expect("array of records");
        assert_eq!(records, vec![record("2024-03-01 10:00:00")]);
        assert_eq!(
            cache.store().get_item("server_project_iterative_saved_at").as_deref(),
            Some("42")
        );
    }

    #[test]
    fn array_written_by_another_tab_is_a_hit() {
        let cache = TimelineCache::new(MemoryStore::default(), CachePolicy::default());
        cache.store().set_item(
            "admin_project_iterative",
            r#"[{"label":"2024-03-01 10:00:00","children":"m"}]"#,
        );

        let hit = cache.get("admin_project_iterative", 0).expect("cache hit");
        assert_eq!(hit[0].children, "m");
        assert!(cache.store().get_item("admin_project_iterative").is_some());
    }

    #[test]
    fn unstamped_entry_is_expired_under_a_ttl() {
        let cache = TimelineCache::new(
            MemoryStore::default(),
            CachePolicy {
                ttl_ms: Some(1_000),
            },
        );
        cache.store().set_item("k", r#"[{"label":"a","children":"m"}]"#);
        assert!(cache.get("k", 0).is_none());
    }
}
