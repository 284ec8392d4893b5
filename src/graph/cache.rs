//! In-memory response cache.
//!
//! One cache per client instance, alive as long as the client. Entries are
//! keyed by operation name plus the canonical JSON of the variables, so two
//! requests with equal variables share an entry regardless of field order.

use std::collections::HashMap;
use std::time::Instant;

/// How a query consults the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Serve from cache when present, otherwise fetch and store.
    #[default]
    CacheFirst,
    /// Always fetch, then store.
    NetworkOnly,
    /// Always fetch, never store.
    NoCache,
}

impl FetchPolicy {
    pub fn reads_cache(self) -> bool {
        matches!(self, FetchPolicy::CacheFirst)
    }

    pub fn writes_cache(self) -> bool {
        !matches!(self, FetchPolicy::NoCache)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: &'static str,
    variables: String,
}

impl CacheKey {
    pub fn new(operation: &'static str, variables: &serde_json::Value) -> Self {
        Self {
            operation,
            variables: canonical(variables).to_string(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Same value with object keys sorted at every level.
fn canonical(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort();
            let mut sorted = serde_json::Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonical(&map[key]));
            }
            serde_json::Value::Object(sorted)
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(canonical).collect())
        }
        other => other.clone(),
    }
}

#[derive(Debug, Clone)]
struct Entry {
    data: serde_json::Value,
    stored_at: Instant,
}

/// Response cache owned by one client.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: HashMap<CacheKey, Entry>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, key: &CacheKey) -> Option<serde_json::Value> {
        self.entries.get(key).map(|e| e.data.clone())
    }

    pub fn write(&mut self, key: CacheKey, data: serde_json::Value) {
        self.entries.insert(
            key,
            Entry {
                data,
                stored_at: Instant::now(),
            },
        );
    }

    /// When the entry was last written.
    pub fn stored_at(&self, key: &CacheKey) -> Option<Instant> {
        self.entries.get(key).map(|e| e.stored_at)
    }

    /// Drop every entry of one operation.
    pub fn evict_operation(&mut self, operation: &str) {
        self.entries.retain(|k, _| k.operation != operation);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
