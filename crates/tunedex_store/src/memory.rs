//! In-memory store implementation.

use crate::error::{StoreError, StoreResult};
use crate::pattern::glob_match;
use crate::store::{FieldMap, KvStore, ScanPage};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// A thread-safe in-memory key-value store.
///
/// This store keeps every field map in a sorted map behind a
/// `parking_lot::RwLock`. It is suitable for:
/// - Unit and integration tests
/// - CLI tooling that loads a file and queries it in-process
/// - Ephemeral embedded catalogs
///
/// # Scan semantics
///
/// Cursors are offsets into the sorted key order. `count_hint` bounds
/// the number of keys *examined* per page, so a page may return fewer
/// matches than the hint - or none - while the sweep is still running,
/// exactly as a remote store's cursor scan behaves. Cursor positions are
/// not stable under concurrent mutation; the trait makes no isolation
/// guarantee.
///
/// # Example
///
/// ```rust
/// use tunedex_store::{FieldMap, KvStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// let mut fields = FieldMap::new();
/// fields.insert("title".to_string(), "So What".to_string());
/// assert!(store.set_hash_if_absent("song:00042", &fields).unwrap());
/// assert!(!store.set_hash_if_absent("song:00042", &fields).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<String, FieldMap>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every key currently in the store, in sorted order.
    ///
    /// Useful for tests and tooling.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    /// Returns the number of keys in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true when the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.data.read().contains_key(key))
    }

    fn set_hash(&self, key: &str, fields: &FieldMap) -> StoreResult<()> {
        self.data.write().insert(key.to_string(), fields.clone());
        Ok(())
    }

    fn set_hash_if_absent(&self, key: &str, fields: &FieldMap) -> StoreResult<bool> {
        let mut data = self.data.write();
        if data.contains_key(key) {
            return Ok(false);
        }
        data.insert(key.to_string(), fields.clone());
        Ok(true)
    }

    fn get_all_hash_fields(&self, key: &str) -> StoreResult<FieldMap> {
        Ok(self.data.read().get(key).cloned().unwrap_or_default())
    }

    fn scan(&self, cursor: u64, pattern: &str, count_hint: usize) -> StoreResult<ScanPage> {
        if pattern.is_empty() {
            return Err(StoreError::invalid_pattern(pattern));
        }
        let examine = count_hint.max(1);
        let data = self.data.read();

        let keys: Vec<&String> = data.keys().collect();
        let start = usize::try_from(cursor).unwrap_or(usize::MAX).min(keys.len());
        let end = start.saturating_add(examine).min(keys.len());

        let matched = keys[start..end]
            .iter()
            .filter(|key| glob_match(pattern, key))
            .map(|key| (*key).clone())
            .collect();

        let next = if end >= keys.len() { 0 } else { end as u64 };
        Ok(ScanPage {
            keys: matched,
            cursor: next,
        })
    }

    fn flush_all(&self) -> StoreResult<()> {
        self.data.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Runs a full sweep and returns every matched key.
    fn sweep(store: &MemoryStore, pattern: &str, hint: usize) -> Vec<String> {
        let mut out = Vec::new();
        let mut cursor = 0;
        loop {
            let page = store.scan(cursor, pattern, hint).unwrap();
            let is_final = page.is_final();
            let next_cursor = page.cursor;
            out.extend(page.keys);
            if is_final {
                break;
            }
            cursor = next_cursor;
        }
        out
    }

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(!store.exists("song:00001").unwrap());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let store = MemoryStore::new();
        let map = fields(&[("title", "So What"), ("artist", "Miles Davis")]);
        store.set_hash("song:00001", &map).unwrap();

        assert!(store.exists("song:00001").unwrap());
        assert_eq!(store.get_all_hash_fields("song:00001").unwrap(), map);
    }

    #[test]
    fn set_hash_overwrites_whole_map() {
        let store = MemoryStore::new();
        store
            .set_hash("song:00001", &fields(&[("title", "Old"), ("year", "1990")]))
            .unwrap();
        store
            .set_hash("song:00001", &fields(&[("title", "New")]))
            .unwrap();

        let got = store.get_all_hash_fields("song:00001").unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got.get("title").map(String::as_str), Some("New"));
    }

    #[test]
    fn get_absent_key_is_empty_map() {
        let store = MemoryStore::new();
        assert!(store.get_all_hash_fields("song:09999").unwrap().is_empty());
    }

    #[test]
    fn conditional_write_claims_key_once() {
        let store = MemoryStore::new();
        let first = fields(&[("title", "First")]);
        let second = fields(&[("title", "Second")]);

        assert!(store.set_hash_if_absent("song:00007", &first).unwrap());
        assert!(!store.set_hash_if_absent("song:00007", &second).unwrap());

        let got = store.get_all_hash_fields("song:00007").unwrap();
        assert_eq!(got.get("title").map(String::as_str), Some("First"));
    }

    #[test]
    fn scan_visits_every_matching_key_once() {
        let store = MemoryStore::new();
        for n in 0..17 {
            let key = format!("song:{n:05}");
            store.set_hash(&key, &fields(&[("title", "x")])).unwrap();
        }
        store.set_hash("album:00001", &fields(&[("artist", "y")])).unwrap();

        let mut seen = sweep(&store, "song:*", 5);
        seen.sort();
        let expected: Vec<String> = (0..17).map(|n| format!("song:{n:05}")).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn scan_pages_can_be_empty_mid_sweep() {
        let store = MemoryStore::new();
        // Sorted before any `song:` key, so the first pages match nothing.
        for n in 0..6 {
            let key = format!("album:{n:05}");
            store.set_hash(&key, &fields(&[("artist", "x")])).unwrap();
        }
        store.set_hash("song:00001", &fields(&[("title", "x")])).unwrap();

        let first = store.scan(0, "song:*", 3).unwrap();
        assert!(first.keys.is_empty());
        assert_ne!(first.cursor, 0);

        let seen = sweep(&store, "song:*", 3);
        assert_eq!(seen, vec!["song:00001".to_string()]);
    }

    #[test]
    fn scan_on_empty_store_finishes_immediately() {
        let store = MemoryStore::new();
        let page = store.scan(0, "song:*", 5).unwrap();
        assert!(page.keys.is_empty());
        assert!(page.is_final());
    }

    #[test]
    fn scan_rejects_empty_pattern() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.scan(0, "", 5),
            Err(StoreError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn scan_zero_hint_still_advances() {
        let store = MemoryStore::new();
        store.set_hash("song:00001", &fields(&[("title", "x")])).unwrap();
        store.set_hash("song:00002", &fields(&[("title", "y")])).unwrap();

        let seen = sweep(&store, "song:*", 0);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn flush_all_removes_every_namespace() {
        let store = MemoryStore::new();
        store.set_hash("song:00001", &fields(&[("title", "x")])).unwrap();
        store.set_hash("album:00001", &fields(&[("artist", "y")])).unwrap();

        store.flush_all().unwrap();
        assert!(store.is_empty());
        assert!(!store.exists("song:00001").unwrap());
        assert!(!store.exists("album:00001").unwrap());
    }

    #[test]
    fn keys_are_sorted() {
        let store = MemoryStore::new();
        store.set_hash("song:00002", &fields(&[("title", "b")])).unwrap();
        store.set_hash("album:00001", &fields(&[("artist", "a")])).unwrap();
        store.set_hash("song:00001", &fields(&[("title", "a")])).unwrap();

        assert_eq!(
            store.keys(),
            vec![
                "album:00001".to_string(),
                "song:00001".to_string(),
                "song:00002".to_string()
            ]
        );
    }

    #[test]
    fn conditional_write_is_atomic_across_threads() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let map = fields(&[("title", "contended")]);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            let map = map.clone();
            handles.push(std::thread::spawn(move || {
                store.set_hash_if_absent("song:00055", &map).unwrap()
            }));
        }

        let wins: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();
        assert_eq!(wins, 1);
    }
}
