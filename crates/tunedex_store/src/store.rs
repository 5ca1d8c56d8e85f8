//! Store capability trait definition.

use crate::error::StoreResult;
use std::collections::HashMap;

/// The flat string representation of a stored record.
///
/// Field maps are the only value type the store understands. Numeric
/// record fields are carried as base-10 decimal strings; interpretation
/// belongs to the codec layer, never to the store.
pub type FieldMap = HashMap<String, String>;

/// One page of a cursor-driven keyspace scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPage {
    /// Keys matching the pattern within this page. May be empty even
    /// when the sweep is not finished.
    pub keys: Vec<String>,
    /// Position token for the next scan call. Zero means the sweep is
    /// complete.
    pub cursor: u64,
}

impl ScanPage {
    /// Returns true when this page ends the sweep.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.cursor == 0
    }
}

/// A key-value store holding string field maps under string keys.
///
/// This is the capability the catalog consumes - hash read/write, an
/// existence check, a cursor scan, and a flush. Implementations are free
/// to be remote or in-process; the trait fixes semantics, not transport.
///
/// # Invariants
///
/// - `set_hash` is an idempotent overwrite of the whole field map
/// - `set_hash_if_absent` is atomic: under concurrent callers at most
///   one write for a given key reports `true`
/// - `get_all_hash_fields` on an absent key returns an empty map, not an
///   error
/// - a scan begun at cursor zero visits every key matching the pattern
///   exactly once, provided the keyspace is not mutated during the sweep
/// - implementations must be `Send + Sync`; one handle serves all
///   operations
pub trait KvStore: Send + Sync {
    /// Checks that the store answers round-trips.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    fn ping(&self) -> StoreResult<()>;

    /// Returns whether a key currently exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the round-trip fails.
    fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Writes the full field map under `key`, replacing any previous map.
    ///
    /// # Errors
    ///
    /// Returns an error if the round-trip fails.
    fn set_hash(&self, key: &str, fields: &FieldMap) -> StoreResult<()>;

    /// Writes the field map under `key` only if the key does not exist.
    ///
    /// Returns `true` if the write happened, `false` if the key was
    /// already taken. The check and the write are a single atomic step;
    /// this is the reservation primitive identifier allocation relies on.
    ///
    /// # Errors
    ///
    /// Returns an error if the round-trip fails.
    fn set_hash_if_absent(&self, key: &str, fields: &FieldMap) -> StoreResult<bool>;

    /// Reads the full field map stored under `key`.
    ///
    /// An absent key yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the round-trip fails.
    fn get_all_hash_fields(&self, key: &str) -> StoreResult<FieldMap>;

    /// Scans the keyspace for keys matching a glob `pattern`.
    ///
    /// `cursor` is zero to start a sweep and otherwise the token from
    /// the previous page. `count_hint` bounds how much of the keyspace
    /// is examined per call - the number of *returned* keys may be
    /// smaller, including zero, while the sweep is still in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the round-trip fails or the pattern is
    /// rejected.
    fn scan(&self, cursor: u64, pattern: &str, count_hint: usize) -> StoreResult<ScanPage>;

    /// Removes **every** key in the store, across all namespaces.
    ///
    /// Callers must treat this as indiscriminate: it does not scope
    /// itself to catalog data.
    ///
    /// # Errors
    ///
    /// Returns an error if the round-trip fails.
    fn flush_all(&self) -> StoreResult<()>;
}
