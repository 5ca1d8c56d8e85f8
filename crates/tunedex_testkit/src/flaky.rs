//! Failure-injecting store wrappers.

use std::sync::atomic::{AtomicUsize, Ordering};
use tunedex_store::{FieldMap, KvStore, ScanPage, StoreError, StoreResult};

/// A store whose every round-trip fails with [`StoreError::Unavailable`].
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    /// Creates the always-failing store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn down<T>() -> StoreResult<T> {
        Err(StoreError::unavailable("injected failure"))
    }
}

impl KvStore for FailingStore {
    fn ping(&self) -> StoreResult<()> {
        Self::down()
    }
    fn exists(&self, _key: &str) -> StoreResult<bool> {
        Self::down()
    }
    fn set_hash(&self, _key: &str, _fields: &FieldMap) -> StoreResult<()> {
        Self::down()
    }
    fn set_hash_if_absent(&self, _key: &str, _fields: &FieldMap) -> StoreResult<bool> {
        Self::down()
    }
    fn get_all_hash_fields(&self, _key: &str) -> StoreResult<FieldMap> {
        Self::down()
    }
    fn scan(&self, _cursor: u64, _pattern: &str, _count_hint: usize) -> StoreResult<ScanPage> {
        Self::down()
    }
    fn flush_all(&self) -> StoreResult<()> {
        Self::down()
    }
}

/// A store that fails its first `n` round-trips, then delegates.
///
/// Useful for exercising bounded connectivity retries: configure the
/// wrapper to fail fewer times than the retry budget and the operation
/// should recover; more, and it should surface the failure.
#[derive(Debug)]
pub struct FlakyStore<S> {
    inner: S,
    failures_left: AtomicUsize,
}

impl<S: KvStore> FlakyStore<S> {
    /// Wraps `inner`, failing the first `failures` round-trips.
    pub fn failing_first(failures: usize, inner: S) -> Self {
        Self {
            inner,
            failures_left: AtomicUsize::new(failures),
        }
    }

    /// Round-trips still destined to fail.
    pub fn failures_left(&self) -> usize {
        self.failures_left.load(Ordering::SeqCst)
    }

    fn gate(&self) -> StoreResult<()> {
        let claimed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            });
        match claimed {
            Ok(_) => Err(StoreError::unavailable("injected transient failure")),
            Err(_) => Ok(()),
        }
    }
}

impl<S: KvStore> KvStore for FlakyStore<S> {
    fn ping(&self) -> StoreResult<()> {
        self.gate()?;
        self.inner.ping()
    }
    fn exists(&self, key: &str) -> StoreResult<bool> {
        self.gate()?;
        self.inner.exists(key)
    }
    fn set_hash(&self, key: &str, fields: &FieldMap) -> StoreResult<()> {
        self.gate()?;
        self.inner.set_hash(key, fields)
    }
    fn set_hash_if_absent(&self, key: &str, fields: &FieldMap) -> StoreResult<bool> {
        self.gate()?;
        self.inner.set_hash_if_absent(key, fields)
    }
    fn get_all_hash_fields(&self, key: &str) -> StoreResult<FieldMap> {
        self.gate()?;
        self.inner.get_all_hash_fields(key)
    }
    fn scan(&self, cursor: u64, pattern: &str, count_hint: usize) -> StoreResult<ScanPage> {
        self.gate()?;
        self.inner.scan(cursor, pattern, count_hint)
    }
    fn flush_all(&self) -> StoreResult<()> {
        self.gate()?;
        self.inner.flush_all()
    }
}
