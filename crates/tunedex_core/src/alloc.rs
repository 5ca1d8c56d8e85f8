//! Collision-avoiding identifier allocation.

use crate::error::{CoreError, CoreResult};
use crate::key::{record_key, RecordId};
use tracing::debug;
use tunedex_codec::FIELD_ID;
use tunedex_store::{FieldMap, KvStore};

/// Allocates previously-unused record identifiers within a namespace.
///
/// Each attempt draws a uniformly random five-digit identifier and
/// claims `<namespace>:<candidate>` with the store's atomic conditional
/// write. Claim and write are one step, so two allocators racing on the
/// same candidate cannot both succeed - the loser simply redraws. At
/// expected catalog sizes the collision probability per draw is small;
/// the attempt budget bounds the pathological case of a nearly full
/// namespace.
///
/// The namespace stays fixed across retries; only the numeric suffix
/// varies.
#[derive(Debug, Clone, Copy)]
pub struct IdAllocator {
    max_attempts: usize,
}

impl IdAllocator {
    /// Creates an allocator with the given attempt budget.
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Allocates a fresh identifier and atomically claims its key by
    /// writing `fields` under it.
    ///
    /// The allocated identifier is patched into the stored map's
    /// [`FIELD_ID`] entry so the persisted record carries its own
    /// identifier.
    ///
    /// # Errors
    ///
    /// - [`CoreError::IdSpaceExhausted`] when every draw in the budget
    ///   collided with an existing key.
    /// - [`CoreError::Store`] immediately on a round-trip failure.
    pub fn allocate(
        &self,
        store: &dyn KvStore,
        namespace: &str,
        fields: &FieldMap,
    ) -> CoreResult<RecordId> {
        self.allocate_with_rng(store, namespace, fields, &mut rand::thread_rng())
    }

    /// [`allocate`](Self::allocate) with a caller-provided RNG.
    ///
    /// Tests seed the RNG to make draw sequences reproducible.
    pub fn allocate_with_rng<R: rand::Rng + ?Sized>(
        &self,
        store: &dyn KvStore,
        namespace: &str,
        fields: &FieldMap,
        rng: &mut R,
    ) -> CoreResult<RecordId> {
        for _ in 0..self.max_attempts {
            let candidate = RecordId::random(rng);
            let key = record_key(namespace, &candidate);

            let mut claim = fields.clone();
            claim.insert(FIELD_ID.to_string(), candidate.as_str().to_string());

            if store.set_hash_if_absent(&key, &claim)? {
                debug!(%key, "claimed record key");
                return Ok(candidate);
            }
            debug!(%key, "candidate taken, redrawing");
        }
        Err(CoreError::id_space_exhausted(namespace, self.max_attempts))
    }
}
