use async_trait::async_trait;

use crate::error::LedgerError;

/// The key-value surface of the external ledger, as seen by the contract.
///
/// The platform's store is append-only and versioned; this trait exposes only
/// the current-value view of it. Atomicity is the platform's responsibility:
/// every contract operation runs inside one externally managed transaction,
/// and the read-then-write sequence within an operation must not interleave
/// with other operations on the same key.
///
/// ## Semantics
///
/// - `get_state` of a never-written or deleted key returns `Ok(None)`.
/// - `put_state` of an existing key overwrites its current value.
/// - `delete_state` of a missing key is a no-op at this layer; callers that
///   need absence to be an error check existence first.
///
/// Implementations must be `Send + Sync + 'static` so a context holding one
/// can cross async task boundaries.
#[async_trait]
pub trait LedgerState: Send + Sync + 'static {
    /// Read the current value stored under `key`, if any.
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write `value` under `key`, overwriting any current value.
    async fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Remove the value stored under `key`.
    async fn delete_state(&self, key: &str) -> Result<(), LedgerError>;
}
