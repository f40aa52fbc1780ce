/// All errors that can be returned by a LedgerState implementation.
///
/// Key absence is not an error: `get_state` returns `Ok(None)` for a key
/// that was never written or has been deleted.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A backend-specific failure (connection loss, I/O, poisoned lock).
    #[error("ledger backend error: {0}")]
    Backend(String),
}
