use vvchain_ledger::LedgerError;

/// All errors that can be returned by a contract operation.
///
/// Every failure aborts the current operation before any write; the platform
/// inspects the variant to decide rollback. Each variant carries the record
/// identifier (or operation name) so the caller can tell which invocation
/// violated which rule.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Create on an identifier that already holds a record.
    #[error("record {record_id} already exists")]
    AlreadyExists { record_id: String },

    /// Read/update/approve/transfer/delete on a missing identifier.
    #[error("record {record_id} does not exist")]
    NotFound { record_id: String },

    /// Update carrying a mileage below the currently stored mileage.
    /// Equal mileage is permitted (a re-service without distance traveled).
    #[error("invalid mileage for record {record_id}: submitted {submitted}, stored {stored}")]
    InvalidMileage {
        record_id: String,
        stored: u64,
        submitted: u64,
    },

    /// Approve on a record whose update is already acknowledged.
    #[error("record {record_id} is already acknowledged")]
    AlreadyAcknowledged { record_id: String },

    /// Ownership transfer naming the current owner as the new owner.
    #[error("record {record_id} is already owned by {owner_id}")]
    SameOwner {
        record_id: String,
        owner_id: String,
    },

    /// Stored bytes that do not decode as a record, or an encode failure.
    #[error("record codec error for {record_id}: {message}")]
    Codec { record_id: String, message: String },

    /// Ledger adapter failure, propagated unchanged.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Dispatch of an operation name the registry does not know.
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    /// Wrong arity or an uncoercible positional argument at the dispatch
    /// boundary.
    #[error("invalid argument for {operation}: {message}")]
    InvalidArgument { operation: String, message: String },
}
