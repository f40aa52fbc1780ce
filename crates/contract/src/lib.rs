//! VvChain record contract -- lifecycle management for vehicle service
//! records stored in an externally supplied key-value ledger.
//!
//! The contract owns the record state machine and its validation rules:
//! existence checks, mileage monotonicity, acknowledgment gating, and
//! ownership-transfer invariants. Everything around it (consensus,
//! replication, transaction ordering, transport) belongs to the platform,
//! which reaches the contract through [`OperationRegistry::dispatch`] or the
//! typed [`RecordContract`] methods directly.

pub mod contract;
pub mod context;
pub mod error;
pub mod record;
pub mod registry;
pub mod validation;

pub use contract::RecordContract;
pub use context::TransactionContext;
pub use error::ContractError;
pub use record::ServiceRecord;
pub use registry::{OperationDef, OperationRegistry};
