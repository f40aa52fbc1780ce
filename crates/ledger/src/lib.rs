//! Ledger adapter surface for VvChain record storage.
//!
//! The surrounding platform owns the actual versioned key-value store; this
//! crate defines the narrow interface the record contract consumes: get, put,
//! and delete by string key. It also ships an in-memory backend for tests and
//! embedding, and a conformance suite any backend can run against itself.

pub mod conformance;

mod error;
mod memory;
mod traits;

pub use error::LedgerError;
pub use memory::MemoryLedger;
pub use traits::LedgerState;
