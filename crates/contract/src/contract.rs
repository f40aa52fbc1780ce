//! Contract operations over vehicle service records.
//!
//! Every operation follows the same shape: check existence under the caller's
//! identifier, read the current value where the semantics need it, run the
//! validation rules, then write back (or delete). Atomicity of the
//! read-then-write sequence is provided by the platform's transaction
//! context; a failure at any step aborts before the write, so the prior
//! stored value remains the effective state.

use vvchain_ledger::LedgerState;

use crate::context::TransactionContext;
use crate::error::ContractError;
use crate::record::ServiceRecord;
use crate::validation::{check_mileage, check_not_acknowledged, check_owner_changes};

/// The record contract. Stateless; all state lives in the ledger.
#[derive(Debug, Default)]
pub struct RecordContract;

impl RecordContract {
    pub fn new() -> Self {
        Self
    }

    /// Whether a non-empty value is stored under `record_id`.
    ///
    /// Absence is a valid `false`, never an error.
    pub async fn record_exists<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        record_id: &str,
    ) -> Result<bool, ContractError> {
        let stored = ctx.ledger().get_state(record_id).await?;
        Ok(matches!(stored, Some(bytes) if !bytes.is_empty()))
    }

    /// Store a new record under `record_id`.
    ///
    /// All fields are caller-supplied, including the service-action flags and
    /// `update_acknowledged`; nothing is defaulted here.
    pub async fn create_record<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        record_id: &str,
        record: ServiceRecord,
    ) -> Result<(), ContractError> {
        if self.record_exists(ctx, record_id).await? {
            return Err(ContractError::AlreadyExists {
                record_id: record_id.to_string(),
            });
        }
        let bytes = record.to_bytes(record_id)?;
        ctx.ledger().put_state(record_id, &bytes).await?;
        Ok(())
    }

    /// Return the stored record unchanged.
    pub async fn read_record<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        record_id: &str,
    ) -> Result<ServiceRecord, ContractError> {
        let stored = ctx.ledger().get_state(record_id).await?;
        match stored {
            Some(bytes) if !bytes.is_empty() => ServiceRecord::from_bytes(record_id, &bytes),
            _ => Err(ContractError::NotFound {
                record_id: record_id.to_string(),
            }),
        }
    }

    /// Overwrite every field of an existing record.
    ///
    /// The submitted mileage must not fall below the stored mileage; equal is
    /// permitted (a re-service with no distance traveled).
    pub async fn update_record<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        record_id: &str,
        record: ServiceRecord,
    ) -> Result<(), ContractError> {
        let current = self.read_record(ctx, record_id).await?;
        check_mileage(record_id, current.mileage, record.mileage)?;
        let bytes = record.to_bytes(record_id)?;
        ctx.ledger().put_state(record_id, &bytes).await?;
        Ok(())
    }

    /// Acknowledge the most recent update. One-way: a second approve without
    /// an intervening update is rejected.
    pub async fn approve_record<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        record_id: &str,
    ) -> Result<(), ContractError> {
        let mut record = self.read_record(ctx, record_id).await?;
        check_not_acknowledged(record_id, &record)?;
        record.update_acknowledged = true;
        let bytes = record.to_bytes(record_id)?;
        ctx.ledger().put_state(record_id, &bytes).await?;
        Ok(())
    }

    /// Reassign the record to a new owner, overwriting only `owner_id` and
    /// `customer_name`.
    pub async fn transfer_ownership<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        record_id: &str,
        new_customer_name: &str,
        new_owner_id: &str,
    ) -> Result<(), ContractError> {
        let mut record = self.read_record(ctx, record_id).await?;
        check_owner_changes(record_id, &record, new_owner_id)?;
        record.owner_id = new_owner_id.to_string();
        record.customer_name = new_customer_name.to_string();
        let bytes = record.to_bytes(record_id)?;
        ctx.ledger().put_state(record_id, &bytes).await?;
        Ok(())
    }

    /// Remove the record from the ledger.
    pub async fn delete_record<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        record_id: &str,
    ) -> Result<(), ContractError> {
        if !self.record_exists(ctx, record_id).await? {
            return Err(ContractError::NotFound {
                record_id: record_id.to_string(),
            });
        }
        ctx.ledger().delete_state(record_id).await?;
        Ok(())
    }
}
