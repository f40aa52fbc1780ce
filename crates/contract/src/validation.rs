//! Validation rules checked before any state mutation.
//!
//! Pure functions over the current record and the submitted change. Each
//! returns the error variant the platform uses to decide rollback; none of
//! them touch the ledger.

use crate::error::ContractError;
use crate::record::ServiceRecord;

/// Mileage may hold steady or increase across updates, never decrease.
pub fn check_mileage(record_id: &str, stored: u64, submitted: u64) -> Result<(), ContractError> {
    if submitted < stored {
        return Err(ContractError::InvalidMileage {
            record_id: record_id.to_string(),
            stored,
            submitted,
        });
    }
    Ok(())
}

/// Approval is one-way: a record already acknowledged cannot be approved
/// again until an update resets the flag.
pub fn check_not_acknowledged(
    record_id: &str,
    record: &ServiceRecord,
) -> Result<(), ContractError> {
    if record.update_acknowledged {
        return Err(ContractError::AlreadyAcknowledged {
            record_id: record_id.to_string(),
        });
    }
    Ok(())
}

/// An ownership transfer must name an owner other than the current one.
pub fn check_owner_changes(
    record_id: &str,
    record: &ServiceRecord,
    new_owner_id: &str,
) -> Result<(), ContractError> {
    if new_owner_id == record.owner_id {
        return Err(ContractError::SameOwner {
            record_id: record_id.to_string(),
            owner_id: new_owner_id.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_mileage_is_rejected() {
        let err = check_mileage("2001", 1000, 900).unwrap_err();
        match err {
            ContractError::InvalidMileage {
                record_id,
                stored,
                submitted,
            } => {
                assert_eq!(record_id, "2001");
                assert_eq!(stored, 1000);
                assert_eq!(submitted, 900);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn equal_mileage_is_permitted() {
        assert!(check_mileage("2001", 1000, 1000).is_ok());
    }

    #[test]
    fn higher_mileage_is_permitted() {
        assert!(check_mileage("2001", 1000, 1500).is_ok());
    }

    #[test]
    fn acknowledged_record_cannot_be_approved_again() {
        let record = ServiceRecord {
            update_acknowledged: true,
            ..ServiceRecord::default()
        };
        let err = check_not_acknowledged("2001", &record).unwrap_err();
        assert!(matches!(err, ContractError::AlreadyAcknowledged { ref record_id } if record_id == "2001"));
    }

    #[test]
    fn unacknowledged_record_can_be_approved() {
        assert!(check_not_acknowledged("2001", &ServiceRecord::default()).is_ok());
    }

    #[test]
    fn transfer_to_current_owner_is_rejected() {
        let record = ServiceRecord {
            owner_id: "OWN-77".to_string(),
            ..ServiceRecord::default()
        };
        let err = check_owner_changes("2001", &record, "OWN-77").unwrap_err();
        assert!(matches!(err, ContractError::SameOwner { ref owner_id, .. } if owner_id == "OWN-77"));
    }

    #[test]
    fn transfer_to_different_owner_is_permitted() {
        let record = ServiceRecord {
            owner_id: "OWN-77".to_string(),
            ..ServiceRecord::default()
        };
        assert!(check_owner_changes("2001", &record, "OWN-78").is_ok());
    }
}
