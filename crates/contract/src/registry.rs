//! Operation registry and dispatch surface.
//!
//! The platform invokes contract methods by name with positional string
//! arguments. Rather than inferring the method table from annotations, the
//! registry is built explicitly at startup: a map from operation name to a
//! descriptor carrying the read-only flag and the handler. Dispatch coerces
//! the raw arguments to their declared types (mileage to an integer, the
//! service-action flags to booleans) before reaching the typed contract
//! methods, so a malformed argument fails fast with the operation named.

use std::collections::BTreeMap;

use serde_json::Value;
use vvchain_ledger::LedgerState;

use crate::contract::RecordContract;
use crate::context::TransactionContext;
use crate::error::ContractError;
use crate::record::ServiceRecord;

/// Number of positional arguments for create/update: the identifier plus
/// every record field in declaration order.
const RECORD_ARG_COUNT: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Exists,
    Create,
    Read,
    Update,
    Approve,
    Transfer,
    Delete,
}

/// A registered operation: its invocation name and whether it mutates state.
///
/// Read-only operations never write; the platform can skip endorsement for
/// them.
#[derive(Debug, Clone, Copy)]
pub struct OperationDef {
    pub name: &'static str,
    pub read_only: bool,
    handler: Handler,
}

/// The contract's dispatch table, constructed once at startup.
pub struct OperationRegistry {
    contract: RecordContract,
    defs: BTreeMap<&'static str, OperationDef>,
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationRegistry {
    pub fn new() -> Self {
        let mut defs = BTreeMap::new();
        for def in [
            OperationDef {
                name: "vehicleDetailExists",
                read_only: true,
                handler: Handler::Exists,
            },
            OperationDef {
                name: "createVehicleDetail",
                read_only: false,
                handler: Handler::Create,
            },
            OperationDef {
                name: "readVehicleDetail",
                read_only: true,
                handler: Handler::Read,
            },
            OperationDef {
                name: "updateVehicleDetail",
                read_only: false,
                handler: Handler::Update,
            },
            OperationDef {
                name: "approveVehicleDetail",
                read_only: false,
                handler: Handler::Approve,
            },
            OperationDef {
                name: "ownershipTransfer",
                read_only: false,
                handler: Handler::Transfer,
            },
            OperationDef {
                name: "deleteVehicleDetail",
                read_only: false,
                handler: Handler::Delete,
            },
        ] {
            defs.insert(def.name, def);
        }
        Self {
            contract: RecordContract::new(),
            defs,
        }
    }

    /// All registered operations, ordered by name.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDef> {
        self.defs.values()
    }

    pub fn get(&self, name: &str) -> Option<&OperationDef> {
        self.defs.get(name)
    }

    /// Invoke an operation by name with positional string arguments.
    ///
    /// Returns `Bool` for the existence check, the record object for read,
    /// and `Null` for the mutating operations.
    pub async fn dispatch<L: LedgerState>(
        &self,
        ctx: &TransactionContext<'_, L>,
        name: &str,
        args: &[String],
    ) -> Result<Value, ContractError> {
        let def = self
            .defs
            .get(name)
            .ok_or_else(|| ContractError::UnknownOperation {
                name: name.to_string(),
            })?;

        match def.handler {
            Handler::Exists => {
                expect_arity(def.name, args, 1)?;
                let exists = self.contract.record_exists(ctx, &args[0]).await?;
                Ok(Value::Bool(exists))
            }
            Handler::Create => {
                expect_arity(def.name, args, RECORD_ARG_COUNT)?;
                let record = record_from_args(def.name, args)?;
                self.contract.create_record(ctx, &args[0], record).await?;
                Ok(Value::Null)
            }
            Handler::Read => {
                expect_arity(def.name, args, 1)?;
                let record = self.contract.read_record(ctx, &args[0]).await?;
                serde_json::to_value(record).map_err(|e| ContractError::Codec {
                    record_id: args[0].clone(),
                    message: e.to_string(),
                })
            }
            Handler::Update => {
                expect_arity(def.name, args, RECORD_ARG_COUNT)?;
                let record = record_from_args(def.name, args)?;
                self.contract.update_record(ctx, &args[0], record).await?;
                Ok(Value::Null)
            }
            Handler::Approve => {
                expect_arity(def.name, args, 1)?;
                self.contract.approve_record(ctx, &args[0]).await?;
                Ok(Value::Null)
            }
            Handler::Transfer => {
                expect_arity(def.name, args, 3)?;
                self.contract
                    .transfer_ownership(ctx, &args[0], &args[1], &args[2])
                    .await?;
                Ok(Value::Null)
            }
            Handler::Delete => {
                expect_arity(def.name, args, 1)?;
                self.contract.delete_record(ctx, &args[0]).await?;
                Ok(Value::Null)
            }
        }
    }
}

fn expect_arity(operation: &str, args: &[String], want: usize) -> Result<(), ContractError> {
    if args.len() != want {
        return Err(ContractError::InvalidArgument {
            operation: operation.to_string(),
            message: format!("expected {} arguments, got {}", want, args.len()),
        });
    }
    Ok(())
}

fn parse_mileage(operation: &str, raw: &str) -> Result<u64, ContractError> {
    raw.parse::<u64>()
        .map_err(|_| ContractError::InvalidArgument {
            operation: operation.to_string(),
            message: format!("mileage must be a non-negative integer, got {raw:?}"),
        })
}

fn parse_flag(operation: &str, field: &str, raw: &str) -> Result<bool, ContractError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ContractError::InvalidArgument {
            operation: operation.to_string(),
            message: format!("{field} must be \"true\" or \"false\", got {raw:?}"),
        }),
    }
}

/// Coerce the positional create/update argument list into a record.
/// `args[0]` is the identifier; the remaining 21 arguments are the record
/// fields in declaration order.
fn record_from_args(operation: &str, args: &[String]) -> Result<ServiceRecord, ContractError> {
    Ok(ServiceRecord {
        customer_name: args[1].clone(),
        owner_id: args[2].clone(),
        workshop_id: args[3].clone(),
        workshop_name: args[4].clone(),
        vehicle_reg_no: args[5].clone(),
        vehicle_make_model: args[6].clone(),
        engine_no: args[7].clone(),
        chasis_no: args[8].clone(),
        service_id: args[9].clone(),
        service_date: args[10].clone(),
        mileage: parse_mileage(operation, &args[11])?,
        engine_oil_type: args[12].clone(),
        engine_oil_replaced: parse_flag(operation, "engineOilReplaced", &args[13])?,
        oil_filter_replaced: parse_flag(operation, "oilFilterReplaced", &args[14])?,
        battery_model: args[15].clone(),
        battery_replaced: parse_flag(operation, "batteryReplaced", &args[16])?,
        brake_pad_model: args[17].clone(),
        brake_pad_replaced: parse_flag(operation, "brakePadReplaced", &args[18])?,
        compressor_replaced: parse_flag(operation, "compressorReplaced", &args[19])?,
        alternator_serviced: parse_flag(operation, "alternatorServiced", &args[20])?,
        update_acknowledged: parse_flag(operation, "updateAcknowledged", &args[21])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vvchain_ledger::MemoryLedger;

    #[test]
    fn registry_lists_every_operation_with_its_flag() {
        let registry = OperationRegistry::new();
        let ops: Vec<(&str, bool)> = registry
            .operations()
            .map(|def| (def.name, def.read_only))
            .collect();
        assert_eq!(
            ops,
            vec![
                ("approveVehicleDetail", false),
                ("createVehicleDetail", false),
                ("deleteVehicleDetail", false),
                ("ownershipTransfer", false),
                ("readVehicleDetail", true),
                ("updateVehicleDetail", false),
                ("vehicleDetailExists", true),
            ]
        );
    }

    #[tokio::test]
    async fn unknown_operation_is_rejected() {
        let ledger = MemoryLedger::new();
        let ctx = TransactionContext::new(&ledger, "client-1");
        let registry = OperationRegistry::new();
        let err = registry
            .dispatch(&ctx, "createVvChain", &["2001".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, ContractError::UnknownOperation { ref name } if name == "createVvChain"));
    }

    #[tokio::test]
    async fn wrong_arity_names_the_operation() {
        let ledger = MemoryLedger::new();
        let ctx = TransactionContext::new(&ledger, "client-1");
        let registry = OperationRegistry::new();
        let err = registry
            .dispatch(&ctx, "ownershipTransfer", &["2001".to_string()])
            .await
            .unwrap_err();
        match err {
            ContractError::InvalidArgument { operation, message } => {
                assert_eq!(operation, "ownershipTransfer");
                assert!(message.contains("expected 3 arguments"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mileage_must_be_numeric() {
        let err = parse_mileage("updateVehicleDetail", "12k").unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument { .. }));
        assert_eq!(parse_mileage("updateVehicleDetail", "48200").unwrap(), 48_200);
    }

    #[test]
    fn flags_accept_only_true_or_false() {
        assert!(parse_flag("createVehicleDetail", "batteryReplaced", "true").unwrap());
        assert!(!parse_flag("createVehicleDetail", "batteryReplaced", "false").unwrap());
        let err = parse_flag("createVehicleDetail", "batteryReplaced", "yes").unwrap_err();
        match err {
            ContractError::InvalidArgument { message, .. } => {
                assert!(message.contains("batteryReplaced"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
