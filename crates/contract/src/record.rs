//! The vehicle service record schema and its stored encoding.

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// A vehicle service record, the sole entity managed by the contract.
///
/// The record identifier is the ledger key, supplied by the caller and never
/// stored inside the value. Wire field names are camelCase to match the
/// encoding the platform contract has always written.
///
/// `mileage` is monotonic: updates may hold it steady or raise it, never
/// lower it. `update_acknowledged` is one-way: approve flips it false to
/// true exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ServiceRecord {
    pub customer_name: String,
    pub owner_id: String,
    pub workshop_id: String,
    pub workshop_name: String,
    pub vehicle_reg_no: String,
    pub vehicle_make_model: String,
    pub engine_no: String,
    pub chasis_no: String,
    pub service_id: String,
    pub service_date: String,
    pub mileage: u64,
    pub engine_oil_type: String,
    pub engine_oil_replaced: bool,
    pub oil_filter_replaced: bool,
    pub battery_model: String,
    pub battery_replaced: bool,
    pub brake_pad_model: String,
    pub brake_pad_replaced: bool,
    pub compressor_replaced: bool,
    pub alternator_serviced: bool,
    pub update_acknowledged: bool,
}

impl ServiceRecord {
    /// Encode the record for storage. Field order is the declaration order,
    /// so equal records always encode to equal bytes.
    pub fn to_bytes(&self, record_id: &str) -> Result<Vec<u8>, ContractError> {
        serde_json::to_vec(self).map_err(|e| ContractError::Codec {
            record_id: record_id.to_string(),
            message: e.to_string(),
        })
    }

    /// Decode a stored value back into a record.
    ///
    /// Fields absent from the stored value deserialize to their defaults
    /// (empty string, 0, false); fields the schema does not declare are
    /// rejected rather than silently dropped.
    pub fn from_bytes(record_id: &str, bytes: &[u8]) -> Result<Self, ContractError> {
        serde_json::from_slice(bytes).map_err(|e| ContractError::Codec {
            record_id: record_id.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServiceRecord {
        ServiceRecord {
            customer_name: "Aisha Rahman".to_string(),
            owner_id: "OWN-77".to_string(),
            workshop_id: "WS-04".to_string(),
            workshop_name: "Jalan Ipoh Auto".to_string(),
            vehicle_reg_no: "WXY 1234".to_string(),
            vehicle_make_model: "Proton Saga 1.3".to_string(),
            engine_no: "ENG-889900".to_string(),
            chasis_no: "CHS-112233".to_string(),
            service_id: "SVC-2026-015".to_string(),
            service_date: "2026-03-14".to_string(),
            mileage: 48_200,
            engine_oil_type: "5W-30".to_string(),
            engine_oil_replaced: true,
            oil_filter_replaced: true,
            battery_model: "NS60L".to_string(),
            battery_replaced: false,
            brake_pad_model: "BP-330".to_string(),
            brake_pad_replaced: true,
            compressor_replaced: false,
            alternator_serviced: false,
            update_acknowledged: false,
        }
    }

    #[test]
    fn encode_decode_round_trips() {
        let record = sample();
        let bytes = record.to_bytes("2001").unwrap();
        let decoded = ServiceRecord::from_bytes("2001", &bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let bytes = sample().to_bytes("2001").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["customerName"], "Aisha Rahman");
        assert_eq!(value["vehicleRegNo"], "WXY 1234");
        assert_eq!(value["chasisNo"], "CHS-112233");
        assert_eq!(value["mileage"], 48_200);
        assert_eq!(value["updateAcknowledged"], false);
    }

    #[test]
    fn absent_fields_decode_to_defaults() {
        let decoded =
            ServiceRecord::from_bytes("2001", br#"{"ownerId":"OWN-77","mileage":500}"#).unwrap();
        assert_eq!(decoded.owner_id, "OWN-77");
        assert_eq!(decoded.mileage, 500);
        assert_eq!(decoded.customer_name, "");
        assert!(!decoded.update_acknowledged);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ServiceRecord::from_bytes("2001", br#"{"ownerId":"OWN-77","turboFitted":true}"#)
            .unwrap_err();
        assert!(matches!(err, ContractError::Codec { ref record_id, .. } if record_id == "2001"));
    }

    #[test]
    fn malformed_bytes_name_the_record() {
        let err = ServiceRecord::from_bytes("2001", b"not json").unwrap_err();
        assert!(matches!(err, ContractError::Codec { ref record_id, .. } if record_id == "2001"));
    }

    #[test]
    fn negative_mileage_is_unrepresentable() {
        let err = ServiceRecord::from_bytes("2001", br#"{"mileage":-1}"#).unwrap_err();
        assert!(matches!(err, ContractError::Codec { .. }));
    }
}
