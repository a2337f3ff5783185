use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One device-measured uroflow test result. Embedded append-only inside a
/// patient's flow-data document; never edited or removed once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlowTestRecord {
    pub device_name: String,
    pub date_of_test: String,
    /// Total urine volume voided in ml
    pub total_voided_volume_ml: f64,
    /// Peak urine flow rate in ml/sec
    pub peak_flow_rate_ml_s: f64,
    /// Average flow rate in ml/sec
    pub average_flow_rate_ml_s: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub maximum_flow_rate_ml_s: Option<f64>,
    /// Total time taken to void in seconds
    pub voiding_time_sec: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flow_time_sec: Option<f64>,
    /// Pattern type e.g. normal, intermittent, obstructed
    pub flow_pattern: String,
    /// Live graph data - weight or volume vs time
    pub raw_values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

/// Documento na collection "patient_data" - one per patient, keyed by email.
/// `user_id` and `therapist_assigned` are free-form references; neither is
/// validated against the account collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PatientFlowData {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub therapist_assigned: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blood_grp: Option<String>,
    pub flag: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_number: Option<String>,
    #[serde(
        rename = "flowTestRecords",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub flow_test_records: Option<Vec<FlowTestRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FlowTestRecord {
        FlowTestRecord {
            device_name: "UrineFlowMeter".to_string(),
            date_of_test: "2025-05-22".to_string(),
            total_voided_volume_ml: 310.5,
            peak_flow_rate_ml_s: 16.8,
            average_flow_rate_ml_s: 11.4,
            maximum_flow_rate_ml_s: None,
            voiding_time_sec: 27.2,
            flow_time_sec: None,
            flow_pattern: "normal".to_string(),
            raw_values: vec![0.0, 15.0, 32.0, 55.0, 74.0],
            notes: Some("Flow rate and pattern within normal range.".to_string()),
        }
    }

    #[test]
    fn record_deserializes_without_optional_measurements() {
        let json = serde_json::json!({
            "device_name": "UrineFlowMeter",
            "date_of_test": "2025-05-22",
            "total_voided_volume_ml": 310.5,
            "peak_flow_rate_ml_s": 16.8,
            "average_flow_rate_ml_s": 11.4,
            "voiding_time_sec": 27.2,
            "flow_pattern": "normal",
            "raw_values": [0, 15, 32]
        });

        let record: FlowTestRecord = serde_json::from_value(json).unwrap();
        assert!(record.maximum_flow_rate_ml_s.is_none());
        assert!(record.flow_time_sec.is_none());
        assert!(record.notes.is_none());
        assert_eq!(record.raw_values, vec![0.0, 15.0, 32.0]);
    }

    #[test]
    fn flow_records_keep_their_wire_name() {
        let data = PatientFlowData {
            id: None,
            user_id: "12345".to_string(),
            therapist_assigned: "therapist@gmail.com".to_string(),
            username: Some("APM".to_string()),
            first_name: "Anirudh".to_string(),
            last_name: "Menon".to_string(),
            email: "APM@gmail.com".to_string(),
            dob: None,
            blood_grp: Some("O+".to_string()),
            flag: 1,
            height: Some(176),
            weight: Some(70),
            gender: Some("male".to_string()),
            phone_number: None,
            flow_test_records: Some(vec![sample_record()]),
        };

        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("flowTestRecords").is_some());
        assert!(value.get("flow_test_records").is_none());
        // internal id never leaks when unset
        assert!(value.get("_id").is_none());

        let back: PatientFlowData = serde_json::from_value(value).unwrap();
        assert_eq!(back, data);
    }
}
