use crate::{
    database::{MongoDB, PATIENT_DATA_COLLECTION},
    models::{FlowTestRecord, PatientFlowData},
    services::ServiceError,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, to_bson};

/// Creates the one flow-data document a patient gets. Later writes only ever
/// append to its flowTestRecords array.
pub async fn submit_patient_data(db: &MongoDB, data: &PatientFlowData) -> Result<(), ServiceError> {
    let collection = db.collection::<PatientFlowData>(PATIENT_DATA_COLLECTION);

    let existing = collection.find_one(doc! { "email": &data.email }).await?;

    if existing.is_some() {
        return Err(ServiceError::Conflict(
            "Email already registered with a patient".to_string(),
        ));
    }

    collection.insert_one(data).await?;

    Ok(())
}

/// Exact-match lookup by email.
pub async fn get_patient_data(db: &MongoDB, email: &str) -> Result<PatientFlowData, ServiceError> {
    let collection = db.collection::<PatientFlowData>(PATIENT_DATA_COLLECTION);

    let mut data = collection
        .find_one(doc! { "email": email })
        .await?
        .ok_or_else(|| ServiceError::NotFound("Patient not found".to_string()))?;

    // Internal id stays internal
    data.id = None;

    Ok(data)
}

/// All patients whose `therapist_assigned` equals the given email, in
/// store-native order. An unknown therapist yields an empty list, never an
/// error.
pub async fn list_patients_by_therapist(
    db: &MongoDB,
    therapist_email: &str,
) -> Result<Vec<PatientFlowData>, ServiceError> {
    let collection = db.collection::<PatientFlowData>(PATIENT_DATA_COLLECTION);

    let cursor = collection
        .find(doc! { "therapist_assigned": therapist_email })
        .await?;

    let mut patients: Vec<PatientFlowData> = cursor.try_collect().await?;

    for patient in &mut patients {
        patient.id = None;
    }

    Ok(patients)
}

/// Appends flow-test records to the patient matching the exact
/// (email, first_name, last_name) triple. A mismatch on any of the three is
/// NotFound even when the email alone matches.
///
/// The merged array is written back with $set - replace-the-array semantics
/// at the store level, an append as observed by callers. Two writers racing
/// on the same patient may lose one batch.
pub async fn append_flow_records(
    db: &MongoDB,
    email: &str,
    first_name: &str,
    last_name: &str,
    new_records: Vec<FlowTestRecord>,
) -> Result<(), ServiceError> {
    let collection = db.collection::<PatientFlowData>(PATIENT_DATA_COLLECTION);

    let filter = doc! {
        "email": email,
        "first_name": first_name,
        "last_name": last_name,
    };

    let patient = collection
        .find_one(filter.clone())
        .await?
        .ok_or_else(|| ServiceError::NotFound("Patient not found".to_string()))?;

    let merged = append_records(patient.flow_test_records, new_records);

    collection
        .update_one(
            filter,
            doc! { "$set": { "flowTestRecords": to_bson(&merged)? } },
        )
        .await?;

    Ok(())
}

/// Prior entries keep their order; new ones go after them, duplicates and
/// all. Records are never deduplicated, edited, or removed.
fn append_records(
    existing: Option<Vec<FlowTestRecord>>,
    new_records: Vec<FlowTestRecord>,
) -> Vec<FlowTestRecord> {
    let mut records = existing.unwrap_or_default();
    records.extend(new_records);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(device: &str, peak: f64) -> FlowTestRecord {
        FlowTestRecord {
            device_name: device.to_string(),
            date_of_test: "2025-05-22".to_string(),
            total_voided_volume_ml: 310.5,
            peak_flow_rate_ml_s: peak,
            average_flow_rate_ml_s: 11.4,
            maximum_flow_rate_ml_s: None,
            voiding_time_sec: 27.2,
            flow_time_sec: None,
            flow_pattern: "normal".to_string(),
            raw_values: vec![0.0, 15.0, 32.0],
            notes: None,
        }
    }

    #[test]
    fn append_accumulates_in_order() {
        let r1 = record("meter-a", 16.8);
        let r2 = record("meter-a", 14.2);
        let r3 = record("meter-b", 18.1);

        let after_first = append_records(None, vec![r1.clone(), r2.clone()]);
        let after_second = append_records(Some(after_first), vec![r3.clone()]);

        assert_eq!(after_second, vec![r1, r2, r3]);
    }

    #[test]
    fn append_to_absent_array_starts_fresh() {
        let r1 = record("meter-a", 16.8);
        assert_eq!(append_records(None, vec![r1.clone()]), vec![r1]);
    }

    #[test]
    fn append_keeps_logical_duplicates() {
        let r1 = record("meter-a", 16.8);

        let once = append_records(None, vec![r1.clone()]);
        let twice = append_records(Some(once), vec![r1.clone()]);

        assert_eq!(twice.len(), 2);
        assert_eq!(twice[0], twice[1]);
    }

    #[test]
    fn append_with_no_new_records_is_a_no_op() {
        let r1 = record("meter-a", 16.8);
        assert_eq!(append_records(Some(vec![r1.clone()]), vec![]), vec![r1]);
    }
}
