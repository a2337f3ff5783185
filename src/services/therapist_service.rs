use crate::{
    database::{MongoDB, THERAPISTS_COLLECTION},
    models::{AccountType, TherapistAccount},
    services::ServiceError,
};
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

/// The common account shape a therapist shares with patient accounts.
/// Everything profile-specific is dropped on deserialization.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TherapistSummary {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Lookup projected to the common account shape.
pub async fn get_therapist(db: &MongoDB, email: &str) -> Result<TherapistSummary, ServiceError> {
    let collection = db.collection::<TherapistSummary>(THERAPISTS_COLLECTION);

    collection
        .find_one(doc! { "email": email, "type": "therapist" })
        .await?
        .ok_or_else(|| ServiceError::NotFound("Therapist not found".to_string()))
}

/// Full therapist document with the internal id stripped before returning.
pub async fn get_full_therapist(
    db: &MongoDB,
    email: &str,
) -> Result<TherapistAccount, ServiceError> {
    let collection = db.collection::<TherapistAccount>(THERAPISTS_COLLECTION);

    let mut therapist = collection
        .find_one(doc! { "email": email, "type": "therapist" })
        .await?
        .ok_or_else(|| ServiceError::NotFound("Therapist not found".to_string()))?;

    therapist.id = None;

    Ok(therapist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_drops_profile_fields() {
        let summary: TherapistSummary = serde_json::from_value(serde_json::json!({
            "username": "drsmith",
            "email": "t@x.com",
            "password": "secret",
            "type": "therapist",
            "first_name": "Jane",
            "last_name": "Smith",
            "dob": "01-01-1980",
            "height": 170
        }))
        .unwrap();

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "drsmith",
                "email": "t@x.com",
                "password": "secret",
                "type": "therapist"
            })
        );
    }
}
