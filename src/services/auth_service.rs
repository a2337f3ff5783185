use crate::{
    database::{MongoDB, PATIENTS_COLLECTION, THERAPISTS_COLLECTION},
    models::{AccountType, PatientAccount, TherapistAccount},
    services::ServiceError,
};
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

// ==================== REQUEST/RESPONSE MODELS ====================

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Selects which account collection is searched.
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Projection of the fields login needs. Both account collections carry
/// these; everything else in the document is ignored on deserialization.
#[derive(Debug, Deserialize)]
struct StoredCredentials {
    username: String,
    password: String,
    #[serde(rename = "type")]
    account_type: AccountType,
}

// ==================== SERVICE FUNCTIONS ====================

/// Login against the collection selected by the claimed account type.
/// Plaintext, byte-for-byte password comparison - this system stores
/// credentials exactly as submitted.
pub async fn login(db: &MongoDB, request: &LoginRequest) -> Result<LoginResponse, ServiceError> {
    let collection_name = match request.account_type {
        AccountType::Patient => PATIENTS_COLLECTION,
        AccountType::Therapist => THERAPISTS_COLLECTION,
    };

    let collection = db.collection::<StoredCredentials>(collection_name);

    let account = collection
        .find_one(doc! { "email": &request.email })
        .await?
        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

    if account.password != request.password {
        return Err(ServiceError::Unauthorized("Incorrect password".to_string()));
    }

    Ok(LoginResponse {
        message: "Login successful".to_string(),
        username: account.username,
        account_type: account.account_type,
    })
}

/// Registers a patient account. The patient and therapist collections are
/// checked independently; an email may exist in both.
pub async fn register_patient(db: &MongoDB, account: &PatientAccount) -> Result<(), ServiceError> {
    if account.account_type != AccountType::Patient {
        return Err(ServiceError::BadRequest(
            "Invalid account type for this endpoint".to_string(),
        ));
    }

    let collection = db.collection::<PatientAccount>(PATIENTS_COLLECTION);

    let existing = collection
        .find_one(doc! { "email": &account.email })
        .await?;

    if existing.is_some() {
        return Err(ServiceError::Conflict(
            "Email already registered".to_string(),
        ));
    }

    collection.insert_one(account).await?;

    Ok(())
}

/// Registers a therapist account, stored verbatim including the profile block.
pub async fn register_therapist(
    db: &MongoDB,
    account: &TherapistAccount,
) -> Result<(), ServiceError> {
    let collection = db.collection::<TherapistAccount>(THERAPISTS_COLLECTION);

    let existing = collection
        .find_one(doc! { "email": &account.email })
        .await?;

    if existing.is_some() {
        return Err(ServiceError::Conflict(
            "Email already registered".to_string(),
        ));
    }

    collection.insert_one(account).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_reads_the_type_field() {
        let request: LoginRequest = serde_json::from_value(serde_json::json!({
            "type": "patient",
            "email": "APM@gmail.com",
            "password": "21345"
        }))
        .unwrap();

        assert_eq!(request.account_type, AccountType::Patient);
        assert_eq!(request.email, "APM@gmail.com");
    }

    #[test]
    fn credentials_projection_ignores_profile_fields() {
        // A therapist document carries far more than the login projection
        let creds: StoredCredentials = serde_json::from_value(serde_json::json!({
            "username": "drsmith",
            "email": "t@x.com",
            "password": "secret",
            "type": "therapist",
            "first_name": "Jane",
            "last_name": "Smith",
            "phone_number": "28917221"
        }))
        .unwrap();

        assert_eq!(creds.username, "drsmith");
        assert_eq!(creds.account_type, AccountType::Therapist);
    }

    #[test]
    fn login_response_tags_the_account_type() {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            username: "APM".to_string(),
            account_type: AccountType::Patient,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "patient");
        assert_eq!(value["message"], "Login successful");
    }
}
