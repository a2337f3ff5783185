use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Account kind tag stored on every account document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Patient,
    Therapist,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Patient => "patient",
            AccountType::Therapist => "therapist",
        }
    }
}

/// Patient login account - documento na collection "patients".
/// Password is stored as given; this system does no hashing.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PatientAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Therapist login account - documento na collection "therapists".
/// Carries the common account fields plus a profile block.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TherapistAccount {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blood_grp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_uses_lowercase_tag() {
        assert_eq!(
            serde_json::to_value(AccountType::Patient).unwrap(),
            serde_json::json!("patient")
        );
        assert_eq!(
            serde_json::to_value(AccountType::Therapist).unwrap(),
            serde_json::json!("therapist")
        );
    }

    #[test]
    fn patient_account_round_trips_with_type_field() {
        let json = serde_json::json!({
            "username": "APM",
            "email": "APM@gmail.com",
            "password": "21345",
            "type": "patient"
        });

        let account: PatientAccount = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(account.account_type, AccountType::Patient);
        assert_eq!(serde_json::to_value(&account).unwrap(), json);
    }

    #[test]
    fn therapist_account_tolerates_missing_profile_fields() {
        let json = serde_json::json!({
            "username": "drsmith",
            "email": "t@x.com",
            "password": "secret",
            "type": "therapist",
            "first_name": "Jane",
            "last_name": "Smith"
        });

        let account: TherapistAccount = serde_json::from_value(json).unwrap();
        assert!(account.id.is_none());
        assert!(account.dob.is_none());
        assert!(account.phone_number.is_none());

        // None id and empty optionals never serialize
        let value = serde_json::to_value(&account).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("dob").is_none());
    }
}
