pub mod auth_service;
pub mod error;
pub mod patient_service;
pub mod therapist_service;

pub use error::ServiceError;
