pub mod auth;
pub mod health;
pub mod patient_data;
pub mod swagger;
pub mod therapists;

use crate::services::ServiceError;
use actix_web::HttpResponse;

/// Builds the error body every failing endpoint returns.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    HttpResponse::build(err.status_code()).json(serde_json::json!({
        "detail": err.to_string()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn error_response_carries_status_and_detail() {
        let response = error_response(&ServiceError::NotFound("User not found".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(&ServiceError::Conflict("Email already registered".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&ServiceError::Unauthorized("Incorrect password".into()));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
