use crate::{
    api::error_response,
    database::MongoDB,
    models::{PatientAccount, TherapistAccount},
    services::auth_service,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = auth_service::LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = auth_service::LoginResponse),
        (status = 401, description = "Incorrect password"),
        (status = 404, description = "User not found")
    )
)]
pub async fn login(
    db: web::Data<MongoDB>,
    request: web::Json<auth_service::LoginRequest>,
) -> HttpResponse {
    log::info!(
        "🔐 POST /login - email: {}, type: {}",
        request.email,
        request.account_type.as_str()
    );

    match auth_service::login(&db, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/register/user",
    tag = "Auth",
    request_body = PatientAccount,
    responses(
        (status = 200, description = "Patient registered"),
        (status = 400, description = "Email already registered or invalid account type")
    )
)]
pub async fn register_user(
    db: web::Data<MongoDB>,
    account: web::Json<PatientAccount>,
) -> HttpResponse {
    log::info!("📝 POST /register/user - email: {}", account.email);

    match auth_service::register_patient(&db, &account).await {
        Ok(()) => {
            log::info!("✅ Patient registered: {}", account.email);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "User registered successfully"
            }))
        }
        Err(e) => {
            log::warn!("❌ Patient registration failed: {} - {}", account.email, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/register/therapist",
    tag = "Auth",
    request_body = TherapistAccount,
    responses(
        (status = 200, description = "Therapist registered"),
        (status = 400, description = "Email already registered")
    )
)]
pub async fn register_therapist(
    db: web::Data<MongoDB>,
    account: web::Json<TherapistAccount>,
) -> HttpResponse {
    log::info!("📝 POST /register/therapist - email: {}", account.email);

    match auth_service::register_therapist(&db, &account).await {
        Ok(()) => {
            log::info!("✅ Therapist registered: {}", account.email);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Therapist registered successfully"
            }))
        }
        Err(e) => {
            log::warn!(
                "❌ Therapist registration failed: {} - {}",
                account.email,
                e
            );
            error_response(&e)
        }
    }
}
