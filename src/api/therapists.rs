use crate::{
    api::error_response, database::MongoDB, models::TherapistAccount,
    services::therapist_service,
};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/getTherapist/{email}",
    tag = "Therapists",
    params(
        ("email" = String, Path, description = "Therapist email")
    ),
    responses(
        (status = 200, description = "Therapist in the common account shape", body = therapist_service::TherapistSummary),
        (status = 404, description = "Therapist not found")
    )
)]
pub async fn get_therapist(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();
    log::info!("🔍 GET /getTherapist/{}", email);

    match therapist_service::get_therapist(&db, &email).await {
        Ok(therapist) => HttpResponse::Ok().json(therapist),
        Err(e) => {
            log::warn!("❌ Therapist lookup failed: {} - {}", email, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/getFullTherapist/{email}",
    tag = "Therapists",
    params(
        ("email" = String, Path, description = "Therapist email")
    ),
    responses(
        (status = 200, description = "Full therapist document, internal id stripped", body = TherapistAccount),
        (status = 404, description = "Therapist not found")
    )
)]
pub async fn get_full_therapist(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();
    log::info!("🔍 GET /getFullTherapist/{}", email);

    match therapist_service::get_full_therapist(&db, &email).await {
        Ok(therapist) => HttpResponse::Ok().json(therapist),
        Err(e) => {
            log::warn!("❌ Full therapist lookup failed: {} - {}", email, e);
            error_response(&e)
        }
    }
}
