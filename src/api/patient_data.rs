use crate::{
    api::error_response,
    database::MongoDB,
    models::{FlowTestRecord, PatientFlowData},
    services::patient_service,
};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct PatientDataQuery {
    pub email: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct UploadExerciseQuery {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[utoipa::path(
    post,
    path = "/patient-data",
    tag = "Patients",
    request_body = PatientFlowData,
    responses(
        (status = 200, description = "Patient data added"),
        (status = 400, description = "Email already registered with a patient")
    )
)]
pub async fn submit_patient_data(
    db: web::Data<MongoDB>,
    data: web::Json<PatientFlowData>,
) -> HttpResponse {
    log::info!("📝 POST /patient-data - email: {}", data.email);

    match patient_service::submit_patient_data(&db, &data).await {
        Ok(()) => {
            log::info!("✅ Patient data added: {}", data.email);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Patient data successfully added"
            }))
        }
        Err(e) => {
            log::warn!("❌ Patient data submission failed: {} - {}", data.email, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/patient-data",
    tag = "Patients",
    params(PatientDataQuery),
    responses(
        (status = 200, description = "Patient flow data", body = PatientFlowData),
        (status = 404, description = "Patient not found")
    )
)]
pub async fn get_patient_data(
    db: web::Data<MongoDB>,
    query: web::Query<PatientDataQuery>,
) -> HttpResponse {
    log::info!("🔍 GET /patient-data - email: {}", query.email);

    match patient_service::get_patient_data(&db, &query.email).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => {
            log::warn!("❌ Patient lookup failed: {} - {}", query.email, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/patients/{therapist_email}",
    tag = "Patients",
    params(
        ("therapist_email" = String, Path, description = "Email of the assigned therapist")
    ),
    responses(
        (status = 200, description = "Patients assigned to the therapist, possibly empty", body = [PatientFlowData])
    )
)]
pub async fn list_patients_by_therapist(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> HttpResponse {
    let therapist_email = path.into_inner();
    log::info!("🔍 GET /patients/{}", therapist_email);

    match patient_service::list_patients_by_therapist(&db, &therapist_email).await {
        Ok(patients) => {
            log::info!(
                "✅ Found {} patient(s) for {}",
                patients.len(),
                therapist_email
            );
            HttpResponse::Ok().json(patients)
        }
        Err(e) => {
            log::error!("❌ Patient listing failed: {} - {}", therapist_email, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/upload-exercise/",
    tag = "Patients",
    params(UploadExerciseQuery),
    request_body = Vec<FlowTestRecord>,
    responses(
        (status = 200, description = "Records appended"),
        (status = 404, description = "No patient matches the email/name triple")
    )
)]
pub async fn upload_exercise(
    db: web::Data<MongoDB>,
    query: web::Query<UploadExerciseQuery>,
    records: web::Json<Vec<FlowTestRecord>>,
) -> HttpResponse {
    log::info!(
        "📤 POST /upload-exercise/ - email: {}, records: {}",
        query.email,
        records.len()
    );

    match patient_service::append_flow_records(
        &db,
        &query.email,
        &query.first_name,
        &query.last_name,
        records.into_inner(),
    )
    .await
    {
        Ok(()) => {
            log::info!("✅ Flow records appended: {}", query.email);
            HttpResponse::Ok().json(serde_json::json!([
                { "message": "Flow test records uploaded successfully" }
            ]))
        }
        Err(e) => {
            log::warn!("❌ Flow record upload failed: {} - {}", query.email, e);
            error_response(&e)
        }
    }
}
