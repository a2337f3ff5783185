use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Uroflow Service API",
        version = "1.0.0",
        description = "Backend API for the uroflow clinical workflow tool.\n\n**Features:**\n- Patient and therapist registration and login\n- Patient flow-data submission and retrieval\n- Therapist lookup and patient-to-therapist association\n- Append-only upload of device-measured flow-test records"
    ),
    paths(
        // Health
        crate::api::health::root,
        crate::api::health::health_check,

        // Auth
        crate::api::auth::login,
        crate::api::auth::register_user,
        crate::api::auth::register_therapist,

        // Patients
        crate::api::patient_data::submit_patient_data,
        crate::api::patient_data::get_patient_data,
        crate::api::patient_data::list_patients_by_therapist,
        crate::api::patient_data::upload_exercise,

        // Therapists
        crate::api::therapists::get_therapist,
        crate::api::therapists::get_full_therapist,
    ),
    components(
        schemas(
            crate::models::AccountType,
            crate::models::PatientAccount,
            crate::models::TherapistAccount,
            crate::models::PatientFlowData,
            crate::models::FlowTestRecord,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::LoginResponse,
            crate::services::therapist_service::TherapistSummary,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and service info endpoints."),
        (name = "Auth", description = "Registration and login for patient and therapist accounts."),
        (name = "Patients", description = "Patient flow-data documents and flow-test record uploads."),
        (name = "Therapists", description = "Therapist lookup endpoints."),
    )
)]
pub struct ApiDoc;
