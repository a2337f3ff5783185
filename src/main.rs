mod api;
mod database;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Uroflow Service...");
    log::info!("📊 Database: {}", database_url);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // Wide-open CORS: the API is callable from any web origin
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness / health
            .route("/", web::get().to(api::health::root))
            .route("/health", web::get().to(api::health::health_check))
            // Auth endpoints
            .route("/login", web::post().to(api::auth::login))
            .route("/register/user", web::post().to(api::auth::register_user))
            .route(
                "/register/therapist",
                web::post().to(api::auth::register_therapist),
            )
            // Patient flow data
            .route(
                "/patient-data",
                web::post().to(api::patient_data::submit_patient_data),
            )
            .route(
                "/patient-data",
                web::get().to(api::patient_data::get_patient_data),
            )
            .route(
                "/patients/{therapist_email}",
                web::get().to(api::patient_data::list_patients_by_therapist),
            )
            .route(
                "/upload-exercise/",
                web::post().to(api::patient_data::upload_exercise),
            )
            // Therapist lookup
            .route(
                "/getTherapist/{email}",
                web::get().to(api::therapists::get_therapist),
            )
            .route(
                "/getFullTherapist/{email}",
                web::get().to(api::therapists::get_full_therapist),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
