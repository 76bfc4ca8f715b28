use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;

use pa_api::routes::{auth, users, AppState};
use pa_core::services::token::TokenConfig;
use pa_core::services::{AuthService, TokenService, UserService};
use pa_infra::database::{DatabasePool, SqliteUserRepository};
use pa_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Personal API server");

    // Load configuration once; it is immutable from here on
    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        log::warn!("SECRET_KEY is not set; using the built-in development secret");
    }

    // Database pool and schema
    let database = DatabasePool::new(&config.database)
        .await
        .map_err(io_error)?;
    database.init_schema().await.map_err(io_error)?;

    // Wire up repositories and services
    let token_config = TokenConfig::from_jwt_config(&config.jwt).map_err(io_error)?;
    let user_repository = Arc::new(SqliteUserRepository::new(database.pool().clone()));
    let token_service = Arc::new(TokenService::new(token_config));
    let auth_service = Arc::new(AuthService::new(user_repository.clone(), token_service));
    let user_service = Arc::new(UserService::new(user_repository));

    let state = web::Data::new(AppState {
        auth_service,
        user_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .service(auth::jwt_scope::<SqliteUserRepository>())
            .service(users::users_scope::<SqliteUserRepository>())
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "personal-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

fn io_error(error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}
