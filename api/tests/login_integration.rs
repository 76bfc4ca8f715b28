//! Integration tests for the login endpoint against the in-memory
//! repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use chrono::NaiveDate;

use pa_api::dto::{ErrorResponse, TokenResponse};
use pa_api::routes::{auth, AppState};
use pa_core::domain::entities::user::CreateUser;
use pa_core::repositories::MockUserRepository;
use pa_core::services::token::TokenConfig;
use pa_core::services::{AuthService, TokenService, UserService};
use pa_shared::config::JwtConfig;

const TEST_SECRET: &str = "test-secret";

async fn test_state() -> web::Data<AppState<MockUserRepository>> {
    let repository = Arc::new(MockUserRepository::new());

    let jwt = JwtConfig::new(TEST_SECRET).with_duration_minutes(60);
    let token_service = Arc::new(TokenService::new(
        TokenConfig::from_jwt_config(&jwt).unwrap(),
    ));
    let auth_service = Arc::new(AuthService::new(repository.clone(), token_service));
    let user_service = Arc::new(UserService::new(repository));

    user_service
        .create(CreateUser {
            email: "a@b.com".to_string(),
            password: "secret123".to_string(),
            branch_id: 1,
            role_id: 1,
            full_name: "Ana Beltrán".to_string(),
            mobile_phone: "600111222".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: None,
        })
        .await
        .unwrap();

    web::Data::new(AppState {
        auth_service,
        user_service,
    })
}

fn login_request(username: &str, password: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/jwt/login")
        .set_form([("username", username), ("password", password)])
        .to_request()
}

#[actix_rt::test]
async fn test_login_with_valid_credentials_returns_token() {
    let state = test_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(auth::jwt_scope::<MockUserRepository>()),
    )
    .await;

    let resp = test::call_service(&app, login_request("a@b.com", "secret123")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenResponse = test::read_body_json(resp).await;
    assert_eq!(body.token_type, "bearer");
    assert!(!body.access_token.is_empty());
}

#[actix_rt::test]
async fn test_login_token_carries_subject_and_expiry() {
    let state = test_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(auth::jwt_scope::<MockUserRepository>()),
    )
    .await;

    let before = chrono::Utc::now().timestamp();
    let resp = test::call_service(&app, login_request("a@b.com", "secret123")).await;
    let after = chrono::Utc::now().timestamp();
    let body: TokenResponse = test::read_body_json(resp).await;

    let jwt = JwtConfig::new(TEST_SECRET).with_duration_minutes(60);
    let token_service = TokenService::new(TokenConfig::from_jwt_config(&jwt).unwrap());
    let claims = token_service.decode(&body.access_token).unwrap();

    assert_eq!(claims.sub, "a@b.com");
    assert!(claims.exp >= before + 3600);
    assert!(claims.exp <= after + 3600);
}

#[actix_rt::test]
async fn test_login_with_wrong_password_returns_400() {
    let state = test_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(auth::jwt_scope::<MockUserRepository>()),
    )
    .await;

    let resp = test::call_service(&app, login_request("a@b.com", "wrong")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.detail, "La contraseña no es correcta");
}

#[actix_rt::test]
async fn test_login_with_unknown_email_returns_400() {
    let state = test_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(auth::jwt_scope::<MockUserRepository>()),
    )
    .await;

    let resp = test::call_service(&app, login_request("nouser@b.com", "anything")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.detail, "El correo no es correcto");
}

#[actix_rt::test]
async fn test_repeated_logins_each_succeed() {
    let state = test_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(auth::jwt_scope::<MockUserRepository>()),
    )
    .await;

    let first = test::call_service(&app, login_request("a@b.com", "secret123")).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = test::call_service(&app, login_request("a@b.com", "secret123")).await;
    assert_eq!(second.status(), StatusCode::OK);
}
