//! Login endpoint

use actix_web::{web, HttpResponse};

use pa_core::repositories::UserRepository;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::login_error_response;
use crate::routes::AppState;

/// Handler for POST /jwt/login
///
/// Accepts a form-encoded `username` + `password` submission and returns a
/// signed bearer token on success.
///
/// # Request Body (form-encoded)
///
/// ```text
/// username=a@b.com&password=secret123
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJhbGciOiJIUzI1NiIs...",
///     "token_type": "bearer"
/// }
/// ```
///
/// ## Failure (400 Bad Request)
/// ```json
/// {"detail": "El correo no es correcto"}
/// {"detail": "La contraseña no es correcta"}
/// {"detail": "Error en el proceso de login: <text>"}
/// ```
pub async fn login<R: UserRepository + 'static>(
    state: web::Data<AppState<R>>,
    form: web::Form<LoginRequest>,
) -> HttpResponse {
    match state.auth_service.login(&form.username, &form.password).await {
        Ok(auth_response) => HttpResponse::Ok().json(TokenResponse::from(auth_response)),
        Err(error) => login_error_response(error),
    }
}
