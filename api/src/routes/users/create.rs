//! User creation endpoint

use actix_web::{web, HttpResponse};
use validator::Validate;

use pa_core::errors::DomainError;
use pa_core::repositories::UserRepository;

use crate::dto::user::{CreateUserRequest, UserResponse};
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Handler for POST /users
///
/// Persists a new staff member. The submitted password is hashed before
/// storage; the response never carries it.
pub async fn create_user<R: UserRepository + 'static>(
    state: web::Data<AppState<R>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return domain_error_response(DomainError::Validation {
            message: format!("Invalid request data: {}", errors),
        });
    }

    match state.user_service.create(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => domain_error_response(error),
    }
}
