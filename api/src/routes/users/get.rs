//! Single user lookup endpoint

use actix_web::{web, HttpResponse};

use pa_core::repositories::UserRepository;

use crate::dto::user::UserResponse;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Handler for GET /users/{id}
pub async fn get_user<R: UserRepository + 'static>(
    state: web::Data<AppState<R>>,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.user_service.get(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => domain_error_response(error),
    }
}
