//! User listing endpoint

use actix_web::{web, HttpResponse};

use pa_core::repositories::UserRepository;
use pa_shared::types::Pagination;

use crate::dto::user::UserResponse;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Handler for GET /users?offset=0&limit=100
///
/// Returns users ordered by id. Defaults: offset 0, limit 100.
pub async fn list_users<R: UserRepository + 'static>(
    state: web::Data<AppState<R>>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state.user_service.list(query.into_inner()).await {
        Ok(users) => {
            let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(error) => domain_error_response(error),
    }
}
