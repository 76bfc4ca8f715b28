//! Maps domain errors onto HTTP responses

use actix_web::HttpResponse;

use pa_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Handle a login failure.
///
/// Every failure class on this path is reported as 400 with a `detail`
/// message: the two credential errors carry their fixed messages, and any
/// unexpected fault is logged and surfaced with its text interpolated,
/// matching the upstream contract.
pub fn login_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(auth_error.to_string()))
        }
        other => {
            log::error!("Error en el proceso de login: {}", other);
            HttpResponse::BadRequest().json(ErrorResponse::new(format!(
                "Error en el proceso de login: {}",
                other
            )))
        }
    }
}

/// Handle domain errors on the user-management routes
pub fn domain_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ErrorResponse::new(error.to_string()))
        }
        DomainError::Validation { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string()))
        }
        other => {
            log::error!("Unhandled domain error: {}", other);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Internal server error"))
        }
    }
}
