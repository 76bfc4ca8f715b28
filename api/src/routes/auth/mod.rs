//! Authentication routes

mod login;

pub use login::login;

use actix_web::{web, Scope};

use pa_core::repositories::UserRepository;

/// Builds the `/jwt` scope
pub fn jwt_scope<R: UserRepository + 'static>() -> Scope {
    web::scope("/jwt").route("/login", web::post().to(login::<R>))
}
