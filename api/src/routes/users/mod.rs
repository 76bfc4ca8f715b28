//! User management routes

mod create;
mod get;
mod list;

pub use create::create_user;
pub use get::get_user;
pub use list::list_users;

use actix_web::{web, Scope};

use pa_core::repositories::UserRepository;

/// Builds the `/users` scope
pub fn users_scope<R: UserRepository + 'static>() -> Scope {
    web::scope("/users")
        .route("", web::post().to(create_user::<R>))
        .route("", web::get().to(list_users::<R>))
        .route("/{id}", web::get().to(get_user::<R>))
}
