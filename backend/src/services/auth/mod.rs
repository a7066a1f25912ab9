//! Account endpoints under `/api`: registration and login.

mod login;
mod register;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

/// `POST /register` creates an account, `POST /login` answers with a
/// session token as plain text.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/register", post().to(register::process))
}
