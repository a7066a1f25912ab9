//! Lead endpoints under `/api/leads`. Every route requires a bearer token.

mod delete;
mod list;
mod save;

use actix_web::web::{self, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/leads";

/// * `GET /leads`: filtered and sorted list, see `LeadQuery`.
/// * `POST` / `PUT` on the scope root: create, or update by id.
/// * `DELETE /{id}`: removes a lead and its activities.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/leads", web::get().to(list::process))
        .route("", web::post().to(save::create))
        .route("", web::put().to(save::update))
        .route("/{id}", web::delete().to(delete::process))
}
