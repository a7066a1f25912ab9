//! Activity endpoints under `/api/activities`. Every route requires a bearer
//! token.

mod add;
mod delete;
mod list;

use actix_web::web::{self, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/activities";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/lead/{lead_id}", web::get().to(list::process))
        .route("/lead/{lead_id}", web::post().to(add::process))
        .route("/{id}", web::delete().to(delete::process))
}
