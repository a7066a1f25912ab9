//! HTTP endpoints of the development API.

mod activities;
mod auth;
mod leads;
mod session;

use actix_web::web::ServiceConfig;

/// Registers every API scope. `/api/leads` and `/api/activities` come before
/// the bare `/api` scope, which would otherwise claim their paths.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(leads::configure_routes())
        .service(activities::configure_routes())
        .service(auth::configure_routes());
}
