use actix_web::{web, HttpRequest, HttpResponse};
use common::model::query::LeadQuery;
use log::debug;

use crate::services::session::authorize;
use crate::store::state::AppState;

pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<LeadQuery>,
) -> HttpResponse {
    if let Err(response) = authorize(&req, &state).await {
        return response;
    }
    let leads = state.store.read().await.list_leads(&query);
    debug!("listing {} leads for {:?}", leads.len(), query.into_inner());
    HttpResponse::Ok().json(leads)
}
