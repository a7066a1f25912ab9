use actix_web::{web, HttpRequest, HttpResponse};

use crate::services::session::authorize;
use crate::store::state::AppState;

pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    lead_id: web::Path<i64>,
) -> HttpResponse {
    if let Err(response) = authorize(&req, &state).await {
        return response;
    }
    let result = state.store.read().await.list_activities(lead_id.into_inner());
    match result {
        Ok(activities) => HttpResponse::Ok().json(activities),
        Err(e) => e.into_response(),
    }
}
