use actix_web::{web, HttpRequest, HttpResponse};
use log::info;

use crate::services::session::authorize;
use crate::store::state::AppState;

pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> HttpResponse {
    let user = match authorize(&req, &state).await {
        Ok(user) => user,
        Err(response) => return response,
    };
    let id = id.into_inner();
    let result = state.store.write().await.delete_activity(id);
    match result {
        Ok(()) => {
            info!("{} deleted activity {}", user, id);
            HttpResponse::Ok().finish()
        }
        Err(e) => e.into_response(),
    }
}
