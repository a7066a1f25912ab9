use actix_web::{web, HttpRequest, HttpResponse};
use common::model::activity::NewActivity;
use log::{info, warn};

use crate::services::session::authorize;
use crate::store::state::AppState;

pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    lead_id: web::Path<i64>,
    activity: web::Json<NewActivity>,
) -> HttpResponse {
    let user = match authorize(&req, &state).await {
        Ok(user) => user,
        Err(response) => return response,
    };
    let lead_id = lead_id.into_inner();
    let result = state
        .store
        .write()
        .await
        .add_activity(lead_id, activity.into_inner());
    match result {
        Ok(activity) => {
            info!("{} logged activity {} on lead {}", user, activity.id, lead_id);
            HttpResponse::Ok().json(activity)
        }
        Err(e) => {
            warn!("adding activity to lead {} failed: {}", lead_id, e);
            e.into_response()
        }
    }
}
