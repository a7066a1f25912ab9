use actix_web::{web, HttpRequest, HttpResponse};
use common::model::lead::LeadPayload;
use log::{info, warn};

use crate::services::session::authorize;
use crate::store::state::{now_timestamp, AppState};

pub async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<LeadPayload>,
) -> HttpResponse {
    let user = match authorize(&req, &state).await {
        Ok(user) => user,
        Err(response) => return response,
    };
    let result = state
        .store
        .write()
        .await
        .create_lead(payload.into_inner(), now_timestamp());
    match result {
        Ok(lead) => {
            info!("{} created lead {}", user, lead.id);
            HttpResponse::Ok().json(lead)
        }
        Err(e) => {
            warn!("creating lead failed: {}", e);
            e.into_response()
        }
    }
}

pub async fn update(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<LeadPayload>,
) -> HttpResponse {
    let user = match authorize(&req, &state).await {
        Ok(user) => user,
        Err(response) => return response,
    };
    let result = state.store.write().await.update_lead(payload.into_inner());
    match result {
        Ok(lead) => {
            info!("{} updated lead {}", user, lead.id);
            HttpResponse::Ok().json(lead)
        }
        Err(e) => {
            warn!("updating lead failed: {}", e);
            e.into_response()
        }
    }
}
