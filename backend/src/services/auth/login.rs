use actix_web::{web, HttpResponse};
use common::requests::Credentials;
use log::{info, warn};

use crate::store::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    credentials: web::Json<Credentials>,
) -> HttpResponse {
    let result = state.store.write().await.login(&credentials);
    match result {
        Ok(token) => {
            info!("user {} logged in", credentials.username.trim());
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(token)
        }
        Err(e) => {
            warn!("login failed for {}: {}", credentials.username.trim(), e);
            e.into_response()
        }
    }
}
