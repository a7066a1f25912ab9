use actix_web::{web, HttpResponse};
use common::requests::Credentials;
use log::{info, warn};

use crate::store::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    credentials: web::Json<Credentials>,
) -> HttpResponse {
    let result = state.store.write().await.register(&credentials);
    match result {
        Ok(()) => {
            info!("registered user {}", credentials.username.trim());
            HttpResponse::Ok().body("User registered successfully.")
        }
        Err(e) => {
            warn!("registration failed: {}", e);
            e.into_response()
        }
    }
}
