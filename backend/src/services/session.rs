use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpRequest, HttpResponse};
use log::warn;

use crate::store::state::AppState;

/// Resolves the bearer token of `req` to a user name. The error is the
/// response to send back as is.
pub async fn authorize(req: &HttpRequest, state: &AppState) -> Result<String, HttpResponse> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    let user = match token {
        Some(token) => state.store.read().await.user_for(token).map(str::to_string),
        None => None,
    };
    user.ok_or_else(|| {
        warn!("rejected {} {}: missing or unknown token", req.method(), req.path());
        HttpResponse::Unauthorized().body("Unauthorized")
    })
}
