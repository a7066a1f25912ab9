//! Authenticated request dispatch.
//!
//! Every call goes through [`Dispatcher::request`], which reads the session
//! token at call time and attaches it as a bearer credential. Nothing about
//! the credential is cached between calls, so a login or logout is visible to
//! the very next request.

use std::rc::Rc;

use log::debug;
use serde::Serialize;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::HttpError;
use crate::session::SessionStore;

pub struct Dispatcher {
    base_url: String,
    store: Rc<dyn SessionStore>,
    transport: Rc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(
        base_url: impl Into<String>,
        store: Rc<dyn SessionStore>,
        transport: Rc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            store,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` joined with `path`, plus the query string built from the
    /// non-empty `params`.
    pub fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = join_url(&self.base_url, path);
        let query = query_string(params);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Sends one request and turns every non-2xx answer into an error.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, HttpError> {
        let mut headers = Vec::new();
        if let Some(token) = self.store.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = ApiRequest {
            method,
            url: self.url(path, params),
            headers,
            body,
        };
        debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            debug!("request failed with status {}", response.status);
            Err(HttpError::Status {
                status: response.status,
                payload: response.error_payload(),
            })
        }
    }

    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse, HttpError> {
        self.request(Method::Get, path, params, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, HttpError> {
        self.request(Method::Post, path, &[], Some(encode(body)?))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, HttpError> {
        self.request(Method::Put, path, &[], Some(encode(body)?))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, HttpError> {
        self.request(Method::Delete, path, &[], None).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, HttpError> {
    serde_json::to_value(body).map_err(|e| HttpError::Encode(e.to_string()))
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// `name=value` pairs joined by `&`, in order. Parameters with an empty
/// value are left out entirely.
pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::StubTransport;
    use crate::session::{GuardDecision, MemorySessionStore, SessionManager, guard};

    fn dispatcher() -> (Dispatcher, Rc<MemorySessionStore>, Rc<StubTransport>) {
        let store = Rc::new(MemorySessionStore::new());
        let transport = Rc::new(StubTransport::new());
        let dispatcher = Dispatcher::new(
            "http://localhost:8080/api/",
            store.clone(),
            transport.clone(),
        );
        (dispatcher, store, transport)
    }

    #[test]
    fn urls_join_with_a_single_slash() {
        let (dispatcher, _, _) = dispatcher();
        assert_eq!(
            dispatcher.url("/leads", &[]),
            "http://localhost:8080/api/leads"
        );
        assert_eq!(
            dispatcher.url("activities/lead/5", &[]),
            "http://localhost:8080/api/activities/lead/5"
        );
    }

    #[test]
    fn empty_parameters_are_omitted() {
        let params = [
            ("sortBy", "createdAt".to_string()),
            ("status", String::new()),
            ("name", "Jane Doe".to_string()),
        ];
        assert_eq!(query_string(&params), "sortBy=createdAt&name=Jane%20Doe");
        assert_eq!(query_string(&[("status", String::new())]), "");
    }

    #[tokio::test]
    async fn login_then_request_carries_the_token() {
        let (dispatcher, store, transport) = dispatcher();
        let manager = SessionManager::new(store);
        manager.initialize();

        manager.login("tok-123");
        let _ = dispatcher.get("/leads/leads", &[]).await;

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-123"));
    }

    #[tokio::test]
    async fn logout_then_request_carries_no_credential() {
        let (dispatcher, store, transport) = dispatcher();
        let manager = SessionManager::new(store);
        manager.login("tok-123");

        manager.logout();
        let result = dispatcher.get("/leads/leads", &[]).await;

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Authorization"), None);
        assert!(result.unwrap_err().is_unauthorized());
        assert_eq!(guard(manager.state()), GuardDecision::RedirectToLogin);
    }

    #[tokio::test]
    async fn non_success_status_becomes_an_error_with_payload() {
        let (dispatcher, _, transport) = dispatcher();
        transport.fail_next(409, "Username already exists");

        let err = dispatcher
            .post("/register", &serde_json::json!({"username": "a"}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            HttpError::Status {
                status: 409,
                payload: Some("Username already exists".into()),
            }
        );
    }

    #[tokio::test]
    async fn network_failures_are_passed_through() {
        let (dispatcher, _, transport) = dispatcher();
        transport.disconnect();

        let err = dispatcher.delete("/leads/1").await.unwrap_err();
        assert!(matches!(err, HttpError::Network(_)));
    }
}
