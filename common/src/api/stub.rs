//! In-memory stand-in for the remote API, used by the unit tests.
//!
//! It records every request it receives and answers the endpoints of the
//! leads API from a small in-memory data set. Protected endpoints answer 401
//! with an empty body when no bearer credential is attached.

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::json;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::HttpError;
use crate::model::activity::{Activity, NewActivity};
use crate::model::lead::{Lead, LeadPayload};

#[derive(Default)]
struct StubState {
    requests: Vec<ApiRequest>,
    leads: Vec<Lead>,
    activities: Vec<Activity>,
    next_id: i64,
    fail_next: Option<(u16, String)>,
    disconnected: bool,
}

#[derive(Default)]
pub(crate) struct StubTransport {
    state: RefCell<StubState>,
}

impl StubTransport {
    pub const PASSWORD: &'static str = "secret";
    pub const TOKEN: &'static str = "stub-token";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leads(leads: Vec<Lead>) -> Self {
        let stub = Self::new();
        {
            let mut state = stub.state.borrow_mut();
            state.next_id = leads.iter().map(|l| l.id).max().unwrap_or(0);
            state.leads = leads;
        }
        stub
    }

    pub fn seed_activity(&self, lead_id: i64, description: &str, kind: &str) -> i64 {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        state.activities.push(Activity {
            id,
            description: description.into(),
            kind: kind.into(),
            date: "2024-01-01T00:00:00".into(),
            lead_id: Some(lead_id),
        });
        id
    }

    /// Answers the next request with `status` and `body`, whatever it is.
    pub fn fail_next(&self, status: u16, body: &str) {
        self.state.borrow_mut().fail_next = Some((status, body.to_string()));
    }

    pub fn disconnect(&self) {
        self.state.borrow_mut().disconnected = true;
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }
}

impl StubState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn route(&mut self, request: &ApiRequest) -> ApiResponse {
        let (path, query) = split_url(&request.url);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if let [endpoint @ ("login" | "register")] = segments.as_slice() {
            return self.auth(endpoint, request);
        }
        if request.header("Authorization").is_none() {
            return reply(401, String::new());
        }

        match (request.method, segments.as_slice()) {
            (Method::Get, ["leads", "leads"]) => {
                let leads: Vec<&Lead> = self
                    .leads
                    .iter()
                    .filter(|lead| matches_query(lead, &query))
                    .collect();
                reply(200, json!(leads).to_string())
            }
            (Method::Post, ["leads"]) => match body::<LeadPayload>(request) {
                Some(payload) => {
                    let lead = lead_from(self.allocate_id(), payload);
                    self.leads.push(lead.clone());
                    reply(200, json!(lead).to_string())
                }
                None => reply(400, "Invalid lead".into()),
            },
            (Method::Put, ["leads"]) => match body::<LeadPayload>(request) {
                Some(payload) => {
                    let known = payload
                        .id
                        .filter(|id| self.leads.iter().any(|lead| lead.id == *id));
                    match known {
                        Some(id) => {
                            let lead = lead_from(id, payload);
                            for existing in self.leads.iter_mut().filter(|l| l.id == id) {
                                *existing = lead.clone();
                            }
                            reply(200, json!(lead).to_string())
                        }
                        None => reply(404, "Lead not found".into()),
                    }
                }
                None => reply(400, "Invalid lead".into()),
            },
            (Method::Delete, ["leads", id]) => {
                let id: i64 = id.parse().unwrap_or_default();
                self.leads.retain(|lead| lead.id != id);
                self.activities.retain(|a| a.lead_id != Some(id));
                reply(200, String::new())
            }
            (Method::Get, ["activities", "lead", lead_id]) => {
                let lead_id: i64 = lead_id.parse().unwrap_or_default();
                let activities: Vec<&Activity> = self
                    .activities
                    .iter()
                    .filter(|a| a.lead_id == Some(lead_id))
                    .collect();
                reply(200, json!(activities).to_string())
            }
            (Method::Post, ["activities", "lead", lead_id]) => {
                let lead_id: i64 = lead_id.parse().unwrap_or_default();
                match body::<NewActivity>(request) {
                    Some(new) => {
                        let activity = Activity {
                            id: self.allocate_id(),
                            description: new.description,
                            kind: new.kind,
                            date: new.date,
                            lead_id: Some(lead_id),
                        };
                        self.activities.push(activity.clone());
                        reply(200, json!(activity).to_string())
                    }
                    None => reply(400, "Invalid activity".into()),
                }
            }
            (Method::Delete, ["activities", id]) => {
                let id: i64 = id.parse().unwrap_or_default();
                self.activities.retain(|a| a.id != id);
                reply(200, String::new())
            }
            _ => reply(404, String::new()),
        }
    }

    fn auth(&mut self, endpoint: &str, request: &ApiRequest) -> ApiResponse {
        let password = request
            .body
            .as_ref()
            .and_then(|b| b.get("password"))
            .and_then(|p| p.as_str())
            .unwrap_or_default();
        match endpoint {
            "login" if password == StubTransport::PASSWORD => {
                reply(200, StubTransport::TOKEN.to_string())
            }
            "login" => reply(401, "Invalid username or password.".into()),
            _ => reply(200, "User registered successfully".into()),
        }
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        if state.disconnected {
            return Err(HttpError::Network("connection refused".into()));
        }
        if let Some((status, body)) = state.fail_next.take() {
            return Ok(reply(status, body));
        }
        Ok(state.route(&request))
    }
}

fn reply(status: u16, body: String) -> ApiResponse {
    ApiResponse { status, body }
}

fn body<T: serde::de::DeserializeOwned>(request: &ApiRequest) -> Option<T> {
    request
        .body
        .clone()
        .and_then(|b| serde_json::from_value(b).ok())
}

fn lead_from(id: i64, payload: LeadPayload) -> Lead {
    Lead {
        id,
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        status: payload.status,
        priority: payload.priority,
        notes: payload.notes,
        created_at: Some("2024-01-01T00:00:00".into()),
    }
}

/// Path below `/api` and the decoded query pairs.
fn split_url(url: &str) -> (String, Vec<(String, String)>) {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or(""),
        None => path,
    };
    let path = path.strip_prefix("/api").unwrap_or(path);
    let pairs = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| {
            let value = urlencoding::decode(v)
                .map(|v| v.into_owned())
                .unwrap_or_default();
            (k.to_string(), value)
        })
        .collect();
    (path.to_string(), pairs)
}

fn matches_query(lead: &Lead, query: &[(String, String)]) -> bool {
    query.iter().all(|(key, value)| match key.as_str() {
        "status" => lead.status.as_ref() == value,
        "priority" => lead.priority.map(|p| p.as_ref() == value).unwrap_or(false),
        "name" => lead.name.to_lowercase().contains(&value.to_lowercase()),
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_names_containing_api_are_not_mistaken_for_the_path() {
        let (path, query) = split_url("http://api.test/api/leads/leads?status=Closed&name=J%20o");
        assert_eq!(path, "/leads/leads");
        assert_eq!(
            query,
            vec![
                ("status".to_string(), "Closed".to_string()),
                ("name".to_string(), "J o".to_string()),
            ]
        );
        assert_eq!(split_url("http://localhost:8080/api/login").0, "/login");
        assert_eq!(split_url("https://api.example.com").0, "");
    }
}
