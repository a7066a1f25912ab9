//! Typed endpoints of the leads API, one method per remote call.

use log::info;

use super::Dispatcher;
use crate::error::HttpError;
use crate::model::activity::{Activity, NewActivity};
use crate::model::lead::{Lead, LeadPayload};
use crate::model::query::LeadQuery;
use crate::requests::Credentials;

pub struct LeadsApi {
    dispatcher: Dispatcher,
}

impl LeadsApi {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Exchanges credentials for a session token. The token is returned, not
    /// stored: persisting it is the session manager's job.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, HttpError> {
        let response = self.dispatcher.post("/login", credentials).await?;
        info!("logged in as {}", credentials.username);
        parse_token(&response.body)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), HttpError> {
        self.dispatcher.post("/register", credentials).await?;
        Ok(())
    }

    pub async fn list_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>, HttpError> {
        self.dispatcher
            .get("/leads/leads", &query.to_params())
            .await?
            .json()
    }

    pub async fn create_lead(&self, lead: &LeadPayload) -> Result<Lead, HttpError> {
        self.dispatcher.post("/leads", lead).await?.json()
    }

    pub async fn update_lead(&self, lead: &LeadPayload) -> Result<Lead, HttpError> {
        self.dispatcher.put("/leads", lead).await?.json()
    }

    /// `update_lead` when the payload carries an id, `create_lead` otherwise.
    pub async fn save_lead(&self, lead: &LeadPayload) -> Result<Lead, HttpError> {
        if lead.is_update() {
            self.update_lead(lead).await
        } else {
            self.create_lead(lead).await
        }
    }

    pub async fn delete_lead(&self, id: i64) -> Result<(), HttpError> {
        self.dispatcher.delete(&format!("/leads/{}", id)).await?;
        Ok(())
    }

    pub async fn list_activities(&self, lead_id: i64) -> Result<Vec<Activity>, HttpError> {
        self.dispatcher
            .get(&format!("/activities/lead/{}", lead_id), &[])
            .await?
            .json()
    }

    pub async fn add_activity(
        &self,
        lead_id: i64,
        activity: &NewActivity,
    ) -> Result<Activity, HttpError> {
        self.dispatcher
            .post(&format!("/activities/lead/{}", lead_id), activity)
            .await?
            .json()
    }

    pub async fn delete_activity(&self, id: i64) -> Result<(), HttpError> {
        self.dispatcher
            .delete(&format!("/activities/{}", id))
            .await?;
        Ok(())
    }
}

/// The login endpoint answers with the bare token; a JSON string or a
/// `{"token": ...}` object are accepted as well.
fn parse_token(body: &str) -> Result<String, HttpError> {
    let body = body.trim();
    let token = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(token)) => token,
        Ok(serde_json::Value::Object(fields)) => fields
            .get("token")
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or_else(|| HttpError::Decode("login response has no token".into()))?,
        _ => body.to_string(),
    };
    if token.is_empty() {
        return Err(HttpError::Decode("empty token".into()));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::api::Method;
    use crate::api::stub::StubTransport;
    use crate::model::lead::LeadStatus;
    use crate::session::{MemorySessionStore, SessionManager, SessionStore};

    fn api() -> (LeadsApi, Rc<MemorySessionStore>, Rc<StubTransport>) {
        let store = Rc::new(MemorySessionStore::with_token("stub-token"));
        let transport = Rc::new(StubTransport::new());
        let dispatcher = Dispatcher::new("http://api.test/api", store.clone(), transport.clone());
        (LeadsApi::new(dispatcher), store, transport)
    }

    fn credentials(password: &str) -> Credentials {
        Credentials {
            username: "sam".into(),
            password: password.into(),
        }
    }

    #[test]
    fn token_formats() {
        assert_eq!(parse_token("abc.def\n").unwrap(), "abc.def");
        assert_eq!(parse_token("\"abc\"").unwrap(), "abc");
        assert_eq!(parse_token(r#"{"token":"xyz"}"#).unwrap(), "xyz");
        assert!(parse_token("").is_err());
    }

    #[tokio::test]
    async fn login_returns_the_token_and_manager_persists_it() {
        let store = Rc::new(MemorySessionStore::new());
        let transport = Rc::new(StubTransport::new());
        let api = LeadsApi::new(Dispatcher::new(
            "http://api.test/api",
            store.clone(),
            transport.clone(),
        ));
        let manager = SessionManager::new(store.clone());
        manager.initialize();

        let token = api.login(&credentials(StubTransport::PASSWORD)).await.unwrap();
        manager.login(&token);

        assert_eq!(store.get().as_deref(), Some(StubTransport::TOKEN));
        assert!(manager.is_authenticated());
    }

    #[tokio::test]
    async fn wrong_password_surfaces_server_message() {
        let (api, _, _) = api();
        let err = api.login(&credentials("nope")).await.unwrap_err();
        assert_eq!(err.payload(), Some("Invalid username or password."));
    }

    #[tokio::test]
    async fn save_lead_picks_the_verb_from_the_id() {
        let (api, _, transport) = api();
        let mut payload = LeadPayload {
            id: None,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            status: LeadStatus::New,
            priority: None,
            notes: None,
        };

        let created = api.save_lead(&payload).await.unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert!(sent.body.unwrap().get("id").is_none());

        payload.id = Some(created.id);
        payload.status = LeadStatus::Contacted;
        let updated = api.save_lead(&payload).await.unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/leads");
        assert_eq!(updated.status, LeadStatus::Contacted);
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn deleting_a_lead_takes_its_activities_along() {
        let (api, _, transport) = api();
        let lead = api
            .create_lead(&LeadPayload {
                id: None,
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: None,
                status: LeadStatus::New,
                priority: None,
                notes: None,
            })
            .await
            .unwrap();
        transport.seed_activity(lead.id, "Intro call", "Call");

        api.delete_lead(lead.id).await.unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url, format!("http://api.test/api/leads/{}", lead.id));

        assert!(api.list_leads(&LeadQuery::default()).await.unwrap().is_empty());
        assert!(api.list_activities(lead.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleted_activity_is_gone_after_refetch() {
        let (api, _, transport) = api();
        let first = transport.seed_activity(5, "Intro call", "Call");
        let second = transport.seed_activity(5, "Follow-up", "Email");
        transport.seed_activity(6, "Other lead", "Call");

        api.delete_activity(first).await.unwrap();
        let remaining = api.list_activities(5).await.unwrap();

        let ids: Vec<i64> = remaining.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![second]);
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://api.test/api/activities/lead/5"
        );
    }

    #[tokio::test]
    async fn added_activity_is_listed_for_its_lead() {
        let (api, _, _) = api();
        let activity = NewActivity {
            description: "Demo".into(),
            kind: "Meeting".into(),
            date: "2024-05-01T09:30:00".into(),
        };

        let created = api.add_activity(9, &activity).await.unwrap();
        let listed = api.list_activities(9).await.unwrap();

        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.lead_id, Some(9));
        assert_eq!(created.kind, "Meeting");
    }
}
