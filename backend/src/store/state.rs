//! Users, sessions, leads and activities held in memory.
//!
//! `AppState` is cloned into every actix worker as `web::Data`; all of them
//! share one `Store` behind a `tokio::sync::RwLock`. Handlers take the read
//! lock for queries and the write lock for anything that mutates.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use actix_web::HttpResponse;
use chrono::Local;
use common::error::FormError;
use common::forms::normalize_activity_date;
use common::model::activity::{Activity, NewActivity};
use common::model::lead::{Lead, LeadPayload};
use common::model::query::{LeadQuery, SortField, SortOrder};
use common::requests::Credentials;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Username is already taken.")]
    DuplicateUser,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("Lead {0} not found.")]
    LeadNotFound(i64),
    #[error("Activity {0} not found.")]
    ActivityNotFound(i64),
    #[error(transparent)]
    Invalid(#[from] FormError),
}

impl StoreError {
    pub fn into_response(self) -> HttpResponse {
        let message = self.to_string();
        match self {
            StoreError::DuplicateUser => HttpResponse::Conflict().body(message),
            StoreError::InvalidCredentials => HttpResponse::Unauthorized().body(message),
            StoreError::LeadNotFound(_) | StoreError::ActivityNotFound(_) => {
                HttpResponse::NotFound().body(message)
            }
            StoreError::Invalid(_) => HttpResponse::BadRequest().body(message),
        }
    }
}

/// Timestamp format of `createdAt`.
pub fn now_timestamp() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[derive(Debug, Default)]
pub struct Store {
    /// username -> password. Plain text: this server only backs local development.
    users: HashMap<String, String>,
    /// token -> username
    sessions: HashMap<String, String>,
    leads: BTreeMap<i64, Lead>,
    activities: BTreeMap<i64, Activity>,
    last_lead_id: i64,
    last_activity_id: i64,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_string())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn build_lead(
    id: i64,
    payload: LeadPayload,
    created_at: Option<String>,
) -> Result<Lead, StoreError> {
    Ok(Lead {
        id,
        name: required(&payload.name, "Name")?,
        email: required(&payload.email, "Email")?,
        phone: blank_to_none(payload.phone),
        status: payload.status,
        priority: payload.priority,
        notes: blank_to_none(payload.notes),
        created_at,
    })
}

fn compare(a: &Lead, b: &Lead, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
        SortField::Status => (a.status as u8).cmp(&(b.status as u8)),
        SortField::Priority => a.priority.cmp(&b.priority),
    }
}

impl Store {
    pub fn register(&mut self, credentials: &Credentials) -> Result<(), StoreError> {
        let username = required(&credentials.username, "Username")?;
        if credentials.password.trim().is_empty() {
            return Err(FormError::Required("Password").into());
        }
        if self.users.contains_key(&username) {
            return Err(StoreError::DuplicateUser);
        }
        self.users.insert(username, credentials.password.clone());
        Ok(())
    }

    /// Opens a session and returns its token.
    pub fn login(&mut self, credentials: &Credentials) -> Result<String, StoreError> {
        let username = credentials.username.trim();
        match self.users.get(username) {
            Some(password) if *password == credentials.password => {
                let token = Uuid::new_v4().to_string();
                self.sessions.insert(token.clone(), username.to_string());
                Ok(token)
            }
            _ => Err(StoreError::InvalidCredentials),
        }
    }

    pub fn user_for(&self, token: &str) -> Option<&str> {
        self.sessions.get(token).map(String::as_str)
    }

    pub fn list_leads(&self, query: &LeadQuery) -> Vec<Lead> {
        let name = query
            .name
            .as_deref()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty());

        let mut leads: Vec<Lead> = self
            .leads
            .values()
            .filter(|lead| query.status.is_none_or(|status| lead.status == status))
            .filter(|lead| query.priority.is_none_or(|p| lead.priority == Some(p)))
            .filter(|lead| {
                name.as_ref()
                    .is_none_or(|n| lead.name.to_lowercase().contains(n.as_str()))
            })
            .cloned()
            .collect();

        leads.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort_by).then(a.id.cmp(&b.id));
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        leads
    }

    pub fn create_lead(
        &mut self,
        payload: LeadPayload,
        created_at: String,
    ) -> Result<Lead, StoreError> {
        self.last_lead_id += 1;
        let lead = build_lead(self.last_lead_id, payload, Some(created_at))?;
        self.leads.insert(lead.id, lead.clone());
        Ok(lead)
    }

    /// Replaces the editable fields of an existing lead; `createdAt` is kept.
    pub fn update_lead(&mut self, payload: LeadPayload) -> Result<Lead, StoreError> {
        let id = payload.id.ok_or(FormError::Required("Id"))?;
        let created_at = self
            .leads
            .get(&id)
            .ok_or(StoreError::LeadNotFound(id))?
            .created_at
            .clone();
        let lead = build_lead(id, payload, created_at)?;
        self.leads.insert(id, lead.clone());
        Ok(lead)
    }

    /// Removes the lead together with its activities.
    pub fn delete_lead(&mut self, id: i64) -> Result<(), StoreError> {
        self.leads.remove(&id).ok_or(StoreError::LeadNotFound(id))?;
        self.activities
            .retain(|_, activity| activity.lead_id != Some(id));
        Ok(())
    }

    pub fn list_activities(&self, lead_id: i64) -> Result<Vec<Activity>, StoreError> {
        if !self.leads.contains_key(&lead_id) {
            return Err(StoreError::LeadNotFound(lead_id));
        }
        let mut activities: Vec<Activity> = self
            .activities
            .values()
            .filter(|activity| activity.lead_id == Some(lead_id))
            .cloned()
            .collect();
        activities.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(activities)
    }

    pub fn add_activity(
        &mut self,
        lead_id: i64,
        activity: NewActivity,
    ) -> Result<Activity, StoreError> {
        if !self.leads.contains_key(&lead_id) {
            return Err(StoreError::LeadNotFound(lead_id));
        }
        let description = required(&activity.description, "Description")?;
        let kind = required(&activity.kind, "Type")?;
        let date = normalize_activity_date(&activity.date)?;

        self.last_activity_id += 1;
        let activity = Activity {
            id: self.last_activity_id,
            description,
            kind,
            date,
            lead_id: Some(lead_id),
        };
        self.activities.insert(activity.id, activity.clone());
        Ok(activity)
    }

    pub fn delete_activity(&mut self, id: i64) -> Result<(), StoreError> {
        self.activities
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::ActivityNotFound(id))
    }
}
