use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FormError, HttpError};
use crate::model::lead::{Lead, LeadPayload, LeadStatus, Priority};

pub const LEAD_SAVE_ERROR: &str = "Failed to save lead. Please try again.";

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Status,
    Priority,
    Notes,
}

/// Create/edit form of a lead.
///
/// Built from `None` it is in create mode; built from an existing lead it
/// carries that lead's id and submits an update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadForm {
    id: Option<i64>,
    name: String,
    email: String,
    phone: String,
    status: LeadStatus,
    priority: Option<Priority>,
    notes: String,
    error: Option<String>,
    submitting: bool,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lead(lead: Option<&Lead>) -> Self {
        match lead {
            Some(lead) => Self {
                id: Some(lead.id),
                name: lead.name.clone(),
                email: lead.email.clone(),
                phone: lead.phone.clone().unwrap_or_default(),
                status: lead.status,
                priority: lead.priority,
                notes: lead.notes.clone().unwrap_or_default(),
                ..Self::default()
            },
            None => Self::new(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Lead"
        } else {
            "Add New Lead"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Update Lead" } else { "Submit" }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Current value of `field` as shown in its input.
    pub fn value(&self, field: LeadField) -> String {
        match field {
            LeadField::Name => self.name.clone(),
            LeadField::Email => self.email.clone(),
            LeadField::Phone => self.phone.clone(),
            LeadField::Status => self.status.to_string(),
            LeadField::Priority => self.priority.map(|p| p.to_string()).unwrap_or_default(),
            LeadField::Notes => self.notes.clone(),
        }
    }

    /// Stores raw input. Unknown status strings are ignored; an unknown or
    /// empty priority clears it.
    pub fn set(&mut self, field: LeadField, value: &str) {
        match field {
            LeadField::Name => self.name = value.to_string(),
            LeadField::Email => self.email = value.to_string(),
            LeadField::Phone => self.phone = value.to_string(),
            LeadField::Status => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
            LeadField::Priority => self.priority = value.parse().ok(),
            LeadField::Notes => self.notes = value.to_string(),
        }
    }

    pub fn validate(&self) -> Result<LeadPayload, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(FormError::Required("Name"));
        }
        if email.is_empty() {
            return Err(FormError::Required("Email"));
        }
        if !EMAIL.is_match(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(LeadPayload {
            id: self.id,
            name: name.to_string(),
            email: email.to_string(),
            phone: non_blank(&self.phone),
            status: self.status,
            priority: self.priority,
            notes: non_blank(&self.notes),
        })
    }

    pub fn prepare(&mut self) -> Option<LeadPayload> {
        self.error = None;
        match self.validate() {
            Ok(payload) => {
                self.submitting = true;
                Some(payload)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// On success resets to create mode and returns the notification text.
    pub fn finish(&mut self, result: Result<Lead, HttpError>) -> Option<&'static str> {
        self.submitting = false;
        match result {
            Ok(_) => {
                let message = if self.is_edit() {
                    "Lead updated successfully!"
                } else {
                    "Lead created successfully!"
                };
                *self = Self::new();
                Some(message)
            }
            Err(err) => {
                self.error = Some(err.user_message(LEAD_SAVE_ERROR));
                None
            }
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
