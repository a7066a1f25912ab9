use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Pipeline stage of a lead.
///
/// The variant names are the wire values used by the API, in JSON bodies as
/// well as in the `status` query parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Closed,
}

/// Optional urgency marker of a lead.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A sales prospect as returned by the API.
///
/// `id` and `created_at` are assigned by the server and never edited on the
/// client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of the create (`POST /leads`) and update (`PUT /leads`) calls.
///
/// `id` is left out of the JSON entirely when creating, so the server never
/// sees a blank identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl LeadPayload {
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_has_no_id_key() {
        let payload = LeadPayload {
            id: None,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            status: LeadStatus::New,
            priority: Some(Priority::High),
            notes: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["priority"], "High");
        assert_eq!(value["status"], "New");
    }

    #[test]
    fn lead_tolerates_missing_optional_fields() {
        let lead: Lead = serde_json::from_value(json!({
            "id": 2,
            "name": "Bob",
            "email": "bob@example.com",
            "status": "Closed",
            "createdAt": "2024-03-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(lead.status, LeadStatus::Closed);
        assert_eq!(lead.priority, None);
        assert_eq!(lead.created_at.as_deref(), Some("2024-03-01T10:00:00"));
    }

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!("Qualified".parse::<LeadStatus>().unwrap(), LeadStatus::Qualified);
        assert_eq!(Priority::Medium.as_ref(), "Medium");
        assert!("Unknown".parse::<LeadStatus>().is_err());
    }
}
