use serde::{Deserialize, Serialize};

/// An interaction logged against a lead. Activities are never edited; they
/// are only created and deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub description: String,
    /// Free text category (`"Call"`, `"Email"`, ...), `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Local timestamp, always with a time component (`2024-05-01T09:30:00`).
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<i64>,
}

/// Body of `POST /activities/lead/{leadId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}
