use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::lead::{LeadStatus, Priority};

/// Column the lead list is sorted by; the strings are the `sortBy` values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    Name,
    Email,
    Status,
    Priority,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::CreatedAt => "Date",
            SortField::Name => "Name",
            SortField::Email => "Email",
            SortField::Status => "Status",
            SortField::Priority => "Priority",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

/// Parameters of `GET /leads/leads`.
///
/// The client builds the query string with [`LeadQuery::to_params`]; the
/// development server deserializes the same struct from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadQuery {
    pub sort_by: SortField,
    pub order: SortOrder,
    pub status: Option<LeadStatus>,
    pub priority: Option<Priority>,
    pub name: Option<String>,
}

impl LeadQuery {
    /// Query parameters in wire order. Unset filters are empty strings, which
    /// the dispatcher drops; a blank name counts as unset.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sortBy", self.sort_by.to_string()),
            ("order", self.order.to_string()),
            (
                "status",
                self.status.map(|s| s.to_string()).unwrap_or_default(),
            ),
            (
                "priority",
                self.priority.map(|p| p.to_string()).unwrap_or_default(),
            ),
            (
                "name",
                self.name
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_default()
                    .to_string(),
            ),
        ]
    }
}
