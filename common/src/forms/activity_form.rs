use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{FormError, HttpError};
use crate::model::activity::{Activity, NewActivity};

pub const ACTIVITY_ADD_ERROR: &str = "Failed to add activity.";

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityField {
    Description,
    Kind,
    Date,
}

/// "Add activity" form of the lead details panel. Activities cannot be
/// edited, so there is only a create mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityForm {
    description: String,
    kind: String,
    date: String,
    error: Option<String>,
    submitting: bool,
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ActivityField) -> &str {
        match field {
            ActivityField::Description => &self.description,
            ActivityField::Kind => &self.kind,
            ActivityField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: ActivityField, value: &str) {
        let slot = match field {
            ActivityField::Description => &mut self.description,
            ActivityField::Kind => &mut self.kind,
            ActivityField::Date => &mut self.date,
        };
        *slot = value.to_string();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> Result<NewActivity, FormError> {
        let description = self.description.trim();
        let kind = self.kind.trim();
        if description.is_empty() || kind.is_empty() || self.date.trim().is_empty() {
            return Err(FormError::Incomplete);
        }
        Ok(NewActivity {
            description: description.to_string(),
            kind: kind.to_string(),
            date: normalize_activity_date(&self.date)?,
        })
    }

    pub fn prepare(&mut self) -> Option<NewActivity> {
        self.error = None;
        match self.validate() {
            Ok(activity) => {
                self.submitting = true;
                Some(activity)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Clears the form on success; returns whether the activity was created.
    pub fn finish(&mut self, result: Result<Activity, HttpError>) -> bool {
        self.submitting = false;
        match result {
            Ok(_) => {
                *self = Self::new();
                true
            }
            Err(err) => {
                self.error = Some(err.user_message(ACTIVITY_ADD_ERROR));
                false
            }
        }
    }
}

/// Brings a user supplied date to `YYYY-MM-DDTHH:MM:SS`.
///
/// Accepts a bare date (midnight is assumed), a `datetime-local` value
/// without seconds, or a full timestamp (fractional seconds are dropped).
pub fn normalize_activity_date(input: &str) -> Result<String, FormError> {
    let input = input.trim();
    let parsed = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });
    parsed
        .map(|timestamp| timestamp.format(WIRE_FORMAT).to_string())
        .ok_or(FormError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(date: &str) -> ActivityForm {
        let mut form = ActivityForm::new();
        form.set(ActivityField::Description, "Intro call");
        form.set(ActivityField::Kind, "Call");
        form.set(ActivityField::Date, date);
        form
    }

    #[test]
    fn dates_gain_a_time_component() {
        assert_eq!(
            normalize_activity_date("2024-05-01").unwrap(),
            "2024-05-01T00:00:00"
        );
        assert_eq!(
            normalize_activity_date("2024-05-01T09:30").unwrap(),
            "2024-05-01T09:30:00"
        );
        assert_eq!(
            normalize_activity_date("2024-05-01T09:30:15").unwrap(),
            "2024-05-01T09:30:15"
        );
        assert_eq!(
            normalize_activity_date("01/05/2024"),
            Err(FormError::InvalidDate)
        );
    }

    #[test]
    fn every_field_is_required() {
        let mut form = filled("");
        assert_eq!(form.prepare(), None);
        assert_eq!(form.error(), Some("Please fill in all fields."));

        form.set(ActivityField::Date, "2024-05-01");
        form.set(ActivityField::Kind, " ");
        assert_eq!(form.prepare(), None);
    }

    #[test]
    fn prepare_normalizes_the_date() {
        let mut form = filled("2024-05-01");
        let activity = form.prepare().unwrap();
        assert_eq!(activity.date, "2024-05-01T00:00:00");
        assert!(form.is_submitting());
        // The input keeps what the user typed.
        assert_eq!(form.value(ActivityField::Date), "2024-05-01");
    }

    #[test]
    fn failure_keeps_fields_and_reports() {
        let mut form = filled("2024-05-01T10:00");
        form.prepare();

        let created = form.finish(Err(HttpError::Network("down".into())));

        assert!(!created);
        assert_eq!(form.error(), Some(ACTIVITY_ADD_ERROR));
        assert_eq!(form.value(ActivityField::Description), "Intro call");
        assert_eq!(form.value(ActivityField::Date), "2024-05-01T10:00");
    }
}
