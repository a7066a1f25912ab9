//! State of the lead details panel: the activity list of one lead and the
//! form that adds to it.

use log::debug;

use crate::error::HttpError;
use crate::forms::ActivityForm;
use crate::model::activity::{Activity, NewActivity};

pub const ACTIVITIES_LOAD_ERROR: &str = "Failed to load activities.";
pub const ACTIVITY_DELETE_ERROR: &str = "Failed to delete activity.";

#[derive(Debug, Clone)]
pub struct ActivityPanel {
    lead_id: i64,
    activities: Vec<Activity>,
    loading: bool,
    error: Option<String>,
    form: ActivityForm,
    last_issued: u64,
}

impl ActivityPanel {
    pub fn new(lead_id: i64) -> Self {
        Self {
            lead_id,
            activities: Vec::new(),
            loading: true,
            error: None,
            form: ActivityForm::new(),
            last_issued: 0,
        }
    }

    /// Points the panel at another lead. The sequence counter keeps running,
    /// so a load still in flight for the previous lead is discarded.
    pub fn switch_lead(&mut self, lead_id: i64) {
        self.lead_id = lead_id;
        self.activities.clear();
        self.loading = true;
        self.error = None;
        self.form = ActivityForm::new();
        self.last_issued += 1;
    }

    pub fn lead_id(&self) -> i64 {
        self.lead_id
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &ActivityForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ActivityForm {
        &mut self.form
    }

    /// Starts a (re)load and returns its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.last_issued += 1;
        self.loading = true;
        self.last_issued
    }

    /// Returns `false` when the response was superseded by a newer load.
    pub fn apply_load(&mut self, seq: u64, result: Result<Vec<Activity>, HttpError>) -> bool {
        if seq != self.last_issued {
            debug!("discarding activity response #{} for lead {}", seq, self.lead_id);
            return false;
        }
        self.loading = false;
        match result {
            Ok(activities) => {
                self.activities = activities;
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message(ACTIVITIES_LOAD_ERROR)),
        }
        true
    }

    pub fn prepare_add(&mut self) -> Option<NewActivity> {
        self.form.prepare()
    }

    /// Returns whether the list needs a reload.
    pub fn finish_add(&mut self, result: Result<Activity, HttpError>) -> bool {
        self.form.finish(result)
    }

    /// Returns whether the list needs a reload.
    pub fn finish_delete(&mut self, result: Result<(), HttpError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err.user_message(ACTIVITY_DELETE_ERROR));
                false
            }
        }
    }
}
