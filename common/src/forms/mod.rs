//! Form state: field values, local validation, and what happens to the
//! fields once the server answered.
//!
//! Every form follows the same two-step protocol: `prepare` validates and
//! returns the payload to dispatch (or records a local error and returns
//! `None`, in which case nothing must be sent), then `finish` receives the
//! server result. A failed `finish` never touches the field values.

mod activity_form;
mod auth_form;
mod lead_form;

pub use activity_form::{ACTIVITY_ADD_ERROR, ActivityField, ActivityForm, normalize_activity_date};
pub use auth_form::{CredentialsForm, LOGIN_ERROR, REGISTER_ERROR, REGISTER_SUCCESS};
pub use lead_form::{LEAD_SAVE_ERROR, LeadField, LeadForm};
