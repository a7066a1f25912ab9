//! View-models: the state behind the lead list and the activity panel,
//! independent of any UI toolkit.

pub mod activity_panel;
pub mod debounce;
pub mod lead_list;
