use common::model::lead::Lead;
use yew::prelude::*;

use crate::app::ApiHandle;

#[derive(Properties, PartialEq)]
pub struct LeadsTableProps {
    pub api: ApiHandle,
    /// Any change triggers a reload with the current controls.
    pub reload: u64,
    pub search_debounce_ms: u64,
    pub on_edit: Callback<Lead>,
    pub on_delete: Callback<i64>,
    pub on_details: Callback<Lead>,
    /// The server rejected the session while listing.
    pub on_unauthorized: Callback<()>,
}
