use common::view::lead_list::LeadListViewModel;

use super::props::LeadsTableProps;

pub struct LeadsTable {
    pub list: LeadListViewModel,
    /// Whether a search wake-up is already scheduled.
    pub search_timer_armed: bool,
}

impl LeadsTable {
    pub fn new(props: &LeadsTableProps) -> Self {
        Self {
            list: LeadListViewModel::new(props.search_debounce_ms),
            search_timer_armed: false,
        }
    }
}
