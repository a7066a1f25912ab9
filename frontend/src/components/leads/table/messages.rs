use common::error::HttpError;
use common::model::lead::Lead;

pub enum Msg {
    SetSortBy(String),
    SetOrder(String),
    SetStatus(String),
    SetPriority(String),
    SearchInput(String),
    /// Timer wake-up for the search box.
    SearchQuiet,
    Loaded(u64, Result<Vec<Lead>, HttpError>),
}
