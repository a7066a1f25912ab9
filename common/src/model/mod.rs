pub mod activity;
pub mod lead;
pub mod query;
