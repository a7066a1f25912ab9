//! Shared models and the client core of the leads manager.
//!
//! Everything in here is platform independent: the browser specific pieces
//! (local storage, `fetch`) are plugged in through [`session::SessionStore`]
//! and [`api::Transport`] by the frontend crate.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod model;
pub mod requests;
pub mod session;
pub mod view;
