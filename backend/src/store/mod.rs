//! In-memory data of the development server.

pub mod state;
