//! Session token lifecycle: persisted store, the manager that owns the
//! authenticated flag, and the guard deciding what a protected view shows.

mod guard;
mod manager;
mod store;

pub use guard::{GuardDecision, guard};
pub use manager::{SessionManager, SessionState, Subscription};
pub use store::{MemorySessionStore, SessionStore};
