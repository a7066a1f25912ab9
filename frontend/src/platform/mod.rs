//! Browser implementations of the seams of the client core.

mod storage;
mod transport;

pub use storage::BrowserSessionStore;
pub use transport::GlooTransport;
