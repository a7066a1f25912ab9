use serde::{Deserialize, Serialize};

/// Request payload for the `/login` and `/register` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
