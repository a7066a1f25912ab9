pub mod auth;
pub mod helpers;
pub mod leads;
pub mod protected_route;
