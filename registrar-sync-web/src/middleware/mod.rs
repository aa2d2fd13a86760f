//! Request middleware

mod auth;
mod cors;

pub use auth::require_bearer;
pub use cors::cors;
