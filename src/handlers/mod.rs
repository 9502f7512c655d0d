//! HTTP request handlers.

pub mod api_auth;
mod health;
pub mod schedule;
pub mod task;
mod version;

pub use health::{livez, readyz};
pub use version::version;
