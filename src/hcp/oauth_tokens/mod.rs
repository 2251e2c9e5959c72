//! OAuth tokens module - VCS connection credentials of an organization

mod api;
mod models;

pub use models::{OAuthToken, OAuthTokenAttributes};
