//! State version module - read the latest state, upload a new one

mod api;
mod models;

pub use models::{md5_hex, CurrentStateVersion, StateSnapshot, StateVersionRequest};
