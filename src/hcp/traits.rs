//! Common traits for TFE resources and collection responses

use crate::hcp::PaginationMeta;
use serde::Deserialize;

/// A TFE resource addressed either by id or by a human-readable name
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Exact match on either the id or the name
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// JSON:API collection responses usable with `TfeClient::fetch_all_pages`
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
}

/// Generic JSON:API list response (`{"data": [...], "meta": {...}}`)
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}

/// Generic JSON:API single-resource response (`{"data": {...}}`)
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}
