//! OAuth token data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// OAuth token (a VCS connection credential) from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthToken {
    pub id: String,
    pub attributes: OAuthTokenAttributes,
}

/// OAuth token attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthTokenAttributes {
    #[serde(rename = "service-provider-user")]
    pub service_provider_user: Option<String>,
}

impl TfeResource for OAuthToken {
    fn id(&self) -> &str {
        &self.id
    }

    /// The VCS user the token authenticates as
    fn name(&self) -> &str {
        self.attributes
            .service_provider_user
            .as_deref()
            .unwrap_or(&self.id)
    }
}
