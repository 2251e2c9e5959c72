//! OAuth token API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::{ApiListResponse, TfeResource};
use crate::hcp::TfeClient;

use super::models::OAuthToken;

impl TfeClient {
    /// Get all OAuth tokens of an organization (with pagination)
    pub async fn get_oauth_tokens_for_org(&self, org: &str) -> Result<Vec<OAuthToken>> {
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::OAUTH_TOKENS
        );
        let error_context = format!("OAuth tokens for organization '{}'", org);

        self.fetch_all_pages::<OAuthToken, ApiListResponse<OAuthToken>>(&path, &error_context)
            .await
    }

    /// Check that OAuth token `token_id` exists in `org`
    ///
    /// Only the token id is accepted: one VCS user usually owns several
    /// tokens (one per OAuth client), so a user name is ambiguous.
    pub async fn find_oauth_token_id(&self, org: &str, token_id: &str) -> Result<Option<String>> {
        let tokens = self.get_oauth_tokens_for_org(org).await?;
        debug!(
            "Looking up OAuth token '{}' among {} token(s) of '{}'",
            token_id,
            tokens.len(),
            org
        );

        let found = tokens
            .iter()
            .find(|t| t.id() == token_id)
            .map(|t| t.id.clone());

        Ok(found)
    }
}
