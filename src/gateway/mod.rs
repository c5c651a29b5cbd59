//! Remote conversation gateway client
//!
//! This module defines the [`ConversationGateway`] trait and its HTTP
//! implementation over `reqwest`. The gateway speaks the helpdesk API:
//! per-status conversation listing, single-conversation detail, and status
//! mutation, all authenticated with an access-token header.

pub mod envelope;

pub use envelope::{extract_conversation_list, EXTRACTION_RULES};

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::board::{Conversation, Status};
use crate::config::GatewayConfig;
use crate::credentials::Session;
use crate::error::{DeskboardError, Result};

/// Header carrying the gateway access token on every request
pub const ACCESS_TOKEN_HEADER: &str = "api_access_token";

/// Client-side view of the remote conversation gateway
///
/// Implementations issue one HTTP request per call; the fetch aggregator
/// and transition controller are written against this trait so tests can
/// substitute a scripted gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationGateway: Send + Sync {
    /// List the conversations in one status partition
    async fn list_conversations(&self, status: Status) -> Result<Vec<Conversation>>;

    /// Fetch the full detail of a single conversation
    async fn fetch_conversation(&self, id: u64) -> Result<Conversation>;

    /// Change a conversation's status on the remote system
    async fn update_status(&self, id: u64, status: Status) -> Result<()>;
}

/// HTTP implementation of [`ConversationGateway`]
///
/// Holds the session (access token + account id) it was constructed with;
/// there is no process-wide credential state.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpGateway {
    /// Create a new gateway client
    ///
    /// # Arguments
    ///
    /// * `config` - Gateway configuration (base URL, request timeout)
    /// * `session` - Credentials used for every request
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails
    pub fn new(config: &GatewayConfig, session: Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("deskboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DeskboardError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::debug!(
            "Initialized gateway client: base_url={}, account={}",
            config.base_url,
            session.account_id
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn conversations_url(&self) -> String {
        format!(
            "{}/accounts/{}/conversations",
            self.base_url, self.session.account_id
        )
    }
}

#[async_trait]
impl ConversationGateway for HttpGateway {
    async fn list_conversations(&self, status: Status) -> Result<Vec<Conversation>> {
        let url = format!("{}?status={}", self.conversations_url(), status);
        tracing::debug!("Fetching conversations: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.session.access_token)
            .send()
            .await
            .map_err(|e| DeskboardError::PartitionFetch {
                status: status.to_string(),
                message: e.to_string(),
            })?;

        let code = response.status();
        if !code.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeskboardError::PartitionFetch {
                status: status.to_string(),
                message: format!("gateway returned {}: {}", code, body),
            }
            .into());
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DeskboardError::Load(format!("invalid JSON body: {}", e)))?;

        let raw = extract_conversation_list(&body)?;

        // Entries that fail to decode are skipped, not fatal; the rest of
        // the partition still reaches the board.
        let conversations: Vec<Conversation> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(conversation) => Some(conversation),
                Err(e) => {
                    tracing::warn!("Skipping undecodable conversation entry: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!(
            "Found {} conversations with status {}",
            conversations.len(),
            status
        );
        Ok(conversations)
    }

    async fn fetch_conversation(&self, id: u64) -> Result<Conversation> {
        let url = format!("{}/{}", self.conversations_url(), id);
        tracing::debug!("Fetching conversation detail: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.session.access_token)
            .send()
            .await
            .map_err(|e| DeskboardError::DetailFetch(e.to_string()))?;

        let code = response.status();
        if !code.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                DeskboardError::DetailFetch(format!("gateway returned {}: {}", code, body)).into(),
            );
        }

        response
            .json::<Conversation>()
            .await
            .map_err(|e| DeskboardError::DetailFetch(format!("invalid detail body: {}", e)).into())
    }

    async fn update_status(&self, id: u64, status: Status) -> Result<()> {
        let url = format!("{}/{}/status", self.conversations_url(), id);
        tracing::debug!("Updating conversation {} status to '{}'", id, status);

        let response = self
            .client
            .post(&url)
            .header(ACCESS_TOKEN_HEADER, &self.session.access_token)
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await
            .map_err(|e| DeskboardError::Transition(e.to_string()))?;

        let code = response.status();
        if !code.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                DeskboardError::Transition(format!("gateway returned {}: {}", code, body)).into(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session {
            access_token: "token".to_string(),
            account_id: "74".to_string(),
        }
    }

    fn test_config(base_url: &str) -> GatewayConfig {
        GatewayConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        }
    }

    #[test]
    fn test_gateway_creation() {
        let gateway = HttpGateway::new(&test_config("http://localhost:3000/api/v1"), test_session());
        assert!(gateway.is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let gateway =
            HttpGateway::new(&test_config("http://localhost:3000/api/v1/"), test_session())
                .unwrap();
        assert_eq!(
            gateway.conversations_url(),
            "http://localhost:3000/api/v1/accounts/74/conversations"
        );
    }

    #[test]
    fn test_conversations_url_includes_account() {
        let gateway =
            HttpGateway::new(&test_config("https://desk.example.com/api/v1"), test_session())
                .unwrap();
        assert_eq!(
            gateway.conversations_url(),
            "https://desk.example.com/api/v1/accounts/74/conversations"
        );
    }
}
