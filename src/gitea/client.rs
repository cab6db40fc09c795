use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use super::types::{CommentPayload, CommentResponse, CommentTarget};
use crate::error::PluginError;

/// Upper bound on the whole request/response cycle
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal Gitea API client: one authenticated endpoint, no retries
pub struct GiteaClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GiteaClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, PluginError> {
        Self::with_timeout(base_url, token, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, PluginError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gitea-comment/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }

    /// Post `body` as a comment on the target pull request.
    ///
    /// Only `201 Created` counts as success. A success response whose body
    /// cannot be decoded still succeeds, with an empty `html_url`.
    pub async fn create_comment(
        &self,
        target: &CommentTarget,
        body: &str,
    ) -> Result<CommentResponse, PluginError> {
        let url = target.comments_url(&self.base_url);
        debug!(%url, bytes = body.len(), "posting comment");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .json(&CommentPayload {
                body: body.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let message = response.text().await.unwrap_or_default();
            return Err(PluginError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let raw = response.text().await.unwrap_or_default();
        let comment = serde_json::from_str::<CommentResponse>(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "could not decode comment response");
            CommentResponse::default()
        });

        Ok(comment)
    }
}
