//! The hosted gateway, spoken to over HTTP

use std::time::Duration;

use langclub_shared::urls::GATEWAY_REST_PATH;
use serde::Deserialize;

use super::{Gateway, GatewayError, Query};

/// The body the gateway sends along with a non-success status
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the human readable message out of an error response, if there is one
pub(super) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

pub struct RestGateway {
    client: reqwest::Client,
    base_url: String,
    /// the public (anon) key; sent both as `apikey` and as bearer token
    api_key: String,
}
impl RestGateway {
    pub fn new(
        base_url: &str,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!(
            "{}{GATEWAY_REST_PATH}/{}",
            self.base_url,
            urlencoding::encode(table)
        )
    }
}

#[async_trait::async_trait]
impl Gateway for RestGateway {
    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, GatewayError> {
        let response = self
            .client
            .get(self.table_url(query.table()))
            .query(&query.query_pairs())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Vec<serde_json::Value>>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::warn!(
                "Gateway query on {} failed with {status}: {}",
                query.table(),
                message.as_deref().unwrap_or("no message")
            );
            Err(GatewayError::BadStatusCode(status, message))
        }
    }
}
