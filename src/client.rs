use reqwest::Client;
use url::Url;

use crate::error::{Result, RosterError};
use crate::responses::RemoteUser;

/// Thin wrapper over the seed directory endpoint. The application issues
/// exactly one read per run; there is no retry and no caching.
pub struct RosterClient {
    http: Client,
    endpoint: Url,
}

impl RosterClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub async fn fetch_users(&self) -> Result<Vec<RemoteUser>> {
        let response = self.http.get(self.endpoint.clone()).send().await?;

        if !response.status().is_success() {
            return Err(RosterError::Api {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        Ok(response.json().await?)
    }
}
