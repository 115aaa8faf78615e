//! Bearer-token client for the Remnawave user API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::info;

use super::types::{DestinationUser, UserListResponse};
use super::UserDirectory;
use crate::errors::DestinationError;
use crate::source::UserRecord;

#[derive(Clone)]
pub struct RemnawaveClient {
    http_client: Client,
    api_url: String,
    token: String,
}

impl RemnawaveClient {
    pub fn new(
        http_client: Client,
        api_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// Shared create/update submission: any 2xx-class status is success,
    /// anything else is a rejection carrying the response body as
    /// diagnostic text.
    async fn upsert(
        &self,
        operation: &str,
        request: RequestBuilder,
        user: &UserRecord,
    ) -> Result<(), DestinationError> {
        let response = request
            .bearer_auth(&self.token)
            .json(user)
            .send()
            .await
            .map_err(|e| DestinationError::Network {
                operation: operation.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DestinationError::Rejected {
            operation: operation.to_string(),
            username: user.username.clone(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl UserDirectory for RemnawaveClient {
    async fn find_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<DestinationUser>, DestinationError> {
        let url = format!("{}/users?uuid={}", self.api_url, uuid);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| DestinationError::Network {
                operation: "lookup".to_string(),
                message: e.to_string(),
            })?;

        // A non-success lookup is indistinguishable from "does not exist"
        // here; the driver falls through to create.
        if !response.status().is_success() {
            return Ok(None);
        }

        let listing: UserListResponse =
            response
                .json()
                .await
                .map_err(|e| DestinationError::InvalidResponse {
                    operation: "lookup".to_string(),
                    message: e.to_string(),
                })?;

        Ok(listing.data.into_iter().next())
    }

    async fn create(&self, user: &UserRecord) -> Result<(), DestinationError> {
        let url = format!("{}/users", self.api_url);
        self.upsert("create", self.http_client.post(&url), user)
            .await?;
        info!("created user {}", user.username);
        Ok(())
    }

    async fn update(
        &self,
        destination_id: &str,
        user: &UserRecord,
    ) -> Result<(), DestinationError> {
        let url = format!("{}/users/{}", self.api_url, destination_id);
        self.upsert("update", self.http_client.put(&url), user)
            .await?;
        info!("updated user {}", user.username);
        Ok(())
    }
}
