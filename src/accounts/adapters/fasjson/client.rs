//! Reqwest-backed FASJSON client.
//!
//! Owns transport details only: URL construction, status mapping and JSON
//! decoding. Authentication is whatever the HTTP stack provides.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::dto::{ErrorDto, GroupMemberDto, ResultEnvelope, UserDto};
use crate::accounts::{
    domain::DirectoryUser,
    ports::{DirectoryError, DirectoryResult, DirectoryService, SearchFilter},
};
use crate::http::{self, EndpointError};

/// FASJSON directory client.
#[derive(Debug, Clone)]
pub struct FasjsonClient {
    client: Client,
    base: Url,
}

impl FasjsonClient {
    /// Builds a client for the FASJSON instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Setup`] when the URL is unusable or the HTTP
    /// client cannot be constructed.
    pub fn connect(base_url: &str, timeout: Duration) -> DirectoryResult<Self> {
        let base = http::parse_base_url(base_url)
            .map_err(|error| DirectoryError::Setup(error.to_string()))?;
        let client =
            http::build_client(timeout).map_err(|error| DirectoryError::Setup(error.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> DirectoryResult<Url> {
        http::endpoint(&self.base, segments, true).map_err(|error| match error {
            EndpointError::DotSegment(_) => DirectoryError::NotFound,
            EndpointError::NotABase(_) => DirectoryError::Setup(error.to_string()),
        })
    }

    async fn fetch<T: DeserializeOwned + Send>(&self, url: Url) -> DirectoryResult<T> {
        debug!(%url, "querying FASJSON");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.map_err(map_transport_error)?;
            return Err(map_status_error(status, &body));
        }

        let envelope: ResultEnvelope<T> = response.json().await.map_err(|error| {
            DirectoryError::Transport(format!("invalid FASJSON payload: {error}"))
        })?;
        Ok(envelope.result)
    }
}

#[async_trait]
impl DirectoryService for FasjsonClient {
    async fn get_user(&self, username: &str) -> DirectoryResult<DirectoryUser> {
        let url = self.endpoint(&["v1", "users", username])?;
        let user: UserDto = self.fetch(url).await?;
        Ok(user.into_domain())
    }

    async fn search(&self, filter: &SearchFilter) -> DirectoryResult<Vec<DirectoryUser>> {
        let mut url = self.endpoint(&["v1", "search", "users"])?;
        url.query_pairs_mut()
            .append_pair(&filter.query_key(), filter.value());
        let users: Vec<UserDto> = self.fetch(url).await?;
        Ok(users.into_iter().map(UserDto::into_domain).collect())
    }

    async fn list_group_members(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>> {
        self.list_group(group, "members").await
    }

    async fn list_group_sponsors(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>> {
        self.list_group(group, "sponsors").await
    }
}

impl FasjsonClient {
    async fn list_group(&self, group: &str, roster: &str) -> DirectoryResult<Vec<DirectoryUser>> {
        let url = self.endpoint(&["v1", "groups", group, roster])?;
        let members: Vec<GroupMemberDto> = self.fetch(url).await?;
        Ok(members
            .into_iter()
            .map(GroupMemberDto::into_domain)
            .collect())
    }
}

fn map_transport_error(error: reqwest::Error) -> DirectoryError {
    if error.is_connect() || error.is_builder() {
        DirectoryError::Setup(error.to_string())
    } else {
        DirectoryError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> DirectoryError {
    match status {
        StatusCode::NOT_FOUND => DirectoryError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DirectoryError::Setup(format!(
            "credentials rejected ({} {})",
            status.as_u16(),
            http::reason_phrase(status)
        )),
        _ => {
            let detail = serde_json::from_slice::<ErrorDto>(body)
                .unwrap_or_default()
                .message
                .unwrap_or_else(|| http::reason_phrase(status));
            DirectoryError::Api {
                status: status.as_u16(),
                message: detail,
            }
        }
    }
}
