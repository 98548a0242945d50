//! Pagure outbound adapter.
//!
//! Builds `{base}/{namespace}/{project}/issue/{id}` requests and maps
//! Pagure's error codes onto lookup errors.

mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT};
use tracing::{debug, warn};
use url::Url;

use self::dto::{ErrorDto, IssueDto};
use crate::http::{self, EndpointError, HttpSetupError};
use crate::lookup::{LookupError, LookupResult, NotFoundKind, Upstream, UpstreamFailure};
use crate::tracker::{
    domain::{Issue, IssueQuery},
    ports::IssueTracker,
};

const PROJECT_NOT_FOUND: &str = "ENOPROJECT";
const ISSUE_NOT_FOUND: &str = "ENOISSUE";

/// Pagure issue-tracker client.
#[derive(Debug, Clone)]
pub struct PagureClient {
    client: Client,
    base: Url,
}

impl PagureClient {
    /// Builds a client for the Pagure API rooted at `base_url`
    /// (for example `https://pagure.io/api/0/`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpSetupError`] when the URL is unusable or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpSetupError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base: http::parse_base_url(base_url)?,
        })
    }

    /// Returns the request URL for `query`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the project, namespace or issue id is a `.` or
    /// `..` segment, and `UpstreamUnavailable` when the base URL cannot take a
    /// path.
    pub fn issue_url(&self, query: &IssueQuery) -> LookupResult<Url> {
        let segments = [
            query.namespace().unwrap_or_default(),
            query.project(),
            "issue",
            query.issue_id(),
        ];
        http::endpoint(&self.base, &segments, false).map_err(|error| match &error {
            EndpointError::DotSegment(segment) if segment.as_str() == query.issue_id() => {
                LookupError::not_found(
                    NotFoundKind::Issue {
                        project: query.project().to_owned(),
                    },
                    query.issue_id(),
                )
            }
            EndpointError::DotSegment(_) => {
                LookupError::not_found(NotFoundKind::Project, query.project())
            }
            EndpointError::NotABase(_) => {
                tracker_failure(UpstreamFailure::Transport(error.to_string()))
            }
        })
    }
}

#[async_trait]
impl IssueTracker for PagureClient {
    async fn get_issue(&self, query: &IssueQuery) -> LookupResult<Issue> {
        let url = self.issue_url(query)?;
        debug!(%url, "querying Pagure");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.bytes().await.map_err(transport_failure)?;
            return Err(map_not_found(query, &body));
        }
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), %query, "Pagure answered with an error status");
            return Err(tracker_failure(UpstreamFailure::Status {
                status: status.as_u16(),
                reason: http::reason_phrase(status),
            }));
        }

        let issue: IssueDto = response.json().await.map_err(|error| {
            tracker_failure(UpstreamFailure::Transport(format!(
                "invalid issue payload: {error}"
            )))
        })?;
        Ok(Issue::new(query.clone(), issue.title, issue.full_url))
    }
}

fn map_not_found(query: &IssueQuery, body: &[u8]) -> LookupError {
    let error = serde_json::from_slice::<ErrorDto>(body).unwrap_or_default();
    match error.error_code.as_deref() {
        Some(PROJECT_NOT_FOUND) => LookupError::not_found(NotFoundKind::Project, query.project()),
        Some(ISSUE_NOT_FOUND) => LookupError::not_found(
            NotFoundKind::Issue {
                project: query.project().to_owned(),
            },
            query.issue_id(),
        ),
        Some(code) => tracker_failure(UpstreamFailure::ErrorCode {
            code: code.to_owned(),
            message: error.error.unwrap_or_default(),
        }),
        None => tracker_failure(UpstreamFailure::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            reason: http::reason_phrase(StatusCode::NOT_FOUND),
        }),
    }
}

fn transport_failure(error: reqwest::Error) -> LookupError {
    warn!(%error, "Pagure request failed");
    tracker_failure(UpstreamFailure::Transport(error.to_string()))
}

const fn tracker_failure(failure: UpstreamFailure) -> LookupError {
    LookupError::upstream(Upstream::IssueTracker, failure)
}
