//! Dist-git (Pagure for packages) outbound adapter.

mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT};
use tracing::{debug, warn};
use url::Url;

use self::dto::ProjectDto;
use crate::http::{self, EndpointError, HttpSetupError};
use crate::lookup::{LookupError, LookupResult, NotFoundKind, Upstream, UpstreamFailure};
use crate::packages::{domain::PackageAccess, ports::PackageRegistry};

/// Client for the package source registry API.
#[derive(Debug, Clone)]
pub struct DistGitClient {
    client: Client,
    base: Url,
}

impl DistGitClient {
    /// Builds a client for the registry rooted at `base_url`
    /// (for example `https://src.fedoraproject.org/api/0/`).
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
}

#[async_trait]
impl PackageRegistry for DistGitClient {
    async fn package_access(&self, package: &str) -> LookupResult<PackageAccess> {
        let url = http::endpoint(&self.base, &["rpms", package], false).map_err(|error| {
            match error {
                EndpointError::DotSegment(_) => {
                    LookupError::not_found(NotFoundKind::Package, package)
                }
                EndpointError::NotABase(_) => {
                    registry_failure(UpstreamFailure::Transport(error.to_string()))
                }
            }
        })?;
        debug!(%url, "querying package registry");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_failure)?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(LookupError::not_found(NotFoundKind::Package, package));
            }
            status => {
                warn!(status = status.as_u16(), package, "package registry error status");
                return Err(registry_failure(UpstreamFailure::Status {
                    status: status.as_u16(),
                    reason: http::reason_phrase(status),
                }));
            }
        }

        let project: ProjectDto = response.json().await.map_err(|error| {
            registry_failure(UpstreamFailure::Transport(format!(
                "invalid package payload: {error}"
            )))
        })?;
        Ok(project.into_domain(package))
    }
}

fn transport_failure(error: reqwest::Error) -> LookupError {
    warn!(%error, "package registry request failed");
    registry_failure(UpstreamFailure::Transport(error.to_string()))
}

const fn registry_failure(failure: UpstreamFailure) -> LookupError {
    LookupError::upstream(Upstream::PackageRegistry, failure)
}
