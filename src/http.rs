//! Shared plumbing for the reqwest-backed adapters.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

const USER_AGENT: &str = concat!("fedora-bot/", env!("CARGO_PKG_VERSION"));

/// Errors raised while preparing an HTTP adapter.
#[derive(Debug, Error)]
pub enum HttpSetupError {
    /// The configured base URL did not parse.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The configured value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Parses a base URL that further path segments can be appended to.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, HttpSetupError> {
    let url = Url::parse(raw).map_err(|error| HttpSetupError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: error.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(HttpSetupError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: "URL cannot carry a path".to_owned(),
        });
    }
    Ok(url)
}

/// Builds a client with the bot's user agent and a per-call deadline.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, HttpSetupError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Why a request URL could not be built from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum EndpointError {
    /// The base URL cannot carry a path.
    #[error("{0} cannot be used as a base URL")]
    NotABase(Url),

    /// A segment would be collapsed by URL normalisation.
    #[error("'{0}' is not a usable path segment")]
    DotSegment(String),
}

/// Returns `true` for `.` and `..`.
///
/// URL normalisation drops these segments, so they never name a resource
/// below the endpoint they are appended to.
pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Appends escaped path segments to `base`.
///
/// Empty segments are skipped. With `trailing_slash` the path ends in `/`.
///
/// # Errors
///
/// Returns [`EndpointError::DotSegment`] for a `.` or `..` segment and
/// [`EndpointError::NotABase`] when `base` cannot take a path.
pub(crate) fn endpoint(
    base: &Url,
    segments: &[&str],
    trailing_slash: bool,
) -> Result<Url, EndpointError> {
    if let Some(dot) = segments.iter().find(|segment| is_dot_segment(segment)) {
        return Err(EndpointError::DotSegment((*dot).to_owned()));
    }
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| EndpointError::NotABase(base.clone()))?;
        path.pop_if_empty();
        path.extend(segments.iter().filter(|segment| !segment.is_empty()));
        if trailing_slash {
            path.push("");
        }
    }
    Ok(url)
}

/// Returns the canonical reason phrase for a status, or an empty string.
pub(crate) fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_owned()
}
