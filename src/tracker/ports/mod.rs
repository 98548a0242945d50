//! Issue-tracker port.

use async_trait::async_trait;

use crate::lookup::LookupResult;
use crate::tracker::domain::{Issue, IssueQuery};

/// Fetches single issues from a remote tracker.
///
/// Implementations map tracker error codes to lookup errors themselves, so
/// callers only ever see [`LookupError`](crate::lookup::LookupError).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches the issue identified by `query`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown projects or issues and
    /// `UpstreamUnavailable` for any other tracker failure.
    async fn get_issue(&self, query: &IssueQuery) -> LookupResult<Issue>;
}
