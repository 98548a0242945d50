//! Directory service port.
//!
//! Abstracts the Fedora Accounts directory so identity resolution and group
//! queries can run against FASJSON or an in-memory double.

use async_trait::async_trait;
use thiserror::Error;

use crate::accounts::domain::DirectoryUser;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// An exact-match search over one directory field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    field: String,
    value: String,
}

impl SearchFilter {
    /// Matches records whose `field` equals `value` exactly.
    #[must_use]
    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Matches records listing `value` among their chat account URIs.
    #[must_use]
    pub fn ircnick(value: impl Into<String>) -> Self {
        Self::exact("ircnick", value)
    }

    /// Returns the searched field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the expected value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the query parameter name used by the directory API.
    #[must_use]
    pub fn query_key(&self) -> String {
        format!("{}__exact", self.field)
    }
}

/// Directory lookup contract.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetches a user by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when the user does not exist.
    async fn get_user(&self, username: &str) -> DirectoryResult<DirectoryUser>;

    /// Searches users with an exact-match filter.
    ///
    /// An empty vector means nothing matched.
    async fn search(&self, filter: &SearchFilter) -> DirectoryResult<Vec<DirectoryUser>>;

    /// Lists the members of a group.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when the group does not exist.
    async fn list_group_members(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>>;

    /// Lists the sponsors of a group.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when the group does not exist.
    async fn list_group_sponsors(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>>;
}

/// Errors raised by directory clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The requested user or group does not exist.
    #[error("directory record not found")]
    NotFound,

    /// The client could not set up a session (bad URL, expired credentials,
    /// unreachable host).
    #[error("directory client setup failed: {0}")]
    Setup(String),

    /// The directory answered with an error status.
    #[error("directory API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response.
        message: String,
    },

    /// The request failed in transit or could not be decoded.
    #[error("directory transport error: {0}")]
    Transport(String),
}
