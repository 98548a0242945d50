//! Wire types for the Pagure issue API.

use serde::Deserialize;

/// Fields of an issue payload the bot uses.
#[derive(Debug, Deserialize)]
pub(super) struct IssueDto {
    pub(super) title: String,
    pub(super) full_url: String,
}

/// Error body Pagure sends with 404 responses.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorDto {
    #[serde(default)]
    pub(super) error_code: Option<String>,
    #[serde(default)]
    pub(super) error: Option<String>,
}
