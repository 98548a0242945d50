//! Connectivity guard and error conversion shared by directory services.

use tracing::warn;

use crate::accounts::ports::DirectoryError;
use crate::lookup::{LookupError, LookupResult, Upstream, UpstreamFailure};

/// Returns the directory handle, or the startup-failure error when the client
/// never came up. Every directory-backed entry point calls this first.
pub(crate) fn connected<D: ?Sized>(directory: Option<&D>) -> LookupResult<&D> {
    directory.ok_or_else(|| {
        LookupError::upstream(Upstream::Directory, UpstreamFailure::NotConnectedAtStartup)
    })
}

/// Converts a directory client error into a user-facing lookup error.
///
/// `not_found` supplies the error for a missing record, since only the caller
/// knows what was being looked up.
pub(crate) fn into_lookup_error(
    error: DirectoryError,
    not_found: impl FnOnce() -> LookupError,
) -> LookupError {
    let failure = match error {
        DirectoryError::NotFound => return not_found(),
        DirectoryError::Setup(detail) => UpstreamFailure::Connection(detail),
        DirectoryError::Api { status, message } => UpstreamFailure::Status {
            status,
            reason: message,
        },
        DirectoryError::Transport(detail) => UpstreamFailure::Transport(detail),
    };
    warn!(?failure, "directory call failed");
    LookupError::upstream(Upstream::Directory, failure)
}
