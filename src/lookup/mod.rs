//! Lookup failure taxonomy shared by every query component.
//!
//! Identity resolution, group queries, the issue-tracker client and the
//! package registry client all report failures as [`LookupError`]. The command
//! router renders them verbatim, so no transport error reaches a chat room in
//! raw form.

mod error;

pub use error::{
    AmbiguitySource, LINE_BREAK, LookupError, LookupResult, NotFoundKind, Upstream, UpstreamError,
    UpstreamFailure,
};
