//! User-facing lookup failures.
//!
//! Every variant renders, through `Display`, the exact text the bot replies
//! with. Components convert their transport and port errors into these
//! variants before returning to the command router.

use std::fmt;

use thiserror::Error;

/// Separator used between lines in multi-line chat replies.
///
/// The trailing spaces force a hard line break in Markdown renderers.
pub const LINE_BREAK: &str = "      \n";

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// The kind of record that could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    /// A Fedora Accounts user.
    DirectoryUser,
    /// A mapping from a Matrix account to a Fedora Accounts user.
    MatrixAccountMapping,
    /// A Fedora Accounts group.
    Group,
    /// An issue-tracker project.
    Project,
    /// An issue within an issue-tracker project.
    Issue {
        /// Project the issue was looked up in.
        project: String,
    },
    /// A distribution package.
    Package,
}

/// Why a lookup could not be narrowed to a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguitySource {
    /// The caller supplied more than one username or mention.
    MultipleInputs,
    /// More than one directory user claims the same Matrix account.
    SharedMatrixAccount,
}

/// External services the bot depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    /// The Fedora Accounts directory (FASJSON).
    Directory,
    /// The Pagure issue tracker.
    IssueTracker,
    /// The package source registry.
    PackageRegistry,
}

impl Upstream {
    /// Returns the service name shown to users.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Directory => "FASJSON",
            Self::IssueTracker => "Pagure",
            Self::PackageRegistry => "Fedora package sources",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How an upstream service failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    /// The client could not be constructed when the bot started.
    NotConnectedAtStartup,
    /// The client could not establish or authenticate a session for this call.
    Connection(String),
    /// The service answered with a structured error code.
    ErrorCode {
        /// Raw error code reported by the service.
        code: String,
        /// Raw error message reported by the service.
        message: String,
    },
    /// The service answered with an unexpected HTTP status.
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Reason phrase or message accompanying the status.
        reason: String,
    },
    /// The request failed in transit or the response could not be decoded.
    Transport(String),
}

/// An upstream service was unavailable or answered unexpectedly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", upstream_message(.service, .failure))]
pub struct UpstreamError {
    service: Upstream,
    failure: UpstreamFailure,
}

impl UpstreamError {
    /// Creates an upstream error.
    #[must_use]
    pub const fn new(service: Upstream, failure: UpstreamFailure) -> Self {
        Self { service, failure }
    }

    /// Returns the failing service.
    #[must_use]
    pub const fn service(&self) -> Upstream {
        self.service
    }

    /// Returns the failure detail.
    #[must_use]
    pub const fn failure(&self) -> &UpstreamFailure {
        &self.failure
    }
}

/// A lookup failure carrying its rendered user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The requested record does not exist.
    #[error("{}", not_found_message(.kind, .identifier))]
    NotFound {
        /// What kind of record was requested.
        kind: NotFoundKind,
        /// Identifier the caller supplied.
        identifier: String,
    },

    /// The input matched more than one record or named more than one target.
    #[error("{}", ambiguous_message(.reason, .identifier, .candidates))]
    AmbiguousMatch {
        /// Why the match was ambiguous.
        reason: AmbiguitySource,
        /// Input that produced the ambiguity.
        identifier: String,
        /// Every candidate the input matched.
        candidates: Vec<String>,
    },

    /// The input does not have the expected shape.
    #[error("Sorry, {identifier} does not look like a valid {expected}")]
    InvalidFormat {
        /// The malformed input.
        identifier: String,
        /// Description of the expected shape.
        expected: String,
    },

    /// An upstream service could not answer.
    #[error(transparent)]
    UpstreamUnavailable(#[from] UpstreamError),
}

impl LookupError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(kind: NotFoundKind, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            identifier: identifier.into(),
        }
    }

    /// Creates an ambiguity error.
    #[must_use]
    pub fn ambiguous(
        reason: AmbiguitySource,
        identifier: impl Into<String>,
        candidates: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::AmbiguousMatch {
            reason,
            identifier: identifier.into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an invalid-format error.
    #[must_use]
    pub fn invalid_format(identifier: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            identifier: identifier.into(),
            expected: expected.into(),
        }
    }

    /// Creates an upstream-unavailable error.
    #[must_use]
    pub const fn upstream(service: Upstream, failure: UpstreamFailure) -> Self {
        Self::UpstreamUnavailable(UpstreamError::new(service, failure))
    }

    /// Returns the message sent back to the chat room.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn not_found_message(kind: &NotFoundKind, identifier: &str) -> String {
    match kind {
        NotFoundKind::DirectoryUser => {
            format!("Sorry, but Fedora Accounts user '{identifier}' does not exist")
        }
        NotFoundKind::MatrixAccountMapping => {
            format!("No Fedora Accounts users have the {identifier} Matrix Account defined")
        }
        NotFoundKind::Group => format!("Sorry, but group '{identifier}' does not exist"),
        NotFoundKind::Project => format!("Project {identifier} not found"),
        NotFoundKind::Issue { project } => {
            format!("Issue #{identifier} not found on {project} project")
        }
        NotFoundKind::Package => format!("Package {identifier} not found."),
    }
}

fn ambiguous_message(reason: &AmbiguitySource, identifier: &str, candidates: &[String]) -> String {
    match reason {
        AmbiguitySource::MultipleInputs => {
            "Sorry, I can only look up one username at a time".to_owned()
        }
        AmbiguitySource::SharedMatrixAccount => format!(
            "{count} Fedora Accounts users have the {identifier} Matrix Account defined:\
             {LINE_BREAK}{names}",
            count = candidates.len(),
            names = candidates.join(LINE_BREAK),
        ),
    }
}

fn upstream_message(service: &Upstream, failure: &UpstreamFailure) -> String {
    match failure {
        UpstreamFailure::NotConnectedAtStartup => format!(
            "Sorry, I can not give you the required information. \
             I failed to connect to {service} on startup"
        ),
        UpstreamFailure::Connection(detail) => format!(
            "Sorry, I can not give you the required information. \
             I failed to connect to {service}: **{detail}**"
        ),
        UpstreamFailure::ErrorCode { code, message } => {
            format!("Issue querying {service}: {code}: {message}")
        }
        UpstreamFailure::Status { status, reason } => {
            format!("Issue querying {service}: {status}: {reason}")
        }
        UpstreamFailure::Transport(detail) => format!("Issue querying {service}: {detail}"),
    }
}
