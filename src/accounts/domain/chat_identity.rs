//! Matrix chat identities and mention extraction.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::lookup::{LookupError, LookupResult};

/// Shape reported to users when an identity cannot be parsed.
pub const CHAT_IDENTITY_SHAPE: &str = "matrix user ID (e.g. @username:homeserver.com )";

static CHAT_IDENTITY_RE: OnceLock<Regex> = OnceLock::new();
static MENTION_RE: OnceLock<Regex> = OnceLock::new();

fn chat_identity_regex() -> &'static Regex {
    CHAT_IDENTITY_RE.get_or_init(|| {
        // Greedy localpart: the split happens on the rightmost colon.
        Regex::new(r"^@(.+):(.+)$")
            .unwrap_or_else(|error| panic!("chat identity regex failed to compile: {error}"))
    })
}

fn mention_regex() -> &'static Regex {
    MENTION_RE.get_or_init(|| {
        Regex::new(r#"href=['"]?https?://matrix\.to/#/([^'" >]+)"#)
            .unwrap_or_else(|error| panic!("mention regex failed to compile: {error}"))
    })
}

/// A parsed `@localpart:domain` identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatIdentity {
    localpart: String,
    domain: String,
}

impl ChatIdentity {
    /// Parses an identity of the form `@localpart:domain`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidFormat`] when the input lacks the
    /// `@localpart:domain` shape.
    pub fn parse(raw: &str) -> LookupResult<Self> {
        let captures = chat_identity_regex()
            .captures(raw)
            .ok_or_else(|| LookupError::invalid_format(raw, CHAT_IDENTITY_SHAPE))?;
        match (captures.get(1), captures.get(2)) {
            (Some(localpart), Some(domain)) => Ok(Self {
                localpart: localpart.as_str().to_owned(),
                domain: domain.as_str().to_owned(),
            }),
            _ => Err(LookupError::invalid_format(raw, CHAT_IDENTITY_SHAPE)),
        }
    }

    /// Reports whether a token should be treated as a chat identity rather
    /// than a directory username.
    #[must_use]
    pub fn looks_like(token: &str) -> bool {
        token
            .strip_prefix('@')
            .is_some_and(|rest| rest.contains(':'))
    }

    /// Returns the part before the rightmost colon, without the `@`.
    #[must_use]
    pub fn localpart(&self) -> &str {
        &self.localpart
    }

    /// Returns the home server domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the key under which the directory stores this account.
    #[must_use]
    pub fn directory_search_key(&self) -> String {
        format!("matrix://{}/{}", self.domain, self.localpart)
    }
}

impl fmt::Display for ChatIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}:{}", self.localpart, self.domain)
    }
}

/// Extracts every `matrix.to` mention target from a rich-text body.
///
/// Clients render tab-completed names as
/// `<a href="https://matrix.to/#/@user:server">user</a>`.
#[must_use]
pub fn extract_mentions(formatted_body: &str) -> Vec<String> {
    mention_regex()
        .captures_iter(formatted_body)
        .filter_map(|captures| captures.get(1))
        .map(|target| target.as_str().to_owned())
        .collect()
}
