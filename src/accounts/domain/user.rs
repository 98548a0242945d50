//! Directory user records.

use chrono::{DateTime, Utc};

/// A snapshot of one Fedora Accounts user.
///
/// Records are fetched per request and never cached. Group listings return
/// sparse records carrying only the username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    username: String,
    human_name: Option<String>,
    pronouns: Vec<String>,
    timezone: Option<String>,
    locale: Option<String>,
    creation: Option<DateTime<Utc>>,
    gpg_key_ids: Vec<String>,
    ircnicks: Vec<String>,
}

impl DirectoryUser {
    /// Creates a record holding only a username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            human_name: None,
            pronouns: Vec::new(),
            timezone: None,
            locale: None,
            creation: None,
            gpg_key_ids: Vec::new(),
            ircnicks: Vec::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_human_name(mut self, human_name: impl Into<String>) -> Self {
        self.human_name = Some(human_name.into());
        self
    }

    /// Sets the pronouns in preference order.
    #[must_use]
    pub fn with_pronouns(mut self, pronouns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.pronouns = pronouns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the IANA timezone name.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the account creation timestamp.
    #[must_use]
    pub fn with_creation(mut self, creation: DateTime<Utc>) -> Self {
        self.creation = Some(creation);
        self
    }

    /// Sets the GPG key identifiers.
    #[must_use]
    pub fn with_gpg_key_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.gpg_key_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the chat account URIs (for example `matrix://matrix.org/bob`).
    #[must_use]
    pub fn with_ircnicks(mut self, nicks: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ircnicks = nicks.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the directory username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the display name, when shared.
    #[must_use]
    pub fn human_name(&self) -> Option<&str> {
        self.human_name.as_deref()
    }

    /// Returns the pronouns, possibly empty.
    #[must_use]
    pub fn pronouns(&self) -> &[String] {
        &self.pronouns
    }

    /// Returns the IANA timezone name, when shared.
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Returns the locale, when shared.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Returns the account creation timestamp.
    #[must_use]
    pub const fn creation(&self) -> Option<DateTime<Utc>> {
        self.creation
    }

    /// Returns the GPG key identifiers, possibly empty.
    #[must_use]
    pub fn gpg_key_ids(&self) -> &[String] {
        &self.gpg_key_ids
    }

    /// Returns the chat account URIs, possibly empty.
    #[must_use]
    pub fn ircnicks(&self) -> &[String] {
        &self.ircnicks
    }
}

/// Which roster of a group is being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    /// All members of the group.
    Members,
    /// Members allowed to sponsor others into the group.
    Sponsors,
}

impl GroupRole {
    /// Returns the heading used in replies.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::Sponsors => "Sponsors",
        }
    }
}
