//! Wire types for FASJSON responses.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::accounts::domain::DirectoryUser;

/// Every FASJSON payload wraps its data in a `result` field.
#[derive(Debug, Deserialize)]
pub(super) struct ResultEnvelope<T> {
    pub(super) result: T,
}

/// Error body returned alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorDto {
    #[serde(default)]
    pub(super) message: Option<String>,
}

/// A user record. Optional attributes may be missing or `null`.
#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    username: String,
    human_name: Option<String>,
    pronouns: Option<Vec<String>>,
    timezone: Option<String>,
    locale: Option<String>,
    creation: Option<String>,
    gpgkeyids: Option<Vec<String>>,
    ircnicks: Option<Vec<String>>,
}

impl UserDto {
    pub(super) fn into_domain(self) -> DirectoryUser {
        let mut user = DirectoryUser::new(self.username)
            .with_pronouns(self.pronouns.unwrap_or_default())
            .with_gpg_key_ids(self.gpgkeyids.unwrap_or_default())
            .with_ircnicks(self.ircnicks.unwrap_or_default());
        if let Some(human_name) = self.human_name {
            user = user.with_human_name(human_name);
        }
        if let Some(timezone) = self.timezone {
            user = user.with_timezone(timezone);
        }
        if let Some(locale) = self.locale {
            user = user.with_locale(locale);
        }
        if let Some(creation) = self.creation.as_deref().and_then(parse_creation) {
            user = user.with_creation(creation);
        }
        user
    }
}

/// Group rosters only carry usernames.
#[derive(Debug, Deserialize)]
pub(super) struct GroupMemberDto {
    username: String,
}

impl GroupMemberDto {
    pub(super) fn into_domain(self) -> DirectoryUser {
        DirectoryUser::new(self.username)
    }
}

fn parse_creation(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Some(naive.and_utc()),
        Err(error) => {
            tracing::debug!(value = raw, %error, "ignoring unparseable creation timestamp");
            None
        }
    }
}
