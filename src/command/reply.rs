//! Reply rendering.
//!
//! Every successful command result becomes a single Markdown string. Lines
//! are separated by [`LINE_BREAK`] so chat clients keep the hard breaks.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

use crate::accounts::domain::{DirectoryUser, GroupRole};
use crate::command::{domain::CommandDefinition, registry::CommandRegistry};
use crate::lookup::LINE_BREAK;
use crate::packages::domain::PackageAccess;
use crate::tracker::domain::Issue;

/// Largest member list that is enumerated in full.
pub const MEMBER_LIST_LIMIT: usize = 200;

const ABSENT: &str = "None";

/// Renders replies that link to Fedora Accounts profiles.
#[derive(Debug, Clone)]
pub struct ReplyFormatter {
    accounts_baseurl: String,
}

impl ReplyFormatter {
    /// Creates a formatter linking profiles under `accounts_baseurl`.
    #[must_use]
    pub fn new(accounts_baseurl: impl Into<String>) -> Self {
        Self {
            accounts_baseurl: accounts_baseurl.into(),
        }
    }

    /// Returns a Markdown link to `username`'s profile.
    #[must_use]
    pub fn user_link(&self, username: &str) -> String {
        format!("[{username}]({}user/{username})", self.accounts_baseurl)
    }

    /// Renders a group roster.
    ///
    /// Member lists longer than [`MEMBER_LIST_LIMIT`] are summarised by
    /// count. Sponsor lists are always enumerated.
    #[must_use]
    pub fn roster(&self, group: &str, role: GroupRole, users: &[DirectoryUser]) -> String {
        if role == GroupRole::Members && users.len() > MEMBER_LIST_LIMIT {
            return format!(
                "{group} has {count} members, too many to list here",
                count = users.len()
            );
        }
        let links: Vec<_> = users
            .iter()
            .map(|user| self.user_link(user.username()))
            .collect();
        format!("{} of {group}: {}", role.heading(), links.join(", "))
    }
}

/// `Human Name (username) - pronoun or pronoun`.
#[must_use]
pub fn hello(user: &DirectoryUser) -> String {
    let mut reply = user.human_name().map_or_else(
        || user.username().to_owned(),
        |name| format!("{name} ({})", user.username()),
    );
    if !user.pronouns().is_empty() {
        reply.push_str(" - ");
        reply.push_str(&user.pronouns().join(" or "));
    }
    reply
}

/// Multi-line account summary; absent values print `None`.
#[must_use]
pub fn user_details(user: &DirectoryUser) -> String {
    let creation = user
        .creation()
        .map(|created| created.to_rfc3339_opts(SecondsFormat::Secs, true));
    let lines = [
        format!("User: {}", user.username()),
        format!("Name: {}", user.human_name().unwrap_or(ABSENT)),
        format!("Pronouns: {}", joined_or_absent(user.pronouns(), " or ")),
        format!("Creation: {}", creation.as_deref().unwrap_or(ABSENT)),
        format!("Timezone: {}", user.timezone().unwrap_or(ABSENT)),
        format!("Locale: {}", user.locale().unwrap_or(ABSENT)),
        format!("GPG Key IDs: {}", joined_or_absent(user.gpg_key_ids(), " and ")),
    ];
    lines.join(LINE_BREAK)
}

/// The user's wall-clock time at `now`, or why it cannot be shown.
#[must_use]
pub fn local_time(user: &DirectoryUser, now: DateTime<Utc>) -> String {
    let username = user.username();
    let Some(timezone) = user.timezone() else {
        return format!("User \"{username}\" doesn't share their timezone");
    };
    match timezone.parse::<Tz>() {
        Ok(zone) => format!(
            "The current local time of \"{username}\" is: \"{}\" (timezone: {timezone})",
            now.with_timezone(&zone).format("%H:%M")
        ),
        Err(_) => format!("The timezone of \"{username}\" was unknown: \"{timezone}\""),
    }
}

/// Owner, admin and committer lines for a package.
#[must_use]
pub fn package_access(access: &PackageAccess) -> String {
    if access.is_unassigned() {
        return format!("No users have access to package {}.", access.package());
    }
    [
        ("owner", access.owners()),
        ("admin", access.admins()),
        ("commit", access.committers()),
    ]
    .into_iter()
    .filter(|(_, users)| !users.is_empty())
    .map(|(level, users)| format!("__{level}:__ {}", users.join(", ")))
    .collect::<Vec<_>>()
    .join(LINE_BREAK)
}

/// `[project #id](url): title`.
#[must_use]
pub fn issue_summary(issue: &Issue) -> String {
    format!(
        "[{} #{}]({}): {}",
        issue.project(),
        issue.issue_id(),
        issue.full_url(),
        issue.title()
    )
}

/// The bot's name and version.
#[must_use]
pub fn version() -> String {
    format!("fedora-bot version {}", env!("CARGO_PKG_VERSION"))
}

/// One line per registered command, sorted by name.
#[must_use]
pub fn command_listing(registry: &CommandRegistry) -> String {
    registry
        .list()
        .iter()
        .map(|definition| format!("`{}`:: {}", definition.usage(), definition.help))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Full help for one command, including its aliases.
#[must_use]
pub fn command_help(definition: &CommandDefinition) -> String {
    let mut lines = vec![format!(
        "**Usage:** `{}` - {}",
        definition.usage(),
        definition.help
    )];
    lines.extend(definition.description.lines().map(str::to_owned));
    if !definition.aliases.is_empty() {
        lines.push(String::new());
        lines.push("#### Aliases ####".to_owned());
        lines.extend(definition.aliases.iter().map(|alias| format!("* `{alias}`")));
    }
    lines.join(LINE_BREAK)
}

/// Reply for help on an unregistered name.
#[must_use]
pub fn unknown_help_topic(name: &str) -> String {
    format!("`{name}` is not a valid command")
}

fn joined_or_absent(values: &[String], separator: &str) -> String {
    if values.is_empty() {
        ABSENT.to_owned()
    } else {
        values.join(separator)
    }
}
