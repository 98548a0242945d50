//! Command definitions and argument binding.

use std::collections::{BTreeMap, HashSet};

use super::{CommandError, RegistryError};

/// Argument specification for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Argument name shown in usage lines.
    pub name: String,
    /// Whether the argument must be supplied.
    pub required: bool,
    /// Whether the argument takes the rest of the line verbatim.
    pub raw: bool,
}

impl ArgumentSpec {
    /// A required single-token argument.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            required: true,
            raw: false,
        }
    }

    /// An optional single-token argument.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    /// Makes the argument swallow the remainder of the line.
    #[must_use]
    pub const fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    fn usage(&self) -> String {
        if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }
}

/// What the router does when a command is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// List commands or describe one.
    Help,
    /// Report the bot version.
    Version,
    /// List group members.
    Members,
    /// List group sponsors.
    Sponsors,
    /// Greet a user with their name and pronouns.
    Hello,
    /// Show a user's account details.
    User,
    /// Show a user's current local time.
    LocalTime,
    /// List who has access to a package.
    WhoOwns,
    /// Summarise an issue in a named project.
    Issue,
    /// Summarise an issue in a fixed project.
    ProjectIssue {
        /// Tracker project the command targets.
        project: String,
    },
}

/// A statically declared chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    /// Canonical command name without the prefix.
    pub name: String,
    /// One-line summary used in the command listing.
    pub help: String,
    /// Longer description shown by per-command help.
    pub description: String,
    /// Ordered argument specifications.
    pub arguments: Vec<ArgumentSpec>,
    /// Alternative names resolving to this command.
    pub aliases: Vec<String>,
    /// Sample arguments used in diagnostics.
    pub example: String,
    /// Handler selector.
    pub action: CommandAction,
}

impl CommandDefinition {
    /// Creates a command definition without arguments or aliases.
    #[must_use]
    pub fn new(name: impl Into<String>, help: impl Into<String>, action: CommandAction) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            help: help.into(),
            description: String::new(),
            arguments: Vec::new(),
            aliases: Vec::new(),
            example: String::new(),
            action,
        }
    }

    /// Sets the long description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends an argument specification.
    #[must_use]
    pub fn with_argument(mut self, argument: ArgumentSpec) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Sets the aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases
            .into_iter()
            .map(|alias| alias.into().to_ascii_lowercase())
            .collect();
        self
    }

    /// Sets the sample arguments.
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Returns `!name <required> [optional]`.
    #[must_use]
    pub fn usage(&self) -> String {
        std::iter::once(format!("!{}", self.name))
            .chain(self.arguments.iter().map(ArgumentSpec::usage))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the canonical name followed by every alias.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Checks names and argument ordering.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDefinition`] for empty or malformed
    /// names, duplicate argument names, a raw argument that is not last, or
    /// a required argument after an optional one.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidDefinition {
            command: self.name.clone(),
            reason,
        };

        if let Some(name) = self.names().find(|name| !is_valid_name(name)) {
            return Err(invalid(format!("'{name}' is not a valid command name")));
        }

        let mut seen = HashSet::new();
        let mut optional_seen = false;
        for (position, argument) in self.arguments.iter().enumerate() {
            if !seen.insert(argument.name.as_str()) {
                return Err(invalid(format!("duplicate argument '{}'", argument.name)));
            }
            if argument.raw && position + 1 != self.arguments.len() {
                return Err(invalid(format!(
                    "raw argument '{}' must be last",
                    argument.name
                )));
            }
            if argument.required && optional_seen {
                return Err(invalid(format!(
                    "required argument '{}' follows an optional one",
                    argument.name
                )));
            }
            optional_seen |= !argument.required;
        }
        Ok(())
    }

    /// Binds the text after the command name to the declared arguments.
    ///
    /// Single-token arguments take one whitespace-separated token each; a raw
    /// argument takes the trimmed remainder of the line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MissingArgument`] when a required argument is
    /// absent and [`CommandError::UnexpectedArgument`] when tokens remain.
    pub fn bind(&self, arguments_text: &str) -> Result<BoundArguments, CommandError> {
        let mut values = BTreeMap::new();
        let mut remaining = arguments_text.trim();

        for argument in &self.arguments {
            let (value, rest) = if argument.raw {
                (remaining, "")
            } else {
                remaining
                    .split_once(char::is_whitespace)
                    .map_or((remaining, ""), |(token, rest)| (token, rest.trim_start()))
            };
            remaining = rest;

            if value.is_empty() {
                if argument.required {
                    return Err(CommandError::MissingArgument {
                        command: self.name.clone(),
                        argument: argument.name.clone(),
                        example: self.example.clone(),
                    });
                }
                continue;
            }
            values.insert(argument.name.clone(), value.to_owned());
        }

        if let Some(token) = remaining.split_whitespace().next() {
            return Err(CommandError::UnexpectedArgument {
                token: token.to_owned(),
                usage: self.usage(),
            });
        }
        Ok(BoundArguments { values })
    }
}

/// Argument values bound to a command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundArguments {
    values: BTreeMap<String, String>,
}

impl BoundArguments {
    /// Returns the value bound to `name`, if supplied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the value bound to `name`, or an empty string.
    #[must_use]
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }
}

pub(crate) fn is_valid_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}
