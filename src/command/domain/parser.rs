//! Chat command parser.

use super::{CommandError, definition::is_valid_name};

/// Prefix marking a chat message as a bot command.
pub const COMMAND_PREFIX: char = '!';

/// A parsed `!name arguments...` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    name: String,
    arguments_text: String,
}

impl CommandInvocation {
    /// Parses `!<name> <rest of line>` input.
    ///
    /// The name is lower-cased; the rest of the line is kept unparsed so the
    /// command definition can bind it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the input is empty, lacks the prefix or
    /// carries a malformed name.
    pub fn parse(raw_input: &str) -> Result<Self, CommandError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(CommandError::EmptyInput);
        }

        let body = trimmed
            .strip_prefix(COMMAND_PREFIX)
            .ok_or(CommandError::MissingPrefix)?;
        let (name, rest) = body
            .split_once(char::is_whitespace)
            .unwrap_or((body, ""));
        if !is_valid_name(name) {
            return Err(CommandError::InvalidCommandName(name.to_owned()));
        }

        Ok(Self {
            name: name.to_ascii_lowercase(),
            arguments_text: rest.trim().to_owned(),
        })
    }

    /// Returns the command name without the prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the text following the command name.
    #[must_use]
    pub fn arguments_text(&self) -> &str {
        &self.arguments_text
    }
}
