//! Error types for command parsing and registry construction.

use thiserror::Error;

/// Errors raised while parsing a chat message into a bound command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The message was empty.
    #[error("command input cannot be empty")]
    EmptyInput,

    /// The message does not start with the command prefix.
    #[error("commands must start with '!'")]
    MissingPrefix,

    /// The command name contains unsupported characters.
    #[error("invalid command name '{0}'")]
    InvalidCommandName(String),

    /// No command or alias with this name is registered.
    #[error("command '!{0}' was not found")]
    UnknownCommand(String),

    /// A required argument was not supplied.
    #[error("`{argument}` argument is required. e.g. `!{command} {example}`")]
    MissingArgument {
        /// Canonical command name.
        command: String,
        /// Name of the missing argument.
        argument: String,
        /// Sample arguments for the command.
        example: String,
    },

    /// More tokens were supplied than the command accepts.
    #[error("Unexpected argument `{token}`. Usage: `{usage}`")]
    UnexpectedArgument {
        /// First surplus token.
        token: String,
        /// Usage line of the command.
        usage: String,
    },
}

impl CommandError {
    /// Returns `true` when the error should be answered in the chat room.
    ///
    /// Parse failures stay silent because the message may be meant for
    /// another bot.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::UnexpectedArgument { .. }
        )
    }
}

/// Errors raised while building a command registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A name or alias is claimed by more than one command.
    #[error("duplicate command name or alias '{0}'")]
    DuplicateName(String),

    /// A definition is malformed.
    #[error("invalid definition for command '{command}': {reason}")]
    InvalidDefinition {
        /// Command name.
        command: String,
        /// Validation reason.
        reason: String,
    },
}
