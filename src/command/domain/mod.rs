//! Command domain types.

mod definition;
mod error;
mod message;
mod parser;

pub use definition::{ArgumentSpec, BoundArguments, CommandAction, CommandDefinition};
pub use error::{CommandError, RegistryError};
pub use message::ChatMessage;
pub use parser::{COMMAND_PREFIX, CommandInvocation};
