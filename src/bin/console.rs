//! Console harness for the command router.
//!
//! Usage:
//!
//! ```text
//! fedora-bot-console [--fasjson-url URL] [--pagure-url URL] ...
//! ```
//!
//! Every line read from standard input is handled as a chat message sent by
//! the configured console sender. Replies are written to standard output;
//! lines that are not commands produce no output.

use std::env;

use fedora_bot::bootstrap::{self, BootstrapError};
use fedora_bot::command::domain::ChatMessage;
use fedora_bot::config::{BotSettings, ConfigError};
use fedora_bot::telemetry;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::runtime::Builder;
use tracing::info;

/// Errors that end the console session.
#[derive(Debug, Error)]
enum ConsoleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), ConsoleError> {
    telemetry::init();
    let settings = BotSettings::from_args(env::args_os())?;
    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(settings))
}

async fn run(settings: BotSettings) -> Result<(), ConsoleError> {
    let router = bootstrap::build_router(&settings)?;
    let sender = settings.console_sender().to_owned();
    info!(%sender, "console session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        let message = ChatMessage::new(sender.as_str(), line);
        if let Some(reply) = router.handle_message(&message).await {
            stdout.write_all(reply.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
