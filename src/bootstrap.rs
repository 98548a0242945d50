//! Wires configured clients into a command router.

use std::sync::Arc;

use mockable::DefaultClock;
use thiserror::Error;
use tracing::{error, info};

use crate::accounts::adapters::FasjsonClient;
use crate::command::{CommandRouter, RouterParts};
use crate::config::BotSettings;
use crate::http::HttpSetupError;
use crate::packages::adapters::DistGitClient;
use crate::tracker::adapters::PagureClient;

/// Router over the production adapters.
pub type FedoraRouter = CommandRouter<FasjsonClient, PagureClient, DistGitClient, DefaultClock>;

/// A client that must be available at startup could not be built.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The Pagure client could not be built.
    #[error("issue tracker client setup failed: {0}")]
    Tracker(#[source] HttpSetupError),

    /// The package registry client could not be built.
    #[error("package registry client setup failed: {0}")]
    Packages(#[source] HttpSetupError),
}

/// Builds the FASJSON client, logging and discarding a setup failure.
///
/// `None` makes every identity and group command answer with the
/// startup-failure message.
#[must_use]
pub fn connect_directory(settings: &BotSettings) -> Option<FasjsonClient> {
    match FasjsonClient::connect(settings.fasjson_url(), settings.http_timeout()) {
        Ok(client) => {
            info!(url = settings.fasjson_url(), "FASJSON client ready");
            Some(client)
        }
        Err(setup_error) => {
            error!(
                url = settings.fasjson_url(),
                error = %setup_error,
                "FASJSON client setup failed"
            );
            None
        }
    }
}

/// Builds the production router.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the tracker or package registry client
/// cannot be built. A directory failure is not fatal.
pub fn build_router(settings: &BotSettings) -> Result<FedoraRouter, BootstrapError> {
    let tracker = PagureClient::new(settings.pagure_url(), settings.http_timeout())
        .map_err(BootstrapError::Tracker)?;
    let packages = DistGitClient::new(settings.packages_url(), settings.http_timeout())
        .map_err(BootstrapError::Packages)?;

    Ok(CommandRouter::new(RouterParts {
        directory: connect_directory(settings).map(Arc::new),
        tracker: Arc::new(tracker),
        packages: Arc::new(packages),
        clock: Arc::new(DefaultClock),
        accounts_baseurl: settings.accounts_baseurl(),
        home_server: settings.home_server().to_owned(),
    }))
}
