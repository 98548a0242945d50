//! Bot configuration loaded via OrthoConfig.
//!
//! Values layer as defaults, configuration file, `FEDORA_BOT_*` environment
//! variables and command-line flags, later sources winning.

use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::accounts::services::DEFAULT_HOME_SERVER;

const DEFAULT_FASJSON_URL: &str = "https://fasjson.fedoraproject.org/";
const DEFAULT_ACCOUNTS_BASEURL: &str = "https://accounts.fedoraproject.org/";
const DEFAULT_PAGURE_URL: &str = "https://pagure.io/api/0/";
const DEFAULT_PACKAGES_URL: &str = "https://src.fedoraproject.org/api/0/";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONSOLE_SENDER: &str = "@console:fedora.im";

/// Configuration failed to load.
#[derive(Debug, Error)]
#[error("failed to load bot configuration: {0}")]
pub struct ConfigError(String);

/// Settings for the bot and its upstream clients.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FEDORA_BOT")]
pub struct BotSettings {
    /// FASJSON base URL.
    pub fasjson_url: Option<String>,
    /// Fedora Accounts base URL used for profile links.
    pub accounts_baseurl: Option<String>,
    /// Pagure API base URL.
    pub pagure_url: Option<String>,
    /// Package source registry API base URL.
    pub packages_url: Option<String>,
    /// Home server whose localparts are Fedora Accounts usernames.
    pub home_server: Option<String>,
    /// Per-request deadline for outbound HTTP calls, in seconds.
    pub http_timeout_secs: Option<u64>,
    /// Sender identity used by the console harness.
    pub console_sender: Option<String>,
}

impl BotSettings {
    /// Loads settings from the given command-line arguments and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be read or a value does
    /// not parse.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|error| ConfigError(error.to_string()))
    }

    /// Returns the FASJSON base URL.
    #[must_use]
    pub fn fasjson_url(&self) -> &str {
        self.fasjson_url.as_deref().unwrap_or(DEFAULT_FASJSON_URL)
    }

    /// Returns the Fedora Accounts base URL, always ending in `/`.
    #[must_use]
    pub fn accounts_baseurl(&self) -> String {
        let base = self
            .accounts_baseurl
            .as_deref()
            .unwrap_or(DEFAULT_ACCOUNTS_BASEURL);
        if base.ends_with('/') {
            base.to_owned()
        } else {
            format!("{base}/")
        }
    }

    /// Returns the Pagure API base URL.
    #[must_use]
    pub fn pagure_url(&self) -> &str {
        self.pagure_url.as_deref().unwrap_or(DEFAULT_PAGURE_URL)
    }

    /// Returns the package registry API base URL.
    #[must_use]
    pub fn packages_url(&self) -> &str {
        self.packages_url.as_deref().unwrap_or(DEFAULT_PACKAGES_URL)
    }

    /// Returns the home server used for the username fast path.
    #[must_use]
    pub fn home_server(&self) -> &str {
        self.home_server.as_deref().unwrap_or(DEFAULT_HOME_SERVER)
    }

    /// Returns the outbound HTTP deadline.
    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// Returns the console harness sender identity.
    #[must_use]
    pub fn console_sender(&self) -> &str {
        self.console_sender
            .as_deref()
            .unwrap_or(DEFAULT_CONSOLE_SENDER)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration loading.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARIABLES: [&str; 7] = [
        "FEDORA_BOT_FASJSON_URL",
        "FEDORA_BOT_ACCOUNTS_BASEURL",
        "FEDORA_BOT_PAGURE_URL",
        "FEDORA_BOT_PACKAGES_URL",
        "FEDORA_BOT_HOME_SERVER",
        "FEDORA_BOT_HTTP_TIMEOUT_SECS",
        "FEDORA_BOT_CONSOLE_SENDER",
    ];

    fn load_from_empty_args() -> BotSettings {
        BotSettings::from_args([OsString::from("fedora-bot")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARIABLES.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.fasjson_url(), DEFAULT_FASJSON_URL);
        assert_eq!(settings.accounts_baseurl(), DEFAULT_ACCOUNTS_BASEURL);
        assert_eq!(settings.pagure_url(), DEFAULT_PAGURE_URL);
        assert_eq!(settings.packages_url(), DEFAULT_PACKAGES_URL);
        assert_eq!(settings.home_server(), "fedora.im");
        assert_eq!(settings.http_timeout(), Duration::from_secs(30));
        assert_eq!(settings.console_sender(), DEFAULT_CONSOLE_SENDER);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("FEDORA_BOT_FASJSON_URL", Some("https://fasjson.stg.example/".to_owned())),
            ("FEDORA_BOT_ACCOUNTS_BASEURL", Some("https://accounts.stg.example".to_owned())),
            ("FEDORA_BOT_PAGURE_URL", None),
            ("FEDORA_BOT_PACKAGES_URL", None),
            ("FEDORA_BOT_HOME_SERVER", Some("stg.fedora.im".to_owned())),
            ("FEDORA_BOT_HTTP_TIMEOUT_SECS", Some("5".to_owned())),
            ("FEDORA_BOT_CONSOLE_SENDER", None),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.fasjson_url(), "https://fasjson.stg.example/");
        assert_eq!(settings.accounts_baseurl(), "https://accounts.stg.example/");
        assert_eq!(settings.pagure_url(), DEFAULT_PAGURE_URL);
        assert_eq!(settings.home_server(), "stg.fedora.im");
        assert_eq!(settings.http_timeout(), Duration::from_secs(5));
    }
}
