//! Shared world state for identity resolution scenarios.

use std::sync::Arc;

use fedora_bot::accounts::{
    adapters::InMemoryDirectory,
    domain::{DirectoryUser, LookupRequest},
    services::{DEFAULT_HOME_SERVER, IdentityResolver},
};
use fedora_bot::lookup::LookupResult;
use rstest::fixture;

/// Sender used when a scenario does not name one.
pub const SENDER: &str = "@tester:fedora.im";

/// Scenario world for identity resolution behaviour tests.
#[derive(Default)]
pub struct IdentityWorld {
    pub directory: InMemoryDirectory,
    pub directory_failed: bool,
    pub last_result: Option<LookupResult<DirectoryUser>>,
}

impl IdentityWorld {
    /// Resolves `request` against the scenario directory.
    pub fn resolve(&mut self, request: &LookupRequest) {
        let directory = (!self.directory_failed).then(|| Arc::new(self.directory.clone()));
        let resolver = IdentityResolver::new(directory, DEFAULT_HOME_SERVER);
        self.last_result = Some(run_async(resolver.resolve(request)));
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IdentityWorld {
    IdentityWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
