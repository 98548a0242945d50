//! Package registry port.

use async_trait::async_trait;

use crate::lookup::LookupResult;
use crate::packages::domain::PackageAccess;

/// Reads repository access lists for distribution packages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Returns who can administer and commit to `package`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown packages and `UpstreamUnavailable`
    /// for any other registry failure.
    async fn package_access(&self, package: &str) -> LookupResult<PackageAccess>;
}
