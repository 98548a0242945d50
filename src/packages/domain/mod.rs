//! Package access domain types.

/// Users holding each access level on a package repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageAccess {
    package: String,
    owners: Vec<String>,
    admins: Vec<String>,
    committers: Vec<String>,
}

impl PackageAccess {
    /// Creates an access record with no users.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Sets the owners.
    #[must_use]
    pub fn with_owners(mut self, owners: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.owners = owners.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the admins.
    #[must_use]
    pub fn with_admins(mut self, admins: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.admins = admins.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the committers.
    #[must_use]
    pub fn with_committers(
        mut self,
        committers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.committers = committers.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the package name.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the owners.
    #[must_use]
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// Returns the admins.
    #[must_use]
    pub fn admins(&self) -> &[String] {
        &self.admins
    }

    /// Returns the committers.
    #[must_use]
    pub fn committers(&self) -> &[String] {
        &self.committers
    }

    /// Returns `true` when no access level lists anyone.
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.owners.is_empty() && self.admins.is_empty() && self.committers.is_empty()
    }
}
