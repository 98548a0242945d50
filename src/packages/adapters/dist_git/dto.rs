//! Wire types for the dist-git project API.

use serde::Deserialize;

use crate::packages::domain::PackageAccess;

#[derive(Debug, Deserialize)]
pub(super) struct ProjectDto {
    #[serde(default)]
    access_users: AccessUsersDto,
}

#[derive(Debug, Default, Deserialize)]
struct AccessUsersDto {
    #[serde(default)]
    owner: Vec<String>,
    #[serde(default)]
    admin: Vec<String>,
    #[serde(default)]
    commit: Vec<String>,
}

impl ProjectDto {
    pub(super) fn into_domain(self, package: &str) -> PackageAccess {
        let AccessUsersDto {
            owner,
            admin,
            commit,
        } = self.access_users;
        PackageAccess::new(package)
            .with_owners(owner)
            .with_admins(admin)
            .with_committers(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_access_levels_default_to_empty() {
        let dto: ProjectDto = serde_json::from_str(r#"{"access_users": {"owner": ["churchyard"]}}"#)
            .expect("payload should decode");
        let access = dto.into_domain("python3");

        assert_eq!(access.owners(), ["churchyard".to_owned()]);
        assert!(access.admins().is_empty());
        assert!(access.committers().is_empty());
    }
}
