//! Group membership queries.

use std::sync::Arc;

use super::guard::{connected, into_lookup_error};
use crate::accounts::{
    domain::{DirectoryUser, GroupRole},
    ports::DirectoryService,
};
use crate::lookup::{LookupError, LookupResult, NotFoundKind};

/// Lists the members or sponsors of a named group.
///
/// Returns the full roster; summarising long lists is left to the caller.
#[derive(Debug, Clone)]
pub struct GroupQuery<D>
where
    D: DirectoryService,
{
    directory: Option<Arc<D>>,
}

impl<D> GroupQuery<D>
where
    D: DirectoryService,
{
    /// Creates a group query. `None` marks a directory that failed to start.
    #[must_use]
    pub const fn new(directory: Option<Arc<D>>) -> Self {
        Self { directory }
    }

    /// Lists all members of `group`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] for unknown groups and
    /// [`LookupError::UpstreamUnavailable`] when the directory cannot answer.
    pub async fn members(&self, group: &str) -> LookupResult<Vec<DirectoryUser>> {
        self.roster(group, GroupRole::Members).await
    }

    /// Lists the sponsors of `group`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] for unknown groups and
    /// [`LookupError::UpstreamUnavailable`] when the directory cannot answer.
    pub async fn sponsors(&self, group: &str) -> LookupResult<Vec<DirectoryUser>> {
        self.roster(group, GroupRole::Sponsors).await
    }

    /// Lists one roster of `group`.
    ///
    /// # Errors
    ///
    /// See [`GroupQuery::members`].
    pub async fn roster(&self, group: &str, role: GroupRole) -> LookupResult<Vec<DirectoryUser>> {
        let directory = connected(self.directory.as_deref())?;
        let result = match role {
            GroupRole::Members => directory.list_group_members(group).await,
            GroupRole::Sponsors => directory.list_group_sponsors(group).await,
        };
        result.map_err(|error| {
            into_lookup_error(error, || LookupError::not_found(NotFoundKind::Group, group))
        })
    }
}
