//! In-memory directory for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::accounts::{
    domain::DirectoryUser,
    ports::{DirectoryError, DirectoryResult, DirectoryService, SearchFilter},
};

/// Thread-safe in-memory directory that counts every call it serves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
    calls: Arc<AtomicUsize>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: HashMap<String, DirectoryUser>,
    groups: HashMap<String, GroupRoster>,
    failure: Option<DirectoryError>,
}

#[derive(Debug, Default)]
struct GroupRoster {
    members: Vec<String>,
    sponsors: Vec<String>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user.
    #[must_use]
    pub fn with_user(self, user: DirectoryUser) -> Self {
        self.write(|state| {
            state.users.insert(user.username().to_owned(), user);
        });
        self
    }

    /// Adds a group with its members and sponsors.
    ///
    /// Sponsors are expected to appear among the members as well.
    #[must_use]
    pub fn with_group(
        self,
        name: &str,
        members: impl IntoIterator<Item = impl Into<String>>,
        sponsors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let roster = GroupRoster {
            members: members.into_iter().map(Into::into).collect(),
            sponsors: sponsors.into_iter().map(Into::into).collect(),
        };
        self.write(|state| {
            state.groups.insert(name.to_owned(), roster);
        });
        self
    }

    /// Makes every subsequent call fail with `error`.
    #[must_use]
    pub fn failing_with(self, error: DirectoryError) -> Self {
        self.write(|state| state.failure = Some(error));
        self
    }

    /// Returns how many port calls have been served.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn write(&self, apply: impl FnOnce(&mut InMemoryDirectoryState)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        apply(&mut state);
    }

    fn read<T>(
        &self,
        query: impl FnOnce(&InMemoryDirectoryState) -> DirectoryResult<T>,
    ) -> DirectoryResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self
            .state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        query(&state)
    }
}

fn roster_users(usernames: &[String]) -> Vec<DirectoryUser> {
    usernames.iter().map(DirectoryUser::new).collect()
}

#[async_trait]
impl DirectoryService for InMemoryDirectory {
    async fn get_user(&self, username: &str) -> DirectoryResult<DirectoryUser> {
        self.read(|state| {
            state
                .users
                .get(username)
                .cloned()
                .ok_or(DirectoryError::NotFound)
        })
    }

    async fn search(&self, filter: &SearchFilter) -> DirectoryResult<Vec<DirectoryUser>> {
        self.read(|state| {
            let mut matches: Vec<DirectoryUser> = state
                .users
                .values()
                .filter(|user| match filter.field() {
                    "ircnick" => user.ircnicks().iter().any(|nick| nick == filter.value()),
                    "username" => user.username() == filter.value(),
                    _ => false,
                })
                .cloned()
                .collect();
            matches.sort_by(|left, right| left.username().cmp(right.username()));
            Ok(matches)
        })
    }

    async fn list_group_members(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>> {
        self.read(|state| {
            state
                .groups
                .get(group)
                .map(|roster| roster_users(&roster.members))
                .ok_or(DirectoryError::NotFound)
        })
    }

    async fn list_group_sponsors(&self, group: &str) -> DirectoryResult<Vec<DirectoryUser>> {
        self.read(|state| {
            state
                .groups
                .get(group)
                .map(|roster| roster_users(&roster.sponsors))
                .ok_or(DirectoryError::NotFound)
        })
    }
}
