//! Identity resolution: free text to exactly one directory user.

use std::sync::Arc;

use tracing::debug;

use super::guard::{connected, into_lookup_error};
use crate::accounts::{
    domain::{ChatIdentity, DirectoryUser, LookupRequest, extract_mentions},
    ports::{DirectoryService, SearchFilter},
};
use crate::lookup::{AmbiguitySource, LookupError, LookupResult, NotFoundKind};

/// Home server whose localparts are Fedora Accounts usernames.
pub const DEFAULT_HOME_SERVER: &str = "fedora.im";

const USERNAME_SHAPE: &str = "Fedora Accounts username or matrix user ID";

/// Resolves usernames, chat identities and mentions to directory users.
///
/// Resolution either yields one user or one [`LookupError`]; multiple
/// candidates are never narrowed silently.
#[derive(Debug, Clone)]
pub struct IdentityResolver<D>
where
    D: DirectoryService,
{
    directory: Option<Arc<D>>,
    home_server: String,
}

impl<D> IdentityResolver<D>
where
    D: DirectoryService,
{
    /// Creates a resolver.
    ///
    /// `directory` is `None` when the client failed to start; every call then
    /// fails with the startup-failure message.
    #[must_use]
    pub fn new(directory: Option<Arc<D>>, home_server: impl Into<String>) -> Self {
        Self {
            directory,
            home_server: home_server.into(),
        }
    }

    /// Resolves a lookup request.
    ///
    /// Blank text falls back to the sender. A single `matrix.to` mention in
    /// the rich-text body takes precedence over the plain text.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AmbiguousMatch`] for several mentions or tokens,
    /// [`LookupError::InvalidFormat`] for a malformed chat identity,
    /// [`LookupError::NotFound`] when nothing matches, and
    /// [`LookupError::UpstreamUnavailable`] when the directory cannot answer.
    pub async fn resolve(&self, request: &LookupRequest) -> LookupResult<DirectoryUser> {
        let directory = connected(self.directory.as_deref())?;
        let text = request.effective_text();

        if let Some(body) = request.formatted_body() {
            let mentions = extract_mentions(body);
            match mentions.as_slice() {
                [] => {}
                [mention] => return self.lookup_chat_identity(directory, mention).await,
                _ => {
                    return Err(LookupError::ambiguous(
                        AmbiguitySource::MultipleInputs,
                        text,
                        mentions,
                    ));
                }
            }
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(LookupError::invalid_format(text, USERNAME_SHAPE)),
            [token] if ChatIdentity::looks_like(token) => {
                self.lookup_chat_identity(directory, token).await
            }
            [token] => lookup_username(directory, token).await,
            _ => Err(LookupError::ambiguous(
                AmbiguitySource::MultipleInputs,
                text,
                tokens,
            )),
        }
    }

    /// Looks up a user by exact directory username.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] for unknown users and
    /// [`LookupError::UpstreamUnavailable`] when the directory cannot answer.
    pub async fn by_username(&self, username: &str) -> LookupResult<DirectoryUser> {
        let directory = connected(self.directory.as_deref())?;
        lookup_username(directory, username).await
    }

    /// Looks up a user by `@localpart:domain` chat identity.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidFormat`] before any directory call when
    /// the identity is malformed, [`LookupError::NotFound`] when no user
    /// claims it, and [`LookupError::AmbiguousMatch`] listing every username
    /// when several do.
    pub async fn by_chat_identity(&self, identity: &str) -> LookupResult<DirectoryUser> {
        let directory = connected(self.directory.as_deref())?;
        self.lookup_chat_identity(directory, identity).await
    }

    async fn lookup_chat_identity(&self, directory: &D, raw: &str) -> LookupResult<DirectoryUser> {
        let identity = ChatIdentity::parse(raw)?;
        if identity.domain() == self.home_server {
            debug!(%identity, "home server identity, looking up localpart directly");
            return lookup_username(directory, identity.localpart()).await;
        }

        let filter = SearchFilter::ircnick(identity.directory_search_key());
        let matches = directory.search(&filter).await.map_err(|error| {
            into_lookup_error(error, || {
                LookupError::not_found(NotFoundKind::MatrixAccountMapping, raw)
            })
        })?;
        debug!(%identity, matches = matches.len(), "searched directory for chat identity");

        if matches.is_empty() {
            return Err(LookupError::not_found(
                NotFoundKind::MatrixAccountMapping,
                raw,
            ));
        }
        match <[DirectoryUser; 1]>::try_from(matches) {
            Ok([user]) => Ok(user),
            Err(candidates) => Err(LookupError::ambiguous(
                AmbiguitySource::SharedMatrixAccount,
                raw,
                candidates.iter().map(DirectoryUser::username),
            )),
        }
    }
}

async fn lookup_username<D>(directory: &D, username: &str) -> LookupResult<DirectoryUser>
where
    D: DirectoryService + ?Sized,
{
    directory.get_user(username).await.map_err(|error| {
        into_lookup_error(error, || {
            LookupError::not_found(NotFoundKind::DirectoryUser, username)
        })
    })
}
