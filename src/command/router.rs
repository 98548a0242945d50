//! Command router: parse, dispatch, look up, format, reply.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, instrument};

use crate::accounts::{
    domain::{DirectoryUser, GroupRole, LookupRequest},
    ports::DirectoryService,
    services::{GroupQuery, IdentityResolver},
};
use crate::command::{
    domain::{
        BoundArguments, ChatMessage, CommandAction, CommandDefinition, CommandError,
        CommandInvocation,
    },
    registry::CommandRegistry,
    reply::{self, ReplyFormatter},
};
use crate::lookup::LookupResult;
use crate::packages::ports::PackageRegistry;
use crate::tracker::{domain::IssueQuery, ports::IssueTracker};

/// Collaborators and settings needed to build a [`CommandRouter`].
pub struct RouterParts<D, T, P, C> {
    /// Directory client, or `None` when it failed to start.
    pub directory: Option<Arc<D>>,
    /// Issue tracker client.
    pub tracker: Arc<T>,
    /// Package registry client.
    pub packages: Arc<P>,
    /// Clock used for local-time replies.
    pub clock: Arc<C>,
    /// Base URL for profile links, ending in `/`.
    pub accounts_baseurl: String,
    /// Home server whose localparts are directory usernames.
    pub home_server: String,
}

/// Turns chat messages into at most one reply each.
///
/// Lookup failures are rendered as replies here and never propagate further;
/// messages that are not commands for this bot yield no reply.
pub struct CommandRouter<D, T, P, C>
where
    D: DirectoryService,
    T: IssueTracker,
    P: PackageRegistry,
    C: Clock + Send + Sync,
{
    registry: CommandRegistry,
    resolver: IdentityResolver<D>,
    groups: GroupQuery<D>,
    tracker: Arc<T>,
    packages: Arc<P>,
    clock: Arc<C>,
    formatter: ReplyFormatter,
}

impl<D, T, P, C> CommandRouter<D, T, P, C>
where
    D: DirectoryService,
    T: IssueTracker,
    P: PackageRegistry,
    C: Clock + Send + Sync,
{
    /// Creates a router over the built-in command set.
    #[must_use]
    pub fn new(parts: RouterParts<D, T, P, C>) -> Self {
        let RouterParts {
            directory,
            tracker,
            packages,
            clock,
            accounts_baseurl,
            home_server,
        } = parts;
        Self {
            registry: CommandRegistry::builtin(),
            resolver: IdentityResolver::new(directory.clone(), home_server),
            groups: GroupQuery::new(directory),
            tracker,
            packages,
            clock,
            formatter: ReplyFormatter::new(accounts_baseurl),
        }
    }

    /// Returns the registered commands.
    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Handles one chat message.
    ///
    /// Returns `None` when the message is not addressed to a registered
    /// command, otherwise the reply text (a result or a diagnostic).
    #[instrument(skip_all, fields(sender = %message.sender()))]
    pub async fn handle_message(&self, message: &ChatMessage) -> Option<String> {
        let (definition, arguments) = match self.prepare(message.body()) {
            Ok(prepared) => prepared,
            Err(error) if error.is_user_facing() => return Some(error.to_string()),
            Err(error) => {
                debug!(%error, "message ignored");
                return None;
            }
        };

        let reply = self
            .dispatch(definition, &arguments, message)
            .await
            .unwrap_or_else(|error| {
                info!(command = %definition.name, %error, "command failed");
                error.user_message()
            });
        Some(reply)
    }

    fn prepare(&self, body: &str) -> Result<(&CommandDefinition, BoundArguments), CommandError> {
        let invocation = CommandInvocation::parse(body)?;
        let definition = self
            .registry
            .find(invocation.name())
            .ok_or_else(|| CommandError::UnknownCommand(invocation.name().to_owned()))?;
        let arguments = definition.bind(invocation.arguments_text())?;
        Ok((definition, arguments))
    }

    async fn dispatch(
        &self,
        definition: &CommandDefinition,
        arguments: &BoundArguments,
        message: &ChatMessage,
    ) -> LookupResult<String> {
        debug!(command = %definition.name, "dispatching");
        match &definition.action {
            CommandAction::Help => Ok(self.help(arguments.get("commandname"))),
            CommandAction::Version => Ok(reply::version()),
            CommandAction::Members => self.roster(arguments, GroupRole::Members).await,
            CommandAction::Sponsors => self.roster(arguments, GroupRole::Sponsors).await,
            CommandAction::Hello => Ok(reply::hello(&self.resolve(arguments, message).await?)),
            CommandAction::User => Ok(reply::user_details(
                &self.resolve(arguments, message).await?,
            )),
            CommandAction::LocalTime => {
                let user = self.resolve(arguments, message).await?;
                Ok(reply::local_time(&user, self.clock.utc()))
            }
            CommandAction::WhoOwns => {
                let access = self
                    .packages
                    .package_access(arguments.get_or_empty("package"))
                    .await?;
                Ok(reply::package_access(&access))
            }
            CommandAction::Issue => {
                self.issue(IssueQuery::new(
                    arguments.get_or_empty("project"),
                    arguments.get_or_empty("issue_id"),
                ))
                .await
            }
            CommandAction::ProjectIssue { project } => {
                self.issue(IssueQuery::new(
                    project.as_str(),
                    arguments.get_or_empty("issue_id"),
                ))
                .await
            }
        }
    }

    fn help(&self, topic: Option<&str>) -> String {
        match topic {
            None => reply::command_listing(&self.registry),
            Some(name) => self
                .registry
                .find(name)
                .map_or_else(|| reply::unknown_help_topic(name), reply::command_help),
        }
    }

    async fn roster(&self, arguments: &BoundArguments, role: GroupRole) -> LookupResult<String> {
        let group = arguments.get_or_empty("groupname");
        let users = self.groups.roster(group, role).await?;
        Ok(self.formatter.roster(group, role, &users))
    }

    async fn resolve(
        &self,
        arguments: &BoundArguments,
        message: &ChatMessage,
    ) -> LookupResult<DirectoryUser> {
        let mut request = LookupRequest::new(arguments.get_or_empty("username"), message.sender());
        if let Some(body) = message.formatted_body() {
            request = request.with_formatted_body(body);
        }
        self.resolver.resolve(&request).await
    }

    async fn issue(&self, query: IssueQuery) -> LookupResult<String> {
        let issue = self.tracker.get_issue(&query).await?;
        Ok(reply::issue_summary(&issue))
    }
}
