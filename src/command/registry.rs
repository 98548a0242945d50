//! Static command registry.
//!
//! Commands are declared once at startup; lookup accepts the canonical name
//! or any alias, case-insensitively.

use std::collections::HashMap;

use crate::command::domain::{ArgumentSpec, CommandAction, CommandDefinition, RegistryError};

const USERNAME_HELP: &str = "#### Arguments ####\n\
    * `username`: A Fedora Accounts username or a Matrix User ID \
    (e.g. @username:fedora.im). Defaults to the sender of the message.";

/// Registered commands indexed by name and alias.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates a registry holding the bot's built-in commands.
    #[must_use]
    pub fn builtin() -> Self {
        let definitions = builtin_commands();
        debug_assert!(
            Self::with_commands(definitions.clone()).is_ok(),
            "built-in command definitions must remain valid",
        );
        Self::indexed(definitions)
    }

    /// Creates a registry from supplied definitions.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDefinition`] for a malformed
    /// definition and [`RegistryError::DuplicateName`] when two commands
    /// claim the same name or alias.
    pub fn with_commands(
        definitions: impl IntoIterator<Item = CommandDefinition>,
    ) -> Result<Self, RegistryError> {
        let definitions: Vec<_> = definitions.into_iter().collect();
        let mut claimed = HashMap::new();
        for definition in &definitions {
            definition.validate()?;
            for name in definition.names() {
                if claimed.insert(name, definition.name.as_str()).is_some() {
                    return Err(RegistryError::DuplicateName(name.to_owned()));
                }
            }
        }
        Ok(Self::indexed(definitions))
    }

    fn indexed(mut commands: Vec<CommandDefinition>) -> Self {
        commands.sort_by(|left, right| left.name.cmp(&right.name));
        let index = commands
            .iter()
            .enumerate()
            .flat_map(|(position, definition)| {
                definition
                    .names()
                    .map(move |name| (name.to_owned(), position))
            })
            .collect();
        Self { commands, index }
    }

    /// Finds a command by name or alias.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CommandDefinition> {
        self.index
            .get(&name.to_ascii_lowercase())
            .and_then(|&position| self.commands.get(position))
    }

    /// Lists every command sorted by canonical name.
    #[must_use]
    pub fn list(&self) -> &[CommandDefinition] {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "list commands", CommandAction::Help)
            .with_description(
                "List every command, or show the full help of one command.\n\
                 \n\
                 * `commandname`: (optional) a command name or alias",
            )
            .with_argument(ArgumentSpec::optional("commandname").raw())
            .with_example("members"),
        CommandDefinition::new(
            "version",
            "return information about this bot",
            CommandAction::Version,
        )
        .with_description("Return the version of the bot. Takes no arguments."),
        CommandDefinition::new(
            "members",
            "Return a list of members of the specified group",
            CommandAction::Members,
        )
        .with_description(
            "Return a list of the members of the Fedora Accounts group.\n\
             \n\
             * `groupname`: (required) The name of the Fedora Accounts group",
        )
        .with_argument(ArgumentSpec::required("groupname").raw())
        .with_example("designteam"),
        CommandDefinition::new(
            "sponsors",
            "Return a list of sponsors of the specified group",
            CommandAction::Sponsors,
        )
        .with_description(
            "Return a list of the sponsors of the Fedora Accounts group.\n\
             \n\
             * `groupname`: (required) The name of the Fedora Accounts group",
        )
        .with_argument(ArgumentSpec::required("groupname").raw())
        .with_example("designteam"),
        CommandDefinition::new(
            "hello",
            "Return brief information about a Fedora user.",
            CommandAction::Hello,
        )
        .with_description(format!(
            "Returns a short line of information about the user.\n\n{USERNAME_HELP}"
        ))
        .with_argument(ArgumentSpec::optional("username").raw())
        .with_aliases(["hi", "hello2", "hellomynameis"])
        .with_example("mattdm"),
        CommandDefinition::new(
            "user",
            "Return information about a Fedora user.",
            CommandAction::User,
        )
        .with_description(format!(
            "Returns information from Fedora Accounts about the user.\n\n{USERNAME_HELP}"
        ))
        .with_argument(ArgumentSpec::optional("username").raw())
        .with_aliases(["fasinfo"])
        .with_example("mattdm"),
        CommandDefinition::new(
            "localtime",
            "Returns the current time of the user.",
            CommandAction::LocalTime,
        )
        .with_description(format!(
            "Returns the current time of the user. \
             The timezone is queried from Fedora Accounts.\n\n{USERNAME_HELP}"
        ))
        .with_argument(ArgumentSpec::optional("username").raw())
        .with_example("mattdm"),
        CommandDefinition::new(
            "whoowns",
            "Retrieve the owner of a given package",
            CommandAction::WhoOwns,
        )
        .with_description(
            "Retrieve the owners, admins and committers of a package.\n\
             \n\
             * `package`: A Fedora package name",
        )
        .with_argument(ArgumentSpec::required("package"))
        .with_example("kernel"),
        CommandDefinition::new("pagureissue", "return a pagure issue", CommandAction::Issue)
            .with_description(
                "Show a summary of a Pagure issue.\n\
                 \n\
                 * `project`: a project in pagure.io\n\
                 * `issue_id`: the issue number",
            )
            .with_argument(ArgumentSpec::required("project"))
            .with_argument(ArgumentSpec::required("issue_id"))
            .with_example("fedora-infrastructure 1234"),
        project_issue_command("fpc", "packaging-committee"),
        project_issue_command("epel", "epel"),
        project_issue_command("fesco", "fesco"),
    ]
}

fn project_issue_command(name: &str, project: &str) -> CommandDefinition {
    CommandDefinition::new(
        name,
        format!("Get a Summary of a ticket from the {project} ticket tracker"),
        CommandAction::ProjectIssue {
            project: project.to_owned(),
        },
    )
    .with_description(format!(
        "Show a summary of an issue in the `{project}` pagure.io project.\n\
         \n\
         * `issue_id`: the issue number"
    ))
    .with_argument(ArgumentSpec::required("issue_id"))
    .with_example("1234")
}
