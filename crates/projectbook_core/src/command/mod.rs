//! User actions executed against a `Model`.
//!
//! # Responsibility
//! - Represent every user action as one `Command` variant with its payload.
//! - Validate preconditions, mutate the model, notify the `Ui`, and return a
//!   feedback message.
//!
//! # Invariants
//! - A failed command leaves the model unchanged.
//! - Successful mutating commands reset the affected list filter to `All`.
//! - Find commands only change the active filter.

mod client;
mod issue;
mod project;

pub use project::ProjectEdit;

use crate::model::book::{EntityKind, Model, ModelError};
use crate::model::client::Client;
use crate::model::filter::{ClientFilter, IssueFilter, ProjectFilter};
use crate::model::issue::{IssueDraft, IssueId};
use crate::model::project::{ProjectDraft, ProjectId};
use crate::ui::Ui;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_DUPLICATE_CLIENT: &str = "This client already exists in the address book";
pub const MESSAGE_EXISTING_CLIENT: &str = "This project already has a client";
pub const MESSAGE_DUPLICATE_PROJECT: &str = "This project already exists in the address book";
pub const MESSAGE_DUPLICATE_ISSUE: &str = "This issue already exists in the address book";
pub const MESSAGE_NOTHING_TO_EDIT: &str = "At least one field to edit must be provided.";

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

/// Recoverable command failure carrying a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    DuplicateClient,
    ExistingClient,
    DuplicateProject,
    DuplicateIssue,
    NothingToEdit,
    ProjectNotFound(ProjectId),
    IssueNotFound(IssueId),
    NoClient(ProjectId),
    /// Every id of the given kind is taken.
    IdsExhausted(EntityKind),
    /// Model rejected the mutation for a reason not covered above.
    Model(ModelError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateClient => f.write_str(MESSAGE_DUPLICATE_CLIENT),
            Self::ExistingClient => f.write_str(MESSAGE_EXISTING_CLIENT),
            Self::DuplicateProject => f.write_str(MESSAGE_DUPLICATE_PROJECT),
            Self::DuplicateIssue => f.write_str(MESSAGE_DUPLICATE_ISSUE),
            Self::NothingToEdit => f.write_str(MESSAGE_NOTHING_TO_EDIT),
            Self::ProjectNotFound(id) => write!(f, "No project with id {id}"),
            Self::IssueNotFound(id) => write!(f, "No issue with id {id}"),
            Self::NoClient(id) => write!(f, "Project {id} has no client"),
            Self::IdsExhausted(kind) => write!(f, "No more {kind} ids are available"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        match value {
            ModelError::Duplicate(EntityKind::Client) => Self::DuplicateClient,
            ModelError::Duplicate(EntityKind::Project) => Self::DuplicateProject,
            ModelError::Duplicate(EntityKind::Issue) => Self::DuplicateIssue,
            ModelError::ClientConflict(_) => Self::ExistingClient,
            ModelError::IdsExhausted(kind) => Self::IdsExhausted(kind),
            other => Self::Model(other),
        }
    }
}

/// One user action with its already-validated payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddClient {
        client: Client,
        project_id: ProjectId,
    },
    DeleteClient {
        project_id: ProjectId,
    },
    FindClient(ClientFilter),
    ListClients,
    AddProject(ProjectDraft),
    EditProject {
        project_id: ProjectId,
        edit: ProjectEdit,
    },
    DeleteProject {
        project_id: ProjectId,
    },
    FindProject(ProjectFilter),
    ListProjects,
    AddIssue(IssueDraft),
    DeleteIssue {
        issue_id: IssueId,
    },
    FindIssue(IssueFilter),
    ListIssues,
}

impl Command {
    /// Stable command name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddClient { .. } => "client_add",
            Self::DeleteClient { .. } => "client_delete",
            Self::FindClient(_) => "client_find",
            Self::ListClients => "client_list",
            Self::AddProject(_) => "project_add",
            Self::EditProject { .. } => "project_edit",
            Self::DeleteProject { .. } => "project_delete",
            Self::FindProject(_) => "project_find",
            Self::ListProjects => "project_list",
            Self::AddIssue(_) => "issue_add",
            Self::DeleteIssue { .. } => "issue_delete",
            Self::FindIssue(_) => "issue_find",
            Self::ListIssues => "issue_list",
        }
    }

    /// Runs this command once against `model`.
    ///
    /// # Errors
    /// Returns `CommandError` when a precondition fails; the model is left
    /// untouched in that case.
    pub fn execute(self, model: &mut Model, ui: &mut dyn Ui) -> Result<CommandResult, CommandError> {
        let name = self.name();
        let outcome = match self {
            Self::AddClient { client, project_id } => {
                client::add_client(model, ui, client, project_id)
            }
            Self::DeleteClient { project_id } => client::delete_client(model, ui, project_id),
            Self::FindClient(filter) => Ok(client::find_clients(model, filter)),
            Self::ListClients => Ok(client::list_clients(model, ui)),
            Self::AddProject(draft) => project::add_project(model, ui, &draft),
            Self::EditProject { project_id, edit } => {
                project::edit_project(model, ui, project_id, &edit)
            }
            Self::DeleteProject { project_id } => project::delete_project(model, ui, project_id),
            Self::FindProject(filter) => Ok(project::find_projects(model, filter)),
            Self::ListProjects => Ok(project::list_projects(model, ui)),
            Self::AddIssue(draft) => issue::add_issue(model, ui, &draft),
            Self::DeleteIssue { issue_id } => issue::delete_issue(model, ui, issue_id),
            Self::FindIssue(filter) => Ok(issue::find_issues(model, filter)),
            Self::ListIssues => Ok(issue::list_issues(model, ui)),
        };

        match &outcome {
            Ok(_) => info!("event=command_execute module=command status=ok command={name}"),
            Err(err) => warn!(
                "event=command_execute module=command status=error command={name} error={err}"
            ),
        }
        outcome
    }
}
