//! Project domain model.
//!
//! # Responsibility
//! - Define the project record with its optional client and issue list.
//! - Enforce the single-client rule at the entity level.
//!
//! # Invariants
//! - A project holds at most one client.
//! - `issues` keeps insertion order and only holds issues whose
//!   `project_id` equals this project's `id`.
//! - Two projects are the same project when name and repository match.

use crate::model::book::{Model, ModelError};
use crate::model::client::Client;
use crate::model::fields::{Deadline, FieldError, Name, Repository};
use crate::model::issue::{Issue, IssueId};
use std::fmt::{Display, Formatter};

/// Stable project identifier assigned by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Project {
    id: ProjectId,
    name: Name,
    repository: Repository,
    deadline: Deadline,
    client: Option<Client>,
    issues: Vec<Issue>,
}

impl Project {
    /// Creates a project without client or issues.
    pub fn new(id: ProjectId, name: Name, repository: Repository, deadline: Deadline) -> Self {
        Self {
            id,
            name,
            repository,
            deadline,
            client: None,
            issues: Vec::new(),
        }
    }

    /// Creates a project from raw optional inputs.
    ///
    /// # Errors
    /// - `FieldError::Missing` when any field is `None`.
    /// - `FieldError::Invalid` when a field violates its format.
    pub fn try_from_fields(
        id: ProjectId,
        name: Option<&str>,
        repository: Option<&str>,
        deadline: Option<&str>,
    ) -> Result<Self, FieldError> {
        Ok(Self::new(
            id,
            Name::from_optional(name)?,
            Repository::from_optional(repository)?,
            Deadline::from_optional(deadline)?,
        ))
    }

    /// Rebuilds a full project, used when loading persisted state.
    pub fn with_parts(
        id: ProjectId,
        name: Name,
        repository: Repository,
        deadline: Deadline,
        client: Option<Client>,
        issues: Vec<Issue>,
    ) -> Self {
        Self {
            id,
            name,
            repository,
            deadline,
            client,
            issues,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn is_same_project(&self, other: &Project) -> bool {
        self.name == other.name && self.repository == other.repository
    }

    /// Attaches `client` to this project.
    ///
    /// # Errors
    /// - `ModelError::ClientConflict` when a client is already attached; the
    ///   existing client is kept.
    pub fn attach_client(&mut self, client: Client) -> Result<(), ModelError> {
        if self.client.is_some() {
            return Err(ModelError::ClientConflict(self.id));
        }
        self.client = Some(client);
        Ok(())
    }

    /// Removes and returns the attached client.
    pub fn detach_client(&mut self) -> Option<Client> {
        self.client.take()
    }

    /// Returns a copy with the given scalar fields replaced.
    pub fn with_details(
        &self,
        name: Option<Name>,
        repository: Option<Repository>,
        deadline: Option<Deadline>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| self.name.clone()),
            repository: repository.unwrap_or_else(|| self.repository.clone()),
            deadline: deadline.unwrap_or(self.deadline),
            ..self.clone()
        }
    }

    pub(crate) fn replace_client(&mut self, client: Option<Client>) {
        self.client = client;
    }

    pub(crate) fn push_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub(crate) fn replace_issue(&mut self, id: IssueId, issue: Issue) {
        if let Some(slot) = self.issues.iter_mut().find(|existing| existing.id() == id) {
            *slot = issue;
        }
    }

    pub(crate) fn remove_issue(&mut self, id: IssueId) {
        self.issues.retain(|issue| issue.id() != id);
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Repository: {}; Deadline: {}",
            self.name, self.repository, self.deadline
        )?;
        if let Some(client) = &self.client {
            write!(f, "; Client: {}", client.name())?;
        }
        Ok(())
    }
}

/// Validated project fields waiting for an id from the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    name: Name,
    repository: Repository,
    deadline: Deadline,
}

impl ProjectDraft {
    pub fn new(name: Name, repository: Repository, deadline: Deadline) -> Self {
        Self {
            name,
            repository,
            deadline,
        }
    }

    /// Assigns the next free project id.
    ///
    /// # Errors
    /// - `ModelError::IdsExhausted` when the model has no id left.
    pub fn build(&self, model: &Model) -> Result<Project, ModelError> {
        Ok(Project::new(
            model.next_project_id()?,
            self.name.clone(),
            self.repository.clone(),
            self.deadline,
        ))
    }
}
