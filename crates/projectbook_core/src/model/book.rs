//! In-memory project book: the single owner of all entities.
//!
//! # Responsibility
//! - Hold the client, project and issue collections for one session.
//! - Keep each project's embedded client/issue copies in sync with the
//!   flat collections on every mutation.
//! - Hold the active filter of each collection for list views.
//!
//! # Invariants
//! - No two entries in a collection share identity (see `has_*`).
//! - Project ids and issue ids are unique.
//! - Every issue belongs to a project in `projects`.
//! - Every mutation either fully applies or leaves the model unchanged.

use crate::model::client::Client;
use crate::model::filter::{ClientFilter, IssueFilter, ProjectFilter};
use crate::model::issue::{Issue, IssueId};
use crate::model::project::{Project, ProjectId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Entity collection named by a model error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Client,
    Project,
    Issue,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Client => "client",
            Self::Project => "project",
            Self::Issue => "issue",
        };
        f.write_str(name)
    }
}

/// Rejected model mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An entry with the same identity already exists.
    Duplicate(EntityKind),
    /// The targeted entry does not exist.
    NotFound(EntityKind),
    /// The project already has a client attached.
    ClientConflict(ProjectId),
    /// An issue embedded in a project points at another project.
    MisplacedIssue(IssueId),
    /// The largest id is in use, so no next id can be assigned.
    IdsExhausted(EntityKind),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(kind) => write!(f, "duplicate {kind}"),
            Self::NotFound(kind) => write!(f, "{kind} not found"),
            Self::ClientConflict(id) => write!(f, "project {id} already has a client"),
            Self::MisplacedIssue(id) => {
                write!(f, "issue {id} does not belong to its enclosing project")
            }
            Self::IdsExhausted(kind) => write!(f, "no {kind} id left to assign"),
        }
    }
}

impl Error for ModelError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    clients: Vec<Client>,
    projects: Vec<Project>,
    issues: Vec<Issue>,
    client_filter: ClientFilter,
    project_filter: ProjectFilter,
    issue_filter: IssueFilter,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    // ---- clients ----

    pub fn has_client(&self, client: &Client) -> bool {
        self.clients.contains(client)
    }

    /// Adds a client to the collection without attaching it to a project.
    pub fn add_client(&mut self, client: Client) -> ModelResult<()> {
        if self.has_client(&client) {
            return Err(ModelError::Duplicate(EntityKind::Client));
        }
        self.clients.push(client);
        Ok(())
    }

    /// Adds `client` and attaches it to project `project_id` in one step.
    ///
    /// # Errors
    /// - `Duplicate(Client)` when an equal client exists.
    /// - `NotFound(Project)` when `project_id` is unknown.
    /// - `ClientConflict` when the project already has a client.
    pub fn attach_client(&mut self, project_id: ProjectId, client: Client) -> ModelResult<()> {
        if self.has_client(&client) {
            return Err(ModelError::Duplicate(EntityKind::Client));
        }
        let project = self
            .project_mut(project_id)
            .ok_or(ModelError::NotFound(EntityKind::Project))?;
        project.attach_client(client.clone())?;
        self.clients.push(client);
        Ok(())
    }

    /// Replaces `target` with `edited` in place, including the owning
    /// project's copy.
    pub fn set_client(&mut self, target: &Client, edited: Client) -> ModelResult<()> {
        let index = self
            .clients
            .iter()
            .position(|client| client == target)
            .ok_or(ModelError::NotFound(EntityKind::Client))?;
        if target != &edited && self.has_client(&edited) {
            return Err(ModelError::Duplicate(EntityKind::Client));
        }

        for project in &mut self.projects {
            if project.client() == Some(target) {
                project.replace_client(Some(edited.clone()));
            }
        }
        self.clients[index] = edited;
        Ok(())
    }

    /// Removes `target` and detaches it from its project.
    pub fn delete_client(&mut self, target: &Client) -> ModelResult<Client> {
        let index = self
            .clients
            .iter()
            .position(|client| client == target)
            .ok_or(ModelError::NotFound(EntityKind::Client))?;

        for project in &mut self.projects {
            if project.client() == Some(target) {
                project.detach_client();
            }
        }
        Ok(self.clients.remove(index))
    }

    // ---- projects ----

    pub fn has_project(&self, project: &Project) -> bool {
        self.projects
            .iter()
            .any(|existing| existing.is_same_project(project))
    }

    pub fn project_by_id(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Returns one past the largest project id in use.
    ///
    /// # Errors
    /// - `IdsExhausted(Project)` when `u32::MAX` is already taken.
    pub fn next_project_id(&self) -> ModelResult<ProjectId> {
        let max = self
            .projects
            .iter()
            .map(|project| project.id().get())
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(ProjectId::new)
            .ok_or(ModelError::IdsExhausted(EntityKind::Project))
    }

    /// Inserts `project` and registers its embedded client and issues.
    pub fn add_project(&mut self, project: Project) -> ModelResult<()> {
        if self.has_project(&project) || self.project_by_id(project.id()).is_some() {
            return Err(ModelError::Duplicate(EntityKind::Project));
        }
        if let Some(client) = project.client() {
            if self.has_client(client) {
                return Err(ModelError::Duplicate(EntityKind::Client));
            }
        }
        for (index, issue) in project.issues().iter().enumerate() {
            if issue.project_id() != project.id() {
                return Err(ModelError::MisplacedIssue(issue.id()));
            }
            let clashes_earlier = project.issues()[..index]
                .iter()
                .any(|other| other.id() == issue.id() || other.is_same_issue(issue));
            if clashes_earlier || self.issue_by_id(issue.id()).is_some() {
                return Err(ModelError::Duplicate(EntityKind::Issue));
            }
        }

        if let Some(client) = project.client() {
            self.clients.push(client.clone());
        }
        self.issues.extend(project.issues().iter().cloned());
        self.projects.push(project);
        Ok(())
    }

    /// Replaces `target` with `edited` in place and re-syncs the client and
    /// issue collections with the edited project.
    pub fn set_project(&mut self, target: &Project, edited: Project) -> ModelResult<()> {
        let index = self
            .projects
            .iter()
            .position(|project| project == target)
            .ok_or(ModelError::NotFound(EntityKind::Project))?;
        if edited.id() != target.id() && self.project_by_id(edited.id()).is_some() {
            return Err(ModelError::Duplicate(EntityKind::Project));
        }
        if !target.is_same_project(&edited) && self.has_project(&edited) {
            return Err(ModelError::Duplicate(EntityKind::Project));
        }
        if target.client() != edited.client() {
            if let Some(client) = edited.client() {
                if self.has_client(client) {
                    return Err(ModelError::Duplicate(EntityKind::Client));
                }
            }
        }
        for issue in edited.issues() {
            if issue.project_id() != edited.id() {
                return Err(ModelError::MisplacedIssue(issue.id()));
            }
            let clashes_elsewhere = self
                .issues
                .iter()
                .any(|other| other.project_id() != target.id() && other.id() == issue.id());
            if clashes_elsewhere {
                return Err(ModelError::Duplicate(EntityKind::Issue));
            }
        }

        match (target.client(), edited.client()) {
            (Some(old), Some(new)) if old != new => {
                if let Some(slot) = self.clients.iter_mut().find(|client| **client == *old) {
                    *slot = new.clone();
                }
            }
            (Some(old), None) => self.clients.retain(|client| client != old),
            (None, Some(new)) => self.clients.push(new.clone()),
            _ => {}
        }
        if target.id() != edited.id() || target.issues() != edited.issues() {
            self.issues.retain(|issue| issue.project_id() != target.id());
            self.issues.extend(edited.issues().iter().cloned());
        }
        self.projects[index] = edited;
        Ok(())
    }

    /// Removes a project together with its client and issues.
    pub fn delete_project(&mut self, id: ProjectId) -> ModelResult<Project> {
        let index = self
            .projects
            .iter()
            .position(|project| project.id() == id)
            .ok_or(ModelError::NotFound(EntityKind::Project))?;
        let project = self.projects.remove(index);

        if let Some(client) = project.client() {
            self.clients.retain(|existing| existing != client);
        }
        self.issues.retain(|issue| issue.project_id() != id);
        Ok(project)
    }

    fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id() == id)
    }

    // ---- issues ----

    pub fn has_issue(&self, issue: &Issue) -> bool {
        self.issues.iter().any(|existing| existing.is_same_issue(issue))
    }

    pub fn issue_by_id(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id() == id)
    }

    /// Returns one past the largest issue id in use.
    ///
    /// # Errors
    /// - `IdsExhausted(Issue)` when `u32::MAX` is already taken.
    pub fn next_issue_id(&self) -> ModelResult<IssueId> {
        let max = self
            .issues
            .iter()
            .map(|issue| issue.id().get())
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(IssueId::new)
            .ok_or(ModelError::IdsExhausted(EntityKind::Issue))
    }

    /// Inserts `issue` and appends it to its project's issue list.
    pub fn add_issue(&mut self, issue: Issue) -> ModelResult<()> {
        if self.has_issue(&issue) || self.issue_by_id(issue.id()).is_some() {
            return Err(ModelError::Duplicate(EntityKind::Issue));
        }
        let project = self
            .project_mut(issue.project_id())
            .ok_or(ModelError::NotFound(EntityKind::Project))?;
        project.push_issue(issue.clone());
        self.issues.push(issue);
        Ok(())
    }

    /// Replaces `target` with `edited`, moving it between projects when the
    /// project id changed.
    pub fn set_issue(&mut self, target: &Issue, edited: Issue) -> ModelResult<()> {
        let index = self
            .issues
            .iter()
            .position(|issue| issue == target)
            .ok_or(ModelError::NotFound(EntityKind::Issue))?;
        if !target.is_same_issue(&edited) && self.has_issue(&edited) {
            return Err(ModelError::Duplicate(EntityKind::Issue));
        }
        if edited.id() != target.id() && self.issue_by_id(edited.id()).is_some() {
            return Err(ModelError::Duplicate(EntityKind::Issue));
        }
        if self.project_by_id(edited.project_id()).is_none() {
            return Err(ModelError::NotFound(EntityKind::Project));
        }

        if target.project_id() == edited.project_id() {
            if let Some(project) = self.project_mut(target.project_id()) {
                project.replace_issue(target.id(), edited.clone());
            }
        } else {
            if let Some(previous) = self.project_mut(target.project_id()) {
                previous.remove_issue(target.id());
            }
            if let Some(next) = self.project_mut(edited.project_id()) {
                next.push_issue(edited.clone());
            }
        }
        self.issues[index] = edited;
        Ok(())
    }

    /// Removes an issue from the collection and from its project.
    pub fn delete_issue(&mut self, id: IssueId) -> ModelResult<Issue> {
        let index = self
            .issues
            .iter()
            .position(|issue| issue.id() == id)
            .ok_or(ModelError::NotFound(EntityKind::Issue))?;
        let issue = self.issues.remove(index);
        if let Some(project) = self.project_mut(issue.project_id()) {
            project.remove_issue(id);
        }
        Ok(issue)
    }

    // ---- filtered views ----

    pub fn update_filtered_client_list(&mut self, filter: ClientFilter) {
        self.client_filter = filter;
    }

    pub fn update_filtered_project_list(&mut self, filter: ProjectFilter) {
        self.project_filter = filter;
    }

    pub fn update_filtered_issue_list(&mut self, filter: IssueFilter) {
        self.issue_filter = filter;
    }

    pub fn client_filter(&self) -> &ClientFilter {
        &self.client_filter
    }

    pub fn project_filter(&self) -> &ProjectFilter {
        &self.project_filter
    }

    pub fn issue_filter(&self) -> &IssueFilter {
        &self.issue_filter
    }

    pub fn filtered_client_list(&self) -> Vec<&Client> {
        self.clients
            .iter()
            .filter(|client| self.client_filter.matches(client))
            .collect()
    }

    pub fn filtered_project_list(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| self.project_filter.matches(project))
            .collect()
    }

    pub fn filtered_issue_list(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| self.issue_filter.matches(issue))
            .collect()
    }
}
