//! Issue domain model and its deferred construction draft.
//!
//! # Responsibility
//! - Define the issue record tracked under one project.
//! - Provide `IssueDraft`, which holds parsed fields until the owning
//!   project can be resolved against a live `Model`.
//!
//! # Invariants
//! - `project_id` always names a project present in the owning model.
//! - Identity ignores the model-assigned `id`.

use crate::model::book::{EntityKind, Model, ModelError};
use crate::model::fields::{Deadline, Description, FieldError, Priority};
use crate::model::project::ProjectId;
use std::fmt::{Display, Formatter};

/// Stable issue identifier assigned by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssueId(u32);

impl IssueId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for IssueId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit of work tracked under a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue {
    id: IssueId,
    project_id: ProjectId,
    description: Description,
    deadline: Deadline,
    priority: Priority,
}

impl Issue {
    pub fn new(
        id: IssueId,
        project_id: ProjectId,
        description: Description,
        deadline: Deadline,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            project_id,
            description,
            deadline,
            priority,
        }
    }

    pub fn id(&self) -> IssueId {
        self.id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns true when both issues describe the same work item.
    pub fn is_same_issue(&self, other: &Issue) -> bool {
        self.project_id == other.project_id
            && self.description == other.description
            && self.deadline == other.deadline
            && self.priority == other.priority
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Deadline: {}; Priority: {}; Project: {}",
            self.description, self.deadline, self.priority, self.project_id
        )
    }
}

/// Issue fields validated at parse time, waiting for project resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    project_id: ProjectId,
    description: Description,
    deadline: Deadline,
    priority: Priority,
}

impl IssueDraft {
    pub fn new(
        project_id: ProjectId,
        description: Description,
        deadline: Deadline,
        priority: Priority,
    ) -> Self {
        Self {
            project_id,
            description,
            deadline,
            priority,
        }
    }

    /// Builds a draft from raw optional inputs.
    pub fn try_from_fields(
        project_id: ProjectId,
        description: Option<&str>,
        deadline: Option<&str>,
        priority: Option<&str>,
    ) -> Result<Self, FieldError> {
        Ok(Self::new(
            project_id,
            Description::from_optional(description)?,
            Deadline::from_optional(deadline)?,
            Priority::from_optional(priority)?,
        ))
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Resolves the owning project and assigns the next free issue id.
    ///
    /// # Errors
    /// - `ModelError::NotFound(Project)` when the project is not in `model`.
    /// - `ModelError::IdsExhausted(Issue)` when no issue id is left.
    pub fn resolve(&self, model: &Model) -> Result<Issue, ModelError> {
        if model.project_by_id(self.project_id).is_none() {
            return Err(ModelError::NotFound(EntityKind::Project));
        }
        Ok(Issue::new(
            model.next_issue_id()?,
            self.project_id,
            self.description.clone(),
            self.deadline,
            self.priority,
        ))
    }
}
