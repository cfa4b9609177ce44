use super::{CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::fields::{Deadline, Name, Repository};
use crate::model::filter::ProjectFilter;
use crate::model::project::{ProjectDraft, ProjectId};
use crate::ui::Ui;

/// Replacement values for an edit; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectEdit {
    pub name: Option<Name>,
    pub repository: Option<Repository>,
    pub deadline: Option<Deadline>,
}

impl ProjectEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.repository.is_none() && self.deadline.is_none()
    }
}

pub(super) fn add_project(
    model: &mut Model,
    ui: &mut dyn Ui,
    draft: &ProjectDraft,
) -> Result<CommandResult, CommandError> {
    let project = draft.build(model)?;
    if model.has_project(&project) {
        return Err(CommandError::DuplicateProject);
    }

    let feedback = format!("New project added: {project}");
    model.add_project(project)?;

    ui.show_projects();
    model.update_filtered_project_list(ProjectFilter::All);
    Ok(CommandResult::new(feedback))
}

pub(super) fn edit_project(
    model: &mut Model,
    ui: &mut dyn Ui,
    project_id: ProjectId,
    edit: &ProjectEdit,
) -> Result<CommandResult, CommandError> {
    if edit.is_empty() {
        return Err(CommandError::NothingToEdit);
    }
    let target = model
        .project_by_id(project_id)
        .cloned()
        .ok_or(CommandError::ProjectNotFound(project_id))?;
    let edited = target.with_details(
        edit.name.clone(),
        edit.repository.clone(),
        edit.deadline,
    );
    if !target.is_same_project(&edited) && model.has_project(&edited) {
        return Err(CommandError::DuplicateProject);
    }

    let feedback = format!("Edited project: {edited}");
    model.set_project(&target, edited)?;

    ui.show_projects();
    model.update_filtered_project_list(ProjectFilter::All);
    Ok(CommandResult::new(feedback))
}

pub(super) fn delete_project(
    model: &mut Model,
    ui: &mut dyn Ui,
    project_id: ProjectId,
) -> Result<CommandResult, CommandError> {
    if model.project_by_id(project_id).is_none() {
        return Err(CommandError::ProjectNotFound(project_id));
    }
    let removed = model.delete_project(project_id)?;

    ui.show_projects();
    model.update_filtered_project_list(ProjectFilter::All);
    Ok(CommandResult::new(format!("Deleted project: {removed}")))
}

pub(super) fn find_projects(model: &mut Model, filter: ProjectFilter) -> CommandResult {
    model.update_filtered_project_list(filter);
    CommandResult::new(format!(
        "{} projects listed!",
        model.filtered_project_list().len()
    ))
}

pub(super) fn list_projects(model: &mut Model, ui: &mut dyn Ui) -> CommandResult {
    ui.show_projects();
    model.update_filtered_project_list(ProjectFilter::All);
    CommandResult::new("Listed all projects")
}
