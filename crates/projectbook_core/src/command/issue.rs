use super::{CommandError, CommandResult};
use crate::model::book::{EntityKind, Model, ModelError};
use crate::model::filter::IssueFilter;
use crate::model::issue::{IssueDraft, IssueId};
use crate::ui::Ui;

pub(super) fn add_issue(
    model: &mut Model,
    ui: &mut dyn Ui,
    draft: &IssueDraft,
) -> Result<CommandResult, CommandError> {
    let issue = draft.resolve(model).map_err(|err| match err {
        ModelError::NotFound(EntityKind::Project) => {
            CommandError::ProjectNotFound(draft.project_id())
        }
        other => other.into(),
    })?;
    if model.has_issue(&issue) {
        return Err(CommandError::DuplicateIssue);
    }

    let feedback = format!("New issue added: {issue}");
    model.add_issue(issue)?;

    ui.show_issues();
    model.update_filtered_issue_list(IssueFilter::All);
    Ok(CommandResult::new(feedback))
}

pub(super) fn delete_issue(
    model: &mut Model,
    ui: &mut dyn Ui,
    issue_id: IssueId,
) -> Result<CommandResult, CommandError> {
    if model.issue_by_id(issue_id).is_none() {
        return Err(CommandError::IssueNotFound(issue_id));
    }
    let removed = model.delete_issue(issue_id)?;

    ui.show_issues();
    model.update_filtered_issue_list(IssueFilter::All);
    Ok(CommandResult::new(format!("Deleted issue: {removed}")))
}

pub(super) fn find_issues(model: &mut Model, filter: IssueFilter) -> CommandResult {
    model.update_filtered_issue_list(filter);
    CommandResult::new(format!(
        "{} issues listed!",
        model.filtered_issue_list().len()
    ))
}

pub(super) fn list_issues(model: &mut Model, ui: &mut dyn Ui) -> CommandResult {
    ui.show_issues();
    model.update_filtered_issue_list(IssueFilter::All);
    CommandResult::new("Listed all issues")
}
