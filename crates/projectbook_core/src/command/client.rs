use super::{CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::client::Client;
use crate::model::filter::ClientFilter;
use crate::model::project::ProjectId;
use crate::ui::Ui;

pub(super) fn add_client(
    model: &mut Model,
    ui: &mut dyn Ui,
    client: Client,
    project_id: ProjectId,
) -> Result<CommandResult, CommandError> {
    if model.has_client(&client) {
        return Err(CommandError::DuplicateClient);
    }
    let project = model
        .project_by_id(project_id)
        .ok_or(CommandError::ProjectNotFound(project_id))?;
    if project.client().is_some() {
        return Err(CommandError::ExistingClient);
    }

    let feedback = format!("New client added: {client}");
    model.attach_client(project_id, client)?;

    ui.show_clients();
    model.update_filtered_client_list(ClientFilter::All);
    Ok(CommandResult::new(feedback))
}

pub(super) fn delete_client(
    model: &mut Model,
    ui: &mut dyn Ui,
    project_id: ProjectId,
) -> Result<CommandResult, CommandError> {
    let project = model
        .project_by_id(project_id)
        .ok_or(CommandError::ProjectNotFound(project_id))?;
    let client = project
        .client()
        .cloned()
        .ok_or(CommandError::NoClient(project_id))?;

    let removed = model.delete_client(&client)?;

    ui.show_clients();
    model.update_filtered_client_list(ClientFilter::All);
    Ok(CommandResult::new(format!("Deleted client: {removed}")))
}

pub(super) fn find_clients(model: &mut Model, filter: ClientFilter) -> CommandResult {
    model.update_filtered_client_list(filter);
    CommandResult::new(format!(
        "{} clients listed!",
        model.filtered_client_list().len()
    ))
}

pub(super) fn list_clients(model: &mut Model, ui: &mut dyn Ui) -> CommandResult {
    ui.show_clients();
    model.update_filtered_client_list(ClientFilter::All);
    CommandResult::new("Listed all clients")
}
