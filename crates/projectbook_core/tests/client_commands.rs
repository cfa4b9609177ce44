use projectbook_core::{
    Client, ClientFilter, Command, CommandError, ListPanel, Model, Project, ProjectId, RecordingUi,
};

fn john() -> Client {
    Client::try_from_fields(
        Some("John Doe"),
        Some("98765432"),
        Some("johnd@example.com"),
    )
    .unwrap()
}

fn model_with_projects(count: u32) -> Model {
    let mut model = Model::new();
    for id in 1..=count {
        let name = format!("Project {id}");
        let repository = format!("tom/repo{id}");
        let project = Project::try_from_fields(
            ProjectId::new(id),
            Some(name.as_str()),
            Some(repository.as_str()),
            Some("2022-03-05"),
        )
        .unwrap();
        model.add_project(project).unwrap();
    }
    model
}

#[test]
fn add_client_attaches_to_project_without_client() {
    let mut model = model_with_projects(1);
    let mut ui = RecordingUi::new();

    let result = Command::AddClient {
        client: john(),
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap();

    assert_eq!(
        result.feedback,
        "New client added: John Doe; Phone: 98765432; Email: johnd@example.com"
    );
    assert_eq!(model.clients(), &[john()]);
    assert_eq!(
        model.project_by_id(ProjectId::new(1)).unwrap().client(),
        Some(&john())
    );
    assert_eq!(ui.active(), Some(ListPanel::Clients));
    assert_eq!(model.client_filter(), &ClientFilter::All);
}

#[test]
fn add_duplicate_client_fails_and_keeps_size() {
    let mut model = model_with_projects(2);
    let mut ui = RecordingUi::new();
    Command::AddClient {
        client: john(),
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap();

    let err = Command::AddClient {
        client: john(),
        project_id: ProjectId::new(2),
    }
    .execute(&mut model, &mut ui)
    .unwrap_err();

    assert_eq!(err, CommandError::DuplicateClient);
    assert_eq!(err.to_string(), "This client already exists in the address book");
    assert_eq!(model.clients().len(), 1);
    assert!(model.project_by_id(ProjectId::new(2)).unwrap().client().is_none());
}

#[test]
fn add_client_to_project_with_client_fails() {
    let mut model = model_with_projects(1);
    let mut ui = RecordingUi::new();
    Command::AddClient {
        client: john(),
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap();

    let jane =
        Client::try_from_fields(Some("Jane Roe"), Some("91234567"), Some("jane@example.com"))
            .unwrap();
    let err = Command::AddClient {
        client: jane,
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap_err();

    assert_eq!(err.to_string(), "This project already has a client");
    assert_eq!(
        model.project_by_id(ProjectId::new(1)).unwrap().client(),
        Some(&john())
    );
    assert_eq!(model.clients().len(), 1);
}

#[test]
fn add_client_to_unknown_project_fails_without_mutation() {
    let mut model = model_with_projects(1);
    let mut ui = RecordingUi::new();
    let before = model.clone();

    let err = Command::AddClient {
        client: john(),
        project_id: ProjectId::new(5),
    }
    .execute(&mut model, &mut ui)
    .unwrap_err();

    assert_eq!(err, CommandError::ProjectNotFound(ProjectId::new(5)));
    assert_eq!(model, before);
    assert_eq!(ui.active(), None);
}

#[test]
fn find_client_by_phone_reports_count() {
    let mut model = model_with_projects(2);
    let mut ui = RecordingUi::new();
    Command::AddClient {
        client: john(),
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap();
    let other =
        Client::try_from_fields(Some("Jane Roe"), Some("11112222"), Some("jane@example.com"))
            .unwrap();
    Command::AddClient {
        client: other,
        project_id: ProjectId::new(2),
    }
    .execute(&mut model, &mut ui)
    .unwrap();

    let result = Command::FindClient(ClientFilter::PhoneContains(vec!["98765".to_string()]))
        .execute(&mut model, &mut ui)
        .unwrap();

    assert_eq!(result.feedback, "1 clients listed!");
    assert_eq!(model.filtered_client_list(), vec![&john()]);
}

#[test]
fn delete_client_detaches_from_project() {
    let mut model = model_with_projects(1);
    let mut ui = RecordingUi::new();
    Command::AddClient {
        client: john(),
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap();

    let result = Command::DeleteClient {
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap();

    assert!(result.feedback.starts_with("Deleted client: John Doe"));
    assert!(model.clients().is_empty());
    assert!(model.project_by_id(ProjectId::new(1)).unwrap().client().is_none());

    let err = Command::DeleteClient {
        project_id: ProjectId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap_err();
    assert_eq!(err, CommandError::NoClient(ProjectId::new(1)));
}

#[test]
fn commands_compare_by_payload() {
    let find_a = Command::FindClient(ClientFilter::PhoneContains(vec!["123".to_string()]));
    let find_b = Command::FindClient(ClientFilter::PhoneContains(vec!["123".to_string()]));
    let find_c = Command::FindClient(ClientFilter::PhoneContains(vec!["456".to_string()]));
    assert_eq!(find_a, find_b);
    assert_ne!(find_a, find_c);
}
