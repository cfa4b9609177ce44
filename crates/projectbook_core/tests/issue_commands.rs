use projectbook_core::{
    Command, CommandError, Deadline, Description, EntityKind, Issue, IssueDraft, IssueFilter,
    IssueId, ListPanel, Model, ModelError, Priority, Project, ProjectId, RecordingUi,
};

fn model_with_project() -> Model {
    let mut model = Model::new();
    let project = Project::try_from_fields(
        ProjectId::new(1),
        Some("Website"),
        Some("tom/tp"),
        Some("2022-03-05"),
    )
    .unwrap();
    model.add_project(project).unwrap();
    model
}

fn draft(project_id: u32, description: &str, priority: &str) -> IssueDraft {
    IssueDraft::try_from_fields(
        ProjectId::new(project_id),
        Some(description),
        Some("2022-12-10"),
        Some(priority),
    )
    .unwrap()
}

#[test]
fn add_issue_resolves_project_and_assigns_id() {
    let mut model = model_with_project();
    let mut ui = RecordingUi::new();

    let result = Command::AddIssue(draft(1, "create person class", "0"))
        .execute(&mut model, &mut ui)
        .unwrap();

    assert_eq!(
        result.feedback,
        "New issue added: create person class; Deadline: 2022-12-10; Priority: LOW; Project: 1"
    );
    let issue = model.issue_by_id(IssueId::new(1)).unwrap();
    assert_eq!(issue.priority(), Priority::Low);
    assert_eq!(
        model.project_by_id(ProjectId::new(1)).unwrap().issues(),
        &[issue.clone()]
    );
    assert_eq!(ui.active(), Some(ListPanel::Issues));
}

#[test]
fn add_issue_for_missing_project_fails_before_mutation() {
    let mut model = model_with_project();
    let mut ui = RecordingUi::new();
    let before = model.clone();

    let err = Command::AddIssue(draft(3, "orphan", "1"))
        .execute(&mut model, &mut ui)
        .unwrap_err();

    assert_eq!(err, CommandError::ProjectNotFound(ProjectId::new(3)));
    assert_eq!(model, before);
    assert_eq!(ui.active(), None);
}

#[test]
fn add_duplicate_issue_fails() {
    let mut model = model_with_project();
    let mut ui = RecordingUi::new();
    Command::AddIssue(draft(1, "fix login", "2"))
        .execute(&mut model, &mut ui)
        .unwrap();

    let err = Command::AddIssue(draft(1, "fix login", "2"))
        .execute(&mut model, &mut ui)
        .unwrap_err();

    assert_eq!(err.to_string(), "This issue already exists in the address book");
    assert_eq!(model.issues().len(), 1);
}

#[test]
fn draft_resolution_is_deferred_until_execution() {
    let mut model = Model::new();
    let pending = draft(1, "fix login", "1");
    assert_eq!(
        pending.resolve(&model).unwrap_err(),
        ModelError::NotFound(EntityKind::Project)
    );

    model = model_with_project();
    let issue = pending.resolve(&model).unwrap();
    assert_eq!(issue.project_id(), ProjectId::new(1));
    assert_eq!(issue.id(), IssueId::new(1));
}

#[test]
fn find_issue_by_priority_then_delete() {
    let mut model = model_with_project();
    let mut ui = RecordingUi::new();
    Command::AddIssue(draft(1, "fix login", "2"))
        .execute(&mut model, &mut ui)
        .unwrap();
    Command::AddIssue(draft(1, "update docs", "0"))
        .execute(&mut model, &mut ui)
        .unwrap();

    let found = Command::FindIssue(IssueFilter::PriorityIs(Priority::High))
        .execute(&mut model, &mut ui)
        .unwrap();
    assert_eq!(found.feedback, "1 issues listed!");

    let deleted = Command::DeleteIssue {
        issue_id: IssueId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap();
    assert!(deleted.feedback.starts_with("Deleted issue: fix login"));
    assert_eq!(model.issues().len(), 1);
    assert_eq!(model.project_by_id(ProjectId::new(1)).unwrap().issues().len(), 1);
    assert_eq!(model.issue_filter(), &IssueFilter::All);

    let err = Command::DeleteIssue {
        issue_id: IssueId::new(1),
    }
    .execute(&mut model, &mut ui)
    .unwrap_err();
    assert_eq!(err, CommandError::IssueNotFound(IssueId::new(1)));
}

#[test]
fn add_issue_after_largest_id_reports_exhaustion() {
    let mut model = model_with_project();
    let mut ui = RecordingUi::new();
    let highest = Issue::new(
        IssueId::new(u32::MAX),
        ProjectId::new(1),
        Description::new("fix login").unwrap(),
        Deadline::new("2022-12-10").unwrap(),
        Priority::High,
    );
    model.add_issue(highest).unwrap();
    let before = model.clone();

    let err = Command::AddIssue(draft(1, "update docs", "0"))
        .execute(&mut model, &mut ui)
        .unwrap_err();

    assert_eq!(err, CommandError::IdsExhausted(EntityKind::Issue));
    assert_eq!(err.to_string(), "No more issue ids are available");
    assert_eq!(model, before);
}
