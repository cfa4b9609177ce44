//! Serde schema structs for persisted clients, issues and projects.
//!
//! Every field is optional on the wire so that absence can be reported as a
//! missing-field error instead of a generic parse failure.

use super::IllegalValueError;
use crate::model::client::Client;
use crate::model::fields::{
    Deadline, Description, Email, FieldError, Name, Phone, Priority, Repository,
};
use crate::model::issue::{Issue, IssueId};
use crate::model::project::{Project, ProjectId};
use serde::{Deserialize, Serialize};

const CLIENT: &str = "Client";
const ISSUE: &str = "Issue";
const PROJECT: &str = "Project";

fn required<'a>(
    value: &'a Option<String>,
    entity: &str,
    field: &str,
) -> Result<&'a str, IllegalValueError> {
    value
        .as_deref()
        .ok_or_else(|| IllegalValueError::missing_field(entity, field))
}

fn constraints(err: FieldError) -> IllegalValueError {
    IllegalValueError::new(err.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonClient {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl JsonClient {
    pub fn to_model_type(&self) -> Result<Client, IllegalValueError> {
        let name = Name::new(required(&self.name, CLIENT, "Name")?).map_err(constraints)?;
        let phone = Phone::new(required(&self.phone, CLIENT, "Phone")?).map_err(constraints)?;
        let email = Email::new(required(&self.email, CLIENT, "Email")?).map_err(constraints)?;
        Ok(Client::new(name, phone, email))
    }
}

impl From<&Client> for JsonClient {
    fn from(source: &Client) -> Self {
        Self {
            name: Some(source.name().to_string()),
            phone: Some(source.phone().to_string()),
            email: Some(source.email().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonIssue {
    pub issue_id: Option<u32>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
}

impl JsonIssue {
    /// Converts into an issue owned by `project_id`.
    pub fn to_model_type(&self, project_id: ProjectId) -> Result<Issue, IllegalValueError> {
        let issue_id = self
            .issue_id
            .map(IssueId::new)
            .ok_or_else(|| IllegalValueError::missing_field(ISSUE, "IssueId"))?;
        let description = Description::new(required(&self.description, ISSUE, "Description")?)
            .map_err(constraints)?;
        let deadline =
            Deadline::new(required(&self.deadline, ISSUE, "Deadline")?).map_err(constraints)?;
        let priority =
            Priority::new(required(&self.priority, ISSUE, "Priority")?).map_err(constraints)?;
        Ok(Issue::new(
            issue_id,
            project_id,
            description,
            deadline,
            priority,
        ))
    }
}

impl From<&Issue> for JsonIssue {
    fn from(source: &Issue) -> Self {
        Self {
            issue_id: Some(source.id().get()),
            description: Some(source.description().to_string()),
            deadline: Some(source.deadline().to_string()),
            priority: Some(source.priority().code().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonProject {
    pub project_id: Option<u32>,
    pub name: Option<String>,
    pub repository: Option<String>,
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<JsonClient>,
    #[serde(default)]
    pub issues: Option<Vec<JsonIssue>>,
}

impl JsonProject {
    /// Converts into a project, including its client and issues.
    ///
    /// # Errors
    /// - Missing required field: `"Project's {Field} field is missing!"`.
    /// - Invalid field: that field's `MESSAGE_CONSTRAINTS`.
    /// - Any nested client/issue failure, unchanged.
    pub fn to_model_type(&self) -> Result<Project, IllegalValueError> {
        let project_id = self
            .project_id
            .map(ProjectId::new)
            .ok_or_else(|| IllegalValueError::missing_field(PROJECT, "ProjectId"))?;
        let name = Name::new(required(&self.name, PROJECT, "Name")?).map_err(constraints)?;
        let repository = Repository::new(required(&self.repository, PROJECT, "Repository")?)
            .map_err(constraints)?;
        let deadline =
            Deadline::new(required(&self.deadline, PROJECT, "Deadline")?).map_err(constraints)?;

        let client = self
            .client
            .as_ref()
            .map(JsonClient::to_model_type)
            .transpose()?;
        let issues = self
            .issues
            .iter()
            .flatten()
            .map(|issue| issue.to_model_type(project_id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Project::with_parts(
            project_id, name, repository, deadline, client, issues,
        ))
    }
}

impl From<&Project> for JsonProject {
    fn from(source: &Project) -> Self {
        Self {
            project_id: Some(source.id().get()),
            name: Some(source.name().to_string()),
            repository: Some(source.repository().to_string()),
            deadline: Some(source.deadline().to_string()),
            client: source.client().map(JsonClient::from),
            issues: Some(source.issues().iter().map(JsonIssue::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonClient, JsonIssue, JsonProject};
    use crate::model::fields::{Deadline, Name};
    use crate::model::project::ProjectId;

    fn valid_project() -> JsonProject {
        JsonProject {
            project_id: Some(1),
            name: Some("Website".to_string()),
            repository: Some("tom/tp".to_string()),
            deadline: Some("2022-03-05".to_string()),
            client: None,
            issues: None,
        }
    }

    #[test]
    fn missing_name_reports_missing_field() {
        let project = JsonProject {
            name: None,
            ..valid_project()
        };
        let err = project.to_model_type().unwrap_err();
        assert_eq!(err.message(), "Project's Name field is missing!");
    }

    #[test]
    fn invalid_deadline_reports_constraints() {
        let project = JsonProject {
            deadline: Some("2022-13-01".to_string()),
            ..valid_project()
        };
        let err = project.to_model_type().unwrap_err();
        assert_eq!(err.message(), Deadline::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn absent_client_and_issues_map_to_empty() {
        let project = valid_project().to_model_type().unwrap();
        assert!(project.client().is_none());
        assert!(project.issues().is_empty());
        assert_eq!(project.name(), &Name::new("Website").unwrap());
    }

    #[test]
    fn nested_client_failure_aborts_project() {
        let project = JsonProject {
            client: Some(JsonClient {
                name: Some("John Doe".to_string()),
                phone: None,
                email: Some("johnd@example.com".to_string()),
            }),
            ..valid_project()
        };
        let err = project.to_model_type().unwrap_err();
        assert_eq!(err.message(), "Client's Phone field is missing!");
    }

    #[test]
    fn nested_issue_inherits_project_id() {
        let issue = JsonIssue {
            issue_id: Some(4),
            description: Some("fix login".to_string()),
            deadline: Some("2022-04-01".to_string()),
            priority: Some("2".to_string()),
        };
        let converted = issue.to_model_type(ProjectId::new(9)).unwrap();
        assert_eq!(converted.project_id(), ProjectId::new(9));
        assert_eq!(converted.id().get(), 4);
    }
}
