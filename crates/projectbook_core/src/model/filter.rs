//! View filters for the client, project and issue lists.
//!
//! Keyword filters match case-insensitively on substrings and succeed when
//! any keyword matches. An empty keyword list matches nothing.

use crate::model::client::Client;
use crate::model::fields::Priority;
use crate::model::issue::Issue;
use crate::model::project::{Project, ProjectId};

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords
        .iter()
        .map(|keyword| keyword.trim())
        .filter(|keyword| !keyword.is_empty())
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientFilter {
    #[default]
    All,
    NameContains(Vec<String>),
    PhoneContains(Vec<String>),
    EmailContains(Vec<String>),
}

impl ClientFilter {
    pub fn matches(&self, client: &Client) -> bool {
        match self {
            Self::All => true,
            Self::NameContains(keywords) => contains_any(client.name().as_str(), keywords),
            Self::PhoneContains(keywords) => contains_any(client.phone().as_str(), keywords),
            Self::EmailContains(keywords) => contains_any(client.email().as_str(), keywords),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    NameContains(Vec<String>),
    RepositoryContains(Vec<String>),
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::NameContains(keywords) => contains_any(project.name().as_str(), keywords),
            Self::RepositoryContains(keywords) => {
                contains_any(project.repository().as_str(), keywords)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IssueFilter {
    #[default]
    All,
    DescriptionContains(Vec<String>),
    PriorityIs(Priority),
    InProject(ProjectId),
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        match self {
            Self::All => true,
            Self::DescriptionContains(keywords) => {
                contains_any(issue.description().as_str(), keywords)
            }
            Self::PriorityIs(priority) => issue.priority() == *priority,
            Self::InProject(project_id) => issue.project_id() == *project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{contains_any, ClientFilter};
    use crate::model::client::Client;

    fn keywords(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn contains_any_is_case_insensitive_and_skips_blank_keywords() {
        assert!(contains_any("Alice Pauline", &keywords(&["PAUL"])));
        assert!(!contains_any("Alice Pauline", &keywords(&["", "  "])));
        assert!(!contains_any("Alice Pauline", &[]));
    }

    #[test]
    fn phone_filter_matches_partial_numbers() {
        let client =
            Client::try_from_fields(Some("John Doe"), Some("98765432"), Some("johnd@example.com"))
                .unwrap();
        assert!(ClientFilter::PhoneContains(keywords(&["98765"])).matches(&client));
        assert!(!ClientFilter::PhoneContains(keywords(&["1234"])).matches(&client));
        assert!(ClientFilter::All.matches(&client));
    }
}
