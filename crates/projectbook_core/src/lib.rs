//! Core domain logic for ProjectBook.
//! Clients, projects and issues, the commands that change them, and their
//! JSON persistence.

pub mod command;
pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod ui;

pub use command::{Command, CommandError, CommandResult, ProjectEdit};
pub use config::{Config, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{EntityKind, Model, ModelError, ModelResult};
pub use model::client::Client;
pub use model::fields::{
    Deadline, Description, Email, FieldError, Name, Phone, Priority, Repository,
};
pub use model::filter::{ClientFilter, IssueFilter, ProjectFilter};
pub use model::issue::{Issue, IssueDraft, IssueId};
pub use model::project::{Project, ProjectDraft, ProjectId};
pub use storage::{IllegalValueError, JsonBookStorage, StorageError, StorageResult};
pub use ui::{ListPanel, RecordingUi, Ui};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
