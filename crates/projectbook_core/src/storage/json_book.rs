//! Whole-document schema for the persisted project book.

use super::json_adapted::JsonProject;
use super::IllegalValueError;
use crate::model::book::{EntityKind, Model, ModelError};
use serde::{Deserialize, Serialize};

pub const MESSAGE_DUPLICATE_PROJECT: &str = "Projects list contains duplicate project(s).";
pub const MESSAGE_DUPLICATE_CLIENT: &str = "Projects list contains duplicate client(s).";
pub const MESSAGE_DUPLICATE_ISSUE: &str = "Projects list contains duplicate issue(s).";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonProjectBook {
    #[serde(default)]
    pub projects: Vec<JsonProject>,
}

impl JsonProjectBook {
    pub fn from_model(model: &Model) -> Self {
        Self {
            projects: model.projects().iter().map(JsonProject::from).collect(),
        }
    }

    /// Rebuilds a model from every persisted project.
    ///
    /// # Errors
    /// Fails on the first invalid or duplicate record; no partial model is
    /// returned.
    pub fn to_model(&self) -> Result<Model, IllegalValueError> {
        let mut model = Model::new();
        for json_project in &self.projects {
            let project = json_project.to_model_type()?;
            model.add_project(project).map_err(duplicate_message)?;
        }
        Ok(model)
    }
}

fn duplicate_message(err: ModelError) -> IllegalValueError {
    match err {
        ModelError::Duplicate(EntityKind::Project) => {
            IllegalValueError::new(MESSAGE_DUPLICATE_PROJECT)
        }
        ModelError::Duplicate(EntityKind::Client) => IllegalValueError::new(MESSAGE_DUPLICATE_CLIENT),
        ModelError::Duplicate(EntityKind::Issue) => IllegalValueError::new(MESSAGE_DUPLICATE_ISSUE),
        other => IllegalValueError::new(other.to_string()),
    }
}
