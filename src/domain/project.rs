use serde::{Deserialize, Serialize};

use crate::domain::inbox::Inbox;
use crate::domain::validation::{Validate, ValidationError, ValidationResult};

const PROJECT_NAME_MIN: usize = 2;
const PROJECT_NAME_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// An email-testing project grouping inboxes.
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub share_links: Option<ShareLinks>,
    #[serde(default)]
    pub inboxes: Vec<Inbox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareLinks {
    #[serde(default)]
    pub admin: Option<String>,
    #[serde(default)]
    pub viewer: Option<String>,
}

fn validate_project_name(name: &str) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let length = name.trim().chars().count();
    if !(PROJECT_NAME_MIN..=PROJECT_NAME_MAX).contains(&length) {
        result.push(ValidationError::LengthOutOfRange {
            field: "name",
            min: PROJECT_NAME_MIN,
            max: PROJECT_NAME_MAX,
            actual: length,
        });
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for creating a project. The API wraps the payload in a
/// `project` object.
pub struct CreateProjectRequest {
    project: ProjectPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for renaming a project.
pub struct UpdateProjectRequest {
    project: ProjectPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProjectPayload {
    name: String,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            project: ProjectPayload { name: name.into() },
        }
    }

    pub fn name(&self) -> &str {
        &self.project.name
    }
}

impl UpdateProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            project: ProjectPayload { name: name.into() },
        }
    }

    pub fn name(&self) -> &str {
        &self.project.name
    }
}

impl Validate for CreateProjectRequest {
    fn validate(&self) -> ValidationResult {
        validate_project_name(&self.project.name)
    }
}

impl Validate for UpdateProjectRequest {
    fn validate(&self) -> ValidationResult {
        validate_project_name(&self.project.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Details of a deleted project.
pub struct DeleteProjectResponse {
    pub id: i64,
}
