use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::RestClient;
use crate::domain::{
    CreateProjectRequest, DeleteProjectResponse, Project, UpdateProjectRequest,
};

#[derive(Clone)]
/// Handle for an account's projects.
pub struct ProjectCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl ProjectCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// List projects with their inboxes.
    pub async fn list(&self) -> Result<Vec<Project>, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }

    /// Create a project.
    pub async fn create(&self, request: &CreateProjectRequest) -> Result<Project, MailtrapError> {
        self.rest.post(self.uri.clone(), request).await
    }
}

#[derive(Clone)]
/// Handle for one project.
pub struct ProjectResource {
    rest: RestClient,
    uri: Url,
}

impl ProjectResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Fetch the project.
    pub async fn get(&self) -> Result<Project, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }

    /// Rename the project.
    pub async fn update(&self, request: &UpdateProjectRequest) -> Result<Project, MailtrapError> {
        self.rest.patch(self.uri.clone(), request).await
    }

    /// Delete the project.
    pub async fn delete(&self) -> Result<DeleteProjectResponse, MailtrapError> {
        self.rest.delete(self.uri.clone()).await
    }
}
