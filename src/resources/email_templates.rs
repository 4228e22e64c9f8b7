use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::RestClient;
use crate::domain::{CreateEmailTemplateRequest, EmailTemplate, UpdateEmailTemplateRequest};

#[derive(Clone)]
/// Handle for an account's email templates.
pub struct EmailTemplateCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl EmailTemplateCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// List email templates.
    pub async fn list(&self) -> Result<Vec<EmailTemplate>, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }

    /// Create an email template.
    pub async fn create(
        &self,
        request: &CreateEmailTemplateRequest,
    ) -> Result<EmailTemplate, MailtrapError> {
        self.rest.post(self.uri.clone(), request).await
    }
}

#[derive(Clone)]
/// Handle for one email template.
pub struct EmailTemplateResource {
    rest: RestClient,
    uri: Url,
}

impl EmailTemplateResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Fetch the template.
    pub async fn get(&self) -> Result<EmailTemplate, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }

    /// Update the template.
    pub async fn update(
        &self,
        request: &UpdateEmailTemplateRequest,
    ) -> Result<EmailTemplate, MailtrapError> {
        self.rest.patch(self.uri.clone(), request).await
    }

    /// Delete the template. Success carries no body.
    pub async fn delete(&self) -> Result<(), MailtrapError> {
        self.rest.delete_no_content(self.uri.clone()).await
    }
}
