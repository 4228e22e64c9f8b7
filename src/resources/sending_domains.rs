use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::RestClient;
use crate::domain::{CreateSendingDomainRequest, SendingDomain};

#[derive(Clone)]
/// Handle for an account's sending domains.
pub struct SendingDomainCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl SendingDomainCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// List sending domains with their DNS verification state.
    pub async fn list(&self) -> Result<Vec<SendingDomain>, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }

    /// Register a new sending domain.
    pub async fn create(
        &self,
        request: &CreateSendingDomainRequest,
    ) -> Result<SendingDomain, MailtrapError> {
        self.rest.post(self.uri.clone(), request).await
    }
}

#[derive(Clone)]
/// Handle for one sending domain.
pub struct SendingDomainResource {
    rest: RestClient,
    uri: Url,
}

impl SendingDomainResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Fetch the sending domain.
    pub async fn get(&self) -> Result<SendingDomain, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }

    /// Delete the sending domain. Success carries no body.
    pub async fn delete(&self) -> Result<(), MailtrapError> {
        self.rest.delete_no_content(self.uri.clone()).await
    }
}
