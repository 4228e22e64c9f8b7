use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::{RestClient, append_segment};
use crate::domain::{Contact, ContactEnvelope, CreateContactRequest};
use crate::resources::contact_exports::{
    ContactExportCollectionResource, ContactExportResource,
};

#[derive(Clone)]
/// Handle for an account's contacts.
pub struct ContactCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl ContactCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Create a contact. The response unwraps the `data` envelope.
    pub async fn create(&self, request: &CreateContactRequest) -> Result<Contact, MailtrapError> {
        let envelope: ContactEnvelope = self.rest.post(self.uri.clone(), request).await?;
        Ok(envelope.data)
    }

    /// Contact exports of this account.
    pub fn exports(&self) -> ContactExportCollectionResource {
        ContactExportCollectionResource::new(self.rest.clone(), append_segment(&self.uri, "exports"))
    }

    /// One contact export by id.
    pub fn export(&self, export_id: i64) -> ContactExportResource {
        ContactExportResource::new(
            self.rest.clone(),
            append_segment(
                &append_segment(&self.uri, "exports"),
                &export_id.to_string(),
            ),
        )
    }
}

#[derive(Clone)]
/// Handle for one contact, addressed by id or email.
pub struct ContactResource {
    rest: RestClient,
    uri: Url,
}

impl ContactResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Fetch the contact.
    pub async fn get(&self) -> Result<Contact, MailtrapError> {
        let envelope: ContactEnvelope = self.rest.get(self.uri.clone()).await?;
        Ok(envelope.data)
    }

    /// Delete the contact, returning its last known state.
    pub async fn delete(&self) -> Result<Contact, MailtrapError> {
        let envelope: ContactEnvelope = self.rest.delete(self.uri.clone()).await?;
        Ok(envelope.data)
    }
}
