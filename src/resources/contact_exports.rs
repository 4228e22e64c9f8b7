use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::RestClient;
use crate::domain::{ContactExport, CreateContactExportRequest};

#[derive(Clone)]
/// Handle for an account's contact exports.
pub struct ContactExportCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl ContactExportCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Start an export of the contacts matching the request's filters.
    ///
    /// The returned job starts in `created` status; poll
    /// [`ContactExportResource::get_details`] until it finishes.
    pub async fn create(
        &self,
        request: &CreateContactExportRequest,
    ) -> Result<ContactExport, MailtrapError> {
        self.rest.post(self.uri.clone(), request).await
    }
}

#[derive(Clone)]
/// Handle for one contact export job.
pub struct ContactExportResource {
    rest: RestClient,
    uri: Url,
}

impl ContactExportResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Current status of the export, including the file URL once finished.
    pub async fn get_details(&self) -> Result<ContactExport, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }
}
