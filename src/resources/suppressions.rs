use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::{RestClient, with_query_param};
use crate::domain::{Suppression, SuppressionFilter};

#[derive(Clone)]
/// Handle for an account's suppression list.
pub struct SuppressionCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl SuppressionCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Fetch suppressions, optionally narrowed to one email address.
    ///
    /// A blank or unset email adds no query parameter at all.
    pub async fn fetch(
        &self,
        filter: &SuppressionFilter,
    ) -> Result<Vec<Suppression>, MailtrapError> {
        let url = match filter.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => with_query_param(&self.uri, "email", email),
            _ => self.uri.clone(),
        };
        self.rest.get(url).await
    }
}

#[derive(Clone)]
/// Handle for one suppression record.
pub struct SuppressionResource {
    rest: RestClient,
    uri: Url,
}

impl SuppressionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Remove the suppression, returning its last known state.
    pub async fn delete(&self) -> Result<Suppression, MailtrapError> {
        self.rest.delete(self.uri.clone()).await
    }
}
