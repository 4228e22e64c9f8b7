use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::RestClient;
use crate::domain::{Inbox, UpdateInboxRequest};

#[derive(Clone)]
/// Handle for an account's inboxes.
pub struct InboxCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl InboxCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// List all inboxes of the account.
    pub async fn list(&self) -> Result<Vec<Inbox>, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }
}

#[derive(Clone)]
/// Handle for one inbox.
pub struct InboxResource {
    rest: RestClient,
    uri: Url,
}

impl InboxResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Fetch the inbox.
    pub async fn get(&self) -> Result<Inbox, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }

    /// Update inbox settings. Unset fields keep their current values.
    pub async fn update(&self, request: &UpdateInboxRequest) -> Result<Inbox, MailtrapError> {
        self.rest.patch(self.uri.clone(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, test_client};
    use crate::client::{MailtrapError, Method};

    #[tokio::test]
    async fn list_hits_the_inboxes_endpoint() {
        let transport = FakeTransport::new(200, r#"[{"id": 6001, "name": "My Inbox"}]"#);
        let client = test_client(transport.clone());

        let inboxes = client.account(42).inboxes().list().await.unwrap();
        assert_eq!(inboxes[0].name, "My Inbox");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/accounts/42/inboxes"
        );
    }

    #[tokio::test]
    async fn update_patches_only_the_set_fields() {
        let transport = FakeTransport::new(200, r#"{"id": 6001, "name": "Renamed"}"#);
        let client = test_client(transport.clone());

        client
            .account(42)
            .inbox(6001)
            .update(&UpdateInboxRequest::new().name("Renamed"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/accounts/42/inboxes/6001"
        );
        assert_eq!(request.body.as_deref(), Some(r#"{"inbox":{"name":"Renamed"}}"#));
    }

    #[tokio::test]
    async fn update_without_changes_fails_before_any_request() {
        let transport = FakeTransport::new(200, "{}");
        let client = test_client(transport.clone());

        let err = client
            .account(42)
            .inbox(6001)
            .update(&UpdateInboxRequest::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MailtrapError::Validation { .. }));
        assert!(transport.requests().is_empty());
    }
}
