use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::{RestClient, append_segment, with_query_param};
use crate::domain::{
    AccountAccess, AccountAccessFilter, DeleteAccountAccessResponse, UpdatePermissionsRequest,
    UpdatePermissionsResponse,
};

#[derive(Clone)]
/// Handle for an account's access records.
pub struct AccountAccessCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl AccountAccessCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Fetch accesses, optionally narrowed by resource ids.
    ///
    /// Each non-empty id list in the filter becomes one query parameter
    /// holding a JSON array, e.g. `project_ids=[1,2]`. Empty lists add
    /// nothing.
    pub async fn fetch(
        &self,
        filter: &AccountAccessFilter,
    ) -> Result<Vec<AccountAccess>, MailtrapError> {
        let mut url = self.uri.clone();
        for (key, ids) in [
            ("project_ids", &filter.project_ids),
            ("inbox_ids", &filter.inbox_ids),
            ("domain_ids", &filter.domain_ids),
        ] {
            if !ids.is_empty() {
                let value = serde_json::to_string(ids)
                    .map_err(|err| MailtrapError::Parse(Box::new(err)))?;
                url = with_query_param(&url, key, &value);
            }
        }
        self.rest.get(url).await
    }
}

#[derive(Clone)]
/// Handle for one account access record.
pub struct AccountAccessResource {
    rest: RestClient,
    uri: Url,
}

impl AccountAccessResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Apply a bulk permission change: `PUT …/permissions/bulk`.
    pub async fn update_permissions(
        &self,
        request: &UpdatePermissionsRequest,
    ) -> Result<UpdatePermissionsResponse, MailtrapError> {
        let url = append_segment(&append_segment(&self.uri, "permissions"), "bulk");
        self.rest.put(url, request).await
    }

    /// Remove this access from the account.
    pub async fn delete(&self) -> Result<DeleteAccountAccessResponse, MailtrapError> {
        self.rest.delete(self.uri.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, test_client};
    use crate::client::{MailtrapError, Method};
    use crate::domain::PermissionChange;

    #[tokio::test]
    async fn fetch_without_filter_adds_no_query() {
        let transport = FakeTransport::new(200, "[]");
        let client = test_client(transport.clone());

        client
            .account(42)
            .accesses()
            .fetch(&AccountAccessFilter::default())
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/accounts/42/account_accesses"
        );
    }

    #[tokio::test]
    async fn fetch_encodes_id_lists_as_json_arrays() {
        let transport = FakeTransport::new(200, "[]");
        let client = test_client(transport.clone());

        let filter = AccountAccessFilter {
            project_ids: vec![1, 2],
            inbox_ids: vec![],
            domain_ids: vec![9],
        };
        client.account(42).accesses().fetch(&filter).await.unwrap();

        let url = transport.last_request().unwrap().url;
        assert_eq!(
            url.as_str(),
            "https://example.invalid/api/accounts/42/account_accesses?project_ids=%5B1%2C2%5D&domain_ids=%5B9%5D"
        );
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("project_ids".to_owned(), "[1,2]".to_owned()),
                ("domain_ids".to_owned(), "[9]".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn update_permissions_puts_to_the_bulk_endpoint() {
        let transport = FakeTransport::new(200, r#"{"message": "Permissions have been updated!"}"#);
        let client = test_client(transport.clone());

        let request = UpdatePermissionsRequest::new([
            PermissionChange::grant("5001", "project", "10"),
            PermissionChange::revoke("6001", "inbox"),
        ]);
        let response = client
            .account(42)
            .access(1771)
            .update_permissions(&request)
            .await
            .unwrap();
        assert_eq!(response.message, "Permissions have been updated!");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(
            sent.url.as_str(),
            "https://example.invalid/api/accounts/42/account_accesses/1771/permissions/bulk"
        );
        assert_eq!(
            sent.body.as_deref(),
            Some(
                r#"{"permissions":[{"resource_id":"5001","resource_type":"project","access_level":"10"},{"resource_id":"6001","resource_type":"inbox","_destroy":true}]}"#
            )
        );
    }

    #[tokio::test]
    async fn invalid_permission_request_never_reaches_the_transport() {
        let transport = FakeTransport::new(200, "{}");
        let client = test_client(transport.clone());

        let err = client
            .account(42)
            .access(1771)
            .update_permissions(&UpdatePermissionsRequest::new([]))
            .await
            .unwrap_err();
        assert!(matches!(err, MailtrapError::Validation { .. }));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn delete_targets_the_access_uri() {
        let transport = FakeTransport::new(200, r#"{"id": 1771}"#);
        let client = test_client(transport.clone());

        let response = client.account(42).access(1771).delete().await.unwrap();
        assert_eq!(response.id, 1771);

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/accounts/42/account_accesses/1771"
        );
        assert!(request.body.is_none());
    }
}
