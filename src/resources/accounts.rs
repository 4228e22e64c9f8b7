use url::Url;

use crate::client::MailtrapError;
use crate::client::rest::{RestClient, append_segment};
use crate::domain::{Account, BillingUsage, PermissionedResource};
use crate::resources::account_accesses::{AccountAccessCollectionResource, AccountAccessResource};
use crate::resources::contacts::{ContactCollectionResource, ContactResource};
use crate::resources::email_templates::{
    EmailTemplateCollectionResource, EmailTemplateResource,
};
use crate::resources::inboxes::{InboxCollectionResource, InboxResource};
use crate::resources::projects::{ProjectCollectionResource, ProjectResource};
use crate::resources::sending_domains::{
    SendingDomainCollectionResource, SendingDomainResource,
};
use crate::resources::suppressions::{SuppressionCollectionResource, SuppressionResource};

#[derive(Clone)]
/// Handle for the accounts collection.
pub struct AccountCollectionResource {
    rest: RestClient,
    uri: Url,
}

impl AccountCollectionResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// List all accounts the token can see.
    pub async fn list(&self) -> Result<Vec<Account>, MailtrapError> {
        self.rest.get(self.uri.clone()).await
    }
}

#[derive(Clone)]
/// Handle for one account. Fans out to the account-scoped resources.
///
/// Accessors only compose URIs; no request is made until an operation on the
/// returned handle is awaited.
pub struct AccountResource {
    rest: RestClient,
    uri: Url,
}

impl AccountResource {
    pub(crate) fn new(rest: RestClient, uri: Url) -> Self {
        Self { rest, uri }
    }

    /// URI this handle operates on.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Billing details of this account.
    pub fn billing(&self) -> BillingResource {
        BillingResource {
            rest: self.rest.clone(),
            uri: self.child("billing"),
        }
    }

    /// Permissions of the current token within this account.
    pub fn permissions(&self) -> PermissionsResource {
        PermissionsResource {
            rest: self.rest.clone(),
            uri: self.child("permissions"),
        }
    }

    /// Account accesses (users, invites, API tokens) of this account.
    pub fn accesses(&self) -> AccountAccessCollectionResource {
        AccountAccessCollectionResource::new(self.rest.clone(), self.child("account_accesses"))
    }

    /// One account access by id.
    pub fn access(&self, access_id: i64) -> AccountAccessResource {
        AccountAccessResource::new(
            self.rest.clone(),
            append_segment(&self.child("account_accesses"), &access_id.to_string()),
        )
    }

    /// Sending domains of this account.
    pub fn sending_domains(&self) -> SendingDomainCollectionResource {
        SendingDomainCollectionResource::new(self.rest.clone(), self.child("sending_domains"))
    }

    /// One sending domain by id.
    pub fn sending_domain(&self, domain_id: i64) -> SendingDomainResource {
        SendingDomainResource::new(
            self.rest.clone(),
            append_segment(&self.child("sending_domains"), &domain_id.to_string()),
        )
    }

    /// Email-testing projects of this account.
    pub fn projects(&self) -> ProjectCollectionResource {
        ProjectCollectionResource::new(self.rest.clone(), self.child("projects"))
    }

    /// One project by id.
    pub fn project(&self, project_id: i64) -> ProjectResource {
        ProjectResource::new(
            self.rest.clone(),
            append_segment(&self.child("projects"), &project_id.to_string()),
        )
    }

    /// Testing inboxes of this account.
    pub fn inboxes(&self) -> InboxCollectionResource {
        InboxCollectionResource::new(self.rest.clone(), self.child("inboxes"))
    }

    /// One inbox by id.
    pub fn inbox(&self, inbox_id: i64) -> InboxResource {
        InboxResource::new(
            self.rest.clone(),
            append_segment(&self.child("inboxes"), &inbox_id.to_string()),
        )
    }

    /// Contacts of this account.
    pub fn contacts(&self) -> ContactCollectionResource {
        ContactCollectionResource::new(self.rest.clone(), self.child("contacts"))
    }

    /// One contact by id or email. The value is percent-encoded into the
    /// path.
    pub fn contact(&self, id_or_email: &str) -> ContactResource {
        ContactResource::new(
            self.rest.clone(),
            append_segment(&self.child("contacts"), id_or_email),
        )
    }

    /// Email templates of this account.
    pub fn email_templates(&self) -> EmailTemplateCollectionResource {
        EmailTemplateCollectionResource::new(self.rest.clone(), self.child("email_templates"))
    }

    /// One email template by id.
    pub fn email_template(&self, template_id: i64) -> EmailTemplateResource {
        EmailTemplateResource::new(
            self.rest.clone(),
            append_segment(&self.child("email_templates"), &template_id.to_string()),
        )
    }

    /// Suppressions of this account.
    pub fn suppressions(&self) -> SuppressionCollectionResource {
        SuppressionCollectionResource::new(self.rest.clone(), self.child("suppressions"))
    }

    /// One suppression by id. The id is percent-encoded into the path.
    pub fn suppression(&self, suppression_id: &str) -> SuppressionResource {
        SuppressionResource::new(
            self.rest.clone(),
            append_segment(&self.child("suppressions"), suppression_id),
        )
    }

    fn child(&self, segment: &str) -> Url {
        append_segment(&self.uri, segment)
    }
}

#[derive(Clone)]
/// Handle for an account's billing details.
pub struct BillingResource {
    rest: RestClient,
    uri: Url,
}

impl BillingResource {
    /// Current billing cycle usage: `GET …/billing/usage`.
    pub async fn usage(&self) -> Result<BillingUsage, MailtrapError> {
        self.rest.get(append_segment(&self.uri, "usage")).await
    }
}

#[derive(Clone)]
/// Handle for the current token's permissions within an account.
pub struct PermissionsResource {
    rest: RestClient,
    uri: Url,
}

impl PermissionsResource {
    /// Tree of resources the token can reach: `GET …/permissions/resources`.
    pub async fn resources(&self) -> Result<Vec<PermissionedResource>, MailtrapError> {
        self.rest.get(append_segment(&self.uri, "resources")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Method;
    use crate::client::testing::{FakeTransport, test_client};

    #[tokio::test]
    async fn billing_usage_hits_the_usage_endpoint() {
        let transport = FakeTransport::new(
            200,
            r#"{"billing": {"cycle_start": null, "cycle_end": null}}"#,
        );
        let client = test_client(transport.clone());

        client.account(42).billing().usage().await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/api/accounts/42/billing/usage"
        );
    }

    #[tokio::test]
    async fn permission_resources_hit_the_resources_endpoint() {
        let transport = FakeTransport::new(200, "[]");
        let client = test_client(transport.clone());

        let resources = client.account(42).permissions().resources().await.unwrap();
        assert!(resources.is_empty());

        assert_eq!(
            transport.last_request().unwrap().url.as_str(),
            "https://example.invalid/api/accounts/42/permissions/resources"
        );
    }

    #[test]
    fn accessors_compose_uris_without_io() {
        let transport = FakeTransport::new(200, "{}");
        let client = test_client(transport.clone());
        let account = client.account(7);

        assert_eq!(
            account.accesses().uri().as_str(),
            "https://example.invalid/api/accounts/7/account_accesses"
        );
        assert_eq!(
            account.contacts().uri().as_str(),
            "https://example.invalid/api/accounts/7/contacts"
        );
        assert_eq!(
            account.suppressions().uri().as_str(),
            "https://example.invalid/api/accounts/7/suppressions"
        );
        assert!(transport.requests().is_empty());
    }
}
