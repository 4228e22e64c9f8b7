//! Resource handles: thin, cloneable wrappers pairing a REST client with the
//! URI they operate on. Accessors compose URIs; operations await one HTTP
//! round trip each.

mod account_accesses;
mod accounts;
mod contact_exports;
mod contacts;
mod email_templates;
mod inboxes;
mod projects;
mod sending_domains;
mod suppressions;

pub use account_accesses::{AccountAccessCollectionResource, AccountAccessResource};
pub use accounts::{
    AccountCollectionResource, AccountResource, BillingResource, PermissionsResource,
};
pub use contact_exports::{ContactExportCollectionResource, ContactExportResource};
pub use contacts::{ContactCollectionResource, ContactResource};
pub use email_templates::{EmailTemplateCollectionResource, EmailTemplateResource};
pub use inboxes::{InboxCollectionResource, InboxResource};
pub use projects::{ProjectCollectionResource, ProjectResource};
pub use sending_domains::{SendingDomainCollectionResource, SendingDomainResource};
pub use suppressions::{SuppressionCollectionResource, SuppressionResource};
