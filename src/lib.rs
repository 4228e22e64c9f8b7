//! Typed Rust client for the Mailtrap REST API.
//!
//! The crate is split into a domain layer of strong types and wire-format
//! codecs, a client layer that authenticates and executes REST commands, and
//! resource handles that mirror the API's account-scoped hierarchy. Handles
//! are cheap to clone and compose URIs without touching the network; every
//! operation is a single awaited HTTP round trip.
//!
//! ```rust,no_run
//! use mailtrap::{ApiToken, ContactExportFilter, CreateContactExportRequest, MailtrapClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailtrap::MailtrapError> {
//!     let client = MailtrapClient::new(ApiToken::new("...")?)?;
//!     let request = CreateContactExportRequest::new([ContactExportFilter::list_ids([123])]);
//!     let export = client.account(42).contacts().exports().create(&request).await?;
//!     let details = client.account(42).contacts().export(export.id).get_details().await?;
//!     if details.is_download_ready() {
//!         println!("ready: {}", details.url.unwrap());
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod resources;

pub use client::{ApiToken, MailtrapClient, MailtrapClientBuilder, MailtrapError, Method};
pub use domain::{
    Account, AccountAccess, AccountAccessFilter, AccountAccessPermissions, BillingPeriod,
    BillingPlan, BillingPlanUsage, BillingUsage, ComplianceStatus, Contact, ContactExport,
    ContactExportFilter, ContactExportStatus, ContactSubscriptionStatus, CreateContactExportRequest,
    CreateContactRequest, CreateEmailTemplateRequest, CreateProjectRequest,
    CreateSendingDomainRequest, DeleteAccountAccessResponse, DeleteProjectResponse, DnsRecord,
    EmailTemplate, EmailTemplatePayload, FilterOperator, Inbox, MAX_FILTERS_PER_REQUEST,
    MIN_FILTERS_PER_REQUEST, PermissionChange, PermissionedResource, Project, ResourceAccess,
    SendingDomain, SendingStream, ShareLinks, Specifier, SpecifierType, Suppression,
    SuppressionFilter, SuppressionType, UpdateEmailTemplateRequest, UpdateInboxRequest,
    UpdatePermissionsRequest, UpdatePermissionsResponse, UpdateProjectRequest, UsageCounter,
    UsageCounters, Validate, ValidationError, ValidationResult,
};
