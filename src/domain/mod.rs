//! Domain layer: models, validation, and wire-format codecs — no I/O.

mod access;
mod account;
pub mod codec;
mod contact;
mod contact_export;
mod filter;
mod inbox;
mod project;
mod sending_domain;
mod suppression;
mod template;
mod validation;

pub use access::{
    AccountAccess, AccountAccessFilter, AccountAccessPermissions, DeleteAccountAccessResponse,
    PermissionChange, ResourceAccess, Specifier, SpecifierType, UpdatePermissionsRequest,
    UpdatePermissionsResponse,
};
pub use account::{
    Account, BillingPeriod, BillingPlan, BillingPlanUsage, BillingUsage, PermissionedResource,
    UsageCounter, UsageCounters,
};
pub use contact::{Contact, CreateContactRequest};
pub(crate) use contact::ContactEnvelope;
pub use contact_export::{
    ContactExport, ContactExportStatus, CreateContactExportRequest, MAX_FILTERS_PER_REQUEST,
    MIN_FILTERS_PER_REQUEST,
};
pub use filter::{ContactExportFilter, ContactSubscriptionStatus, FilterOperator};
pub use inbox::{Inbox, UpdateInboxRequest};
pub use project::{
    CreateProjectRequest, DeleteProjectResponse, Project, ShareLinks, UpdateProjectRequest,
};
pub use sending_domain::{
    ComplianceStatus, CreateSendingDomainRequest, DnsRecord, SendingDomain,
};
pub use suppression::{SendingStream, Suppression, SuppressionFilter, SuppressionType};
pub use template::{
    CreateEmailTemplateRequest, EmailTemplate, EmailTemplatePayload, UpdateEmailTemplateRequest,
};
pub use validation::{Validate, ValidationError, ValidationResult};
