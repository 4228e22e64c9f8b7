use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::codec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Reason an address landed on the suppression list.
pub enum SuppressionType {
    #[serde(rename = "hard bounce")]
    HardBounce,
    #[serde(rename = "spam complaint")]
    SpamComplaint,
    #[serde(rename = "unsubscription")]
    Unsubscription,
    #[serde(rename = "manual import")]
    ManualImport,
    /// Sentinel for types this client does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Outbound mail flow a suppression applies to.
pub enum SendingStream {
    Any,
    Transactional,
    Bulk,
    /// Sentinel for streams this client does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A record preventing further sends to an email address.
///
/// The `message_*` fields carry diagnostics from the triggering message and
/// are frequently absent.
pub struct Suppression {
    pub id: String,
    #[serde(rename = "type", default)]
    pub suppression_type: SuppressionType,
    #[serde(default, with = "codec::iso_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
    pub email: String,
    #[serde(default)]
    pub sending_stream: SendingStream,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub message_bounce_category: Option<String>,
    #[serde(default)]
    pub message_category: Option<String>,
    #[serde(default)]
    pub message_client_ip: Option<String>,
    #[serde(default, with = "codec::iso_datetime")]
    pub message_created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub message_esp_response: Option<String>,
    #[serde(default)]
    pub message_esp_server_type: Option<String>,
    #[serde(default)]
    pub message_outgoing_ip: Option<String>,
    #[serde(default)]
    pub message_recipient_mx_name: Option<String>,
    #[serde(default)]
    pub message_sender_email: Option<String>,
    #[serde(default)]
    pub message_subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Filtering parameters for fetching suppressions.
pub struct SuppressionFilter {
    /// When set, only suppressions for this email address are returned.
    pub email: Option<String>,
}

impl SuppressionFilter {
    /// Filter by a single email address.
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}
