use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::codec;
use crate::domain::filter::ContactSubscriptionStatus;
use crate::domain::validation::{Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A contact record.
///
/// Timestamps on this entity arrive as Unix epoch milliseconds, unlike the
/// rest of the API.
pub struct Contact {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub list_ids: Vec<i64>,
    #[serde(default)]
    pub status: Option<ContactSubscriptionStatus>,
    #[serde(default, with = "codec::unix_ms")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "codec::unix_ms")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Envelope the contacts endpoints wrap single records in.
pub(crate) struct ContactEnvelope {
    pub data: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request body for creating a contact. The API wraps the payload in a
/// `contact` object.
pub struct CreateContactRequest {
    contact: ContactPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ContactPayload {
    email: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    fields: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    list_ids: Vec<i64>,
}

impl CreateContactRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            contact: ContactPayload {
                email: email.into(),
                fields: BTreeMap::new(),
                list_ids: Vec::new(),
            },
        }
    }

    /// Attach a custom field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.contact.fields.insert(name.into(), value.into());
        self
    }

    /// Subscribe the contact to the given lists.
    pub fn list_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.contact.list_ids = ids.into_iter().collect();
        self
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }
}

impl Validate for CreateContactRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::valid();
        let email = self.contact.email.trim();
        if email.is_empty() {
            result.push(ValidationError::EmptyValue { field: "email" });
        } else if !email.contains('@') {
            result.push(ValidationError::UnknownValue {
                field: "email",
                value: email.to_owned(),
            });
        }
        result
    }
}
