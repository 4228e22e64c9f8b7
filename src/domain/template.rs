use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::codec;
use crate::domain::validation::{Validate, ValidationError, ValidationResult};

const TEMPLATE_FIELD_MAX: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A reusable email template.
pub struct EmailTemplate {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub body_text: Option<String>,
    #[serde(default, with = "codec::iso_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "codec::iso_datetime")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Template fields shared by create and update requests. The API wraps the
/// payload in an `email_template` object.
pub struct EmailTemplatePayload {
    pub name: String,
    pub category: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
}

fn validate_template_payload(payload: &EmailTemplatePayload) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for (field, value) in [
        ("name", &payload.name),
        ("category", &payload.category),
        ("subject", &payload.subject),
    ] {
        let length = value.trim().chars().count();
        if length == 0 {
            result.push(ValidationError::EmptyValue { field });
        } else if length > TEMPLATE_FIELD_MAX {
            result.push(ValidationError::LengthOutOfRange {
                field,
                min: 1,
                max: TEMPLATE_FIELD_MAX,
                actual: length,
            });
        }
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for creating an email template.
pub struct CreateEmailTemplateRequest {
    email_template: EmailTemplatePayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for updating an email template.
pub struct UpdateEmailTemplateRequest {
    email_template: EmailTemplatePayload,
}

impl CreateEmailTemplateRequest {
    pub fn new(payload: EmailTemplatePayload) -> Self {
        Self {
            email_template: payload,
        }
    }

    pub fn payload(&self) -> &EmailTemplatePayload {
        &self.email_template
    }
}

impl UpdateEmailTemplateRequest {
    pub fn new(payload: EmailTemplatePayload) -> Self {
        Self {
            email_template: payload,
        }
    }

    pub fn payload(&self) -> &EmailTemplatePayload {
        &self.email_template
    }
}

impl Validate for CreateEmailTemplateRequest {
    fn validate(&self) -> ValidationResult {
        validate_template_payload(&self.email_template)
    }
}

impl Validate for UpdateEmailTemplateRequest {
    fn validate(&self) -> ValidationResult {
        validate_template_payload(&self.email_template)
    }
}
