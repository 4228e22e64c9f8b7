use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A testing inbox.
pub struct Inbox {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub email_username: Option<String>,
    #[serde(default)]
    pub email_domain: Option<String>,
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub sent_messages_count: i64,
    #[serde(default)]
    pub forwarded_messages_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for updating inbox settings. The API wraps the payload in
/// an `inbox` object; unset fields are omitted so the server keeps their
/// current values.
pub struct UpdateInboxRequest {
    inbox: InboxPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct InboxPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_username: Option<String>,
}

impl UpdateInboxRequest {
    pub fn new() -> Self {
        Self {
            inbox: InboxPayload::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inbox.name = Some(name.into());
        self
    }

    pub fn email_username(mut self, username: impl Into<String>) -> Self {
        self.inbox.email_username = Some(username.into());
        self
    }
}

impl Default for UpdateInboxRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for UpdateInboxRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if self.inbox.name.is_none() && self.inbox.email_username.is_none() {
            result.push(ValidationError::EmptyValue { field: "inbox" });
        }
        if self.inbox.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            result.push(ValidationError::EmptyValue { field: "name" });
        }
        if self
            .inbox
            .email_username
            .as_deref()
            .is_some_and(|u| u.trim().is_empty())
        {
            result.push(ValidationError::EmptyValue {
                field: "email_username",
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_decodes_with_counter_defaults() {
        let json = r#"{"id": 6001, "name": "My Inbox", "status": "active"}"#;
        let inbox: Inbox = serde_json::from_str(json).unwrap();
        assert_eq!(inbox.sent_messages_count, 0);
        assert!(!inbox.used);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let request = UpdateInboxRequest::new().name("Renamed");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"inbox":{"name":"Renamed"}}"#
        );
    }

    #[test]
    fn update_request_without_changes_fails_validation() {
        assert!(!UpdateInboxRequest::new().validate().is_valid());
        assert!(
            UpdateInboxRequest::new()
                .email_username("qa")
                .validate()
                .is_valid()
        );
    }

    #[test]
    fn blank_name_fails_validation() {
        assert!(!UpdateInboxRequest::new().name("  ").validate().is_valid());
    }
}
