use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Compliance review state of a sending domain.
pub enum ComplianceStatus {
    Pending,
    Compliant,
    Noncompliant,
    /// Sentinel for statuses this client does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A verified (or in-progress) domain for transactional sending.
pub struct SendingDomain {
    pub id: i64,
    pub domain_name: String,
    #[serde(default)]
    pub demo: bool,
    #[serde(default)]
    pub compliance_status: ComplianceStatus,
    #[serde(default)]
    pub dns_verified: bool,
    #[serde(default)]
    pub dns_records: Vec<DnsRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One DNS record the domain owner must publish.
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub hostname: String,
    pub value: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for registering a sending domain. The API wraps the payload
/// in a `sending_domain` object.
pub struct CreateSendingDomainRequest {
    sending_domain: SendingDomainPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SendingDomainPayload {
    domain_name: String,
}

impl CreateSendingDomainRequest {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            sending_domain: SendingDomainPayload {
                domain_name: domain_name.into(),
            },
        }
    }

    pub fn domain_name(&self) -> &str {
        &self.sending_domain.domain_name
    }
}

impl Validate for CreateSendingDomainRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::valid();
        let name = self.sending_domain.domain_name.trim();
        if name.is_empty() {
            result.push(ValidationError::EmptyValue {
                field: "domain_name",
            });
        } else if name.contains(char::is_whitespace) || !name.contains('.') {
            result.push(ValidationError::UnknownValue {
                field: "domain_name",
                value: name.to_owned(),
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_wraps_payload() {
        let request = CreateSendingDomainRequest::new("goo.gl");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"sending_domain":{"domain_name":"goo.gl"}}"#
        );
    }

    #[test]
    fn domain_name_rules_are_enforced() {
        assert!(!CreateSendingDomainRequest::new("").validate().is_valid());
        assert!(
            !CreateSendingDomainRequest::new("nodots")
                .validate()
                .is_valid()
        );
        assert!(
            !CreateSendingDomainRequest::new("has space.test")
                .validate()
                .is_valid()
        );
        assert!(
            CreateSendingDomainRequest::new("mail.example.test")
                .validate()
                .is_valid()
        );
    }

    #[test]
    fn sending_domain_decodes_with_dns_records() {
        let json = r#"
        {
          "id": 2001,
          "domain_name": "mail.example.test",
          "demo": false,
          "compliance_status": "compliant",
          "dns_verified": true,
          "dns_records": [
            {"type": "TXT", "hostname": "_dmarc.mail.example.test", "value": "v=DMARC1", "status": "pass"}
          ]
        }
        "#;
        let domain: SendingDomain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.compliance_status, ComplianceStatus::Compliant);
        assert_eq!(domain.dns_records[0].record_type, "TXT");
    }

    #[test]
    fn unrecognized_compliance_status_decodes_to_unknown() {
        let json = r#"{"id": 1, "domain_name": "a.test", "compliance_status": "on_hold"}"#;
        let domain: SendingDomain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.compliance_status, ComplianceStatus::Unknown);
    }
}
