use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Kind of principal an account access belongs to.
pub enum SpecifierType {
    User,
    Invite,
    ApiToken,
    /// Sentinel for types this client does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Principal details behind an account access.
pub struct Specifier {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One resource the principal can reach, with its access level.
pub struct ResourceAccess {
    pub resource_id: i64,
    pub resource_type: String,
    pub access_level: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// What the caller may do with this account access record.
pub struct AccountAccessPermissions {
    #[serde(default)]
    pub can_read: bool,
    #[serde(default)]
    pub can_update: bool,
    #[serde(default)]
    pub can_destroy: bool,
    #[serde(default)]
    pub can_leave: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A principal's access to account resources.
pub struct AccountAccess {
    pub id: i64,
    #[serde(default)]
    pub specifier_type: Option<SpecifierType>,
    #[serde(default)]
    pub specifier: Option<Specifier>,
    #[serde(default)]
    pub resources: Vec<ResourceAccess>,
    #[serde(default)]
    pub permissions: AccountAccessPermissions,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Filtering parameters for fetching account accesses.
///
/// Each non-empty id list becomes one query parameter holding a JSON array.
pub struct AccountAccessFilter {
    pub project_ids: Vec<i64>,
    pub inbox_ids: Vec<i64>,
    pub domain_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One permission change inside a bulk update.
///
/// Set `access_level` to grant or change access, or `destroy` to revoke it.
/// The server treats each entry as an upsert keyed by resource type and id.
pub struct PermissionChange {
    pub resource_id: String,
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<String>,
    #[serde(rename = "_destroy", skip_serializing_if = "Option::is_none")]
    pub destroy: Option<bool>,
}

impl PermissionChange {
    /// Grant or change access to a resource.
    pub fn grant(
        resource_id: impl Into<String>,
        resource_type: impl Into<String>,
        access_level: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            resource_type: resource_type.into(),
            access_level: Some(access_level.into()),
            destroy: None,
        }
    }

    /// Revoke access to a resource.
    pub fn revoke(resource_id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            resource_type: resource_type.into(),
            access_level: None,
            destroy: Some(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body for the bulk permissions update.
pub struct UpdatePermissionsRequest {
    permissions: Vec<PermissionChange>,
}

impl UpdatePermissionsRequest {
    /// Build a request from the given changes, collecting them into an
    /// owned vector.
    pub fn new(permissions: impl IntoIterator<Item = PermissionChange>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Changes carried by this request.
    pub fn permissions(&self) -> &[PermissionChange] {
        &self.permissions
    }
}

impl Validate for UpdatePermissionsRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if self.permissions.is_empty() {
            result.push(ValidationError::EmptyCollection {
                field: "permissions",
            });
            return result;
        }
        for change in &self.permissions {
            if change.resource_id.trim().is_empty() {
                result.push(ValidationError::EmptyValue {
                    field: "resource_id",
                });
            }
            if change.resource_type.trim().is_empty() {
                result.push(ValidationError::EmptyValue {
                    field: "resource_type",
                });
            }
            if change.access_level.is_none() && change.destroy != Some(true) {
                result.push(ValidationError::EmptyValue {
                    field: "access_level",
                });
            }
        }
        result
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Acknowledgement returned by the bulk permissions update.
pub struct UpdatePermissionsResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Details of a deleted account access.
pub struct DeleteAccountAccessResponse {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_access_decodes_with_nested_specifier() {
        let json = r#"
        {
          "id": 42,
          "specifier_type": "user",
          "specifier": {"id": 7, "email": "admin@example.test", "name": "Admin"},
          "resources": [
            {"resource_id": 4001, "resource_type": "account", "access_level": 1000}
          ],
          "permissions": {"can_read": true, "can_update": true, "can_destroy": false, "can_leave": false}
        }
        "#;
        let access: AccountAccess = serde_json::from_str(json).unwrap();
        assert_eq!(access.specifier_type, Some(SpecifierType::User));
        assert_eq!(access.resources[0].access_level, 1000);
        assert!(access.permissions.can_read);
        assert!(!access.permissions.can_destroy);
    }

    #[test]
    fn unrecognized_specifier_type_decodes_to_unknown() {
        let json = r#"{"id": 1, "specifier_type": "service_account"}"#;
        let access: AccountAccess = serde_json::from_str(json).unwrap();
        assert_eq!(access.specifier_type, Some(SpecifierType::Unknown));
    }

    #[test]
    fn grant_serializes_without_destroy_marker() {
        let request = UpdatePermissionsRequest::new([PermissionChange::grant(
            "4001", "project", "admin",
        )]);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"permissions":[{"resource_id":"4001","resource_type":"project","access_level":"admin"}]}"#
        );
    }

    #[test]
    fn revoke_serializes_with_destroy_marker_and_no_level() {
        let request = UpdatePermissionsRequest::new([PermissionChange::revoke("4001", "inbox")]);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"permissions":[{"resource_id":"4001","resource_type":"inbox","_destroy":true}]}"#
        );
    }

    #[test]
    fn empty_change_list_fails_validation() {
        let request = UpdatePermissionsRequest::new([]);
        assert_eq!(
            request.validate().errors(),
            &[ValidationError::EmptyCollection {
                field: "permissions"
            }]
        );
    }

    #[test]
    fn change_without_level_or_destroy_fails_validation() {
        let request = UpdatePermissionsRequest::new([PermissionChange {
            resource_id: "4001".to_owned(),
            resource_type: "project".to_owned(),
            access_level: None,
            destroy: None,
        }]);
        assert_eq!(
            request.validate().errors(),
            &[ValidationError::EmptyValue {
                field: "access_level"
            }]
        );
    }

    #[test]
    fn blank_resource_id_fails_validation() {
        let request = UpdatePermissionsRequest::new([PermissionChange::grant(" ", "inbox", "10")]);
        assert_eq!(
            request.validate().errors(),
            &[ValidationError::EmptyValue {
                field: "resource_id"
            }]
        );
    }
}
