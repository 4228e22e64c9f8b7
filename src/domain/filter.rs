//! Contact-export filters: a closed set of variants discriminated on the
//! wire by the `name` field.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{ValidationError, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Comparison operator shared by all contact-export filters.
///
/// `equal` is the only operator the API recognizes today; [`Unknown`] keeps
/// decoding forward-compatible when new operators appear server-side.
///
/// [`Unknown`]: FilterOperator::Unknown
pub enum FilterOperator {
    #[default]
    Equal,
    /// Sentinel for operators this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl FilterOperator {
    /// Wire representation of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Subscription status of a contact.
pub enum ContactSubscriptionStatus {
    Subscribed,
    Unsubscribed,
    /// Sentinel for statuses this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl ContactSubscriptionStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subscribed => "subscribed",
            Self::Unsubscribed => "unsubscribed",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
/// A single contact-export filter.
///
/// The discriminator is derived from the variant on encode and is never
/// user-settable. Decoding a payload with an unrecognized `name` fails with
/// a deserialization error rather than being silently dropped.
pub enum ContactExportFilter {
    /// Select contacts belonging to any of the given list ids.
    #[serde(rename = "list_id")]
    ListId {
        #[serde(default)]
        operator: FilterOperator,
        value: Vec<i64>,
    },
    /// Select contacts with the given subscription status.
    #[serde(rename = "subscription_status")]
    SubscriptionStatus {
        #[serde(default)]
        operator: FilterOperator,
        value: ContactSubscriptionStatus,
    },
}

impl ContactExportFilter {
    /// Filter by list ids, with the default `equal` operator.
    ///
    /// The ids are collected into an owned vector, so the filter never
    /// aliases caller storage.
    pub fn list_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self::ListId {
            operator: FilterOperator::Equal,
            value: ids.into_iter().collect(),
        }
    }

    /// Filter by subscription status, with the default `equal` operator.
    pub fn subscription_status(status: ContactSubscriptionStatus) -> Self {
        Self::SubscriptionStatus {
            operator: FilterOperator::Equal,
            value: status,
        }
    }

    /// Wire discriminator for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListId { .. } => "list_id",
            Self::SubscriptionStatus { .. } => "subscription_status",
        }
    }

    /// Operator carried by this filter.
    pub fn operator(&self) -> FilterOperator {
        match self {
            Self::ListId { operator, .. } | Self::SubscriptionStatus { operator, .. } => *operator,
        }
    }

    pub(crate) fn validate_into(&self, result: &mut ValidationResult) {
        if self.operator() == FilterOperator::Unknown {
            result.push(ValidationError::UnknownValue {
                field: "operator",
                value: self.operator().as_str().to_owned(),
            });
        }
        match self {
            Self::ListId { value, .. } => {
                if value.is_empty() {
                    result.push(ValidationError::EmptyCollection { field: "value" });
                }
            }
            Self::SubscriptionStatus { value, .. } => {
                if *value == ContactSubscriptionStatus::Unknown {
                    result.push(ValidationError::UnknownValue {
                        field: "value",
                        value: value.as_str().to_owned(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_id_filter_encodes_with_discriminator() {
        let filter = ContactExportFilter::list_ids([123, 456]);
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(
            json,
            r#"{"name":"list_id","operator":"equal","value":[123,456]}"#
        );
    }

    #[test]
    fn subscription_status_filter_encodes_with_discriminator() {
        let filter =
            ContactExportFilter::subscription_status(ContactSubscriptionStatus::Subscribed);
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(
            json,
            r#"{"name":"subscription_status","operator":"equal","value":"subscribed"}"#
        );
    }

    #[test]
    fn decode_dispatches_on_discriminator() {
        let json = r#"{"name":"list_id","operator":"equal","value":[1,2,3]}"#;
        let filter: ContactExportFilter = serde_json::from_str(json).unwrap();
        assert_eq!(
            filter,
            ContactExportFilter::ListId {
                operator: FilterOperator::Equal,
                value: vec![1, 2, 3],
            }
        );

        let json = r#"{"name":"subscription_status","operator":"equal","value":"unsubscribed"}"#;
        let filter: ContactExportFilter = serde_json::from_str(json).unwrap();
        assert_eq!(
            filter,
            ContactExportFilter::SubscriptionStatus {
                operator: FilterOperator::Equal,
                value: ContactSubscriptionStatus::Unsubscribed,
            }
        );
    }

    #[test]
    fn decode_fails_on_unrecognized_discriminator() {
        let json = r#"{"name":"bogus_filter","operator":"equal","value":[1]}"#;
        let err = serde_json::from_str::<ContactExportFilter>(json).unwrap_err();
        assert!(err.to_string().contains("bogus_filter"));
    }

    #[test]
    fn decode_defaults_missing_operator_to_equal() {
        let json = r#"{"name":"list_id","value":[7]}"#;
        let filter: ContactExportFilter = serde_json::from_str(json).unwrap();
        assert_eq!(filter.operator(), FilterOperator::Equal);
    }

    #[test]
    fn decode_maps_unrecognized_operator_to_unknown_sentinel() {
        let json = r#"{"name":"list_id","operator":"greater_than","value":[7]}"#;
        let filter: ContactExportFilter = serde_json::from_str(json).unwrap();
        assert_eq!(filter.operator(), FilterOperator::Unknown);
    }

    #[test]
    fn encode_decode_round_trips_all_variants() {
        let filters = vec![
            ContactExportFilter::list_ids([789, 101]),
            ContactExportFilter::subscription_status(ContactSubscriptionStatus::Unsubscribed),
        ];
        for filter in filters {
            let json = serde_json::to_string(&filter).unwrap();
            let decoded: ContactExportFilter = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, filter);
        }
    }

    #[test]
    fn empty_list_id_filter_fails_validation() {
        let filter = ContactExportFilter::list_ids([]);
        let mut result = ValidationResult::valid();
        filter.validate_into(&mut result);
        assert_eq!(
            result.errors(),
            &[ValidationError::EmptyCollection { field: "value" }]
        );
    }

    #[test]
    fn unknown_operator_and_status_fail_validation() {
        let filter = ContactExportFilter::SubscriptionStatus {
            operator: FilterOperator::Unknown,
            value: ContactSubscriptionStatus::Unknown,
        };
        let mut result = ValidationResult::valid();
        filter.validate_into(&mut result);
        assert_eq!(result.errors().len(), 2);
    }
}
