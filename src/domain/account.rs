use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::codec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// An account the API token has access to.
pub struct Account {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub access_levels: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Billing usage report for an account.
pub struct BillingUsage {
    pub billing: BillingPeriod,
    #[serde(default)]
    pub testing: Option<BillingPlanUsage>,
    #[serde(default)]
    pub sending: Option<BillingPlanUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Current billing cycle boundaries.
pub struct BillingPeriod {
    #[serde(default, with = "codec::iso_datetime")]
    pub cycle_start: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "codec::iso_datetime")]
    pub cycle_end: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Plan name and consumption for one product line.
pub struct BillingPlanUsage {
    pub plan: BillingPlan,
    #[serde(default)]
    pub usage: UsageCounters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingPlan {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageCounters {
    #[serde(default)]
    pub sent_messages_count: Option<UsageCounter>,
    #[serde(default)]
    pub forwarded_messages_count: Option<UsageCounter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounter {
    pub current: i64,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One node of the permissions resource tree.
///
/// The API reports resources hierarchically: accounts contain projects,
/// projects contain inboxes.
pub struct PermissionedResource {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub access_level: Option<i32>,
    #[serde(default)]
    pub resources: Vec<PermissionedResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_list_payload_decodes() {
        let json = r#"[{"id": 3229, "name": "Demo", "access_levels": [100]}]"#;
        let accounts: Vec<Account> = serde_json::from_str(json).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, 3229);
        assert_eq!(accounts[0].access_levels, vec![100]);
    }

    #[test]
    fn billing_usage_decodes_with_partial_products() {
        let json = r#"
        {
          "billing": {
            "cycle_start": "2025-10-01T00:00:00Z",
            "cycle_end": "2025-11-01T00:00:00Z"
          },
          "testing": {
            "plan": {"name": "Free"},
            "usage": {
              "sent_messages_count": {"current": 42, "limit": 100},
              "forwarded_messages_count": {"current": 0, "limit": 10}
            }
          }
        }
        "#;
        let usage: BillingUsage = serde_json::from_str(json).unwrap();
        assert!(usage.billing.cycle_start.is_some());
        assert_eq!(usage.testing.as_ref().unwrap().plan.name, "Free");
        assert_eq!(
            usage
                .testing
                .unwrap()
                .usage
                .sent_messages_count
                .unwrap()
                .current,
            42
        );
        assert!(usage.sending.is_none());
    }

    #[test]
    fn permissions_tree_decodes_recursively() {
        let json = r#"
        [
          {
            "id": 4001,
            "name": "My Account",
            "type": "account",
            "access_level": 100,
            "resources": [
              {
                "id": 5001,
                "name": "My Project",
                "type": "project",
                "resources": [
                  {"id": 6001, "name": "My Inbox", "type": "inbox", "resources": []}
                ]
              }
            ]
          }
        ]
        "#;
        let tree: Vec<PermissionedResource> = serde_json::from_str(json).unwrap();
        assert_eq!(tree[0].resource_type, "account");
        assert_eq!(tree[0].resources[0].resources[0].id, 6001);
    }
}
