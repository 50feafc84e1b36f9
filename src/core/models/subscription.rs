use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// Cancelled subscriptions stay listed for history; deleted ones are
/// soft-removed so analytics never double count them.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Deleted,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub wallet_address: String,
    pub name: String,
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    pub category: String,
    #[schema(value_type = String, example = "2025-07-01T00:00:00Z")]
    pub next_billing_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    #[schema(value_type = String, example = "2025-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = Option<String>, example = "2025-06-15T08:00:00Z")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields; the store assigns id, status and created_at.
#[derive(Clone, Debug)]
pub struct NewSubscription {
    pub wallet_address: String,
    pub name: String,
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    pub category: String,
    pub next_billing_date: DateTime<Utc>,
}
