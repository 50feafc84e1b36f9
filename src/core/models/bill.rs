use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::pricing::FeeBreakdown;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Paid,
}

/// One share of a split: who receives and how much SOL.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub address: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub created_by: String,
    pub title: String,
    pub total_amount: f64,
    pub participants: Vec<Participant>,
    pub fee_breakdown: FeeBreakdown,
    pub status: BillStatus,
    pub share_link: String,
    #[schema(value_type = String, example = "2025-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = Option<String>, example = "2025-06-02T09:00:00Z")]
    pub paid_at: Option<DateTime<Utc>>,
    pub transaction_signature: Option<String>,
}

/// Caller-supplied fields; the store assigns id, status and timestamps.
#[derive(Clone, Debug)]
pub struct NewBill {
    pub created_by: String,
    pub title: String,
    pub total_amount: f64,
    pub participants: Vec<Participant>,
    pub fee_breakdown: FeeBreakdown,
    pub share_link: String,
}
