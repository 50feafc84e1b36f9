use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A wallet-keyed account. Genesis ownership is re-checked on every connect,
/// so `has_genesis_token` reflects the last connection, not live chain state.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub wallet_address: String,
    pub has_genesis_token: bool,
    pub subscription_active: bool,
    #[schema(value_type = Option<String>, example = "2025-07-01T12:34:56Z")]
    pub subscription_expiry: Option<DateTime<Utc>>,
    pub last_payment_signature: Option<String>,
    #[schema(value_type = String, example = "2025-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}
