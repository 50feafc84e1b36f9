use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, NaiveDate, Utc};
use log::error;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::SolsplitError;
use crate::core::models::{
    bill::{Bill, Participant},
    expense::Expense,
    subscription::{BillingCycle, Subscription},
    user::User,
};
use crate::core::payments::TransferPlan;
use crate::core::pricing::SubscriptionPricing;
use crate::core::services::{ExpenseAnalytics, SubscriptionAnalytics, TaxSummary};

// Request structs for JSON payloads. Required string fields default to empty
// so that missing and blank inputs fail the same validation path.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    #[serde(default)]
    pub wallet_address: String,
    pub genesis_mint: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenesisCheckRequest {
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub genesis_mint: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayBillRequest {
    #[serde(default)]
    pub bill_id: String,
    #[serde(default)]
    pub payer_address: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBillRequest {
    #[serde(default)]
    pub bill_id: String,
    #[serde(default)]
    pub signature: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    pub billing_cycle: Option<BillingCycle>,
    pub category: Option<String>,
    #[schema(value_type = Option<String>, example = "2025-07-01T00:00:00Z")]
    pub next_billing_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSubscribeRequest {
    #[serde(default)]
    pub wallet_address: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfirmRequest {
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub signature: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, example = "2025-06-01")]
    pub date: Option<NaiveDate>,
    pub transaction_hash: Option<String>,
}

// Query parameter structs
#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ExpenseListQuery {
    pub category: Option<String>,
    #[param(value_type = Option<String>, example = "2025-01-01")]
    pub start_date: Option<NaiveDate>,
    #[param(value_type = Option<String>, example = "2025-12-31")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    #[param(value_type = Option<String>, example = "2025-01-01")]
    pub start_date: Option<NaiveDate>,
    #[param(value_type = Option<String>, example = "2025-12-31")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaxExportQuery {
    pub year: Option<i32>,
}

// Response envelopes
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    #[schema(value_type = String, example = "2025-06-01T12:34:56Z")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct ConnectResponse {
    pub success: bool,
    pub user: User,
    pub pricing: SubscriptionPricing,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenesisCheckResponse {
    pub success: bool,
    pub has_genesis: bool,
    pub wallet_address: String,
    pub genesis_mint: String,
    #[schema(value_type = String, example = "2025-06-01T12:34:56Z")]
    pub checked_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct BillResponse {
    pub success: bool,
    pub bill: Bill,
}

#[derive(Serialize, ToSchema)]
pub struct BillListResponse {
    pub success: bool,
    pub bills: Vec<Bill>,
}

#[derive(Serialize, ToSchema)]
pub struct PayBillResponse {
    pub success: bool,
    pub payment: TransferPlan,
    pub bill: Bill,
}

#[derive(Serialize, ToSchema)]
pub struct ConfirmBillResponse {
    pub success: bool,
    pub message: String,
    pub signature: String,
}

#[derive(Serialize, ToSchema)]
pub struct SubscriptionResponse {
    pub success: bool,
    pub subscription: Subscription,
}

#[derive(Serialize, ToSchema)]
pub struct SubscriptionListResponse {
    pub success: bool,
    pub subscriptions: Vec<Subscription>,
    pub analytics: SubscriptionAnalytics,
}

#[derive(Serialize, ToSchema)]
pub struct CancelSubscriptionResponse {
    pub success: bool,
    pub message: String,
    pub subscription: Subscription,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct PlatformSubscribeResponse {
    pub success: bool,
    pub payment: TransferPlan,
    pub pricing: SubscriptionPricing,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfirmResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Option<String>, example = "2025-07-01T12:34:56Z")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub signature: String,
}

#[derive(Serialize, ToSchema)]
pub struct ExpenseResponse {
    pub success: bool,
    pub expense: Expense,
}

#[derive(Serialize, ToSchema)]
pub struct ExpenseListResponse {
    pub success: bool,
    pub expenses: Vec<Expense>,
    pub count: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ExpenseAnalyticsResponse {
    pub success: bool,
    pub analytics: ExpenseAnalytics,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxExportResponse {
    pub success: bool,
    pub tax_year: i32,
    pub csv: String,
    pub summary: TaxSummary,
}

#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// Newtype wrapper for SolsplitError to implement IntoResponse
pub struct ApiError(pub SolsplitError);

impl From<SolsplitError> for ApiError {
    fn from(err: SolsplitError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match &self.0 {
            SolsplitError::MissingField(_) | SolsplitError::InvalidInput { .. } | SolsplitError::EmptyParticipants => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            SolsplitError::UserNotFound(_)
            | SolsplitError::BillNotFound(_)
            | SolsplitError::SubscriptionNotFound(_)
            | SolsplitError::ExpenseNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            SolsplitError::Rpc(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),
            SolsplitError::StorageError(_) | SolsplitError::InternalServerError(_) => {
                error!("Internal error: {}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (
            status,
            Json(ErrorResponse {
                success: false,
                error: error_message,
            }),
        )
            .into_response()
    }
}
