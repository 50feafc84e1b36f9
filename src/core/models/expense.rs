use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::TAX_DEDUCTIBLE_CATEGORIES;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub wallet_address: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    #[schema(value_type = String, example = "2025-06-01")]
    pub date: NaiveDate,
    pub transaction_hash: Option<String>,
    #[schema(value_type = String, example = "2025-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn is_tax_deductible(&self) -> bool {
        TAX_DEDUCTIBLE_CATEGORIES.contains(&self.category.as_str())
    }
}

/// Caller-supplied fields; the store assigns id and created_at.
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub wallet_address: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub transaction_hash: Option<String>,
}

/// Partial update; `None` fields keep their stored values.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, example = "2025-06-01")]
    pub date: Option<NaiveDate>,
    pub transaction_hash: Option<String>,
}

/// Linear-scan filter over a wallet's expenses. All bounds inclusive.
#[derive(Clone, Debug, Default)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
