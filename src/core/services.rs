use crate::constants::SUBSCRIPTION_PERIOD_DAYS;
use crate::core::errors::SolsplitError;
use crate::core::models::{
    bill::{Bill, BillStatus, NewBill, Participant},
    expense::{Expense, ExpenseFilter, ExpensePatch, NewExpense},
    subscription::{BillingCycle, NewSubscription, Subscription, SubscriptionStatus},
    user::User,
};
use crate::core::payments::{self, TransferPlan};
use crate::core::pricing::{Pricing, SubscriptionPricing};
use crate::infrastructure::storage::Storage;
use crate::infrastructure::token_gate::TokenGate;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionAnalytics {
    pub total_active: usize,
    pub total_monthly_spend: f64,
    pub total_yearly_spend: f64,
    pub annualized_spend: f64,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnalytics {
    pub total_expenses: usize,
    pub total_spent: f64,
    pub by_category: BTreeMap<String, f64>,
    pub monthly_breakdown: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummary {
    pub total_expenses: usize,
    pub total_amount: f64,
    pub deductible_expenses: usize,
    pub total_deductible: f64,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxExport {
    pub tax_year: i32,
    pub csv: String,
    pub summary: TaxSummary,
}

const CSV_HEADER: &str = "Date,Category,Description,Amount (SOL),Transaction Hash,Tax Deductible\n";

pub struct SolsplitService<S: Storage, G: TokenGate> {
    storage: S,
    token_gate: G,
    pricing: Pricing,
    treasury_wallet: String,
    genesis_mint: String,
}

impl<S: Storage, G: TokenGate> SolsplitService<S, G> {
    pub fn new(storage: S, token_gate: G, pricing: Pricing, treasury_wallet: String, genesis_mint: String) -> Self {
        SolsplitService {
            storage,
            token_gate,
            pricing,
            treasury_wallet,
            genesis_mint,
        }
    }

    fn validate_required(&self, field: &'static str, value: &str) -> Result<(), SolsplitError> {
        if value.trim().is_empty() {
            return Err(SolsplitError::MissingField(field));
        }
        Ok(())
    }

    fn validate_amount(&self, field: &'static str, amount: f64) -> Result<(), SolsplitError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(SolsplitError::InvalidInput {
                field,
                reason: "amount must be a positive number".to_string(),
            });
        }
        Ok(())
    }

    async fn require_user(&self, wallet_address: &str) -> Result<User, SolsplitError> {
        self.storage
            .get_user(wallet_address)
            .await?
            .ok_or_else(|| SolsplitError::UserNotFound(wallet_address.to_string()))
    }

    /// Genesis ownership with fail-open semantics: a gate failure is logged
    /// and treated as "no discount", never surfaced to the caller.
    pub async fn verify_genesis(&self, wallet_address: &str, token_mint: &str) -> bool {
        match self.token_gate.holds_token(wallet_address, token_mint).await {
            Ok(holds) => holds,
            Err(e) => {
                warn!("Genesis check failed for {}: {}", wallet_address, e);
                false
            }
        }
    }

    // WALLET / AUTH

    pub async fn connect_wallet(
        &self,
        wallet_address: &str,
        genesis_mint: Option<&str>,
    ) -> Result<(User, SubscriptionPricing), SolsplitError> {
        self.validate_required("walletAddress", wallet_address)?;
        info!("Connecting wallet: {}", wallet_address);

        let mint = genesis_mint.unwrap_or(&self.genesis_mint);
        let has_genesis = self.verify_genesis(wallet_address, mint).await;

        let user = match self.storage.get_user(wallet_address).await? {
            Some(existing) => {
                // Genesis holders keep platform access even without a paid plan.
                let updated = User {
                    has_genesis_token: has_genesis,
                    subscription_active: has_genesis || existing.subscription_active,
                    ..existing
                };
                self.storage.save_user(updated).await?
            }
            None => {
                let user = User {
                    wallet_address: wallet_address.to_string(),
                    has_genesis_token: has_genesis,
                    subscription_active: has_genesis,
                    subscription_expiry: None,
                    last_payment_signature: None,
                    created_at: Utc::now(),
                };
                self.storage.save_user(user).await?
            }
        };
        debug!("Wallet {} connected, genesis: {}", wallet_address, has_genesis);

        let quote = self.pricing.subscription_quote(user.has_genesis_token);
        Ok((user, quote))
    }

    pub async fn check_genesis(&self, wallet_address: &str, genesis_mint: &str) -> Result<bool, SolsplitError> {
        self.validate_required("walletAddress", wallet_address)?;
        self.validate_required("genesisMint", genesis_mint)?;
        Ok(self.verify_genesis(wallet_address, genesis_mint).await)
    }

    // BILLS

    pub async fn create_bill(
        &self,
        wallet_address: &str,
        title: String,
        total_amount: f64,
        participants: Vec<Participant>,
    ) -> Result<Bill, SolsplitError> {
        self.validate_required("walletAddress", wallet_address)?;
        self.validate_required("title", &title)?;
        self.validate_amount("totalAmount", total_amount)?;
        if participants.is_empty() {
            return Err(SolsplitError::EmptyParticipants);
        }
        info!("Creating bill '{}' for wallet: {}", title, wallet_address);

        let user = self.require_user(wallet_address).await?;

        // The fee applies to what actually moves, not the headline amount.
        let participant_total: f64 = participants.iter().map(|p| p.amount).sum();
        let fee_breakdown = self.pricing.fee_breakdown(participant_total, user.has_genesis_token);

        let bill = self
            .storage
            .create_bill(NewBill {
                created_by: wallet_address.to_string(),
                title,
                total_amount,
                participants,
                fee_breakdown,
                share_link: Uuid::new_v4().to_string(),
            })
            .await?;
        debug!("Bill created with ID: {}", bill.id);
        Ok(bill)
    }

    pub async fn bill(&self, bill_id: &str) -> Result<Bill, SolsplitError> {
        self.storage
            .get_bill(bill_id)
            .await?
            .ok_or_else(|| SolsplitError::BillNotFound(bill_id.to_string()))
    }

    pub async fn bills_for_wallet(&self, wallet_address: &str) -> Result<Vec<Bill>, SolsplitError> {
        self.storage.get_wallet_bills(wallet_address).await
    }

    pub async fn pay_bill(&self, bill_id: &str, payer_address: &str) -> Result<(TransferPlan, Bill), SolsplitError> {
        self.validate_required("payerAddress", payer_address)?;
        let bill = self.bill(bill_id).await?;
        info!("Building payment plan for bill {} payer {}", bill.id, payer_address);

        let plan = payments::bill_split_plan(
            payer_address,
            &bill.participants,
            bill.fee_breakdown.final_fee,
            &self.treasury_wallet,
        );
        Ok((plan, bill))
    }

    pub async fn confirm_bill(&self, bill_id: &str, signature: &str) -> Result<Bill, SolsplitError> {
        self.validate_required("signature", signature)?;
        let mut bill = self.bill(bill_id).await?;

        bill.status = BillStatus::Paid;
        bill.paid_at = Some(Utc::now());
        bill.transaction_signature = Some(signature.to_string());
        let bill = self.storage.save_bill(bill).await?;
        info!("Bill {} confirmed paid", bill.id);
        Ok(bill)
    }

    // SUBSCRIPTIONS

    pub async fn create_subscription(
        &self,
        wallet_address: &str,
        name: String,
        amount: f64,
        billing_cycle: Option<BillingCycle>,
        category: Option<String>,
        next_billing_date: Option<DateTime<Utc>>,
    ) -> Result<Subscription, SolsplitError> {
        self.validate_required("walletAddress", wallet_address)?;
        self.validate_required("name", &name)?;
        self.validate_amount("amount", amount)?;
        let billing_cycle = billing_cycle.ok_or(SolsplitError::MissingField("billingCycle"))?;
        info!("Creating subscription '{}' for wallet: {}", name, wallet_address);

        self.require_user(wallet_address).await?;

        let subscription = self
            .storage
            .create_subscription(NewSubscription {
                wallet_address: wallet_address.to_string(),
                name,
                amount,
                billing_cycle,
                category: category.unwrap_or_else(|| "Other".to_string()),
                next_billing_date: next_billing_date.unwrap_or_else(Utc::now),
            })
            .await?;
        debug!("Subscription created with ID: {}", subscription.id);
        Ok(subscription)
    }

    /// All tracked subscriptions for a wallet, any status, plus spend
    /// analytics computed over the active ones only.
    pub async fn subscriptions_for_wallet(
        &self,
        wallet_address: &str,
    ) -> Result<(Vec<Subscription>, SubscriptionAnalytics), SolsplitError> {
        let subscriptions = self.storage.get_wallet_subscriptions(wallet_address).await?;

        let active = |s: &&Subscription| s.status == SubscriptionStatus::Active;
        let total_monthly: f64 = subscriptions
            .iter()
            .filter(active)
            .filter(|s| s.billing_cycle == BillingCycle::Monthly)
            .map(|s| s.amount)
            .sum();
        let total_yearly: f64 = subscriptions
            .iter()
            .filter(active)
            .filter(|s| s.billing_cycle == BillingCycle::Yearly)
            .map(|s| s.amount)
            .sum();

        let analytics = SubscriptionAnalytics {
            total_active: subscriptions.iter().filter(active).count(),
            total_monthly_spend: total_monthly,
            total_yearly_spend: total_yearly,
            annualized_spend: total_monthly * 12.0 + total_yearly,
        };
        Ok((subscriptions, analytics))
    }

    pub async fn cancel_subscription(&self, subscription_id: &str) -> Result<Subscription, SolsplitError> {
        let mut subscription = self
            .storage
            .get_subscription(subscription_id)
            .await?
            .ok_or_else(|| SolsplitError::SubscriptionNotFound(subscription_id.to_string()))?;

        // A second cancel is a no-op, not an error.
        if subscription.status != SubscriptionStatus::Cancelled {
            subscription.status = SubscriptionStatus::Cancelled;
            subscription.cancelled_at = Some(Utc::now());
            subscription = self.storage.save_subscription(subscription).await?;
            info!("Subscription {} cancelled", subscription.id);
        }
        Ok(subscription)
    }

    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<Subscription, SolsplitError> {
        let mut subscription = self
            .storage
            .get_subscription(subscription_id)
            .await?
            .ok_or_else(|| SolsplitError::SubscriptionNotFound(subscription_id.to_string()))?;

        subscription.status = SubscriptionStatus::Deleted;
        let subscription = self.storage.save_subscription(subscription).await?;
        info!("Subscription {} deleted", subscription.id);
        Ok(subscription)
    }

    // PLATFORM SUBSCRIPTION

    pub async fn platform_subscribe(
        &self,
        wallet_address: &str,
    ) -> Result<(TransferPlan, SubscriptionPricing), SolsplitError> {
        self.validate_required("walletAddress", wallet_address)?;
        let user = self.require_user(wallet_address).await?;

        let quote = self.pricing.subscription_quote(user.has_genesis_token);
        info!(
            "Platform subscription quote for {}: {} SOL/month",
            wallet_address, quote.monthly_price
        );
        let plan = payments::subscription_plan(wallet_address, quote.monthly_price, &self.treasury_wallet);
        Ok((plan, quote))
    }

    pub async fn confirm_platform_subscription(
        &self,
        wallet_address: &str,
        signature: &str,
    ) -> Result<User, SolsplitError> {
        self.validate_required("walletAddress", wallet_address)?;
        self.validate_required("signature", signature)?;
        let user = self.require_user(wallet_address).await?;

        let expiry = Utc::now() + Duration::days(SUBSCRIPTION_PERIOD_DAYS);
        let user = self
            .storage
            .save_user(User {
                subscription_active: true,
                subscription_expiry: Some(expiry),
                last_payment_signature: Some(signature.to_string()),
                ..user
            })
            .await?;
        info!("Subscription activated for {} until {}", wallet_address, expiry);
        Ok(user)
    }

    // EXPENSES

    pub async fn create_expense(
        &self,
        wallet_address: &str,
        amount: f64,
        category: String,
        description: Option<String>,
        date: Option<NaiveDate>,
        transaction_hash: Option<String>,
    ) -> Result<Expense, SolsplitError> {
        self.validate_required("walletAddress", wallet_address)?;
        self.validate_required("category", &category)?;
        self.validate_amount("amount", amount)?;
        info!("Creating expense for wallet: {}", wallet_address);

        self.require_user(wallet_address).await?;

        let expense = self
            .storage
            .create_expense(NewExpense {
                wallet_address: wallet_address.to_string(),
                amount,
                category,
                description: description.unwrap_or_default(),
                date: date.unwrap_or_else(|| Utc::now().date_naive()),
                transaction_hash,
            })
            .await?;
        debug!("Expense created with ID: {}", expense.id);
        Ok(expense)
    }

    pub async fn expenses_for_wallet(
        &self,
        wallet_address: &str,
        filter: ExpenseFilter,
    ) -> Result<Vec<Expense>, SolsplitError> {
        self.storage.get_wallet_expenses(wallet_address, &filter).await
    }

    pub async fn update_expense(&self, expense_id: &str, patch: ExpensePatch) -> Result<Expense, SolsplitError> {
        let mut expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| SolsplitError::ExpenseNotFound(expense_id.to_string()))?;

        if let Some(amount) = patch.amount {
            self.validate_amount("amount", amount)?;
            expense.amount = amount;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(description) = patch.description {
            expense.description = description;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        if let Some(transaction_hash) = patch.transaction_hash {
            expense.transaction_hash = Some(transaction_hash);
        }

        let expense = self.storage.save_expense(expense).await?;
        debug!("Expense {} updated", expense.id);
        Ok(expense)
    }

    pub async fn delete_expense(&self, expense_id: &str) -> Result<(), SolsplitError> {
        if !self.storage.delete_expense(expense_id).await? {
            return Err(SolsplitError::ExpenseNotFound(expense_id.to_string()));
        }
        info!("Expense {} deleted", expense_id);
        Ok(())
    }

    pub async fn expense_analytics(
        &self,
        wallet_address: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<ExpenseAnalytics, SolsplitError> {
        let filter = ExpenseFilter {
            category: None,
            start_date: start_date.or(NaiveDate::from_ymd_opt(2020, 1, 1)),
            end_date: end_date.or_else(|| Some(Utc::now().date_naive())),
        };
        let expenses = self.storage.get_wallet_expenses(wallet_address, &filter).await?;

        let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
        let mut monthly_breakdown: BTreeMap<String, f64> = BTreeMap::new();
        for expense in &expenses {
            *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
            let month = expense.date.format("%Y-%m").to_string();
            *monthly_breakdown.entry(month).or_insert(0.0) += expense.amount;
        }

        Ok(ExpenseAnalytics {
            total_expenses: expenses.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            by_category,
            monthly_breakdown,
        })
    }

    pub async fn tax_export(&self, wallet_address: &str, year: Option<i32>) -> Result<TaxExport, SolsplitError> {
        let tax_year = year.unwrap_or_else(|| Utc::now().year());
        let start = NaiveDate::from_ymd_opt(tax_year, 1, 1).ok_or(SolsplitError::InvalidInput {
            field: "year",
            reason: format!("{} is not a valid tax year", tax_year),
        })?;
        let end = NaiveDate::from_ymd_opt(tax_year, 12, 31).ok_or(SolsplitError::InvalidInput {
            field: "year",
            reason: format!("{} is not a valid tax year", tax_year),
        })?;
        info!("Exporting {} tax data for wallet: {}", tax_year, wallet_address);

        let filter = ExpenseFilter {
            category: None,
            start_date: Some(start),
            end_date: Some(end),
        };
        let expenses = self.storage.get_wallet_expenses(wallet_address, &filter).await?;

        let mut csv = String::from(CSV_HEADER);
        let rows: Vec<String> = expenses
            .iter()
            .map(|e| {
                format!(
                    "{},{},\"{}\",{},{},{}",
                    e.date,
                    e.category,
                    e.description.replace('"', "\"\""),
                    e.amount,
                    e.transaction_hash.as_deref().unwrap_or("N/A"),
                    if e.is_tax_deductible() { "Yes" } else { "No" },
                )
            })
            .collect();
        csv.push_str(&rows.join("\n"));

        let deductible: Vec<&Expense> = expenses.iter().filter(|e| e.is_tax_deductible()).collect();
        let summary = TaxSummary {
            total_expenses: expenses.len(),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            deductible_expenses: deductible.len(),
            total_deductible: deductible.iter().map(|e| e.amount).sum(),
        };
        Ok(TaxExport { tax_year, csv, summary })
    }
}
