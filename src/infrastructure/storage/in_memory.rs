use crate::core::errors::SolsplitError;
use crate::core::models::{
    bill::{Bill, BillStatus, NewBill},
    expense::{Expense, ExpenseFilter, NewExpense},
    subscription::{NewSubscription, Subscription, SubscriptionStatus},
    user::User,
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Process-lifetime store. Counters are 1-based so the first records are
/// `bill_1`, `sub_1` and `exp_1`.
#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<String, User>>>,
    bills: Arc<RwLock<HashMap<String, Bill>>>,
    subscriptions: Arc<RwLock<HashMap<String, Subscription>>>,
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
    bill_counter: Arc<AtomicU64>,
    subscription_counter: Arc<AtomicU64>,
    expense_counter: Arc<AtomicU64>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
            bills: Arc::new(RwLock::new(HashMap::new())),
            subscriptions: Arc::new(RwLock::new(HashMap::new())),
            expenses: Arc::new(RwLock::new(HashMap::new())),
            bill_counter: Arc::new(AtomicU64::new(0)),
            subscription_counter: Arc::new(AtomicU64::new(0)),
            expense_counter: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<User, SolsplitError> {
        let mut users = self.users.write().await;
        users.insert(user.wallet_address.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, wallet_address: &str) -> Result<Option<User>, SolsplitError> {
        let users = self.users.read().await;
        Ok(users.get(wallet_address).cloned())
    }

    async fn create_bill(&self, bill: NewBill) -> Result<Bill, SolsplitError> {
        let id = format!("bill_{}", self.bill_counter.fetch_add(1, Ordering::SeqCst) + 1);
        let bill = Bill {
            id: id.clone(),
            created_by: bill.created_by,
            title: bill.title,
            total_amount: bill.total_amount,
            participants: bill.participants,
            fee_breakdown: bill.fee_breakdown,
            status: BillStatus::Pending,
            share_link: bill.share_link,
            created_at: Utc::now(),
            paid_at: None,
            transaction_signature: None,
        };
        let mut bills = self.bills.write().await;
        bills.insert(id, bill.clone());
        Ok(bill)
    }

    async fn get_bill(&self, bill_id: &str) -> Result<Option<Bill>, SolsplitError> {
        let bills = self.bills.read().await;
        Ok(bills.get(bill_id).cloned())
    }

    async fn save_bill(&self, bill: Bill) -> Result<Bill, SolsplitError> {
        let mut bills = self.bills.write().await;
        bills.insert(bill.id.clone(), bill.clone());
        Ok(bill)
    }

    async fn get_wallet_bills(&self, wallet_address: &str) -> Result<Vec<Bill>, SolsplitError> {
        let bills = self.bills.read().await;
        let mut wallet_bills: Vec<Bill> = bills
            .values()
            .filter(|b| b.created_by == wallet_address || b.participants.iter().any(|p| p.address == wallet_address))
            .cloned()
            .collect();
        wallet_bills.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(wallet_bills)
    }

    async fn create_subscription(&self, subscription: NewSubscription) -> Result<Subscription, SolsplitError> {
        let id = format!("sub_{}", self.subscription_counter.fetch_add(1, Ordering::SeqCst) + 1);
        let subscription = Subscription {
            id: id.clone(),
            wallet_address: subscription.wallet_address,
            name: subscription.name,
            amount: subscription.amount,
            billing_cycle: subscription.billing_cycle,
            category: subscription.category,
            next_billing_date: subscription.next_billing_date,
            status: SubscriptionStatus::Active,
            created_at: Utc::now(),
            cancelled_at: None,
        };
        let mut subscriptions = self.subscriptions.write().await;
        subscriptions.insert(id, subscription.clone());
        Ok(subscription)
    }

    async fn get_subscription(&self, subscription_id: &str) -> Result<Option<Subscription>, SolsplitError> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions.get(subscription_id).cloned())
    }

    async fn save_subscription(&self, subscription: Subscription) -> Result<Subscription, SolsplitError> {
        let mut subscriptions = self.subscriptions.write().await;
        subscriptions.insert(subscription.id.clone(), subscription.clone());
        Ok(subscription)
    }

    async fn get_wallet_subscriptions(&self, wallet_address: &str) -> Result<Vec<Subscription>, SolsplitError> {
        let subscriptions = self.subscriptions.read().await;
        let mut wallet_subscriptions: Vec<Subscription> = subscriptions
            .values()
            .filter(|s| s.wallet_address == wallet_address)
            .cloned()
            .collect();
        wallet_subscriptions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(wallet_subscriptions)
    }

    async fn create_expense(&self, expense: NewExpense) -> Result<Expense, SolsplitError> {
        let id = format!("exp_{}", self.expense_counter.fetch_add(1, Ordering::SeqCst) + 1);
        let expense = Expense {
            id: id.clone(),
            wallet_address: expense.wallet_address,
            amount: expense.amount,
            category: expense.category,
            description: expense.description,
            date: expense.date,
            transaction_hash: expense.transaction_hash,
            created_at: Utc::now(),
        };
        let mut expenses = self.expenses.write().await;
        expenses.insert(id, expense.clone());
        Ok(expense)
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, SolsplitError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.get(expense_id).cloned())
    }

    async fn save_expense(&self, expense: Expense) -> Result<Expense, SolsplitError> {
        let mut expenses = self.expenses.write().await;
        expenses.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    async fn get_wallet_expenses(
        &self,
        wallet_address: &str,
        filter: &ExpenseFilter,
    ) -> Result<Vec<Expense>, SolsplitError> {
        let expenses = self.expenses.read().await;
        let mut wallet_expenses: Vec<Expense> = expenses
            .values()
            .filter(|e| e.wallet_address == wallet_address)
            .filter(|e| filter.category.as_deref().map_or(true, |c| e.category == c))
            .filter(|e| filter.start_date.map_or(true, |d| e.date >= d))
            .filter(|e| filter.end_date.map_or(true, |d| e.date <= d))
            .cloned()
            .collect();
        wallet_expenses.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        Ok(wallet_expenses)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool, SolsplitError> {
        let mut expenses = self.expenses.write().await;
        Ok(expenses.remove(expense_id).is_some())
    }
}
