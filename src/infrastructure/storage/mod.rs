use crate::core::errors::SolsplitError;
use crate::core::models::{
    bill::{Bill, NewBill},
    expense::{Expense, ExpenseFilter, NewExpense},
    subscription::{NewSubscription, Subscription},
    user::User,
};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<User, SolsplitError>;
    async fn get_user(&self, wallet_address: &str) -> Result<Option<User>, SolsplitError>;
    async fn create_bill(&self, bill: NewBill) -> Result<Bill, SolsplitError>;
    async fn get_bill(&self, bill_id: &str) -> Result<Option<Bill>, SolsplitError>;
    async fn save_bill(&self, bill: Bill) -> Result<Bill, SolsplitError>;
    async fn get_wallet_bills(&self, wallet_address: &str) -> Result<Vec<Bill>, SolsplitError>;
    async fn create_subscription(&self, subscription: NewSubscription) -> Result<Subscription, SolsplitError>;
    async fn get_subscription(&self, subscription_id: &str) -> Result<Option<Subscription>, SolsplitError>;
    async fn save_subscription(&self, subscription: Subscription) -> Result<Subscription, SolsplitError>;
    async fn get_wallet_subscriptions(&self, wallet_address: &str) -> Result<Vec<Subscription>, SolsplitError>;
    async fn create_expense(&self, expense: NewExpense) -> Result<Expense, SolsplitError>;
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, SolsplitError>;
    async fn save_expense(&self, expense: Expense) -> Result<Expense, SolsplitError>;
    async fn get_wallet_expenses(
        &self,
        wallet_address: &str,
        filter: &ExpenseFilter,
    ) -> Result<Vec<Expense>, SolsplitError>;
    async fn delete_expense(&self, expense_id: &str) -> Result<bool, SolsplitError>;
}

pub mod in_memory;
