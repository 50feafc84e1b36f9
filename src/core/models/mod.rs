pub mod bill;
pub mod expense;
pub mod subscription;
pub mod user;

pub use bill::{Bill, BillStatus, NewBill, Participant};
pub use expense::{Expense, ExpenseFilter, ExpensePatch, NewExpense};
pub use subscription::{BillingCycle, NewSubscription, Subscription, SubscriptionStatus};
pub use user::User;
