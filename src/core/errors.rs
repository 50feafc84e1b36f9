use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum SolsplitError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("Bill needs at least one participant")]
    EmptyParticipants,
    #[error("User {0} not found. Please connect wallet first")]
    UserNotFound(String),
    #[error("Bill {0} not found")]
    BillNotFound(String),
    #[error("Subscription {0} not found")]
    SubscriptionNotFound(String),
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
