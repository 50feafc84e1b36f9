use crate::core::errors::SolsplitError;
use async_trait::async_trait;

/// Answers whether a wallet currently holds a positive balance of a mint.
/// Every call is a fresh lookup; callers decide how to treat failures.
#[async_trait]
pub trait TokenGate: Send + Sync {
    async fn holds_token(&self, wallet_address: &str, token_mint: &str) -> Result<bool, SolsplitError>;
}

pub mod rpc;
