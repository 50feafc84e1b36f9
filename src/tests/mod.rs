mod bill_tests;
mod expense_tests;
mod wallet_tests;

use crate::constants::GENESIS_TOKEN_MINT;
use crate::core::errors::SolsplitError;
use crate::core::pricing::Pricing;
use crate::core::services::SolsplitService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::infrastructure::token_gate::TokenGate;
use async_trait::async_trait;

pub const TEST_TREASURY: &str = "Treas1111111111111111111111111111111111111";

/// Gate with a fixed answer, for tests that don't care about RPC.
pub struct StaticTokenGate(pub bool);

#[async_trait]
impl TokenGate for StaticTokenGate {
    async fn holds_token(&self, _wallet_address: &str, _token_mint: &str) -> Result<bool, SolsplitError> {
        Ok(self.0)
    }
}

/// Gate that always fails, for exercising the degraded path.
pub struct FailingTokenGate;

#[async_trait]
impl TokenGate for FailingTokenGate {
    async fn holds_token(&self, _wallet_address: &str, _token_mint: &str) -> Result<bool, SolsplitError> {
        Err(SolsplitError::Rpc("connection refused".to_string()))
    }
}

pub fn create_test_service<G: TokenGate>(token_gate: G) -> SolsplitService<InMemoryStorage, G> {
    let _ = env_logger::try_init();
    let storage = InMemoryStorage::new();
    let pricing = Pricing::new(1.0, 50.0, 9.99);
    SolsplitService::new(
        storage,
        token_gate,
        pricing,
        TEST_TREASURY.to_string(),
        GENESIS_TOKEN_MINT.to_string(),
    )
}
