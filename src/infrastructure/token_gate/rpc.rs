use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;

use crate::constants::{HELIUS_RPC_URL, TOKEN_PROGRAM_ID};
use crate::core::errors::SolsplitError;
use crate::infrastructure::token_gate::TokenGate;

/// Token lookup via `getTokenAccountsByOwner` against a Solana JSON-RPC node.
///
/// Prefers the Helius indexer when a credential is configured, scanning every
/// token-program account for the mint. Without a credential, or when the
/// indexer call fails, it falls back to the public RPC endpoint with a direct
/// mint filter. Only a failed fallback surfaces as an error.
pub struct RpcTokenGate {
    client: reqwest::Client,
    indexer_url: Option<String>,
    rpc_url: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<RpcResult>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RpcResult {
    value: Vec<TokenAccount>,
}

#[derive(Debug, Deserialize)]
struct TokenAccount {
    account: Account,
}

#[derive(Debug, Deserialize)]
struct Account {
    data: AccountData,
}

#[derive(Debug, Deserialize)]
struct AccountData {
    parsed: ParsedData,
}

#[derive(Debug, Deserialize)]
struct ParsedData {
    info: TokenInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenInfo {
    mint: String,
    token_amount: TokenAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAmount {
    ui_amount: Option<f64>,
}

impl TokenInfo {
    fn holds(&self, mint: &str) -> bool {
        self.mint == mint && self.token_amount.ui_amount.unwrap_or(0.0) > 0.0
    }
}

impl RpcTokenGate {
    pub fn new(helius_api_key: Option<String>, rpc_url: String) -> Self {
        RpcTokenGate {
            client: reqwest::Client::new(),
            indexer_url: helius_api_key.map(|key| format!("{}/?api-key={}", HELIUS_RPC_URL, key)),
            rpc_url,
        }
    }

    async fn token_accounts(
        &self,
        url: &str,
        wallet_address: &str,
        filter: serde_json::Value,
    ) -> Result<Vec<TokenAccount>, SolsplitError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": "genesis-check",
            "method": "getTokenAccountsByOwner",
            "params": [wallet_address, filter, { "encoding": "jsonParsed" }],
        });

        let response: RpcResponse = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SolsplitError::Rpc(format!("Token account query failed: {}", e)))?
            .json()
            .await
            .map_err(|e| SolsplitError::Rpc(format!("Malformed token account response: {}", e)))?;

        if let Some(rpc_error) = response.error {
            return Err(SolsplitError::Rpc(format!("RPC returned error: {}", rpc_error)));
        }
        match response.result {
            Some(result) => Ok(result.value),
            None => Err(SolsplitError::Rpc("RPC response missing result".to_string())),
        }
    }

    /// Indexer path: list all token-program accounts and scan for the mint.
    async fn query_indexer(&self, url: &str, wallet_address: &str, mint: &str) -> Result<bool, SolsplitError> {
        let accounts = self
            .token_accounts(url, wallet_address, json!({ "programId": TOKEN_PROGRAM_ID }))
            .await?;
        Ok(accounts.iter().any(|a| a.account.data.parsed.info.holds(mint)))
    }

    /// Public RPC path: ask only for accounts of the target mint.
    async fn query_rpc(&self, wallet_address: &str, mint: &str) -> Result<bool, SolsplitError> {
        let accounts = self
            .token_accounts(&self.rpc_url, wallet_address, json!({ "mint": mint }))
            .await?;
        Ok(accounts.iter().any(|a| a.account.data.parsed.info.holds(mint)))
    }
}

#[async_trait]
impl TokenGate for RpcTokenGate {
    async fn holds_token(&self, wallet_address: &str, token_mint: &str) -> Result<bool, SolsplitError> {
        if let Some(indexer_url) = &self.indexer_url {
            match self.query_indexer(indexer_url, wallet_address, token_mint).await {
                Ok(holds) => {
                    debug!("Indexer token check for {}: {}", wallet_address, holds);
                    return Ok(holds);
                }
                Err(e) => warn!("Indexer lookup failed, falling back to RPC: {}", e),
            }
        } else {
            warn!("HELIUS_API_KEY not set, using fallback RPC method");
        }
        let holds = self.query_rpc(wallet_address, token_mint).await?;
        debug!("RPC token check for {}: {}", wallet_address, holds);
        Ok(holds)
    }
}
