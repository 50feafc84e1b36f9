use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::constants::{DEFAULT_RPC_URL, GENESIS_TOKEN_MINT};

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub fee_percent: f64,
    pub discount_percent: f64,
    pub subscription_price: f64,
    pub helius_api_key: Option<String>,
    pub rpc_url: String,
    pub treasury_wallet: String,
    pub genesis_mint: String,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("fee_percent", &self.fee_percent)
            .field("discount_percent", &self.discount_percent)
            .field("subscription_price", &self.subscription_price)
            .field("helius_api_key", &self.helius_api_key.as_ref().map(|_| "<redacted>"))
            .field("rpc_url", &self.rpc_url)
            .field("treasury_wallet", &self.treasury_wallet)
            .field("genesis_mint", &self.genesis_mint)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            fee_percent: env::var("TRANSACTION_FEE_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1.0),
            discount_percent: env::var("GENESIS_DISCOUNT_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50.0),
            subscription_price: env::var("MONTHLY_SUBSCRIPTION_PRICE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(9.99),
            helius_api_key: env::var("HELIUS_API_KEY").ok().filter(|k| !k.is_empty()),
            rpc_url: env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string()),
            treasury_wallet: env::var("TREASURY_WALLET").unwrap_or_default(),
            genesis_mint: env::var("GENESIS_TOKEN_MINT").unwrap_or_else(|_| GENESIS_TOKEN_MINT.to_string()),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
