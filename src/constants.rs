/// SPL Token program that owns every fungible token account on mainnet.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Default mint for the Seeker Genesis Token used to gate fee discounts.
pub const GENESIS_TOKEN_MINT: &str = "GT2zuHVaZQYZSyQMgJPLzvkmyztfyXg2NJunqFp4p3A4";

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const HELIUS_RPC_URL: &str = "https://mainnet.helius-rpc.com";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Days of platform access granted per confirmed subscription payment.
pub const SUBSCRIPTION_PERIOD_DAYS: i64 = 30;

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Business",
    "Office",
    "Professional Services",
    "Education",
    "Gifts & Donations",
    "Personal Care",
    "Other",
];

/// Categories flagged as deductible in the tax export.
pub const TAX_DEDUCTIBLE_CATEGORIES: &[&str] = &["Business", "Office", "Travel", "Professional Services"];
