pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::SolsplitError;
pub use crate::core::services::SolsplitService;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;
pub use crate::infrastructure::token_gate::rpc::RpcTokenGate;

#[cfg(test)]
mod tests; // Include integration tests
