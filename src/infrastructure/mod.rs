pub mod storage;
pub mod token_gate;
