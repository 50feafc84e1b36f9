pub mod errors;
pub mod models;
pub mod payments;
pub mod pricing;
pub mod services;
