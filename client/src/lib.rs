pub mod chain_api;
pub mod claims;
pub mod config;
pub mod error;
pub mod issuance;
pub mod role_registry;
pub mod session;

mod query;

pub use trex_common;
