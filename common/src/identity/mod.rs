// TREX Identity Claims
// This module models the identities bound to investor wallets and the
// topic-based claims issued about them.
//
// Model:
// - An identity is an on-chain contract created for a wallet by a KYC provider
// - The Identity Registry binds wallet, identity and country
// - Trusted issuers attach claims per topic, optionally expiring, revocable
// - A wallet is verified when every required topic has an active claim

mod claim;
mod country;
mod data;
mod error;
mod status;
mod topic;
mod verification;

pub use claim::*;
pub use country::*;
pub use data::*;
pub use error::*;
pub use status::*;
pub use topic::*;
pub use verification::*;
