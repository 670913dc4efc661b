// TREX Permission Resolution
// Turns a snapshot of on-chain role assignments into the capability set of
// the connected wallet.
//
// Rules:
// - Resolution is pure: same snapshot and wallet, same result
// - It fails closed: no wallet, no token context or an unresolved role
//   holder never grants anything
// - Snapshots are values, callers re-resolve after any on-chain change

mod action;
mod role;
mod roles;
mod state;

pub use action::*;
pub use role::*;
pub use roles::*;
pub use state::*;
