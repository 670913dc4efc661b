// Claim Issuance Workflow
//
// Stages of an investor identity:
//   NoIdentity -> IdentityCreated -> Registered -> ClaimsPending <-> Verified
//
// ClaimsPending and Verified alternate as claims expire, get revoked and
// are re-issued. Each mutating transition has an authorization rule that is
// checked here, before any chain call is attempted. The contracts enforce
// the same rules again, these checks only fail fast.

mod authorization;
mod error;
mod stage;

pub use authorization::*;
pub use error::*;
pub use stage::*;
