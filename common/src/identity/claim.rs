// Claim - a topic assertion attached to an identity
//
// Lifecycle:
// - Added by a trusted issuer for the topic, or by the identity owner
// - Active while not revoked and before its expiry (if any)
// - Revocation is permanent, a fresh claim must be issued instead
//
// Several claims may exist for the same topic (re-issuance after expiry),
// the model never assumes a single claim per topic.

use crate::{
    address::WalletAddress,
    identity::{ClaimStatus, TopicId},
    time::TimestampSeconds,
};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the identity contract, used to target revocation
pub type ClaimId = String;

/// A claim about an identity for one topic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    pub id: ClaimId,

    pub topic: TopicId,

    /// Who asserted it
    pub issuer: WalletAddress,

    /// Opaque verification payload or reference
    pub data: String,

    /// External proof link
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub issued_at: Option<TimestampSeconds>,

    /// Absent means the claim never expires
    #[serde(default)]
    pub expires_at: Option<TimestampSeconds>,

    #[serde(default)]
    pub revoked: bool,
}

impl Claim {
    pub fn new<I: Into<ClaimId>>(id: I, topic: TopicId, issuer: WalletAddress, data: String) -> Self {
        Self {
            id: id.into(),
            topic,
            issuer,
            data,
            uri: None,
            issued_at: None,
            expires_at: None,
            revoked: false,
        }
    }

    pub fn with_expiry(mut self, expires_at: TimestampSeconds) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn with_uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_issued_at(mut self, issued_at: TimestampSeconds) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    /// Expiry is strict: a claim expiring exactly at `now` is expired
    #[inline]
    pub fn is_expired(&self, now: TimestampSeconds) -> bool {
        self.expires_at.map_or(false, |expires_at| expires_at <= now)
    }

    /// Active means: not revoked AND not expired
    #[inline]
    pub fn is_active(&self, now: TimestampSeconds) -> bool {
        !self.revoked && !self.is_expired(now)
    }

    pub fn status(&self, now: TimestampSeconds) -> ClaimStatus {
        if self.revoked {
            ClaimStatus::Revoked
        } else if self.is_expired(now) {
            ClaimStatus::Expired
        } else {
            ClaimStatus::Active
        }
    }

    /// Seconds left before expiry.
    /// None if the claim never expires, 0 if already expired.
    pub fn seconds_until_expiry(&self, now: TimestampSeconds) -> Option<u64> {
        self.expires_at
            .map(|expires_at| expires_at.saturating_sub(now))
    }

    /// Check if an active claim expires within `window` seconds
    pub fn is_expiring_soon(&self, now: TimestampSeconds, window: u64) -> bool {
        if !self.is_active(now) {
            return false;
        }
        match self.seconds_until_expiry(now) {
            Some(left) => left <= window,
            None => false,
        }
    }

    pub fn revoke(&mut self) {
        self.revoked = true;
    }
}
