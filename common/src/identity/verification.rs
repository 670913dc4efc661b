//! # Verification Module
//!
//! Decides whether an identity satisfies the platform's required claim
//! topics. An identity is verified when:
//! 1. it is bound to an on-chain identity contract, and
//! 2. every required topic has at least one active claim.
//!
//! Claims are meaningless without an identity contract, so an unbound
//! wallet is never verified whatever claims are reported for it.
//!
//! The evaluation reads the clock once. Use [`evaluate_verification_at`]
//! to evaluate against a fixed instant.

use crate::{
    identity::{Identity, RequiredTopics, TopicId},
    time::{get_current_time_in_seconds, TimestampSeconds},
};
use log::trace;
use serde::{Deserialize, Serialize};

/// Outcome for one required topic
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicOutcome {
    /// At least one active claim
    Satisfied,
    /// No claim at all for the topic
    Missing,
    /// Claims exist, the non-revoked ones are all expired
    Expired,
    /// Every claim for the topic was revoked
    Revoked,
}

/// Result of checking a single required topic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TopicCheck {
    pub topic: TopicId,
    pub outcome: TopicOutcome,
}

impl TopicCheck {
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.outcome == TopicOutcome::Satisfied
    }

    /// Diagnostic for an unsatisfied topic
    pub fn describe(&self) -> Option<String> {
        match self.outcome {
            TopicOutcome::Satisfied => None,
            TopicOutcome::Missing => Some(format!("Missing required claim for {}", self.topic)),
            TopicOutcome::Expired => Some(format!("Claim for {} has expired", self.topic)),
            TopicOutcome::Revoked => Some(format!("Claim for {} has been revoked", self.topic)),
        }
    }
}

/// Result of a verification
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    pub verified: bool,
    /// Why the identity is not verified, None when verified
    pub reason: Option<String>,
    /// Per required topic, in required-topics order
    pub topics: Vec<TopicCheck>,
}

impl VerificationResult {
    /// Verification that could not run, no topic was checked
    pub fn unverified<S: Into<String>>(reason: S) -> Self {
        Self {
            verified: false,
            reason: Some(reason.into()),
            topics: Vec::new(),
        }
    }

    /// Required topics without an active claim
    pub fn unsatisfied_topics(&self) -> Vec<TopicId> {
        self.topics
            .iter()
            .filter(|check| !check.is_satisfied())
            .map(|check| check.topic)
            .collect()
    }
}

/// Reason given for a wallet without identity contract
pub const NO_ONCHAIN_ID_REASON: &str = "Identity has no on-chain identity contract";

/// Reason given when the required topics are unknown
pub const REQUIRED_TOPICS_UNAVAILABLE_REASON: &str = "Required claim topics could not be read";

/// Evaluate against the current time
pub fn evaluate_verification(identity: &Identity, required: &RequiredTopics) -> VerificationResult {
    evaluate_verification_at(identity, required, get_current_time_in_seconds())
}

/// Evaluate against a fixed instant
pub fn evaluate_verification_at(
    identity: &Identity,
    required: &RequiredTopics,
    now: TimestampSeconds,
) -> VerificationResult {
    let topics: Vec<TopicCheck> = required
        .iter()
        .map(|topic| TopicCheck {
            topic,
            outcome: check_topic(identity, topic, now),
        })
        .collect();

    let mut reasons = Vec::new();
    if !identity.has_onchain_id() {
        reasons.push(NO_ONCHAIN_ID_REASON.to_string());
    }
    reasons.extend(topics.iter().filter_map(TopicCheck::describe));

    let verified = reasons.is_empty();
    if log::log_enabled!(log::Level::Trace) {
        trace!(
            "verification of {} at {}: verified={}, {} required topics",
            identity.wallet,
            now,
            verified,
            topics.len()
        );
    }

    VerificationResult {
        verified,
        reason: if verified {
            None
        } else {
            Some(reasons.join("; "))
        },
        topics,
    }
}

fn check_topic(identity: &Identity, topic: TopicId, now: TimestampSeconds) -> TopicOutcome {
    let mut seen = false;
    let mut expired = false;
    for claim in identity.claims_for_topic(topic) {
        if claim.is_active(now) {
            return TopicOutcome::Satisfied;
        }
        seen = true;
        if !claim.revoked {
            expired = true;
        }
    }

    match (seen, expired) {
        (false, _) => TopicOutcome::Missing,
        (true, true) => TopicOutcome::Expired,
        (true, false) => TopicOutcome::Revoked,
    }
}
