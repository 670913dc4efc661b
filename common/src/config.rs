use crate::identity::TopicId;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ===== Claim topics =====
// Topics are open-ended on chain, these are the conventional ones
// the dashboard ships names for.

pub const TOPIC_KYC: TopicId = TopicId::KYC;
pub const TOPIC_AML: TopicId = TopicId::AML;
pub const TOPIC_ACCREDITED_INVESTOR: TopicId = TopicId::ACCREDITED_INVESTOR;
pub const TOPIC_RESIDENCY: TopicId = TopicId::RESIDENCY;
pub const TOPIC_AGE_VERIFICATION: TopicId = TopicId::AGE_VERIFICATION;

// Highest conventional topic id, also the default upper bound
// of the claim scan when the registry cannot be read
pub const MAX_STANDARD_TOPIC: u32 = 5;

// Topic whose trusted issuers act as KYC providers:
// they may create on-chain identities and see the KYC provider page
pub const DEFAULT_KYC_TOPIC: TopicId = TOPIC_KYC;

// ===== Client defaults =====

// Timeout applied to every individual role or claim query, in milliseconds
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 10_000;

// Claims expiring within this window are reported as expiring soon (30 days)
pub const DEFAULT_EXPIRY_WARNING_SECS: u64 = 30 * 24 * 3600;

// Upper bound accepted for the claim scan range.
// Every scanned topic is one concurrent query per identity load.
pub const MAX_SCANNED_TOPIC: u32 = 64;
