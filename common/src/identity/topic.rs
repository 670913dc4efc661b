// Claim topics
// A topic is a positive integer naming a claim category. The first five
// are conventional, anything above is a custom topic defined by the issuer
// community. Zero is never a topic.

use crate::identity::{IdentityError, IdentityResult};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive claim topic identifier
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct TopicId(u32);

impl TopicId {
    pub const KYC: TopicId = TopicId(1);
    pub const AML: TopicId = TopicId(2);
    pub const ACCREDITED_INVESTOR: TopicId = TopicId(3);
    pub const RESIDENCY: TopicId = TopicId(4);
    pub const AGE_VERIFICATION: TopicId = TopicId(5);

    pub fn new(value: u32) -> IdentityResult<Self> {
        if value == 0 {
            return Err(IdentityError::InvalidTopic(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Whether this is one of the conventional topics (1-5)
    #[inline]
    pub fn is_standard(&self) -> bool {
        self.0 <= crate::config::MAX_STANDARD_TOPIC
    }

    /// Display name, custom topics get a generic label
    pub fn name(&self) -> String {
        match get_topic_name(*self) {
            Some(name) => name.to_string(),
            None => format!("Custom Topic {}", self.0),
        }
    }
}

impl TryFrom<u32> for TopicId {
    type Error = IdentityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TopicId> for u32 {
    fn from(topic: TopicId) -> Self {
        topic.0
    }
}

// "topic 2 (AML)"
impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "topic {} ({})", self.0, self.name())
    }
}

/// Get human-readable name for a conventional topic
pub fn get_topic_name(topic: TopicId) -> Option<&'static str> {
    match topic.0 {
        1 => Some("KYC"),
        2 => Some("AML"),
        3 => Some("Accredited Investor"),
        4 => Some("Residency"),
        5 => Some("Age Verification"),
        _ => None,
    }
}

/// Platform-wide list of topics every identity must satisfy.
/// Keeps the registry's order so evaluation reasons are reproducible.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RequiredTopics(IndexSet<TopicId>);

impl RequiredTopics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, topic: TopicId) -> bool {
        self.0.contains(&topic)
    }

    /// Returns false if the topic was already required
    pub fn insert(&mut self, topic: TopicId) -> bool {
        self.0.insert(topic)
    }

    /// Returns false if the topic was not required
    pub fn remove(&mut self, topic: TopicId) -> bool {
        self.0.shift_remove(&topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = TopicId> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<TopicId> for RequiredTopics {
    fn from_iter<I: IntoIterator<Item = TopicId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
