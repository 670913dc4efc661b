// RoleAssignments - who holds which role, as last read from the chain
//
// Owner-style roles are single addresses (single-owner contracts), agents
// and trusted issuers are multi-valued. Any field may be absent when the
// underlying query failed; absent holders match nobody.

use crate::{address::WalletAddress, identity::TopicId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleAssignments {
    /// Token the per-token fields were resolved for.
    /// None means no token context: per-token fields are empty.
    #[serde(default)]
    pub token_contract: Option<WalletAddress>,

    #[serde(default)]
    pub factory_admin: Option<WalletAddress>,

    // ===== Per-token roles =====
    #[serde(default)]
    pub token_owner: Option<WalletAddress>,
    #[serde(default)]
    pub token_issuer: Option<WalletAddress>,
    #[serde(default)]
    pub token_controller: Option<WalletAddress>,
    #[serde(default)]
    pub token_agents: HashSet<WalletAddress>,

    // ===== Registry roles =====
    #[serde(default)]
    pub identity_registry_owner: Option<WalletAddress>,
    #[serde(default)]
    pub claim_topics_owner: Option<WalletAddress>,
    #[serde(default)]
    pub compliance_owner: Option<WalletAddress>,

    /// Topics each trusted issuer may issue claims for.
    /// An empty set is the same as not being a trusted issuer.
    #[serde(default)]
    pub trusted_issuer_topics: HashMap<WalletAddress, BTreeSet<TopicId>>,
}

impl RoleAssignments {
    /// Topics `wallet` is a trusted issuer for, None if none
    pub fn issuer_topics(&self, wallet: &WalletAddress) -> Option<&BTreeSet<TopicId>> {
        self.trusted_issuer_topics
            .get(wallet)
            .filter(|topics| !topics.is_empty())
    }

    pub fn is_trusted_issuer_for(&self, wallet: &WalletAddress, topic: TopicId) -> bool {
        self.issuer_topics(wallet)
            .map_or(false, |topics| topics.contains(&topic))
    }

    pub fn is_token_agent(&self, wallet: &WalletAddress) -> bool {
        self.token_contract.is_some() && self.token_agents.contains(wallet)
    }

    /// Drop every per-token field, used when no token is selected
    pub fn clear_token_roles(&mut self) {
        self.token_contract = None;
        self.token_owner = None;
        self.token_issuer = None;
        self.token_controller = None;
        self.token_agents.clear();
    }
}
