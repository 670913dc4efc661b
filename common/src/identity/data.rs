// Identity - what the chain knows about one investor wallet
//
// Lifecycle:
// - NoIdentity: wallet only, no on-chain identity contract
// - Created: a KYC provider deployed an identity contract for the wallet
// - Registered: the Identity Registry bound wallet, identity and country
// - Claims are then added and revoked by authorized parties

use crate::{
    address::WalletAddress,
    identity::{Claim, CountryCode, TopicId},
    time::TimestampSeconds,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Investor wallet, also the identity owner
    pub wallet: WalletAddress,

    /// Identity contract address, None until created
    #[serde(default)]
    pub onchain_id: Option<WalletAddress>,

    #[serde(default)]
    pub country: Option<CountryCode>,

    /// Bound into the Identity Registry
    #[serde(default)]
    pub registered: bool,

    /// In the order the contract returned them
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl Identity {
    /// Wallet without any on-chain identity
    pub fn new(wallet: WalletAddress) -> Self {
        Self {
            wallet,
            onchain_id: None,
            country: None,
            registered: false,
            claims: Vec::new(),
        }
    }

    #[inline]
    pub fn has_onchain_id(&self) -> bool {
        self.onchain_id.is_some()
    }

    /// Whether `wallet` owns this identity
    #[inline]
    pub fn is_owned_by(&self, wallet: &WalletAddress) -> bool {
        &self.wallet == wallet
    }

    pub fn claims_for_topic(&self, topic: TopicId) -> impl Iterator<Item = &Claim> {
        self.claims.iter().filter(move |c| c.topic == topic)
    }

    /// Any active claim for the topic satisfies it
    pub fn has_active_claim(&self, topic: TopicId, now: TimestampSeconds) -> bool {
        self.claims_for_topic(topic).any(|c| c.is_active(now))
    }

    pub fn find_claim(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }

    pub fn find_claim_mut(&mut self, id: &str) -> Option<&mut Claim> {
        self.claims.iter_mut().find(|c| c.id == id)
    }

    /// Active claims expiring within `window` seconds
    pub fn expiring_claims(&self, now: TimestampSeconds, window: u64) -> Vec<&Claim> {
        self.claims
            .iter()
            .filter(|c| c.is_expiring_soon(now, window))
            .collect()
    }
}
