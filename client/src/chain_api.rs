// Contract layer seen by the client.
// Queries are read-only and may fail independently of each other.
// Executors sign with the connected wallet, the contracts re-check every
// authorization rule on their side.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use trex_common::{
    address::WalletAddress,
    identity::{Claim, ClaimId, CountryCode, TopicId},
    time::TimestampSeconds,
};

/// Owner-style roles of one token contract
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRoles {
    #[serde(default)]
    pub owner: Option<WalletAddress>,
    #[serde(default)]
    pub issuer: Option<WalletAddress>,
    #[serde(default)]
    pub controller: Option<WalletAddress>,
}

/// Identity Registry entry of a wallet
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityRecord {
    #[serde(default)]
    pub onchain_id: Option<WalletAddress>,
    #[serde(default)]
    pub country: Option<CountryCode>,
    #[serde(default)]
    pub registered: bool,
}

/// Claim to be added on an identity contract
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimRequest {
    pub topic: TopicId,
    pub data: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub expires_at: Option<TimestampSeconds>,
}

impl ClaimRequest {
    pub fn new<S: Into<String>>(topic: TopicId, data: S) -> Self {
        Self {
            topic,
            data: data.into(),
            uri: None,
            expires_at: None,
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
}

#[async_trait]
pub trait ChainQuery: Send + Sync {
    async fn get_factory_admin(&self) -> Result<Option<WalletAddress>>;

    async fn get_roles(&self, token: &WalletAddress) -> Result<TokenRoles>;

    async fn get_agents(&self, token: &WalletAddress) -> Result<Vec<WalletAddress>>;

    async fn get_identity_registry_owner(&self) -> Result<Option<WalletAddress>>;

    async fn get_claim_topics_owner(&self) -> Result<Option<WalletAddress>>;

    async fn get_compliance_owner(&self) -> Result<Option<WalletAddress>>;

    /// None when the wallet is not a registered trusted issuer
    async fn get_issuer_topics(&self, wallet: &WalletAddress) -> Result<Option<Vec<TopicId>>>;

    /// None when the wallet has no identity contract at all
    async fn get_user_identity(&self, wallet: &WalletAddress) -> Result<Option<IdentityRecord>>;

    /// Claims held by an identity contract for one topic
    async fn get_claims_by_topic(
        &self,
        onchain_id: &WalletAddress,
        topic: TopicId,
    ) -> Result<Vec<Claim>>;

    /// Any claim of an identity contract by id, whatever its topic
    async fn get_claim(&self, onchain_id: &WalletAddress, claim_id: &str) -> Result<Option<Claim>>;

    async fn get_required_topics(&self) -> Result<Vec<TopicId>>;
}

#[async_trait]
pub trait ChainExecutor: Send + Sync {
    /// Deploys an identity contract for `wallet`, returns its address
    async fn create_identity(&self, wallet: &WalletAddress) -> Result<WalletAddress>;

    async fn register_identity(
        &self,
        wallet: &WalletAddress,
        onchain_id: &WalletAddress,
        country: &CountryCode,
    ) -> Result<()>;

    /// Returns the id the identity contract assigned to the claim
    async fn add_claim(&self, onchain_id: &WalletAddress, claim: &ClaimRequest) -> Result<ClaimId>;

    async fn revoke_claim(&self, onchain_id: &WalletAddress, claim_id: &str) -> Result<()>;

    async fn add_required_topic(&self, topic: TopicId) -> Result<()>;

    async fn remove_required_topic(&self, topic: TopicId) -> Result<()>;
}
