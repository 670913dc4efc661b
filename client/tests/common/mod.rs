// In-memory TREX contracts for client tests
//
// One MockChain plays every contract. Queries can be made to fail or to
// hang by name, and every call is counted so tests can assert that a
// rejected mutation never reached the chain.

#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use anyhow::{bail, Result};
use async_trait::async_trait;
use trex_client::chain_api::{ChainExecutor, ChainQuery, ClaimRequest, IdentityRecord, TokenRoles};
use trex_common::{
    address::WalletAddress,
    identity::{Claim, ClaimId, CountryCode, TopicId},
    time::get_current_time_in_seconds,
};

pub const TOKEN: &str = "zig1token";
pub const OTHER_TOKEN: &str = "zig1othertoken";
pub const FACTORY_ADMIN: &str = "zig1admin";
pub const TOKEN_OWNER: &str = "zig1owner";
pub const TOKEN_AGENT: &str = "zig1agent";
pub const REGISTRY_OWNER: &str = "zig1registry";
pub const TOPICS_OWNER: &str = "zig1topics";
pub const COMPLIANCE_OWNER: &str = "zig1compliance";
pub const KYC_PROVIDER: &str = "zig1kyc";
pub const AML_PROVIDER: &str = "zig1aml";
pub const ACCREDITOR: &str = "zig1accreditor";
pub const INVESTOR: &str = "zig1investor";
pub const STRANGER: &str = "zig1stranger";

pub fn wallet(address: &str) -> WalletAddress {
    WalletAddress::new(address)
}

// ============================================================================
// Chain state
// ============================================================================

#[derive(Default)]
pub struct ChainState {
    pub factory_admin: Option<WalletAddress>,
    pub token_roles: HashMap<WalletAddress, TokenRoles>,
    pub agents: HashMap<WalletAddress, Vec<WalletAddress>>,
    pub identity_registry_owner: Option<WalletAddress>,
    pub claim_topics_owner: Option<WalletAddress>,
    pub compliance_owner: Option<WalletAddress>,
    pub issuer_topics: HashMap<WalletAddress, Vec<TopicId>>,
    pub identities: HashMap<WalletAddress, IdentityRecord>,
    /// Keyed by identity contract
    pub claims: HashMap<WalletAddress, Vec<Claim>>,
    pub required_topics: Vec<TopicId>,
    pub next_claim_id: u64,
}

#[derive(Default)]
pub struct MockChain {
    pub state: Mutex<ChainState>,
    failing: Mutex<HashSet<&'static str>>,
    slow: Mutex<HashSet<&'static str>>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

const QUERIES: [&str; 11] = [
    "get_factory_admin",
    "get_roles",
    "get_agents",
    "get_identity_registry_owner",
    "get_claim_topics_owner",
    "get_compliance_owner",
    "get_issuer_topics",
    "get_user_identity",
    "get_claims_by_topic",
    "get_claim",
    "get_required_topics",
];

const MUTATIONS: [&str; 6] = [
    "create_identity",
    "register_identity",
    "add_claim",
    "revoke_claim",
    "add_required_topic",
    "remove_required_topic",
];

impl MockChain {
    /// Token suite with every role assigned and topics {1, 2} required
    pub fn with_suite() -> Self {
        let chain = Self::default();
        {
            let mut state = chain.state.lock().unwrap();
            state.factory_admin = Some(wallet(FACTORY_ADMIN));
            state.token_roles.insert(
                wallet(TOKEN),
                TokenRoles {
                    owner: Some(wallet(TOKEN_OWNER)),
                    issuer: Some(wallet(TOKEN_OWNER)),
                    controller: Some(wallet(COMPLIANCE_OWNER)),
                },
            );
            state.agents.insert(wallet(TOKEN), vec![wallet(TOKEN_AGENT)]);
            state.identity_registry_owner = Some(wallet(REGISTRY_OWNER));
            state.claim_topics_owner = Some(wallet(TOPICS_OWNER));
            state.compliance_owner = Some(wallet(COMPLIANCE_OWNER));
            state
                .issuer_topics
                .insert(wallet(KYC_PROVIDER), vec![TopicId::KYC]);
            state
                .issuer_topics
                .insert(wallet(AML_PROVIDER), vec![TopicId::AML]);
            state
                .issuer_topics
                .insert(wallet(ACCREDITOR), vec![TopicId::ACCREDITED_INVESTOR]);
            state.required_topics = vec![TopicId::KYC, TopicId::AML];
        }
        chain
    }

    pub fn fail(&self, call: &'static str) {
        self.failing.lock().unwrap().insert(call);
    }

    pub fn hang(&self, call: &'static str) {
        self.slow.lock().unwrap().insert(call);
    }

    pub fn calls(&self, call: &str) -> usize {
        self.calls.lock().unwrap().get(call).copied().unwrap_or(0)
    }

    pub fn query_count(&self) -> usize {
        QUERIES.iter().map(|call| self.calls(call)).sum()
    }

    pub fn mutation_count(&self) -> usize {
        MUTATIONS.iter().map(|call| self.calls(call)).sum()
    }

    /// Identity contract, registered in the registry, without claims
    pub fn register(&self, owner: &str, country: &str) -> WalletAddress {
        let onchain_id = wallet(&format!("{}-identity", owner));
        self.state.lock().unwrap().identities.insert(
            wallet(owner),
            IdentityRecord {
                onchain_id: Some(onchain_id.clone()),
                country: Some(CountryCode::parse(country).unwrap()),
                registered: true,
            },
        );
        onchain_id
    }

    pub fn claims_of(&self, owner: &str) -> Vec<Claim> {
        let state = self.state.lock().unwrap();
        state
            .identities
            .get(&wallet(owner))
            .and_then(|record| record.onchain_id.as_ref())
            .and_then(|onchain_id| state.claims.get(onchain_id))
            .cloned()
            .unwrap_or_default()
    }

    async fn enter(&self, call: &'static str) -> Result<()> {
        *self.calls.lock().unwrap().entry(call).or_default() += 1;
        if self.failing.lock().unwrap().contains(call) {
            bail!("{} reverted", call);
        }
        let slow = self.slow.lock().unwrap().contains(call);
        if slow {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        Ok(())
    }
}

// ============================================================================
// Queries
// ============================================================================

#[async_trait]
impl ChainQuery for MockChain {
    async fn get_factory_admin(&self) -> Result<Option<WalletAddress>> {
        self.enter("get_factory_admin").await?;
        Ok(self.state.lock().unwrap().factory_admin.clone())
    }

    async fn get_roles(&self, token: &WalletAddress) -> Result<TokenRoles> {
        self.enter("get_roles").await?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .token_roles
            .get(token)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_agents(&self, token: &WalletAddress) -> Result<Vec<WalletAddress>> {
        self.enter("get_agents").await?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .agents
            .get(token)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_identity_registry_owner(&self) -> Result<Option<WalletAddress>> {
        self.enter("get_identity_registry_owner").await?;
        Ok(self.state.lock().unwrap().identity_registry_owner.clone())
    }

    async fn get_claim_topics_owner(&self) -> Result<Option<WalletAddress>> {
        self.enter("get_claim_topics_owner").await?;
        Ok(self.state.lock().unwrap().claim_topics_owner.clone())
    }

    async fn get_compliance_owner(&self) -> Result<Option<WalletAddress>> {
        self.enter("get_compliance_owner").await?;
        Ok(self.state.lock().unwrap().compliance_owner.clone())
    }

    async fn get_issuer_topics(&self, wallet: &WalletAddress) -> Result<Option<Vec<TopicId>>> {
        self.enter("get_issuer_topics").await?;
        Ok(self.state.lock().unwrap().issuer_topics.get(wallet).cloned())
    }

    async fn get_user_identity(&self, wallet: &WalletAddress) -> Result<Option<IdentityRecord>> {
        self.enter("get_user_identity").await?;
        Ok(self.state.lock().unwrap().identities.get(wallet).cloned())
    }

    async fn get_claims_by_topic(
        &self,
        onchain_id: &WalletAddress,
        topic: TopicId,
    ) -> Result<Vec<Claim>> {
        self.enter("get_claims_by_topic").await?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .claims
            .get(onchain_id)
            .map(|claims| {
                claims
                    .iter()
                    .filter(|claim| claim.topic == topic)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get_claim(&self, onchain_id: &WalletAddress, claim_id: &str) -> Result<Option<Claim>> {
        self.enter("get_claim").await?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .claims
            .get(onchain_id)
            .and_then(|claims| claims.iter().find(|claim| claim.id == claim_id))
            .cloned())
    }

    async fn get_required_topics(&self) -> Result<Vec<TopicId>> {
        self.enter("get_required_topics").await?;
        Ok(self.state.lock().unwrap().required_topics.clone())
    }
}

// ============================================================================
// Transactions
// ============================================================================

#[async_trait]
impl ChainExecutor for MockChain {
    async fn create_identity(&self, wallet: &WalletAddress) -> Result<WalletAddress> {
        self.enter("create_identity").await?;
        let onchain_id = WalletAddress::new(format!("{}-identity", wallet));
        self.state.lock().unwrap().identities.insert(
            wallet.clone(),
            IdentityRecord {
                onchain_id: Some(onchain_id.clone()),
                country: None,
                registered: false,
            },
        );
        Ok(onchain_id)
    }

    async fn register_identity(
        &self,
        wallet: &WalletAddress,
        onchain_id: &WalletAddress,
        country: &CountryCode,
    ) -> Result<()> {
        self.enter("register_identity").await?;
        self.state.lock().unwrap().identities.insert(
            wallet.clone(),
            IdentityRecord {
                onchain_id: Some(onchain_id.clone()),
                country: Some(country.clone()),
                registered: true,
            },
        );
        Ok(())
    }

    async fn add_claim(&self, onchain_id: &WalletAddress, request: &ClaimRequest) -> Result<ClaimId> {
        self.enter("add_claim").await?;
        let mut state = self.state.lock().unwrap();
        state.next_claim_id += 1;
        let id = state.next_claim_id.to_string();

        let mut claim = Claim::new(
            id.clone(),
            request.topic,
            WalletAddress::new("zig1signer"),
            request.data.clone(),
        )
        .with_issued_at(get_current_time_in_seconds());
        if let Some(expires_at) = request.expires_at {
            claim = claim.with_expiry(expires_at);
        }
        if let Some(uri) = request.uri.as_ref() {
            claim = claim.with_uri(uri.clone());
        }

        state
            .claims
            .entry(onchain_id.clone())
            .or_default()
            .push(claim);
        Ok(id)
    }

    async fn revoke_claim(&self, onchain_id: &WalletAddress, claim_id: &str) -> Result<()> {
        self.enter("revoke_claim").await?;
        let mut state = self.state.lock().unwrap();
        let Some(claim) = state
            .claims
            .get_mut(onchain_id)
            .and_then(|claims| claims.iter_mut().find(|claim| claim.id == claim_id))
        else {
            bail!("claim {} not found", claim_id);
        };
        claim.revoke();
        Ok(())
    }

    async fn add_required_topic(&self, topic: TopicId) -> Result<()> {
        self.enter("add_required_topic").await?;
        self.state.lock().unwrap().required_topics.push(topic);
        Ok(())
    }

    async fn remove_required_topic(&self, topic: TopicId) -> Result<()> {
        self.enter("remove_required_topic").await?;
        self.state
            .lock()
            .unwrap()
            .required_topics
            .retain(|required| *required != topic);
        Ok(())
    }
}
