// PermissionsState - capability set of one wallet over one snapshot
//
// Every role flag is an equality (owner-style roles) or membership test
// (agents, trusted issuers) under case-insensitive address comparison.
// Visibility flags are compositions of role flags.

use crate::{
    address::WalletAddress,
    config::DEFAULT_KYC_TOPIC,
    identity::TopicId,
    permissions::{Action, Denial, Role, RoleAssignments},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsState {
    /// Wallet the state was resolved for, None when not connected
    pub wallet: Option<WalletAddress>,

    /// Selected token, None when no token context
    pub token_contract: Option<WalletAddress>,

    // ===== Role flags =====
    pub is_factory_admin: bool,
    pub is_token_owner: bool,
    pub is_token_issuer: bool,
    pub is_token_agent: bool,
    pub is_token_controller: bool,
    pub is_identity_registry_owner: bool,
    pub is_claim_topics_owner: bool,
    pub is_compliance_owner: bool,
    pub is_trusted_issuer: bool,

    /// Topics the wallet may issue claims for, empty unless trusted issuer
    pub authorized_topics: BTreeSet<TopicId>,

    /// Topic whose issuers are KYC providers
    pub kyc_topic: TopicId,

    // ===== Page visibility =====
    pub can_see_issuance: bool,
    pub can_see_compliance: bool,
    pub can_see_kyc_provider: bool,
    pub can_see_admin_identities: bool,
    pub can_see_admin_tab: bool,
}

/// Resolve with topic 1 as the KYC topic
pub fn resolve_permissions(
    assignments: &RoleAssignments,
    wallet: Option<&WalletAddress>,
) -> PermissionsState {
    resolve_permissions_with(assignments, wallet, DEFAULT_KYC_TOPIC)
}

/// Resolve with an explicit KYC topic
pub fn resolve_permissions_with(
    assignments: &RoleAssignments,
    wallet: Option<&WalletAddress>,
    kyc_topic: TopicId,
) -> PermissionsState {
    // Not connected: nothing at all
    let Some(wallet) = wallet else {
        debug!("no wallet connected, every permission is denied");
        return PermissionsState::denied(assignments.token_contract.clone(), kyc_topic);
    };

    // Without a token context no per-token privilege can be asserted
    let has_token = assignments.token_contract.is_some();

    let is_factory_admin = wallet.matches(assignments.factory_admin.as_ref());
    let is_token_owner = has_token && wallet.matches(assignments.token_owner.as_ref());
    let is_token_issuer = has_token && wallet.matches(assignments.token_issuer.as_ref());
    let is_token_agent = assignments.is_token_agent(wallet);
    let is_token_controller = has_token && wallet.matches(assignments.token_controller.as_ref());
    let is_identity_registry_owner = wallet.matches(assignments.identity_registry_owner.as_ref());
    let is_claim_topics_owner = wallet.matches(assignments.claim_topics_owner.as_ref());
    let is_compliance_owner = wallet.matches(assignments.compliance_owner.as_ref());

    let authorized_topics = assignments
        .issuer_topics(wallet)
        .cloned()
        .unwrap_or_default();
    let is_trusted_issuer = !authorized_topics.is_empty();

    let state = PermissionsState {
        wallet: Some(wallet.clone()),
        token_contract: assignments.token_contract.clone(),
        is_factory_admin,
        is_token_owner,
        is_token_issuer,
        is_token_agent,
        is_token_controller,
        is_identity_registry_owner,
        is_claim_topics_owner,
        is_compliance_owner,
        is_trusted_issuer,
        can_see_issuance: is_factory_admin,
        can_see_compliance: is_compliance_owner,
        can_see_kyc_provider: is_trusted_issuer && authorized_topics.contains(&kyc_topic),
        can_see_admin_identities: is_identity_registry_owner
            || is_claim_topics_owner
            || is_trusted_issuer,
        can_see_admin_tab: is_token_owner
            || is_token_agent
            || is_token_controller
            || is_compliance_owner
            || is_factory_admin,
        authorized_topics,
        kyc_topic,
    };

    if log::log_enabled!(log::Level::Debug) {
        debug!(
            "resolved permissions for {} (token {:?}): roles {:?}",
            wallet,
            assignments.token_contract.as_ref().map(WalletAddress::as_str),
            state.roles()
        );
    }

    state
}

impl PermissionsState {
    /// No wallet: every flag false
    pub fn denied(token_contract: Option<WalletAddress>, kyc_topic: TopicId) -> Self {
        Self {
            wallet: None,
            token_contract,
            is_factory_admin: false,
            is_token_owner: false,
            is_token_issuer: false,
            is_token_agent: false,
            is_token_controller: false,
            is_identity_registry_owner: false,
            is_claim_topics_owner: false,
            is_compliance_owner: false,
            is_trusted_issuer: false,
            authorized_topics: BTreeSet::new(),
            kyc_topic,
            can_see_issuance: false,
            can_see_compliance: false,
            can_see_kyc_provider: false,
            can_see_admin_identities: false,
            can_see_admin_tab: false,
        }
    }

    #[inline]
    pub fn is_trusted_issuer_for(&self, topic: TopicId) -> bool {
        self.authorized_topics.contains(&topic)
    }

    /// Trusted issuer for the KYC topic: may create on-chain identities
    #[inline]
    pub fn can_create_onchain_id(&self) -> bool {
        self.is_trusted_issuer_for(self.kyc_topic)
    }

    /// Whether the connected wallet holds `role`.
    /// `IdentityOwner` depends on the target identity and is never held here.
    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::FactoryAdmin => self.is_factory_admin,
            Role::TokenOwner => self.is_token_owner,
            Role::TokenIssuer => self.is_token_issuer,
            Role::TokenAgent => self.is_token_agent,
            Role::TokenController => self.is_token_controller,
            Role::IdentityRegistryOwner => self.is_identity_registry_owner,
            Role::ClaimTopicsOwner => self.is_claim_topics_owner,
            Role::ComplianceOwner => self.is_compliance_owner,
            Role::TrustedIssuer => self.is_trusted_issuer,
            Role::TrustedIssuerForTopic(topic) => self.is_trusted_issuer_for(topic),
            Role::IdentityOwner => false,
        }
    }

    /// Every role held, in declaration order
    pub fn roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = [
            Role::FactoryAdmin,
            Role::TokenOwner,
            Role::TokenIssuer,
            Role::TokenAgent,
            Role::TokenController,
            Role::IdentityRegistryOwner,
            Role::ClaimTopicsOwner,
            Role::ComplianceOwner,
            Role::TrustedIssuer,
        ]
        .into_iter()
        .filter(|role| self.has_role(*role))
        .collect();
        roles.extend(
            self.authorized_topics
                .iter()
                .map(|topic| Role::TrustedIssuerForTopic(*topic)),
        );
        roles
    }

    /// Check a gated action, the denial names the roles that would allow it
    pub fn check(&self, action: Action) -> Result<(), Denial> {
        if self.wallet.is_none() {
            return Err(Denial::not_connected(action));
        }

        let required = action.required_roles(self.kyc_topic);
        if action.needs_token() && self.token_contract.is_none() {
            return Err(Denial::no_token(action, required));
        }

        if required.iter().any(|role| self.has_role(*role)) {
            return Ok(());
        }

        Err(Denial::missing_role(action, required))
    }

    #[inline]
    pub fn can(&self, action: Action) -> bool {
        self.check(action).is_ok()
    }

    /// Actions the connected wallet may perform
    pub fn allowed_actions(&self) -> Vec<Action> {
        Action::ALL
            .iter()
            .copied()
            .filter(|action| self.can(*action))
            .collect()
    }
}
