// AccessSession - roles and permissions of the connected wallet
//
// Holds the (wallet, token) context and the last snapshot resolved for it.
// Any context change re-resolves, mutations are followed by an explicit
// refresh from the caller.

use std::sync::Arc;

use log::debug;
use trex_common::{
    address::WalletAddress,
    identity::TopicId,
    permissions::{resolve_permissions_with, PermissionsState, RoleAssignments},
};

use crate::{chain_api::ChainQuery, config::ClientConfig, role_registry::RoleRegistry};

/// Roles and the permissions derived from them, resolved together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessSnapshot {
    pub roles: RoleAssignments,
    pub permissions: PermissionsState,
}

pub struct AccessSession {
    registry: RoleRegistry,
    kyc_topic: TopicId,
    wallet: Option<WalletAddress>,
    token: Option<WalletAddress>,
    snapshot: Option<AccessSnapshot>,
}

impl AccessSession {
    pub fn new(api: Arc<dyn ChainQuery>, config: &ClientConfig) -> Self {
        Self {
            registry: RoleRegistry::new(api, config),
            kyc_topic: config.kyc_topic,
            wallet: None,
            token: None,
            snapshot: None,
        }
    }

    pub fn wallet(&self) -> Option<&WalletAddress> {
        self.wallet.as_ref()
    }

    pub fn token(&self) -> Option<&WalletAddress> {
        self.token.as_ref()
    }

    pub fn snapshot(&self) -> Option<&AccessSnapshot> {
        self.snapshot.as_ref()
    }

    /// Current permissions, everything denied before the first resolution
    pub fn permissions(&self) -> PermissionsState {
        match self.snapshot.as_ref() {
            Some(snapshot) => snapshot.permissions.clone(),
            None => PermissionsState::denied(self.token.clone(), self.kyc_topic),
        }
    }

    /// Connect, switch or disconnect the wallet.
    /// Re-resolves only when the wallet actually changed.
    pub async fn set_wallet(&mut self, wallet: Option<WalletAddress>) -> PermissionsState {
        if self.snapshot.is_none() || self.wallet != wallet {
            self.wallet = wallet;
            self.refresh().await;
        }
        self.permissions()
    }

    /// Select another token, or none.
    /// Dropping the token needs no query, per-token roles are just cleared.
    pub async fn select_token(&mut self, token: Option<WalletAddress>) -> PermissionsState {
        if self.snapshot.is_some() && self.token == token {
            return self.permissions();
        }
        self.token = token;

        match self.snapshot.take() {
            Some(snapshot) if self.token.is_none() => {
                let mut roles = snapshot.roles;
                roles.clear_token_roles();
                self.store(roles);
            }
            _ => {
                self.refresh().await;
            }
        }
        self.permissions()
    }

    /// Re-read every role for the current context
    pub async fn refresh(&mut self) -> &AccessSnapshot {
        let roles = self
            .registry
            .resolve_roles(self.wallet.as_ref(), self.token.as_ref())
            .await;
        self.store(roles)
    }

    fn store(&mut self, roles: RoleAssignments) -> &AccessSnapshot {
        let permissions = resolve_permissions_with(&roles, self.wallet.as_ref(), self.kyc_topic);
        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "access for {:?} on token {:?}: {:?}",
                self.wallet,
                self.token,
                permissions.roles()
            );
        }
        self.snapshot.insert(AccessSnapshot { roles, permissions })
    }
}
