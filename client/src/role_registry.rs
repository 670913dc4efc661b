// Role Registry - aggregates role holders from the TREX contracts
//
// Every query is independent and issued concurrently. A failed or slow
// query only empties its own field, the others still resolve.

use std::{sync::Arc, time::Duration};

use log::{debug, trace};
use trex_common::{address::WalletAddress, permissions::RoleAssignments};

use crate::{
    chain_api::{ChainQuery, TokenRoles},
    config::ClientConfig,
    query::query_or_default,
};

pub struct RoleRegistry {
    api: Arc<dyn ChainQuery>,
    query_timeout: Duration,
}

impl RoleRegistry {
    pub fn new(api: Arc<dyn ChainQuery>, config: &ClientConfig) -> Self {
        Self {
            api,
            query_timeout: config.query_timeout(),
        }
    }

    /// Read every role holder relevant to `wallet` and `token`.
    /// Per-token fields stay empty without a token. Never fails.
    pub async fn resolve_roles(
        &self,
        wallet: Option<&WalletAddress>,
        token: Option<&WalletAddress>,
    ) -> RoleAssignments {
        if log::log_enabled!(log::Level::Trace) {
            trace!("resolve roles for {:?} on token {:?}", wallet, token);
        }

        let limit = self.query_timeout;
        let token_roles = async {
            match token {
                Some(token) => {
                    query_or_default(
                        format!("roles of token {}", token),
                        limit,
                        self.api.get_roles(token),
                    )
                    .await
                }
                None => TokenRoles::default(),
            }
        };
        let agents = async {
            match token {
                Some(token) => {
                    query_or_default(
                        format!("agents of token {}", token),
                        limit,
                        self.api.get_agents(token),
                    )
                    .await
                }
                None => Vec::new(),
            }
        };
        let issuer_topics = async {
            match wallet {
                Some(wallet) => {
                    query_or_default(
                        format!("issuer topics of {}", wallet),
                        limit,
                        self.api.get_issuer_topics(wallet),
                    )
                    .await
                }
                None => None,
            }
        };

        let (
            factory_admin,
            token_roles,
            agents,
            identity_registry_owner,
            claim_topics_owner,
            compliance_owner,
            issuer_topics,
        ) = futures::join!(
            query_or_default("factory admin", limit, self.api.get_factory_admin()),
            token_roles,
            agents,
            query_or_default(
                "identity registry owner",
                limit,
                self.api.get_identity_registry_owner()
            ),
            query_or_default("claim topics owner", limit, self.api.get_claim_topics_owner()),
            query_or_default("compliance owner", limit, self.api.get_compliance_owner()),
            issuer_topics
        );

        let mut assignments = RoleAssignments {
            token_contract: token.cloned(),
            factory_admin,
            token_owner: token_roles.owner,
            token_issuer: token_roles.issuer,
            token_controller: token_roles.controller,
            token_agents: agents.into_iter().collect(),
            identity_registry_owner,
            claim_topics_owner,
            compliance_owner,
            ..Default::default()
        };

        if let (Some(wallet), Some(topics)) = (wallet, issuer_topics) {
            assignments
                .trusted_issuer_topics
                .insert(wallet.clone(), topics.into_iter().collect());
        }

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "resolved roles: factory admin {:?}, token owner {:?}, {} agent(s)",
                assignments.factory_admin,
                assignments.token_owner,
                assignments.token_agents.len()
            );
        }

        assignments
    }
}
