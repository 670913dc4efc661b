// Loads identities and their claims from the chain.
//
// Claims are fetched per topic, concurrently. A topic whose query fails
// contributes no claims, which evaluates as "no active claim" for it.

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use futures::future::join_all;
use indexmap::IndexSet;
use log::{debug, trace};
use trex_common::{
    address::WalletAddress,
    identity::{Claim, Identity, RequiredTopics, TopicId},
    time::TimestampSeconds,
};

use crate::{
    chain_api::{ChainQuery, IdentityRecord},
    config::ClientConfig,
    query::{query_or_default, query_with_timeout},
};

pub struct IdentityLoader {
    api: Arc<dyn ChainQuery>,
    config: ClientConfig,
}

impl IdentityLoader {
    pub fn new(api: Arc<dyn ChainQuery>, config: ClientConfig) -> Self {
        Self { api, config }
    }

    #[inline]
    fn query_timeout(&self) -> Duration {
        self.config.query_timeout()
    }

    /// Required topics, failing on query errors and timeouts.
    /// An empty list here must never be mistaken for an unreadable one.
    pub async fn fetch_required_topics(&self) -> Result<RequiredTopics> {
        let topics = query_with_timeout(
            "required claim topics",
            self.query_timeout(),
            self.api.get_required_topics(),
        )
        .await?;
        Ok(topics.into_iter().collect())
    }

    /// Identity of `wallet` for read-only use.
    /// A failed lookup yields a wallet without identity, which never verifies.
    pub async fn load_identity(&self, wallet: &WalletAddress, required: &RequiredTopics) -> Identity {
        let record: Option<IdentityRecord> = query_or_default(
            format!("identity of {}", wallet),
            self.query_timeout(),
            self.api.get_user_identity(wallet),
        )
        .await;
        self.build_identity(wallet, record, required).await
    }


    /// Registry state of `wallet` without its claims, failing on query errors
    pub async fn fetch_registration(&self, wallet: &WalletAddress) -> Result<Identity> {
        let mut identity = Identity::new(wallet.clone());
        if let Some(record) = self.api.get_user_identity(wallet).await? {
            identity.onchain_id = record.onchain_id;
            identity.country = record.country;
            identity.registered = record.registered;
        }
        Ok(identity)
    }

    /// One claim by id, failing on query errors and timeouts
    pub async fn fetch_claim(&self, onchain_id: &WalletAddress, claim_id: &str) -> Result<Option<Claim>> {
        query_with_timeout(
            format!("claim {} of {}", claim_id, onchain_id),
            self.query_timeout(),
            self.api.get_claim(onchain_id, claim_id),
        )
        .await
    }

    async fn build_identity(
        &self,
        wallet: &WalletAddress,
        record: Option<IdentityRecord>,
        required: &RequiredTopics,
    ) -> Identity {
        let mut identity = Identity::new(wallet.clone());
        let Some(record) = record else {
            return identity;
        };

        identity.onchain_id = record.onchain_id;
        identity.country = record.country;
        identity.registered = record.registered;

        if let Some(onchain_id) = identity.onchain_id.as_ref() {
            identity.claims = self.load_claims(onchain_id, required).await;
        }
        identity
    }

    /// Topics to scan: required ones first, then the standard range
    pub fn topics_to_scan(&self, required: &RequiredTopics) -> Vec<TopicId> {
        let topics: IndexSet<TopicId> = required
            .iter()
            .chain(self.config.scanned_topics())
            .collect();
        topics.into_iter().collect()
    }

    pub async fn load_claims(
        &self,
        onchain_id: &WalletAddress,
        required: &RequiredTopics,
    ) -> Vec<Claim> {
        let topics = self.topics_to_scan(required);
        if log::log_enabled!(log::Level::Trace) {
            trace!("loading claims of {} for {} topic(s)", onchain_id, topics.len());
        }

        let limit = self.query_timeout();
        let queries = topics.iter().map(|topic| {
            query_or_default(
                format!("claims of {} for {}", onchain_id, topic),
                limit,
                self.api.get_claims_by_topic(onchain_id, *topic),
            )
        });

        let claims: Vec<Claim> = join_all(queries).await.into_iter().flatten().collect();
        if log::log_enabled!(log::Level::Debug) {
            debug!("loaded {} claim(s) for {}", claims.len(), onchain_id);
        }
        claims
    }

    /// Active claims of `identity` that expire within the warning window
    pub fn expiring_claims<'a>(&self, identity: &'a Identity, now: TimestampSeconds) -> Vec<&'a Claim> {
        identity.expiring_claims(now, self.config.expiry_warning_secs)
    }
}
