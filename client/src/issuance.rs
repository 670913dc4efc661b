// Claim Issuance - drives the identity workflow against the contracts
//
// Each mutation runs the local authorization check first (no network),
// then fetches the chain state it needs, re-checks the workflow
// preconditions and only then submits through the executor.

use std::sync::Arc;

use log::{debug, info, trace, warn};
use trex_common::{
    address::WalletAddress,
    identity::{
        evaluate_verification_at, ClaimId, CountryCode, RequiredTopics, TopicId,
        VerificationResult, REQUIRED_TOPICS_UNAVAILABLE_REASON,
    },
    permissions::{Action, PermissionsState},
    time::get_current_time_in_seconds,
    workflow::{
        authorize_add_claim, authorize_add_required_topic, authorize_claim_actor,
        authorize_create_identity, authorize_manage_required_topics, authorize_register_identity,
        authorize_remove_required_topic, authorize_revoke_claim, ValidationError, WorkflowError,
    },
};

use crate::{
    chain_api::{ChainExecutor, ChainQuery, ClaimRequest},
    claims::IdentityLoader,
    config::ClientConfig,
    error::{IssuanceError, IssuanceResult},
};

pub struct ClaimIssuer {
    loader: IdentityLoader,
    executor: Arc<dyn ChainExecutor>,
}

impl ClaimIssuer {
    pub fn new(
        api: Arc<dyn ChainQuery>,
        executor: Arc<dyn ChainExecutor>,
        config: ClientConfig,
    ) -> Self {
        Self {
            loader: IdentityLoader::new(api, config),
            executor,
        }
    }

    pub fn loader(&self) -> &IdentityLoader {
        &self.loader
    }

    /// Deploy an identity contract for `wallet`, returns its address
    pub async fn create_identity(
        &self,
        permissions: &PermissionsState,
        wallet: &WalletAddress,
    ) -> IssuanceResult<WalletAddress> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("create identity for {}", wallet);
        }
        permissions
            .check(Action::CreateOnchainId)
            .map_err(WorkflowError::from)?;

        let identity = self.loader.fetch_registration(wallet).await?;
        authorize_create_identity(permissions, &identity)?;

        let onchain_id = self.executor.create_identity(wallet).await?;
        if log::log_enabled!(log::Level::Info) {
            info!("Created identity {} for {}", onchain_id, wallet);
        }
        Ok(onchain_id)
    }

    /// Bind `wallet`, its identity and `country` in the Identity Registry
    pub async fn register_identity(
        &self,
        permissions: &PermissionsState,
        wallet: &WalletAddress,
        country: &str,
    ) -> IssuanceResult<CountryCode> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("register identity of {} in {}", wallet, country);
        }
        permissions
            .check(Action::RegisterIdentity)
            .map_err(WorkflowError::from)?;

        let identity = self.loader.fetch_registration(wallet).await?;
        let country = authorize_register_identity(permissions, &identity, country)?;
        let onchain_id = identity
            .onchain_id
            .as_ref()
            .ok_or(ValidationError::IdentityNotCreated)?;

        self.executor
            .register_identity(wallet, onchain_id, &country)
            .await?;
        if log::log_enabled!(log::Level::Info) {
            info!("Registered {} with identity {} in {}", wallet, onchain_id, country);
        }
        Ok(country)
    }

    /// Add a claim on the identity of `wallet`
    pub async fn add_claim(
        &self,
        permissions: &PermissionsState,
        wallet: &WalletAddress,
        claim: &ClaimRequest,
    ) -> IssuanceResult<ClaimId> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("add claim for {} on {}", claim.topic, wallet);
        }
        authorize_claim_actor(permissions, wallet, claim.topic, "add claims")?;

        let identity = self.loader.fetch_registration(wallet).await?;
        authorize_add_claim(permissions, &identity, claim.topic)?;
        let onchain_id = identity
            .onchain_id
            .as_ref()
            .ok_or(ValidationError::IdentityNotCreated)?;

        let claim_id = self.executor.add_claim(onchain_id, claim).await?;
        if log::log_enabled!(log::Level::Info) {
            info!("Added claim {} for {} on {}", claim_id, claim.topic, wallet);
        }
        Ok(claim_id)
    }

    /// Revoke a claim held by the identity of `wallet`
    pub async fn revoke_claim(
        &self,
        permissions: &PermissionsState,
        wallet: &WalletAddress,
        claim_id: &str,
    ) -> IssuanceResult<()> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("revoke claim {} of {}", claim_id, wallet);
        }
        if permissions.wallet.is_none() {
            return Err(ValidationError::NoWallet.into());
        }

        let mut identity = self.loader.fetch_registration(wallet).await?;
        let Some(onchain_id) = identity.onchain_id.clone() else {
            return Err(WorkflowError::IdentityNotFound(wallet.to_string()).into());
        };
        // Looked up by id: the claim may be on any topic
        identity
            .claims
            .extend(self.loader.fetch_claim(&onchain_id, claim_id).await?);

        let claim = authorize_revoke_claim(permissions, &identity, claim_id)?;
        self.executor.revoke_claim(&onchain_id, &claim.id).await?;
        if log::log_enabled!(log::Level::Info) {
            info!("Revoked claim {} ({}) of {}", claim.id, claim.topic, wallet);
        }
        Ok(())
    }

    pub async fn add_required_topic(
        &self,
        permissions: &PermissionsState,
        topic: TopicId,
    ) -> IssuanceResult<()> {
        authorize_manage_required_topics(permissions)?;

        let required = self.loader.fetch_required_topics().await?;
        authorize_add_required_topic(permissions, &required, topic)?;

        self.executor.add_required_topic(topic).await?;
        if log::log_enabled!(log::Level::Info) {
            info!("Added required {}", topic);
        }
        Ok(())
    }

    pub async fn remove_required_topic(
        &self,
        permissions: &PermissionsState,
        topic: TopicId,
    ) -> IssuanceResult<()> {
        authorize_manage_required_topics(permissions)?;

        let required = self.loader.fetch_required_topics().await?;
        authorize_remove_required_topic(permissions, &required, topic)?;

        self.executor.remove_required_topic(topic).await?;
        if log::log_enabled!(log::Level::Info) {
            info!("Removed required {}", topic);
        }
        Ok(())
    }

    async fn evaluate(&self, wallet: &WalletAddress, required: &RequiredTopics) -> VerificationResult {
        let identity = self.loader.load_identity(wallet, required).await;
        let result = evaluate_verification_at(&identity, required, get_current_time_in_seconds());
        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "verification of {}: {} ({:?})",
                wallet, result.verified, result.reason
            );
        }
        result
    }

    /// Read-only, no authorization needed. Query failures count as missing claims,
    /// unreadable required topics leave the wallet unverified.
    pub async fn verification(&self, wallet: &WalletAddress) -> VerificationResult {
        match self.loader.fetch_required_topics().await {
            Ok(required) => self.evaluate(wallet, &required).await,
            Err(e) => {
                if log::log_enabled!(log::Level::Warn) {
                    warn!("Cannot verify {}: {:#}", wallet, e);
                }
                VerificationResult::unverified(REQUIRED_TOPICS_UNAVAILABLE_REASON)
            }
        }
    }

    /// Gate for mint and transfer eligibility.
    /// No configured required topic is treated as a misconfiguration,
    /// unreadable required topics as a chain error.
    pub async fn ensure_verified(&self, wallet: &WalletAddress) -> IssuanceResult<VerificationResult> {
        let required = self.loader.fetch_required_topics().await?;
        if required.is_empty() {
            return Err(ValidationError::EmptyRequiredTopics.into());
        }

        let result = self.evaluate(wallet, &required).await;
        if !result.verified {
            return Err(IssuanceError::NotVerified {
                wallet: wallet.clone(),
                reason: result.reason.unwrap_or_default(),
            });
        }
        Ok(result)
    }
}
