// Fast-fail checks for every mutating workflow transition.
// Authorization is always checked before the stage preconditions.

use crate::{
    address::WalletAddress,
    identity::{Claim, CountryCode, Identity, RequiredTopics, TopicId},
    permissions::{Action, PermissionsState, Role},
    workflow::{ValidationError, WorkflowError, WorkflowResult},
};
use log::trace;

/// Deploying an identity contract needs a trusted issuer for the KYC topic
pub fn authorize_create_identity(
    permissions: &PermissionsState,
    identity: &Identity,
) -> WorkflowResult<()> {
    permissions.check(Action::CreateOnchainId)?;

    if identity.has_onchain_id() {
        return Err(ValidationError::IdentityAlreadyExists.into());
    }

    Ok(())
}

/// Binding wallet, identity and country needs the Identity Registry owner.
/// Returns the normalized country code.
pub fn authorize_register_identity(
    permissions: &PermissionsState,
    identity: &Identity,
    country: &str,
) -> WorkflowResult<CountryCode> {
    permissions.check(Action::RegisterIdentity)?;

    if !identity.has_onchain_id() {
        return Err(ValidationError::IdentityNotCreated.into());
    }
    if identity.registered {
        return Err(ValidationError::IdentityAlreadyRegistered.into());
    }

    CountryCode::parse(country)
        .map_err(|_| WorkflowError::from(ValidationError::InvalidCountry(country.to_string())))
}

/// A claim for `topic` on the identity owned by `owner` can be managed by a
/// trusted issuer for that topic or by the owner itself.
/// Needs no chain state, so it runs before anything is fetched.
pub fn authorize_claim_actor(
    permissions: &PermissionsState,
    owner: &WalletAddress,
    topic: TopicId,
    action: &str,
) -> WorkflowResult<()> {
    let Some(actor) = permissions.wallet.as_ref() else {
        return Err(ValidationError::NoWallet.into());
    };

    if permissions.is_trusted_issuer_for(topic) {
        trace!("{} is a trusted issuer for {}", actor, topic);
        return Ok(());
    }

    // Self-attestation
    if actor == owner {
        trace!("{} owns the identity, self-attesting {}", actor, topic);
        return Ok(());
    }

    // Issuer for other topics only
    if permissions.is_trusted_issuer {
        return Err(ValidationError::TopicNotAuthorized { topic }.into());
    }

    Err(WorkflowError::unauthorized(
        action,
        vec![Role::TrustedIssuerForTopic(topic), Role::IdentityOwner],
    ))
}

/// Claims need a created and registered identity
pub fn ensure_can_add_claim(identity: &Identity) -> WorkflowResult<()> {
    if !identity.has_onchain_id() {
        return Err(ValidationError::IdentityNotCreated.into());
    }
    if !identity.registered {
        return Err(ValidationError::IdentityNotRegistered.into());
    }
    Ok(())
}

pub fn authorize_add_claim(
    permissions: &PermissionsState,
    identity: &Identity,
    topic: TopicId,
) -> WorkflowResult<()> {
    authorize_claim_actor(permissions, &identity.wallet, topic, "add claims")?;
    ensure_can_add_claim(identity)
}

/// Returns the claim to revoke.
/// Order: claim lookup, then authorization for its topic, then revocation state.
pub fn authorize_revoke_claim<'a>(
    permissions: &PermissionsState,
    identity: &'a Identity,
    claim_id: &str,
) -> WorkflowResult<&'a Claim> {
    let claim = identity
        .find_claim(claim_id)
        .ok_or_else(|| WorkflowError::ClaimNotFound(claim_id.to_string()))?;

    authorize_claim_actor(permissions, &identity.wallet, claim.topic, "revoke claims")?;

    if claim.revoked {
        return Err(ValidationError::ClaimAlreadyRevoked(claim.id.clone()).into());
    }

    Ok(claim)
}

#[inline]
pub fn authorize_manage_required_topics(permissions: &PermissionsState) -> WorkflowResult<()> {
    permissions.check(Action::ManageClaimTopics)?;
    Ok(())
}

pub fn authorize_add_required_topic(
    permissions: &PermissionsState,
    required: &RequiredTopics,
    topic: TopicId,
) -> WorkflowResult<()> {
    authorize_manage_required_topics(permissions)?;

    if required.contains(topic) {
        return Err(ValidationError::DuplicateRequiredTopic(topic).into());
    }
    Ok(())
}

pub fn authorize_remove_required_topic(
    permissions: &PermissionsState,
    required: &RequiredTopics,
    topic: TopicId,
) -> WorkflowResult<()> {
    authorize_manage_required_topics(permissions)?;

    if !required.contains(topic) {
        return Err(WorkflowError::TopicNotFound(topic));
    }
    Ok(())
}
