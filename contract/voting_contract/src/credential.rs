use soroban_sdk::{token, Address, Env};

use crate::storage_types::VoteError;

/// Check that the supplied credential matches what the campaign registered
/// and that the holder still owns at least one unit. All reads, no effects.
pub fn verify_credential(
    env: &Env,
    registered_token: &Address,
    supplied_token: &Address,
    voter: &Address,
    holder: &Address,
) -> Result<(), VoteError> {
    if supplied_token != registered_token {
        return Err(VoteError::InvalidCredentialClass);
    }

    // The holding account for (voter, token) is the voter's own address
    // within the token contract.
    if holder != voter {
        return Err(VoteError::ConstraintViolation);
    }

    let token_client = token::Client::new(env, supplied_token);
    if token_client.balance(holder) < 1 {
        return Err(VoteError::InsufficientCredential);
    }

    Ok(())
}

/// Burn exactly one credential unit from the holder. The burned unit is the
/// only record that this holder has voted.
pub fn consume_credential(env: &Env, credential_token: &Address, holder: &Address) {
    let token_client = token::Client::new(env, credential_token);
    token_client.burn(holder, &1);
}
