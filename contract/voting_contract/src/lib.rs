#![no_std]

mod credential;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, xdr::ToXdr, Address, BytesN, Env, String, Vec};

use storage_types::{Campaign, DataKey, VoteError, TTL_PERSISTENT};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Create a new campaign. The record is stored under an id derived from
    /// (creator, title), so the same creator can never reuse a title.
    /// The voting window is not checked against current ledger time:
    /// back-dated and scheduled campaigns are both allowed.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        options: Vec<String>,
        start_time: u64,
        end_time: u64,
        credential_token: Address,
    ) -> Result<BytesN<32>, VoteError> {
        creator.require_auth();

        if options.len() < 2 {
            return Err(VoteError::InvalidOptions);
        }
        if start_time >= end_time {
            return Err(VoteError::InvalidTimestamps);
        }

        let campaign_id = derive_campaign_id(&env, &creator, &title);
        if env
            .storage()
            .persistent()
            .has(&DataKey::Campaign(campaign_id.clone()))
        {
            return Err(VoteError::DuplicateCampaign);
        }

        let mut votes = Vec::new(&env);
        for _ in 0..options.len() {
            votes.push_back(0u64);
        }

        let campaign = Campaign {
            creator: creator.clone(),
            title: title.clone(),
            options,
            votes,
            credential_token: credential_token.clone(),
            start_time,
            end_time,
            total_votes: 0,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id.clone()), &campaign);
        extend_campaign(&env, &campaign_id);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id: campaign_id.clone(),
                creator,
                title,
                start_time,
                end_time,
                credential_token,
            },
        );

        Ok(campaign_id)
    }

    /// Cast a vote by burning one unit of the campaign's credential token.
    /// No voter list is kept: once the unit is burned, a repeat attempt
    /// fails the balance check. A holder issued a fresh unit may vote again.
    pub fn cast_vote(
        env: Env,
        voter: Address,
        campaign_id: BytesN<32>,
        option_index: u32,
        credential_holder: Address,
        credential_token: Address,
    ) -> Result<(), VoteError> {
        voter.require_auth();

        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id.clone()))
            .ok_or(VoteError::CampaignNotFound)?;

        let now = env.ledger().timestamp();
        if now < campaign.start_time {
            return Err(VoteError::CampaignNotStarted);
        }
        if now > campaign.end_time {
            return Err(VoteError::CampaignEnded);
        }

        if option_index >= campaign.options.len() {
            return Err(VoteError::InvalidOption);
        }

        credential::verify_credential(
            &env,
            &campaign.credential_token,
            &credential_token,
            &voter,
            &credential_holder,
        )?;

        // Both effects commit or roll back with the invocation.
        credential::consume_credential(&env, &credential_token, &credential_holder);

        let count = campaign.votes.get(option_index).unwrap_or(0);
        campaign.votes.set(option_index, count + 1);
        campaign.total_votes += 1;

        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id.clone()), &campaign);
        extend_campaign(&env, &campaign_id);

        events::emit_vote_cast(
            &env,
            events::VoteCastEvent {
                campaign_id,
                voter,
                option_index,
                total_votes: campaign.total_votes,
            },
        );

        Ok(())
    }

    pub fn get_campaign(env: Env, campaign_id: BytesN<32>) -> Result<Campaign, VoteError> {
        env.storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(VoteError::CampaignNotFound)
    }

    /// Compute the id a campaign would get for (creator, title) without
    /// touching storage.
    pub fn campaign_address(env: Env, creator: Address, title: String) -> BytesN<32> {
        derive_campaign_id(&env, &creator, &title)
    }
}

fn derive_campaign_id(env: &Env, creator: &Address, title: &String) -> BytesN<32> {
    let mut seed = creator.to_xdr(env);
    seed.append(&title.to_xdr(env));
    env.crypto().sha256(&seed).into()
}

fn extend_campaign(env: &Env, campaign_id: &BytesN<32>) {
    env.storage().persistent().extend_ttl(
        &DataKey::Campaign(campaign_id.clone()),
        TTL_PERSISTENT,
        TTL_PERSISTENT,
    );
}
