use soroban_sdk::{contracttype, Address, BytesN, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: BytesN<32>,
    pub creator: Address,
    pub title: String,
    pub start_time: u64,
    pub end_time: u64,
    pub credential_token: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct VoteCastEvent {
    pub campaign_id: BytesN<32>,
    pub voter: Address,
    pub option_index: u32,
    pub total_votes: u64,
}

pub fn emit_campaign_created(env: &soroban_sdk::Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_vote_cast(env: &soroban_sdk::Env, event: VoteCastEvent) {
    env.events().publish(
        (Symbol::new(env, "vote_cast"),),
        event,
    );
}
