use soroban_sdk::{contracterror, contracttype, Address, BytesN, String, Vec};

pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign(BytesN<32>),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteError {
    InvalidOptions = 1,
    InvalidTimestamps = 2,
    DuplicateCampaign = 3,
    CampaignNotFound = 4,
    CampaignNotStarted = 5,
    CampaignEnded = 6,
    InvalidOption = 7,
    InvalidCredentialClass = 8,
    ConstraintViolation = 9,
    InsufficientCredential = 10,
}

/// A campaign record. `votes` always has the same length as `options`,
/// and `total_votes` equals the sum of `votes`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub creator: Address,
    pub title: String,
    pub options: Vec<String>,
    pub votes: Vec<u64>,
    pub credential_token: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub total_votes: u64,
}
