use soroban_sdk::{contracterror, contracttype, Address, String};

/// Badge id 0 is the one-off campaign NFT minted to the artist at creation.
/// Tier badges occupy ids 1..=tiers.len(), in threshold order.
pub const CAMPAIGN_NFT_ID: u32 = 0;

pub fn tier_badge_id(tier_index: u32) -> u32 {
    tier_index + 1
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    Ongoing = 0,
    Funded = 1,
    Completed = 2,
}

/// A funding tier: crossing `threshold` in cumulative contributions earns
/// the badge; `profit_percent` is the weighting key for revenue sharing.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Tier {
    pub name: String,
    pub threshold: i128,
    pub profit_percent: u32,
    pub benefits: String, // Opaque URI, never parsed on-chain
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Campaign {
    pub id: u32,
    pub artist: Address,
    pub metadata_uri: String,
    pub target_amount: i128,
    pub deadline: u64, // Advisory; funding is not cut off at this timestamp
    pub funder_share_percent: u32,
    pub status: CampaignStatus,
    pub total_raised: i128,
    pub total_revenue: i128,
    pub campaign_nft_name: String,
}

/// Per-funder record within one campaign. Created on first funding, deleted
/// on refund. `highest_tier` is None until the lowest threshold is crossed.
#[contracttype]
#[derive(Clone, Debug)]
pub struct FunderInfo {
    pub total_funded: i128,
    pub highest_tier: Option<u32>,
    pub claimable_revenue: i128,
}

/// Per-campaign fungible token ledger. Supply mirrors the campaign's
/// total_raised: minted 1:1 on fund, burned on refund.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ArtistToken {
    pub name: String,
    pub total_supply: i128,
}

/// Storage keys. Instance keys hold hub configuration and counters
/// (registry-owned); persistent keys hold campaign rows and funder state.
#[contracttype]
pub enum DataKey {
    Owner,                       // Platform owner (admin operations)
    ArtistIdentity,              // Identity contract address
    Currency,                    // Funding currency token address
    PlatformWallet,              // Receives campaign creation fees
    CreationFee,                 // Fee charged on create_campaign
    NextCampaignId,              // Counter for campaign IDs
    Campaign(u32),               // Campaign ID -> Campaign
    Tiers(u32),                  // Campaign ID -> Vec<Tier>
    ArtistCampaigns(Address),    // Artist -> Vec<campaign ID>
    Token(u32),                  // Campaign ID -> ArtistToken
    TokenBalance(u32, Address),  // (campaign, holder) -> artist-token balance
    Funder(u32, Address),        // (campaign, funder) -> FunderInfo
    Funders(u32),                // Campaign ID -> active funder roster
    Badge(u32, Address, u32),    // (campaign, holder, badge ID) -> held
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Validation
    InvalidAmount = 101,
    FunderShareTooHigh = 102,
    NoTiersProvided = 103,
    InvalidTierProfitPercent = 104,
    TiersNotAscending = 105,
    // Authorization
    NotOwner = 201,
    NotRegisteredArtist = 202,
    NotCampaignArtist = 203,
    // State conflicts
    AlreadyInitialized = 301,
    NotInitialized = 302,
    CampaignNotFound = 303,
    CampaignClosed = 304,
    RefundNotAvailable = 305,
    NothingToRefund = 306,
    NothingToClaim = 307,
    // Arithmetic
    MathOverflow = 401,
}
