#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod artist_token;
pub mod badges;
pub mod external;
pub mod funding;
pub mod registry;
pub mod revenue;
pub mod types;


use artist_token::TokenLedger;
use badges::BadgeLedger;
use funding::FundingManager;
use registry::Registry;
use revenue::RevenueManager;
use types::{ArtistToken, Campaign, Error, FunderInfo, Tier};

/// Campaign hub: the registry (validation, fees, directory) and the
/// per-campaign funding/tier/refund/revenue state machine, with campaigns
/// keyed by sequential id.
#[contract]
pub struct CampaignHub;

#[contractimpl]
impl CampaignHub {
    pub fn initialize(
        env: Env,
        owner: Address,
        artist_identity: Address,
        currency: Address,
        platform_wallet: Address,
        creation_fee: i128,
    ) -> Result<(), Error> {
        Registry::init(
            &env,
            &owner,
            &artist_identity,
            &currency,
            &platform_wallet,
            creation_fee,
        )
    }

    // Registry operations

    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        env: Env,
        artist: Address,
        metadata_uri: String,
        target_amount: i128,
        duration: u64,
        funder_share_percent: u32,
        tiers: Vec<Tier>,
        token_name: String,
        campaign_nft_name: String,
    ) -> Result<u32, Error> {
        Registry::create_campaign(
            &env,
            &artist,
            metadata_uri,
            target_amount,
            duration,
            funder_share_percent,
            tiers,
            token_name,
            campaign_nft_name,
        )
    }

    pub fn set_platform_wallet(env: Env, caller: Address, wallet: Address) -> Result<(), Error> {
        Registry::set_platform_wallet(&env, &caller, &wallet)
    }

    pub fn set_campaign_creation_fee(env: Env, caller: Address, fee: i128) -> Result<(), Error> {
        Registry::set_campaign_creation_fee(&env, &caller, fee)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        Registry::transfer_ownership(&env, &caller, &new_owner)
    }

    // Campaign operations

    pub fn fund(env: Env, funder: Address, campaign_id: u32, amount: i128) -> Result<(), Error> {
        FundingManager::fund(&env, &funder, campaign_id, amount)
    }

    pub fn refund(env: Env, funder: Address, campaign_id: u32) -> Result<(), Error> {
        FundingManager::refund(&env, &funder, campaign_id)
    }

    pub fn submit_revenue(
        env: Env,
        artist: Address,
        campaign_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        RevenueManager::submit_revenue(&env, &artist, campaign_id, amount)
    }

    pub fn claim_revenue(env: Env, funder: Address, campaign_id: u32) -> Result<(), Error> {
        RevenueManager::claim_revenue(&env, &funder, campaign_id)
    }

    // Campaign views

    pub fn get_campaign_data(env: Env, campaign_id: u32) -> Result<Campaign, Error> {
        FundingManager::get_campaign(&env, campaign_id)
    }

    pub fn get_tiers(env: Env, campaign_id: u32) -> Result<Vec<Tier>, Error> {
        FundingManager::tiers(&env, campaign_id)
    }

    pub fn get_funder_info(env: Env, campaign_id: u32, funder: Address) -> FunderInfo {
        FundingManager::funder_info(&env, campaign_id, &funder)
    }

    pub fn has_badge(env: Env, campaign_id: u32, holder: Address, badge_id: u32) -> bool {
        BadgeLedger::has_badge(&env, campaign_id, &holder, badge_id)
    }

    pub fn claimable_revenue(env: Env, campaign_id: u32, funder: Address) -> i128 {
        FundingManager::funder_info(&env, campaign_id, &funder).claimable_revenue
    }

    pub fn get_total_funders(env: Env, campaign_id: u32) -> u32 {
        FundingManager::funders(&env, campaign_id).len()
    }

    pub fn get_artist_token(env: Env, campaign_id: u32) -> Result<ArtistToken, Error> {
        TokenLedger::get(&env, campaign_id)
    }

    pub fn get_artist_token_balance(env: Env, campaign_id: u32, holder: Address) -> i128 {
        TokenLedger::balance(&env, campaign_id, &holder)
    }

    // Registry views

    pub fn campaign_exists(env: Env, campaign_id: u32) -> bool {
        Registry::campaign_exists(&env, campaign_id)
    }

    pub fn get_artist_campaigns(env: Env, artist: Address) -> Vec<u32> {
        Registry::artist_campaigns(&env, &artist)
    }

    pub fn get_total_campaigns(env: Env) -> u32 {
        Registry::total_campaigns(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        Registry::owner(&env)
    }

    pub fn get_artist_identity(env: Env) -> Result<Address, Error> {
        Registry::artist_identity(&env)
    }

    pub fn get_currency(env: Env) -> Result<Address, Error> {
        Registry::currency(&env)
    }

    pub fn get_platform_wallet(env: Env) -> Result<Address, Error> {
        Registry::platform_wallet(&env)
    }

    pub fn get_creation_fee(env: Env) -> Result<i128, Error> {
        Registry::creation_fee(&env)
    }
}
