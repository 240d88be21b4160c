use crate::artist_token::TokenLedger;
use crate::badges::BadgeLedger;
use crate::external::IdentityClient;
use crate::types::{Campaign, CampaignStatus, DataKey, Error, Tier};
use soroban_sdk::{token, Address, Env, String, Symbol, Vec};

/// Campaign directory and factory. This module exclusively owns campaign-id
/// assignment, parameter validation, fee collection, the artist index, and
/// the hub's admin configuration.
pub struct Registry;

impl Registry {
    pub fn init(
        env: &Env,
        owner: &Address,
        artist_identity: &Address,
        currency: &Address,
        platform_wallet: &Address,
        creation_fee: i128,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, owner);
        env.storage()
            .instance()
            .set(&DataKey::ArtistIdentity, artist_identity);
        env.storage().instance().set(&DataKey::Currency, currency);
        env.storage()
            .instance()
            .set(&DataKey::PlatformWallet, platform_wallet);
        env.storage()
            .instance()
            .set(&DataKey::CreationFee, &creation_fee);
        env.storage().instance().set(&DataKey::NextCampaignId, &0u32);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        env: &Env,
        artist: &Address,
        metadata_uri: String,
        target_amount: i128,
        duration: u64,
        funder_share_percent: u32,
        tiers: Vec<Tier>,
        token_name: String,
        campaign_nft_name: String,
    ) -> Result<u32, Error> {
        artist.require_auth();

        let identity_addr = Self::artist_identity(env)?;
        if !IdentityClient::new(env, &identity_addr).is_registered_artist(artist) {
            return Err(Error::NotRegisteredArtist);
        }

        if funder_share_percent > 50 {
            return Err(Error::FunderShareTooHigh);
        }
        if target_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        Self::validate_tiers(&tiers)?;

        // Creation fee goes straight to the platform wallet.
        let fee: i128 = env
            .storage()
            .instance()
            .get(&DataKey::CreationFee)
            .ok_or(Error::NotInitialized)?;
        if fee > 0 {
            let currency = Self::currency(env)?;
            let platform_wallet: Address = env
                .storage()
                .instance()
                .get(&DataKey::PlatformWallet)
                .ok_or(Error::NotInitialized)?;
            token::Client::new(env, &currency).transfer(artist, &platform_wallet, &fee);
        }

        let campaign_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextCampaignId)
            .ok_or(Error::NotInitialized)?;
        env.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &(campaign_id + 1));

        let campaign = Campaign {
            id: campaign_id,
            artist: artist.clone(),
            metadata_uri,
            target_amount,
            deadline: env.ledger().timestamp() + duration,
            funder_share_percent,
            status: CampaignStatus::Ongoing,
            total_raised: 0,
            total_revenue: 0,
            campaign_nft_name,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);
        env.storage()
            .persistent()
            .set(&DataKey::Tiers(campaign_id), &tiers);

        TokenLedger::create(env, campaign_id, token_name);
        BadgeLedger::mint_campaign_nft(env, campaign_id, artist);

        let mut campaigns = Self::artist_campaigns(env, artist);
        campaigns.push_back(campaign_id);
        env.storage()
            .persistent()
            .set(&DataKey::ArtistCampaigns(artist.clone()), &campaigns);

        env.events().publish(
            (Symbol::new(env, "CampaignCreated"), campaign_id),
            artist.clone(),
        );

        Ok(campaign_id)
    }

    fn validate_tiers(tiers: &Vec<Tier>) -> Result<(), Error> {
        if tiers.is_empty() {
            return Err(Error::NoTiersProvided);
        }
        let mut previous_threshold: Option<i128> = None;
        for tier in tiers.iter() {
            if tier.profit_percent == 0 {
                return Err(Error::InvalidTierProfitPercent);
            }
            if let Some(prev) = previous_threshold {
                if tier.threshold <= prev {
                    return Err(Error::TiersNotAscending);
                }
            }
            previous_threshold = Some(tier.threshold);
        }
        Ok(())
    }

    // Admin operations

    pub fn set_platform_wallet(env: &Env, caller: &Address, wallet: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        env.storage().instance().set(&DataKey::PlatformWallet, wallet);
        Ok(())
    }

    pub fn set_campaign_creation_fee(env: &Env, caller: &Address, fee: i128) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        env.storage().instance().set(&DataKey::CreationFee, &fee);
        Ok(())
    }

    pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        env.storage().instance().set(&DataKey::Owner, new_owner);
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        if *caller != owner {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    // Views

    pub fn campaign_exists(env: &Env, campaign_id: u32) -> bool {
        env.storage().persistent().has(&DataKey::Campaign(campaign_id))
    }

    pub fn artist_campaigns(env: &Env, artist: &Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::ArtistCampaigns(artist.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn total_campaigns(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::NextCampaignId)
            .unwrap_or(0)
    }

    pub fn owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn artist_identity(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::ArtistIdentity)
            .ok_or(Error::NotInitialized)
    }

    pub fn currency(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Currency)
            .ok_or(Error::NotInitialized)
    }

    pub fn platform_wallet(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PlatformWallet)
            .ok_or(Error::NotInitialized)
    }

    pub fn creation_fee(env: &Env) -> Result<i128, Error> {
        env.storage()
            .instance()
            .get(&DataKey::CreationFee)
            .ok_or(Error::NotInitialized)
    }
}
