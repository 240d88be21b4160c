use crate::types::{tier_badge_id, DataKey, CAMPAIGN_NFT_ID};
use soroban_sdk::{Address, Env, Symbol, Vec};

/// Tier badge and campaign NFT ownership. Badges are a binary hold/not-hold
/// relation per (campaign, holder, badge id); there is no transfer path.
pub struct BadgeLedger;

impl BadgeLedger {
    /// Mints the reserved campaign NFT (badge id 0) to the artist.
    pub fn mint_campaign_nft(env: &Env, campaign_id: u32, artist: &Address) {
        env.storage().persistent().set(
            &DataKey::Badge(campaign_id, artist.clone(), CAMPAIGN_NFT_ID),
            &true,
        );
    }

    pub fn mint_tier_badge(env: &Env, campaign_id: u32, funder: &Address, tier_index: u32) {
        let badge_id = tier_badge_id(tier_index);
        env.storage().persistent().set(
            &DataKey::Badge(campaign_id, funder.clone(), badge_id),
            &true,
        );
        env.events().publish(
            (Symbol::new(env, "TierBadgeMinted"), campaign_id, funder.clone()),
            badge_id,
        );
    }

    pub fn has_badge(env: &Env, campaign_id: u32, holder: &Address, badge_id: u32) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Badge(campaign_id, holder.clone(), badge_id))
            .unwrap_or(false)
    }

    /// Burns every tier badge the funder holds. The campaign NFT (artist's)
    /// is untouched: it is not part of the funder ladder.
    pub fn burn_tier_badges(env: &Env, campaign_id: u32, funder: &Address, tiers: &Vec<crate::types::Tier>) {
        for index in 0..tiers.len() {
            let key = DataKey::Badge(campaign_id, funder.clone(), tier_badge_id(index));
            if env.storage().persistent().has(&key) {
                env.storage().persistent().remove(&key);
            }
        }
    }
}
