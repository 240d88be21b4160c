use crate::types::{ArtistToken, DataKey, Error};
use soroban_sdk::{Address, Env, String};

/// Per-campaign artist-token ledger. Only the funding module mints and
/// burns; supply therefore tracks the campaign's total_raised exactly.
pub struct TokenLedger;

impl TokenLedger {
    pub fn create(env: &Env, campaign_id: u32, name: String) {
        let token = ArtistToken {
            name,
            total_supply: 0,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Token(campaign_id), &token);
    }

    pub fn mint(env: &Env, campaign_id: u32, to: &Address, amount: i128) -> Result<(), Error> {
        let mut token = Self::get(env, campaign_id)?;
        token.total_supply = token
            .total_supply
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        env.storage()
            .persistent()
            .set(&DataKey::Token(campaign_id), &token);

        let balance = Self::balance(env, campaign_id, to)
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        env.storage()
            .persistent()
            .set(&DataKey::TokenBalance(campaign_id, to.clone()), &balance);
        Ok(())
    }

    /// Burns the holder's entire balance and returns the amount burned.
    pub fn burn_all(env: &Env, campaign_id: u32, from: &Address) -> Result<i128, Error> {
        let balance = Self::balance(env, campaign_id, from);
        let mut token = Self::get(env, campaign_id)?;
        token.total_supply = token
            .total_supply
            .checked_sub(balance)
            .ok_or(Error::MathOverflow)?;
        env.storage()
            .persistent()
            .set(&DataKey::Token(campaign_id), &token);
        env.storage()
            .persistent()
            .remove(&DataKey::TokenBalance(campaign_id, from.clone()));
        Ok(balance)
    }

    pub fn get(env: &Env, campaign_id: u32) -> Result<ArtistToken, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Token(campaign_id))
            .ok_or(Error::CampaignNotFound)
    }

    pub fn balance(env: &Env, campaign_id: u32, holder: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::TokenBalance(campaign_id, holder.clone()))
            .unwrap_or(0)
    }
}
