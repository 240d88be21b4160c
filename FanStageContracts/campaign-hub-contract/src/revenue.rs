use crate::funding::FundingManager;
use crate::registry::Registry;
use crate::types::{CampaignStatus, DataKey, Error};
use soroban_sdk::{token, Address, Env, Symbol};

/// Revenue submission and pull-based claiming. Distribution is integer
/// multiply-then-divide with truncation toward zero, so the sum of shares
/// never exceeds the earmarked pool.
pub struct RevenueManager;

impl RevenueManager {
    /// Single-shot: pulls `amount` from the artist, earmarks the funder pool,
    /// returns the remainder to the artist, credits each funder's claimable
    /// balance pro-rata by `total_funded * tier_profit_percent`, and closes
    /// the campaign.
    pub fn submit_revenue(
        env: &Env,
        artist: &Address,
        campaign_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        artist.require_auth();

        let mut campaign = FundingManager::get_campaign(env, campaign_id)?;
        if *artist != campaign.artist {
            return Err(Error::NotCampaignArtist);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if campaign.status == CampaignStatus::Completed {
            return Err(Error::CampaignClosed);
        }

        let currency = Registry::currency(env)?;
        let currency_client = token::Client::new(env, &currency);
        currency_client.transfer(artist, &env.current_contract_address(), &amount);

        let pool = amount
            .checked_mul(campaign.funder_share_percent as i128)
            .ok_or(Error::MathOverflow)?
            / 100;

        let tiers = FundingManager::tiers(env, campaign_id)?;
        let funders = FundingManager::funders(env, campaign_id);

        let mut total_weight: i128 = 0;
        for funder in funders.iter() {
            let info = FundingManager::funder_info(env, campaign_id, &funder);
            total_weight = total_weight
                .checked_add(Self::weight_of(&info, &tiers)?)
                .ok_or(Error::MathOverflow)?;
        }

        let artist_share = if total_weight > 0 {
            for funder in funders.iter() {
                let mut info = FundingManager::funder_info(env, campaign_id, &funder);
                let weight = Self::weight_of(&info, &tiers)?;
                if weight == 0 {
                    continue;
                }
                let share = pool
                    .checked_mul(weight)
                    .ok_or(Error::MathOverflow)?
                    / total_weight;
                info.claimable_revenue = info
                    .claimable_revenue
                    .checked_add(share)
                    .ok_or(Error::MathOverflow)?;
                env.storage()
                    .persistent()
                    .set(&DataKey::Funder(campaign_id, funder.clone()), &info);
            }
            // Truncation dust stays in the contract: the pool is never
            // over-distributed.
            amount - pool
        } else {
            // Nobody reached a tier; the whole amount goes back.
            amount
        };

        if artist_share > 0 {
            currency_client.transfer(&env.current_contract_address(), artist, &artist_share);
        }

        campaign.total_revenue = amount;
        campaign.status = CampaignStatus::Completed;
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);

        env.events().publish(
            (Symbol::new(env, "RevenueSubmitted"), campaign_id),
            amount,
        );
        env.events().publish(
            (Symbol::new(env, "StatusChanged"), campaign_id),
            CampaignStatus::Completed,
        );

        Ok(())
    }

    /// Pull-based claim. The claimable balance is zeroed in storage before
    /// the outbound transfer.
    pub fn claim_revenue(env: &Env, funder: &Address, campaign_id: u32) -> Result<(), Error> {
        funder.require_auth();

        // Campaign must exist; claiming is otherwise status-independent.
        FundingManager::get_campaign(env, campaign_id)?;

        let mut info = FundingManager::funder_info(env, campaign_id, funder);
        if info.claimable_revenue == 0 {
            return Err(Error::NothingToClaim);
        }
        let payout = info.claimable_revenue;
        info.claimable_revenue = 0;
        env.storage()
            .persistent()
            .set(&DataKey::Funder(campaign_id, funder.clone()), &info);

        let currency = Registry::currency(env)?;
        token::Client::new(env, &currency).transfer(
            &env.current_contract_address(),
            funder,
            &payout,
        );

        env.events().publish(
            (Symbol::new(env, "RevenueClaimed"), campaign_id, funder.clone()),
            payout,
        );

        Ok(())
    }

    fn weight_of(
        info: &crate::types::FunderInfo,
        tiers: &soroban_sdk::Vec<crate::types::Tier>,
    ) -> Result<i128, Error> {
        match info.highest_tier {
            Some(index) => {
                let tier = tiers.get(index).ok_or(Error::CampaignNotFound)?;
                info.total_funded
                    .checked_mul(tier.profit_percent as i128)
                    .ok_or(Error::MathOverflow)
            }
            None => Ok(0),
        }
    }
}
