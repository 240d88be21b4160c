use crate::artist_token::TokenLedger;
use crate::badges::BadgeLedger;
use crate::types::{Campaign, CampaignStatus, DataKey, Error, FunderInfo, Tier};
use soroban_sdk::{token, Address, Env, Symbol, Vec};

/// The funding side of the campaign state machine: contributions, tier
/// qualification, and all-or-nothing refunds.
pub struct FundingManager;

impl FundingManager {
    pub fn fund(env: &Env, funder: &Address, campaign_id: u32, amount: i128) -> Result<(), Error> {
        funder.require_auth();

        let mut campaign = Self::get_campaign(env, campaign_id)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if campaign.status == CampaignStatus::Completed {
            return Err(Error::CampaignClosed);
        }

        // Pull the currency before minting anything against it.
        let currency = crate::registry::Registry::currency(env)?;
        token::Client::new(env, &currency).transfer(
            funder,
            &env.current_contract_address(),
            &amount,
        );

        TokenLedger::mint(env, campaign_id, funder, amount)?;

        let mut info = Self::funder_info(env, campaign_id, funder);
        let is_new_funder = info.total_funded == 0;
        info.total_funded = info
            .total_funded
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;

        // Ascending scan over the (small) tier ladder: a single contribution
        // may cross several thresholds at once.
        let tiers = Self::tiers(env, campaign_id)?;
        for (index, tier) in tiers.iter().enumerate() {
            let index = index as u32;
            if info.total_funded >= tier.threshold
                && !BadgeLedger::has_badge(env, campaign_id, funder, crate::types::tier_badge_id(index))
            {
                BadgeLedger::mint_tier_badge(env, campaign_id, funder, index);
                info.highest_tier = Some(index);
            }
        }

        env.storage()
            .persistent()
            .set(&DataKey::Funder(campaign_id, funder.clone()), &info);

        if is_new_funder {
            let mut funders = Self::funders(env, campaign_id);
            funders.push_back(funder.clone());
            env.storage()
                .persistent()
                .set(&DataKey::Funders(campaign_id), &funders);
        }

        campaign.total_raised = campaign
            .total_raised
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        if campaign.status == CampaignStatus::Ongoing
            && campaign.total_raised >= campaign.target_amount
        {
            campaign.status = CampaignStatus::Funded;
            env.events().publish(
                (Symbol::new(env, "StatusChanged"), campaign_id),
                CampaignStatus::Funded,
            );
        }
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);

        env.events().publish(
            (Symbol::new(env, "Funded"), campaign_id, funder.clone()),
            amount,
        );

        Ok(())
    }

    /// All-or-nothing: returns the funder's whole contribution, burns their
    /// artist tokens and tier badges, and drops them from the roster. May
    /// regress a Funded campaign back to Ongoing.
    pub fn refund(env: &Env, funder: &Address, campaign_id: u32) -> Result<(), Error> {
        funder.require_auth();

        let mut campaign = Self::get_campaign(env, campaign_id)?;
        if campaign.status == CampaignStatus::Completed {
            return Err(Error::RefundNotAvailable);
        }

        let info = Self::funder_info(env, campaign_id, funder);
        if info.total_funded == 0 {
            return Err(Error::NothingToRefund);
        }
        let refund_amount = info.total_funded;

        TokenLedger::burn_all(env, campaign_id, funder)?;

        let tiers = Self::tiers(env, campaign_id)?;
        BadgeLedger::burn_tier_badges(env, campaign_id, funder, &tiers);

        env.storage()
            .persistent()
            .remove(&DataKey::Funder(campaign_id, funder.clone()));
        let mut funders = Self::funders(env, campaign_id);
        if let Some(index) = funders.first_index_of(funder) {
            funders.remove(index);
            env.storage()
                .persistent()
                .set(&DataKey::Funders(campaign_id), &funders);
        }

        campaign.total_raised = campaign
            .total_raised
            .checked_sub(refund_amount)
            .ok_or(Error::MathOverflow)?;
        if campaign.status == CampaignStatus::Funded
            && campaign.total_raised < campaign.target_amount
        {
            campaign.status = CampaignStatus::Ongoing;
            env.events().publish(
                (Symbol::new(env, "StatusChanged"), campaign_id),
                CampaignStatus::Ongoing,
            );
        }
        env.storage()
            .persistent()
            .set(&DataKey::Campaign(campaign_id), &campaign);

        // State is settled; now pay out.
        let currency = crate::registry::Registry::currency(env)?;
        token::Client::new(env, &currency).transfer(
            &env.current_contract_address(),
            funder,
            &refund_amount,
        );

        env.events().publish(
            (Symbol::new(env, "Refunded"), campaign_id, funder.clone()),
            refund_amount,
        );

        Ok(())
    }

    pub fn get_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
            .ok_or(Error::CampaignNotFound)
    }

    pub fn tiers(env: &Env, campaign_id: u32) -> Result<Vec<Tier>, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Tiers(campaign_id))
            .ok_or(Error::CampaignNotFound)
    }

    pub fn funder_info(env: &Env, campaign_id: u32, funder: &Address) -> FunderInfo {
        env.storage()
            .persistent()
            .get(&DataKey::Funder(campaign_id, funder.clone()))
            .unwrap_or(FunderInfo {
                total_funded: 0,
                highest_tier: None,
                claimable_revenue: 0,
            })
    }

    pub fn funders(env: &Env, campaign_id: u32) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Funders(campaign_id))
            .unwrap_or_else(|| Vec::new(env))
    }
}
