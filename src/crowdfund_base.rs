multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{CrowdfundLifecycle, ProcessedContribution};

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================
// Crowdfund base: lifecycle, conversion math, contribution rules
// ============================================================

#[multiversx_sc::module]
pub trait CrowdfundBaseModule:
    crate::storage::StorageModule + crate::events::EventsModule
{
    #[view(getCrowdfundLifecycle)]
    fn get_crowdfund_lifecycle(&self) -> CrowdfundLifecycle {
        if self.party().is_empty() {
            return CrowdfundLifecycle::Invalid;
        }
        if self.finalized().get() {
            return CrowdfundLifecycle::Finalized;
        }

        let total = self.total_contributions().get();
        if total >= self.max_total_contributions().get() {
            return CrowdfundLifecycle::Won;
        }

        let now = self.blockchain().get_block_timestamp();
        if now >= self.expiry().get() {
            if total >= self.min_total_contributions().get() {
                CrowdfundLifecycle::Won
            } else {
                CrowdfundLifecycle::Lost
            }
        } else {
            CrowdfundLifecycle::Active
        }
    }

    /// Inverse of the contribution → voting power mapping. Yields the
    /// contribution net of the funding split.
    #[view(convertVotingPowerToContribution)]
    fn convert_voting_power_to_contribution(&self, voting_power: BigUint) -> BigUint {
        (voting_power * BPS_DENOMINATOR) / self.exchange_rate_bps().get()
    }

    #[view(convertContributionToVotingPower)]
    fn convert_contribution_to_voting_power(&self, amount: BigUint) -> BigUint {
        self.calculate_contribution_to_voting_power(&amount)
    }

    fn calculate_contribution_to_voting_power(&self, amount: &BigUint) -> BigUint {
        let net = amount - &self.funding_split_of(amount);
        (net * self.exchange_rate_bps().get()) / BPS_DENOMINATOR
    }

    /// Share of `amount` owed to the funding split recipient, rounded down.
    fn funding_split_of(&self, amount: &BigUint) -> BigUint {
        (amount * &BigUint::from(self.funding_split_bps().get())) / BPS_DENOMINATOR
    }

    /// Grosses a net-of-split amount back up, rounding up.
    fn add_back_funding_split(&self, net: BigUint) -> BigUint {
        let kept_bps = BPS_DENOMINATOR - self.funding_split_bps().get();
        (net * BPS_DENOMINATOR + (kept_bps - 1)) / kept_bps
    }

    fn process_contribution(
        &self,
        contributor: &ManagedAddress,
        delegate: &ManagedAddress,
        amount: &BigUint,
    ) -> ProcessedContribution<Self::Api> {
        let sender = self.blockchain().get_caller();

        // Only the contributor can replace an existing delegate
        let delegation = self.delegation_of(contributor);
        let delegate = if sender == *contributor || delegation.is_empty() {
            delegation.set(delegate);
            delegate.clone()
        } else {
            delegation.get()
        };

        self.contributed_event(&sender, contributor, &delegate, amount);

        if *amount == 0u64 {
            return ProcessedContribution {
                voting_power: BigUint::zero(),
                accepted: BigUint::zero(),
                excess: BigUint::zero(),
                reached_max: false,
            };
        }

        require!(
            self.get_crowdfund_lifecycle() == CrowdfundLifecycle::Active,
            ERR_WRONG_LIFECYCLE
        );
        require!(
            *amount >= self.min_contribution().get(),
            ERR_BELOW_MIN_CONTRIBUTION
        );
        require!(
            *amount <= self.max_contribution().get(),
            ERR_ABOVE_MAX_CONTRIBUTION
        );

        let max_total = self.max_total_contributions().get();
        let new_total = self.total_contributions().get() + amount;

        let (accepted, excess, reached_max) = if new_total >= max_total {
            let excess = &new_total - &max_total;
            self.total_contributions().set(&max_total);
            (amount - &excess, excess, true)
        } else {
            self.total_contributions().set(&new_total);
            (amount.clone(), BigUint::zero(), false)
        };

        let voting_power = self.calculate_contribution_to_voting_power(&accepted);
        require!(voting_power > 0u64, ERR_ZERO_VOTING_POWER);

        ProcessedContribution {
            voting_power,
            accepted,
            excess,
            reached_max,
        }
    }

    /// Owner of a party card, or `None` once it is burned.
    fn card_owner(&self, token_id: u64) -> Option<ManagedAddress> {
        let owner: OptionalValue<ManagedAddress> = self
            .tx()
            .to(&self.party().get())
            .typed(crate::party_proxy::PartyProxy)
            .owner_of(token_id)
            .returns(ReturnsResult)
            .sync_call();
        owner.into_option()
    }

    fn card_voting_power(&self, token_id: u64) -> BigUint {
        self.tx()
            .to(&self.party().get())
            .typed(crate::party_proxy::PartyProxy)
            .voting_power_by_token_id(token_id)
            .returns(ReturnsResult)
            .sync_call()
    }
}
