multiversx_sc::imports!();

use crate::token_creator_proxy::TokenCreatorProxy;
use crate::types::{Angel, ClaimInfo, DistributionInfo};

// ============================================================
// VIEWS: read-only reconstruction from party cards
//
// Unpaged scans cost gas linear in `latestTokenId`. On-chain
// callers should use the paged variants.
// ============================================================

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::crowdfund_base::CrowdfundBaseModule
{
    /// Contribution behind a card, grossed up for the funding split.
    #[view(getMyContributionOf)]
    fn get_my_contribution_of(&self, token_id: u64) -> BigUint {
        let voting_power = self.card_voting_power(token_id);
        let net = self.convert_voting_power_to_contribution(voting_power);
        self.add_back_funding_split(net)
    }

    #[view(getMyTotalContributionOf)]
    fn get_my_total_contribution_of(&self, contributor: ManagedAddress) -> BigUint {
        let mut total = BigUint::zero();
        for token_id in 1..=self.latest_token_id().get() {
            if self.card_owner(token_id).as_ref() == Some(&contributor) {
                total += self.get_my_contribution_of(token_id);
            }
        }
        total
    }

    #[view(getAngelList)]
    fn get_angel_list(&self) -> ManagedVec<Angel<Self::Api>> {
        self.get_angel_list_page(1, self.latest_token_id().get())
    }

    /// Angels for cards `from..from + count`. Burned cards are skipped.
    #[view(getAngelListPage)]
    fn get_angel_list_page(&self, from: u64, count: u64) -> ManagedVec<Angel<Self::Api>> {
        let mut angels = ManagedVec::new();
        let latest = self.latest_token_id().get();
        if count == 0 || latest == 0 {
            return angels;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > latest {
            return angels;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), latest);

        for token_id in start..=end {
            if let Some(wallet_address) = self.card_owner(token_id) {
                angels.push(Angel {
                    wallet_address,
                    amount: self.get_my_contribution_of(token_id),
                });
            }
        }
        angels
    }

    #[view(getCardsOf)]
    fn get_cards_of(&self, contributor: ManagedAddress, from: u64, count: u64) -> ManagedVec<u64> {
        let mut token_ids = ManagedVec::new();
        let latest = self.latest_token_id().get();
        if count == 0 || latest == 0 {
            return token_ids;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > latest {
            return token_ids;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), latest);

        for token_id in start..=end {
            if self.card_owner(token_id).as_ref() == Some(&contributor) {
                token_ids.push(token_id);
            }
        }
        token_ids
    }

    #[view(getClaimInfo)]
    fn get_claim_info(&self, contributor: ManagedAddress) -> ClaimInfo<Self::Api> {
        let distribution = if self.is_token_launched().get() {
            let info: DistributionInfo<Self::Api> = self
                .tx()
                .to(&self.token_creator().get())
                .typed(TokenCreatorProxy)
                .get_distribution_info(&self.party().get(), &self.launched_token().get())
                .returns(ReturnsResult)
                .sync_call();
            Some(info)
        } else {
            None
        };

        ClaimInfo {
            distribution,
            token_ids: self.get_cards_of(contributor, 1, self.latest_token_id().get()),
        }
    }
}
