multiversx_sc::imports!();

use crate::errors::*;
use crate::party_proxy::PartyProxy;
use crate::types::CrowdfundLifecycle;

#[multiversx_sc::module]
pub trait RefundModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::crowdfund_base::CrowdfundBaseModule
{
    // ========================================================
    // ENDPOINT: refund
    // Lost crowdfunds only. Anyone can trigger it, funds go to the card owner.
    // ========================================================

    #[endpoint(refund)]
    fn refund(&self, token_id: u64) -> BigUint {
        match self.try_refund(token_id) {
            Ok(amount) => amount,
            Err(err) => sc_panic!(err.message()),
        }
    }

    // ========================================================
    // ENDPOINT: refundOf
    // Refunds every card of one contributor. A failing card is
    // reported through `refundError` and the scan continues.
    // ========================================================

    #[endpoint(refundOf)]
    fn refund_of(&self, contributor: ManagedAddress) -> BigUint {
        require!(
            self.get_crowdfund_lifecycle() == CrowdfundLifecycle::Lost,
            ERR_WRONG_LIFECYCLE
        );

        let mut refunded = BigUint::zero();
        for token_id in 1..=self.latest_token_id().get() {
            if self.card_owner(token_id).as_ref() != Some(&contributor) {
                continue;
            }
            match self.try_refund(token_id) {
                Ok(amount) => refunded += amount,
                Err(err) => {
                    self.refund_error_event(token_id, &contributor, &ManagedBuffer::from(err.message()))
                },
            }
        }
        refunded
    }

    // ========================================================
    // ENDPOINT: batchRefund
    // ========================================================

    #[endpoint(batchRefund)]
    fn batch_refund(&self, token_ids: ManagedVec<u64>, revert_on_failure: bool) -> ManagedVec<BigUint> {
        self.batch_refund_internal(&token_ids, revert_on_failure)
    }

    // ========================================================
    // ENDPOINT: batchRefundOfLost
    // One-shot sweep over every card ever minted.
    // ========================================================

    #[endpoint(batchRefundOfLost)]
    fn batch_refund_of_lost(&self) -> ManagedVec<BigUint> {
        require!(
            !self.is_batch_refund_of_lost().get(),
            ERR_ALREADY_BATCH_REFUNDED
        );
        require!(
            self.get_crowdfund_lifecycle() == CrowdfundLifecycle::Lost,
            ERR_WRONG_LIFECYCLE
        );
        self.is_batch_refund_of_lost().set(true);

        let latest_token_id = self.latest_token_id().get();
        let mut token_ids = ManagedVec::new();
        for token_id in 1..=latest_token_id {
            token_ids.push(token_id);
        }

        let amounts = self.batch_refund_internal(&token_ids, false);
        self.batch_refund_of_lost_event(latest_token_id);
        amounts
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn batch_refund_internal(
        &self,
        token_ids: &ManagedVec<u64>,
        revert_on_failure: bool,
    ) -> ManagedVec<BigUint> {
        let mut amounts = ManagedVec::new();
        for token_id in token_ids.iter() {
            match self.try_refund(token_id) {
                Ok(amount) => amounts.push(amount),
                Err(err) => {
                    if revert_on_failure {
                        sc_panic!(err.message());
                    }
                    amounts.push(BigUint::zero());
                },
            }
        }
        amounts
    }

    fn try_refund(&self, token_id: u64) -> Result<BigUint, RefundError> {
        if self.get_crowdfund_lifecycle() != CrowdfundLifecycle::Lost {
            return Err(RefundError::WrongLifecycle);
        }

        let voting_power = self.card_voting_power(token_id);
        let net = self.convert_voting_power_to_contribution(voting_power);
        let grossed_up = self.add_back_funding_split(net);

        // The split was never paid out, so it goes back too. Rounding can
        // overshoot, the card's own intake caps it.
        let taken_in = self.card_contribution(token_id).get();
        let amount = if grossed_up > taken_in { taken_in } else { grossed_up };
        if amount == 0u64 {
            return Ok(amount);
        }

        let contributor = self.card_owner(token_id).ok_or(RefundError::UnknownCard)?;

        // Burn before paying out
        self.tx()
            .to(&self.party().get())
            .typed(PartyProxy)
            .burn(token_id)
            .sync_call();
        self.card_contribution(token_id).clear();
        self.send().direct_egld(&contributor, &amount);
        self.refunded_event(&contributor, token_id, &amount);

        Ok(amount)
    }
}
