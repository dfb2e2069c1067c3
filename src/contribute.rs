multiversx_sc::imports!();

use crate::errors::*;
use crate::gatekeeper_proxy::GateKeeperProxy;
use crate::party_proxy::PartyProxy;
use crate::types::{BatchContributeArgs, BatchContributeForArgs};

#[multiversx_sc::module]
pub trait ContributeModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::crowdfund_base::CrowdfundBaseModule
    + crate::token_launch::TokenLaunchModule
    + crate::finalize::FinalizeModule
{
    // ========================================================
    // ENDPOINT: contribute
    // Mints a new card for the caller.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(contribute)]
    fn contribute(&self, delegate: ManagedAddress, gate_data: ManagedBuffer) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.contribute_internal(&caller, &delegate, amount, 0, &gate_data)
    }

    // ========================================================
    // ENDPOINT: contributeToCard
    // Adds to a card the caller owns. Token ID 0 mints a new card.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(contributeToCard)]
    fn contribute_to_card(
        &self,
        token_id: u64,
        delegate: ManagedAddress,
        gate_data: ManagedBuffer,
    ) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.contribute_internal(&caller, &delegate, amount, token_id, &gate_data)
    }

    // ========================================================
    // ENDPOINT: contributeFor
    // The gatekeeper checks the caller, the card goes to the recipient.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(contributeFor)]
    fn contribute_for(
        &self,
        token_id: u64,
        recipient: ManagedAddress,
        initial_delegate: ManagedAddress,
        gate_data: ManagedBuffer,
    ) -> BigUint {
        let amount = self.call_value().egld_value().clone_value();
        self.contribute_internal(&recipient, &initial_delegate, amount, token_id, &gate_data)
    }

    // ========================================================
    // ENDPOINT: batchContribute
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(batchContribute)]
    fn batch_contribute(&self, args: BatchContributeArgs<Self::Api>) -> ManagedVec<BigUint> {
        let item_count = args.token_ids.len();
        require!(
            args.values.len() == item_count && args.gate_datas.len() == item_count,
            ERR_ARITY_MISMATCH
        );
        self.require_exact_batch_value(&args.values);

        let caller = self.blockchain().get_caller();
        let mut voting_powers = ManagedVec::new();
        for i in 0..item_count {
            let voting_power = self.contribute_internal(
                &caller,
                &args.delegate,
                args.values.get(i).clone_value(),
                args.token_ids.get(i),
                &args.gate_datas.get(i),
            );
            voting_powers.push(voting_power);
        }
        voting_powers
    }

    // ========================================================
    // ENDPOINT: batchContributeFor
    // Any failing item aborts the whole batch.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(batchContributeFor)]
    fn batch_contribute_for(&self, args: BatchContributeForArgs<Self::Api>) -> ManagedVec<BigUint> {
        let item_count = args.token_ids.len();
        require!(
            args.recipients.len() == item_count
                && args.initial_delegates.len() == item_count
                && args.values.len() == item_count
                && args.gate_datas.len() == item_count,
            ERR_ARITY_MISMATCH
        );
        self.require_exact_batch_value(&args.values);

        let mut voting_powers = ManagedVec::new();
        for i in 0..item_count {
            let voting_power = self.contribute_internal(
                &args.recipients.get(i),
                &args.initial_delegates.get(i),
                args.values.get(i).clone_value(),
                args.token_ids.get(i),
                &args.gate_datas.get(i),
            );
            voting_powers.push(voting_power);
        }
        voting_powers
    }

    fn require_exact_batch_value(&self, values: &ManagedVec<BigUint>) {
        let mut expected = BigUint::zero();
        for value in values.iter() {
            expected += &*value;
        }
        require!(
            expected == *self.call_value().egld_value(),
            ERR_INVALID_MESSAGE_VALUE
        );
    }

    // ========================================================
    // INTERNAL: shared contribution path
    // ========================================================

    fn contribute_internal(
        &self,
        contributor: &ManagedAddress,
        delegate: &ManagedAddress,
        amount: BigUint,
        token_id: u64,
        gate_data: &ManagedBuffer,
    ) -> BigUint {
        require!(!delegate.is_zero(), ERR_INVALID_DELEGATE);

        // The gatekeeper vets the sender, not the contributor
        let sender = self.blockchain().get_caller();
        if !self.gatekeeper().is_empty() {
            let allowed: bool = self
                .tx()
                .to(&self.gatekeeper().get())
                .typed(GateKeeperProxy)
                .is_allowed(&sender, &self.gatekeeper_id().get(), gate_data)
                .returns(ReturnsResult)
                .sync_call();
            require!(allowed, ERR_NOT_ALLOWED_BY_GATEKEEPER);
        }

        let processed = self.process_contribution(contributor, delegate, &amount);
        if processed.voting_power == 0u64 {
            return processed.voting_power;
        }

        let party = self.party().get();
        if token_id == 0 {
            let new_token_id: u64 = self
                .tx()
                .to(&party)
                .typed(PartyProxy)
                .mint(contributor, &processed.voting_power, &self.delegation_of(contributor).get())
                .returns(ReturnsResult)
                .sync_call();
            if new_token_id > self.latest_token_id().get() {
                self.latest_token_id().set(new_token_id);
            }
            self.card_contribution(new_token_id).set(&processed.accepted);
        } else {
            require!(
                !self.disable_contributing_for_existing_card().get(),
                ERR_EXISTING_CARD_DISABLED
            );
            require!(
                self.card_owner(token_id).as_ref() == Some(contributor),
                ERR_NOT_OWNER
            );
            self.tx()
                .to(&party)
                .typed(PartyProxy)
                .increase_voting_power(token_id, &processed.voting_power)
                .sync_call();
            self.card_contribution(token_id)
                .update(|total| *total += &processed.accepted);
        }

        if processed.reached_max {
            self.finalize_internal();
        }

        if processed.excess > 0u64 {
            self.send().direct_egld(&sender, &processed.excess);
            self.excess_contribution_returned_event(&sender, &processed.excess);
        }

        processed.voting_power
    }
}
