multiversx_sc::imports!();

use crate::errors::*;
use crate::party_proxy::PartyProxy;
use crate::types::CrowdfundLifecycle;

#[multiversx_sc::module]
pub trait FinalizeModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::crowdfund_base::CrowdfundBaseModule
    + crate::token_launch::TokenLaunchModule
{
    /// Settles a won crowdfund. A party host may settle early once the
    /// minimum total is reached.
    #[endpoint(finalize)]
    fn finalize(&self) {
        let lifecycle = self.get_crowdfund_lifecycle();
        if lifecycle == CrowdfundLifecycle::Active {
            let caller = self.blockchain().get_caller();
            require!(self.hosts().contains(&caller), ERR_ONLY_HOST);
            require!(
                self.total_contributions().get() >= self.min_total_contributions().get(),
                ERR_MIN_TOTAL_NOT_REACHED
            );
        } else {
            require!(lifecycle == CrowdfundLifecycle::Won, ERR_WRONG_LIFECYCLE);
        }

        self.finalize_internal();
    }

    fn finalize_internal(&self) {
        self.finalized().set(true);

        let total = self.total_contributions().get();
        let party = self.party().get();
        let total_voting_power = self.calculate_contribution_to_voting_power(&total);
        self.tx()
            .to(&party)
            .typed(PartyProxy)
            .increase_total_voting_power(&total_voting_power)
            .sync_call();

        self.finalized_event(&total);

        if self.token_launch_options().is_empty() {
            let net_contribution = &total - &self.funding_split_of(&total);
            if net_contribution > 0u64 {
                self.tx()
                    .to(&party)
                    .typed(PartyProxy)
                    .receive_contributions()
                    .egld(&net_contribution)
                    .sync_call();
            }
        } else {
            self.launch_token_internal();
        }

        self.send_funding_split(&total);
    }

    fn send_funding_split(&self, total: &BigUint) {
        if self.funding_split_paid().get() || self.funding_split_bps().get() == 0 {
            return;
        }
        self.funding_split_paid().set(true);

        let amount = self.funding_split_of(total);
        if amount == 0u64 {
            return;
        }

        let recipient = self.funding_split_recipient().get();
        self.send().direct_egld(&recipient, &amount);
        self.funding_split_sent_event(&recipient, &amount);
    }
}
