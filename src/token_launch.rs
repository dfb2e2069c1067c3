multiversx_sc::imports!();

use crate::errors::*;
use crate::token_creator_proxy::TokenCreatorProxy;
use crate::types::{CrowdfundLifecycle, Erc20LaunchOptions};

/// Floor for the LP allocation of a launched token.
pub const MIN_TOKENS_FOR_LP: u64 = 10_000;

/// Upper bound on the funding split when a token is launched (50%).
pub const MAX_LAUNCH_FUNDING_SPLIT_BPS: u64 = 5_000;

/// Floor for the minimum total contributions when a token is launched.
pub const MIN_LAUNCH_TOTAL_CONTRIBUTIONS: u64 = 10_000;

#[multiversx_sc::module]
pub trait TokenLaunchModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::crowdfund_base::CrowdfundBaseModule
{
    #[endpoint(launchToken)]
    fn launch_token(&self) -> TokenIdentifier {
        require!(!self.is_token_launched().get(), ERR_TOKEN_ALREADY_LAUNCHED);
        require!(
            !self.token_launch_options().is_empty(),
            ERR_TOKEN_LAUNCH_NOT_CONFIGURED
        );
        require!(
            self.get_crowdfund_lifecycle() == CrowdfundLifecycle::Finalized,
            ERR_WRONG_LIFECYCLE
        );

        self.launch_token_internal()
    }

    fn validate_token_distribution(
        &self,
        opts: &Erc20LaunchOptions<Self::Api>,
        funding_split_bps: u64,
        min_total_contributions: &BigUint,
    ) {
        let allocated = &opts.num_tokens_for_distribution
            + &opts.num_tokens_for_recipient
            + &opts.num_tokens_for_lp;
        require!(
            allocated == opts.total_supply
                && opts.num_tokens_for_lp >= MIN_TOKENS_FOR_LP
                && funding_split_bps <= MAX_LAUNCH_FUNDING_SPLIT_BPS
                && *min_total_contributions >= MIN_LAUNCH_TOTAL_CONTRIBUTIONS,
            ERR_INVALID_TOKEN_DISTRIBUTION
        );
    }

    fn launch_token_internal(&self) -> TokenIdentifier {
        require!(!self.is_token_launched().get(), ERR_TOKEN_ALREADY_LAUNCHED);
        self.is_token_launched().set(true);

        let opts = self.token_launch_options().get();
        let lp_fee_recipient = opts.lp_fee_recipient.clone();
        let total = self.total_contributions().get();
        let net_contribution = &total - &self.funding_split_of(&total);
        let party = self.party().get();

        let token: TokenIdentifier = self
            .tx()
            .to(&self.token_creator().get())
            .typed(TokenCreatorProxy)
            .create_token(&party, lp_fee_recipient, opts)
            .egld(&net_contribution)
            .returns(ReturnsResult)
            .sync_call();

        self.launched_token().set(&token);
        self.token_launched_event(&party, &token, &net_contribution);

        token
    }
}
