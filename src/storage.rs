multiversx_sc::imports!();

use crate::types::Erc20LaunchOptions;

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Party ──

    #[view(getParty)]
    #[storage_mapper("party")]
    fn party(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("hosts")]
    fn hosts(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Highest card ID minted through this crowdfund.
    #[view(getLatestTokenId)]
    #[storage_mapper("latestTokenId")]
    fn latest_token_id(&self) -> SingleValueMapper<u64>;

    // ── Lifecycle ──

    #[view(getExpiry)]
    #[storage_mapper("expiry")]
    fn expiry(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("finalized")]
    fn finalized(&self) -> SingleValueMapper<bool>;

    // ── Contribution rules ──

    #[view(getTotalContributions)]
    #[storage_mapper("totalContributions")]
    fn total_contributions(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("minContribution")]
    fn min_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxContribution")]
    fn max_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("minTotalContributions")]
    fn min_total_contributions(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxTotalContributions")]
    fn max_total_contributions(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("exchangeRateBps")]
    fn exchange_rate_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("disableContributingForExistingCard")]
    fn disable_contributing_for_existing_card(&self) -> SingleValueMapper<bool>;

    #[view(getDelegationOf)]
    #[storage_mapper("delegationOf")]
    fn delegation_of(&self, contributor: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    /// Gross amount each card took in, funding split included.
    #[view(getCardContribution)]
    #[storage_mapper("cardContribution")]
    fn card_contribution(&self, token_id: u64) -> SingleValueMapper<BigUint>;

    // ── Funding split ──

    #[view(getFundingSplitBps)]
    #[storage_mapper("fundingSplitBps")]
    fn funding_split_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("fundingSplitRecipient")]
    fn funding_split_recipient(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("fundingSplitPaid")]
    fn funding_split_paid(&self) -> SingleValueMapper<bool>;

    // ── Gatekeeper ──

    #[storage_mapper("gatekeeper")]
    fn gatekeeper(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("gatekeeperId")]
    fn gatekeeper_id(&self) -> SingleValueMapper<ManagedBuffer>;

    // ── Refunds ──

    #[view(isBatchRefundOfLost)]
    #[storage_mapper("isBatchRefundOfLost")]
    fn is_batch_refund_of_lost(&self) -> SingleValueMapper<bool>;

    // ── Token launch ──

    #[storage_mapper("tokenCreator")]
    fn token_creator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("tokenLaunchOptions")]
    fn token_launch_options(&self) -> SingleValueMapper<Erc20LaunchOptions<Self::Api>>;

    #[view(isTokenLaunched)]
    #[storage_mapper("isTokenLaunched")]
    fn is_token_launched(&self) -> SingleValueMapper<bool>;

    #[view(getLaunchedToken)]
    #[storage_mapper("launchedToken")]
    fn launched_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
