multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("contributed")]
    fn contributed_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] delegate: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("excessContributionReturned")]
    fn excess_contribution_returned_event(&self, #[indexed] sender: &ManagedAddress, amount: &BigUint);

    #[event("refunded")]
    fn refunded_event(
        &self,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] token_id: u64,
        amount: &BigUint,
    );

    #[event("refundError")]
    fn refund_error_event(
        &self,
        #[indexed] token_id: u64,
        #[indexed] contributor: &ManagedAddress,
        message: &ManagedBuffer,
    );

    #[event("batchRefundOfLost")]
    fn batch_refund_of_lost_event(&self, #[indexed] card_count: u64);

    #[event("finalized")]
    fn finalized_event(&self, #[indexed] total_contributions: &BigUint);

    #[event("fundingSplitSent")]
    fn funding_split_sent_event(&self, #[indexed] recipient: &ManagedAddress, amount: &BigUint);

    #[event("tokenLaunched")]
    fn token_launched_event(
        &self,
        #[indexed] party: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        net_contribution: &BigUint,
    );
}
