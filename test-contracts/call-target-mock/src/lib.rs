#![no_std]

multiversx_sc::imports!();

pub const ERR_TARGET_FAILURE: &str = "target failure";

/// Destination for routed instructions. Records what it receives.
#[multiversx_sc::contract]
pub trait CallTargetMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Stores the tag and returns it doubled, so callers can see the output.
    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self, tag: u64) -> u64 {
        let payment = self.call_value().egld_value().clone_value();
        self.tag().set(tag);
        self.received().update(|total| *total += payment);
        tag * 2
    }

    #[payable("EGLD")]
    #[endpoint(fail)]
    fn fail(&self) {
        sc_panic!(ERR_TARGET_FAILURE);
    }

    #[view(getTag)]
    #[storage_mapper("tag")]
    fn tag(&self) -> SingleValueMapper<u64>;

    #[view(getReceived)]
    #[storage_mapper("received")]
    fn received(&self) -> SingleValueMapper<BigUint>;
}
