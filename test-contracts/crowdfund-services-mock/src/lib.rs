#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Token identifier handed out by `createToken`.
pub const LAUNCHED_TOKEN_ID: &[u8] = b"PRTY-a1b2c3";

/// `isAllowed` accepts exactly this user data.
pub const GATE_PASS: &[u8] = b"pass";

/// Same encoding as the crowdfund's distribution snapshot.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode)]
pub struct DistributionInfo<M: ManagedTypeApi> {
    pub token: TokenIdentifier<M>,
    pub party: ManagedAddress<M>,
    pub total_amount: BigUint<M>,
    pub party_total_voting_power: BigUint<M>,
}

/// Stands in for every service a crowdfund talks to: the party factory,
/// the party itself (card registry), the gatekeeper and the token creator.
/// The factory hands out its own address as the party address.
#[multiversx_sc::contract]
pub trait CrowdfundServicesMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ── Party factory ──

    #[endpoint(createParty)]
    fn create_party(
        &self,
        authorities: ManagedVec<ManagedAddress>,
        _opts: ManagedBuffer,
    ) -> ManagedAddress {
        self.register_authorities(&authorities);
        self.blockchain().get_sc_address()
    }

    #[endpoint(createPartyWithMetadata)]
    fn create_party_with_metadata(
        &self,
        authorities: ManagedVec<ManagedAddress>,
        _opts: ManagedBuffer,
        _metadata_provider: ManagedAddress,
        metadata: ManagedBuffer,
    ) -> ManagedAddress {
        self.register_authorities(&authorities);
        self.party_metadata().set(&metadata);
        self.blockchain().get_sc_address()
    }

    fn register_authorities(&self, authorities: &ManagedVec<ManagedAddress>) {
        for authority in authorities.iter() {
            self.authorities().insert(authority.clone_value());
        }
    }

    // ── Party ──

    #[endpoint(mint)]
    fn mint(&self, owner: ManagedAddress, voting_power: BigUint, delegate: ManagedAddress) -> u64 {
        self.require_authority();
        let token_id = self.last_token_id().get() + 1;
        self.last_token_id().set(token_id);
        self.card_owner(token_id).set(&owner);
        self.card_voting_power(token_id).set(&voting_power);
        self.card_delegate(token_id).set(&delegate);
        token_id
    }

    #[endpoint(increaseVotingPower)]
    fn increase_voting_power(&self, token_id: u64, voting_power: BigUint) {
        self.require_authority();
        require!(!self.card_owner(token_id).is_empty(), "unknown card");
        self.card_voting_power(token_id).update(|vp| *vp += voting_power);
    }

    #[endpoint(increaseTotalVotingPower)]
    fn increase_total_voting_power(&self, voting_power: BigUint) {
        self.require_authority();
        self.total_voting_power().update(|total| *total += voting_power);
    }

    #[endpoint(burn)]
    fn burn(&self, token_id: u64) {
        self.require_authority();
        self.card_owner(token_id).clear();
        self.card_voting_power(token_id).clear();
        self.card_delegate(token_id).clear();
    }

    #[payable("EGLD")]
    #[endpoint(receiveContributions)]
    fn receive_contributions(&self) {
        let payment = self.call_value().egld_value().clone_value();
        self.received_contributions().update(|total| *total += payment);
    }

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> OptionalValue<ManagedAddress> {
        if self.card_owner(token_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.card_owner(token_id).get())
        }
    }

    #[view(votingPowerByTokenId)]
    fn voting_power_by_token_id(&self, token_id: u64) -> BigUint {
        self.card_voting_power(token_id).get()
    }

    fn require_authority(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.authorities().contains(&caller), "not an authority");
    }

    // ── Gatekeeper ──

    #[view(isAllowed)]
    fn is_allowed(&self, _participant: ManagedAddress, _gatekeeper_id: ManagedBuffer, user_data: ManagedBuffer) -> bool {
        user_data == ManagedBuffer::from(GATE_PASS)
    }

    // ── Token creator ──

    #[payable("EGLD")]
    #[endpoint(createToken)]
    fn create_token(
        &self,
        party: ManagedAddress,
        _lp_fee_recipient: ManagedAddress,
        _opts: ManagedBuffer,
    ) -> TokenIdentifier {
        let payment = self.call_value().egld_value().clone_value();
        self.token_funding().set(&payment);
        self.token_party().set(&party);
        TokenIdentifier::from(LAUNCHED_TOKEN_ID)
    }

    #[view(getDistributionInfo)]
    fn get_distribution_info(&self, party: ManagedAddress, token: TokenIdentifier) -> DistributionInfo<Self::Api> {
        DistributionInfo {
            token,
            party,
            total_amount: self.token_funding().get(),
            party_total_voting_power: self.total_voting_power().get(),
        }
    }

    // ── Storage ──

    #[storage_mapper("authorities")]
    fn authorities(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getPartyMetadata)]
    #[storage_mapper("partyMetadata")]
    fn party_metadata(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getLastTokenId)]
    #[storage_mapper("lastTokenId")]
    fn last_token_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("cardOwner")]
    fn card_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("cardVotingPower")]
    fn card_voting_power(&self, token_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getCardDelegate)]
    #[storage_mapper("cardDelegate")]
    fn card_delegate(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[view(getTotalVotingPower)]
    #[storage_mapper("totalVotingPower")]
    fn total_voting_power(&self) -> SingleValueMapper<BigUint>;

    #[view(getReceivedContributions)]
    #[storage_mapper("receivedContributions")]
    fn received_contributions(&self) -> SingleValueMapper<BigUint>;

    #[view(getTokenFunding)]
    #[storage_mapper("tokenFunding")]
    fn token_funding(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("tokenParty")]
    fn token_party(&self) -> SingleValueMapper<ManagedAddress>;
}
