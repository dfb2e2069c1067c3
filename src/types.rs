multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Crowdfund Lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CrowdfundLifecycle {
    /// No party has been created yet.
    Invalid,
    /// Accepting contributions until expiry or the contribution cap.
    Active,
    /// Kept for encoding compatibility; never computed by this crowdfund.
    Expired,
    /// Kept for encoding compatibility; never computed by this crowdfund.
    Busy,
    /// Expired below the minimum total. Refunds are open.
    Lost,
    /// Minimum total reached at expiry, or the cap was hit.
    Won,
    /// Funds forwarded to the party (or the launched token). Terminal state.
    Finalized,
}

// ============================================================
// Configuration snapshots taken at init
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CrowdfundOptions<M: ManagedTypeApi> {
    /// Receives the card for the EGLD attached to the deploy transaction.
    /// Defaults to the deployer.
    pub initial_contributor: Option<ManagedAddress<M>>,
    pub initial_delegate: ManagedAddress<M>,
    pub min_contribution: BigUint<M>,
    pub max_contribution: BigUint<M>,
    pub disable_contributing_for_existing_card: bool,
    pub min_total_contributions: BigUint<M>,
    pub max_total_contributions: BigUint<M>,
    /// Voting power per contributed unit, in basis points.
    pub exchange_rate_bps: u64,
    pub funding_split_bps: u64,
    pub funding_split_recipient: ManagedAddress<M>,
    /// Seconds from deployment until expiry.
    pub duration: u64,
    pub gatekeeper: Option<ManagedAddress<M>>,
    pub gatekeeper_id: ManagedBuffer<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct PartyOptions<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub symbol: ManagedBuffer<M>,
    pub hosts: ManagedVec<M, ManagedAddress<M>>,
    pub vote_duration: u64,
    pub execution_delay: u64,
    pub pass_threshold_bps: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct PartyMetadata<M: ManagedTypeApi> {
    pub provider: ManagedAddress<M>,
    pub metadata: ManagedBuffer<M>,
}

/// Token launched on finalization. The three allocations must add up to
/// `total_supply` exactly.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Erc20LaunchOptions<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub symbol: ManagedBuffer<M>,
    pub recipient: ManagedAddress<M>,
    pub total_supply: BigUint<M>,
    pub num_tokens_for_distribution: BigUint<M>,
    pub num_tokens_for_recipient: BigUint<M>,
    pub num_tokens_for_lp: BigUint<M>,
    pub lp_fee_recipient: ManagedAddress<M>,
}

// ============================================================
// Batch arguments
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BatchContributeArgs<M: ManagedTypeApi> {
    pub token_ids: ManagedVec<M, u64>,
    pub delegate: ManagedAddress<M>,
    pub values: ManagedVec<M, BigUint<M>>,
    pub gate_datas: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BatchContributeForArgs<M: ManagedTypeApi> {
    pub token_ids: ManagedVec<M, u64>,
    pub recipients: ManagedVec<M, ManagedAddress<M>>,
    pub initial_delegates: ManagedVec<M, ManagedAddress<M>>,
    pub values: ManagedVec<M, BigUint<M>>,
    pub gate_datas: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Read-side records, rebuilt on demand from party cards
// ============================================================

#[type_abi]
#[derive(ManagedVecItem, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Angel<M: ManagedTypeApi> {
    pub wallet_address: ManagedAddress<M>,
    pub amount: BigUint<M>,
}

/// Snapshot reported by the token creator for a launched token.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct DistributionInfo<M: ManagedTypeApi> {
    pub token: TokenIdentifier<M>,
    pub party: ManagedAddress<M>,
    pub total_amount: BigUint<M>,
    pub party_total_voting_power: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ClaimInfo<M: ManagedTypeApi> {
    /// `None` until the token is launched.
    pub distribution: Option<DistributionInfo<M>>,
    pub token_ids: ManagedVec<M, u64>,
}

/// Outcome of the processing step shared by every contribution path.
pub struct ProcessedContribution<M: ManagedTypeApi> {
    pub voting_power: BigUint<M>,
    /// Part of the payment kept by the crowdfund, funding split included.
    pub accepted: BigUint<M>,
    /// Part of the payment above the contribution cap, owed back to the sender.
    pub excess: BigUint<M>,
    pub reached_max: bool,
}
