#![no_std]

multiversx_sc::imports!();

pub mod contribute;
pub mod crowdfund_base;
pub mod crowdfund_proxy;
pub mod errors;
pub mod events;
pub mod finalize;
pub mod gatekeeper_proxy;
pub mod party_factory_proxy;
pub mod party_proxy;
pub mod refund;
pub mod storage;
pub mod token_creator_proxy;
pub mod token_launch;
pub mod types;
pub mod views;

use crowdfund_base::BPS_DENOMINATOR;
use errors::*;
use party_factory_proxy::PartyFactoryProxy;
use types::{CrowdfundOptions, Erc20LaunchOptions, PartyMetadata, PartyOptions};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PartyCrowdfund:
    storage::StorageModule
    + events::EventsModule
    + crowdfund_base::CrowdfundBaseModule
    + token_launch::TokenLaunchModule
    + finalize::FinalizeModule
    + contribute::ContributeModule
    + refund::RefundModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // Creates the party, then applies the deployer's payment
    // before the gatekeeper is switched on.
    // ========================================================

    #[init]
    #[payable("EGLD")]
    fn init(
        &self,
        party_factory: ManagedAddress,
        crowdfund_opts: CrowdfundOptions<Self::Api>,
        party_opts: PartyOptions<Self::Api>,
        custom_metadata: Option<PartyMetadata<Self::Api>>,
        token_launch: OptionalValue<MultiValue2<ManagedAddress, Erc20LaunchOptions<Self::Api>>>,
    ) {
        require!(
            crowdfund_opts.min_contribution <= crowdfund_opts.max_contribution,
            ERR_MIN_GREATER_THAN_MAX
        );
        require!(
            crowdfund_opts.max_total_contributions > 0u64,
            ERR_MAX_TOTAL_ZERO
        );
        require!(
            crowdfund_opts.min_total_contributions <= crowdfund_opts.max_total_contributions,
            ERR_MIN_TOTAL_ABOVE_MAX_TOTAL
        );
        require!(crowdfund_opts.exchange_rate_bps > 0, ERR_INVALID_EXCHANGE_RATE);
        require!(
            crowdfund_opts.funding_split_bps < BPS_DENOMINATOR,
            ERR_INVALID_FUNDING_SPLIT
        );

        if let OptionalValue::Some(launch) = token_launch {
            let (token_creator, launch_opts) = launch.into_tuple();
            self.validate_token_distribution(
                &launch_opts,
                crowdfund_opts.funding_split_bps,
                &crowdfund_opts.min_total_contributions,
            );
            self.token_creator().set(&token_creator);
            self.token_launch_options().set(&launch_opts);
        }

        // ── Configuration ──
        self.min_contribution().set(&crowdfund_opts.min_contribution);
        self.max_contribution().set(&crowdfund_opts.max_contribution);
        self.min_total_contributions()
            .set(&crowdfund_opts.min_total_contributions);
        self.max_total_contributions()
            .set(&crowdfund_opts.max_total_contributions);
        self.exchange_rate_bps().set(crowdfund_opts.exchange_rate_bps);
        self.funding_split_bps().set(crowdfund_opts.funding_split_bps);
        self.funding_split_recipient()
            .set(&crowdfund_opts.funding_split_recipient);
        self.disable_contributing_for_existing_card()
            .set(crowdfund_opts.disable_contributing_for_existing_card);
        self.total_contributions().set(BigUint::zero());
        self.latest_token_id().set(0u64);

        let now = self.blockchain().get_block_timestamp();
        self.expiry().set(now + crowdfund_opts.duration);

        // ── Party ──
        for host in party_opts.hosts.iter() {
            self.hosts().insert(host.clone_value());
        }

        let mut authorities = ManagedVec::new();
        authorities.push(self.blockchain().get_sc_address());
        let party: ManagedAddress = match custom_metadata {
            Some(metadata) => self
                .tx()
                .to(&party_factory)
                .typed(PartyFactoryProxy)
                .create_party_with_metadata(
                    authorities,
                    party_opts,
                    metadata.provider,
                    metadata.metadata,
                )
                .returns(ReturnsResult)
                .sync_call(),
            None => self
                .tx()
                .to(&party_factory)
                .typed(PartyFactoryProxy)
                .create_party(authorities, party_opts)
                .returns(ReturnsResult)
                .sync_call(),
        };
        self.party().set(&party);

        // ── Initial contribution ──
        let initial_contribution = self.call_value().egld_value().clone_value();
        if initial_contribution > 0u64 {
            let contributor = crowdfund_opts
                .initial_contributor
                .clone()
                .unwrap_or_else(|| self.blockchain().get_caller());
            self.contribute_internal(
                &contributor,
                &crowdfund_opts.initial_delegate,
                initial_contribution,
                0,
                &ManagedBuffer::new(),
            );
        }

        if let Some(gatekeeper) = crowdfund_opts.gatekeeper {
            self.gatekeeper().set(&gatekeeper);
            self.gatekeeper_id().set(&crowdfund_opts.gatekeeper_id);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}
}
