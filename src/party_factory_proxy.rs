use multiversx_sc::proxy_imports::*;

use crate::types::PartyOptions;

pub struct PartyFactoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PartyFactoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PartyFactoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PartyFactoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct PartyFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> PartyFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_party<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<PartyOptions<Env::Api>>,
    >(
        self,
        authorities: Arg0,
        opts: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createParty")
            .argument(&authorities)
            .argument(&opts)
            .original_result()
    }

    pub fn create_party_with_metadata<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<PartyOptions<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        authorities: Arg0,
        opts: Arg1,
        metadata_provider: Arg2,
        metadata: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createPartyWithMetadata")
            .argument(&authorities)
            .argument(&opts)
            .argument(&metadata_provider)
            .argument(&metadata)
            .original_result()
    }
}
