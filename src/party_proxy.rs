use multiversx_sc::proxy_imports::*;

pub struct PartyProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PartyProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PartyProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PartyProxyMethods { wrapped_tx: tx }
    }
}

pub struct PartyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> PartyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn mint<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
        voting_power: Arg1,
        delegate: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mint")
            .argument(&owner)
            .argument(&voting_power)
            .argument(&delegate)
            .original_result()
    }

    pub fn increase_voting_power<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token_id: Arg0,
        voting_power: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("increaseVotingPower")
            .argument(&token_id)
            .argument(&voting_power)
            .original_result()
    }

    pub fn increase_total_voting_power<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        voting_power: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("increaseTotalVotingPower")
            .argument(&voting_power)
            .original_result()
    }

    pub fn burn<
        Arg0: ProxyArg<u64>,
    >(
        self,
        token_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("burn")
            .argument(&token_id)
            .original_result()
    }

    pub fn receive_contributions(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("receiveContributions")
            .original_result()
    }

    /// Empty for burned or never minted cards.
    pub fn owner_of<
        Arg0: ProxyArg<u64>,
    >(
        self,
        token_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("ownerOf")
            .argument(&token_id)
            .original_result()
    }

    pub fn voting_power_by_token_id<
        Arg0: ProxyArg<u64>,
    >(
        self,
        token_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingPowerByTokenId")
            .argument(&token_id)
            .original_result()
    }
}
