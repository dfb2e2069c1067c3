use multiversx_sc::proxy_imports::*;

use crate::types::{DistributionInfo, Erc20LaunchOptions};

pub struct TokenCreatorProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TokenCreatorProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TokenCreatorProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TokenCreatorProxyMethods { wrapped_tx: tx }
    }
}

pub struct TokenCreatorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> TokenCreatorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_token<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<Erc20LaunchOptions<Env::Api>>,
    >(
        self,
        party: Arg0,
        lp_fee_recipient: Arg1,
        opts: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .raw_call("createToken")
            .argument(&party)
            .argument(&lp_fee_recipient)
            .argument(&opts)
            .original_result()
    }

    pub fn get_distribution_info<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        party: Arg0,
        token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, DistributionInfo<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDistributionInfo")
            .argument(&party)
            .argument(&token)
            .original_result()
    }
}
