#![no_std]

multiversx_sc::imports!();

pub mod code_mask;
pub mod command_handler;
pub mod payload;
pub mod router_proxy;
pub mod routing_table;

use code_mask::Instruction;
use command_handler::HandleResult;

pub const ERR_ILLEGAL_INPUT: &str = "Illegal input";

/// Dispatches batches of encoded instructions. Each instruction decides on
/// its own whether a failure aborts the batch or is tolerated.
#[multiversx_sc::contract]
pub trait CommandRouter:
    routing_table::RoutingTableModule + command_handler::CommandHandlerModule
{
    #[init]
    fn init(&self, forward_gas_limit: u64) {
        self.forward_gas_limit().set(forward_gas_limit);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setForwardGasLimit)]
    fn set_forward_gas_limit(&self, forward_gas_limit: u64) {
        self.forward_gas_limit().set(forward_gas_limit);
    }

    /// `codes` holds one instruction byte per entry of `inputs`.
    #[payable("EGLD")]
    #[endpoint(run)]
    fn run(
        &self,
        codes: ManagedBuffer,
        inputs: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValueEncoded<HandleResult<Self::Api>> {
        require!(codes.len() == inputs.len(), ERR_ILLEGAL_INPUT);

        let mut results = MultiValueEncoded::new();
        for (index, input) in inputs.into_iter().enumerate() {
            let mut code = [0u8; 1];
            if codes.load_slice(index, &mut code).is_err() {
                sc_panic!(ERR_ILLEGAL_INPUT);
            }
            results.push(self.handle(index, Instruction::new(code[0]), &input));
        }
        results
    }
}
