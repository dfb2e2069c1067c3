multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::code_mask::Instruction;
use crate::payload::{PayloadReader, SubCall};

pub const ERR_MALFORMED_PAYLOAD: &str = "Malformed instruction payload";
pub const ERR_TARGET_NOT_PAYABLE: &str = "Target does not accept EGLD";

const FORWARD_CALLBACK_GAS: u64 = 3_000_000;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DispatchStatus {
    /// Ran synchronously and succeeded.
    Executed,
    /// Launched as a promise with a fixed gas budget. A failure there reverts
    /// only the callee and is recorded by `forward_callback`.
    Forwarded,
    /// Command code not mapped. Nothing was called.
    Skipped,
    /// Tolerated failure. The attached value went back to the caller.
    Failed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct HandleResult<M: ManagedTypeApi> {
    pub status: DispatchStatus,
    pub target: ManagedAddress<M>,
    /// Raw results of a synchronous call. Empty otherwise.
    pub output: ManagedVec<M, ManagedBuffer<M>>,
}

impl<M: ManagedTypeApi> HandleResult<M> {
    fn skipped() -> Self {
        HandleResult::without_output(DispatchStatus::Skipped, ManagedAddress::zero())
    }

    fn without_output(status: DispatchStatus, target: ManagedAddress<M>) -> Self {
        HandleResult {
            status,
            target,
            output: ManagedVec::new(),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ForwardFailure<M: ManagedTypeApi> {
    pub index: u64,
    pub target: ManagedAddress<M>,
    pub reason: ManagedBuffer<M>,
}

#[multiversx_sc::module]
pub trait CommandHandlerModule: crate::routing_table::RoutingTableModule {
    // ========================================================
    // INTERNAL: one instruction
    // ========================================================

    fn handle(
        &self,
        index: usize,
        instruction: Instruction,
        input: &ManagedBuffer,
    ) -> HandleResult<Self::Api> {
        let mut reader = PayloadReader::new(input);

        let target = if instruction.address_in_payload() {
            match reader.read_address() {
                Some(address) => address,
                None => sc_panic!(ERR_MALFORMED_PAYLOAD),
            }
        } else {
            let address = self.get_address(instruction.command());
            if address.is_zero() {
                self.instruction_skipped_event(index as u64, instruction.command());
                return HandleResult::skipped();
            }
            address
        };

        let value = if instruction.has_value() {
            match reader.read_value() {
                Some(value) => value,
                None => sc_panic!(ERR_MALFORMED_PAYLOAD),
            }
        } else {
            BigUint::zero()
        };

        let call = match reader.read_call() {
            Ok(call) => call,
            Err(_) => sc_panic!(ERR_MALFORMED_PAYLOAD),
        };

        let index = index as u64;
        match call {
            None if instruction.revert_on_failure() => {
                if value > 0u64 {
                    self.send().direct_egld(&target, &value);
                }
                self.instruction_executed_event(index, &target, &value);
                HandleResult::without_output(DispatchStatus::Executed, target)
            },
            None => self.transfer_tolerant(index, target, value),
            Some(call) if instruction.revert_on_failure() => {
                let output = self.execute_strict(&target, &value, call);
                self.instruction_executed_event(index, &target, &value);
                HandleResult {
                    status: DispatchStatus::Executed,
                    target,
                    output,
                }
            },
            Some(call) => {
                self.forward_tolerant(index, &target, &value, call);
                self.instruction_forwarded_event(index, &target, &value);
                HandleResult::without_output(DispatchStatus::Forwarded, target)
            },
        }
    }

    /// A failing callee aborts the whole run with its own error.
    fn execute_strict(
        &self,
        target: &ManagedAddress,
        value: &BigUint,
        call: SubCall<Self::Api>,
    ) -> ManagedVec<ManagedBuffer> {
        self.tx()
            .to(target)
            .egld(value)
            .raw_call(call.endpoint)
            .arguments_raw(ManagedArgBuffer::from(call.arguments))
            .returns(ReturnsRawResult)
            .sync_call()
    }

    /// Launches the callee as a promise with a bounded gas budget. The outcome
    /// lands in `forward_callback`, never in the run's own results.
    fn forward_tolerant(
        &self,
        index: u64,
        target: &ManagedAddress,
        value: &BigUint,
        call: SubCall<Self::Api>,
    ) {
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(target)
            .egld(value)
            .gas(self.forward_gas_limit().get())
            .raw_call(call.endpoint)
            .arguments_raw(ManagedArgBuffer::from(call.arguments))
            .callback(
                self.callbacks()
                    .forward_callback(index, target.clone(), caller, value.clone()),
            )
            .gas_for_callback(FORWARD_CALLBACK_GAS)
            .register_promise();
    }

    /// Value-only promises do not exist, so a plain transfer is checked up
    /// front instead: contracts must be payable.
    fn transfer_tolerant(
        &self,
        index: u64,
        target: ManagedAddress,
        value: BigUint,
    ) -> HandleResult<Self::Api> {
        if value > 0u64 && !self.accepts_egld(&target) {
            let caller = self.blockchain().get_caller();
            self.send().direct_egld(&caller, &value);
            self.record_failure(index, &target, ManagedBuffer::from(ERR_TARGET_NOT_PAYABLE));
            return HandleResult::without_output(DispatchStatus::Failed, target);
        }

        if value > 0u64 {
            self.send().direct_egld(&target, &value);
        }
        self.instruction_executed_event(index, &target, &value);
        HandleResult::without_output(DispatchStatus::Executed, target)
    }

    fn accepts_egld(&self, target: &ManagedAddress) -> bool {
        let blockchain = self.blockchain();
        !blockchain.is_smart_contract(target) || blockchain.get_code_metadata(target).is_payable()
    }

    fn record_failure(&self, index: u64, target: &ManagedAddress, reason: ManagedBuffer) {
        self.instruction_failed_event(index, target, &reason);
        self.forward_failures().push(&ForwardFailure {
            index,
            target: target.clone(),
            reason,
        });
    }

    /// Callee results are dropped. On failure the value came back to the
    /// router and is returned to whoever sent the run.
    #[promises_callback]
    fn forward_callback(
        &self,
        index: u64,
        target: ManagedAddress,
        caller: ManagedAddress,
        value: BigUint,
        #[call_result] result: ManagedAsyncCallResult<MultiValueEncoded<ManagedBuffer>>,
    ) {
        if let ManagedAsyncCallResult::Err(err) = result {
            if value > 0u64 {
                self.send().direct_egld(&caller, &value);
            }
            self.record_failure(index, &target, err.err_msg);
        }
    }

    // ========================================================
    // STORAGE / EVENTS
    // ========================================================

    #[view(getForwardGasLimit)]
    #[storage_mapper("forwardGasLimit")]
    fn forward_gas_limit(&self) -> SingleValueMapper<u64>;

    #[view(getForwardFailures)]
    #[storage_mapper("forwardFailures")]
    fn forward_failures(&self) -> VecMapper<ForwardFailure<Self::Api>>;

    #[event("instructionExecuted")]
    fn instruction_executed_event(
        &self,
        #[indexed] index: u64,
        #[indexed] target: &ManagedAddress,
        value: &BigUint,
    );

    #[event("instructionForwarded")]
    fn instruction_forwarded_event(
        &self,
        #[indexed] index: u64,
        #[indexed] target: &ManagedAddress,
        value: &BigUint,
    );

    #[event("instructionFailed")]
    fn instruction_failed_event(
        &self,
        #[indexed] index: u64,
        #[indexed] target: &ManagedAddress,
        reason: &ManagedBuffer,
    );

    #[event("instructionSkipped")]
    fn instruction_skipped_event(&self, #[indexed] index: u64, #[indexed] command: u8);
}
