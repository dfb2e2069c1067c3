// Blackbox tests for the command router, dispatching into `call-target-mock`.

use multiversx_sc::codec::{top_encode_to_vec_u8_or_panic, TopDecode};
use multiversx_sc_scenario::imports::*;

use command_router::code_mask::{HAS_VALUE, REVERT_ON_FAILURE};
use command_router::command_handler::{
    DispatchStatus, ForwardFailure, HandleResult, ERR_MALFORMED_PAYLOAD, ERR_TARGET_NOT_PAYABLE,
};
use command_router::payload::SubCall;
use command_router::router_proxy::CommandRouterProxy;
use command_router::routing_table::ERR_INVALID_ROUTING_INDEX;
use command_router::ERR_ILLEGAL_INPUT;

const ROUTER_CODE_PATH: MxscPath = MxscPath::new("output/command-router.mxsc.json");
const TARGET_CODE_PATH: MxscPath =
    MxscPath::new("../test-contracts/call-target-mock/output/call-target-mock.mxsc.json");

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const ROUTER: TestSCAddress = TestSCAddress::new("router");
const TARGET: TestSCAddress = TestSCAddress::new("target");
const LOCKED_TARGET: TestSCAddress = TestSCAddress::new("locked-target");

const INITIAL_BALANCE: u64 = 1_000_000;
const FORWARD_GAS_LIMIT: u64 = 5_000_000;

fn sc_addr(address: TestSCAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn encode_call(endpoint: &str, arguments: &[Vec<u8>]) -> Vec<u8> {
    let mut encoded_arguments = ManagedVec::<StaticApi, ManagedBuffer<StaticApi>>::new();
    for argument in arguments {
        encoded_arguments.push(ManagedBuffer::from(argument.as_slice()));
    }
    top_encode_to_vec_u8_or_panic(&SubCall {
        endpoint: ManagedBuffer::<StaticApi>::from(endpoint),
        arguments: encoded_arguments,
    })
}

fn deposit_call(tag: u64) -> Vec<u8> {
    encode_call("deposit", &[top_encode_to_vec_u8_or_panic(&tag)])
}

/// `[address][value][call]`, each part optional.
fn payload(target: Option<Address>, value: Option<u64>, call: Option<Vec<u8>>) -> ManagedBuffer<StaticApi> {
    let mut bytes = Vec::new();
    if let Some(target) = target {
        bytes.extend_from_slice(target.as_bytes());
    }
    if let Some(value) = value {
        let mut encoded = [0u8; 32];
        encoded[24..].copy_from_slice(&value.to_be_bytes());
        bytes.extend_from_slice(&encoded);
    }
    if let Some(call) = call {
        bytes.extend_from_slice(&call);
    }
    ManagedBuffer::from(bytes.as_slice())
}

fn inputs(payloads: Vec<ManagedBuffer<StaticApi>>) -> MultiValueEncoded<StaticApi, ManagedBuffer<StaticApi>> {
    let mut encoded = MultiValueEncoded::new();
    for payload in payloads {
        encoded.push(payload);
    }
    encoded
}

struct RouterTestState {
    world: ScenarioWorld,
}

impl RouterTestState {
    fn new() -> Self {
        let mut world = ScenarioWorld::new();
        world.register_contract(ROUTER_CODE_PATH, command_router::ContractBuilder);
        world.register_contract(TARGET_CODE_PATH, call_target_mock::ContractBuilder);

        world.account(OWNER).nonce(1).balance(INITIAL_BALANCE);
        world.account(ALICE).nonce(1).balance(INITIAL_BALANCE);
        world.account(BOB).nonce(1);
        world.account(TARGET).nonce(1).code(TARGET_CODE_PATH);

        world
            .tx()
            .from(OWNER)
            .typed(CommandRouterProxy)
            .init(FORWARD_GAS_LIMIT)
            .code(ROUTER_CODE_PATH)
            .new_address(ROUTER)
            .run();

        Self { world }
    }

    fn run(
        &mut self,
        codes: &[u8],
        payloads: Vec<ManagedBuffer<StaticApi>>,
        value: u64,
    ) -> Vec<HandleResult<StaticApi>> {
        let raw_results = self
            .world
            .tx()
            .from(ALICE)
            .to(ROUTER)
            .typed(CommandRouterProxy)
            .run(ManagedBuffer::from(codes), inputs(payloads))
            .egld(value)
            .returns(ReturnsRawResult)
            .run();

        // Results of forwarded promises trail the run's own results.
        (0..codes.len())
            .map(|index| HandleResult::top_decode((*raw_results.get(index)).clone()).unwrap())
            .collect()
    }

    fn run_expect_err(&mut self, codes: &[u8], payloads: Vec<ManagedBuffer<StaticApi>>, message: &str) {
        self.world
            .tx()
            .from(ALICE)
            .to(ROUTER)
            .typed(CommandRouterProxy)
            .run(ManagedBuffer::from(codes), inputs(payloads))
            .returns(ExpectError(4, message))
            .run();
    }

    fn map(&mut self, index: u8, address: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER)
            .to(ROUTER)
            .typed(CommandRouterProxy)
            .change_mapping(index, address)
            .run();
    }

    fn forward_failures(&mut self) -> Vec<ForwardFailure<StaticApi>> {
        self.world
            .query()
            .to(ROUTER)
            .typed(CommandRouterProxy)
            .forward_failures()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    fn check_target_tag(&mut self, expected: u64) {
        self.world
            .query()
            .to(TARGET)
            .raw_call("getTag")
            .original_result::<u64>()
            .returns(ExpectValue(expected))
            .run();
    }
}

// ============================================================
// Routing table
// ============================================================

#[test]
fn change_mapping_rejects_out_of_range_index() {
    let mut state = RouterTestState::new();

    for index in [0u8, 64u8] {
        state
            .world
            .tx()
            .from(OWNER)
            .to(ROUTER)
            .typed(CommandRouterProxy)
            .change_mapping(index, TARGET)
            .returns(ExpectError(4, ERR_INVALID_ROUTING_INDEX))
            .run();
    }

    state.map(63, sc_addr(TARGET));
    state
        .world
        .query()
        .to(ROUTER)
        .typed(CommandRouterProxy)
        .get_address(63u8)
        .returns(ExpectValue(sc_addr(TARGET)))
        .run();
}

#[test]
fn change_mapping_is_owner_only() {
    let mut state = RouterTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(ROUTER)
        .typed(CommandRouterProxy)
        .change_mapping(1u8, TARGET)
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();
}

#[test]
fn zero_address_clears_mapping() {
    let mut state = RouterTestState::new();
    state.map(1, sc_addr(TARGET));
    state.map(1, ManagedAddress::zero());

    state
        .world
        .query()
        .to(ROUTER)
        .typed(CommandRouterProxy)
        .get_address(1u8)
        .returns(ExpectValue(ManagedAddress::<StaticApi>::zero()))
        .run();
}

// ============================================================
// Dispatch
// ============================================================

#[test]
fn run_rejects_arity_mismatch_before_any_call() {
    let mut state = RouterTestState::new();

    state.run_expect_err(
        &[REVERT_ON_FAILURE, REVERT_ON_FAILURE],
        vec![payload(Some(TARGET.to_address()), None, Some(deposit_call(7)))],
        ERR_ILLEGAL_INPUT,
    );
    state.check_target_tag(0);
}

#[test]
fn unregistered_code_is_skipped() {
    let mut state = RouterTestState::new();

    let results = state.run(
        &[REVERT_ON_FAILURE | 0x05],
        vec![payload(None, None, Some(deposit_call(7)))],
        0,
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, DispatchStatus::Skipped);
    assert!(results[0].output.is_empty());
    state.check_target_tag(0);
}

#[test]
fn strict_call_returns_callee_output() {
    let mut state = RouterTestState::new();

    let results = state.run(
        &[REVERT_ON_FAILURE],
        vec![payload(Some(TARGET.to_address()), None, Some(deposit_call(7)))],
        0,
    );

    assert_eq!(results[0].status, DispatchStatus::Executed);
    assert_eq!(results[0].target, sc_addr(TARGET));
    assert_eq!(results[0].output.len(), 1);
    assert_eq!(
        *results[0].output.get(0),
        ManagedBuffer::<StaticApi>::from(top_encode_to_vec_u8_or_panic(&14u64).as_slice())
    );
    state.check_target_tag(7);
}

#[test]
fn table_code_routes_to_mapped_address() {
    let mut state = RouterTestState::new();
    state.map(1, sc_addr(TARGET));

    let results = state.run(
        &[REVERT_ON_FAILURE | 0x01],
        vec![payload(None, None, Some(deposit_call(9)))],
        0,
    );

    assert_eq!(results[0].status, DispatchStatus::Executed);
    state.check_target_tag(9);
}

#[test]
fn strict_failure_reverts_earlier_instructions() {
    let mut state = RouterTestState::new();

    state.run_expect_err(
        &[REVERT_ON_FAILURE, REVERT_ON_FAILURE],
        vec![
            payload(Some(TARGET.to_address()), None, Some(deposit_call(7))),
            payload(Some(TARGET.to_address()), None, Some(encode_call("fail", &[]))),
        ],
        call_target_mock::ERR_TARGET_FAILURE,
    );
    state.check_target_tag(0);
}

#[test]
fn tolerant_call_is_forwarded() {
    let mut state = RouterTestState::new();

    let results = state.run(
        &[0x00],
        vec![payload(Some(TARGET.to_address()), None, Some(deposit_call(3)))],
        0,
    );

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, DispatchStatus::Forwarded);
    assert_eq!(results[0].target, sc_addr(TARGET));
    assert!(results[0].output.is_empty());
    state.check_target_tag(3);
    assert!(state.forward_failures().is_empty());
}

#[test]
fn tolerant_failure_does_not_stop_the_batch() {
    let mut state = RouterTestState::new();

    let results = state.run(
        &[0x00, REVERT_ON_FAILURE],
        vec![
            payload(Some(TARGET.to_address()), None, Some(encode_call("fail", &[]))),
            payload(Some(TARGET.to_address()), None, Some(deposit_call(5))),
        ],
        0,
    );

    assert_eq!(results[0].status, DispatchStatus::Forwarded);
    assert_eq!(results[1].status, DispatchStatus::Executed);
    assert_eq!(
        *results[1].output.get(0),
        ManagedBuffer::<StaticApi>::from(top_encode_to_vec_u8_or_panic(&10u64).as_slice())
    );
    state.check_target_tag(5);

    let failures = state.forward_failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].index, 0);
    assert_eq!(failures[0].target, sc_addr(TARGET));
    assert_eq!(
        failures[0].reason,
        ManagedBuffer::<StaticApi>::from(call_target_mock::ERR_TARGET_FAILURE)
    );
}

#[test]
fn tolerant_failure_returns_value_to_caller() {
    let mut state = RouterTestState::new();

    state.run(
        &[HAS_VALUE],
        vec![payload(Some(TARGET.to_address()), Some(200), Some(encode_call("fail", &[])))],
        200,
    );

    state.world.check_account(TARGET).balance(0u64);
    state.world.check_account(ROUTER).balance(0u64);
    state.world.check_account(ALICE).balance(INITIAL_BALANCE);
    assert_eq!(state.forward_failures().len(), 1);
}

#[test]
fn tolerant_transfer_to_non_payable_contract_fails() {
    let mut state = RouterTestState::new();
    state
        .world
        .tx()
        .from(OWNER)
        .raw_deploy()
        .code(TARGET_CODE_PATH)
        .code_metadata(CodeMetadata::UPGRADEABLE)
        .new_address(LOCKED_TARGET)
        .run();

    let results = state.run(
        &[HAS_VALUE, REVERT_ON_FAILURE | HAS_VALUE],
        vec![
            payload(Some(LOCKED_TARGET.to_address()), Some(200), None),
            payload(Some(BOB.to_address()), Some(100), None),
        ],
        300,
    );

    assert_eq!(results[0].status, DispatchStatus::Failed);
    assert_eq!(results[0].target, sc_addr(LOCKED_TARGET));
    assert_eq!(results[1].status, DispatchStatus::Executed);

    state.world.check_account(LOCKED_TARGET).balance(0u64);
    state.world.check_account(BOB).balance(100u64);
    state.world.check_account(ROUTER).balance(0u64);
    state.world.check_account(ALICE).balance(INITIAL_BALANCE - 100);

    let failures = state.forward_failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].index, 0);
    assert_eq!(
        failures[0].reason,
        ManagedBuffer::<StaticApi>::from(ERR_TARGET_NOT_PAYABLE)
    );
}

#[test]
fn tolerant_transfer_to_account_is_executed() {
    let mut state = RouterTestState::new();

    let results = state.run(&[HAS_VALUE], vec![payload(Some(BOB.to_address()), Some(250), None)], 250);

    assert_eq!(results[0].status, DispatchStatus::Executed);
    state.world.check_account(BOB).balance(250u64);
    assert!(state.forward_failures().is_empty());
}

#[test]
fn value_is_attached_from_payload() {
    let mut state = RouterTestState::new();

    state.run(
        &[REVERT_ON_FAILURE | HAS_VALUE, REVERT_ON_FAILURE | HAS_VALUE],
        vec![
            payload(Some(BOB.to_address()), Some(500), None),
            payload(Some(TARGET.to_address()), Some(300), Some(deposit_call(1))),
        ],
        800,
    );

    state.world.check_account(BOB).balance(500u64);
    state.world.check_account(TARGET).balance(300u64);
    state.world.check_account(ROUTER).balance(0u64);
    state.world.check_account(ALICE).balance(INITIAL_BALANCE - 800);
}

#[test]
fn truncated_payload_is_rejected() {
    let mut state = RouterTestState::new();

    state.run_expect_err(
        &[REVERT_ON_FAILURE | HAS_VALUE],
        vec![payload(Some(TARGET.to_address()), None, None)],
        ERR_MALFORMED_PAYLOAD,
    );
}

#[test]
fn forward_gas_limit_is_owner_configurable() {
    let mut state = RouterTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(ROUTER)
        .typed(CommandRouterProxy)
        .set_forward_gas_limit(1u64)
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(ROUTER)
        .typed(CommandRouterProxy)
        .set_forward_gas_limit(10_000_000u64)
        .run();

    state
        .world
        .query()
        .to(ROUTER)
        .typed(CommandRouterProxy)
        .forward_gas_limit()
        .returns(ExpectValue(10_000_000u64))
        .run();
}
