//! Tests for mint/transfer/approval mechanics and hook dispatch.

#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

use rental_lib::ZERO_ADDRESS;

use crate::{AssetLedger, AssetLedgerClient, Error};

/// Hook stand-in that counts invocations per asset.
#[contract]
pub struct RecordingHook;

#[contractimpl]
impl RecordingHook {
    pub fn on_transfer(env: Env, asset_id: u64) {
        let key = (Symbol::new(&env, "calls"), asset_id);
        let calls: u64 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(calls + 1));
    }

    pub fn calls(env: Env, asset_id: u64) -> u64 {
        env.storage()
            .instance()
            .get(&(Symbol::new(&env, "calls"), asset_id))
            .unwrap_or(0)
    }
}

fn setup<'a>(env: &'a Env) -> (AssetLedgerClient<'a>, Address) {
    let contract_id = env.register_contract(None, AssetLedger);
    let client = AssetLedgerClient::new(env, &contract_id);
    let admin = Address::generate(env);
    client.init_contract(&admin);
    (client, admin)
}

fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ADDRESS))
}

#[test]
fn test_init_contract_only_once() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, admin) = setup(&env);

    match client.try_init_contract(&admin) {
        Err(Ok(Error::AlreadyInitialized)) => {}
        _ => panic!("re-initialization should fail"),
    }
}

#[test]
fn test_mint_assigns_owner_and_sequential_ids() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.mint(&alice), 1);
    assert_eq!(client.mint(&alice), 2);
    assert_eq!(client.mint(&bob), 3);

    assert_eq!(client.owner_of(&1), alice);
    assert_eq!(client.owner_of(&3), bob);
    assert_eq!(client.balance_of(&alice), 2);
    assert_eq!(client.balance_of(&bob), 1);
    assert_eq!(client.total_assets(), 3);
}

#[test]
fn test_mint_to_zero_address_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    match client.try_mint(&zero_address(&env)) {
        Err(Ok(Error::ZeroAddress)) => {}
        _ => panic!("mint to the zero address should fail"),
    }
}

#[test]
fn test_owner_of_unknown_asset_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    match client.try_owner_of(&42) {
        Err(Ok(Error::AssetNotFound)) => {}
        _ => panic!("unknown asset should fail"),
    }
}

#[test]
fn test_balance_of_zero_address_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    match client.try_balance_of(&zero_address(&env)) {
        Err(Ok(Error::ZeroAddress)) => {}
        _ => panic!("zero-address balance query should fail"),
    }
}

#[test]
fn test_transfer_updates_owner_and_balances() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let asset_id = client.mint(&alice);

    client.transfer(&asset_id, &alice, &bob);

    assert_eq!(client.owner_of(&asset_id), bob);
    assert_eq!(client.balance_of(&alice), 0);
    assert_eq!(client.balance_of(&bob), 1);
}

#[test]
fn test_transfer_rejects_stranger() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let alice = Address::generate(&env);
    let stranger = Address::generate(&env);
    let asset_id = client.mint(&alice);

    match client.try_transfer(&asset_id, &stranger, &stranger) {
        Err(Ok(Error::Unauthorized)) => {}
        _ => panic!("stranger transfer should fail"),
    }
    assert_eq!(client.owner_of(&asset_id), alice);
}

#[test]
fn test_approved_address_can_transfer_once() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let alice = Address::generate(&env);
    let broker = Address::generate(&env);
    let bob = Address::generate(&env);
    let asset_id = client.mint(&alice);

    client.approve(&asset_id, &alice, &Some(broker.clone()));
    client.transfer(&asset_id, &broker, &bob);
    assert_eq!(client.owner_of(&asset_id), bob);

    // The per-asset approval does not survive the transfer.
    match client.try_transfer(&asset_id, &broker, &alice) {
        Err(Ok(Error::Unauthorized)) => {}
        _ => panic!("approval should be cleared by the transfer"),
    }
}

#[test]
fn test_operator_can_transfer() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let alice = Address::generate(&env);
    let operator = Address::generate(&env);
    let bob = Address::generate(&env);
    let asset_id = client.mint(&alice);

    client.set_approval_for_all(&alice, &operator, &true);
    assert!(client.is_approved_or_owner(&operator, &asset_id));

    client.transfer(&asset_id, &operator, &bob);
    assert_eq!(client.owner_of(&asset_id), bob);

    // Operator status was granted by alice, not bob.
    assert!(!client.is_approved_or_owner(&operator, &asset_id));
}

#[test]
fn test_approve_requires_owner_or_operator() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let alice = Address::generate(&env);
    let stranger = Address::generate(&env);
    let asset_id = client.mint(&alice);

    match client.try_approve(&asset_id, &stranger, &Some(stranger.clone())) {
        Err(Ok(Error::Unauthorized)) => {}
        _ => panic!("stranger approval should fail"),
    }
}

#[test]
fn test_transfer_invokes_hook_after_owner_update() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let hook_id = env.register_contract(None, RecordingHook);
    let hook = RecordingHookClient::new(&env, &hook_id);
    client.set_transfer_hook(&hook_id);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let asset_id = client.mint(&alice);

    client.transfer(&asset_id, &alice, &bob);
    assert_eq!(hook.calls(&asset_id), 1);

    client.transfer(&asset_id, &bob, &alice);
    assert_eq!(hook.calls(&asset_id), 2);
}

#[test]
fn test_transfer_without_hook_configured() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _admin) = setup(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let asset_id = client.mint(&alice);

    client.transfer(&asset_id, &alice, &bob);
    assert_eq!(client.owner_of(&asset_id), bob);
}
