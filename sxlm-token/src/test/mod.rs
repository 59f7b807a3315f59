#![cfg(test)]
extern crate std;

use crate::contract::{SxlmTokenContract, SxlmTokenContractClient};
use soroban_sdk::{
    Address, Env, String,
    testutils::{Address as _, Ledger},
};

fn create_token<'a>(e: &Env, admin: &Address, minter: &Address) -> SxlmTokenContractClient<'a> {
    let contract_id = e.register(SxlmTokenContract, ());
    let client = SxlmTokenContractClient::new(e, &contract_id);
    client.initialize(
        admin,
        minter,
        &7u32,
        &String::from_str(e, "Staked XLM"),
        &String::from_str(e, "sXLM"),
    );
    client
}

#[test]
fn test_initialization() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    assert_eq!(token.name(), String::from_str(&e, "Staked XLM"));
    assert_eq!(token.symbol(), String::from_str(&e, "sXLM"));
    assert_eq!(token.decimals(), 7);
    assert_eq!(token.admin(), admin);
    assert_eq!(token.minter(), minter);
    assert_eq!(token.total_supply(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #7)")]
fn test_double_initialization() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    token.initialize(
        &admin,
        &minter,
        &7u32,
        &String::from_str(&e, "Staked XLM"),
        &String::from_str(&e, "sXLM"),
    );
}

#[test]
fn test_mint_and_burn() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);

    token.mint(&alice, &1000_0000000);
    assert_eq!(token.balance(&alice), 1000_0000000);
    assert_eq!(token.total_supply(), 1000_0000000);

    token.burn(&alice, &400_0000000);
    assert_eq!(token.balance(&alice), 600_0000000);
    assert_eq!(token.total_supply(), 600_0000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_burn_more_than_balance() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    token.mint(&alice, &100_0000000);
    token.burn(&alice, &100_0000001);
}

#[test]
fn test_transfers() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);

    token.mint(&alice, &1000_0000000);
    token.transfer(&alice, &bob, &500_0000000);

    assert_eq!(token.balance(&alice), 500_0000000);
    assert_eq!(token.balance(&bob), 500_0000000);
    // Total supply unchanged after transfer
    assert_eq!(token.total_supply(), 1000_0000000);
}

#[test]
fn test_transfer_to_self_is_noop() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    token.mint(&alice, &100_0000000);

    token.transfer(&alice, &alice, &40_0000000);
    assert_eq!(token.balance(&alice), 100_0000000);
    assert_eq!(token.total_supply(), 100_0000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_transfer_insufficient_balance() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    token.mint(&alice, &10_0000000);
    token.transfer(&alice, &bob, &10_0000001);
}

#[test]
#[should_panic(expected = "Error(Contract, #8)")]
fn test_transfer_negative_amount() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    token.mint(&alice, &10_0000000);
    token.transfer(&alice, &bob, &-1);
}

#[test]
fn test_allowances() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let carol = Address::generate(&e);

    token.mint(&alice, &2000_0000000);

    let expiration = e.ledger().sequence() + 1000;
    token.approve(&alice, &carol, &1000_0000000, &expiration);
    assert_eq!(token.allowance(&alice, &carol), 1000_0000000);

    // Partial consumption
    token.transfer_from(&carol, &alice, &bob, &600_0000000);
    assert_eq!(token.allowance(&alice, &carol), 400_0000000);
    assert_eq!(token.balance(&alice), 1400_0000000);
    assert_eq!(token.balance(&bob), 600_0000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_transfer_from_insufficient_allowance() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let carol = Address::generate(&e);

    token.mint(&alice, &1000_0000000);
    let expiration = e.ledger().sequence() + 1000;
    token.approve(&alice, &carol, &100_0000000, &expiration);
    token.transfer_from(&carol, &alice, &bob, &100_0000001);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_transfer_from_expired_allowance() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let carol = Address::generate(&e);

    token.mint(&alice, &1000_0000000);
    let expiration = e.ledger().sequence() + 100;
    token.approve(&alice, &carol, &500_0000000, &expiration);

    e.ledger().with_mut(|li| li.sequence_number = expiration + 1);
    token.transfer_from(&carol, &alice, &bob, &100_0000000);
}

#[test]
fn test_expired_allowance_reads_zero() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let carol = Address::generate(&e);

    token.mint(&alice, &1000_0000000);
    let expiration = e.ledger().sequence() + 100;
    token.approve(&alice, &carol, &500_0000000, &expiration);
    assert_eq!(token.allowance(&alice, &carol), 500_0000000);

    e.ledger().with_mut(|li| li.sequence_number = expiration + 1);
    assert_eq!(token.allowance(&alice, &carol), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn test_approve_with_past_expiration() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let carol = Address::generate(&e);

    e.ledger().with_mut(|li| li.sequence_number = 1000);
    token.approve(&alice, &carol, &100_0000000, &999);
}

#[test]
fn test_set_minter() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let new_minter = Address::generate(&e);
    token.set_minter(&new_minter);
    assert_eq!(token.minter(), new_minter);

    let alice = Address::generate(&e);
    token.mint(&alice, &1_0000000);
    assert_eq!(token.balance(&alice), 1_0000000);
}

#[test]
fn test_supply_matches_sum_of_balances() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let minter = Address::generate(&e);
    let token = create_token(&e, &admin, &minter);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    let carol = Address::generate(&e);

    token.mint(&alice, &300_0000000);
    token.mint(&bob, &200_0000000);
    token.transfer(&alice, &carol, &50_0000000);
    token.burn(&bob, &25_0000000);

    let sum = token.balance(&alice) + token.balance(&bob) + token.balance(&carol);
    assert_eq!(token.total_supply(), sum);
}
