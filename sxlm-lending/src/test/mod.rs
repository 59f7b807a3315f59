#![cfg(test)]
extern crate std;

use crate::contract::{LendingContract, LendingContractClient};
use soroban_sdk::{
    Address, Env, String,
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
};
use sxlm_token::contract::{SxlmTokenContract, SxlmTokenContractClient};

struct Setup<'a> {
    admin: Address,
    native_asset: StellarAssetClient<'a>,
    native: TokenClient<'a>,
    sxlm: SxlmTokenContractClient<'a>,
    lending: LendingContractClient<'a>,
}

/// Lending pool over a real receipt token, with the test admin as minter so
/// collateral can be conjured directly.
fn setup(e: &Env, cf_bps: u32, lt_bps: u32, rate_bps: u32) -> Setup<'_> {
    let admin = Address::generate(e);

    let native_contract = e.register_stellar_asset_contract_v2(admin.clone());
    let native_asset = StellarAssetClient::new(e, &native_contract.address());
    let native = TokenClient::new(e, &native_contract.address());

    let sxlm_id = e.register(SxlmTokenContract, ());
    let sxlm = SxlmTokenContractClient::new(e, &sxlm_id);
    sxlm.initialize(
        &admin,
        &admin,
        &7u32,
        &String::from_str(e, "Staked XLM"),
        &String::from_str(e, "sXLM"),
    );

    let lending_id = e.register(LendingContract, ());
    let lending = LendingContractClient::new(e, &lending_id);
    lending.initialize(
        &admin,
        &sxlm_id,
        &native_contract.address(),
        &cf_bps,
        &lt_bps,
        &rate_bps,
    );

    Setup {
        admin,
        native_asset,
        native,
        sxlm,
        lending,
    }
}

fn fund_pool(s: &Setup, amount: i128) {
    s.native_asset.mint(&s.admin, &amount);
    s.lending.fund_pool(&s.admin, &amount);
}

#[test]
fn test_initialization() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 1000);

    assert_eq!(s.lending.get_collateral_factor(), 7000);
    assert_eq!(s.lending.get_liquidation_threshold(), 8000);
    assert_eq!(s.lending.get_borrow_rate(), 1000);
    assert_eq!(s.lending.get_close_factor(), 5000);
    assert_eq!(s.lending.get_liquidation_bonus(), 500);
    assert_eq!(s.lending.get_exchange_rate(), 10_000_000);
    assert_eq!(s.lending.get_accumulator(), 10_000_000);
    assert_eq!(s.lending.get_pool_balance(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #9)")]
fn test_double_initialization() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 1000);

    let sxlm = s.sxlm.address.clone();
    let native = s.native.address.clone();
    s.lending
        .initialize(&s.admin, &sxlm, &native, &7000, &8000, &1000);
}

#[test]
fn test_deposit_and_withdraw_collateral() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);

    s.lending.deposit_collateral(&user, &100_0000000);
    assert_eq!(s.sxlm.balance(&user), 0);
    assert_eq!(s.lending.total_collateral(), 100_0000000);
    let position = s.lending.get_position(&user).unwrap();
    assert_eq!(position.sxlm_collateral, 100_0000000);
    assert_eq!(position.xlm_borrowed_principal, 0);

    // Debt-free withdrawal empties and removes the position.
    s.lending.withdraw_collateral(&user, &100_0000000);
    assert_eq!(s.sxlm.balance(&user), 100_0000000);
    assert_eq!(s.lending.total_collateral(), 0);
    assert!(s.lending.get_position(&user).is_none());
}

#[test]
fn test_borrow_health_factor() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);

    s.lending.borrow(&user, &70_0000000);
    assert_eq!(s.native.balance(&user), 70_0000000);
    assert_eq!(s.lending.total_borrowed(), 70_0000000);
    assert_eq!(s.lending.get_pool_balance(), 1000_0000000 - 70_0000000);
    // 0.8 * 100 / 70 at 10^7 scale
    assert_eq!(s.lending.health_factor(&user), 11_428_571);
}

#[test]
fn test_max_borrow_uses_collateral_factor() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);
    assert_eq!(s.lending.max_borrow(&user), 70_0000000);

    s.lending.borrow(&user, &30_0000000);
    assert_eq!(s.lending.max_borrow(&user), 40_0000000);
}

#[test]
fn test_borrow_to_exact_threshold() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);

    // hf lands exactly on 1.0
    s.lending.borrow(&user, &80_0000000);
    assert_eq!(s.lending.health_factor(&user), 10_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_borrow_one_stroop_past_threshold() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);
    s.lending.borrow(&user, &(80_0000000 + 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_borrow_beyond_pool() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 10_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);
    s.lending.borrow(&user, &10_0000001);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_borrow_without_position() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 100_0000000);

    let user = Address::generate(&e);
    s.lending.borrow(&user, &1_0000000);
}

#[test]
fn test_withdraw_collateral_to_exact_threshold() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);
    s.lending.borrow(&user, &40_0000000);

    // Debt 40 at LT 80% needs collateral 50; shedding down to it is allowed.
    s.lending.withdraw_collateral(&user, &50_0000000);
    assert_eq!(s.lending.health_factor(&user), 10_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_withdraw_collateral_past_threshold() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);
    s.lending.borrow(&user, &40_0000000);
    s.lending.withdraw_collateral(&user, &(50_0000000 + 1));
}

#[test]
fn test_repay_clamps_to_debt() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.native_asset.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);
    s.lending.borrow(&user, &50_0000000);

    let repaid = s.lending.repay(&user, &999_0000000);
    assert_eq!(repaid, 50_0000000);
    assert_eq!(s.lending.total_borrowed(), 0);

    // Debt cleared; the full collateral is free again.
    s.lending.withdraw_collateral(&user, &100_0000000);
    assert!(s.lending.get_position(&user).is_none());
}

#[test]
#[should_panic(expected = "Error(Contract, #6)")]
fn test_repay_without_debt() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &100_0000000);
    s.lending.repay(&user, &1_0000000);
}

#[test]
fn test_interest_accrual_over_a_year() {
    let e = Env::default();
    e.mock_all_auths();
    // 10% per year
    let s = setup(&e, 7000, 8000, 1000);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &200_0000000);
    s.native_asset.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &200_0000000);
    s.lending.borrow(&user, &100_0000000);

    e.ledger().with_mut(|li| li.sequence_number += 6_307_200);

    // One year at 10% simple interest on the accumulator.
    let repaid = s.lending.repay(&user, &200_0000000);
    assert_eq!(repaid, 110_0000000);
    assert_eq!(s.lending.get_accumulator(), 11_000_000);
    assert_eq!(s.lending.total_accrued_interest(), 10_0000000);
    assert_eq!(s.lending.total_borrowed(), 0);
}

#[test]
fn test_harvest_interest() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 1000);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &200_0000000);
    s.native_asset.mint(&user, &100_0000000);
    s.lending.deposit_collateral(&user, &200_0000000);
    s.lending.borrow(&user, &100_0000000);

    e.ledger().with_mut(|li| li.sequence_number += 6_307_200);
    s.lending.repay(&user, &200_0000000);

    let admin_before = s.native.balance(&s.admin);
    let harvested = s.lending.harvest_interest();
    assert_eq!(harvested, 10_0000000);
    assert_eq!(s.native.balance(&s.admin), admin_before + 10_0000000);
    assert_eq!(s.lending.total_accrued_interest(), 0);
}

#[test]
fn test_liquidation_flow() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let borrower = Address::generate(&e);
    let liquidator = Address::generate(&e);
    s.sxlm.mint(&borrower, &100_0000000);
    s.native_asset.mint(&liquidator, &100_0000000);

    s.lending.deposit_collateral(&borrower, &100_0000000);
    s.lending.borrow(&borrower, &70_0000000);

    // Rate drops from 1.0 to 0.7; hf falls to 0.8.
    s.lending.update_exchange_rate(&7_000_000);
    assert_eq!(s.lending.health_factor(&borrower), 8_000_000);

    let (debt_repaid, collateral_seized) = s.lending.liquidate(&liquidator, &borrower);
    // Half the debt at close factor 50%.
    assert_eq!(debt_repaid, 35_0000000);
    // 35 XLM at 0.7 with a 5% bonus = 52.5 sXLM.
    assert_eq!(collateral_seized, 52_5000000);

    assert_eq!(s.sxlm.balance(&liquidator), 52_5000000);
    let position = s.lending.get_position(&borrower).unwrap();
    assert_eq!(position.xlm_borrowed_principal, 35_0000000);
    assert_eq!(position.sxlm_collateral, 100_0000000 - 52_5000000);
    assert_eq!(s.lending.total_borrowed(), 35_0000000);
    assert_eq!(s.lending.total_collateral(), 100_0000000 - 52_5000000);
}

#[test]
fn test_liquidation_seizure_clamped_to_collateral() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let borrower = Address::generate(&e);
    let liquidator = Address::generate(&e);
    s.sxlm.mint(&borrower, &100_0000000);
    s.native_asset.mint(&liquidator, &100_0000000);

    s.lending.deposit_collateral(&borrower, &100_0000000);
    s.lending.borrow(&borrower, &80_0000000);

    // Crash far enough that the bonus-priced seizure exceeds the collateral.
    s.lending.update_exchange_rate(&1_000_000);
    let (_, collateral_seized) = s.lending.liquidate(&liquidator, &borrower);
    assert_eq!(collateral_seized, 100_0000000);
    assert_eq!(s.lending.total_collateral(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #5)")]
fn test_liquidate_healthy_borrower() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let borrower = Address::generate(&e);
    let liquidator = Address::generate(&e);
    s.sxlm.mint(&borrower, &100_0000000);
    s.native_asset.mint(&liquidator, &100_0000000);

    s.lending.deposit_collateral(&borrower, &100_0000000);
    s.lending.borrow(&borrower, &70_0000000);
    s.lending.liquidate(&liquidator, &borrower);
}

#[test]
fn test_aggregates_match_position_sums() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    s.sxlm.mint(&alice, &100_0000000);
    s.sxlm.mint(&bob, &60_0000000);
    s.native_asset.mint(&alice, &50_0000000);

    s.lending.deposit_collateral(&alice, &100_0000000);
    s.lending.deposit_collateral(&bob, &60_0000000);
    s.lending.borrow(&alice, &30_0000000);
    s.lending.borrow(&bob, &20_0000000);
    s.lending.repay(&alice, &10_0000000);

    let pa = s.lending.get_position(&alice).unwrap();
    let pb = s.lending.get_position(&bob).unwrap();
    assert_eq!(
        s.lending.total_collateral(),
        pa.sxlm_collateral + pb.sxlm_collateral
    );
    assert_eq!(
        s.lending.total_borrowed(),
        pa.xlm_borrowed_principal + pb.xlm_borrowed_principal
    );
}

#[test]
fn test_repeated_liquidation_halves_again() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    fund_pool(&s, 1000_0000000);

    let borrower = Address::generate(&e);
    let liquidator = Address::generate(&e);
    s.sxlm.mint(&borrower, &100_0000000);
    s.native_asset.mint(&liquidator, &100_0000000);

    s.lending.deposit_collateral(&borrower, &100_0000000);
    s.lending.borrow(&borrower, &70_0000000);
    s.lending.update_exchange_rate(&7_000_000);

    let (first_repaid, _) = s.lending.liquidate(&liquidator, &borrower);
    assert_eq!(first_repaid, 35_0000000);

    // Still under water after the first cut; a second close is allowed and
    // works off the remaining debt.
    let (second_repaid, _) = s.lending.liquidate(&liquidator, &borrower);
    assert_eq!(second_repaid, 17_5000000);
    let position = s.lending.get_position(&borrower).unwrap();
    assert_eq!(position.xlm_borrowed_principal, 17_5000000);
}

#[test]
#[should_panic(expected = "Error(Contract, #11)")]
fn test_withdraw_more_collateral_than_held() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &10_0000000);
    s.lending.deposit_collateral(&user, &10_0000000);
    s.lending.withdraw_collateral(&user, &10_0000001);
}

#[test]
#[should_panic(expected = "Error(Contract, #10)")]
fn test_negative_collateral_rejected() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);

    let user = Address::generate(&e);
    s.lending.deposit_collateral(&user, &-5);
}

#[test]
fn test_second_borrow_rebases_existing_debt() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 1000);
    fund_pool(&s, 1000_0000000);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &400_0000000);
    s.lending.deposit_collateral(&user, &400_0000000);
    s.lending.borrow(&user, &100_0000000);

    // A year of interest lands on the first tranche before the second draw.
    e.ledger().with_mut(|li| li.sequence_number += 6_307_200);
    s.lending.borrow(&user, &50_0000000);

    let position = s.lending.get_position(&user).unwrap();
    assert_eq!(position.xlm_borrowed_principal, 160_0000000);
    assert_eq!(position.borrow_index, 11_000_000);
    assert_eq!(s.lending.total_borrowed(), 160_0000000);
}

#[test]
fn test_health_factor_infinite_without_debt() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);

    let user = Address::generate(&e);
    s.sxlm.mint(&user, &10_0000000);
    s.lending.deposit_collateral(&user, &10_0000000);
    assert_eq!(s.lending.health_factor(&user), i128::MAX);
}

#[test]
#[should_panic(expected = "Error(Contract, #12)")]
fn test_exchange_rate_must_be_positive() {
    let e = Env::default();
    e.mock_all_auths();
    let s = setup(&e, 7000, 8000, 0);
    s.lending.update_exchange_rate(&0);
}
