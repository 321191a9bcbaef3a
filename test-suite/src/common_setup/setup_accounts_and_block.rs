use cosmwasm_std::{coin, coins, Addr};
use cw_multi_test::{App, BankSudo, SudoMsg};

use super::constants::{ENTRY_DENOM, KEEPER_ADDR, NOIS_DENOM, OWNER_ADDR};

pub const INITIAL_BALANCE: u128 = 100_000_000_000_000;

pub fn setup_accounts(router: &mut App) -> (Addr, Addr) {
    // define accounts
    let owner = Addr::unchecked(OWNER_ADDR);
    let keeper = Addr::unchecked(KEEPER_ADDR);
    // fund accounts
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: owner.to_string(),
                amount: vec![
                    coin(INITIAL_BALANCE, ENTRY_DENOM),
                    coin(INITIAL_BALANCE, NOIS_DENOM),
                ],
            }
        }))
        .ok();
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: keeper.to_string(),
                amount: vec![coin(INITIAL_BALANCE, ENTRY_DENOM)],
            }
        }))
        .ok();

    (owner, keeper)
}

pub fn setup_raffle_participants(router: &mut App) -> (Addr, Addr, Addr, Addr, Addr, Addr) {
    // define accounts
    let one = Addr::unchecked("addr-one");
    let two = Addr::unchecked("addr-two");
    let three = Addr::unchecked("addr-three");
    let four = Addr::unchecked("addr-four");
    let five = Addr::unchecked("addr-five");
    let six = Addr::unchecked("addr-six");

    // fund accounts
    for participant in [&one, &two, &three, &four, &five, &six] {
        router
            .sudo(SudoMsg::Bank({
                BankSudo::Mint {
                    to_address: participant.to_string(),
                    amount: vec![coin(INITIAL_BALANCE, ENTRY_DENOM)],
                }
            }))
            .ok();
    }

    // check native balances
    for participant in [&one, &two, &three, &four, &five, &six] {
        let balances = router.wrap().query_all_balances(participant).unwrap();
        assert_eq!(balances, coins(INITIAL_BALANCE, ENTRY_DENOM));
    }

    (one, two, three, four, five, six)
}
