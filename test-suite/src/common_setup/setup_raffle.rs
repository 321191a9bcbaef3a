use cosmwasm_std::{coin, coins, Addr};
use cw_multi_test::{App, BankSudo, Executor, SudoMsg};
use raffle::msg::InstantiateMsg;

use super::{
    constants::{
        ENTRY_DENOM, ENTRY_FEE, MIN_INTERVAL, NOIS_AMOUNT, NOIS_DENOM, OWNER_ADDR, RAFFLE_NAME,
    },
    contract_boxes::{contract_fake_nois, contract_raffle, custom_mock_app},
    helpers::setup_block_time,
    msg::{RaffleCodeIds, RaffleContracts, RaffleSetupParams},
    nois_proxy,
};

pub fn proper_raffle_instantiate() -> (App, RaffleContracts) {
    raffle_setup(RaffleSetupParams::default())
}

pub fn raffle_setup(params: RaffleSetupParams) -> (App, RaffleContracts) {
    let mut app = custom_mock_app();
    setup_block_time(&mut app, 1_647_032_400_000_000_000, Some(10000));

    let code_ids = raffle_template_code_ids(&mut app);

    let nois_addr = app
        .instantiate_contract(
            code_ids.nois_code_id,
            Addr::unchecked(OWNER_ADDR),
            &nois_proxy::InstantiateMsg {
                fee: coins(NOIS_AMOUNT, NOIS_DENOM),
            },
            &[],
            "nois",
            None,
        )
        .unwrap();

    let raffle_contract_addr = app
        .instantiate_contract(
            code_ids.raffle_code_id,
            Addr::unchecked(OWNER_ADDR),
            &InstantiateMsg {
                name: RAFFLE_NAME.to_string(),
                entry_fee: coin(ENTRY_FEE, ENTRY_DENOM),
                min_interval: MIN_INTERVAL,
                nois_proxy_addr: nois_addr.to_string(),
                nois_proxy_fee: coins(NOIS_AMOUNT, NOIS_DENOM),
                randomness_delay: params.randomness_delay,
                job_prefix: params.job_prefix,
            },
            &[],
            "raffle",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();

    // fund contract for nois_proxy fee
    if params.fee_reserve > 0 {
        app.sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: raffle_contract_addr.to_string(),
                amount: coins(params.fee_reserve, NOIS_DENOM),
            }
        }))
        .unwrap();
    }

    (
        app,
        RaffleContracts {
            raffle: raffle_contract_addr,
            nois: nois_addr,
        },
    )
}

pub fn raffle_template_code_ids(router: &mut App) -> RaffleCodeIds {
    let raffle_code_id = router.store_code(contract_raffle());
    let nois_code_id = router.store_code(contract_fake_nois());

    RaffleCodeIds {
        raffle_code_id,
        nois_code_id,
    }
}
