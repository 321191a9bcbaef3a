use anyhow::Error as anyhow_error;
use cosmwasm_std::{coins, Addr, Coin, HexBinary};
use cw_multi_test::{App, AppResponse, Executor};
use raffle::msg::{ExecuteMsg as RaffleExecuteMsg, InstantiateMsg};

use crate::common_setup::{
    constants::{ENTRY_DENOM, ENTRY_FEE, KEEPER_ADDR, OWNER_ADDR},
    msg::RaffleContracts,
    nois_proxy::ExecuteMsg as NoisExecuteMsg,
};

pub fn instantiate_raffle_contract(
    app: &mut App,
    raffle_code_id: u64,
    msg: &InstantiateMsg,
) -> Result<Addr, anyhow_error> {
    app.instantiate_contract(
        raffle_code_id,
        Addr::unchecked(OWNER_ADDR),
        msg,
        &[],
        "raffle",
        None,
    )
}

pub fn enter_raffle(
    app: &mut App,
    contracts: &RaffleContracts,
    sender: &Addr,
    funds: &[Coin],
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        sender.clone(),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::EnterRaffle {},
        funds,
    )
}

/// Every entrant pays exactly the entry fee, in order
pub fn enter_all(app: &mut App, contracts: &RaffleContracts, entrants: &[&Addr]) {
    for entrant in entrants {
        enter_raffle(app, contracts, entrant, &coins(ENTRY_FEE, ENTRY_DENOM)).unwrap();
    }
}

pub fn perform_upkeep(
    app: &mut App,
    contracts: &RaffleContracts,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::PerformUpkeep {},
        &[],
    )
}

/// Has the mock proxy call back the raffle for `job_id`
pub fn deliver_randomness(
    app: &mut App,
    contracts: &RaffleContracts,
    job_id: &str,
    randomness: HexBinary,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        Addr::unchecked(OWNER_ADDR),
        contracts.nois.clone(),
        &NoisExecuteMsg::Deliver {
            consumer: contracts.raffle.to_string(),
            job_id: job_id.to_string(),
            randomness,
        },
        &[],
    )
}

pub fn set_nois_outage(app: &mut App, contracts: &RaffleContracts, outage: bool) {
    app.execute_contract(
        Addr::unchecked(OWNER_ADDR),
        contracts.nois.clone(),
        &NoisExecuteMsg::SetOutage { outage },
        &[],
    )
    .unwrap();
}
