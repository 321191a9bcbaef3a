use cosmwasm_std::{Addr, Coin, Event, HexBinary};
use cw_multi_test::{App, AppResponse};
use raffle::{
    events::AuditRecord,
    msg::{
        AuditLogResponse, CheckUpkeepResponse, ConfigResponse, EntrantsResponse, QueryMsg,
        RoundResponse,
    },
    state::RoundResult,
};

use crate::common_setup::{
    msg::RaffleContracts,
    nois_proxy::{Job, QueryMsg as NoisQueryMsg},
};

/// 32 bytes of randomness reading as `value` in big-endian
pub fn randomness_from(value: u64) -> HexBinary {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    HexBinary::from(bytes.to_vec())
}

pub fn find_event<'a>(res: &'a AppResponse, ty: &str) -> Option<&'a Event> {
    let ty = format!("wasm-{ty}");
    res.events.iter().find(|e| e.ty == ty)
}

pub fn event_attribute(event: &Event, key: &str) -> String {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("missing attribute {key} on {}", event.ty))
}

pub fn raffle_config(app: &App, contracts: &RaffleContracts) -> ConfigResponse {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Config {})
        .unwrap()
}

pub fn round_info(app: &App, contracts: &RaffleContracts) -> RoundResponse {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Round {})
        .unwrap()
}

pub fn check_upkeep(app: &App, contracts: &RaffleContracts) -> CheckUpkeepResponse {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::CheckUpkeep {})
        .unwrap()
}

pub fn entrants(
    app: &App,
    contracts: &RaffleContracts,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> EntrantsResponse {
    app.wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::Entrants { start_after, limit },
        )
        .unwrap()
}

pub fn entrant_count(app: &App, contracts: &RaffleContracts) -> u32 {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::EntrantCount {})
        .unwrap()
}

pub fn pot(app: &App, contracts: &RaffleContracts) -> Coin {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Pot {})
        .unwrap()
}

pub fn recent_winner(app: &App, contracts: &RaffleContracts) -> Option<RoundResult> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RecentWinner {})
        .unwrap()
}

pub fn round_result(app: &App, contracts: &RaffleContracts, round_id: u64) -> Option<RoundResult> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RoundResult { round_id })
        .unwrap()
}

pub fn audit_log(app: &App, contracts: &RaffleContracts) -> Vec<AuditRecord> {
    let res: AuditLogResponse = app
        .wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::AuditLog {
                start_after: None,
                limit: Some(100),
            },
        )
        .unwrap();
    res.records
}

pub fn nois_job(app: &App, contracts: &RaffleContracts, job_id: &str) -> Option<Job> {
    app.wrap()
        .query_wasm_smart(
            contracts.nois.clone(),
            &NoisQueryMsg::Job {
                consumer: contracts.raffle.to_string(),
                job_id: job_id.to_string(),
            },
        )
        .unwrap()
}

pub fn balance_of(app: &App, addr: &Addr, denom: &str) -> u128 {
    app.wrap().query_balance(addr, denom).unwrap().amount.u128()
}
