use cosmwasm_std::{Addr, Coin, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::{
    eligibility::evaluate,
    ledger::{current_entrants, current_pot, entrant_at, DEFAULT_LIMIT, MAX_LIMIT},
    msg::{
        AuditLogResponse, CheckUpkeepResponse, ConfigResponse, EntrantResponse,
        EntrantsResponse, RoundResponse,
    },
    state::{load_round, RoundResult, AUDIT_LOG, CONFIG, ROUND_RESULTS},
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        name: config.name,
        entry_fee: config.entry_fee,
        min_interval: config.min_interval,
        randomness: config.randomness,
    })
}

pub fn query_round(deps: Deps) -> StdResult<RoundResponse> {
    let round = load_round(deps.storage)?;
    Ok(RoundResponse {
        round_id: round.round_id,
        state: round.state,
        entrant_count: round.entrant_count,
        pot: round.pot,
        opened_at: round.opened_at,
        pending_request: round.pending_request,
        draw_started_at: round.draw_started_at,
    })
}

pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<CheckUpkeepResponse> {
    let config = CONFIG.load(deps.storage)?;
    let round = load_round(deps.storage)?;
    Ok(evaluate(&config, &round, env.block.time))
}

pub fn query_entrants(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<EntrantsResponse> {
    let round = load_round(deps.storage)?;
    let entrants = current_entrants(deps.storage, &round, start_after, limit)?
        .into_iter()
        .map(|(index, address)| EntrantResponse { index, address })
        .collect();

    Ok(EntrantsResponse {
        round_id: round.round_id,
        entrants,
    })
}

pub fn query_entrant(deps: Deps, index: u32) -> StdResult<Addr> {
    let round = load_round(deps.storage)?;
    entrant_at(deps.storage, &round, index)
}

pub fn query_entrant_count(deps: Deps) -> StdResult<u32> {
    Ok(load_round(deps.storage)?.entrant_count)
}

pub fn query_pot(deps: Deps) -> StdResult<Coin> {
    let config = CONFIG.load(deps.storage)?;
    let round = load_round(deps.storage)?;
    Ok(current_pot(&config.entry_fee, &round))
}

/// Result of the last settled round, none before the first payout
pub fn query_recent_winner(deps: Deps) -> StdResult<Option<RoundResult>> {
    ROUND_RESULTS
        .range(deps.storage, None, None, Order::Descending)
        .next()
        .transpose()
        .map(|last| last.map(|(_, result)| result))
}

pub fn query_round_result(deps: Deps, round_id: u64) -> StdResult<Option<RoundResult>> {
    ROUND_RESULTS.may_load(deps.storage, round_id)
}

pub fn query_audit_log(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AuditLogResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let records = AUDIT_LOG
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AuditLogResponse { records })
}
