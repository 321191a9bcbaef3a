#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Reply, StdResult,
    SubMsgResult,
};
use cw2::{get_contract_version, set_contract_version};
use raffle_utils::{
    state::{is_valid_name, is_valid_prefix},
    types::Response,
};

use crate::{
    error::ContractError,
    execute::{execute_enter_raffle, execute_perform_upkeep, execute_receive_nois},
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{
        query_audit_log, query_check_upkeep, query_config, query_entrant, query_entrant_count,
        query_entrants, query_pot, query_recent_winner, query_round, query_round_result,
    },
    state::{
        save_round, Config, RandomnessParams, Round, CONFIG, DEFAULT_JOB_PREFIX,
        MAX_JOB_PREFIX_LENGTH,
    },
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REQUEST_RANDOMNESS_REPLY_ID: u64 = 1;
pub const PAYOUT_REPLY_ID: u64 = 2;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // valid name
    if !is_valid_name(&msg.name) {
        return Err(ContractError::InvalidName {});
    }
    ensure!(
        !msg.entry_fee.amount.is_zero() && !msg.entry_fee.denom.is_empty(),
        ContractError::InvalidEntryFee {}
    );
    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    let job_prefix = msg
        .job_prefix
        .unwrap_or_else(|| DEFAULT_JOB_PREFIX.to_string());
    ensure!(
        is_valid_prefix(&job_prefix, MAX_JOB_PREFIX_LENGTH),
        ContractError::InvalidJobPrefix {}
    );

    let config = Config {
        name: msg.name,
        entry_fee: msg.entry_fee,
        min_interval: msg.min_interval,
        randomness: RandomnessParams {
            nois_proxy_addr,
            nois_proxy_fee: msg
                .nois_proxy_fee
                .into_iter()
                .filter(|c| !c.amount.is_zero())
                .collect(),
            randomness_delay: msg.randomness_delay,
            job_prefix,
        },
    };
    CONFIG.save(deps.storage, &config)?;

    // The single round lives as long as the contract
    let round = Round::new(0, env.block.time);
    save_round(deps.storage, &round)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", config.name)
        .add_attribute("entry_fee", config.entry_fee.to_string())
        .add_attribute("min_interval", config.min_interval.to_string())
        .add_attribute("nois_proxy_addr", config.randomness.nois_proxy_addr)
        .add_attribute("opened_at", round.opened_at.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => execute_enter_raffle(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => execute_perform_upkeep(deps, env, info),
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Round {} => to_json_binary(&query_round(deps)?)?,
        QueryMsg::CheckUpkeep {} => to_json_binary(&query_check_upkeep(deps, env)?)?,
        QueryMsg::Entrants { start_after, limit } => {
            to_json_binary(&query_entrants(deps, start_after, limit)?)?
        }
        QueryMsg::Entrant { index } => to_json_binary(&query_entrant(deps, index)?)?,
        QueryMsg::EntrantCount {} => to_json_binary(&query_entrant_count(deps)?)?,
        QueryMsg::Pot {} => to_json_binary(&query_pot(deps)?)?,
        QueryMsg::RecentWinner {} => to_json_binary(&query_recent_winner(deps)?)?,
        QueryMsg::RoundResult { round_id } => {
            to_json_binary(&query_round_result(deps, round_id)?)?
        }
        QueryMsg::AuditLog { start_after, limit } => {
            to_json_binary(&query_audit_log(deps, start_after, limit)?)?
        }
    };
    Ok(response)
}

/// Both sub-messages are dispatched reply-on-error.
/// Returning an error here reverts the transaction that dispatched them.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Ok(_) => None,
        SubMsgResult::Err(reason) => Some(reason),
    };
    match (msg.id, reason) {
        (REQUEST_RANDOMNESS_REPLY_ID | PAYOUT_REPLY_ID, None) => Ok(Response::default()),
        (REQUEST_RANDOMNESS_REPLY_ID, Some(reason)) => {
            deps.api
                .debug(&format!("raffle: randomness request rejected: {reason}"));
            Err(ContractError::RandomnessRequestFailed { reason })
        }
        (PAYOUT_REPLY_ID, Some(reason)) => {
            deps.api.debug(&format!("raffle: payout rejected: {reason}"));
            Err(ContractError::PayoutTransferFailed { reason })
        }
        (id, _) => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", previous.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
