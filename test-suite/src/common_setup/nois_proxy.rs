//! Stand-in for the nois proxy. Requests are recorded and only answered when a
//! test sends `Deliver`, so a test picks the randomness and may replay it.
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, HexBinary, MessageInfo, StdError,
    StdResult, Timestamp, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use nois::NoisCallback;
use raffle_utils::types::{CosmosMsg, Response};

#[cw_serde]
pub struct Config {
    fee: Vec<Coin>,
    outage: bool,
}

#[cw_serde]
pub struct Job {
    pub after: Option<Timestamp>,
    pub deliveries: u32,
}

const CONFIG: Item<Config> = Item::new("config");
const JOBS: Map<(Addr, String), Job> = Map::new("jobs");

#[cw_serde]
pub struct InstantiateMsg {
    pub fee: Vec<Coin>,
}

/// Superset of `nois::ProxyExecuteMsg`, the request variants share its encoding
#[cw_serde]
pub enum ExecuteMsg {
    GetNextRandomness {
        job_id: String,
    },
    GetRandomnessAfter {
        after: Timestamp,
        job_id: String,
    },
    SetOutage {
        outage: bool,
    },
    Deliver {
        consumer: String,
        job_id: String,
        randomness: HexBinary,
    },
}

#[cw_serde]
pub enum QueryMsg {
    Job { consumer: String, job_id: String },
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    CONFIG.save(
        deps.storage,
        &Config {
            fee: msg.fee,
            outage: false,
        },
    )?;
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Job { consumer, job_id } => to_json_binary(
            &JOBS.may_load(deps.storage, (deps.api.addr_validate(&consumer)?, job_id))?,
        ),
    }
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => register_job(deps, info, None, job_id),
        ExecuteMsg::GetRandomnessAfter { after, job_id } => {
            register_job(deps, info, Some(after), job_id)
        }
        ExecuteMsg::SetOutage { outage } => {
            CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
                config.outage = outage;
                Ok(config)
            })?;
            Ok(Response::new())
        }
        ExecuteMsg::Deliver {
            consumer,
            job_id,
            randomness,
        } => deliver(deps, env, consumer, job_id, randomness),
    }
}

fn register_job(
    deps: DepsMut,
    info: MessageInfo,
    after: Option<Timestamp>,
    job_id: String,
) -> StdResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    if config.outage {
        return Err(StdError::generic_err("Nois proxy unavailable"));
    }
    if info.funds != config.fee {
        return Err(StdError::generic_err("Nois not enough funds sent to proxy"));
    }

    let key = (info.sender, job_id);
    if JOBS.has(deps.storage, key.clone()) {
        return Err(StdError::generic_err("Job id already used"));
    }
    JOBS.save(
        deps.storage,
        key,
        &Job {
            after,
            deliveries: 0,
        },
    )?;
    Ok(Response::new().add_attribute("action", "register_job"))
}

/// Sends the callback for a registered job. Replays are not refused here.
fn deliver(
    deps: DepsMut,
    env: Env,
    consumer: String,
    job_id: String,
    randomness: HexBinary,
) -> StdResult<Response> {
    let consumer = deps.api.addr_validate(&consumer)?;
    let key = (consumer.clone(), job_id.clone());
    let mut job = JOBS
        .may_load(deps.storage, key.clone())?
        .ok_or_else(|| StdError::not_found(format!("Job {job_id}")))?;

    // Make sure we are after the requested publication time
    if let Some(after) = job.after {
        if env.block.time < after {
            return Err(StdError::generic_err("Too soon to deliver randomness"));
        }
    }
    job.deliveries += 1;
    JOBS.save(deps.storage, key, &job)?;

    Ok(
        Response::new().add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: consumer.to_string(),
            msg: to_json_binary(&raffle::msg::ExecuteMsg::NoisReceive {
                callback: NoisCallback {
                    job_id,
                    published: env.block.time,
                    randomness,
                },
            })?,
            funds: vec![],
        })),
    )
}
