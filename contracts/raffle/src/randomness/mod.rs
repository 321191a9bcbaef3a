//! Boundary to the nois proxy: outgoing randomness requests and the
//! arithmetic applied to the value it delivers back.
use cosmwasm_std::{
    to_json_binary, Coin, Deps, Env, HexBinary, StdError, StdResult, Timestamp, Uint128,
    Uint256, WasmMsg,
};
use nois::ProxyExecuteMsg;
use raffle_utils::{
    payment::{assert_sufficient_funds, subtract_held},
    types::SubMsg,
};

use crate::{
    contract::REQUEST_RANDOMNESS_REPLY_ID,
    error::ContractError,
    state::{RandomnessParams, Round},
};

/// Correlation id of the request issued for `round_id`
pub fn job_id(params: &RandomnessParams, round_id: u64) -> String {
    format!("{}-{}", params.job_prefix, round_id)
}

/// Checks the contract can pay the proxy fee without touching the pot.
pub fn ensure_fee_reserve(
    deps: Deps,
    env: &Env,
    params: &RandomnessParams,
    pot: &Coin,
) -> Result<(), ContractError> {
    let balances = deps.querier.query_all_balances(&env.contract.address)?;
    let spendable = subtract_held(balances, pot);
    assert_sufficient_funds(&spendable, &params.nois_proxy_fee).map_err(|err| {
        ContractError::RandomnessRequestFailed {
            reason: err.to_string(),
        }
    })
}

/// Builds the proxy request for `round`.
/// Dispatched reply-on-error so a rejected request reverts the whole trigger.
pub fn request_randomness(
    params: &RandomnessParams,
    round: &Round,
    now: Timestamp,
) -> StdResult<(String, SubMsg)> {
    let job_id = job_id(params, round.round_id);
    let msg = match params.randomness_delay {
        Some(delay) => ProxyExecuteMsg::GetRandomnessAfter {
            after: now.plus_seconds(delay),
            job_id: job_id.clone(),
        },
        None => ProxyExecuteMsg::GetNextRandomness {
            job_id: job_id.clone(),
        },
    };

    let request = WasmMsg::Execute {
        contract_addr: params.nois_proxy_addr.to_string(),
        msg: to_json_binary(&msg)?,
        funds: params
            .nois_proxy_fee
            .iter()
            .filter(|c| !c.amount.is_zero())
            .cloned()
            .collect(), // Pay from the contract
    };

    Ok((
        job_id,
        SubMsg::reply_on_error(request, REQUEST_RANDOMNESS_REPLY_ID),
    ))
}

/// Reads the 32 randomness bytes as one big-endian integer.
pub fn random_value(randomness: &HexBinary) -> Result<Uint256, ContractError> {
    let bytes: [u8; 32] = randomness
        .to_array()
        .map_err(|_| ContractError::InvalidRandomness)?;
    Ok(Uint256::from_be_bytes(bytes))
}

/// `value mod entrant_count`. The modulo bias is kept on purpose, it is bounded by
/// `entrant_count / 2^256`.
pub fn winner_index(value: Uint256, entrant_count: u32) -> Result<u32, ContractError> {
    if entrant_count == 0 {
        return Err(ContractError::NoEligibleEntrants {});
    }
    let index = value % Uint256::from(entrant_count);
    let index = Uint128::try_from(index).map_err(StdError::from)?;
    u32::try_from(index.u128())
        .map_err(|_| StdError::generic_err("Winner index out of range").into())
}
