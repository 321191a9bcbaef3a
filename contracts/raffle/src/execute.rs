use cosmwasm_std::{ensure_eq, BankMsg, Coin, DepsMut, Env, MessageInfo};
use cw_utils::{may_pay, nonpayable};
use nois::NoisCallback;
use raffle_utils::types::{Response, SubMsg};

use crate::{
    contract::PAYOUT_REPLY_ID,
    eligibility::ensure_upkeep_needed,
    error::ContractError,
    events::{record, AuditEvent},
    ledger::{admit_entrant, current_pot, ensure_accepting_entries, entrant_at},
    randomness::{ensure_fee_reserve, random_value, request_randomness, winner_index},
    state::{load_round, save_round, RoundResult, RoundState, CONFIG, ROUND_RESULTS},
};

pub fn execute_enter_raffle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = load_round(deps.storage)?;

    // A drawing round refuses entries whatever was sent
    ensure_accepting_entries(&round)?;
    let deposit = may_pay(&info, &config.entry_fee.denom)?;

    let index = admit_entrant(
        deps.storage,
        &mut round,
        &config.entry_fee,
        &info.sender,
        deposit,
    )?;
    save_round(deps.storage, &round)?;

    let resulting_pot = current_pot(&config.entry_fee, &round);
    let event = record(
        deps.storage,
        &env,
        round.round_id,
        AuditEvent::EntryRecorded {
            participant: info.sender.clone(),
            amount: Coin::new(deposit.u128(), config.entry_fee.denom.clone()),
            resulting_pot: resulting_pot.clone(),
        },
    )?;
    deps.api.debug(&format!(
        "raffle: round {} admitted {} at index {}, pot {}",
        round.round_id, info.sender, index, resulting_pot
    ));

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "enter_raffle")
        .add_attribute("round_id", round.round_id.to_string())
        .add_attribute("entrant", info.sender)
        .add_attribute("index", index.to_string())
        .add_attribute("pot", resulting_pot.to_string()))
}

/// Moves an eligible round to drawing and requests its randomness.
/// Conditions are checked again here, a stale trigger gets `UpkeepNotNeeded`.
pub fn execute_perform_upkeep(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    let mut round = load_round(deps.storage)?;

    if let Err(err) = ensure_upkeep_needed(&config, &round, env.block.time) {
        deps.api
            .debug(&format!("raffle: upkeep rejected for round {}: {}", round.round_id, err));
        return Err(err);
    }

    let pot = current_pot(&config.entry_fee, &round);
    ensure_fee_reserve(deps.as_ref(), &env, &config.randomness, &pot)?;

    let (job_id, request) = request_randomness(&config.randomness, &round, env.block.time)?;
    round.start_drawing(job_id.clone(), env.block.time);
    save_round(deps.storage, &round)?;

    let event = record(
        deps.storage,
        &env,
        round.round_id,
        AuditEvent::DrawStarted {
            request_id: job_id.clone(),
            entrant_count: round.entrant_count,
        },
    )?;
    deps.api.debug(&format!(
        "raffle: round {} drawing, requested {} for {} entrants",
        round.round_id, job_id, round.entrant_count
    ));

    Ok(Response::new()
        .add_submessage(request)
        .add_event(event)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("round_id", round.round_id.to_string())
        .add_attribute("job_id", job_id)
        .add_attribute("entrant_count", round.entrant_count.to_string())
        .add_attribute("pot", pot.to_string()))
}

/// Settles the drawing round with the randomness delivered by the proxy:
/// records the result, opens the next round and pays the whole pot to the winner.
pub fn execute_receive_nois(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness
    ensure_eq!(
        info.sender,
        config.randomness.nois_proxy_addr,
        ContractError::UnauthorizedReceive
    );

    let round = load_round(deps.storage)?;
    let job_id = callback.job_id;
    let is_pending =
        round.state == RoundState::Drawing && round.pending_request.as_deref() == Some(&*job_id);
    if !is_pending {
        deps.api.debug(&format!(
            "raffle: rejected fulfillment {} for round {} in state {:?} (pending {:?})",
            job_id, round.round_id, round.state, round.pending_request
        ));
        return Err(ContractError::UnknownOrStaleRequest { job_id });
    }

    let value = random_value(&callback.randomness)?;
    let index = winner_index(value, round.entrant_count)?;
    let winner = entrant_at(deps.storage, &round, index)?;
    let payout = current_pot(&config.entry_fee, &round);

    ROUND_RESULTS.save(
        deps.storage,
        round.round_id,
        &RoundResult {
            round_id: round.round_id,
            winner: winner.clone(),
            payout: payout.clone(),
            request_id: job_id.clone(),
            entrant_count: round.entrant_count,
            settled_at: env.block.time,
        },
    )?;
    let next = round.next(env.block.time);
    save_round(deps.storage, &next)?;

    let event = record(
        deps.storage,
        &env,
        round.round_id,
        AuditEvent::WinnerSelected {
            winner: winner.clone(),
            payout: payout.clone(),
            request_id: job_id.clone(),
        },
    )?;
    deps.api.debug(&format!(
        "raffle: round {} won by {} (index {} of {}), paying {}",
        round.round_id, winner, index, round.entrant_count, payout
    ));

    // A rejected transfer fails the reply and reverts the whole settlement
    let transfer = SubMsg::reply_on_error(
        BankMsg::Send {
            to_address: winner.to_string(),
            amount: vec![payout.clone()],
        },
        PAYOUT_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(transfer)
        .add_event(event)
        .add_attribute("action", "receive_nois")
        .add_attribute("round_id", round.round_id.to_string())
        .add_attribute("job_id", job_id)
        .add_attribute("winner", winner)
        .add_attribute("winner_index", index.to_string())
        .add_attribute("payout", payout.to_string())
        .add_attribute("next_round_id", next.round_id.to_string()))
}
