//! Entrants and pot of the current round.
use cosmwasm_std::{Addr, Coin, Order, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::Bound;

use crate::{
    error::ContractError,
    state::{Round, RoundState, ENTRANTS},
};

pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_LIMIT: u32 = 10;

pub fn ensure_accepting_entries(round: &Round) -> Result<(), ContractError> {
    match round.state {
        RoundState::Open => Ok(()),
        state => Err(ContractError::RoundNotAcceptingEntries { state }),
    }
}

/// Appends `participant` to the round and adds the whole deposit to the pot.
/// Returns the insertion index of the new entrant.
/// The caller is responsible for saving the round afterwards.
pub fn admit_entrant(
    storage: &mut dyn Storage,
    round: &mut Round,
    entry_fee: &Coin,
    participant: &Addr,
    deposit: Uint128,
) -> Result<u32, ContractError> {
    ensure_accepting_entries(round)?;
    if deposit < entry_fee.amount {
        return Err(ContractError::InsufficientDeposit {
            required: entry_fee.clone(),
            received: Coin::new(deposit.u128(), entry_fee.denom.clone()),
        });
    }

    let index = round.entrant_count;
    ENTRANTS.save(storage, (round.round_id, index), participant)?;
    round.entrant_count = index
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("Entrant count overflow"))?;
    round.pot = round.pot.checked_add(deposit).map_err(StdError::from)?;

    Ok(index)
}

pub fn entrant_at(storage: &dyn Storage, round: &Round, index: u32) -> StdResult<Addr> {
    if index >= round.entrant_count {
        return Err(StdError::not_found(format!(
            "Entrant {} of round {}",
            index, round.round_id
        )));
    }
    ENTRANTS.load(storage, (round.round_id, index))
}

/// Entrants of the current round in insertion order, paginated by index
pub fn current_entrants(
    storage: &dyn Storage,
    round: &Round,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<(u32, Addr)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    ENTRANTS
        .prefix(round.round_id)
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

pub fn current_pot(entry_fee: &Coin, round: &Round) -> Coin {
    Coin {
        denom: entry_fee.denom.clone(),
        amount: round.pot,
    }
}
