use cosmwasm_std::Timestamp;

use crate::{
    error::ContractError,
    msg::CheckUpkeepResponse,
    state::{Config, Round},
};

/// Whether the round can be drawn at `now`, with the reasons.
/// Pure: reads the given snapshot only.
pub fn evaluate(config: &Config, round: &Round, now: Timestamp) -> CheckUpkeepResponse {
    let elapsed = now.seconds().saturating_sub(round.opened_at.seconds());
    let is_open = round.is_open();
    let interval_elapsed = elapsed >= config.min_interval;
    let has_entrants = round.entrant_count > 0;
    let has_pot = !round.pot.is_zero();

    CheckUpkeepResponse {
        upkeep_needed: is_open && interval_elapsed && has_entrants && has_pot,
        is_open,
        interval_elapsed,
        has_entrants,
        has_pot,
        seconds_until_eligible: config.min_interval.saturating_sub(elapsed),
        pending_request: round.pending_request.clone(),
        drawing_since: round.draw_started_at,
    }
}

/// Re-runs [`evaluate`] at transition time.
pub fn ensure_upkeep_needed(
    config: &Config,
    round: &Round,
    now: Timestamp,
) -> Result<(), ContractError> {
    let check = evaluate(config, round, now);
    if !check.upkeep_needed {
        return Err(ContractError::UpkeepNotNeeded {
            is_open: check.is_open,
            interval_elapsed: check.interval_elapsed,
            entrant_count: round.entrant_count,
            pot: round.pot,
        });
    }
    Ok(())
}
