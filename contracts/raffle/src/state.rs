use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, StdError, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::events::AuditRecord;

pub const DEFAULT_JOB_PREFIX: &str = "raffle";
pub const MAX_JOB_PREFIX_LENGTH: usize = 32;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<Round> = Item::new("round");
/// Entrants of every round, keyed by (round_id, insertion index)
pub const ENTRANTS: Map<(u64, u32), Addr> = Map::new("entrants");
pub const ROUND_RESULTS: Map<u64, RoundResult> = Map::new("round_results");
pub const AUDIT_LOG: Map<u64, AuditRecord> = Map::new("audit_log");
pub const AUDIT_SEQUENCE: Item<u64> = Item::new("audit_sequence");

#[cw_serde]
pub struct Config {
    pub name: String,
    /// Minimum deposit for a single entry
    pub entry_fee: Coin,
    /// Minimum number of seconds a round stays open before it can be drawn
    pub min_interval: u64,
    pub randomness: RandomnessParams,
}

/// Parameters handed to the randomness gateway with every request
#[cw_serde]
pub struct RandomnessParams {
    pub nois_proxy_addr: Addr,
    /// Paid from the contract balance with each request, never from the pot
    pub nois_proxy_fee: Vec<Coin>,
    /// Ask for randomness published at least this many seconds after the trigger
    pub randomness_delay: Option<u64>,
    pub job_prefix: String,
}

#[cw_serde]
#[derive(Copy, Eq)]
pub enum RoundState {
    Open,
    Drawing,
}

#[cw_serde]
pub struct Round {
    pub round_id: u64,
    pub state: RoundState,
    pub entrant_count: u32,
    pub pot: Uint128,
    pub opened_at: Timestamp,
    /// Job id of the in-flight randomness request, only set while drawing
    pub pending_request: Option<String>,
    pub draw_started_at: Option<Timestamp>,
}

impl Round {
    pub fn new(round_id: u64, opened_at: Timestamp) -> Self {
        Round {
            round_id,
            state: RoundState::Open,
            entrant_count: 0,
            pot: Uint128::zero(),
            opened_at,
            pending_request: None,
            draw_started_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == RoundState::Open
    }

    /// Moves the round to `Drawing` with `request_id` as the only accepted fulfillment.
    pub fn start_drawing(&mut self, request_id: String, now: Timestamp) {
        self.state = RoundState::Drawing;
        self.pending_request = Some(request_id);
        self.draw_started_at = Some(now);
    }

    /// The round that follows a payout. Entrants of the settled round stay
    /// under the previous round_id and are no longer reachable as current entrants.
    pub fn next(&self, now: Timestamp) -> Self {
        Round::new(self.round_id + 1, now)
    }

    pub fn assert_invariants(&self) -> StdResult<()> {
        if (self.entrant_count == 0) != self.pot.is_zero() {
            return Err(StdError::generic_err(format!(
                "Round {} holds {} entrants for a pot of {}",
                self.round_id, self.entrant_count, self.pot
            )));
        }
        let drawing = self.state == RoundState::Drawing;
        if drawing != self.pending_request.is_some() || drawing != self.draw_started_at.is_some()
        {
            return Err(StdError::generic_err(format!(
                "Round {} is {:?} with pending request {:?}",
                self.round_id, self.state, self.pending_request
            )));
        }
        Ok(())
    }
}

/// Outcome of a settled round
#[cw_serde]
pub struct RoundResult {
    pub round_id: u64,
    pub winner: Addr,
    pub payout: Coin,
    pub request_id: String,
    pub entrant_count: u32,
    pub settled_at: Timestamp,
}

pub fn load_round(storage: &dyn Storage) -> StdResult<Round> {
    ROUND.load(storage)
}

/// Every write of the round goes through here so a broken invariant aborts the transaction.
pub fn save_round(storage: &mut dyn Storage, round: &Round) -> StdResult<()> {
    round.assert_invariants()?;
    ROUND.save(storage, round)
}
