use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};
use nois::NoisCallback;

use crate::{
    events::AuditRecord,
    state::{RandomnessParams, RoundResult, RoundState},
};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub entry_fee: Coin,
    /// Seconds a round stays open before it can be drawn
    pub min_interval: u64,
    pub nois_proxy_addr: String,
    pub nois_proxy_fee: Vec<Coin>,
    pub randomness_delay: Option<u64>,
    pub job_prefix: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    EnterRaffle {},
    /// Starts the draw of the current round when it is eligible
    PerformUpkeep {},
    NoisReceive {
        callback: NoisCallback,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(RoundResponse)]
    Round {},
    #[returns(CheckUpkeepResponse)]
    CheckUpkeep {},
    #[returns(EntrantsResponse)]
    Entrants {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Addr)]
    Entrant { index: u32 },
    #[returns(u32)]
    EntrantCount {},
    #[returns(Coin)]
    Pot {},
    #[returns(Option<RoundResult>)]
    RecentWinner {},
    #[returns(Option<RoundResult>)]
    RoundResult { round_id: u64 },
    #[returns(AuditLogResponse)]
    AuditLog {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub entry_fee: Coin,
    pub min_interval: u64,
    pub randomness: RandomnessParams,
}

#[cw_serde]
pub struct RoundResponse {
    pub round_id: u64,
    pub state: RoundState,
    pub entrant_count: u32,
    pub pot: Uint128,
    pub opened_at: Timestamp,
    pub pending_request: Option<String>,
    pub draw_started_at: Option<Timestamp>,
}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub interval_elapsed: bool,
    pub has_entrants: bool,
    pub has_pot: bool,
    pub seconds_until_eligible: u64,
    /// Set while a draw waits for its randomness
    pub pending_request: Option<String>,
    pub drawing_since: Option<Timestamp>,
}

#[cw_serde]
pub struct EntrantResponse {
    pub index: u32,
    pub address: Addr,
}

#[cw_serde]
pub struct EntrantsResponse {
    pub round_id: u64,
    pub entrants: Vec<EntrantResponse>,
}

#[cw_serde]
pub struct AuditLogResponse {
    pub records: Vec<AuditRecord>,
}
