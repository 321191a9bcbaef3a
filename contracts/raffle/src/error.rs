use thiserror::Error;

use cosmwasm_std::{Coin, StdError, Uint128};
use cw_utils::PaymentError;

use crate::state::RoundState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Name is not in the expected format (3-50 UTF-8 bytes)")]
    InvalidName {},

    #[error("The entry fee must be a non-zero amount of a named denom")]
    InvalidEntryFee {},

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("The job prefix must be 1-32 bytes and must not contain '-'")]
    InvalidJobPrefix {},

    #[error("Insufficient deposit. Required : {required}, received : {received}")]
    InsufficientDeposit { required: Coin, received: Coin },

    #[error("The round is not accepting entries. Current state : {state:?}")]
    RoundNotAcceptingEntries { state: RoundState },

    #[error("Upkeep not needed. open : {is_open}, interval elapsed : {interval_elapsed}, entrants : {entrant_count}, pot : {pot}")]
    UpkeepNotNeeded {
        is_open: bool,
        interval_elapsed: bool,
        entrant_count: u32,
        pot: Uint128,
    },

    #[error("Randomness request failed: {reason}")]
    RandomnessRequestFailed { reason: String },

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness
    #[error("Unauthorized Receive execution")]
    UnauthorizedReceive,

    #[error("Unknown or stale randomness request : {job_id}")]
    UnknownOrStaleRequest { job_id: String },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("No eligible entrants in the drawing round")]
    NoEligibleEntrants {},

    #[error("Payout transfer to the winner failed: {reason}")]
    PayoutTransferFailed { reason: String },

    #[error("Unknown reply id : {id}")]
    UnknownReplyId { id: u64 },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
