use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use super::constants::NOIS_RESERVE;

#[cw_serde]
pub struct RaffleCodeIds {
    pub raffle_code_id: u64,
    pub nois_code_id: u64,
}

#[cw_serde]
pub struct RaffleContracts {
    pub raffle: Addr,
    pub nois: Addr,
}

pub struct RaffleSetupParams {
    pub randomness_delay: Option<u64>,
    pub job_prefix: Option<String>,
    /// Amount of the proxy fee denom minted to the raffle contract
    pub fee_reserve: u128,
}

impl Default for RaffleSetupParams {
    fn default() -> Self {
        RaffleSetupParams {
            randomness_delay: None,
            job_prefix: None,
            fee_reserve: NOIS_RESERVE,
        }
    }
}
