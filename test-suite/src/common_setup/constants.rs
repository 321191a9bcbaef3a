pub const OWNER_ADDR: &str = "owner";
pub const KEEPER_ADDR: &str = "keeper";
pub const SINK_ADDR: &str = "sink";
pub const RAFFLE_NAME: &str = "raffle contract name";

pub const ENTRY_DENOM: &str = "ustars";
pub const ENTRY_FEE: u128 = 10;
pub const MIN_INTERVAL: u64 = 30;

pub const NOIS_DENOM: &str = "unois";
pub const NOIS_AMOUNT: u128 = 50;
/// Minted to the raffle contract so it can pay for a few randomness requests
pub const NOIS_RESERVE: u128 = 1_000;
