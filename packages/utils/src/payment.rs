use cosmwasm_std::{Coin, StdError, StdResult, Uint128};

/// Checks that `available` covers every coin of `required`.
/// Zero-amount requirements are ignored.
pub fn assert_sufficient_funds(available: &[Coin], required: &[Coin]) -> StdResult<()> {
    for needed in required.iter().filter(|c| !c.amount.is_zero()) {
        let held = available
            .iter()
            .filter(|c| c.denom == needed.denom)
            .fold(Uint128::zero(), |acc, c| acc + c.amount);

        if held < needed.amount {
            return Err(StdError::generic_err(format!(
                "Insufficient funds. Expected {}, available {}{}",
                needed, held, needed.denom
            )));
        }
    }
    Ok(())
}

/// Removes `held` from `balances`, saturating at zero.
/// Used to separate funds that are already owed to someone from the spendable rest.
pub fn subtract_held(balances: Vec<Coin>, held: &Coin) -> Vec<Coin> {
    balances
        .into_iter()
        .map(|mut c| {
            if c.denom == held.denom {
                c.amount = c.amount.saturating_sub(held.amount);
            }
            c
        })
        .collect()
}
