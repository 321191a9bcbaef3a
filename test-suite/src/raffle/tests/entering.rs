#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, Addr, Coin};
    use cw_utils::PaymentError;
    use raffle::{error::ContractError, msg::QueryMsg, state::RoundState};

    use crate::{
        common_setup::{
            constants::{ENTRY_DENOM, ENTRY_FEE, MIN_INTERVAL},
            helpers::{assert_error, plus_block_seconds},
            setup_accounts_and_block::{setup_accounts, setup_raffle_participants, INITIAL_BALANCE},
            setup_raffle::proper_raffle_instantiate,
        },
        raffle::setup::{
            execute_msg::{enter_all, enter_raffle, perform_upkeep},
            helpers::{
                audit_log, balance_of, entrant_count, entrants, event_attribute, find_event, pot,
                round_info,
            },
        },
    };

    #[test]
    fn test_pot_is_the_sum_of_deposits() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (one, two, three, _, _, _) = setup_raffle_participants(&mut app);

        enter_raffle(&mut app, &contracts, &one, &coins(ENTRY_FEE, ENTRY_DENOM)).unwrap();
        // overpaying is accepted and the whole deposit goes to the pot
        enter_raffle(&mut app, &contracts, &two, &coins(15, ENTRY_DENOM)).unwrap();
        let res =
            enter_raffle(&mut app, &contracts, &three, &coins(ENTRY_FEE, ENTRY_DENOM)).unwrap();

        let event = find_event(&res, "entry_recorded").unwrap();
        assert_eq!(event_attribute(event, "participant"), three.to_string());
        assert_eq!(event_attribute(event, "amount"), "10ustars");
        assert_eq!(event_attribute(event, "resulting_pot"), "35ustars");

        assert_eq!(entrant_count(&app, &contracts), 3);
        assert_eq!(pot(&app, &contracts), coin(35, ENTRY_DENOM));
        assert_eq!(balance_of(&app, &contracts.raffle, ENTRY_DENOM), 35);

        let listed: Vec<Addr> = entrants(&app, &contracts, None, None)
            .entrants
            .into_iter()
            .map(|e| e.address)
            .collect();
        assert_eq!(listed, vec![one, two, three]);
        assert_eq!(audit_log(&app, &contracts).len(), 3);
    }

    #[test]
    fn test_same_participant_can_enter_twice() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (one, two, _, _, _, _) = setup_raffle_participants(&mut app);
        enter_all(&mut app, &contracts, &[&one, &two, &one]);

        let listed = entrants(&app, &contracts, None, None).entrants;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[2].address, one);
        assert_eq!(pot(&app, &contracts), coin(30, ENTRY_DENOM));
    }

    #[test]
    fn test_insufficient_deposit() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);

        let res = enter_raffle(&mut app, &contracts, &one, &coins(9, ENTRY_DENOM));
        assert_error(
            res,
            ContractError::InsufficientDeposit {
                required: coin(ENTRY_FEE, ENTRY_DENOM),
                received: coin(9, ENTRY_DENOM),
            }
            .to_string(),
        );

        let res = enter_raffle(&mut app, &contracts, &one, &[]);
        assert_error(
            res,
            ContractError::InsufficientDeposit {
                required: coin(ENTRY_FEE, ENTRY_DENOM),
                received: coin(0, ENTRY_DENOM),
            }
            .to_string(),
        );

        assert_eq!(entrant_count(&app, &contracts), 0);
        assert_eq!(pot(&app, &contracts), coin(0, ENTRY_DENOM));
    }

    #[test]
    fn test_wrong_denom() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (owner, _) = setup_accounts(&mut app);

        let res = enter_raffle(&mut app, &contracts, &owner, &coins(ENTRY_FEE, "unois"));
        assert_error(
            res,
            ContractError::Payment(PaymentError::ExtraDenom("unois".to_string())).to_string(),
        );
        assert_eq!(entrant_count(&app, &contracts), 0);
    }

    #[test]
    fn test_entrants_pagination() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (one, two, three, four, five, six) = setup_raffle_participants(&mut app);
        enter_all(&mut app, &contracts, &[&one, &two, &three, &four, &five, &six]);

        let page = entrants(&app, &contracts, Some(1), Some(2));
        assert_eq!(page.round_id, 0);
        let indexes: Vec<u32> = page.entrants.iter().map(|e| e.index).collect();
        assert_eq!(indexes, vec![2, 3]);
        assert_eq!(page.entrants[0].address, three);

        let entrant: Addr = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Entrant { index: 5 })
            .unwrap();
        assert_eq!(entrant, six);

        let out_of_range: Result<Addr, _> = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Entrant { index: 6 });
        assert!(out_of_range.is_err());
    }

    #[test]
    fn test_no_entries_while_drawing() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (one, two, three, four, _, _) = setup_raffle_participants(&mut app);
        enter_all(&mut app, &contracts, &[&one, &two, &three]);

        plus_block_seconds(&mut app, MIN_INTERVAL);
        perform_upkeep(&mut app, &contracts).unwrap();
        assert_eq!(round_info(&app, &contracts).state, RoundState::Drawing);

        let deposits: Vec<Vec<Coin>> = vec![
            vec![],
            coins(1, ENTRY_DENOM),
            coins(ENTRY_FEE, ENTRY_DENOM),
            coins(1_000, ENTRY_DENOM),
        ];
        for deposit in deposits {
            let res = enter_raffle(&mut app, &contracts, &four, &deposit);
            assert_error(
                res,
                ContractError::RoundNotAcceptingEntries {
                    state: RoundState::Drawing,
                }
                .to_string(),
            );
        }

        assert_eq!(entrant_count(&app, &contracts), 3);
        assert_eq!(pot(&app, &contracts), coin(30, ENTRY_DENOM));
        assert_eq!(balance_of(&app, &four, ENTRY_DENOM), INITIAL_BALANCE);
    }
}
