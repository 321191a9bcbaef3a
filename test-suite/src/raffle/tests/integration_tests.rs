#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Addr};
    use cw_multi_test::App;
    use raffle::{events::AuditEvent, state::RoundState};

    use crate::{
        common_setup::{
            constants::{ENTRY_DENOM, MIN_INTERVAL, NOIS_AMOUNT, NOIS_DENOM, NOIS_RESERVE},
            helpers::plus_block_seconds,
            msg::{RaffleContracts, RaffleSetupParams},
            setup_accounts_and_block::setup_raffle_participants,
            setup_raffle::{proper_raffle_instantiate, raffle_setup},
        },
        raffle::setup::{
            execute_msg::{deliver_randomness, enter_all, perform_upkeep},
            helpers::{audit_log, balance_of, randomness_from, round_info, round_result},
        },
    };

    fn play_round(
        app: &mut App,
        contracts: &RaffleContracts,
        entrants: &[&Addr],
        value: u64,
    ) -> Addr {
        let round_id = round_info(app, contracts).round_id;
        let job_id = format!("raffle-{round_id}");

        enter_all(app, contracts, entrants);
        plus_block_seconds(app, MIN_INTERVAL);
        perform_upkeep(app, contracts).unwrap();
        assert_eq!(
            round_info(app, contracts).pending_request,
            Some(job_id.clone())
        );
        deliver_randomness(app, contracts, &job_id, randomness_from(value)).unwrap();

        round_result(app, contracts, round_id).unwrap().winner
    }

    #[test]
    fn test_same_entrants_and_randomness_give_the_same_winner() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (one, two, three, four, _, _) = setup_raffle_participants(&mut app);
        let order = [&one, &two, &three, &four];

        let first = play_round(&mut app, &contracts, &order, 1_000_003);
        let second = play_round(&mut app, &contracts, &order, 1_000_003);
        assert_eq!(first, second);
        // 1_000_003 mod 4 = 3
        assert_eq!(first, four);

        // a separate deployment reaches the same outcome
        let (mut other_app, other_contracts) = proper_raffle_instantiate();
        let (one, two, three, four, _, _) = setup_raffle_participants(&mut other_app);
        let third = play_round(
            &mut other_app,
            &other_contracts,
            &[&one, &two, &three, &four],
            1_000_003,
        );
        assert_eq!(third, first);

        assert_eq!(round_info(&app, &contracts).round_id, 2);
        assert_eq!(
            balance_of(&app, &contracts.raffle, NOIS_DENOM),
            NOIS_RESERVE - 2 * NOIS_AMOUNT
        );
    }

    #[test]
    fn test_audit_log_ordering() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (one, two, three, _, _, _) = setup_raffle_participants(&mut app);

        play_round(&mut app, &contracts, &[&one, &two], 0);
        play_round(&mut app, &contracts, &[&three], 5);

        let log = audit_log(&app, &contracts);
        let sequences: Vec<u64> = log.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, (0..log.len() as u64).collect::<Vec<_>>());

        let kinds: Vec<(u64, &str)> = log
            .iter()
            .map(|r| {
                let kind = match r.event {
                    AuditEvent::EntryRecorded { .. } => "entry",
                    AuditEvent::DrawStarted { .. } => "draw",
                    AuditEvent::WinnerSelected { .. } => "winner",
                };
                (r.round_id, kind)
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (0, "entry"),
                (0, "entry"),
                (0, "draw"),
                (0, "winner"),
                (1, "entry"),
                (1, "draw"),
                (1, "winner"),
            ]
        );

        assert_eq!(
            log[3].event,
            AuditEvent::WinnerSelected {
                winner: one,
                payout: coin(20, ENTRY_DENOM),
                request_id: "raffle-0".to_string(),
            }
        );
        assert_eq!(
            log[6].event,
            AuditEvent::WinnerSelected {
                winner: three,
                payout: coin(10, ENTRY_DENOM),
                request_id: "raffle-1".to_string(),
            }
        );
    }

    #[test]
    fn test_custom_job_prefix() {
        let (mut app, contracts) = raffle_setup(RaffleSetupParams {
            job_prefix: Some("weekly".to_string()),
            ..RaffleSetupParams::default()
        });
        let (one, two, _, _, _, _) = setup_raffle_participants(&mut app);
        enter_all(&mut app, &contracts, &[&one, &two]);
        plus_block_seconds(&mut app, MIN_INTERVAL);
        perform_upkeep(&mut app, &contracts).unwrap();

        let round = round_info(&app, &contracts);
        assert_eq!(round.state, RoundState::Drawing);
        assert_eq!(round.pending_request, Some("weekly-0".to_string()));

        deliver_randomness(&mut app, &contracts, "weekly-0", randomness_from(2)).unwrap();
        let result = round_result(&app, &contracts, 0).unwrap();
        assert_eq!(result.request_id, "weekly-0");
        assert_eq!(result.winner, one);
    }
}
