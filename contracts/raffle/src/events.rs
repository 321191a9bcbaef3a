use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Env, Event, StdResult, Storage, Timestamp};

use crate::state::{AUDIT_LOG, AUDIT_SEQUENCE};

#[cw_serde]
pub enum AuditEvent {
    EntryRecorded {
        participant: Addr,
        amount: Coin,
        resulting_pot: Coin,
    },
    DrawStarted {
        request_id: String,
        entrant_count: u32,
    },
    WinnerSelected {
        winner: Addr,
        payout: Coin,
        request_id: String,
    },
}

#[cw_serde]
pub struct AuditRecord {
    pub sequence: u64,
    pub round_id: u64,
    pub recorded_at: Timestamp,
    pub event: AuditEvent,
}

impl AuditEvent {
    pub fn to_event(&self, sequence: u64, round_id: u64) -> Event {
        let event = match self {
            AuditEvent::EntryRecorded {
                participant,
                amount,
                resulting_pot,
            } => Event::new("entry_recorded")
                .add_attribute("participant", participant)
                .add_attribute("amount", amount.to_string())
                .add_attribute("resulting_pot", resulting_pot.to_string()),
            AuditEvent::DrawStarted {
                request_id,
                entrant_count,
            } => Event::new("draw_started")
                .add_attribute("request_id", request_id)
                .add_attribute("entrant_count", entrant_count.to_string()),
            AuditEvent::WinnerSelected {
                winner,
                payout,
                request_id,
            } => Event::new("winner_selected")
                .add_attribute("winner", winner)
                .add_attribute("payout", payout.to_string())
                .add_attribute("request_id", request_id),
        };
        event
            .add_attribute("round_id", round_id.to_string())
            .add_attribute("sequence", sequence.to_string())
    }
}

/// Appends `event` to the audit log and returns it as a wasm event for the response.
pub fn record(
    storage: &mut dyn Storage,
    env: &Env,
    round_id: u64,
    event: AuditEvent,
) -> StdResult<Event> {
    let sequence = AUDIT_SEQUENCE.may_load(storage)?.unwrap_or_default();
    let emitted = event.to_event(sequence, round_id);
    AUDIT_LOG.save(
        storage,
        sequence,
        &AuditRecord {
            sequence,
            round_id,
            recorded_at: env.block.time,
            event,
        },
    )?;
    AUDIT_SEQUENCE.save(storage, &(sequence + 1))?;
    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, testing::mock_env, testing::MockStorage, Order};

    use super::*;

    #[test]
    fn records_are_sequenced() {
        let mut storage = MockStorage::new();
        let env = mock_env();

        let first = record(
            &mut storage,
            &env,
            0,
            AuditEvent::DrawStarted {
                request_id: "raffle-0".to_string(),
                entrant_count: 3,
            },
        )
        .unwrap();
        assert_eq!(first.ty, "draw_started");

        let second = record(
            &mut storage,
            &env,
            0,
            AuditEvent::WinnerSelected {
                winner: Addr::unchecked("winner"),
                payout: coin(30, "ustars"),
                request_id: "raffle-0".to_string(),
            },
        )
        .unwrap();
        assert_eq!(second.ty, "winner_selected");
        assert!(second
            .attributes
            .iter()
            .any(|a| a.key == "sequence" && a.value == "1"));

        let sequences: Vec<u64> = AUDIT_LOG
            .keys(&storage, None, None, Order::Ascending)
            .collect::<StdResult<_>>()
            .unwrap();
        assert_eq!(sequences, vec![0, 1]);
        assert_eq!(AUDIT_SEQUENCE.load(&storage).unwrap(), 2);
    }
}
