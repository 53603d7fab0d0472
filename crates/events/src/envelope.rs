use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for an event, carrying session-stream metadata.
///
/// - `sequence_number` is monotonically increasing per session, starting at 1.
/// - `recorded_at` is wall-clock time of dispatch; it plays no part in state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    sequence_number: u64,
    recorded_at: DateTime<Utc>,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        event_id: Uuid,
        sequence_number: u64,
        recorded_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            sequence_number,
            recorded_at,
            payload,
        }
    }

    /// Wrap `payload` with a fresh time-ordered id, stamped now.
    pub fn record(sequence_number: u64, payload: E) -> Self {
        Self::new(Uuid::now_v7(), sequence_number, Utc::now(), payload)
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
