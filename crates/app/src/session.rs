//! One user's storefront session.
//!
//! ```text
//! click → Session::dispatch(command)
//!           1. decide + apply on a copy of the state
//!           2. swap the copy in (whole-state replace)
//!           3. publish each event, wrapped in an envelope
//! ```
//!
//! Subscribers (the renderer) see events only after the state they describe
//! is in place.

use storefront_cart::{CartCommand, CartEvent, Storefront};
use storefront_core::AggregateRoot;
use storefront_events::{Event, EventBus, EventEnvelope, Subscription};

use crate::error::SessionError;

pub type CartEnvelope = EventEnvelope<CartEvent>;

#[derive(Debug)]
pub struct Session<B> {
    state: Storefront,
    bus: B,
    sequence: u64,
}

impl<B> Session<B> {
    pub fn new(state: Storefront, bus: B) -> Self {
        Self {
            state,
            bus,
            sequence: 0,
        }
    }

    pub fn state(&self) -> &Storefront {
        &self.state
    }

    /// Sequence number of the last published envelope (0 before any).
    pub fn last_sequence(&self) -> u64 {
        self.sequence
    }
}

impl<B> Session<B>
where
    B: EventBus<CartEnvelope>,
{
    pub fn subscribe(&self) -> Subscription<CartEnvelope> {
        self.bus.subscribe()
    }

    /// Run one command to completion.
    ///
    /// The state change is committed before publication; a publish failure
    /// leaves the new state in place and reports the error.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<Vec<CartEnvelope>, SessionError> {
        let mut next = self.state.clone();
        let events = next.dispatch(&command);
        self.state = next;

        tracing::debug!(
            session = %self.state.id(),
            ?command,
            events = events.len(),
            cart_count = self.state.cart_count(),
            visibility = self.state.visibility().as_str(),
            consistent = self.state.is_consistent(),
            version = self.state.version(),
            "command dispatched"
        );

        let envelopes: Vec<CartEnvelope> = events
            .into_iter()
            .map(|event| {
                self.sequence += 1;
                EventEnvelope::record(self.sequence, event)
            })
            .collect();

        for envelope in &envelopes {
            tracing::trace!(
                event_id = %envelope.event_id(),
                sequence = envelope.sequence_number(),
                event_type = envelope.payload().event_type(),
                schema_version = envelope.payload().version(),
                recorded_at = %envelope.recorded_at(),
                "publishing event"
            );
            self.bus
                .publish(envelope.clone())
                .map_err(|e| SessionError::Publish(format!("{e:?}")))?;
        }

        Ok(envelopes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storefront_cart::CartVisibility;
    use storefront_core::ProductId;
    use storefront_events::InMemoryEventBus;

    use super::*;

    /// Bus whose publish always fails.
    struct BrokenBus;

    impl EventBus<CartEnvelope> for BrokenBus {
        type Error = &'static str;

        fn publish(&self, _message: CartEnvelope) -> Result<(), Self::Error> {
            Err("bus closed")
        }

        fn subscribe(&self) -> Subscription<CartEnvelope> {
            let (_tx, rx) = std::sync::mpsc::channel();
            Subscription::new(rx)
        }
    }

    fn session() -> Session<Arc<InMemoryEventBus<CartEnvelope>>> {
        Session::new(Storefront::seeded(), Arc::new(InMemoryEventBus::new()))
    }

    #[test]
    fn dispatch_publishes_sequenced_envelopes() {
        let mut session = session();
        let sub = session.subscribe();

        session.dispatch(CartCommand::AddToCart(ProductId::new(1))).unwrap();
        session.dispatch(CartCommand::ToggleCartVisibility).unwrap();

        let received = sub.drain();
        let seqs: Vec<u64> = received.iter().map(|e| e.sequence_number()).collect();
        assert_eq!(seqs, vec![1, 2]);
        assert!(matches!(received[0].payload(), CartEvent::ProductAdded(_)));
        assert_eq!(session.last_sequence(), 2);
        assert_eq!(session.state().visibility(), CartVisibility::Shown);
    }

    #[test]
    fn unknown_product_publishes_nothing() {
        let mut session = session();
        let sub = session.subscribe();

        let envelopes = session.dispatch(CartCommand::AddToCart(ProductId::new(77))).unwrap();

        assert!(envelopes.is_empty());
        assert!(sub.drain().is_empty());
        assert_eq!(session.last_sequence(), 0);
    }

    #[test]
    fn publish_failure_keeps_committed_state() {
        let mut session = Session::new(Storefront::seeded(), BrokenBus);

        let err = session
            .dispatch(CartCommand::AddToCart(ProductId::new(2)))
            .unwrap_err();

        assert!(matches!(err, SessionError::Publish(_)));
        assert_eq!(session.state().cart_count(), 1);
    }
}
