//! Event plumbing for the storefront: the event contract, envelopes, and an
//! in-process pub/sub bus that rendering layers subscribe to.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
