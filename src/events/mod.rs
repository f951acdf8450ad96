//! Event emission for renderers.
//!
//! - `GameEvent`: what changed
//! - `EventBus`: synchronous listener list

pub mod bus;
pub mod event;

pub use bus::{EventBus, SubscriptionId};
pub use event::GameEvent;
