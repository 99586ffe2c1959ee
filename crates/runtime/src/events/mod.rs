//! Topic-based event bus for runtime events.
//!
//! Core notifications are published to specific topics, and consumers
//! subscribe only to the topics they need.

mod bus;

pub use bus::{EventBus, Topic};
