//! Runtime orchestration for the arena simulation.
//!
//! This crate wires loaded content, the arena engine, and the event bus into
//! a cohesive runtime API. Consumers embed [`MatchRuntime`] to drive ticks,
//! issue commands, and subscribe to notifications.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides a topic-based event bus for notification routing
//! - [`oracle`] bundles static content behind core oracle traits
//! - [`replication`] records champion snapshots after every tick
//! - [`logging`] installs the tracing subscriber
pub mod api;
pub mod events;
pub mod logging;
pub mod oracle;
pub mod replication;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use events::{EventBus, Topic};
pub use logging::init_tracing;
pub use oracle::OracleManager;
pub use replication::SnapshotRecorder;
pub use runtime::{MatchRuntime, RuntimeBuilder, RuntimeConfig};
