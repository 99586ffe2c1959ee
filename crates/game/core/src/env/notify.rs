//! Outbound notifications.
//!
//! The core never encodes packets; it emits [`Notification`] values and the
//! host decides how to deliver them.

use std::sync::Mutex;

use crate::state::{EntityId, Position, TeamId};

/// Lifecycle and economy events produced by the simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    ChampionSpawned {
        champion: EntityId,
        team: TeamId,
    },
    TargetChanged {
        champion: EntityId,
        target: EntityId,
    },
    LevelUp {
        champion: EntityId,
        level: u8,
        skill_points: u8,
    },
    StatsUpdated {
        champion: EntityId,
    },
    ChampionRespawned {
        champion: EntityId,
        position: Position,
    },
    /// Kill-feed announcement; `killer` is whoever landed the blow.
    DeathAnnounced {
        victim: EntityId,
        killer: Option<EntityId>,
    },
    /// Final death record; `gold` is the bounty actually paid (truncated).
    ChampionDied {
        victim: EntityId,
        killer: Option<EntityId>,
        gold: i32,
    },
    GoldAdded {
        champion: EntityId,
        source: EntityId,
        amount: f32,
    },
}

impl Notification {
    /// Champion the notification is primarily about.
    pub fn subject(&self) -> EntityId {
        match self {
            Self::ChampionSpawned { champion, .. }
            | Self::TargetChanged { champion, .. }
            | Self::LevelUp { champion, .. }
            | Self::StatsUpdated { champion }
            | Self::ChampionRespawned { champion, .. }
            | Self::GoldAdded { champion, .. } => *champion,
            Self::DeathAnnounced { victim, .. } | Self::ChampionDied { victim, .. } => *victim,
        }
    }
}

/// Fire-and-forget notification delivery.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Sink that keeps every notification in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}
