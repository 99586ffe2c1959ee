//! Topic-based event bus implementation.

use std::collections::HashMap;

use arena_core::{Notification, NotificationSink};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Champion spawns and respawns
    Lifecycle,
    /// Target changes, death announcements and kill records
    Combat,
    /// Gold credits
    Economy,
    /// Level-ups and stat refreshes
    Progression,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Lifecycle,
        Topic::Combat,
        Topic::Economy,
        Topic::Progression,
    ];

    /// Topic a notification is published on.
    pub fn of(notification: &Notification) -> Topic {
        match notification {
            Notification::ChampionSpawned { .. } | Notification::ChampionRespawned { .. } => {
                Topic::Lifecycle
            }
            Notification::TargetChanged { .. }
            | Notification::DeathAnnounced { .. }
            | Notification::ChampionDied { .. } => Topic::Combat,
            Notification::GoldAdded { .. } => Topic::Economy,
            Notification::LevelUp { .. } | Notification::StatsUpdated { .. } => {
                Topic::Progression
            }
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// notifications they care about. Delivery is best-effort: publishing with
/// no subscribers is not an error.
#[derive(Clone)]
pub struct EventBus {
    channels: HashMap<Topic, broadcast::Sender<Notification>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity.max(1)).0))
            .collect();
        Self { channels }
    }

    /// Publish a notification to its corresponding topic
    pub fn publish(&self, notification: Notification) {
        let topic = Topic::of(&notification);
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(notification).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive notifications for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Notification> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Every topic is created up front; a fresh closed channel keeps
            // the signature infallible.
            None => broadcast::channel(1).1,
        }
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Notification>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl NotificationSink for EventBus {
    fn notify(&self, notification: Notification) {
        self.publish(notification);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
