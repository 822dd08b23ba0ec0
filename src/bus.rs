//! In-process message bus.
//!
//! Replaces the platform's shared message channel with a typed broadcast
//! channel. The bus is created once at startup and cloned into every
//! component that needs it; publishes are fire-and-forget with
//! at-most-once delivery per live subscriber.

use tokio::sync::broadcast;
use tracing::debug;

use crate::models::BoatId;

/// Payload carried on the boat-selection channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoatSelected {
    pub record_id: BoatId,
}

/// Payload-less events a component emits to its listener context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    Loading,
    DoneLoading,
}

/// Process-wide channel handle for boat selection broadcasts.
#[derive(Debug, Clone)]
pub struct MessageBus {
    boat_selected: broadcast::Sender<BoatSelected>,
}

impl MessageBus {
    /// Create the bus with the given broadcast ring capacity.
    pub fn new(capacity: usize) -> Self {
        let (boat_selected, _) = broadcast::channel(capacity);
        Self { boat_selected }
    }

    /// Publish a boat selection. A publish with no live subscribers is
    /// silently dropped.
    pub fn publish_boat_selected(&self, record_id: BoatId) {
        debug!(record_id = record_id.as_str(), "publishing boat selection");
        let _ = self.boat_selected.send(BoatSelected { record_id });
    }

    /// Subscribe to boat selection broadcasts.
    pub fn subscribe_boat_selected(&self) -> broadcast::Receiver<BoatSelected> {
        self.boat_selected.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_selection_to_subscriber() {
        let bus = MessageBus::new(4);
        let mut rx = bus.subscribe_boat_selected();

        bus.publish_boat_selected(BoatId::from("a01"));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.record_id, BoatId::from("a01"));
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_dropped() {
        let bus = MessageBus::new(4);

        // No receiver registered; must not panic or error.
        bus.publish_boat_selected(BoatId::from("a02"));

        let mut rx = bus.subscribe_boat_selected();
        bus.publish_boat_selected(BoatId::from("a03"));

        // Only the post-subscription publish is seen.
        assert_eq!(rx.recv().await.unwrap().record_id, BoatId::from("a03"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn clones_share_the_channel() {
        let bus = MessageBus::new(4);
        let publisher = bus.clone();
        let mut rx = bus.subscribe_boat_selected();

        publisher.publish_boat_selected(BoatId::from("a04"));

        assert_eq!(rx.recv().await.unwrap().record_id, BoatId::from("a04"));
    }
}
