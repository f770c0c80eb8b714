//! NotificationManager implementation
//!
//! Fan-out of events to subscribers over per-subscriber unbounded channels.
//! Delivery is a plain channel send, so publishing is synchronous; a
//! subscriber that dropped its receiver is removed automatically on the
//! next publish.

use crate::notifications::error::{NotificationError, NotificationResult};
use crate::notifications::event::{Event, EventFilter};
use std::collections::HashMap;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

struct SubscriberInfo {
    filter: EventFilter,
    source: String,
    sender: UnboundedSender<Event>,
}

pub struct NotificationManager {
    subscribers: HashMap<String, SubscriberInfo>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Register a subscriber and return its event receiver.
    ///
    /// Re-subscribing under an existing id replaces the previous
    /// registration with a warning.
    pub fn subscribe(
        &mut self,
        subscriber_id: String,
        filter: EventFilter,
        source: String,
    ) -> UnboundedReceiver<Event> {
        let (sender, receiver) = unbounded_channel();

        let info = SubscriberInfo {
            filter,
            source: source.clone(),
            sender,
        };
        if let Some(existing) = self.subscribers.insert(subscriber_id.clone(), info) {
            log::warn!(
                "subscriber '{}' re-registered, dropping previous channel ({} -> {})",
                subscriber_id,
                existing.source,
                source
            );
        }

        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn has_subscriber(&self, subscriber_id: &str) -> bool {
        self.subscribers.contains_key(subscriber_id)
    }

    pub fn unsubscribe(&mut self, subscriber_id: &str) -> bool {
        self.subscribers.remove(subscriber_id).is_some()
    }

    /// Deliver `event` to every subscriber whose filter accepts it.
    ///
    /// Subscribers with closed channels are removed and reported through
    /// `PublishFailed`; delivery to the remaining subscribers is unaffected.
    pub fn publish(&mut self, event: Event) -> NotificationResult<()> {
        let event_type = match &event {
            Event::Session(_) => "Session",
            Event::Buffer(_) => "Buffer",
        }
        .to_string();

        let mut failed_subscribers = Vec::new();
        for (subscriber_id, info) in &self.subscribers {
            if info.filter.accepts(&event) && info.sender.send(event.clone()).is_err() {
                failed_subscribers.push(subscriber_id.clone());
            }
        }

        for subscriber_id in &failed_subscribers {
            self.subscribers.remove(subscriber_id);
        }

        if !failed_subscribers.is_empty() {
            return Err(NotificationError::PublishFailed {
                event_type,
                failed_subscribers,
            });
        }

        Ok(())
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
