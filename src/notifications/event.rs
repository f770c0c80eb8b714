//! Event types for the notification system

use crate::buffer::BufferStats;
use std::time::SystemTime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEventType {
    Started,
    Stopped,
}

/// Session lifecycle event published by the controller.
#[derive(Clone, Debug)]
pub struct SessionEvent {
    pub event_type: SessionEventType,
    pub timestamp: SystemTime,
    pub message: Option<String>,
}

impl SessionEvent {
    pub fn new(event_type: SessionEventType) -> Self {
        Self {
            event_type,
            timestamp: SystemTime::now(),
            message: None,
        }
    }

    pub fn with_message(event_type: SessionEventType, message: String) -> Self {
        Self {
            event_type,
            timestamp: SystemTime::now(),
            message: Some(message),
        }
    }
}

/// Periodic buffer statistics snapshot for streaming observers.
#[derive(Clone, Debug)]
pub struct BufferEvent {
    pub timestamp: SystemTime,
    pub stats: BufferStats,
}

impl BufferEvent {
    pub fn snapshot(stats: BufferStats) -> Self {
        Self {
            timestamp: SystemTime::now(),
            stats,
        }
    }
}

/// Events that can be published to subscribers.
#[derive(Clone, Debug)]
pub enum Event {
    Session(SessionEvent),
    Buffer(BufferEvent),
}

/// Subscriber-side filtering of event categories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventFilter {
    All,
    SessionOnly,
    BufferOnly,
}

impl EventFilter {
    pub fn accepts(&self, event: &Event) -> bool {
        match (self, event) {
            (EventFilter::All, _) => true,
            (EventFilter::SessionOnly, Event::Session(_)) => true,
            (EventFilter::BufferOnly, Event::Buffer(_)) => true,
            _ => false,
        }
    }
}
