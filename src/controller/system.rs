//! SystemController - central coordination for one producer/consumer session
//!
//! The controller owns the shared buffer and the worker sets for the active
//! session. It is an explicit object passed by reference to whatever hosts
//! the external interface; there is no ambient global state.

use crate::buffer::api::{BufferStats, Priority, PriorityBoundedBuffer, PriorityItem, MANUAL_ITEM_ID};
use crate::controller::config::SessionConfig;
use crate::controller::error::{ControlError, ControlResult};
use crate::notifications::event::{Event, EventFilter, SessionEvent, SessionEventType};
use crate::notifications::manager::NotificationManager;
use crate::worker::{
    ConsumerConfig, ConsumerHandle, ProducerConfig, ProducerHandle, UniformPolicy,
};
use serde::Serialize;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedReceiver;

/// Snapshot of session and worker liveness plus the buffer statistics.
///
/// `buffer` is present as soon as a session has been started once; it
/// survives `stop` so observers can read the final counters.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStatus {
    pub running: bool,
    pub num_producers: usize,
    pub num_consumers: usize,
    pub active_producers: usize,
    pub active_consumers: usize,
    pub buffer: Option<BufferStats>,
}

struct ControllerState {
    running: bool,
    buffer: Option<Arc<PriorityBoundedBuffer>>,
    producers: Vec<ProducerHandle>,
    consumers: Vec<ConsumerHandle>,
}

/// Central controller owning the buffer and worker sets.
///
/// Thread-safe behind `Arc<SystemController>`. The mutating operations must
/// be called from within a tokio runtime because they spawn worker tasks.
///
/// # Example
///
/// ```rust,no_run
/// use prioflow::controller::{SessionConfig, SystemController};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let controller = SystemController::new();
/// controller.start(SessionConfig::default())?;
///
/// let status = controller.status();
/// println!("{} producers active", status.active_producers);
///
/// controller.stop()?;
/// # Ok(())
/// # }
/// ```
pub struct SystemController {
    state: Mutex<ControllerState>,
    notifications: Mutex<NotificationManager>,
}

impl SystemController {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ControllerState {
                running: false,
                buffer: None,
                producers: Vec::new(),
                consumers: Vec::new(),
            }),
            notifications: Mutex::new(NotificationManager::new()),
        }
    }

    /// Start a session: construct a fresh buffer and launch the requested
    /// workers, all sharing it.
    ///
    /// Fails with `AlreadyRunning` while a session is active and with
    /// `InvalidConfiguration` for non-positive counts or sizes. Workers from
    /// a previous, stopped session are replaced; a stale consumer still
    /// parked on the old buffer stays parked until the runtime shuts down.
    pub fn start(&self, config: SessionConfig) -> ControlResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.running {
            return Err(ControlError::AlreadyRunning);
        }
        config.validate()?;

        let buffer = Arc::new(PriorityBoundedBuffer::new(config.buffer_size)?);

        state.producers = (1..=config.num_producers)
            .map(|id| {
                ProducerHandle::spawn(
                    id,
                    Arc::clone(&buffer),
                    ProducerConfig {
                        item_budget: config.items_per_producer,
                        ..ProducerConfig::default()
                    },
                    Box::new(UniformPolicy),
                )
            })
            .collect();
        state.consumers = (1..=config.num_consumers)
            .map(|id| ConsumerHandle::spawn(id, Arc::clone(&buffer), ConsumerConfig::default()))
            .collect();
        state.buffer = Some(buffer);
        state.running = true;
        drop(state);

        log::info!(
            "session started: {} producers x {} items, {} consumers, buffer {}",
            config.num_producers,
            config.items_per_producer,
            config.num_consumers,
            config.buffer_size
        );
        self.publish(Event::Session(SessionEvent::new(SessionEventType::Started)));
        Ok(())
    }

    /// Stop the active session.
    ///
    /// Signals stop to every worker and marks the session inactive without
    /// joining: workers exit at their next cycle boundary. Fails with
    /// `NotRunning` when no session is active.
    pub fn stop(&self) -> ControlResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.running {
            return Err(ControlError::NotRunning);
        }
        for producer in &state.producers {
            producer.stop();
        }
        for consumer in &state.consumers {
            consumer.stop();
        }
        state.running = false;
        drop(state);

        log::info!("session stopped");
        self.publish(Event::Session(SessionEvent::new(SessionEventType::Stopped)));
        Ok(())
    }

    /// Manually submit one item to the buffer.
    ///
    /// The insert runs on its own task, so a full buffer never blocks the
    /// caller. Fails with `UnknownPriority` for a name outside the fixed
    /// enumeration (leaving the buffer untouched) and with `NotRunning`
    /// when no session has ever been started. The buffer survives `stop`,
    /// so manual items are still accepted between sessions.
    pub fn add_item(&self, priority: &str, payload: String) -> ControlResult<()> {
        let parsed = Priority::from_str(priority).map_err(|_| ControlError::UnknownPriority {
            name: priority.to_string(),
        })?;

        let buffer = {
            let state = self.state.lock().unwrap();
            state.buffer.clone().ok_or(ControlError::NotRunning)?
        };

        let item = PriorityItem::new(parsed, MANUAL_ITEM_ID, payload);
        log::debug!("manual item submitted ({parsed})");
        tokio::spawn(async move {
            buffer.produce(item).await;
        });
        Ok(())
    }

    /// Worker counts, liveness counts and the buffer statistics, if a
    /// buffer exists.
    pub fn status(&self) -> SystemStatus {
        let state = self.state.lock().unwrap();
        SystemStatus {
            running: state.running,
            num_producers: state.producers.len(),
            num_consumers: state.consumers.len(),
            active_producers: state.producers.iter().filter(|p| p.is_running()).count(),
            active_consumers: state.consumers.iter().filter(|c| c.is_running()).count(),
            buffer: state.buffer.as_ref().map(|b| b.stats()),
        }
    }

    /// Register an observer for controller events.
    pub fn subscribe(
        &self,
        subscriber_id: String,
        filter: EventFilter,
        source: String,
    ) -> UnboundedReceiver<Event> {
        self.notifications
            .lock()
            .unwrap()
            .subscribe(subscriber_id, filter, source)
    }

    /// Publish a buffer snapshot to subscribed observers.
    ///
    /// Intended for the host's periodic stats push; the controller itself
    /// has no notion of the transport.
    pub fn publish_stats(&self, stats: BufferStats) {
        use crate::notifications::event::BufferEvent;
        self.publish(Event::Buffer(BufferEvent::snapshot(stats)));
    }

    fn publish(&self, event: Event) {
        if let Err(e) = self.notifications.lock().unwrap().publish(event) {
            log::warn!("event delivery incomplete: {e}");
        }
    }
}

impl Default for SystemController {
    fn default() -> Self {
        Self::new()
    }
}
