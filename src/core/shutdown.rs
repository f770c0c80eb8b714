//! Shutdown Coordination
//!
//! Broadcast-based shutdown signalling for the simulation runner: the
//! Ctrl-C handler and any internal completion condition trigger the same
//! coordinator, and every waiter observes it through its own receiver.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Coordinates graceful shutdown across the application
pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
    shutdown_requested: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        // Larger channel so bursts of triggers are not dropped.
        let (shutdown_tx, shutdown_rx) = broadcast::channel(8);
        let coordinator = Self {
            shutdown_tx,
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, shutdown_rx)
    }

    /// Subscribe to shutdown notifications
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Trigger shutdown
    pub fn trigger_shutdown(&self) {
        // Release pairs with the Acquire in is_shutdown_requested so
        // flag-readers observe the store.
        self.shutdown_requested.store(true, Ordering::Release);
        let _ = self.shutdown_tx.send(());
    }

    /// Check if shutdown has been requested
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::Acquire)
    }

    /// Install a Ctrl-C handler that triggers this coordinator.
    ///
    /// A second Ctrl-C forces an immediate exit, for workers that cannot
    /// observe the cooperative request while parked.
    pub fn install_signal_handler(&self) {
        let tx = self.shutdown_tx.clone();
        let requested = Arc::clone(&self.shutdown_requested);
        tokio::spawn(async move {
            let signal_count = AtomicU32::new(0);
            loop {
                if tokio::signal::ctrl_c().await.is_err() {
                    return;
                }
                let prev = signal_count.fetch_add(1, Ordering::AcqRel);
                requested.store(true, Ordering::Release);
                let _ = tx.send(());
                if prev >= 1 {
                    log::warn!("second Ctrl-C received; exiting immediately");
                    std::process::exit(130);
                }
            }
        });
    }
}
