//! Simulation runner startup
//!
//! Wires logging, the multi-threaded runtime and the controller together:
//! start a session, stream statistics on an interval, wait until every
//! producer has finished and the buffer is drained (or Ctrl-C), then stop
//! the session and log the final summary.

use crate::app::cli::Args;
use crate::controller::{ControlError, SessionConfig, SystemController};
use crate::core::shutdown::ShutdownCoordinator;
use clap::Parser;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::sync::Arc;
use std::time::Duration;

/// Initialize application startup
pub fn startup() {
    let args = Args::parse();

    // Logging first so every later failure is reported through it. The
    // handle must stay alive for the process lifetime.
    let _logger = match init_logging(&args) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("failed to initialise logging: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "prioflow {} starting (built {}, {})",
        env!("CARGO_PKG_VERSION"),
        crate::BUILD_TIME,
        crate::GIT_HASH
    );

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("failed to build runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_simulation(&args)) {
        log::error!("simulation failed: {e}");
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    let mut logger = Logger::try_with_env_or_str(&args.log_level)?;
    if let Some(path) = &args.log_file {
        logger = logger.log_to_file(FileSpec::try_from(path.clone())?);
    }
    Ok(logger.start()?)
}

async fn run_simulation(args: &Args) -> Result<(), ControlError> {
    let controller = Arc::new(SystemController::new());
    let (shutdown, mut shutdown_rx) = ShutdownCoordinator::new();
    shutdown.install_signal_handler();

    controller.start(SessionConfig {
        num_producers: args.producers,
        num_consumers: args.consumers,
        items_per_producer: args.items_per_producer,
        buffer_size: args.buffer_size,
    })?;

    for raw in &args.inject {
        let (priority, payload) = raw
            .split_once(':')
            .map(|(p, d)| (p, d.to_string()))
            .unwrap_or((raw.as_str(), "manual item".to_string()));
        controller.add_item(priority, payload)?;
    }

    let monitor = spawn_stats_monitor(Arc::clone(&controller), args.report_interval_ms);

    // Wait for completion: every producer finished and the buffer drained.
    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                log::info!("shutdown requested");
                break;
            }
            _ = tokio::time::sleep(Duration::from_millis(200)) => {
                let status = controller.status();
                let drained = status
                    .buffer
                    .as_ref()
                    .map(|b| b.size == 0 && b.total_produced == b.total_consumed)
                    .unwrap_or(false);
                if status.active_producers == 0 && drained {
                    log::info!("all producers finished and buffer drained");
                    break;
                }
            }
        }
    }

    monitor.abort();
    let final_status = controller.status();
    controller.stop()?;

    log::info!(
        "final statistics: {} active consumers at shutdown",
        final_status.active_consumers
    );
    if let Some(stats) = final_status.buffer {
        log::info!(
            "produced {}, consumed {}, {} left in buffer",
            stats.total_produced,
            stats.total_consumed,
            stats.size
        );
        for (priority, count) in &stats.produced_by_priority {
            log::info!("  {priority}: {count}");
        }
    }
    Ok(())
}

/// Periodically snapshot the buffer and hand the statistics to observers.
///
/// The JSON line logged here is the same plain-data payload a streaming
/// front end would push to its clients.
fn spawn_stats_monitor(
    controller: Arc<SystemController>,
    interval_ms: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            ticker.tick().await;
            let status = controller.status();
            if let Some(stats) = status.buffer {
                match serde_json::to_string(&stats) {
                    Ok(json) => log::info!("buffer stats: {json}"),
                    Err(e) => log::warn!("failed to serialise stats: {e}"),
                }
                controller.publish_stats(stats);
            }
        }
    })
}
