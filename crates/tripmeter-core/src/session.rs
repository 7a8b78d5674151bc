//! Trip session loop
//!
//! One tokio task owns the engine, the location provider, and the
//! speed-limit alert. Commands, clock ticks, and sample polls are all
//! serialized through its select loop; the engine is never touched from
//! anywhere else. Snapshots go out on a watch channel for the presentation
//! layer to observe.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::clock;
use crate::location::LocationProvider;
use crate::speed_limit::{SpeedLimitAlert, DEFAULT_LIMIT_KMH};
use crate::trip::{TripEngine, TripError, TripReadings};

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Initial speed limit for the warning, km/h.
    pub speed_limit_kmh: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            speed_limit_kmh: DEFAULT_LIMIT_KMH,
        }
    }
}

/// Everything the dashboard renders, published once per second and after
/// every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Engine readings.
    pub readings: TripReadings,
    /// Wall-clock time of day, `HH:mm:ss`. Independent of trip duration.
    pub wall_clock: String,
    /// Whether the current speed exceeds the configured limit.
    pub speed_alert: bool,
    /// The configured limit, km/h.
    pub speed_limit_kmh: f64,
}

enum TripCommand {
    Start {
        reply: oneshot::Sender<Result<(), TripError>>,
    },
    Stop {
        reply: oneshot::Sender<()>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
    SetSpeedLimit {
        limit_kmh: f64,
        reply: oneshot::Sender<()>,
    },
    Shutdown,
}

/// Handle to a running trip session.
///
/// Commands resolve after the session task has applied them, so a snapshot
/// read after an awaited command reflects it.
pub struct TripSessionHandle {
    commands: mpsc::Sender<TripCommand>,
    snapshots: watch::Receiver<SessionSnapshot>,
    task: JoinHandle<()>,
}

impl TripSessionHandle {
    /// Begin a trip.
    ///
    /// Fails with [`TripError::LocationUnavailable`] when location services
    /// are off; the presentation layer surfaces that as a prompt offering
    /// to open system settings.
    pub async fn start(&self) -> Result<(), TripError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(TripCommand::Start { reply })
            .await
            .map_err(|_| TripError::SessionClosed)?;
        rx.await.map_err(|_| TripError::SessionClosed)?
    }

    /// End the current trip. Idempotent.
    pub async fn stop(&self) -> Result<(), TripError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(TripCommand::Stop { reply })
            .await
            .map_err(|_| TripError::SessionClosed)?;
        rx.await.map_err(|_| TripError::SessionClosed)
    }

    /// Clear the displayed readings; ignored while a trip is running.
    pub async fn reset(&self) -> Result<(), TripError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(TripCommand::Reset { reply })
            .await
            .map_err(|_| TripError::SessionClosed)?;
        rx.await.map_err(|_| TripError::SessionClosed)
    }

    /// Reconfigure the speed limit in km/h.
    pub async fn set_speed_limit(&self, limit_kmh: f64) -> Result<(), TripError> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(TripCommand::SetSpeedLimit { limit_kmh, reply })
            .await
            .map_err(|_| TripError::SessionClosed)?;
        rx.await.map_err(|_| TripError::SessionClosed)
    }

    /// Subscribe to session snapshots.
    pub fn snapshots(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Stop the session task and wait for it to finish.
    pub async fn shutdown(self) {
        let _ = self.commands.send(TripCommand::Shutdown).await;
        let _ = self.task.await;
    }
}

/// Spawns the task that owns the trip state.
pub struct TripSession;

impl TripSession {
    /// Spawn a session over the given provider.
    pub fn spawn(provider: Box<dyn LocationProvider>, config: SessionConfig) -> TripSessionHandle {
        let mut engine = TripEngine::new();
        engine.on_availability_changed(provider.is_available());
        let alert = SpeedLimitAlert::new(config.speed_limit_kmh);

        let (commands, command_rx) = mpsc::channel(16);
        let (snapshot_tx, snapshots) = watch::channel(make_snapshot(&engine, &alert));
        let task = tokio::spawn(run(engine, alert, provider, command_rx, snapshot_tx));

        TripSessionHandle {
            commands,
            snapshots,
            task,
        }
    }
}

async fn run(
    mut engine: TripEngine,
    mut alert: SpeedLimitAlert,
    mut provider: Box<dyn LocationProvider>,
    mut commands: mpsc::Receiver<TripCommand>,
    snapshots: watch::Sender<SessionSnapshot>,
) {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    // The interval's first tick completes immediately; skip it so a trip
    // only counts seconds that actually elapsed
    ticker.tick().await;

    tracing::info!("trip session started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                engine.on_availability_changed(provider.is_available());
                engine.on_clock_tick();
                match provider.next_sample() {
                    Ok(Some(sample)) => engine.on_location_sample(&sample),
                    Ok(None) => {}
                    Err(e) => tracing::warn!("location update failed: {e}"),
                }
                alert.update(engine.speed_kmh());
                let _ = snapshots.send(make_snapshot(&engine, &alert));
            }
            command = commands.recv() => {
                match command {
                    Some(TripCommand::Start { reply }) => {
                        engine.on_availability_changed(provider.is_available());
                        let result = engine.start();
                        if result.is_ok() {
                            provider.request_one();
                            provider.start_updates();
                            tracing::info!("trip started");
                        }
                        // Publish before replying so an awaited command is
                        // visible in the next snapshot read
                        let _ = snapshots.send(make_snapshot(&engine, &alert));
                        let _ = reply.send(result);
                    }
                    Some(TripCommand::Stop { reply }) => {
                        engine.stop();
                        provider.stop_updates();
                        tracing::info!("trip stopped");
                        let _ = snapshots.send(make_snapshot(&engine, &alert));
                        let _ = reply.send(());
                    }
                    Some(TripCommand::Reset { reply }) => {
                        engine.reset();
                        let _ = snapshots.send(make_snapshot(&engine, &alert));
                        let _ = reply.send(());
                    }
                    Some(TripCommand::SetSpeedLimit { limit_kmh, reply }) => {
                        alert.set_limit_kmh(limit_kmh);
                        alert.update(engine.speed_kmh());
                        tracing::debug!("speed limit set to {limit_kmh} km/h");
                        let _ = snapshots.send(make_snapshot(&engine, &alert));
                        let _ = reply.send(());
                    }
                    Some(TripCommand::Shutdown) | None => break,
                }
            }
        }
    }

    tracing::debug!("trip session ended");
}

fn make_snapshot(engine: &TripEngine, alert: &SpeedLimitAlert) -> SessionSnapshot {
    SessionSnapshot {
        readings: engine.snapshot(),
        wall_clock: clock::current_time_hms(),
        speed_alert: alert.is_active(),
        speed_limit_kmh: alert.limit_kmh(),
    }
}
