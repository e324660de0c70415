//! Interval-driven tick worker.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::api::Result;
use crate::service::GameService;

/// The scheduled sweeps the game service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TickKind {
    /// Random sector events.
    Events,
    /// Energy and oxygen regeneration.
    Regen,
    /// Mission coin flips and assignment.
    Missions,
}

impl TickKind {
    pub const ALL: [TickKind; 3] = [TickKind::Events, TickKind::Regen, TickKind::Missions];

    /// Run this sweep once.
    pub async fn run(self, service: &GameService) -> Result<usize> {
        match self {
            TickKind::Events => service.event_tick().await,
            TickKind::Regen => service.regen_tick().await,
            TickKind::Missions => service.mission_tick().await,
        }
    }
}

/// When a tick first fires and how often it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    pub first_delay: Duration,
    pub interval: Duration,
}

impl TickSchedule {
    pub const fn new(first_delay: Duration, interval: Duration) -> Self {
        Self {
            first_delay,
            interval,
        }
    }
}

/// Runs one [`TickKind`] on its schedule until shutdown.
pub struct TickWorker {
    kind: TickKind,
    schedule: TickSchedule,
    service: Arc<GameService>,
    shutdown_rx: watch::Receiver<bool>,
}

impl TickWorker {
    pub fn new(
        kind: TickKind,
        schedule: TickSchedule,
        service: Arc<GameService>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            kind,
            schedule,
            service,
            shutdown_rx,
        }
    }

    /// Main worker loop.
    ///
    /// A failed sweep is logged and the next interval proceeds as usual. A
    /// slow sweep delays the following one rather than bursting to catch up.
    pub async fn run(mut self) {
        // interval_at panics on a zero period
        let period = self.schedule.interval.max(Duration::from_millis(1));
        let mut interval = interval_at(Instant::now() + self.schedule.first_delay, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            tick = %self.kind,
            first_delay_ms = self.schedule.first_delay.as_millis() as u64,
            interval_ms = period.as_millis() as u64,
            "TickWorker started"
        );

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match self.kind.run(&self.service).await {
                        Ok(processed) => debug!(tick = %self.kind, processed, "tick complete"),
                        Err(e) => warn!(tick = %self.kind, error = %e, "tick failed"),
                    }
                }
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!(tick = %self.kind, "TickWorker stopped");
    }
}
