//! High-level runtime orchestrator.
//!
//! The runtime wires the game service to its store, roster and clock, spawns
//! the tick workers, and exposes a builder-based API for transports.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{PcgRng, RandomSource};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::clock::{Clock, SystemClock};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::OracleManager;
use crate::replay::DEFAULT_CADENCE;
use crate::repository::{FileStore, GameStore, InMemoryStore};
use crate::roster::{RecentActivityRoster, RosterProvider};
use crate::service::GameService;
use crate::workers::{TickKind, TickSchedule, TickWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub events_tick: TickSchedule,
    pub regen_tick: TickSchedule,
    pub missions_tick: TickSchedule,
    /// Spawn the tick workers (default: true)
    pub enable_ticks: bool,
    /// Seed for the shared random source; drawn from entropy when unset.
    pub seed: Option<u64>,
    /// Players count as active for ticks if they acted within this window.
    pub roster_window_secs: i64,
    pub event_buffer_size: usize,
    /// Pause between revealed lines when a transport replays a battle.
    pub replay_cadence: Duration,
    /// Directory for the durable file store; in-memory when unset.
    pub save_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn schedule(&self, kind: TickKind) -> TickSchedule {
        match kind {
            TickKind::Events => self.events_tick,
            TickKind::Regen => self.regen_tick,
            TickKind::Missions => self.missions_tick,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            events_tick: TickSchedule::new(Duration::from_secs(10), Duration::from_secs(120)),
            regen_tick: TickSchedule::new(Duration::from_secs(5), Duration::from_secs(60)),
            missions_tick: TickSchedule::new(Duration::from_secs(15), Duration::from_secs(90)),
            enable_ticks: true,
            seed: None,
            roster_window_secs: 24 * 60 * 60,
            event_buffer_size: 100,
            replay_cadence: DEFAULT_CADENCE,
            save_dir: None,
        }
    }
}

/// Main runtime that owns the tick workers
///
/// [`RuntimeHandle`] provides a cloneable façade for transports.
pub struct Runtime {
    handle: RuntimeHandle,
    config: RuntimeConfig,
    shutdown_tx: watch::Sender<bool>,
    workers: Vec<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Subscribe to one topic of runtime events
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Stop the tick workers and wait for them to finish
    pub async fn shutdown(self) -> Result<()> {
        // receivers may already be gone if every worker exited
        let _ = self.shutdown_tx.send(true);

        for worker in self.workers {
            worker.await.map_err(RuntimeError::WorkerJoin)?;
        }

        info!("runtime stopped");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    store: Option<Arc<dyn GameStore>>,
    roster: Option<Arc<dyn RosterProvider>>,
    clock: Option<Arc<dyn Clock>>,
    rng: Option<Box<dyn RandomSource>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            store: None,
            roster: None,
            clock: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Use an existing store instead of one derived from `save_dir`
    pub fn store(mut self, store: Arc<dyn GameStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the roster (default: recent activity within the window)
    pub fn roster(mut self, roster: impl RosterProvider + 'static) -> Self {
        self.roster = Some(Arc::new(roster));
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Override the random source (takes precedence over `seed`)
    pub fn rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Enable or disable the tick workers
    pub fn enable_ticks(mut self, enable: bool) -> Self {
        self.config.enable_ticks = enable;
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingContent)?;
        let config = self.config;

        let store: Arc<dyn GameStore> = match (self.store, &config.save_dir) {
            (Some(store), _) => store,
            (None, Some(dir)) => Arc::new(FileStore::open(dir)?),
            (None, None) => Arc::new(InMemoryStore::new()),
        };
        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let roster: Arc<dyn RosterProvider> = match self.roster {
            Some(roster) => roster,
            None => Arc::new(RecentActivityRoster::new(
                Arc::clone(&store),
                Arc::clone(&clock),
                config.roster_window_secs,
            )),
        };
        let rng: Box<dyn RandomSource> = match (self.rng, config.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(PcgRng::seeded(seed)),
            (None, None) => Box::new(PcgRng::seeded(rand::random::<u64>())),
        };

        let events = EventBus::with_capacity(config.event_buffer_size);
        let service = Arc::new(GameService::new(
            oracles, store, roster, clock, rng, events,
        ));
        let handle = RuntimeHandle::new(Arc::clone(&service));

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let workers = if config.enable_ticks {
            TickKind::ALL
                .into_iter()
                .map(|kind| {
                    let worker = TickWorker::new(
                        kind,
                        config.schedule(kind),
                        Arc::clone(&service),
                        shutdown_rx.clone(),
                    );
                    tokio::spawn(async move {
                        worker.run().await;
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        info!(
            ticks = config.enable_ticks,
            durable = config.save_dir.is_some(),
            "runtime started"
        );

        Ok(Runtime {
            handle,
            config,
            shutdown_tx,
            workers,
        })
    }
}
