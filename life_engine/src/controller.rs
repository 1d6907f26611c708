// controller.rs - Start/stop/step arbitration and the background driver

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::engine::{GridEngine, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationState {
    #[default]
    Stopped,
    Running,
}

/// Result of a manual [`SimulationController::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum StepOutcome {
    Advanced(Snapshot),
    /// The simulation was running; nothing happened.
    Ignored,
}

impl StepOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, StepOutcome::Ignored)
    }
}

/// Called from the driver after every background generation.
pub type TickListener = Arc<dyn Fn(&Snapshot) + Send + Sync>;

// Each start() opens a new epoch. A driver keeps going only while the
// published flag is Running *and* carries its own epoch.
#[derive(Debug, Clone, Copy, Default)]
struct RunFlag {
    state: SimulationState,
    epoch: u64,
}

impl RunFlag {
    fn owns(&self, epoch: u64) -> bool {
        self.state == SimulationState::Running && self.epoch == epoch
    }
}

pub struct SimulationController {
    engine: Arc<GridEngine>,
    tick_interval: Duration,
    runtime: Handle,
    run: watch::Sender<RunFlag>,
    listener: Option<TickListener>,
}

impl SimulationController {
    /// Builds a stopped controller. Background generations are spawned on `runtime`.
    pub fn new(engine: Arc<GridEngine>, tick_interval: Duration, runtime: Handle) -> Self {
        let (run, _) = watch::channel(RunFlag::default());
        Self {
            engine,
            tick_interval: tick_interval.max(Duration::from_millis(1)),
            runtime,
            run,
            listener: None,
        }
    }

    pub fn with_tick_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn engine(&self) -> &Arc<GridEngine> {
        &self.engine
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn state(&self) -> SimulationState {
        self.run.borrow().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == SimulationState::Running
    }

    /// Starts the background cadence. Returns `false` if it was already running.
    pub fn start(&self) -> bool {
        let mut epoch = 0;
        let started = self.run.send_if_modified(|flag| {
            if flag.state == SimulationState::Running {
                return false;
            }
            flag.state = SimulationState::Running;
            flag.epoch += 1;
            epoch = flag.epoch;
            true
        });
        if !started {
            debug!("start ignored, already running");
            return false;
        }

        info!(epoch, interval_ms = self.tick_interval.as_millis() as u64, "simulation started");
        self.runtime.spawn(drive(
            Arc::clone(&self.engine),
            self.tick_interval,
            self.run.subscribe(),
            epoch,
            self.listener.clone(),
        ));
        true
    }

    /// Stops the cadence. A generation already being computed still completes.
    /// Returns `false` if it was not running.
    pub fn stop(&self) -> bool {
        let stopped = self.run.send_if_modified(|flag| {
            if flag.state == SimulationState::Stopped {
                return false;
            }
            flag.state = SimulationState::Stopped;
            true
        });
        if stopped {
            info!(generation = self.engine.generation(), "simulation stopped");
        }
        stopped
    }

    /// Advances exactly one generation, synchronously. Ignored while running.
    pub fn step(&self) -> StepOutcome {
        if self.is_running() {
            warn!("step ignored while running");
            return StepOutcome::Ignored;
        }
        StepOutcome::Advanced(self.engine.advance())
    }
}

async fn drive(
    engine: Arc<GridEngine>,
    period: Duration,
    mut run: watch::Receiver<RunFlag>,
    epoch: u64,
    listener: Option<TickListener>,
) {
    // First tick completes immediately.
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !run.borrow().owns(epoch) {
                    break;
                }
                let snapshot = engine.advance();
                if let Some(listener) = &listener {
                    listener(&snapshot);
                }
            }
            changed = run.changed() => {
                // Err: the controller was dropped.
                if changed.is_err() || !run.borrow().owns(epoch) {
                    break;
                }
            }
        }
    }
    debug!(epoch, "driver exited");
}
