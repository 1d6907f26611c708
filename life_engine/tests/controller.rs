//! Run/stop/step behaviour of the simulation controller, on paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use life_engine::{Grid, GridEngine, GridSize, SimulationController, SimulationState, StepOutcome};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

const TICK: Duration = Duration::from_millis(400);

fn blinker_engine() -> Arc<GridEngine> {
    let grid = Grid::from_alive(GridSize::square(10), [(3, 5), (4, 5), (5, 5)]).unwrap();
    Arc::new(GridEngine::with_grid(grid))
}

/// Controller whose listener reports each background generation number.
fn observed(engine: Arc<GridEngine>) -> (SimulationController, mpsc::UnboundedReceiver<u64>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = SimulationController::new(engine, TICK, Handle::current())
        .with_tick_listener(move |snap| {
            let _ = tx.send(snap.generation);
        });
    (controller, rx)
}

#[tokio::test(start_paused = true)]
async fn starts_stopped() {
    let (controller, _rx) = observed(blinker_engine());
    assert_eq!(controller.state(), SimulationState::Stopped);
    assert_eq!(controller.tick_interval(), TICK);
}

#[tokio::test(start_paused = true)]
async fn running_advances_on_the_tick_interval() {
    let (controller, mut rx) = observed(blinker_engine());
    let t0 = Instant::now();
    assert!(controller.start());
    assert!(controller.is_running());

    assert_eq!(rx.recv().await, Some(1));
    assert_eq!(rx.recv().await, Some(2));
    assert_eq!(rx.recv().await, Some(3));
    let elapsed = t0.elapsed();
    assert!(elapsed >= TICK * 2 && elapsed < TICK * 3, "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn step_is_ignored_while_running() {
    let engine = blinker_engine();
    let (controller, mut rx) = observed(Arc::clone(&engine));
    controller.start();
    assert_eq!(rx.recv().await, Some(1));

    let before = engine.snapshot();
    assert_eq!(controller.step(), StepOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);
}

#[tokio::test(start_paused = true)]
async fn step_advances_once_when_stopped() {
    let engine = blinker_engine();
    let (controller, _rx) = observed(Arc::clone(&engine));

    let StepOutcome::Advanced(snap) = controller.step() else {
        panic!("step should advance while stopped");
    };
    assert_eq!(snap.generation, 1);
    assert_eq!(snap.alive_cells().collect::<Vec<_>>(), vec![(4, 4), (4, 5), (4, 6)]);
    assert_eq!(engine.generation(), 1);
}

#[tokio::test(start_paused = true)]
async fn stop_halts_the_driver() {
    let engine = blinker_engine();
    let (controller, mut rx) = observed(Arc::clone(&engine));
    controller.start();
    assert_eq!(rx.recv().await, Some(1));

    assert!(controller.stop());
    assert!(!controller.stop());
    assert_eq!(controller.state(), SimulationState::Stopped);

    sleep(TICK * 10).await;
    assert_eq!(engine.generation(), 1);
    assert!(rx.try_recv().is_err());
    assert!(!controller.step().is_ignored());
}

#[tokio::test(start_paused = true)]
async fn second_start_is_a_no_op() {
    let engine = blinker_engine();
    let (controller, _rx) = observed(Arc::clone(&engine));
    assert!(controller.start());
    assert!(!controller.start());

    // Ticks at 0, 400 and 800 ms.
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(engine.generation(), 3);
}

#[tokio::test(start_paused = true)]
async fn quick_restart_leaves_a_single_driver() {
    let engine = blinker_engine();
    let (controller, mut rx) = observed(Arc::clone(&engine));
    controller.start();
    assert_eq!(rx.recv().await, Some(1));

    controller.stop();
    controller.start();

    // The new driver ticks at once, then at 400 and 800 ms.
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(engine.generation(), 4);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_controller_ends_the_driver() {
    let engine = blinker_engine();
    let (controller, mut rx) = observed(Arc::clone(&engine));
    controller.start();
    assert_eq!(rx.recv().await, Some(1));

    drop(controller);
    sleep(TICK * 5).await;
    assert_eq!(engine.generation(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn toggles_interleave_safely_with_a_fast_driver() {
    let engine = Arc::new(GridEngine::new(GridSize::square(20)));
    let controller =
        SimulationController::new(Arc::clone(&engine), Duration::from_millis(1), Handle::current());
    controller.start();

    let toggler = {
        let engine = Arc::clone(&engine);
        tokio::task::spawn_blocking(move || {
            for i in 0..2_000 {
                engine.toggle_cell(i % 20, (i / 20) % 20).unwrap();
                let snap = engine.snapshot();
                assert_eq!(snap.size(), GridSize::square(20));
            }
        })
    };
    toggler.await.unwrap();
    controller.stop();

    let snap = engine.snapshot();
    assert!(snap.population() <= snap.size().area());
}
