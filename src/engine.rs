//=========================================================================
// Shade Engine
//=========================================================================
//
// Entry point: builds the possession core and runs it on its own thread.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──start()──>  EngineHandle
//         │                          │                      │
//         ├─ with_tps()              └─ init(closure)       ├─ send_inputs()
//         ├─ with_channel_capacity()                        ├─ report_death()
//         └─ with_config()                                  └─ shutdown()
//
//     Host thread ──HostEvent (bounded)──> Core thread @ TPS
//                                            GlobalContext + GlobalSystems
// ```
//
// The whole game lives on the core thread and is built there, so nothing
// in it has to be `Send`. Hosts only ever talk to it through the channel.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::globals::{GameConfig, GlobalContext, GlobalSystems};
use crate::core::host_bridge::{EventCollector, HostEvent, TickControl};
use crate::core::input::InputEvent;
use crate::core::world::EntityId;

//=== Types ===============================================================

type InitFn = Box<dyn FnOnce(&mut GlobalSystems, &mut GlobalContext) + Send>;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (core ticks per second)
/// - **Channel capacity**: 128 host events
/// - **Config**: [`GameConfig::default`]
///
/// # Examples
///
/// ```no_run
/// use glam::Vec2;
/// use shade_engine::EngineBuilder;
/// use shade_engine::core::stage::SpawnDescriptor;
/// use shade_engine::core::world::PushBox;
///
/// let handle = EngineBuilder::new()
///     .with_tps(120.0)
///     .build()
///     .init(|systems, context| {
///         systems.stage.register_all(
///             vec![SpawnDescriptor::new("start", Vec2::ZERO)],
///             Some("start"),
///         );
///         context.world.spawn(PushBox::new(Vec2::new(2.0, 0.0)));
///     })
///     .start();
///
/// handle.shutdown();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
        }
    }

    /// Sets the target ticks per second for the core thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the host → core channel.
    ///
    /// A full channel blocks the sending host until the core catches up.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Consumes the builder and produces an engine ready for
    /// [`Engine::init`] or [`Engine::start`].
    pub fn build(self) -> Engine {
        info!(target: "engine", "Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Engine {
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            config: self.config,
            init_fn: None,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// A configured, not yet running possession core.
pub struct Engine {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    init_fn: Option<InitFn>,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Registers game setup to run on the core thread before bootstrap.
    ///
    /// The closure receives the freshly built systems and context: register
    /// spawns, populate the world, swap the visual cue or fallback template,
    /// subscribe to the bus. Calling `init` again replaces the closure.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems, &mut GlobalContext) + Send + 'static,
    {
        self.init_fn = Some(Box::new(init_fn));
        self
    }

    //--- Execution --------------------------------------------------------

    /// Spawns the core thread and returns the host's handle to it.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded host → core channel
    /// 2. Core thread builds context + systems, runs `init`, bootstraps
    /// 3. Core ticks at the configured TPS until shutdown or disconnect
    ///
    /// A failed bootstrap is logged and ends the core thread.
    pub fn start(self) -> EngineHandle {
        info!(target: "engine", "Starting engine runtime (TPS: {})", self.tps);

        let (sender, receiver): (Sender<HostEvent>, Receiver<HostEvent>) =
            bounded(self.channel_capacity);

        let core = CoreLoop {
            tick: Duration::from_secs_f64(1.0 / self.tps),
            config: self.config,
            init_fn: self.init_fn,
        };
        let join = thread::spawn(move || core.run(receiver));
        info!(target: "engine", "Core thread spawned");

        EngineHandle {
            sender,
            core: Some(join),
        }
    }
}

//=== CoreLoop ============================================================

/// Everything the core thread needs to build and drive the game.
struct CoreLoop {
    tick: Duration,
    config: GameConfig,
    init_fn: Option<InitFn>,
}

impl CoreLoop {
    fn run(self, receiver: Receiver<HostEvent>) {
        let mut context = GlobalContext::new();
        let mut systems = GlobalSystems::new(&context, self.config);

        if let Some(init_fn) = self.init_fn {
            init_fn(&mut systems, &mut context);
        }

        if let Err(e) = systems.initialize(&mut context) {
            error!(target: "engine", "Bootstrap failed: {}", e);
            return;
        }

        let mut collector = EventCollector::new(receiver);
        let dt = self.tick.as_secs_f32();

        loop {
            let frame_start = Instant::now();

            //--- Step 1: Gather host events ---------------------------------
            if collector.collect_frame() == TickControl::Exit {
                info!(target: "engine", "Core thread exiting");
                break;
            }

            for batch in collector.take_batches() {
                context.push_inputs(batch);
            }
            for entity in collector.take_deaths() {
                systems.report_death(&mut context, entity);
            }

            //--- Step 2: Update systems -------------------------------------
            systems.update(&mut context, dt);

            //--- Step 3: Maintain fixed pacing ------------------------------
            let elapsed = frame_start.elapsed();
            if elapsed < self.tick {
                thread::sleep(self.tick - elapsed);
            }
        }
    }
}

//=== EngineHandle ========================================================

/// Host-side handle to a running core thread.
///
/// Dropping the handle shuts the core down and waits for it.
pub struct EngineHandle {
    sender: Sender<HostEvent>,
    core: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    /// Sends one frame's worth of input. Returns false if the core is gone.
    pub fn send_inputs(&self, events: Vec<InputEvent>) -> bool {
        if events.is_empty() {
            return true;
        }
        self.send(HostEvent::Inputs(events))
    }

    /// Tells the core that `entity` died. Returns false if the core is gone.
    pub fn report_death(&self, entity: EntityId) -> bool {
        self.send(HostEvent::EntityDied(entity))
    }

    /// A sender hosts can clone into other threads.
    pub fn sender(&self) -> Sender<HostEvent> {
        self.sender.clone()
    }

    pub fn is_running(&self) -> bool {
        self.core.as_ref().is_some_and(|core| !core.is_finished())
    }

    /// Stops the core thread and waits for it to finish.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn send(&self, event: HostEvent) -> bool {
        if self.sender.send(event).is_err() {
            warn!(target: "engine", "Core thread is gone, host event dropped");
            return false;
        }
        true
    }

    fn stop(&mut self) {
        let Some(core) = self.core.take() else {
            return;
        };

        // a finished core has dropped its receiver
        let _ = self.sender.send(HostEvent::Shutdown);

        match core.join() {
            Ok(()) => info!(target: "engine", "Core thread terminated cleanly"),
            Err(e) => error!(target: "engine", "Core thread panicked: {:?}", e),
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::mode::GameState;
    use crate::core::stage::SpawnDescriptor;
    use glam::Vec2;

    const WAIT: Duration = Duration::from_secs(2);

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.config, GameConfig::default());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let config = GameConfig::default().with_focus_time_scale(0.5);
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_config(config.clone())
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.config, config);
        assert!(engine.init_fn.is_none());
    }

    //=====================================================================
    // Runtime Tests
    //=====================================================================

    fn with_spawn(systems: &mut GlobalSystems) {
        systems
            .stage
            .register_all(vec![SpawnDescriptor::new("start", Vec2::ZERO)], None);
    }

    #[test]
    fn core_bootstraps_and_publishes_possession() {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = EngineBuilder::new()
            .with_tps(240.0)
            .build()
            .init(move |systems, context| {
                with_spawn(systems);
                context
                    .subscriptions
                    .add(context.events.possession.current.subscribe(move |current| {
                        if let Some(id) = *current {
                            let _ = tx.send(id);
                        }
                    }));
            })
            .start();

        assert!(rx.recv_timeout(WAIT).is_ok());
        assert!(handle.is_running());
        handle.shutdown();
    }

    #[test]
    fn inputs_reach_the_core() {
        let (tx, rx) = crossbeam_channel::unbounded();

        let handle = EngineBuilder::new()
            .with_tps(240.0)
            .build()
            .init(move |systems, context| {
                with_spawn(systems);
                context
                    .subscriptions
                    .add(context.events.game_state.state.subscribe(move |state| {
                        let _ = tx.send(*state);
                    }));
            })
            .start();

        assert!(handle.send_inputs(vec![InputEvent::KeyDown(KeyCode::KeyF)]));

        let entered_focus = (0..10)
            .filter_map(|_| rx.recv_timeout(WAIT).ok())
            .any(|state| state == GameState::FocusMode);
        assert!(entered_focus);
        handle.shutdown();
    }

    #[test]
    fn failed_bootstrap_stops_core() {
        let mut handle = EngineBuilder::new().build().start();

        if let Some(core) = handle.core.take() {
            assert!(core.join().is_ok());
        }
        assert!(!handle.is_running());
        assert!(!handle.report_death(EntityId(1)));
    }
}
