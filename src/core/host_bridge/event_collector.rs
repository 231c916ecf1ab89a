//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side drain of the host channel, once per tick.
//
// Architecture:
//   Receiver<HostEvent> → collect_frame() → input batches + deaths
//                                         → TickControl
//
// Bounded per tick so a flooding host cannot starve the simulation.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::HostEvent;
use crate::core::input::InputEvent;
use crate::core::world::EntityId;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<HostEvent>,
    input_batches: Vec<Vec<InputEvent>>,
    deaths: Vec<EntityId>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<HostEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
            deaths: Vec::new(),
        }
    }

    /// Drains pending host events (bounded).
    ///
    /// A shutdown message or a disconnected host ends the loop.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        self.deaths.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(target: "engine", "Host event backlog: drained {} events this tick", drained);
        }

        TickControl::Continue
    }

    /// Takes this tick's input batches, leaving an empty vec behind.
    pub(crate) fn take_batches(&mut self) -> Vec<Vec<InputEvent>> {
        std::mem::take(&mut self.input_batches)
    }

    /// Takes this tick's death reports in arrival order.
    pub(crate) fn take_deaths(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.deaths)
    }

    fn handle_event(&mut self, event: HostEvent) -> TickControl {
        match event {
            HostEvent::Inputs(batch) => {
                if !batch.is_empty() {
                    self.input_batches.push(batch);
                }
                TickControl::Continue
            }
            HostEvent::EntityDied(id) => {
                self.deaths.push(id);
                TickControl::Continue
            }
            HostEvent::Shutdown => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<HostEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.take_batches().is_empty());
    }

    #[test]
    fn collect_separates_inputs_and_deaths() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(HostEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::KeyA)])).unwrap();
        tx.send(HostEvent::EntityDied(EntityId(3))).unwrap();
        tx.send(HostEvent::Inputs(vec![])).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.take_batches().len(), 1);
        assert_eq!(collector.take_deaths(), vec![EntityId(3)]);
    }

    #[test]
    fn collect_clears_previous_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(HostEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::Space)])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.take_batches().len(), 1);

        collector.collect_frame();
        assert!(collector.take_batches().is_empty());
    }

    #[test]
    fn collect_returns_exit_on_shutdown() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(HostEvent::Shutdown).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<HostEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..150 {
            tx.send(HostEvent::EntityDied(EntityId(1))).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.take_deaths().len(), 100);
        collector.collect_frame();
        assert_eq!(collector.take_deaths().len(), 50);
    }
}
