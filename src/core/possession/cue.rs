//=========================================================================
// Visual Cue
//=========================================================================
//
// The animated marker that travels between bodies during a transfer.
//
// Architecture:
//   coordinator ──play(from, to, duration)──► VisualCue
//        ▲                                      │ update(dt) per tick
//        └──── CueCompletion (poll) ◄── Sender<()> on arrival
//
// Completion is a bounded crossbeam channel. A cue that drops its sender
// without signalling has been abandoned; the coordinator treats that as
// "done" so a broken effect can never wedge possession.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use glam::Vec2;
use log::trace;

//=== CueStatus ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueStatus {
    Pending,
    Finished,

    /// The cue went away without signalling.
    Abandoned,
}

//=== CueCompletion =======================================================

/// Receiving end of a cue's "movement finished" signal.
#[derive(Debug)]
pub struct CueCompletion {
    receiver: Receiver<()>,
}

impl CueCompletion {
    /// Creates a linked sender/completion pair.
    pub fn channel() -> (Sender<()>, CueCompletion) {
        let (sender, receiver) = bounded(1);
        (sender, CueCompletion { receiver })
    }

    /// A completion that reports `Finished` on first poll.
    pub fn finished() -> Self {
        let (sender, completion) = Self::channel();
        // capacity 1, nothing queued yet
        let _ = sender.try_send(());
        completion
    }

    /// Non-blocking check. `Finished` is reported once; later polls see
    /// the dropped sender as `Abandoned`.
    pub fn poll(&self) -> CueStatus {
        match self.receiver.try_recv() {
            Ok(()) => CueStatus::Finished,
            Err(TryRecvError::Empty) => CueStatus::Pending,
            Err(TryRecvError::Disconnected) => CueStatus::Abandoned,
        }
    }
}

//=== VisualCue ===========================================================

/// External animated-marker mover.
pub trait VisualCue {
    /// Starts moving from `from` to `to` over `duration` seconds.
    fn play(&mut self, from: Vec2, to: Vec2, duration: f32) -> CueCompletion;

    /// Advances the animation by `dt` seconds of unscaled time.
    fn update(&mut self, _dt: f32) {}
}

//=== EyeTrailCue =========================================================

struct Flight {
    from: Vec2,
    to: Vec2,
    duration: f32,
    elapsed: f32,
    done: Sender<()>,
}

/// Linear eye-trail mover driven by the coordinator's tick.
///
/// Starting a new flight abandons the previous one.
#[derive(Default)]
pub struct EyeTrailCue {
    position: Vec2,
    flight: Option<Flight>,
}

impl EyeTrailCue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the trail head is now.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.flight.is_some()
    }

    /// Progress of the current flight in `[0, 1]`, if one is running.
    pub fn progress(&self) -> Option<f32> {
        self.flight
            .as_ref()
            .map(|flight| (flight.elapsed / flight.duration).clamp(0.0, 1.0))
    }
}

impl VisualCue for EyeTrailCue {
    fn play(&mut self, from: Vec2, to: Vec2, duration: f32) -> CueCompletion {
        let (done, completion) = CueCompletion::channel();
        self.position = from;

        if duration <= 0.0 {
            self.position = to;
            self.flight = None;
            let _ = done.try_send(());
            return completion;
        }

        trace!(target: "possession", "Eye trail {} → {} over {}s", from, to, duration);
        self.flight = Some(Flight {
            from,
            to,
            duration,
            elapsed: 0.0,
            done,
        });
        completion
    }

    fn update(&mut self, dt: f32) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };

        flight.elapsed += dt;
        let t = (flight.elapsed / flight.duration).min(1.0);
        self.position = flight.from.lerp(flight.to, t);

        if t >= 1.0 {
            if let Some(flight) = self.flight.take() {
                // the coordinator may have stopped listening
                let _ = flight.done.try_send(());
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_reports_pending_then_finished() {
        let (sender, completion) = CueCompletion::channel();
        assert_eq!(completion.poll(), CueStatus::Pending);

        sender.send(()).unwrap();
        assert_eq!(completion.poll(), CueStatus::Finished);
    }

    #[test]
    fn dropped_sender_is_abandoned() {
        let (sender, completion) = CueCompletion::channel();
        drop(sender);
        assert_eq!(completion.poll(), CueStatus::Abandoned);
    }

    #[test]
    fn finished_completion_is_ready() {
        assert_eq!(CueCompletion::finished().poll(), CueStatus::Finished);
    }

    #[test]
    fn eye_trail_moves_linearly_and_signals_on_arrival() {
        let mut cue = EyeTrailCue::new();
        let completion = cue.play(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0);

        cue.update(0.5);
        assert!((cue.position().x - 5.0).abs() < 1e-4);
        assert_eq!(completion.poll(), CueStatus::Pending);

        cue.update(0.6);
        assert_eq!(cue.position(), Vec2::new(10.0, 0.0));
        assert!(!cue.is_playing());
        assert_eq!(completion.poll(), CueStatus::Finished);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut cue = EyeTrailCue::new();
        let completion = cue.play(Vec2::ZERO, Vec2::ONE, 0.0);
        assert_eq!(completion.poll(), CueStatus::Finished);
        assert_eq!(cue.position(), Vec2::ONE);
    }

    #[test]
    fn replaying_abandons_previous_flight() {
        let mut cue = EyeTrailCue::new();
        let first = cue.play(Vec2::ZERO, Vec2::ONE, 1.0);
        let _second = cue.play(Vec2::ONE, Vec2::ZERO, 1.0);

        assert_eq!(first.poll(), CueStatus::Abandoned);
    }
}
