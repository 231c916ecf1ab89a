//=========================================================================
// Possessable Capability
//=========================================================================
//
// The contract every controllable world entity implements.
//
// Possession flag is written by the possession coordinator only;
// `try_possess` means "possession state changed, recompute", not
// "you are now possessed".
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::input::InputFrame;

//=== EntityId ============================================================

/// Stable identity of an entity inside a [`super::World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== EntityKind ==========================================================

/// Distinguishes the disposable fallback body from persistent entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The transient default body. Destroyed as soon as it loses possession.
    Fallback,

    /// Any other world entity. Persists after losing possession.
    Standard,
}

//=== DeathOutcome ========================================================

/// What the world should do with an entity after its death handling ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathOutcome {
    Remain,
    Despawn,
}

//=== Possessable =========================================================

/// Capability of an entity that the player can take control of.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use shade_engine::core::world::{DeathOutcome, EntityKind, Possessable};
///
/// struct Lamp { possessed: bool, at: Vec2 }
///
/// impl Possessable for Lamp {
///     fn name(&self) -> &str { "Lamp" }
///     fn kind(&self) -> EntityKind { EntityKind::Standard }
///     fn layer(&self) -> i32 { 2 }
///     fn is_possessed(&self) -> bool { self.possessed }
///     fn set_possessed(&mut self, possessed: bool) { self.possessed = possessed }
///     fn core_position(&self) -> Option<Vec2> { Some(self.at) }
///     fn eye_offset(&self) -> Vec2 { Vec2::new(0.0, 0.5) }
///     fn try_possess(&mut self) {}
///     fn death(&mut self) -> DeathOutcome { DeathOutcome::Remain }
/// }
/// ```
pub trait Possessable {
    /// Human-readable label used in logs.
    fn name(&self) -> &str;

    fn kind(&self) -> EntityKind;

    /// Draw order; higher renders in front.
    fn layer(&self) -> i32;

    fn is_possessed(&self) -> bool;

    fn set_possessed(&mut self, possessed: bool);

    /// Center used for distance queries. `None` if the entity has no core
    /// right now (e.g. mid-teardown).
    fn core_position(&self) -> Option<Vec2>;

    /// Where the eye marker sits relative to the core.
    fn eye_offset(&self) -> Vec2;

    /// Re-derive physics/behaviour from the current possession flag.
    fn try_possess(&mut self);

    /// Entity-specific death handling, independent of possession.
    fn death(&mut self) -> DeathOutcome;

    /// Applies this tick's player input. Only called on the possessed entity.
    fn steer(&mut self, _input: &InputFrame) {}

    /// Advances the entity by `dt` seconds of scaled game time.
    fn update(&mut self, _dt: f32) {}

    /// Core position plus eye offset, the point visual cues travel between.
    fn eye_position(&self) -> Option<Vec2> {
        self.core_position().map(|core| core + self.eye_offset())
    }
}
