//=========================================================================
// Fallback Template
//=========================================================================
//
// Factory for the disposable fallback body, used at startup and on
// death recovery.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{Dark, Possessable};

//=== FallbackTemplate ====================================================

/// Produces a fresh fallback entity at a spawn position.
pub trait FallbackTemplate {
    fn instantiate(&self, position: Vec2) -> Box<dyn Possessable>;
}

//=== DarkTemplate ========================================================

/// Default template: spawns a [`Dark`] with the configured tuning.
#[derive(Debug, Clone)]
pub struct DarkTemplate {
    pub eye_offset: Vec2,
    pub move_speed: f32,
    pub use_gravity: bool,
    pub freeze_when_unpossessed: bool,
}

impl Default for DarkTemplate {
    fn default() -> Self {
        Self {
            eye_offset: Vec2::new(0.0, 0.25),
            move_speed: 5.0,
            use_gravity: true,
            freeze_when_unpossessed: false,
        }
    }
}

impl FallbackTemplate for DarkTemplate {
    fn instantiate(&self, position: Vec2) -> Box<dyn Possessable> {
        Box::new(
            Dark::new(position)
                .with_eye_offset(self.eye_offset)
                .with_move_speed(self.move_speed)
                .with_gravity(self.use_gravity)
                .with_freeze_when_unpossessed(self.freeze_when_unpossessed),
        )
    }
}

//=========================================================================
// Tests
//=========================================================================
