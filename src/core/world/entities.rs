//=========================================================================
// Built-in Entities
//=========================================================================
//
// Dark     fallback body: gravity toggle, optional freeze while
//          unpossessed, horizontal mover and jump.
// PushBox  standard prop: gravity toggle, kinematic while unpossessed,
//          despawns on death.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use super::{DeathOutcome, EntityKind, Possessable};
use crate::core::input::InputFrame;

const GRAVITY: f32 = 9.81;

//=== Dark ================================================================

/// Derived rigid-body flags for a [`Dark`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarkBody {
    pub gravity_scale: f32,
    pub frozen: bool,
}

/// The disposable fallback body.
#[derive(Debug, Clone)]
pub struct Dark {
    possessed: bool,
    position: Vec2,
    velocity: Vec2,
    ground_y: f32,
    eye_offset: Vec2,
    use_gravity: bool,
    freeze_when_unpossessed: bool,
    move_speed: f32,
    jump_speed: f32,
    body: DarkBody,
}

impl Dark {
    /// Creates a Dark standing on the ground at `position`.
    pub fn new(position: Vec2) -> Self {
        let mut dark = Self {
            possessed: false,
            position,
            velocity: Vec2::ZERO,
            ground_y: position.y,
            eye_offset: Vec2::new(0.0, 0.25),
            use_gravity: true,
            freeze_when_unpossessed: false,
            move_speed: 5.0,
            jump_speed: 6.0,
            body: DarkBody {
                gravity_scale: 1.0,
                frozen: false,
            },
        };
        dark.refresh_body();
        dark
    }

    pub fn with_eye_offset(mut self, offset: Vec2) -> Self {
        self.eye_offset = offset;
        self
    }

    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    pub fn with_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self.refresh_body();
        self
    }

    pub fn with_freeze_when_unpossessed(mut self, freeze: bool) -> Self {
        self.freeze_when_unpossessed = freeze;
        self.refresh_body();
        self
    }

    pub fn body(&self) -> DarkBody {
        self.body
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn refresh_body(&mut self) {
        self.body.gravity_scale = if self.use_gravity { 1.0 } else { 0.0 };
        self.body.frozen = !self.possessed && self.freeze_when_unpossessed;
    }

    fn grounded(&self) -> bool {
        self.position.y <= self.ground_y
    }
}

impl Possessable for Dark {
    fn name(&self) -> &str {
        "Dark"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Fallback
    }

    fn layer(&self) -> i32 {
        0
    }

    fn is_possessed(&self) -> bool {
        self.possessed
    }

    fn set_possessed(&mut self, possessed: bool) {
        self.possessed = possessed;
    }

    fn core_position(&self) -> Option<Vec2> {
        Some(self.position)
    }

    fn eye_offset(&self) -> Vec2 {
        self.eye_offset
    }

    fn try_possess(&mut self) {
        self.refresh_body();
        debug!(target: "world", "Dark body refreshed: {:?}", self.body);
    }

    fn death(&mut self) -> DeathOutcome {
        debug!(target: "world", "Dark died at {:?}", self.position);
        DeathOutcome::Remain
    }

    fn steer(&mut self, input: &InputFrame) {
        self.velocity.x = input.move_vector.x * self.move_speed;
        if input.jump && self.grounded() {
            self.velocity.y = self.jump_speed;
        }
    }

    fn update(&mut self, dt: f32) {
        if self.body.frozen {
            self.velocity = Vec2::ZERO;
            return;
        }

        self.velocity.y -= GRAVITY * self.body.gravity_scale * dt;
        self.position += self.velocity * dt;

        if self.position.y < self.ground_y {
            self.position.y = self.ground_y;
            self.velocity.y = 0.0;
        }
    }
}

//=== PushBox =============================================================

/// Rigid-body mode of a [`PushBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Kinematic,
    Dynamic,
}

/// A crate the player can possess.
#[derive(Debug, Clone)]
pub struct PushBox {
    possessed: bool,
    position: Vec2,
    layer: i32,
    eye_offset: Vec2,
    use_gravity: bool,
    kinematic_when_unpossessed: bool,
    gravity_scale: f32,
    body: BodyType,
}

impl PushBox {
    pub fn new(position: Vec2) -> Self {
        let mut pushbox = Self {
            possessed: false,
            position,
            layer: 1,
            eye_offset: Vec2::new(0.0, 0.4),
            use_gravity: true,
            kinematic_when_unpossessed: true,
            gravity_scale: 1.0,
            body: BodyType::Dynamic,
        };
        pushbox.refresh_body();
        pushbox
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self.refresh_body();
        self
    }

    pub fn with_kinematic_when_unpossessed(mut self, kinematic: bool) -> Self {
        self.kinematic_when_unpossessed = kinematic;
        self.refresh_body();
        self
    }

    pub fn body(&self) -> BodyType {
        self.body
    }

    pub fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn refresh_body(&mut self) {
        self.gravity_scale = if self.use_gravity { 1.0 } else { 0.0 };
        self.body = if !self.possessed && self.kinematic_when_unpossessed {
            BodyType::Kinematic
        } else {
            BodyType::Dynamic
        };
    }
}

impl Possessable for PushBox {
    fn name(&self) -> &str {
        "PushBox"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Standard
    }

    fn layer(&self) -> i32 {
        self.layer
    }

    fn is_possessed(&self) -> bool {
        self.possessed
    }

    fn set_possessed(&mut self, possessed: bool) {
        self.possessed = possessed;
    }

    fn core_position(&self) -> Option<Vec2> {
        Some(self.position)
    }

    fn eye_offset(&self) -> Vec2 {
        self.eye_offset
    }

    fn try_possess(&mut self) {
        self.refresh_body();
        debug!(
            target: "world",
            "PushBox (layer {}) body now {:?}, gravity {}",
            self.layer, self.body, self.gravity_scale
        );
    }

    fn death(&mut self) -> DeathOutcome {
        DeathOutcome::Despawn
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_freezes_only_when_unpossessed_and_configured() {
        let mut dark = Dark::new(Vec2::ZERO).with_freeze_when_unpossessed(true);
        assert!(dark.body().frozen);

        dark.set_possessed(true);
        dark.try_possess();
        assert!(!dark.body().frozen);

        dark.set_possessed(false);
        dark.try_possess();
        assert!(dark.body().frozen);
    }

    #[test]
    fn dark_gravity_toggle_sets_scale() {
        let dark = Dark::new(Vec2::ZERO).with_gravity(false);
        assert_eq!(dark.body().gravity_scale, 0.0);
    }

    #[test]
    fn dark_moves_horizontally_and_stays_on_ground() {
        let mut dark = Dark::new(Vec2::new(0.0, 1.0)).with_move_speed(2.0);
        let input = InputFrame {
            move_vector: Vec2::new(1.0, 0.0),
            ..InputFrame::default()
        };

        dark.steer(&input);
        dark.update(0.5);

        let pos = dark.core_position().unwrap();
        assert!((pos.x - 1.0).abs() < 1e-5);
        assert_eq!(pos.y, 1.0);
    }

    #[test]
    fn dark_jump_leaves_ground_then_lands() {
        let mut dark = Dark::new(Vec2::ZERO);
        let input = InputFrame {
            jump: true,
            ..InputFrame::default()
        };

        dark.steer(&input);
        dark.update(0.1);
        assert!(dark.core_position().unwrap().y > 0.0);

        for _ in 0..100 {
            dark.update(0.1);
        }
        assert_eq!(dark.core_position().unwrap().y, 0.0);
    }

    #[test]
    fn pushbox_is_kinematic_until_possessed() {
        let mut pushbox = PushBox::new(Vec2::ZERO);
        assert_eq!(pushbox.body(), BodyType::Kinematic);

        pushbox.set_possessed(true);
        pushbox.try_possess();
        assert_eq!(pushbox.body(), BodyType::Dynamic);
    }

    #[test]
    fn pushbox_gravity_toggle_survives_possession() {
        let mut pushbox = PushBox::new(Vec2::ZERO);
        assert_eq!(pushbox.gravity_scale(), 1.0);

        let mut floating = PushBox::new(Vec2::ZERO).with_gravity(false);
        assert_eq!(floating.gravity_scale(), 0.0);

        floating.set_possessed(true);
        floating.try_possess();
        assert_eq!(floating.gravity_scale(), 0.0);
        assert_eq!(floating.body(), BodyType::Dynamic);

        pushbox.set_possessed(true);
        pushbox.try_possess();
        assert_eq!(pushbox.gravity_scale(), 1.0);
    }

    #[test]
    fn pushbox_despawns_on_death() {
        let mut pushbox = PushBox::new(Vec2::ZERO);
        assert_eq!(pushbox.death(), DeathOutcome::Despawn);
    }

    #[test]
    fn eye_position_adds_offset() {
        let dark = Dark::new(Vec2::new(1.0, 1.0)).with_eye_offset(Vec2::new(0.0, 0.5));
        assert_eq!(dark.eye_position(), Some(Vec2::new(1.0, 1.5)));
    }
}
