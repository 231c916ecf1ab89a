//=========================================================================
// Focus Circle
//=========================================================================
//
// Candidate detector for focus-mode targeting.
//
// Architecture:
//   activate(center) ──► tracking on, set cleared
//   on_enter / on_exit ◄── overlap signal (host physics or sync_overlaps)
//   nearest(world, current) ──► closest candidate core, self excluded
//   deactivate() ──► tracking off, set cleared
//
// Purely observational: the circle never touches possession flags.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use glam::Vec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::world::{EntityId, World};

//=== FocusCircle =========================================================

/// Tracks entities inside a circular region while focus mode is on.
#[derive(Debug)]
pub struct FocusCircle {
    radius: f32,
    center: Vec2,
    active: bool,
    candidates: HashSet<EntityId>,
}

impl FocusCircle {
    /// # Panics
    ///
    /// Panics if `radius` is not positive.
    pub fn new(radius: f32) -> Self {
        assert!(radius > 0.0, "Focus radius must be positive, got {}", radius);
        Self {
            radius,
            center: Vec2::ZERO,
            active: false,
            candidates: HashSet::new(),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Clears the set, moves the region to `center` and starts tracking.
    pub fn activate(&mut self, center: Vec2) {
        self.candidates.clear();
        self.center = center;
        self.active = true;
        debug!(target: "focus", "Focus circle active at {}", center);
    }

    /// Stops tracking and clears the set.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.candidates.clear();
        debug!(target: "focus", "Focus circle inactive");
    }

    //--- Overlap Signals --------------------------------------------------

    /// An entity entered the region. Ignored while inactive.
    pub fn on_enter(&mut self, id: EntityId) {
        if self.active && self.candidates.insert(id) {
            trace!(target: "focus", "Candidate {} entered", id);
        }
    }

    /// An entity left the region. Ignored while inactive.
    pub fn on_exit(&mut self, id: EntityId) {
        if self.active && self.candidates.remove(&id) {
            trace!(target: "focus", "Candidate {} left", id);
        }
    }

    /// Derives enter/exit signals from core positions in `world`.
    ///
    /// For hosts without their own overlap detection. Entities without a
    /// core, or no longer in the world, count as outside.
    pub fn sync_overlaps(&mut self, world: &World) {
        if !self.active {
            return;
        }

        let inside: HashSet<EntityId> = world
            .iter()
            .filter(|(_, entity)| {
                entity
                    .core_position()
                    .is_some_and(|core| core.distance(self.center) <= self.radius)
            })
            .map(|(id, _)| id)
            .collect();

        let exited: Vec<EntityId> = self.candidates.difference(&inside).copied().collect();
        let entered: Vec<EntityId> = inside.difference(&self.candidates).copied().collect();

        for id in exited {
            self.on_exit(id);
        }
        for id in entered {
            self.on_enter(id);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the candidate whose core is closest to `excluding`'s core.
    ///
    /// `excluding` itself is never returned. `None` when `excluding` has no
    /// core right now or no other candidate has one. Equal distances keep
    /// whichever candidate the set yields first.
    pub fn nearest(&self, world: &World, excluding: EntityId) -> Option<EntityId> {
        let origin = world.get(excluding)?.core_position()?;

        let mut best: Option<(EntityId, f32)> = None;
        for &id in &self.candidates {
            if id == excluding {
                continue;
            }
            let Some(core) = world.get(id).and_then(|entity| entity.core_position()) else {
                continue;
            };

            let distance = origin.distance(core);
            if best.map_or(true, |(_, min)| distance < min) {
                best = Some((id, distance));
            }
        }

        best.map(|(id, _)| id)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        assert!(radius > 0.0, "Focus radius must be positive, got {}", radius);
        self.radius = radius;
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.candidates.contains(&id)
    }

    pub fn candidates(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.candidates.iter().copied()
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::{Dark, PushBox};

    fn world_with_boxes(xs: &[f32]) -> (World, EntityId, Vec<EntityId>) {
        let mut world = World::new();
        let me = world.spawn(Dark::new(Vec2::ZERO));
        let boxes = xs
            .iter()
            .map(|&x| world.spawn(PushBox::new(Vec2::new(x, 0.0))))
            .collect();
        (world, me, boxes)
    }

    #[test]
    fn nearest_picks_minimum_distance() {
        let (world, me, boxes) = world_with_boxes(&[3.0, 1.0, 5.0]);
        let mut circle = FocusCircle::new(10.0);
        circle.activate(Vec2::ZERO);

        circle.on_enter(me);
        for &id in &boxes {
            circle.on_enter(id);
        }

        assert_eq!(circle.nearest(&world, me), Some(boxes[1]));
    }

    #[test]
    fn nearest_is_independent_of_enter_order() {
        let (world, me, boxes) = world_with_boxes(&[3.0, 1.0, 5.0]);
        let mut circle = FocusCircle::new(10.0);
        circle.activate(Vec2::ZERO);

        for &id in boxes.iter().rev() {
            circle.on_enter(id);
        }

        assert_eq!(circle.nearest(&world, me), Some(boxes[1]));
    }

    #[test]
    fn nearest_excludes_self() {
        let (world, me, _) = world_with_boxes(&[]);
        let mut circle = FocusCircle::new(10.0);
        circle.activate(Vec2::ZERO);
        circle.on_enter(me);

        assert_eq!(circle.nearest(&world, me), None);
    }

    #[test]
    fn nearest_needs_excluding_core() {
        let (world, _, boxes) = world_with_boxes(&[1.0]);
        let mut circle = FocusCircle::new(10.0);
        circle.activate(Vec2::ZERO);
        circle.on_enter(boxes[0]);

        // an id the world does not know has no core
        assert_eq!(circle.nearest(&world, EntityId(999)), None);
    }

    #[test]
    fn signals_ignored_while_inactive() {
        let mut circle = FocusCircle::new(1.0);
        circle.on_enter(EntityId(1));
        assert_eq!(circle.candidate_count(), 0);
    }

    #[test]
    fn activate_and_deactivate_clear_candidates() {
        let mut circle = FocusCircle::new(1.0);
        circle.activate(Vec2::ZERO);
        circle.on_enter(EntityId(1));
        circle.on_enter(EntityId(2));
        circle.on_exit(EntityId(1));
        assert_eq!(circle.candidates().collect::<Vec<_>>(), vec![EntityId(2)]);

        circle.activate(Vec2::ONE);
        assert_eq!(circle.candidate_count(), 0);

        circle.on_enter(EntityId(3));
        circle.deactivate();
        assert!(!circle.is_active());
        assert_eq!(circle.candidate_count(), 0);
    }

    #[test]
    fn sync_overlaps_tracks_radius() {
        let (mut world, me, boxes) = world_with_boxes(&[2.0, 8.0]);
        let mut circle = FocusCircle::new(5.0);
        circle.activate(Vec2::ZERO);

        circle.sync_overlaps(&world);
        assert!(circle.contains(me));
        assert!(circle.contains(boxes[0]));
        assert!(!circle.contains(boxes[1]));

        world.despawn(boxes[0]);
        circle.sync_overlaps(&world);
        assert!(!circle.contains(boxes[0]));
    }
}
