//=========================================================================
// Eye Marker
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{EntityId, World};

//=== Eye =================================================================

/// The player's "eye": a marker parented to whichever entity is possessed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Eye {
    parent: Option<EntityId>,
    local_offset: Vec2,
}

impl Eye {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-parents the marker under `parent` at `local_offset` from its core.
    pub fn attach_to(&mut self, parent: EntityId, local_offset: Vec2) {
        self.parent = Some(parent);
        self.local_offset = local_offset;
    }

    pub fn detach(&mut self) {
        self.parent = None;
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn local_offset(&self) -> Vec2 {
        self.local_offset
    }

    /// World-space position, if the parent still exists.
    pub fn world_position(&self, world: &World) -> Option<Vec2> {
        let parent = world.get(self.parent?)?;
        parent.core_position().map(|core| core + self.local_offset)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::Dark;

    #[test]
    fn follows_parent_core() {
        let mut world = World::new();
        let id = world.spawn(Dark::new(Vec2::new(2.0, 3.0)));

        let mut eye = Eye::new();
        eye.attach_to(id, Vec2::new(0.0, 1.0));

        assert_eq!(eye.world_position(&world), Some(Vec2::new(2.0, 4.0)));
    }

    #[test]
    fn loses_position_when_parent_despawns() {
        let mut world = World::new();
        let id = world.spawn(Dark::new(Vec2::ZERO));
        let mut eye = Eye::new();
        eye.attach_to(id, Vec2::ZERO);

        world.despawn(id);

        assert_eq!(eye.world_position(&world), None);
        assert_eq!(eye.parent(), Some(id));
    }
}
