//=========================================================================
// Spawn Descriptor
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== SpawnDescriptor =====================================================

/// A named place the fallback body appears at.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDescriptor {
    /// Unique key within a [`super::SpawnRegistry`].
    pub area_id: String,
    pub position: Vec2,
}

impl SpawnDescriptor {
    pub fn new(area_id: impl Into<String>, position: Vec2) -> Self {
        Self {
            area_id: area_id.into(),
            position,
        }
    }
}
