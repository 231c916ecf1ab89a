//=========================================================================
// Input Frame
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== InputFrame ==========================================================

/// The player's intent for one tick.
///
/// `move_vector` is continuous; `possess_attempt` and `jump` are edges
/// (true only on the tick the input went down); `focus_held` is a level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    pub move_vector: Vec2,
    pub possess_attempt: bool,
    pub jump: bool,
    pub focus_held: bool,
}

impl InputFrame {
    /// True if the frame carries any edge.
    pub fn has_edges(&self) -> bool {
        self.possess_attempt || self.jump
    }
}
