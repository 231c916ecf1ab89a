//=========================================================================
// Game State
//=========================================================================

//=== GameState ===========================================================

/// The single active top-level mode of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Normal play.
    #[default]
    Playing,

    /// Focus held: time slowed, possession targeting enabled.
    FocusMode,

    /// Scripted camera/area transition.
    Transition,

    Paused,
    Menu,
    GameOver,
}

impl GameState {
    /// True for the states in which player input reaches the game.
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::Playing | Self::FocusMode)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
