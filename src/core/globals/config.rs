//=========================================================================
// Game Configuration
//=========================================================================
//
// Tuning knobs for the possession core, with the stock values:
//
//   default_time_scale   1.0
//   focus_time_scale     0.3
//   cue_duration         300 ms
//   respawn_delay        100 ms
//   camera_transition    500 ms
//   focus_radius         5.0 world units
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== GameConfig ==========================================================

/// Tuning for [`super::GlobalSystems`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use shade_engine::core::globals::GameConfig;
///
/// let config = GameConfig::default()
///     .with_focus_time_scale(0.5)
///     .with_respawn_delay(Duration::from_millis(250));
///
/// assert_eq!(config.focus_time_scale(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    default_time_scale: f32,
    focus_time_scale: f32,
    cue_duration: Duration,
    respawn_delay: Duration,
    camera_transition: Duration,
    focus_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_time_scale: 1.0,
            focus_time_scale: 0.3,
            cue_duration: Duration::from_millis(300),
            respawn_delay: Duration::from_millis(100),
            camera_transition: Duration::from_millis(500),
            focus_radius: 5.0,
        }
    }
}

impl GameConfig {
    //--- Builders ---------------------------------------------------------

    /// # Panics
    ///
    /// Panics if `scale < 0.0`.
    pub fn with_default_time_scale(mut self, scale: f32) -> Self {
        assert!(scale >= 0.0, "Default time scale must be non-negative, got {}", scale);
        self.default_time_scale = scale;
        self
    }

    /// # Panics
    ///
    /// Panics if `scale < 0.0`.
    pub fn with_focus_time_scale(mut self, scale: f32) -> Self {
        assert!(scale >= 0.0, "Focus time scale must be non-negative, got {}", scale);
        self.focus_time_scale = scale;
        self
    }

    pub fn with_cue_duration(mut self, duration: Duration) -> Self {
        self.cue_duration = duration;
        self
    }

    pub fn with_respawn_delay(mut self, delay: Duration) -> Self {
        self.respawn_delay = delay;
        self
    }

    pub fn with_camera_transition(mut self, duration: Duration) -> Self {
        self.camera_transition = duration;
        self
    }

    /// # Panics
    ///
    /// Panics if `radius <= 0.0`.
    pub fn with_focus_radius(mut self, radius: f32) -> Self {
        assert!(radius > 0.0, "Focus radius must be positive, got {}", radius);
        self.focus_radius = radius;
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn default_time_scale(&self) -> f32 {
        self.default_time_scale
    }

    pub fn focus_time_scale(&self) -> f32 {
        self.focus_time_scale
    }

    pub fn cue_duration(&self) -> Duration {
        self.cue_duration
    }

    pub fn respawn_delay(&self) -> Duration {
        self.respawn_delay
    }

    pub fn camera_transition(&self) -> Duration {
        self.camera_transition
    }

    pub fn focus_radius(&self) -> f32 {
        self.focus_radius
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.default_time_scale(), 1.0);
        assert_eq!(config.focus_time_scale(), 0.3);
        assert_eq!(config.cue_duration(), Duration::from_millis(300));
        assert_eq!(config.respawn_delay(), Duration::from_millis(100));
        assert_eq!(config.camera_transition(), Duration::from_millis(500));
        assert_eq!(config.focus_radius(), 5.0);
    }

    #[test]
    fn builder_chaining() {
        let config = GameConfig::default()
            .with_default_time_scale(0.9)
            .with_camera_transition(Duration::ZERO)
            .with_focus_radius(2.0);

        assert_eq!(config.default_time_scale(), 0.9);
        assert_eq!(config.camera_transition(), Duration::ZERO);
        assert_eq!(config.focus_radius(), 2.0);
    }

    #[test]
    #[should_panic(expected = "Focus radius must be positive")]
    fn zero_radius_panics() {
        GameConfig::default().with_focus_radius(0.0);
    }

    #[test]
    #[should_panic(expected = "Default time scale must be non-negative")]
    fn negative_scale_panics() {
        GameConfig::default().with_default_time_scale(-1.0);
    }
}
