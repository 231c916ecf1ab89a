//=========================================================================
// Bootstrap Errors
//=========================================================================

//=== BootstrapError ======================================================

/// Reasons the startup sequence can refuse to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// No spawn descriptor is active, so there is nowhere to put the
    /// first fallback body.
    NoActiveSpawn,

    /// The coordinator has no fallback template to instantiate.
    MissingFallbackTemplate,

    AlreadyInitialized,
}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveSpawn => write!(f, "No active spawn descriptor"),
            Self::MissingFallbackTemplate => write!(f, "No fallback template assigned"),
            Self::AlreadyInitialized => write!(f, "Game already initialized"),
        }
    }
}

impl std::error::Error for BootstrapError {}
