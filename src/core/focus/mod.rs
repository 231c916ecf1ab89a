//=========================================================================
// Focus Targeting
//=========================================================================

mod circle;

pub use circle::FocusCircle;
