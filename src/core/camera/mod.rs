//=========================================================================
// Camera
//=========================================================================

mod rig;

pub use rig::CameraRig;
