/// Clamped orbital rig anchored inside the cabin.
pub mod cabin_camera;
