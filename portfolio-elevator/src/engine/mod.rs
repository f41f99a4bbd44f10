pub mod camera;
pub mod core;
pub mod easing;
pub mod scene;
pub mod systems;
