pub mod cabin;
pub mod camera;
pub mod theme;
pub mod timing;
