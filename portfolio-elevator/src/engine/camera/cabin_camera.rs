use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::tools::floor_select::PointerGesture;
use constants::camera::{
    AZIMUTH_MAX, AZIMUTH_MIN, DISTANCE_MAX, DISTANCE_MIN, FOCUS_POINT, INITIAL_AZIMUTH,
    INITIAL_DISTANCE, INITIAL_POLAR, POLAR_MAX, POLAR_MIN, ROTATE_SENSITIVITY,
    ZOOM_STEP_PER_LINE, ZOOM_STEP_PER_PIXEL,
};

/// Orbital rig around a fixed focus point inside the cabin. Angles and
/// distance are clamped so the camera never leaves the cab or clips a wall.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CabinCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub focus: Vec3,
}

impl Default for CabinCamera {
    fn default() -> Self {
        Self {
            azimuth: INITIAL_AZIMUTH,
            polar: INITIAL_POLAR,
            distance: INITIAL_DISTANCE,
            focus: Vec3::from_array(FOCUS_POINT),
        }
    }
}

impl CabinCamera {
    pub fn orbit(&mut self, delta: Vec2) {
        self.azimuth = (self.azimuth - delta.x * ROTATE_SENSITIVITY).clamp(AZIMUTH_MIN, AZIMUTH_MAX);
        self.polar = (self.polar - delta.y * ROTATE_SENSITIVITY).clamp(POLAR_MIN, POLAR_MAX);
    }

    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance - amount).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// World position on the orbit sphere. Azimuth zero places the camera on
    /// +Z behind the focus, facing the doors along -Z; polar is measured from
    /// straight up.
    pub fn position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.focus
            + self.distance
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                )
    }
}

/// Recompute the camera transform from the rig each frame. Travel shake is
/// applied after this system in the schedule, so the rumble offset never
/// accumulates and the pose restores itself the frame travel ends.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut rig: ResMut<CabinCamera>,
    gesture: Res<PointerGesture>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if gesture.dragging && mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        rig.orbit(mouse_delta);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * ZOOM_STEP_PER_LINE,
            MouseScrollUnit::Pixel => ev.y * ZOOM_STEP_PER_PIXEL,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        rig.zoom(scroll_accum);
    }

    camera_transform.translation = rig.position();
    camera_transform.look_at(rig.focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_clamps_to_configured_limits() {
        let mut rig = CabinCamera::default();
        rig.orbit(Vec2::new(-100_000.0, 0.0));
        assert_eq!(rig.azimuth, AZIMUTH_MAX);
        rig.orbit(Vec2::new(100_000.0, 100_000.0));
        assert_eq!(rig.azimuth, AZIMUTH_MIN);
        assert_eq!(rig.polar, POLAR_MIN);
    }

    #[test]
    fn zoom_clamps_to_configured_limits() {
        let mut rig = CabinCamera::default();
        rig.zoom(100.0);
        assert_eq!(rig.distance, DISTANCE_MIN);
        rig.zoom(-100.0);
        assert_eq!(rig.distance, DISTANCE_MAX);
    }

    #[test]
    fn position_sits_at_the_configured_distance_from_focus() {
        let rig = CabinCamera::default();
        let offset = rig.position() - rig.focus;
        assert!((offset.length() - INITIAL_DISTANCE).abs() < 1e-5);
    }

    #[test]
    fn default_pose_looks_toward_the_doors() {
        // Azimuth zero puts the camera behind the focus on +Z, facing -Z.
        let rig = CabinCamera::default();
        assert!(rig.position().z > rig.focus.z);
    }
}
