use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::render::ContentKind;
use crate::engine::systems::navigation::{FloorRequest, NavigationState};
use crate::tools::ray::ray_hits_obb;
use constants::timing::DRAG_THRESHOLD_PX;

/// Raycastable floor button. Only entities carrying this component are ever
/// considered by picking; cabin geometry cannot swallow a click.
#[derive(Component, Debug)]
pub struct ClickTarget {
    pub floor: u8,
    pub kind: ContentKind,
    /// Local-space half extents of the pick volume.
    pub half_extents: Vec3,
}

/// Pointer state across frames, used to tell an orbit drag from a click.
#[derive(Resource, Debug, Default)]
pub struct PointerGesture {
    pub press_pos: Option<Vec2>,
    pub dragging: bool,
    pub hovered: Option<Entity>,
}

impl PointerGesture {
    /// Record a press. A press that begins while navigation is busy is
    /// dropped outright, so it can never become a selection even when the
    /// release happens after the ride has finished.
    fn begin_press(&mut self, cursor: Option<Vec2>, busy: bool) {
        self.dragging = false;
        self.press_pos = if busy { None } else { cursor };
    }

    /// Promote the press to a drag once the cursor leaves the threshold.
    fn track(&mut self, cursor: Option<Vec2>) {
        if self.dragging {
            return;
        }
        if let (Some(press), Some(pos)) = (self.press_pos, cursor) {
            if exceeds_drag_threshold(press, pos) {
                self.dragging = true;
            }
        }
    }

    /// Finish the gesture; true when it stayed a click.
    fn end_press(&mut self) -> bool {
        let was_click = self.press_pos.is_some() && !self.dragging;
        self.press_pos = None;
        self.dragging = false;
        was_click
    }
}

/// Button currently lit as the navigation target, cleared when the sequence
/// finishes.
#[derive(Resource, Debug, Default)]
pub struct ActiveButton(pub Option<Entity>);

/// Materials shared by every floor button, swapped by interaction state.
#[derive(Resource)]
pub struct ButtonMaterials {
    pub idle: Handle<StandardMaterial>,
    pub hover: Handle<StandardMaterial>,
    pub active: Handle<StandardMaterial>,
}

/// A gesture becomes a drag once the pointer moves beyond the threshold on
/// either axis. Drags orbit the camera and never select.
fn exceeds_drag_threshold(press: Vec2, current: Vec2) -> bool {
    let delta = (current - press).abs();
    delta.x > DRAG_THRESHOLD_PX || delta.y > DRAG_THRESHOLD_PX
}

fn pick_nearest(
    ray: &Ray3d,
    targets: &Query<(Entity, &GlobalTransform, &ClickTarget)>,
) -> Option<(Entity, u8, ContentKind)> {
    let mut nearest: Option<(f32, Entity, u8, ContentKind)> = None;
    for (entity, xf, target) in targets {
        if let Some(t) = ray_hits_obb(ray, xf, target.half_extents) {
            if nearest.as_ref().is_none_or(|(best, ..)| t < *best) {
                nearest = Some((t, entity, target.floor, target.kind.clone()));
            }
        }
    }
    nearest.map(|(_, entity, floor, kind)| (entity, floor, kind))
}

/// Classify pointer gestures and resolve clicks against the button panel.
/// A press that moves further than the drag threshold becomes a camera
/// orbit and never selects; hover tracking keeps running while navigation
/// is busy, selection does not.
pub fn pointer_select(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    targets: Query<(Entity, &GlobalTransform, &ClickTarget)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut gesture: ResMut<PointerGesture>,
    nav: Res<NavigationState>,
    mut requests: EventWriter<FloorRequest>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let cursor = window.cursor_position();

    let ray = cursor.and_then(|pos| camera.viewport_to_world(camera_transform, pos).ok());
    gesture.hovered = ray
        .as_ref()
        .and_then(|ray| pick_nearest(ray, &targets))
        .map(|(entity, ..)| entity);

    if mouse_button.just_pressed(MouseButton::Left) {
        gesture.begin_press(cursor, nav.busy);
    }

    if mouse_button.pressed(MouseButton::Left) {
        gesture.track(cursor);
    }

    if mouse_button.just_released(MouseButton::Left) {
        let was_click = gesture.end_press();
        if was_click && !nav.busy {
            if let Some((entity, floor, kind)) = ray.as_ref().and_then(|r| pick_nearest(r, &targets))
            {
                requests.send(FloorRequest {
                    floor,
                    kind,
                    button: Some(entity),
                });
            }
        }
    }
}

/// Keep button materials in sync with hover and active state.
pub fn reflect_button_materials(
    gesture: Res<PointerGesture>,
    active: Res<ActiveButton>,
    button_materials: Option<Res<ButtonMaterials>>,
    mut buttons: Query<(Entity, &mut MeshMaterial3d<StandardMaterial>), With<ClickTarget>>,
) {
    let Some(button_materials) = button_materials else {
        return;
    };
    for (entity, mut material) in &mut buttons {
        let wanted = if active.0 == Some(entity) {
            &button_materials.active
        } else if gesture.hovered == Some(entity) {
            &button_materials.hover
        } else {
            &button_materials.idle
        };
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_displacement_stays_a_click() {
        let press = Vec2::new(100.0, 100.0);
        assert!(!exceeds_drag_threshold(press, press));
        assert!(!exceeds_drag_threshold(press, press + Vec2::new(5.0, 5.0)));
        assert!(!exceeds_drag_threshold(press, press - Vec2::new(4.9, 0.0)));
    }

    #[test]
    fn either_axis_beyond_threshold_is_a_drag() {
        let press = Vec2::new(100.0, 100.0);
        assert!(exceeds_drag_threshold(press, press + Vec2::new(5.1, 0.0)));
        assert!(exceeds_drag_threshold(press, press + Vec2::new(0.0, -5.1)));
        assert!(exceeds_drag_threshold(press, press + Vec2::new(40.0, 40.0)));
    }

    #[test]
    fn idle_press_and_release_is_a_click() {
        let mut gesture = PointerGesture::default();
        gesture.begin_press(Some(Vec2::new(50.0, 50.0)), false);
        gesture.track(Some(Vec2::new(52.0, 51.0)));
        assert!(gesture.end_press());
    }

    #[test]
    fn press_during_navigation_never_becomes_a_click() {
        // The ride can finish between press and release; the press was
        // already dropped, so the release must not select.
        let mut gesture = PointerGesture::default();
        gesture.begin_press(Some(Vec2::new(50.0, 50.0)), true);
        gesture.track(Some(Vec2::new(50.0, 50.0)));
        assert!(!gesture.end_press());
    }

    #[test]
    fn dragging_suppresses_the_click() {
        let mut gesture = PointerGesture::default();
        gesture.begin_press(Some(Vec2::new(50.0, 50.0)), false);
        gesture.track(Some(Vec2::new(80.0, 50.0)));
        assert!(gesture.dragging);
        assert!(!gesture.end_press());
    }
}
