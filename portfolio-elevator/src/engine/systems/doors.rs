use bevy::prelude::*;

use crate::engine::easing::{ease_in_out_cubic, lerp};
use crate::engine::scene::reveal::{RevealBackdrop, RevealLight};
use crate::engine::systems::navigation::{
    queue_animation, NavAction, NavigationState, PresentContent,
};
use crate::tools::floor_select::ActiveButton;
use constants::cabin::{
    DOOR_LEFT_CLOSED_X, DOOR_LEFT_OPEN_X, DOOR_RIGHT_CLOSED_X, DOOR_RIGHT_OPEN_X,
};
use constants::timing::{
    DOOR_SLIDE_SECS, REVEAL_FADE_IN_SECS, REVEAL_FADE_OUT_SECS, REVEAL_LIGHT_MAX_INTENSITY,
    REVEAL_MAX_OPACITY,
};

/// Left door panel mesh. Slides toward -X when opening.
#[derive(Component)]
pub struct DoorLeftPanel;

/// Right door panel mesh. Mirrors the left one toward +X.
#[derive(Component)]
pub struct DoorRightPanel;

/// An in-flight door slide. Present as a resource only while animating; both
/// panels always start from the static closed or open extents because the
/// busy gate never lets a slide begin mid-way.
#[derive(Resource, Debug, PartialEq)]
pub struct DoorAnimation {
    elapsed: f32,
    duration: f32,
    left_from: f32,
    left_to: f32,
    right_from: f32,
    right_to: f32,
}

impl DoorAnimation {
    pub fn opening() -> Self {
        Self {
            elapsed: 0.0,
            duration: DOOR_SLIDE_SECS,
            left_from: DOOR_LEFT_CLOSED_X,
            left_to: DOOR_LEFT_OPEN_X,
            right_from: DOOR_RIGHT_CLOSED_X,
            right_to: DOOR_RIGHT_OPEN_X,
        }
    }

    pub fn closing() -> Self {
        Self {
            elapsed: 0.0,
            duration: DOOR_SLIDE_SECS,
            left_from: DOOR_LEFT_OPEN_X,
            left_to: DOOR_LEFT_CLOSED_X,
            right_from: DOOR_RIGHT_OPEN_X,
            right_to: DOOR_RIGHT_CLOSED_X,
        }
    }

    /// Advance by `dt` seconds; true once the slide has finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.elapsed >= self.duration
    }

    fn progress(&self) -> f32 {
        ease_in_out_cubic(self.elapsed / self.duration)
    }

    /// Current panel x positions, (left, right).
    pub fn offsets(&self) -> (f32, f32) {
        let k = self.progress();
        (
            lerp(self.left_from, self.left_to, k),
            lerp(self.right_from, self.right_to, k),
        )
    }
}

/// Opacity ramp for the behind-the-doors backdrop and its light. Runs after
/// the doors are fully open (fade in) or before anything else once they have
/// fully closed (fade out).
#[derive(Resource, Debug, PartialEq)]
pub struct RevealFade {
    elapsed: f32,
    duration: f32,
    from: f32,
    to: f32,
}

impl RevealFade {
    pub fn fade_in() -> Self {
        Self {
            elapsed: 0.0,
            duration: REVEAL_FADE_IN_SECS,
            from: 0.0,
            to: 1.0,
        }
    }

    pub fn fade_out() -> Self {
        Self {
            elapsed: 0.0,
            duration: REVEAL_FADE_OUT_SECS,
            from: 1.0,
            to: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.elapsed >= self.duration
    }

    /// Normalised reveal level in 0..=1.
    pub fn level(&self) -> f32 {
        lerp(self.from, self.to, self.elapsed / self.duration)
    }
}

/// Drive both door panels from the active slide, then hand the completed
/// phase back to the navigation machine.
pub fn tick_door_animation(
    animation: Option<ResMut<DoorAnimation>>,
    time: Res<Time>,
    mut nav: ResMut<NavigationState>,
    mut left: Query<&mut Transform, With<DoorLeftPanel>>,
    mut right: Query<&mut Transform, (With<DoorRightPanel>, Without<DoorLeftPanel>)>,
    mut commands: Commands,
) {
    let Some(mut animation) = animation else {
        return;
    };
    let done = animation.advance(time.delta_secs());
    let (left_x, right_x) = animation.offsets();
    for mut transform in &mut left {
        transform.translation.x = left_x;
    }
    for mut transform in &mut right {
        transform.translation.x = right_x;
    }
    if done {
        commands.remove_resource::<DoorAnimation>();
        let action = nav.doors_finished();
        queue_animation(&action, &mut commands);
    }
}

/// Fade the reveal backdrop and its light with the active ramp, then hand
/// the completed phase back to the navigation machine. Completing a fade-in
/// is what finally presents the pending section.
pub fn tick_reveal_fade(
    fade: Option<ResMut<RevealFade>>,
    time: Res<Time>,
    mut nav: ResMut<NavigationState>,
    mut active_button: ResMut<ActiveButton>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut backdrops: Query<(&MeshMaterial3d<StandardMaterial>, &mut Visibility), With<RevealBackdrop>>,
    mut lights: Query<&mut PointLight, With<RevealLight>>,
    mut present: EventWriter<PresentContent>,
    mut commands: Commands,
) {
    let Some(mut fade) = fade else {
        return;
    };
    let done = fade.advance(time.delta_secs());
    let level = fade.level();

    for (material_handle, mut visibility) in &mut backdrops {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color.set_alpha(level * REVEAL_MAX_OPACITY);
        }
        *visibility = if level > 0.0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    for mut light in &mut lights {
        light.intensity = level * REVEAL_LIGHT_MAX_INTENSITY;
    }

    if done {
        commands.remove_resource::<RevealFade>();
        match nav.reveal_finished() {
            NavAction::Present(Some(kind)) => {
                active_button.0 = None;
                present.send(PresentContent(kind));
            }
            NavAction::Present(None) | NavAction::Settle => {
                active_button.0 = None;
            }
            other => queue_animation(&other, &mut commands),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doors_start_and_end_on_static_extents() {
        let mut opening = DoorAnimation::opening();
        assert_eq!(opening.offsets(), (DOOR_LEFT_CLOSED_X, DOOR_RIGHT_CLOSED_X));
        opening.advance(DOOR_SLIDE_SECS);
        assert_eq!(opening.offsets(), (DOOR_LEFT_OPEN_X, DOOR_RIGHT_OPEN_X));

        let mut closing = DoorAnimation::closing();
        assert_eq!(closing.offsets(), (DOOR_LEFT_OPEN_X, DOOR_RIGHT_OPEN_X));
        closing.advance(10.0);
        assert_eq!(closing.offsets(), (DOOR_LEFT_CLOSED_X, DOOR_RIGHT_CLOSED_X));
    }

    #[test]
    fn open_and_close_are_symmetric() {
        // At matching normalised times the panels sit at mirrored positions
        // along the slide, in the same total duration.
        let steps = 64;
        for i in 0..=steps {
            let t = DOOR_SLIDE_SECS * i as f32 / steps as f32;
            let mut opening = DoorAnimation::opening();
            let mut closing = DoorAnimation::closing();
            opening.advance(t);
            closing.advance(DOOR_SLIDE_SECS - t);
            let (open_left, _) = opening.offsets();
            let (close_left, _) = closing.offsets();
            assert!(
                (open_left - close_left).abs() < 1e-4,
                "asymmetry at t={t}: {open_left} vs {close_left}"
            );
        }
    }

    #[test]
    fn panels_mirror_each_other_throughout() {
        let mut animation = DoorAnimation::opening();
        for _ in 0..20 {
            animation.advance(DOOR_SLIDE_SECS / 20.0);
            let (left, right) = animation.offsets();
            assert!((left + right).abs() < 1e-5);
        }
    }

    #[test]
    fn completion_is_reported_exactly_once_per_slide() {
        let mut animation = DoorAnimation::opening();
        assert!(!animation.advance(DOOR_SLIDE_SECS * 0.5));
        assert!(animation.advance(DOOR_SLIDE_SECS));
    }

    #[test]
    fn fade_levels_span_zero_to_one() {
        let mut fade = RevealFade::fade_in();
        assert_eq!(fade.level(), 0.0);
        fade.advance(REVEAL_FADE_IN_SECS);
        assert_eq!(fade.level(), 1.0);

        let mut fade = RevealFade::fade_out();
        assert_eq!(fade.level(), 1.0);
        fade.advance(REVEAL_FADE_OUT_SECS);
        assert_eq!(fade.level(), 0.0);
    }
}
