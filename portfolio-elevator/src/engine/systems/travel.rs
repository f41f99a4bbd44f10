use bevy::prelude::*;
use std::f32::consts::PI;

use crate::engine::scene::cabin::CabinLight;
use crate::engine::systems::navigation::{queue_animation, FloorIndicator, NavigationState};
use constants::timing::{
    INDICATOR_MIN_STEP_SECS, LIGHT_FLICKER_AMPLITUDE, LIGHT_FLICKER_FREQ, SHAKE_FREQ_X,
    SHAKE_FREQ_Y, SHAKE_FREQ_Z, SHAKE_PEAK_AMPLITUDE, SHAKE_Y_SCALE, TRAVEL_BASE_SECS,
    TRAVEL_PER_FLOOR_SECS,
};

/// Simulated transit between two floors. The cab never moves; the ride is a
/// timed camera rumble, a ceiling-light flicker and a stepping indicator.
#[derive(Resource, Debug, PartialEq)]
pub struct TravelAnimation {
    elapsed: f32,
    duration: f32,
    from_floor: u8,
    to_floor: u8,
    step_secs: f32,
    base_illuminance: Option<f32>,
}

impl TravelAnimation {
    /// Ride from one floor to another. Duration grows linearly with distance
    /// and the indicator never steps faster than the configured minimum.
    pub fn between(from_floor: u8, to_floor: u8) -> Self {
        let span = from_floor.abs_diff(to_floor).max(1);
        let duration = TRAVEL_BASE_SECS + span as f32 * TRAVEL_PER_FLOOR_SECS;
        Self {
            elapsed: 0.0,
            duration,
            from_floor,
            to_floor,
            step_secs: (duration / span as f32).max(INDICATOR_MIN_STEP_SECS),
            base_illuminance: None,
        }
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.elapsed >= self.duration
    }

    /// Normalised ride progress in 0..=1.
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn to_floor(&self) -> u8 {
        self.to_floor
    }

    /// Floor number the indicator should show, stepping one floor at a time
    /// through every intermediate floor toward the target.
    pub fn displayed_floor(&self) -> u8 {
        if self.elapsed >= self.duration {
            return self.to_floor;
        }
        let steps = (self.elapsed / self.step_secs) as i32;
        let span = i32::from(self.to_floor) - i32::from(self.from_floor);
        let stepped = i32::from(self.from_floor) + steps.min(span.abs()) * span.signum();
        stepped as u8
    }
}

/// Additive camera offset at normalised ride time `t`. Three incommensurate
/// per-axis sinusoids under a sin(pi t) envelope, which is exactly zero at
/// both ends so the ride starts and finishes on the unmodified pose.
pub fn shake_offset(t: f32) -> Vec3 {
    let envelope = SHAKE_PEAK_AMPLITUDE * (PI * t.clamp(0.0, 1.0)).sin();
    Vec3::new(
        envelope * (t * SHAKE_FREQ_X).sin(),
        envelope * SHAKE_Y_SCALE * (t * SHAKE_FREQ_Y).sin(),
        envelope * (t * SHAKE_FREQ_Z).sin(),
    )
}

/// Rumble the camera, flicker the cabin light and step the indicator while a
/// ride is active. Runs after the camera controller so the shake rides on
/// top of the freshly written pose and vanishes with the resource.
pub fn tick_travel(
    animation: Option<ResMut<TravelAnimation>>,
    time: Res<Time>,
    mut nav: ResMut<NavigationState>,
    mut indicator: ResMut<FloorIndicator>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
    mut lights: Query<&mut DirectionalLight, With<CabinLight>>,
    mut commands: Commands,
) {
    let Some(mut animation) = animation else {
        return;
    };
    let done = animation.advance(time.delta_secs());
    let t = animation.progress();

    if let Ok(mut camera_transform) = cameras.single_mut() {
        camera_transform.translation += shake_offset(t);
    }

    for mut light in &mut lights {
        let base = *animation
            .base_illuminance
            .get_or_insert(light.illuminance);
        if done {
            light.illuminance = base;
        } else {
            let flicker = 1.0
                + LIGHT_FLICKER_AMPLITUDE * (animation.elapsed * LIGHT_FLICKER_FREQ).sin();
            light.illuminance = base * flicker;
        }
    }

    indicator.0 = animation.displayed_floor();

    if done {
        indicator.0 = animation.to_floor();
        commands.remove_resource::<TravelAnimation>();
        let action = nav.travel_finished();
        queue_animation(&action, &mut commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_grows_with_floor_distance() {
        let one = TravelAnimation::between(1, 2);
        let two = TravelAnimation::between(1, 3);
        assert_eq!(one.duration(), TRAVEL_BASE_SECS + TRAVEL_PER_FLOOR_SECS);
        assert_eq!(two.duration(), TRAVEL_BASE_SECS + 2.0 * TRAVEL_PER_FLOOR_SECS);
        assert!(two.duration() > one.duration());
    }

    #[test]
    fn shake_is_zero_at_both_ends_and_nonzero_mid_ride() {
        assert_eq!(shake_offset(0.0), Vec3::ZERO);
        assert!(shake_offset(1.0).length() < 1e-6);
        assert!(shake_offset(0.37).length() > 0.0);
    }

    #[test]
    fn shake_stays_within_peak_amplitude() {
        for i in 0..=1000 {
            let t = i as f32 / 1000.0;
            let offset = shake_offset(t);
            assert!(offset.x.abs() <= SHAKE_PEAK_AMPLITUDE + 1e-6);
            assert!(offset.y.abs() <= SHAKE_PEAK_AMPLITUDE * SHAKE_Y_SCALE + 1e-6);
            assert!(offset.z.abs() <= SHAKE_PEAK_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn indicator_passes_through_intermediate_floors() {
        let mut ride = TravelAnimation::between(1, 3);
        let mut seen = vec![ride.displayed_floor()];
        while !ride.advance(0.01) {
            let floor = ride.displayed_floor();
            if *seen.last().unwrap_or(&0) != floor {
                seen.push(floor);
            }
        }
        let floor = ride.displayed_floor();
        if *seen.last().unwrap_or(&0) != floor {
            seen.push(floor);
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn indicator_steps_downward_rides_too() {
        let mut ride = TravelAnimation::between(3, 1);
        assert_eq!(ride.displayed_floor(), 3);
        ride.advance(ride.duration());
        assert_eq!(ride.displayed_floor(), 1);
    }

    #[test]
    fn indicator_step_interval_respects_the_minimum() {
        let ride = TravelAnimation::between(1, 2);
        assert!(ride.step_secs >= INDICATOR_MIN_STEP_SECS);

        // A long ride divides its duration evenly across the span.
        let long = TravelAnimation::between(1, 5);
        assert!((long.step_secs - long.duration() / 4.0).abs() < 1e-6);
    }

    #[test]
    fn adjacent_ride_has_no_intermediate_indicator_values() {
        let mut ride = TravelAnimation::between(1, 2);
        while !ride.advance(0.01) {
            let floor = ride.displayed_floor();
            assert!(floor == 1 || floor == 2);
        }
    }
}
