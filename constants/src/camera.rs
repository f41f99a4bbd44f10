/// Orbit pivot sits just inside the door opening so the view faces the doors.
pub const FOCUS_POINT: [f32; 3] = [0.0, 1.25, -1.05];

/// Initial spherical pose: centred azimuth, near the lower polar clamp,
/// mid-range distance. Keeps the camera inside the cabin looking forward.
pub const INITIAL_AZIMUTH: f32 = 0.0;
pub const INITIAL_POLAR: f32 = 1.43;
pub const INITIAL_DISTANCE: f32 = 2.15;

/// Azimuth clamp keeps the view generally toward the doors.
pub const AZIMUTH_MIN: f32 = -0.55;
pub const AZIMUTH_MAX: f32 = 0.55;

/// Polar clamp keeps the horizon roughly level.
pub const POLAR_MIN: f32 = 1.10;
pub const POLAR_MAX: f32 = 1.45;

/// Distance clamp stops the camera from leaving the cabin.
pub const DISTANCE_MIN: f32 = 1.4;
pub const DISTANCE_MAX: f32 = 2.6;

pub const ROTATE_SENSITIVITY: f32 = 0.0035;
pub const ZOOM_STEP_PER_LINE: f32 = 0.12;
pub const ZOOM_STEP_PER_PIXEL: f32 = 0.006;
