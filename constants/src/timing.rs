/// Door slide duration, independent of travel distance.
pub const DOOR_SLIDE_SECS: f32 = 0.52;

/// Reveal fades are shorter than the door slide.
pub const REVEAL_FADE_IN_SECS: f32 = 0.30;
pub const REVEAL_FADE_OUT_SECS: f32 = 0.22;

/// Travel duration scales with floor distance.
pub const TRAVEL_BASE_SECS: f32 = 0.85;
pub const TRAVEL_PER_FLOOR_SECS: f32 = 0.42;

/// Floor indicator never steps faster than this.
pub const INDICATOR_MIN_STEP_SECS: f32 = 0.18;

/// Camera rumble: per-axis sinusoid frequencies (rad per unit of normalised
/// travel time) and the peak amplitude of the midpoint envelope.
pub const SHAKE_FREQ_X: f32 = 42.0;
pub const SHAKE_FREQ_Y: f32 = 57.0;
pub const SHAKE_FREQ_Z: f32 = 38.0;
pub const SHAKE_PEAK_AMPLITUDE: f32 = 0.016;
pub const SHAKE_Y_SCALE: f32 = 0.6;

/// Directional light flicker during travel, relative to base intensity.
pub const LIGHT_FLICKER_FREQ: f32 = 22.0;
pub const LIGHT_FLICKER_AMPLITUDE: f32 = 0.08;

/// Reveal backdrop and corridor light maxima.
pub const REVEAL_MAX_OPACITY: f32 = 0.55;
pub const REVEAL_LIGHT_MAX_INTENSITY: f32 = 60_000.0;

/// Pointer displacement (logical pixels, either axis) beyond which a gesture
/// is a camera drag rather than a selection.
pub const DRAG_THRESHOLD_PX: f32 = 5.0;
