/// Piecewise cubic ease: accelerate to the midpoint, decelerate after.
/// Satisfies `ease(0) == 0`, `ease(0.5) == 0.5`, `ease(1) == 1` and is
/// monotone non-decreasing on [0, 1]. Input is clamped.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn lerp(from: f32, to: f32, k: f32) -> f32 {
    from + (to - from) * k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn monotone_non_decreasing() {
        let mut previous = 0.0;
        for i in 0..=1000 {
            let value = ease_in_out_cubic(i as f32 / 1000.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn accelerates_then_decelerates() {
        // Slow near the ends, fast around the midpoint.
        let early = ease_in_out_cubic(0.1);
        let late = 1.0 - ease_in_out_cubic(0.9);
        let mid_span = ease_in_out_cubic(0.55) - ease_in_out_cubic(0.45);
        assert!(early < 0.1);
        assert!(late < 0.1);
        assert!(mid_span > 0.1);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(ease_in_out_cubic(-0.5), 0.0);
        assert_eq!(ease_in_out_cubic(1.5), 1.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-0.85, 0.85, 0.0), -0.85);
        assert_eq!(lerp(-0.85, 0.85, 1.0), 0.85);
    }
}
