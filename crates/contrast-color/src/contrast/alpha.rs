//! Alpha floor for translucent results
//!
//! A contrasting overlay that is almost fully transparent provides no
//! practical legibility, so translucent inputs have their alpha rescaled
//! from `0.0..=1.0` onto `ALPHA_FLOOR..=1.0`.

/// Minimum opacity of a contrasting color derived from a translucent input.
pub const ALPHA_FLOOR: f64 = 0.35;

/// Rescale an input alpha onto `ALPHA_FLOOR..=1.0`.
///
/// `0.0` maps to the floor and `1.0` to itself; the mapping is linear and
/// strictly increasing in between. Input is clamped to 0.0..=1.0.
///
/// # Example
/// ```
/// use contrast_color::contrast::lift_alpha;
///
/// assert_eq!(lift_alpha(0.0), 0.35);
/// assert_eq!(lift_alpha(1.0), 1.0);
/// assert!((lift_alpha(0.5) - 0.675).abs() < 1e-12);
/// ```
#[inline]
pub fn lift_alpha(alpha: f64) -> f64 {
    ALPHA_FLOOR + (1.0 - ALPHA_FLOOR) * alpha.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(lift_alpha(0.0), ALPHA_FLOOR);
        assert_eq!(lift_alpha(1.0), 1.0);
    }

    #[test]
    fn test_out_of_range_input_clamps() {
        assert_eq!(lift_alpha(-1.0), ALPHA_FLOOR);
        assert_eq!(lift_alpha(3.0), 1.0);
    }

    #[test]
    fn test_strictly_increasing_and_bounded() {
        let mut previous = lift_alpha(0.0);
        for i in 1..1000 {
            let lifted = lift_alpha(i as f64 / 1000.0);
            assert!(lifted > previous, "not increasing at {i}/1000");
            assert!((ALPHA_FLOOR..1.0).contains(&lifted));
            previous = lifted;
        }
    }
}
