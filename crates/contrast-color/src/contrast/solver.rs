//! Contrast solver
//!
//! Finds the smallest mix of a color toward white or black that reaches a
//! target contrast ratio against the original.
//!
//! The mix fraction `t` lives on a fixed grid of [`MIX_STEP`] increments.
//! Mixing is done in linear light, `sqrt(c² (1 - t) + e² t)` per channel
//! with `e` the extreme (255 or 0). Each step is measured after rounding to
//! 8-bit channels, so the reported ratio is that of the returned color.
//! Rounding is monotone and contrast grows monotonically with `t`, so the
//! smallest sufficient step is found by binary search.
//!
//! The grid stops one step short of the extreme: when the target cannot be
//! reached the solver returns the last step, which still carries a trace of
//! the source hue, and reports that the target was missed.

use crate::color::Color;

use super::luminance::{contrast_ratio, relative_luminance};

/// Increment of the mix fraction.
pub const MIX_STEP: f64 = 0.05;

/// Last usable grid step (`t = 0.95`).
const MAX_STEP: u32 = 19;

/// Luminance at or above which the solver darkens instead of lightening.
const DIRECTION_PIVOT: f64 = 0.5;

/// Which extreme the solver mixes toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lighten: mix toward white (255)
    TowardWhite,
    /// Darken: mix toward black (0)
    TowardBlack,
}

impl Direction {
    /// Pick the direction for a source luminance.
    ///
    /// Dark colors (`L < 0.5`) are lightened, everything else darkened.
    #[inline]
    pub fn for_luminance(luminance: f64) -> Self {
        if luminance < DIRECTION_PIVOT {
            Direction::TowardWhite
        } else {
            Direction::TowardBlack
        }
    }

    /// Channel value of the extreme this direction moves toward.
    #[inline]
    pub fn extreme(self) -> f64 {
        match self {
            Direction::TowardWhite => 255.0,
            Direction::TowardBlack => 0.0,
        }
    }

    /// Name of the extreme, as shown in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TowardWhite => "white",
            Direction::TowardBlack => "black",
        }
    }
}

/// Result of a contrast solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Solved color, always opaque
    pub color: Color,
    /// Extreme the color was mixed toward
    pub direction: Direction,
    /// Mix fraction used (a multiple of [`MIX_STEP`])
    pub mix: f64,
    /// Contrast between `color` and the source
    pub ratio: f64,
    /// Whether `ratio` reached the requested target
    pub reached: bool,
}

/// Mix one channel toward `extreme` by `t` in linear light.
#[inline]
fn mix_channel(channel: f64, extreme: f64, t: f64) -> f64 {
    (channel * channel * (1.0 - t) + extreme * extreme * t).sqrt()
}

/// Mix all channels of `color` toward `direction` by `t`.
fn mix_channels(color: &Color, direction: Direction, t: f64) -> Color {
    let extreme = direction.extreme();
    Color::from_channels(
        color
            .channels()
            .map(|c| if c == extreme { c } else { mix_channel(c, extreme, t) }),
    )
}

#[inline]
fn step_fraction(step: u32) -> f64 {
    step as f64 * MIX_STEP
}

/// Solve for a color contrasting with `color` by at least `target_ratio`.
///
/// The source alpha is ignored and the result is opaque; translucency is
/// handled by [`lift_alpha`](super::alpha::lift_alpha).
///
/// # Example
/// ```
/// use contrast_color::{solve, Color, Direction};
///
/// let solution = solve(&Color::BLACK, 7.0);
/// assert_eq!(solution.color, Color::rgb(151, 151, 151));
/// assert_eq!(solution.direction, Direction::TowardWhite);
/// assert!(solution.reached);
/// ```
pub fn solve(color: &Color, target_ratio: f64) -> Solution {
    let source = relative_luminance(color);
    let direction = Direction::for_luminance(source);

    let ratio_at = |step: u32| {
        let mixed = mix_channels(color, direction, step_fraction(step));
        contrast_ratio(relative_luminance(&mixed), source)
    };

    let reached = ratio_at(MAX_STEP) >= target_ratio;
    let step = if reached {
        // Smallest step in 1..=MAX_STEP whose ratio meets the target
        let (mut lo, mut hi) = (1, MAX_STEP);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if ratio_at(mid) >= target_ratio {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    } else {
        MAX_STEP
    };

    let mix = step_fraction(step);
    Solution {
        color: mix_channels(color, direction, mix),
        direction,
        mix,
        ratio: ratio_at(step),
        reached,
    }
}
