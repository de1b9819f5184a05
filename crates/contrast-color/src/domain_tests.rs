//! Domain-critical regression tests for contrast-color.
//!
//! These tests pin the established outputs and sweep the color cube for
//! the properties every result must satisfy. Each test documents the
//! regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{contrasting_color, ContrastOptions};
    use crate::color::Color;
    use crate::contrast::{contrast_ratio, relative_luminance, ContrastLevel, Direction, ALPHA_FLOOR};

    /// Channel values used for sweeps: both extremes, the thresholds around
    /// the linear segment of the sRGB curve, and a coarse spread in between.
    const SWEEP: [u8; 11] = [0, 1, 10, 11, 51, 102, 128, 153, 204, 254, 255];

    fn sweep_colors() -> impl Iterator<Item = Color> {
        SWEEP.into_iter().flat_map(|r| {
            SWEEP
                .into_iter()
                .flat_map(move |g| SWEEP.into_iter().map(move |b| Color::rgb(r, g, b)))
        })
    }

    // ========================================================================
    // Established outputs
    // ========================================================================

    /// If this breaks, it means: the level table, the mix grid or the mixing
    /// formula changed, and every consumer's accent colors shift.
    #[test]
    fn test_established_outputs() {
        let cases = [
            ("#000", None, "rgb(151,151,151)"),
            ("#fff", None, "rgb(81,81,81)"),
            ("#f0f", None, "rgb(255,249,255)"),
            ("#000", Some("AA"), "rgb(128,128,128)"),
            ("rgb(0, 0, 0)", None, "rgb(151,151,151)"),
            ("rgba(0, 0, 0, 0.5)", None, "rgba(151,151,151,0.675)"),
        ];

        for (color, level, expected) in cases {
            assert_eq!(
                contrasting_color(color, level).unwrap(),
                expected,
                "REGRESSION: contrasting_color({color:?}, {level:?})"
            );
        }
    }

    /// If this breaks, it means: the AA level no longer resolves to its own
    /// ratio, or saturated channels are being moved.
    #[test]
    fn test_established_outputs_saturated() {
        let cases = [
            ("#ff0", None, "rgb(81,81,0)"),
            ("#ff0", Some("AA"), "rgb(114,114,0)"),
            ("#00f", None, "rgb(235,235,255)"),
            ("#00f", Some("AA"), "rgb(189,189,255)"),
        ];

        for (color, level, expected) in cases {
            assert_eq!(
                contrasting_color(color, level).unwrap(),
                expected,
                "REGRESSION: contrasting_color({color:?}, {level:?})"
            );
        }
    }

    // ========================================================================
    // Properties over the color cube
    // ========================================================================

    /// If this breaks, it means: formatting is not stable, so the same color
    /// can serialize to different strings after a round trip.
    #[test]
    fn test_formatting_is_idempotent() {
        let alphas = [0.0, 0.001, 0.1, 0.35, 0.5, 0.675, 0.99, 0.99994, 1.0];
        for color in sweep_colors() {
            for a in alphas {
                let first = color.with_alpha(a).to_string();
                let reparsed: Color = first.parse().unwrap();
                assert_eq!(reparsed.to_string(), first, "unstable for {color:?} a={a}");
            }
        }
    }

    /// If this breaks, it means: opaque inputs leak an alpha component.
    #[test]
    fn test_opaque_inputs_give_opaque_output() {
        for color in sweep_colors() {
            for level in ContrastLevel::ALL {
                let output = ContrastOptions::from_color(color)
                    .with_level(level)
                    .to_string();
                assert!(output.starts_with("rgb("), "{color} gave {output}");
            }
        }
    }

    /// If this breaks, it means: channels already at the target extreme are
    /// being perturbed, which shifts the hue of saturated colors.
    #[test]
    fn test_channels_at_extreme_are_invariant() {
        for color in sweep_colors() {
            let solution = ContrastOptions::from_color(color).solve();
            let extreme = match solution.direction {
                Direction::TowardWhite => 255,
                Direction::TowardBlack => 0,
            };
            for (input, output) in color.to_bytes().into_iter().zip(solution.color.to_bytes()) {
                if input == extreme {
                    assert_eq!(output, extreme, "{color} -> {}", solution.color);
                }
            }
        }
    }

    /// If this breaks, it means: the solver returns a color that does not
    /// contrast enough even though the target was reachable, or reports a
    /// ratio that is not the ratio of the returned color.
    #[test]
    fn test_reached_targets_hold_after_rounding() {
        for color in sweep_colors() {
            for level in ContrastLevel::ALL {
                let solution = ContrastOptions::from_color(color)
                    .with_level(level)
                    .solve();
                let actual = contrast_ratio(
                    relative_luminance(&solution.color),
                    relative_luminance(&color),
                );
                assert_eq!(solution.ratio, actual, "{color} at {level}");
                if solution.reached {
                    assert!(
                        actual >= level.target_ratio(),
                        "{color} at {level}: {} has ratio {actual:.3}",
                        solution.color
                    );
                }
            }
        }
    }

    /// If this breaks, it means: blue-heavy dark colors, whose unrounded mix
    /// just clears the target, come back a hair short of it.
    #[test]
    fn test_reached_targets_hold_for_dark_blues() {
        for b in (0..=255u8).step_by(5) {
            for g in (0..=20u8).step_by(2) {
                let color = Color::rgb(0, g, b);
                for level in ContrastLevel::ALL {
                    let solution = ContrastOptions::from_color(color)
                        .with_level(level)
                        .solve();
                    if solution.reached {
                        let actual = contrast_ratio(
                            relative_luminance(&solution.color),
                            relative_luminance(&color),
                        );
                        assert!(
                            actual >= level.target_ratio(),
                            "{color} at {level}: {} has ratio {actual:.5}",
                            solution.color
                        );
                    }
                }
            }
        }
    }

    /// If this breaks, it means: a stricter level produced a weaker result.
    #[test]
    fn test_default_level_is_at_least_as_strong_as_aa() {
        for color in sweep_colors() {
            let strict = ContrastOptions::from_color(color).solve();
            let aa = ContrastOptions::from_color(color)
                .with_level(ContrastLevel::AA)
                .solve();
            assert!(strict.mix >= aa.mix, "{color}");
            assert!(strict.ratio >= aa.ratio, "{color}");
        }
    }

    /// If this breaks, it means: translucent inputs can produce an invisible
    /// or fully opaque result, or the alpha ordering is not preserved.
    #[test]
    fn test_alpha_floor_bounds() {
        let mut previous = None;
        for i in 0..100 {
            let a = i as f64 / 100.0;
            let output = ContrastOptions::from_color(Color::rgba(40, 40, 40, a)).resolve();
            assert!(output.a >= ALPHA_FLOOR && output.a < 1.0, "a={a} -> {}", output.a);
            if let Some(previous) = previous {
                assert!(output.a > previous, "alpha not increasing at a={a}");
            }
            previous = Some(output.a);
        }
    }

    /// If this breaks, it means: a translucent input whose lifted alpha
    /// rounds to 1 is written as an opaque `rgb(...)`.
    #[test]
    fn test_translucent_inputs_keep_alpha_in_output() {
        for input in [
            "rgba(0, 0, 0, 0)",
            "rgba(0, 0, 0, 0.5)",
            "rgba(0, 0, 0, 0.9999)",
            "rgba(0, 0, 0, 0.99995)",
            "rgba(0, 0, 0, 0.999999)",
        ] {
            let output = contrasting_color(input, None).unwrap();
            assert!(output.starts_with("rgba("), "{input} gave {output}");
            let parsed: Color = output.parse().unwrap();
            assert!(parsed.a >= ALPHA_FLOOR && parsed.a < 1.0, "{input} gave {output}");
        }
        assert_eq!(
            contrasting_color("rgba(0, 0, 0, 0.99995)", None).unwrap(),
            "rgba(151,151,151,0.9999)"
        );
    }
}
