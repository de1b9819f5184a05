use contrast_color::{
    contrast_ratio, relative_luminance, Color, ContrastError, ContrastLevel, ContrastOptions,
};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{AppConfig, SwatchConfig};

/// Contrasting color for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickReport {
    pub input: String,
    pub level: ContrastLevel,
    pub output: String,
}

/// Full solver diagnostics for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub input: String,
    pub level: ContrastLevel,
    pub target_ratio: f64,
    /// Relative luminance of the input
    pub luminance: f64,
    /// "white" or "black"
    pub direction: &'static str,
    /// Mix fraction toward the extreme
    pub mix: f64,
    /// Contrast between the output color and the input
    pub ratio: f64,
    pub reached: bool,
    pub output: String,
}

/// Contrast between two colors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioReport {
    pub first: String,
    pub second: String,
    pub ratio: f64,
    /// Levels whose target the ratio meets
    pub passes: Vec<ContrastLevel>,
}

/// Resolved swatch from the configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchReport {
    pub name: String,
    pub background: String,
    pub level: ContrastLevel,
    pub foreground: String,
    pub ratio: f64,
    pub reached: bool,
}

/// Service resolving contrasting colors for the CLI
pub struct ContrastService {
    default_level: ContrastLevel,
}

impl ContrastService {
    pub fn new(default_level: ContrastLevel) -> Self {
        Self { default_level }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.default_level)
    }

    fn options(
        &self,
        color: &str,
        level: Option<ContrastLevel>,
    ) -> Result<ContrastOptions, ContrastError> {
        let level = level.unwrap_or(self.default_level);
        Ok(ContrastOptions::new(color)?.with_level(level))
    }

    /// Derive the contrasting color for `color`
    pub fn pick(&self, color: &str, level: Option<ContrastLevel>) -> Result<PickReport, AppError> {
        let options = self.options(color, level)?;
        Ok(PickReport {
            input: color.to_string(),
            level: options.level(),
            output: options.to_string(),
        })
    }

    /// Derive the contrasting color for `color` and report how it was found
    pub fn inspect(
        &self,
        color: &str,
        level: Option<ContrastLevel>,
    ) -> Result<Inspection, AppError> {
        let options = self.options(color, level)?;
        let solution = options.solve();
        if !solution.reached {
            tracing::warn!(
                color,
                level = %options.level(),
                ratio = solution.ratio,
                "Target contrast unreachable, using closest color"
            );
        }

        Ok(Inspection {
            input: color.to_string(),
            level: options.level(),
            target_ratio: options.level().target_ratio(),
            luminance: relative_luminance(&options.color()),
            direction: solution.direction.as_str(),
            mix: solution.mix,
            ratio: solution.ratio,
            reached: solution.reached,
            output: options.to_string(),
        })
    }

    /// Contrast ratio between two colors. Alpha is ignored.
    pub fn ratio(&self, first: &str, second: &str) -> Result<RatioReport, AppError> {
        let a = first.parse::<Color>().map_err(ContrastError::from)?;
        let b = second.parse::<Color>().map_err(ContrastError::from)?;
        let ratio = contrast_ratio(relative_luminance(&a), relative_luminance(&b));

        Ok(RatioReport {
            first: first.to_string(),
            second: second.to_string(),
            ratio,
            passes: ContrastLevel::ALL
                .into_iter()
                .filter(|level| ratio >= level.target_ratio())
                .collect(),
        })
    }

    /// Resolve every swatch of a configuration, in name order
    pub fn palette(&self, config: &AppConfig) -> Result<Vec<SwatchReport>, AppError> {
        config
            .swatches
            .iter()
            .map(|(name, swatch)| self.swatch(name, swatch, config.level_for(swatch)))
            .collect()
    }

    fn swatch(
        &self,
        name: &str,
        swatch: &SwatchConfig,
        level: ContrastLevel,
    ) -> Result<SwatchReport, AppError> {
        let options = self
            .options(swatch.color(), Some(level))
            .map_err(|source| AppError::Swatch {
                name: name.to_string(),
                source,
            })?;
        let solution = options.solve();
        let foreground = options.to_string();

        tracing::debug!(
            swatch = name,
            background = swatch.color(),
            %level,
            %foreground,
            mix = solution.mix,
            "Resolved swatch"
        );
        if !solution.reached {
            tracing::warn!(
                swatch = name,
                %level,
                ratio = solution.ratio,
                "Target contrast unreachable, using closest color"
            );
        }

        Ok(SwatchReport {
            name: name.to_string(),
            background: swatch.color().to_string(),
            level,
            foreground,
            ratio: solution.ratio,
            reached: solution.reached,
        })
    }
}

impl Default for ContrastService {
    fn default() -> Self {
        Self::new(ContrastLevel::default())
    }
}
