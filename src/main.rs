use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contrast_color::ContrastLevel;
use legible::models::AppConfig;
use legible::services::ContrastService;

#[derive(Parser)]
#[command(name = "legible")]
#[command(about = "Legible - derive contrasting foreground colors for arbitrary backgrounds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a color that stays legible on the given background
    Pick {
        /// Background color: "#rgb", "#rrggbb", "rgb(r, g, b)" or "rgba(r, g, b, a)"
        color: String,

        /// Contrast level: "default" (7:1) or "AA" (4.5:1)
        #[arg(short, long)]
        level: Option<ContrastLevel>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show how the contrasting color was found
    Inspect {
        /// Background color
        color: String,

        /// Contrast level: "default" (7:1) or "AA" (4.5:1)
        #[arg(short, long)]
        level: Option<ContrastLevel>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the WCAG contrast ratio between two colors
    Ratio {
        first: String,
        second: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Resolve every swatch of a YAML configuration file
    Palette {
        /// Config file (defaults to $LEGIBLE_CONFIG, then legible.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legible=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Pick {
            color,
            level,
            format,
        } => {
            let report = ContrastService::default().pick(&color, level)?;
            emit(format, &report, || report.output.clone())
        }
        Commands::Inspect {
            color,
            level,
            format,
        } => {
            let inspection = ContrastService::default().inspect(&color, level)?;
            emit(format, &inspection, || {
                format!(
                    "input:      {}\n\
                     level:      {} ({}:1)\n\
                     luminance:  {:.4}\n\
                     direction:  {}\n\
                     mix:        {:.2}\n\
                     ratio:      {:.2}:1{}\n\
                     output:     {}",
                    inspection.input,
                    inspection.level,
                    inspection.target_ratio,
                    inspection.luminance,
                    inspection.direction,
                    inspection.mix,
                    inspection.ratio,
                    if inspection.reached {
                        ""
                    } else {
                        " (target unreachable)"
                    },
                    inspection.output,
                )
            })
        }
        Commands::Ratio {
            first,
            second,
            format,
        } => {
            let report = ContrastService::default().ratio(&first, &second)?;
            emit(format, &report, || {
                let passes: Vec<&str> = report.passes.iter().map(|l| l.as_str()).collect();
                if passes.is_empty() {
                    format!("{:.2}:1", report.ratio)
                } else {
                    format!("{:.2}:1 (passes {})", report.ratio, passes.join(", "))
                }
            })
        }
        Commands::Palette { config, format } => {
            let path = AppConfig::resolve_path(config);
            let config = AppConfig::load(&path)?;
            let reports = ContrastService::from_config(&config).palette(&config)?;
            emit(format, &reports, || {
                reports
                    .iter()
                    .map(|r| {
                        format!(
                            "{:<16} {:<28} -> {} [{}, {:.2}:1{}]",
                            r.name,
                            r.background,
                            r.foreground,
                            r.level,
                            r.ratio,
                            if r.reached { "" } else { ", unreachable" }
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

/// Print a result as text or JSON
fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
