// Imports
use crate::showcase::{self, Showcase, ShowcaseOptions};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use shapecraft_compose::area::AreaStrategyType;
use shapecraft_compose::render::{RecordingContext, StdoutContext};
use tracing_subscriber::EnvFilter;

///    shapecraft{n}{n}
///    Builds shapes through factories, decorates and draws them,{n}
///    then calculates their areas with the matching strategies.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// The output format.
    #[arg(short = 'f', long, default_value_t = OutputFormat::default())]
    pub(crate) format: OutputFormat,
    /// The color applied to the rectangle.
    #[arg(long, default_value_t = ShowcaseOptions::default().rectangle_color)]
    pub(crate) rectangle_color: String,
    /// The color applied to the circle.
    #[arg(long, default_value_t = ShowcaseOptions::default().circle_color)]
    pub(crate) circle_color: String,
    /// The strategy used to calculate the area of the rectangle.{n}
    /// Defaults to the strategy matching the shape.
    #[arg(long, value_enum)]
    pub(crate) rectangle_strategy: Option<AreaStrategyType>,
    /// The strategy used to calculate the area of the circle.{n}
    /// Defaults to the strategy matching the shape.
    #[arg(long, value_enum)]
    pub(crate) circle_strategy: Option<AreaStrategyType>,
    /// Enable debug log output. Overridden by the `RUST_LOG` environment variable.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub(crate) verbose: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    /// Plain text lines.
    Text,
    /// A single json report.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Text => "text",
                Self::Json => "json",
            }
        )
    }
}

impl Cli {
    pub(crate) fn showcase_options(&self) -> ShowcaseOptions {
        ShowcaseOptions {
            rectangle_color: self.rectangle_color.clone(),
            circle_color: self.circle_color.clone(),
            rectangle_strategy: self.rectangle_strategy,
            circle_strategy: self.circle_strategy,
        }
    }
}

/// The report printed with `--format json`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct JsonReport {
    pub(crate) lines: Vec<String>,
    #[serde(flatten)]
    pub(crate) showcase: Showcase,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    let options = cli.showcase_options();

    match cli.format {
        OutputFormat::Text => {
            showcase::run_showcase(&mut StdoutContext, &options)?;
        }
        OutputFormat::Json => {
            let mut cx = RecordingContext::new();
            let showcase = showcase::run_showcase(&mut cx, &options)?;
            let report = JsonReport {
                lines: cx.into_lines(),
                showcase,
            };
            write_json_report(&mut std::io::stdout().lock(), &report)?;
        }
    }

    Ok(())
}

pub(crate) fn write_json_report(
    out: &mut impl std::io::Write,
    report: &JsonReport,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Serializing the report failed")?;
    writeln!(out).context("Writing the report failed")?;
    out.flush().context("Flushing the report failed")?;
    Ok(())
}

fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Setting up logging failed, Err: {e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["shapecraft"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);

        let options = cli.showcase_options();
        let defaults = ShowcaseOptions::default();
        assert_eq!(options.rectangle_color, defaults.rectangle_color);
        assert_eq!(options.circle_color, defaults.circle_color);
        assert_eq!(options.rectangle_strategy, None);
        assert_eq!(options.circle_strategy, None);
    }

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from([
            "shapecraft",
            "--format",
            "json",
            "--rectangle-color",
            "Verde",
            "--circle-strategy",
            "rectangle",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.rectangle_color, "Verde");
        assert_eq!(cli.circle_strategy, Some(AreaStrategyType::Rectangle));
        assert!(cli.verbose);
    }

    #[test]
    fn json_report() {
        let mut cx = RecordingContext::new();
        let showcase = showcase::run_showcase(&mut cx, &ShowcaseOptions::default()).unwrap();
        let report = JsonReport {
            lines: cx.into_lines(),
            showcase,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["lines"].as_array().map(|l| l.len()), Some(8));
        assert_eq!(json["shapes"][0]["rect"]["width"], 5.0);
        assert_eq!(json["shapes"][1]["circle"]["radius"], 7.0);
        assert_eq!(json["areas"][0]["shape"], "rectangle");
        assert_eq!(json["areas"][0]["area"], 50.0);
        assert_eq!(json["areas"][1]["strategy"], "circle");
    }

    #[derive(Debug)]
    struct ClosedOutput;

    impl std::io::Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn json_report_write_errors_propagate() {
        let mut cx = RecordingContext::new();
        let showcase = showcase::run_showcase(&mut cx, &ShowcaseOptions::default()).unwrap();
        let report = JsonReport {
            lines: cx.into_lines(),
            showcase,
        };

        assert!(write_json_report(&mut ClosedOutput, &report).is_err());

        let mut buf = Vec::new();
        write_json_report(&mut buf, &report).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["areas"][0]["area"], 50.0);
    }
}
