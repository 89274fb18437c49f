//! rooflini CLI
//!
//! Renders the configured roofline chart to a single SVG or bitmap file.

use clap::Parser;
use rooflini::{render, report, OutputFormat, RooflineConfig, RooflineLayout, DEFAULT_OUTPUT};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rooflini")]
#[command(version, about = "Roofline chart renderer")]
struct Cli {
    /// Output file (.svg, .png, .bmp, .jpg)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> rooflini::Result<()> {
    // Fail on the extension before printing anything
    OutputFormat::from_path(&cli.output)?;

    let config = RooflineConfig::default().with_output_path(cli.output);
    let layout = RooflineLayout::compute(&config)?;
    print!("{}", report::format_summary(&layout));

    render(&config, &layout)
}
