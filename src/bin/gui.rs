use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use mandelbrot_explorer::{
    MandelbrotConfig, PixelsPresenterFactory, RunGuiCommand, TracingEventSink,
};

/// Interactive Mandelbrot explorer
#[derive(Parser, Debug)]
#[command(name = "gui")]
struct Cli {
    /// JSON config file (missing fields use defaults)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_explorer::init_logging();

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => MandelbrotConfig::from_json_file(path)?,
        None => MandelbrotConfig::default(),
    };

    let presenter_factory = PixelsPresenterFactory::new();
    let command = RunGuiCommand::new(presenter_factory, config, Arc::new(TracingEventSink));

    command.execute()?;

    Ok(())
}
