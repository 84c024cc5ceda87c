use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use mandelbrot_explorer::controllers::ports::file_presenter::FilePresenterPort;
use mandelbrot_explorer::{
    MandelbrotConfig, PpmFilePresenter, ReplayController, ResolutionTier, SnapshotController,
    TracingEventSink, load_script,
};

const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

/// Headless Mandelbrot renderer
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Render and replay Mandelbrot explorer sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON config file (missing fields use defaults)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the initial view to a PPM file
    Render {
        /// Resolution tier to render
        #[arg(long, value_enum, default_value_t = TierArg::Full)]
        tier: TierArg,
        /// Output file
        #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Drive the explorer with a JSON script and save the last frame
    Replay {
        /// Replay script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
        /// Output file
        #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum TierArg {
    Preview,
    Full,
}

impl From<TierArg> for ResolutionTier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Preview => ResolutionTier::Preview,
            TierArg::Full => ResolutionTier::Full,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<MandelbrotConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(MandelbrotConfig::from_json_file(path)?),
        None => Ok(MandelbrotConfig::default()),
    }
}

fn render(
    config: MandelbrotConfig,
    tier: ResolutionTier,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = SnapshotController::new(PpmFilePresenter::new(), config);

    controller.generate(tier)?;
    controller.write(output)?;

    Ok(())
}

fn replay(
    config: MandelbrotConfig,
    script: &Path,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let steps = load_script(script)?;
    let controller = ReplayController::new(config, Arc::new(TracingEventSink));
    let outcome = controller.run(&steps)?;

    match outcome.last_frame {
        Some(frame) => {
            let presenter = PpmFilePresenter::new();
            presenter.present(&frame.pixel_buffer, output)?;
            tracing::info!(
                path = %output.display(),
                tier = %frame.tier,
                generation = frame.generation,
                "saved last frame"
            );
        }
        None => tracing::warn!("replay presented no frames, nothing saved"),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_explorer::init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Render { tier, output }) => render(config, tier.into(), &output),
        Some(Command::Replay { script, output }) => replay(config, &script, &output),
        None => render(config, ResolutionTier::Full, Path::new(DEFAULT_OUTPUT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["mandelbrot_explorer"]).unwrap();

        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_render_defaults_to_full_tier() {
        let cli = Cli::try_parse_from(["mandelbrot_explorer", "render"]).unwrap();

        match cli.command {
            Some(Command::Render { tier, output }) => {
                assert_eq!(tier, TierArg::Full);
                assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mandelbrot_explorer",
            "replay",
            "session.json",
            "--config",
            "explorer.json",
            "--output",
            "out.ppm",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("explorer.json")));
        match cli.command {
            Some(Command::Replay { script, output }) => {
                assert_eq!(script, PathBuf::from("session.json"));
                assert_eq!(output, PathBuf::from("out.ppm"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_preview_tier_arg() {
        let cli =
            Cli::try_parse_from(["mandelbrot_explorer", "render", "--tier", "preview"]).unwrap();

        assert!(matches!(
            cli.command,
            Some(Command::Render {
                tier: TierArg::Preview,
                ..
            })
        ));
        assert_eq!(ResolutionTier::from(TierArg::Preview), ResolutionTier::Preview);
    }

    #[test]
    fn test_render_writes_ppm() {
        let path = std::env::temp_dir().join(format!(
            "mandelbrot_explorer_main_{}.ppm",
            std::process::id()
        ));
        let config = MandelbrotConfig {
            render_width: 20,
            render_height: 15,
            preview_width: 10,
            preview_height: 5,
            ..MandelbrotConfig::default()
        };

        render(config, ResolutionTier::Full, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n20 15\n255\n"));
    }
}
