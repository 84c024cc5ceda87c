//! Scripted, headless sessions.
//!
//! A script is a JSON array of steps, each either `{"event": <InputEvent>}`
//! or `{"tick": n}`. Ticks advance a synthetic clock by one frame period, so
//! a replay is deterministic apart from render durations.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controllers::interactive::controller::{InteractiveController, LoopControl};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::input_event::InputEvent;
use crate::controllers::interactive::ports::event_sink::EventSink;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::presenters::memory::latest_frame::LatestFramePresenter;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse replay script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayStep {
    Event { event: InputEvent },
    Tick { tick: u32 },
}

pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ReplayStep>, ReplayError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&text)?)
}

#[derive(Debug)]
pub struct ReplayOutcome {
    pub steps_run: usize,
    pub ticks: u64,
    pub frames_presented: u64,
    pub exited: bool,
    pub last_frame: Option<FrameData>,
}

/// Drives an [`InteractiveController`] through a script.
pub struct ReplayController {
    config: MandelbrotConfig,
    event_sink: Arc<dyn EventSink>,
}

impl ReplayController {
    pub fn new(config: MandelbrotConfig, event_sink: Arc<dyn EventSink>) -> Self {
        Self { config, event_sink }
    }

    #[tracing::instrument(skip_all, fields(steps = steps.len()))]
    pub fn run(&self, steps: &[ReplayStep]) -> Result<ReplayOutcome, ReplayError> {
        let presenter = Arc::new(LatestFramePresenter::new());
        let mut controller = InteractiveController::new(
            self.config.clone(),
            Arc::clone(&presenter) as Arc<dyn InteractiveControllerPresenterPort>,
            Arc::clone(&self.event_sink),
        )?;

        let frame_period = Duration::from_secs(1) / self.config.frames_per_second;
        let mut now = Instant::now();
        let mut ticks = 0;
        let mut steps_run = 0;
        let mut exited = false;

        for step in steps {
            steps_run += 1;

            match step {
                ReplayStep::Event { event } => {
                    if controller.handle_event(*event) == LoopControl::Exit {
                        exited = true;
                        break;
                    }
                }
                ReplayStep::Tick { tick } => {
                    for _ in 0..*tick {
                        now += frame_period;
                        controller.tick(now);
                        ticks += 1;
                    }
                }
            }
        }

        tracing::info!(steps_run, ticks, exited, "replay finished");

        Ok(ReplayOutcome {
            steps_run,
            ticks,
            frames_presented: presenter.frames_presented(),
            exited,
            last_frame: presenter.take_frame(),
        })
    }
}
