use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::controllers::interactive::controller::render_view;
use crate::controllers::interactive::data::render_request::{RenderRequest, ResolutionTier};
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("nothing has been rendered yet")]
    NothingRendered,
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the initial view once and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self, tier: ResolutionTier) -> Result<(), SnapshotError> {
        let resolved = self.config.resolve()?;
        let (width, height) = match tier {
            ResolutionTier::Preview => (self.config.preview_width, self.config.preview_height),
            ResolutionTier::Full => (self.config.render_width, self.config.render_height),
        };
        let request = RenderRequest {
            width,
            height,
            resolution_tier: tier,
        };
        let grid = request.grid().map_err(RenderError::from)?;
        let view = resolved.initial_view;
        let max_iterations = resolved.iteration_policy.max_iterations(view.zoom());

        tracing::info!(
            %tier,
            width,
            height,
            max_iterations,
            zoom = view.zoom(),
            offset_x = view.offset_x(),
            offset_y = view.offset_y(),
            "rendering snapshot"
        );

        let start = Instant::now();
        let buffer = render_view(view, resolved.reference_grid, grid, max_iterations)?;

        tracing::info!(duration = ?start.elapsed(), "snapshot rendered");

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let buffer = self.buffer.as_ref().ok_or(SnapshotError::NothingRendered)?;
        let filepath = filepath.as_ref();

        self.presenter.present(buffer, filepath)?;
        tracing::info!(path = %filepath.display(), format = self.presenter.format_name(), "saved snapshot");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_grid::PixelGrid;
    use crate::core::data::point::Point;

    #[derive(Default)]
    struct RecordingFilePresenter {
        written: RefCell<Vec<(PathBuf, PixelGrid)>>,
    }

    impl FilePresenterPort for &RecordingFilePresenter {
        fn format_name(&self) -> &'static str {
            "test"
        }

        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.grid()));
            Ok(())
        }
    }

    fn small_config() -> MandelbrotConfig {
        MandelbrotConfig {
            render_width: 40,
            render_height: 30,
            preview_width: 8,
            preview_height: 6,
            initial_zoom: 15.0,
            ..MandelbrotConfig::default()
        }
    }

    #[test]
    fn test_generate_then_write_full_tier() {
        let recorder = RecordingFilePresenter::default();
        let mut controller = SnapshotController::new(&recorder, small_config());

        controller.generate(ResolutionTier::Full).unwrap();
        controller.write("out/test.ppm").unwrap();

        assert_eq!(
            recorder.written.borrow().as_slice(),
            &[(PathBuf::from("out/test.ppm"), PixelGrid::new(40, 30).unwrap())]
        );
    }

    #[test]
    fn test_preview_tier_uses_preview_grid() {
        let recorder = RecordingFilePresenter::default();
        let mut controller = SnapshotController::new(&recorder, small_config());

        controller.generate(ResolutionTier::Preview).unwrap();

        let buffer = controller.buffer().unwrap();
        assert_eq!(buffer.grid(), PixelGrid::new(8, 6).unwrap());
        // sample (0, 0) is c = (-2, -1.5), which escapes almost at once
        assert_eq!(
            buffer.pixel(Point { x: 0, y: 0 }),
            Ok(Colour { r: 3, g: 3, b: 252 })
        );
    }

    #[test]
    fn test_write_before_generate_fails() {
        let recorder = RecordingFilePresenter::default();
        let controller = SnapshotController::new(&recorder, small_config());

        assert!(matches!(
            controller.write("never.ppm"),
            Err(SnapshotError::NothingRendered)
        ));
    }

    #[test]
    fn test_invalid_config_fails_generate() {
        let recorder = RecordingFilePresenter::default();
        let config = MandelbrotConfig {
            zoom_factor: 0.5,
            ..small_config()
        };
        let mut controller = SnapshotController::new(&recorder, config);

        assert!(matches!(
            controller.generate(ResolutionTier::Full),
            Err(SnapshotError::Config(_))
        ));
    }
}
