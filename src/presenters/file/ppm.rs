use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Binary PPM (P6) writer. Missing parent directories are created.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn format_name(&self) -> &'static str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        write_ppm(buffer, &mut file)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
    let grid = buffer.grid();

    // P6: binary RGB, then width, height and max colour value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", grid.width(), grid.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_grid::PixelGrid;
    use crate::core::data::point::Point;

    #[test]
    fn test_write_ppm_header_and_body() {
        let mut buffer = PixelBuffer::new(PixelGrid::new(2, 1).unwrap());
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 1, 2, 3]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("ppm_presenter_test_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(PixelGrid::new(3, 2).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = fs::read(&path).unwrap();
        fs::remove_dir_all(&dir).unwrap();
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);
    }
}
