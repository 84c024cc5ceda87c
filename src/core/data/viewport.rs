//! Pixel ↔ complex-plane mapping for the explorer.
//!
//! Pixel coordinates are in reference-grid units: pixel `(px, py)` sits at
//! `offset + p / zoom` on the plane. Every mutation is validated before it is
//! committed, so a rejected pan or zoom leaves the view exactly as it was.

use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be positive and finite, got {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("zoom factor must be positive and finite, got {factor}")]
    InvalidZoomFactor { factor: f64 },
    #[error("pan delta must be finite, got ({dx}, {dy})")]
    NonFiniteDelta { dx: f64, dy: f64 },
    #[error("offset must be finite, got ({offset_x}, {offset_y})")]
    NonFiniteOffset { offset_x: f64, offset_y: f64 },
    #[error("zoom anchor must be finite, got ({x}, {y})")]
    NonFiniteAnchor { x: f64, y: f64 },
}

/// A validated zoom/offset pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

impl ViewState {
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> Result<Self, ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(ViewportError::NonFiniteOffset { offset_x, offset_y });
        }

        Ok(Self {
            zoom,
            offset_x,
            offset_y,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn pixel_to_complex(&self, px: f64, py: f64) -> Complex {
        Complex {
            real: self.offset_x + px / self.zoom,
            imag: self.offset_y + py / self.zoom,
        }
    }
}

/// The explorer's live view plus the home view that `reset` returns to.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    current: ViewState,
    initial: ViewState,
}

impl Viewport {
    #[must_use]
    pub fn new(initial: ViewState) -> Self {
        Self {
            current: initial,
            initial,
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.current
    }

    #[must_use]
    pub fn initial(&self) -> ViewState {
        self.initial
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.current.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.current.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.current.offset_y
    }

    #[must_use]
    pub fn pixel_to_complex(&self, px: f64, py: f64) -> Complex {
        self.current.pixel_to_complex(px, py)
    }

    /// Moves the view by a pixel-space delta; content follows the delta.
    pub fn pan(&mut self, delta_px: f64, delta_py: f64) -> Result<(), ViewportError> {
        if !delta_px.is_finite() || !delta_py.is_finite() {
            return Err(ViewportError::NonFiniteDelta {
                dx: delta_px,
                dy: delta_py,
            });
        }

        let zoom = self.current.zoom;
        self.current = ViewState::new(
            zoom,
            self.current.offset_x - delta_px / zoom,
            self.current.offset_y - delta_py / zoom,
        )?;

        Ok(())
    }

    /// Scales the zoom by `factor` while keeping the plane point under the
    /// anchor pixel fixed. `factor > 1` zooms in.
    pub fn zoom_at(
        &mut self,
        anchor_px: f64,
        anchor_py: f64,
        factor: f64,
    ) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        if !anchor_px.is_finite() || !anchor_py.is_finite() {
            return Err(ViewportError::NonFiniteAnchor {
                x: anchor_px,
                y: anchor_py,
            });
        }

        let center = self.current.pixel_to_complex(anchor_px, anchor_py);
        let new_zoom = self.current.zoom * factor;

        self.current = ViewState::new(
            new_zoom,
            center.real - anchor_px / new_zoom,
            center.imag - anchor_py / new_zoom,
        )?;

        Ok(())
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn home() -> ViewState {
        ViewState::new(150.0, -2.0, -1.5).unwrap()
    }

    #[test]
    fn test_origin_pixel_maps_to_offset_exactly() {
        let viewport = Viewport::new(home());

        assert_eq!(viewport.pixel_to_complex(0.0, 0.0), Complex::new(-2.0, -1.5));
    }

    #[test]
    fn test_pixel_to_complex_scales_by_zoom() {
        let viewport = Viewport::new(home());

        let c = viewport.pixel_to_complex(300.0, 150.0);

        assert_eq!(c, Complex::new(0.0, -0.5));
    }

    #[test]
    fn test_pan_moves_offset_against_delta() {
        let mut viewport = Viewport::new(home());

        viewport.pan(150.0, -75.0).unwrap();

        assert_eq!(viewport.offset_x(), -3.0);
        assert_eq!(viewport.offset_y(), -1.0);
        assert_eq!(viewport.zoom(), 150.0);
    }

    #[test]
    fn test_zoom_at_keeps_anchor_fixed() {
        let mut viewport = Viewport::new(home());
        let before = viewport.pixel_to_complex(200.0, 150.0);

        viewport.zoom_at(200.0, 150.0, 1.5).unwrap();
        let after = viewport.pixel_to_complex(200.0, 150.0);

        assert_eq!(viewport.zoom(), 225.0);
        assert!((before.real - after.real).abs() < 1e-12);
        assert!((before.imag - after.imag).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_out_then_in_restores_zoom() {
        let mut viewport = Viewport::new(home());

        viewport.zoom_at(10.0, 20.0, 1.0 / 1.5).unwrap();
        viewport.zoom_at(10.0, 20.0, 1.5).unwrap();

        assert!((viewport.zoom() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_zoom_factors_are_rejected_without_mutation() {
        let mut viewport = Viewport::new(home());

        for factor in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let result = viewport.zoom_at(10.0, 10.0, factor);

            assert!(matches!(
                result,
                Err(ViewportError::InvalidZoomFactor { .. })
            ));
        }

        assert_eq!(viewport.state(), home());
    }

    #[test]
    fn test_zoom_that_underflows_is_rejected() {
        let mut viewport = Viewport::new(ViewState::new(1e-300, 0.0, 0.0).unwrap());

        let result = viewport.zoom_at(0.0, 0.0, 1e-300);

        assert_eq!(result, Err(ViewportError::InvalidZoom { zoom: 0.0 }));
        assert_eq!(viewport.zoom(), 1e-300);
    }

    #[test]
    fn test_zoom_that_overflows_is_rejected() {
        let mut viewport = Viewport::new(ViewState::new(1e300, 0.0, 0.0).unwrap());

        let result = viewport.zoom_at(0.0, 0.0, 1e10);

        assert!(matches!(result, Err(ViewportError::InvalidZoom { .. })));
        assert_eq!(viewport.zoom(), 1e300);
    }

    #[test]
    fn test_non_finite_pan_is_rejected() {
        let mut viewport = Viewport::new(home());

        assert!(viewport.pan(f64::NAN, 0.0).is_err());
        assert!(viewport.pan(0.0, f64::INFINITY).is_err());
        assert_eq!(viewport.state(), home());
    }

    #[test]
    fn test_pan_that_overflows_offset_is_rejected() {
        let mut viewport = Viewport::new(ViewState::new(1e-300, 0.0, 0.0).unwrap());

        let result = viewport.pan(1e10, 0.0);

        assert!(matches!(result, Err(ViewportError::NonFiniteOffset { .. })));
        assert_eq!(viewport.offset_x(), 0.0);
    }

    #[test]
    fn test_non_finite_anchor_is_rejected() {
        let mut viewport = Viewport::new(home());

        let result = viewport.zoom_at(f64::NAN, 0.0, 1.5);

        assert!(matches!(result, Err(ViewportError::NonFiniteAnchor { .. })));
        assert_eq!(viewport.state(), home());
    }

    #[test]
    fn test_view_state_rejects_degenerate_values() {
        assert!(ViewState::new(0.0, 0.0, 0.0).is_err());
        assert!(ViewState::new(-1.0, 0.0, 0.0).is_err());
        assert!(ViewState::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(ViewState::new(1.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_reset_restores_home_bit_for_bit() {
        let mut viewport = Viewport::new(home());
        viewport.zoom_at(123.0, 45.0, 1.5).unwrap();
        viewport.pan(-7.25, 3.5).unwrap();

        viewport.reset();

        assert_eq!(viewport.zoom().to_bits(), 150.0_f64.to_bits());
        assert_eq!(viewport.offset_x().to_bits(), (-2.0_f64).to_bits());
        assert_eq!(viewport.offset_y().to_bits(), (-1.5_f64).to_bits());
    }

    proptest! {
        #[test]
        fn prop_zoom_at_preserves_anchor(
            zoom in 1.0f64..1.0e6,
            offset_x in -10.0f64..10.0,
            offset_y in -10.0f64..10.0,
            px in -50.0f64..1000.0,
            py in -50.0f64..1000.0,
            factor in 0.05f64..20.0,
        ) {
            let mut viewport = Viewport::new(ViewState::new(zoom, offset_x, offset_y).unwrap());
            let before = viewport.pixel_to_complex(px, py);

            viewport.zoom_at(px, py, factor).unwrap();
            let after = viewport.pixel_to_complex(px, py);

            prop_assert!((before.real - after.real).abs() <= 1e-9);
            prop_assert!((before.imag - after.imag).abs() <= 1e-9);
        }

        #[test]
        fn prop_reset_is_idempotent(
            pans in proptest::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..8),
            factor in 0.1f64..10.0,
        ) {
            let mut viewport = Viewport::new(home());
            for (dx, dy) in pans {
                viewport.pan(dx, dy).unwrap();
            }
            viewport.zoom_at(200.0, 150.0, factor).unwrap();

            viewport.reset();
            let once = viewport.clone();
            viewport.reset();

            prop_assert_eq!(viewport, once);
        }
    }
}
