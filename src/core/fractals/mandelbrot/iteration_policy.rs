use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ITERATIONS_PER_DECADE: f64 = 50.0;

/// Iteration depth as a function of zoom: `base` plus 50 per decade of zoom
/// beyond the initial zoom, capped at `cap`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationPolicy {
    base: u32,
    cap: u32,
    initial_zoom: f64,
}

impl IterationPolicy {
    pub fn new(base: u32, cap: u32, initial_zoom: f64) -> Result<Self, MandelbrotError> {
        if base == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if cap < base {
            return Err(MandelbrotError::IterationCapBelowBase { base, cap });
        }

        if !initial_zoom.is_finite() || initial_zoom <= 0.0 {
            return Err(MandelbrotError::InvalidInitialZoom { zoom: initial_zoom });
        }

        Ok(Self {
            base,
            cap,
            initial_zoom,
        })
    }

    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[must_use]
    pub fn cap(&self) -> u32 {
        self.cap
    }

    #[must_use]
    pub fn max_iterations(&self, zoom: f64) -> u32 {
        // NaN collapses to 1.0 here, infinity saturates the cast
        let ratio = (zoom / self.initial_zoom).max(1.0);
        let bonus = (ITERATIONS_PER_DECADE * ratio.log10()).floor() as u32;

        self.base.saturating_add(bonus).clamp(self.base, self.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn policy() -> IterationPolicy {
        IterationPolicy::new(150, 1000, 150.0).unwrap()
    }

    #[test]
    fn test_initial_zoom_gives_base() {
        assert_eq!(policy().max_iterations(150.0), 150);
    }

    #[test]
    fn test_zoomed_out_gives_base() {
        assert_eq!(policy().max_iterations(1.0), 150);
        assert_eq!(policy().max_iterations(1e-300), 150);
    }

    #[test]
    fn test_one_decade_adds_fifty() {
        assert_eq!(policy().max_iterations(1500.0), 200);
        assert_eq!(policy().max_iterations(15000.0), 250);
    }

    #[test]
    fn test_bonus_is_floored() {
        // log10(1.5) * 50 = 8.80...
        assert_eq!(policy().max_iterations(225.0), 158);
    }

    #[test]
    fn test_deep_zoom_hits_cap() {
        assert_eq!(policy().max_iterations(150.0e20), 1000);
        assert_eq!(policy().max_iterations(f64::MAX), 1000);
    }

    #[test]
    fn test_new_validates_parameters() {
        assert_eq!(
            IterationPolicy::new(0, 10, 1.0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
        assert_eq!(
            IterationPolicy::new(20, 10, 1.0),
            Err(MandelbrotError::IterationCapBelowBase { base: 20, cap: 10 })
        );
        assert!(IterationPolicy::new(10, 20, 0.0).is_err());
        assert!(IterationPolicy::new(10, 20, f64::NAN).is_err());
        assert!(IterationPolicy::new(10, 10, 1.0).is_ok());
    }

    proptest! {
        #[test]
        fn prop_depth_is_monotonic_and_capped(
            zoom1 in 1.0e-6f64..1.0e30,
            factor in 1.0f64..1.0e6,
        ) {
            let policy = policy();
            let zoom2 = zoom1 * factor;

            let depth1 = policy.max_iterations(zoom1);
            let depth2 = policy.max_iterations(zoom2);

            prop_assert!(depth2 >= depth1);
            prop_assert!(depth1 >= policy.base() && depth2 <= policy.cap());
        }
    }
}
