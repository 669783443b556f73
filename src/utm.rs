//! Scale error of the Universal Transverse Mercator projection, as a function
//! of the distance from the central meridian.

use std::fmt;

/// The UTM false easting, i.e. the easting of the central meridian [m]
pub const FALSE_EASTING: f64 = 500_000.;

/// The scale error on the central meridian, i.e. k₀ - 1
const CENTRAL_SCALE_ERROR: f64 = -0.0004;

/// Growth of the scale error with the squared distance from the
/// central meridian [1/m²]
const QUADRATIC_TERM: f64 = 12.29e-15;

/// The scale error at a given easting
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct ScaleError {
    /// Easting [m]
    pub easting: f64,
    /// Scale error (dimensionless), negative inside the secant lines
    pub scale_error: f64,
}

impl ScaleError {
    /// Signed distance from the central meridian [km], east positive
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.easting - FALSE_EASTING) / 1000.
    }

    /// The scale error in parts per million
    #[must_use]
    pub fn ppm(&self) -> f64 {
        self.scale_error * 1e6
    }
}

/// Approximate UTM scale error at `easting` (in meters, with the usual
/// 500 km false easting).
#[must_use]
pub fn scale_error(easting: f64) -> ScaleError {
    let de = easting - FALSE_EASTING;
    ScaleError {
        easting,
        scale_error: CENTRAL_SCALE_ERROR + QUADRATIC_TERM * de * de,
    }
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Easting: {:.3} (m)\nDistance from the central meridian: {:.6} km\nScale error: {:.2} PPM",
            self.easting,
            self.distance(),
            self.ppm()
        )
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn central_meridian() {
        let e = scale_error(500_000.);
        assert_eq!(e.scale_error, -0.0004);
        assert_eq!(e.distance(), 0.);
        assert_float_eq!(e.ppm(), -400., abs <= 1e-9);
    }

    #[test]
    fn off_the_central_meridian() {
        let east = scale_error(600_000.);
        assert_eq!(east.distance(), 100.);
        assert_float_eq!(east.scale_error, -0.000_277_1, abs <= 1e-15);
        assert_float_eq!(east.ppm(), -277.1, abs <= 1e-9);

        // Symmetric around the central meridian
        let west = scale_error(400_000.);
        assert_eq!(west.distance(), -100.);
        assert_eq!(west.scale_error, east.scale_error);

        // Roughly 180 km out, the projection is true to scale
        assert!(scale_error(680_000.).ppm().abs() < 2.);
        assert!(scale_error(1_000_000.).scale_error > 0.);
    }

    #[test]
    fn report() {
        assert_eq!(
            scale_error(600_000.).to_string(),
            "Easting: 600000.000 (m)\nDistance from the central meridian: 100.000000 km\nScale error: -277.10 PPM"
        );
    }
}
