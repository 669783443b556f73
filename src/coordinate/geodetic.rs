use std::fmt;

/// Latitude, longitude (both in degrees, north and east positive), and
/// height above the ellipsoid (in meters)
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl Geodetic {
    /// A `Geodetic` from latitude/longitude/height, with the angular input in degrees
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Geodetic {
        Geodetic {
            latitude,
            longitude,
            height,
        }
    }

    /// A `Geodetic` from latitude/longitude/height, with the angular input in radians
    #[must_use]
    pub fn raw(latitude: f64, longitude: f64, height: f64) -> Geodetic {
        Geodetic::new(latitude.to_degrees(), longitude.to_degrees(), height)
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl Geodetic {
    /// Latitude and longitude, in that order, converted to radians
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// Angles with 6 decimals, height to the millimeter. The precision
/// argument, if given, applies to the angles.
impl fmt::Display for Geodetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(6);
        write!(
            f,
            "Latitude φ: {:.*}\nLongitude λ: {:.*}\nEllipsoidal height h: {:.3}",
            decimals, self.latitude, decimals, self.longitude, self.height
        )
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let g = Geodetic::new(55., 12., 100.);
        let r = Geodetic::raw(55_f64.to_radians(), 12_f64.to_radians(), 100.);
        assert!((g.latitude - r.latitude).abs() < 1e-12);
        assert!((g.longitude - r.longitude).abs() < 1e-12);
        assert_eq!(g.height, r.height);

        let (phi, lam) = g.to_radians();
        assert_eq!(phi, 55_f64.to_radians());
        assert_eq!(lam, 12_f64.to_radians());
    }

    #[test]
    fn display() {
        let g = Geodetic::new(55.5, -12.25, 100.12345);
        assert_eq!(
            g.to_string(),
            "Latitude φ: 55.500000\nLongitude λ: -12.250000\nEllipsoidal height h: 100.123"
        );
        assert!(format!("{g:.2}").starts_with("Latitude φ: 55.50\n"));
    }
}
