use super::*;

// ----- Normal gravity -----------------------------------------------------

/// Normal gravity at a given latitude, in mgal and in m/s²
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct NormalGravity {
    /// Latitude, in degrees
    pub latitude: f64,
    pub mgal: f64,
}

impl NormalGravity {
    /// Gravitational acceleration, in m/s²
    #[must_use]
    pub fn acceleration(&self) -> f64 {
        self.mgal / 100_000.
    }
}

impl std::fmt::Display for NormalGravity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "On latitude φ = {:.6}° normal gravity on GRS80 ellipsoid is {:.6} mgal.\n\
             Gravitational acceleration is {:.6} m/s².",
            self.latitude,
            self.mgal,
            self.acceleration()
        )
    }
}

pub trait Gravity: EllipsoidBase {
    /// The international gravity formula 1980, for use with systems based
    /// on GRS80. Latitude in degrees, expected in [0, 90], but the series is
    /// even in the latitude, so the southern hemisphere works as well.
    #[must_use]
    fn normal_gravity(&self, latitude: f64) -> NormalGravity {
        // Equatorial normal gravity [mgal]
        const GAMMA_A: f64 = 978_032.677_15;
        const C1: f64 = 5.279_041_4e-3;
        const C2: f64 = 2.327_18e-5;
        const C3: f64 = 1.262e-7;
        const C4: f64 = 7.0e-10;

        let s = latitude.to_radians().sin().powi(2);
        let mgal = GAMMA_A * (1.0 + s * (C1 + s * (C2 + s * (C3 + s * C4))));
        NormalGravity { latitude, mgal }
    }
}

// ----- Tests ---------------------------------------------------------------------
