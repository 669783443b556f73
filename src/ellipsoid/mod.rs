//! The GRS80 ellipsoid, and the computations depending on its geometry.

use crate::coordinate::{Cartesian, Geodetic};
use crate::Error;

mod geocart;
mod gravity;

pub use geocart::GeoCart;
pub use geocart::InverseSolution;
pub use geocart::Refinement;
pub use geocart::Refinements;
pub use geocart::CONVERGENCE_TOLERANCE;
pub use geocart::MAX_ITERATIONS;
pub use gravity::Gravity;
pub use gravity::NormalGravity;

/// The Geodetic Reference System 1980 ellipsoid, with the semiminor axis and
/// the squared eccentricity as published (Moritz, 1980), rather than as
/// derived from the defining constants.
pub const GRS80: Ellipsoid = Ellipsoid {
    a: 6_378_137.0,
    b: 6_356_752.314_1,
    es: 0.006_694_380_022_9,
};

/// An ellipsoid of revolution, given by its two semiaxes and its
/// (first) squared eccentricity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
    es: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        GRS80
    }
}

// ----- The basic shape and size ----------------------------------------------------

/// The shape and size parameters, and the quantities derived from them.
pub trait EllipsoidBase {
    /// The semimajor axis, *a*
    fn semimajor_axis(&self) -> f64;

    /// The semiminor axis, *b*
    fn semiminor_axis(&self) -> f64;

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    fn eccentricity_squared(&self) -> f64;

    /// The squared aspect ratio, *b² / a²*
    #[must_use]
    fn axis_ratio_squared(&self) -> f64 {
        let a = self.semimajor_axis();
        let b = self.semiminor_axis();
        (b * b) / (a * a)
    }

    /// The radius of curvature in the prime vertical, *N*, for a latitude
    /// given in radians. Total: defined for any real argument.
    #[must_use]
    fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        let a = self.semimajor_axis();
        let b = self.semiminor_axis();
        let cosphi = latitude.cos();
        let sinphi = latitude.sin();
        a * a / (a * a * cosphi * cosphi + b * b * sinphi * sinphi).sqrt()
    }
}

impl EllipsoidBase for Ellipsoid {
    fn semimajor_axis(&self) -> f64 {
        self.a
    }

    fn semiminor_axis(&self) -> f64 {
        self.b
    }

    fn eccentricity_squared(&self) -> f64 {
        self.es
    }
}

impl GeoCart for Ellipsoid {}
impl Gravity for Ellipsoid {}

// ----- Tests ---------------------------------------------------------------------
