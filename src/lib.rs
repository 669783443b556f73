//! *Geodetic coordinate and gravity computations on the GRS80 ellipsoid*.
//!
//! The heart of the crate is the conversion between geodetic coordinates
//! (latitude, longitude, ellipsoidal height) and geocentric cartesian
//! coordinates, see [`GeoCart`](ellipsoid::GeoCart). Around it sit a few
//! closed form utilities: normal gravity ([`Gravity`](ellipsoid::Gravity)),
//! angle format conversion ([`math::angular`]), and the UTM scale error
//! ([`utm`]).
//!
//! The [`menu`] and [`input`] modules provide the interactive text menu
//! used by the `geocalc` program. The computational parts never depend on
//! them.
//!
//! ```
//! use geocalc::prelude::*;
//!
//! let geo = Geodetic::new(55., 12., 100.);
//! let cart = GRS80.cartesian(&geo);
//! let back = GRS80.geographic(&cart)?;
//! assert!((back.coordinate.height - 100.).abs() < 1e-3);
//! # Ok::<(), geocalc::Error>(())
//! ```

pub mod coordinate;
pub mod ellipsoid;
pub mod input;
pub mod math;
pub mod menu;
pub mod utm;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::coordinate::Cartesian;
    pub use crate::coordinate::Geodetic;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::ellipsoid::EllipsoidBase;
    pub use crate::ellipsoid::GeoCart;
    pub use crate::ellipsoid::Gravity;
    pub use crate::ellipsoid::InverseSolution;
    pub use crate::ellipsoid::NormalGravity;
    pub use crate::ellipsoid::GRS80;
    pub use crate::math::angular::Dms;
    pub use crate::utm::ScaleError;
    pub use crate::Error;
}

/// Everything that can go wrong in geocalc. The computational core only
/// ever produces `ConvergenceFailure`; the rest belongs to the input side.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("value {value} outside the range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("no convergence after {iterations} iterations (last height correction: {correction:e} m)")]
    ConvergenceFailure { iterations: usize, correction: f64 },

    #[error("end of input")]
    EndOfInput,
}
