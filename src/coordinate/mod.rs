//! Coordinate value types. Plain data: no ellipsoid attached, and no
//! bounds checking. Angles are held in degrees, lengths in meters.

mod cartesian;
mod geodetic;

pub use cartesian::Cartesian;
pub use geodetic::Geodetic;
