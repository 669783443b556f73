use std::fmt;

/// Geocentric cartesian coordinates, in meters
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Cartesian {
        Cartesian { x, y, z }
    }

    /// The perpendicular distance from the point to the Z-axis
    #[must_use]
    pub fn axis_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    #[must_use]
    pub fn hypot3(&self, other: &Cartesian) -> f64 {
        (self.x - other.x)
            .hypot(self.y - other.y)
            .hypot(self.z - other.z)
    }
}

/// Rounded to the millimeter, one coordinate per line
impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X = {:.3}\nY = {:.3}\nZ = {:.3}", self.x, self.y, self.z)
    }
}
