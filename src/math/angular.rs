use std::fmt;

/// Seconds this close to 60 are carried into the minutes
const SECONDS_CARRY_TOLERANCE: f64 = 1e-10;

/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// minutes forced to unsigned by the u32 type, but passing a negative value for
/// seconds leads to undefined behaviour.
#[must_use]
pub fn dms_to_dd(d: i32, m: u32, s: f64) -> f64 {
    let magnitude = f64::from(d.unsigned_abs()) + (f64::from(m) + s / 60.) / 60.;
    if d < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// An angle in degrees, minutes and seconds-with-decimals. The sign is
/// kept separately, so angles between -1° and 0° are representable.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Dms {
    pub negative: bool,
    pub d: u32,
    pub m: u32,
    pub s: f64,
}

impl Dms {
    #[must_use]
    pub fn new(negative: bool, d: u32, m: u32, s: f64) -> Dms {
        Dms { negative, d, m, s }
    }

    /// Decompose an angle given in degrees-with-decimals.
    ///
    /// Whole degrees and minutes are found by truncation. Seconds ending up
    /// within 1e-10 of 60 are carried into the minutes, and 60 minutes are
    /// carried into the degrees.
    #[must_use]
    pub fn from_degrees(dd: f64) -> Dms {
        let negative = dd < 0.;
        let dd = dd.abs();

        let mut d = dd.floor();
        let mut m = (60. * (dd - d)).floor();
        let mut s = 3600. * (dd - d) - m * 60.;

        if (s - 60.).abs() < SECONDS_CARRY_TOLERANCE {
            m += 1.;
            s = 0.;
        }
        if m == 60. {
            d += 1.;
            m = 0.;
        }

        // Truncation is exact: d and m are non-negative whole numbers
        Dms::new(negative, d as u32, m as u32, s)
    }

    /// The angle in degrees-with-decimals
    #[must_use]
    pub fn to_degrees(&self) -> f64 {
        let magnitude = f64::from(self.d) + (f64::from(self.m) + self.s / 60.) / 60.;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// `55° 30' 36.000000"`, with a leading minus sign for negative angles
impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        let decimals = f.precision().unwrap_or(6);
        write!(f, "{sign}{}° {}' {:.*}\"", self.d, self.m, decimals, self.s)
    }
}

/// Degrees-with-decimals to [`Dms`]
#[must_use]
pub fn dd_to_dms(dd: f64) -> Dms {
    Dms::from_degrees(dd)
}

// ----- Tests ---------------------------------------------------------------------
