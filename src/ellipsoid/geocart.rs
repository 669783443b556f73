use super::*;
use log::{debug, trace, warn};

/// The iteration stops when two consecutive height estimates differ by
/// no more than this (in meters).
pub const CONVERGENCE_TOLERANCE: f64 = 1e-10;

/// Upper bound for the number of refinement steps. Ellipsoidal input
/// converges in well under 10.
pub const MAX_ITERATIONS: usize = 100;

/// The result of a cartesian-to-geographic conversion: The coordinate, and
/// the number of refinement steps needed to reach it.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct InverseSolution {
    pub coordinate: Geodetic,
    pub iterations: usize,
}

/// One state of the latitude/height fixed point iteration.
/// The latitude is in radians.
#[allow(non_snake_case)]
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Refinement {
    pub latitude: f64,
    pub N: f64,
    pub height: f64,
}

/// The (endless) sequence of refinements of latitude and height, for a
/// given cartesian coordinate. Each item is computed from its predecessor,
/// starting from the state given by [`initial()`](Refinements::initial).
///
/// Deciding when to stop is left to the consumer, cf.
/// [`GeoCart::geographic()`].
#[derive(Debug, Clone)]
pub struct Refinements<'a, E: EllipsoidBase> {
    ellps: &'a E,
    p: f64,
    z: f64,
    state: Refinement,
}

impl<'a, E: EllipsoidBase> Refinements<'a, E> {
    /// The first approximation assumes h = 0, which turns
    /// e²N/(N + h) into plain e².
    #[must_use]
    pub fn new(ellps: &'a E, cartesian: &Cartesian) -> Refinements<'a, E> {
        let p = cartesian.axis_distance();
        let z = cartesian.z;
        let es = ellps.eccentricity_squared();

        let latitude = (z / ((1.0 - es) * p)).atan();
        let N = ellps.prime_vertical_radius_of_curvature(latitude);
        let height = p / latitude.cos() - N;

        Refinements {
            ellps,
            p,
            z,
            state: Refinement {
                latitude,
                N,
                height,
            },
        }
    }

    /// The state the next refinement will be computed from
    #[must_use]
    pub fn initial(&self) -> Refinement {
        self.state
    }
}

impl<'a, E: EllipsoidBase> Iterator for Refinements<'a, E> {
    type Item = Refinement;

    #[allow(non_snake_case)]
    fn next(&mut self) -> Option<Refinement> {
        let es = self.ellps.eccentricity_squared();
        let Refinement { N, height, .. } = self.state;

        let latitude = (self.z / ((1.0 - es * (N / (N + height))) * self.p)).atan();
        let N = self.ellps.prime_vertical_radius_of_curvature(latitude);
        let height = self.p / latitude.cos() - N;

        self.state = Refinement {
            latitude,
            N,
            height,
        };
        Some(self.state)
    }
}

/// Geographic <--> Cartesian conversion
pub trait GeoCart: EllipsoidBase + Sized {
    /// Geographic to cartesian conversion. Closed form, and total: Bounds
    /// checking is the responsibility of the caller.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation
    fn cartesian(&self, geodetic: &Geodetic) -> Cartesian {
        let (phi, lam) = geodetic.to_radians();
        let h = geodetic.height;

        let N = self.prime_vertical_radius_of_curvature(phi);
        let cosphi = phi.cos();
        let sinphi = phi.sin();
        let coslam = lam.cos();
        let sinlam = lam.sin();

        let X = (N + h) * cosphi * coslam;
        let Y = (N + h) * cosphi * sinlam;
        let Z = (self.axis_ratio_squared() * N + h) * sinphi;

        Cartesian::new(X, Y, Z)
    }

    /// The latitude/height refinement sequence underlying
    /// [`geographic()`](GeoCart::geographic)
    #[must_use]
    fn refinements(&self, cartesian: &Cartesian) -> Refinements<'_, Self> {
        Refinements::new(self, cartesian)
    }

    /// Cartesian to geographic conversion, by fixed point iteration over
    /// latitude and height.
    ///
    /// Convergence is judged on the height: The iteration stops when two
    /// consecutive heights differ by at most [`CONVERGENCE_TOLERANCE`].
    /// In floating point, the fixed point may fall between representable
    /// values, making the iteration alternate between a few heights differing
    /// in the last bits. Returning to a recently visited height is therefore
    /// also accepted as convergence.
    ///
    /// Points on the Z-axis are outside the domain. They are not
    /// special-cased, and end up as [`Error::ConvergenceFailure`].
    fn geographic(&self, cartesian: &Cartesian) -> Result<InverseSolution, Error> {
        // The longitude is straightforward: Plain geometry in the equatorial plane
        let longitude = cartesian.y.atan2(cartesian.x).to_degrees();

        let steps = self.refinements(cartesian);
        let mut previous = steps.initial();
        // The heights preceding `previous`, most recent first
        let mut visited = [f64::NAN; 3];
        let mut correction = f64::NAN;

        for (i, step) in steps.take(MAX_ITERATIONS).enumerate() {
            let iterations = i + 1;
            correction = (step.height - previous.height).abs();
            trace!(
                "Refinement {iterations}: φ = {:.12}°, h = {:.10} m, Δh = {correction:e} m",
                step.latitude.to_degrees(),
                step.height
            );

            let converged = correction <= CONVERGENCE_TOLERANCE;
            let cycling = visited.contains(&step.height);
            if converged || cycling {
                if cycling && !converged {
                    debug!("Height estimate cycling at Δh = {correction:e} m - accepted");
                }
                debug!("Converged after {iterations} iterations");
                let coordinate = Geodetic::new(step.latitude.to_degrees(), longitude, step.height);
                return Ok(InverseSolution {
                    coordinate,
                    iterations,
                });
            }

            visited.rotate_right(1);
            visited[0] = previous.height;
            previous = step;
        }

        warn!("No convergence for {cartesian:?} after {MAX_ITERATIONS} iterations");
        Err(Error::ConvergenceFailure {
            iterations: MAX_ITERATIONS,
            correction,
        })
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn equator() {
        let cart = GRS80.cartesian(&Geodetic::new(0., 0., 0.));
        assert_eq!(cart, Cartesian::new(6_378_137.0, 0.0, 0.0));
        assert_eq!(cart.to_string(), "X = 6378137.000\nY = 0.000\nZ = 0.000");

        let cart = GRS80.cartesian(&Geodetic::new(0., 90., 10.));
        assert_float_eq!(cart.x, 0.0, abs <= 1e-6);
        assert_float_eq!(cart.y, 6_378_147.0, abs <= 1e-6);
        assert_eq!(cart.z, 0.0);
    }

    #[test]
    fn near_the_pole() {
        let cart = GRS80.cartesian(&Geodetic::new(89.9999, 0., 0.));
        assert!(cart.x > 0.0 && cart.x < 12.0);
        assert_eq!(cart.y, 0.0);
        assert_float_eq!(cart.z, 6_356_752.3141, abs <= 1e-3);

        let cart = GRS80.cartesian(&Geodetic::new(-89.9999, 45., 0.));
        assert!(cart.axis_distance() < 12.0);
        assert_float_eq!(cart.z, -6_356_752.3141, abs <= 1e-3);
    }

    #[test]
    fn geo_to_cart() {
        let cart = GRS80.cartesian(&Geodetic::new(55., 12., 100.));
        assert_float_eq!(cart.x, 3_586_525.761, abs <= 1e-3);
        assert_float_eq!(cart.y, 762_339.584, abs <= 1e-3);
        assert_float_eq!(cart.z, 5_201_465.438, abs <= 1e-3);
    }

    #[test]
    fn cart_to_geo() -> Result<(), Error> {
        let cart = Cartesian::new(3_586_525.761, 762_339.584, 5_201_465.438);
        let solution = GRS80.geographic(&cart)?;
        let geo = solution.coordinate;
        assert_float_eq!(geo.latitude, 55.0, abs <= 1e-7);
        assert_float_eq!(geo.longitude, 12.0, abs <= 1e-7);
        assert_float_eq!(geo.height, 100.0, abs <= 1e-3);
        assert!(solution.iterations >= 1 && solution.iterations < 10);

        // On the Equator, the first approximation is exact
        let solution = GRS80.geographic(&Cartesian::new(0., -6_378_237., 0.))?;
        assert_eq!(solution.coordinate.latitude, 0.0);
        assert_eq!(solution.coordinate.longitude, -90.0);
        assert_float_eq!(solution.coordinate.height, 100.0, abs <= 1e-9);
        assert_eq!(solution.iterations, 1);
        Ok(())
    }

    #[test]
    fn roundtrip() -> Result<(), Error> {
        let geo = [
            Geodetic::new(85., 0., 100000.),
            Geodetic::new(55., 10., -1000.),
            Geodetic::new(25., 20., 0.),
            Geodetic::new(0., -20., 0.),
            Geodetic::new(-25., 179.5, 10.),
            Geodetic::new(-89., -180., 10.),
            Geodetic::new(89., 180., 5000.),
        ];

        for g in geo {
            let back = GRS80.geographic(&GRS80.cartesian(&g))?;
            assert_float_eq!(back.coordinate.latitude, g.latitude, abs <= 1e-6);
            assert_float_eq!(back.coordinate.longitude, g.longitude, abs <= 1e-6);
            assert_float_eq!(back.coordinate.height, g.height, abs <= 1e-3);
        }
        Ok(())
    }

    #[test]
    fn refinement_sequence() -> Result<(), Error> {
        let cart = GRS80.cartesian(&Geodetic::new(45., 45., 1000.));
        let steps = GRS80.refinements(&cart);
        let initial = steps.initial();

        // The first guess ignores the height, and lands within a few meters
        assert!((initial.height - 1000.).abs() < 100.);

        // The corrections shrink steadily until they vanish
        let heights: Vec<f64> = steps.take(4).map(|r| r.height).collect();
        let first = (heights[0] - initial.height).abs();
        let third = (heights[2] - heights[1]).abs();
        assert!(third < first);

        // ...and the solver reports what the sequence converges to
        let solution = GRS80.geographic(&cart)?;
        let last = GRS80
            .refinements(&cart)
            .nth(solution.iterations - 1)
            .unwrap_or_default();
        assert_eq!(last.height, solution.coordinate.height);
        assert_eq!(last.latitude.to_degrees(), solution.coordinate.latitude);
        Ok(())
    }

    #[test]
    fn points_on_the_axis() {
        for cart in [
            Cartesian::new(0., 0., 6_356_752.3141),
            Cartesian::new(0., 0., -7_000_000.),
            Cartesian::new(0., 0., 0.),
        ] {
            let result = GRS80.geographic(&cart);
            assert!(matches!(
                result,
                Err(Error::ConvergenceFailure {
                    iterations: MAX_ITERATIONS,
                    ..
                })
            ));
        }
    }
}
