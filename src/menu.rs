//! The interactive text menu: Pick an operation by number, answer the
//! prompts, read the report. Repeat until done.

use crate::input::{self, InputSupplier};
use crate::math::angular::{dd_to_dms, dms_to_dd};
use crate::prelude::*;
use crate::utm;
use log::info;
use std::io::Write;

/// ANSI "erase display" followed by "cursor home"
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// The menu entries, numbered as presented to the user
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Selection {
    DmsToDd = 1,
    DdToDms = 2,
    NormalGravity = 3,
    GeoToCart = 4,
    CartToGeo = 5,
    UtmScaleError = 6,
    Exit = 7,
}

impl Selection {
    pub const ALL: [Selection; 7] = [
        Selection::DmsToDd,
        Selection::DdToDms,
        Selection::NormalGravity,
        Selection::GeoToCart,
        Selection::CartToGeo,
        Selection::UtmScaleError,
        Selection::Exit,
    ];

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Selection::DmsToDd => "DMS to DD.DDD",
            Selection::DdToDms => "DD.DDD to DMS",
            Selection::NormalGravity => "Normal gravity on GRS80 ellipsoid",
            Selection::GeoToCart => "Geodetic coordinates to 3D cartesian coordinates",
            Selection::CartToGeo => "3D Cartesian coordinates to geodetic coordinates",
            Selection::UtmScaleError => "UTM Scale error by easting",
            Selection::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for Selection {
    type Error = Error;

    fn try_from(number: i64) -> Result<Selection, Error> {
        Selection::ALL
            .into_iter()
            .find(|&s| s as i64 == number)
            .ok_or(Error::OutOfRange {
                value: number as f64,
                min: input::MENU.min,
                max: input::MENU.max,
            })
    }
}

/// The menu loop, reading through an [`InputSupplier`] and writing
/// reports to `output`.
#[derive(Debug)]
pub struct Menu<S: InputSupplier, W: Write> {
    input: S,
    output: W,
    clear_screen: bool,
}

impl<S: InputSupplier, W: Write> Menu<S, W> {
    pub fn new(input: S, output: W) -> Menu<S, W> {
        Menu {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Turn screen clearing between operations on or off (default: on)
    #[must_use]
    pub fn clear_screen(mut self, clear: bool) -> Menu<S, W> {
        self.clear_screen = clear;
        self
    }

    pub fn into_inner(self) -> (S, W) {
        (self.input, self.output)
    }

    /// Run until the user selects [`Selection::Exit`], or the input runs dry
    pub fn run(&mut self) -> Result<(), Error> {
        self.clear()?;
        loop {
            self.print_menu()?;
            let number = match self.input.integer("Choose operation by number: ", input::MENU) {
                Err(Error::EndOfInput) => return Ok(()),
                other => other?,
            };
            let selection = Selection::try_from(number)?;
            if selection == Selection::Exit {
                return Ok(());
            }

            self.clear()?;
            match self.dispatch(selection) {
                Err(Error::EndOfInput) => return Ok(()),
                other => other?,
            }
        }
    }

    /// Carry out a single menu selection
    pub fn dispatch(&mut self, selection: Selection) -> Result<(), Error> {
        info!("Menu selection: {}", selection.description());
        match selection {
            Selection::DmsToDd => self.dms_to_dd(),
            Selection::DdToDms => self.dd_to_dms(),
            Selection::NormalGravity => self.normal_gravity(),
            Selection::GeoToCart => self.geodetic_to_cartesian(),
            Selection::CartToGeo => self.cartesian_to_geodetic(),
            Selection::UtmScaleError => self.utm_scale_error(),
            Selection::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<(), Error> {
        for selection in Selection::ALL {
            writeln!(
                self.output,
                "{}. {}",
                selection as i64,
                selection.description()
            )?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    // ----- The operations ------------------------------------------------------

    fn dms_to_dd(&mut self) -> Result<(), Error> {
        self.say("Converts DMS (Degrees Minutes Seconds) to DD.DDD (Decimal degrees)")?;
        let d = self
            .input
            .integer("Enter DMS degrees (integer): ", input::DMS_DEGREES)?;
        let m = self
            .input
            .integer("Enter DMS minutes (integer): ", input::DMS_MINUTES)?;
        let s = self
            .input
            .real("Enter DMS seconds (real): ", input::DMS_SECONDS)?;

        // The bounds keep both within range of the narrower types
        let dd = dms_to_dd(d as i32, m as u32, s);
        self.say(&format!("\nResult in decimal degrees: {dd:.6}°\n"))
    }

    fn dd_to_dms(&mut self) -> Result<(), Error> {
        self.say("Converts DD.DDD (Decimal degrees) to DMS (Degrees Minutes Seconds)")?;
        let dd = self
            .input
            .real("Enter decimal degrees: ", input::DECIMAL_DEGREES)?;

        let dms = dd_to_dms(dd);
        let sign = if dms.negative { "-" } else { "" };
        self.say(&format!(
            "\nResult: {dms}\nDMS: {sign}{} {} {:.6}\n",
            dms.d, dms.m, dms.s
        ))
    }

    fn normal_gravity(&mut self) -> Result<(), Error> {
        self.say(
            "Calculates normal gravity (theoretical gravity) on given latitude. GRS80 ellipsoid.",
        )?;
        let latitude = self.input.real("Enter latitude φ: ", input::GRAVITY_LATITUDE)?;

        let gravity = GRS80.normal_gravity(latitude);
        self.say(&format!("\n{gravity}\n"))
    }

    fn geodetic_to_cartesian(&mut self) -> Result<(), Error> {
        self.say(
            "Converts geodetic coordinates (λ, φ, h) to 3D cartesian (X, Y, Z) coordinates.\n\
             Enter degrees as decimal degrees and height as ellipsoidal height.\n\
             North positive, East positive / GRS80 ellipsoid.\n",
        )?;
        let latitude = self
            .input
            .real("Enter latitude φ in decimal degrees: ", input::LATITUDE)?;
        let longitude = self
            .input
            .real("Enter longitude λ in decimal degrees: ", input::LONGITUDE)?;
        let height = self.input.unbounded(
            "Enter ellipsoidal height in meters (GRS80 ellipsoid): ",
            "Invalid input. Enter height in meters: ",
        )?;

        let cartesian = GRS80.cartesian(&Geodetic::new(latitude, longitude, height));
        self.say(&format!("\n{cartesian}\n"))
    }

    fn cartesian_to_geodetic(&mut self) -> Result<(), Error> {
        self.say(
            "Converts 3D cartesian (X, Y, Z) coordinates to geodetic (φ, λ, h) coordinates.\n\
             Height h is ellipsoidal height above GRS80 ellipsoid. North positive, East positive.",
        )?;
        let retry = "Invalid input. Enter coordinate in decimal meters: ";
        let x = self
            .input
            .unbounded("Enter X-coordinate in decimal meters: ", retry)?;
        let y = self
            .input
            .unbounded("Enter Y-coordinate in decimal meters: ", retry)?;
        let z = self
            .input
            .unbounded("Enter Z-coordinate in decimal meters: ", retry)?;

        match GRS80.geographic(&Cartesian::new(x, y, z)) {
            Ok(solution) => self.say(&format!(
                "\nIterations completed: {}\n{}\n",
                solution.iterations, solution.coordinate
            )),
            Err(err @ Error::ConvergenceFailure { .. }) => {
                self.say(&format!("\nNo solution: {err}\n"))
            }
            Err(err) => Err(err),
        }
    }

    fn utm_scale_error(&mut self) -> Result<(), Error> {
        self.say("Calculates UTM scale error based on distance from the central meridian.")?;
        let easting = self
            .input
            .real("Enter easting (in meters): ", input::EASTING)?;

        let error = utm::scale_error(easting);
        self.say(&format!("\n{error}\n"))
    }
}

// ----- Tests ---------------------------------------------------------------------
