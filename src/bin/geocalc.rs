//! geocalc: Geodetic computations on the GRS80 ellipsoid, either through
//! an interactive menu, or one at a time from the command line.
use anyhow::ensure;
use clap::{Parser, Subcommand};
use geocalc::input;
use geocalc::math::angular::{dd_to_dms, dms_to_dd};
use geocalc::menu::Menu;
use geocalc::prelude::*;
use geocalc::utm;
use log::{debug, trace};
use std::io;

#[derive(Parser, Debug)]
#[clap(name = "geocalc")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Do not clear the screen between menu operations
    #[clap(long)]
    no_clear: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Run a single computation instead of the interactive menu
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Degrees, minutes, seconds to decimal degrees
    DmsToDd {
        /// Whole degrees, sign included
        #[clap(allow_hyphen_values = true)]
        degrees: i32,
        minutes: u32,
        seconds: f64,
    },

    /// Decimal degrees to degrees, minutes, seconds
    DdToDms {
        #[clap(allow_hyphen_values = true)]
        degrees: f64,
    },

    /// Normal gravity on the GRS80 ellipsoid
    Gravity {
        /// Latitude, in decimal degrees
        latitude: f64,
    },

    /// Geodetic (latitude, longitude, height) to geocentric cartesian
    Cart {
        #[clap(allow_hyphen_values = true)]
        latitude: f64,
        #[clap(allow_hyphen_values = true)]
        longitude: f64,
        #[clap(allow_hyphen_values = true)]
        height: f64,
    },

    /// Geocentric cartesian to geodetic (latitude, longitude, height)
    Geo {
        #[clap(allow_hyphen_values = true)]
        x: f64,
        #[clap(allow_hyphen_values = true)]
        y: f64,
        #[clap(allow_hyphen_values = true)]
        z: f64,
    },

    /// UTM scale error at a given easting
    Utm {
        /// Easting, in meters (false easting 500 000 m)
        easting: f64,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("{:#?}", options);

    let Some(command) = options.command else {
        debug!("Entering interactive mode");
        let stdin = io::stdin().lock();
        let prompter = input::Prompter::new(stdin, io::stdout());
        let mut menu = Menu::new(prompter, io::stdout()).clear_screen(!options.no_clear);
        menu.run()?;
        return Ok(());
    };

    println!("{}", compute(&command)?);
    Ok(())
}

/// Carry out a single command, with the same bounds as the menu
fn compute(command: &Command) -> Result<String, anyhow::Error> {
    let report = match *command {
        Command::DmsToDd {
            degrees,
            minutes,
            seconds,
        } => {
            input::DMS_DEGREES.check(f64::from(degrees))?;
            input::DMS_MINUTES.check(f64::from(minutes))?;
            input::DMS_SECONDS.check(seconds)?;
            format!("{:.6}", dms_to_dd(degrees, minutes, seconds))
        }

        Command::DdToDms { degrees } => {
            input::DECIMAL_DEGREES.check(degrees)?;
            dd_to_dms(degrees).to_string()
        }

        Command::Gravity { latitude } => {
            input::GRAVITY_LATITUDE.check(latitude)?;
            GRS80.normal_gravity(latitude).to_string()
        }

        Command::Cart {
            latitude,
            longitude,
            height,
        } => {
            input::LATITUDE.check(latitude)?;
            input::LONGITUDE.check(longitude)?;
            ensure!(height.is_finite(), "height must be a finite number");
            GRS80
                .cartesian(&Geodetic::new(latitude, longitude, height))
                .to_string()
        }

        Command::Geo { x, y, z } => {
            ensure!(
                [x, y, z].iter().all(|c| c.is_finite()),
                "coordinates must be finite numbers"
            );
            let solution = GRS80.geographic(&Cartesian::new(x, y, z))?;
            format!(
                "Iterations completed: {}\n{}",
                solution.iterations, solution.coordinate
            )
        }

        Command::Utm { easting } => {
            input::EASTING.check(easting)?;
            utm::scale_error(easting).to_string()
        }
    };
    Ok(report)
}
