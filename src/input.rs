//! Validated numeric input. The computational core assumes its input is
//! within bounds; the types here make sure it is, by re-prompting until
//! the user supplies an acceptable value.

use crate::Error;
use log::debug;
use std::io::{BufRead, Write};

/// A closed interval of acceptable values
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Bounds {
        Bounds { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// `value` itself, or [`Error::OutOfRange`]
    pub fn check(&self, value: f64) -> Result<f64, Error> {
        if self.contains(value) {
            return Ok(value);
        }
        Err(Error::OutOfRange {
            value,
            min: self.min,
            max: self.max,
        })
    }
}

// ----- Field bounds ----------------------------------------------------------

pub const MENU: Bounds = Bounds::new(1., 7.);
pub const DMS_DEGREES: Bounds = Bounds::new(-180., 180.);
pub const DMS_MINUTES: Bounds = Bounds::new(0., 60.);
pub const DMS_SECONDS: Bounds = Bounds::new(0., 60.);
pub const DECIMAL_DEGREES: Bounds = Bounds::new(-180., 180.);
pub const GRAVITY_LATITUDE: Bounds = Bounds::new(0., 90.);
pub const LATITUDE: Bounds = Bounds::new(-90., 90.);
pub const LONGITUDE: Bounds = Bounds::new(-180., 180.);
pub const EASTING: Bounds = Bounds::new(0., 1_000_000.);

/// Parse a whole number, i.e. an integer without fractional part
pub fn parse_integer(token: &str) -> Result<i64, Error> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::Syntax(format!("expected an integer, found {token:?}")))
}

/// Parse a finite real number. "inf" and "NaN" are not numbers here.
pub fn parse_real(token: &str) -> Result<f64, Error> {
    match token.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Syntax(format!("expected a number, found {token:?}"))),
    }
}

// ----- The supplier interface ------------------------------------------------

/// A source of validated numbers. Implementations must only return values
/// satisfying the stated bounds; how they get hold of them (re-prompting,
/// replaying a script, ...) is their own business.
pub trait InputSupplier {
    /// An integer in `bounds`
    fn integer(&mut self, prompt: &str, bounds: Bounds) -> Result<i64, Error>;

    /// A real number in `bounds`
    fn real(&mut self, prompt: &str, bounds: Bounds) -> Result<f64, Error>;

    /// Any finite real number. `retry` is shown when the input does not parse.
    fn unbounded(&mut self, prompt: &str, retry: &str) -> Result<f64, Error>;
}

/// Line oriented, interactive [`InputSupplier`]: Write a prompt, read a
/// line, and repeat until the first token of the line is acceptable.
#[derive(Debug)]
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Prompter<R, W> {
        Prompter { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn say(&mut self, text: &str) -> Result<(), Error> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// The first whitespace separated token of the next line (possibly
    /// empty), or [`Error::EndOfInput`]
    fn token(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }
        Ok(line.split_whitespace().next().unwrap_or("").to_string())
    }

    /// Keep reading until `accept` is happy, showing `retry` after each rejection
    fn read_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        accept: impl Fn(&str) -> Option<T>,
    ) -> Result<T, Error> {
        self.say(prompt)?;
        loop {
            let token = self.token()?;
            if let Some(value) = accept(&token) {
                return Ok(value);
            }
            debug!("Rejected input {token:?}");
            self.say(retry)?;
        }
    }
}

impl<R: BufRead, W: Write> InputSupplier for Prompter<R, W> {
    fn integer(&mut self, prompt: &str, bounds: Bounds) -> Result<i64, Error> {
        let retry = format!(
            "Invalid input. Enter a number between [{}, {}]: ",
            bounds.min, bounds.max
        );
        self.read_until(prompt, &retry, |token| {
            parse_integer(token)
                .ok()
                .filter(|&value| bounds.contains(value as f64))
        })
    }

    fn real(&mut self, prompt: &str, bounds: Bounds) -> Result<f64, Error> {
        let retry = format!(
            "Invalid input. Enter a number between [{:.1}, {:.1}]: ",
            bounds.min, bounds.max
        );
        self.read_until(prompt, &retry, |token| {
            parse_real(token).ok().filter(|&value| bounds.contains(value))
        })
    }

    fn unbounded(&mut self, prompt: &str, retry: &str) -> Result<f64, Error> {
        self.read_until(prompt, retry, |token| parse_real(token).ok())
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(script: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(script.as_bytes(), Vec::new())
    }

    fn transcript(p: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap_or_default()
    }

    #[test]
    fn bounds() {
        assert!(LATITUDE.contains(-90.));
        assert!(LATITUDE.contains(90.));
        assert!(!LATITUDE.contains(90.000001));
        assert_eq!(EASTING.check(500_000.).ok(), Some(500_000.));
        assert!(matches!(
            GRAVITY_LATITUDE.check(-1.),
            Err(Error::OutOfRange { value, min, max }) if value == -1. && min == 0. && max == 90.
        ));
    }

    #[test]
    fn parsing() {
        assert_eq!(parse_integer(" 42 ").ok(), Some(42));
        assert!(matches!(parse_integer("4.2"), Err(Error::Syntax(_))));
        assert_eq!(parse_real("-1e3").ok(), Some(-1000.));
        assert!(parse_real("inf").is_err());
        assert!(parse_real("NaN").is_err());
        assert!(parse_real("").is_err());
    }

    #[test]
    fn integer_reprompts() -> Result<(), Error> {
        let mut p = prompter("abc\n9\n\n3 and more\n");
        assert_eq!(p.integer("Choose: ", MENU)?, 3);
        let retry = "Invalid input. Enter a number between [1, 7]: ";
        assert_eq!(transcript(p), format!("Choose: {retry}{retry}{retry}"));
        Ok(())
    }

    #[test]
    fn real_reprompts() -> Result<(), Error> {
        let mut p = prompter("95\nnorth\n  55.5\n");
        assert_eq!(p.real("Latitude: ", LATITUDE)?, 55.5);
        let retry = "Invalid input. Enter a number between [-90.0, 90.0]: ";
        assert_eq!(transcript(p), format!("Latitude: {retry}{retry}"));
        Ok(())
    }

    #[test]
    fn unbounded_reprompts() -> Result<(), Error> {
        let mut p = prompter("high\n-12345678.9\n");
        assert_eq!(p.unbounded("h: ", "Again: ")?, -12_345_678.9);
        assert_eq!(transcript(p), "h: Again: ");
        Ok(())
    }

    #[test]
    fn end_of_input() {
        let mut p = prompter("x\n");
        assert!(matches!(p.real("?", LATITUDE), Err(Error::EndOfInput)));
        let mut p = prompter("");
        assert!(matches!(p.integer("?", MENU), Err(Error::EndOfInput)));
    }
}
