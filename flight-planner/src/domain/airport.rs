//! Airport code types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code {code:?}: {reason}")]
pub struct InvalidAirportCode {
    code: String,
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction, so the search can
/// compare airports by value without re-checking them.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let bcn = AirportCode::parse("BCN").unwrap();
/// assert_eq!(bcn.as_str(), "BCN");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("bcn").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("BC").is_err());
/// assert!(AirportCode::parse("BCNX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let invalid = |reason| InvalidAirportCode {
            code: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return Err(invalid("must be exactly 3 characters"));
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(invalid("must be uppercase ASCII letters A-Z"));
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse user input, ignoring surrounding whitespace and letter case.
    ///
    /// ```
    /// use flight_planner::domain::AirportCode;
    ///
    /// assert_eq!(AirportCode::parse_normalized(" bcn ").unwrap().as_str(), "BCN");
    /// assert!(AirportCode::parse_normalized("b1n").is_err());
    /// ```
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl FromStr for AirportCode {
    type Err = InvalidAirportCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
