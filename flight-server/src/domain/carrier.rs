//! Airline (carrier) code type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid carrier code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid carrier code: {reason}")]
pub struct InvalidCarrierCode {
    reason: &'static str,
}

/// A valid 2-character IATA airline designator.
///
/// Designators are two uppercase ASCII letters or digits, e.g. "AI" for
/// Air India, "6E" for IndiGo or "G8" for Go First.
///
/// # Examples
///
/// ```
/// use flight_server::domain::CarrierCode;
///
/// let indigo = CarrierCode::parse("6E").unwrap();
/// assert_eq!(indigo.as_str(), "6E");
///
/// assert!(CarrierCode::parse("ai").is_err());
/// assert!(CarrierCode::parse("A").is_err());
/// assert!(CarrierCode::parse("AIC").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarrierCode([u8; 2]);

impl CarrierCode {
    /// Parse a carrier code from a string.
    ///
    /// The input must be exactly 2 characters, each an uppercase ASCII
    /// letter or an ASCII digit.
    pub fn parse(s: &str) -> Result<Self, InvalidCarrierCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCarrierCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidCarrierCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(CarrierCode([bytes[0], bytes[1]]))
    }

    /// Parse after trimming and uppercasing.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCarrierCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the carrier code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Debug for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarrierCode({})", self.as_str())
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CarrierCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
