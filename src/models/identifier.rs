use crate::error::IdentifierError;
use crate::symbology::checksum;
use std::fmt;
use std::str::FromStr;

/// A validated EAN-8 identifier: 7 payload digits plus the check digit
///
/// Only obtainable through [`checksum::validate`] (or [`FromStr`]), so a
/// value of this type always satisfies the check digit equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    digits: [u8; 8],
    text: String,
}

impl Identifier {
    pub(crate) fn from_validated(digits: [u8; 8]) -> Self {
        let text = digits.iter().map(|&d| char::from(b'0' + d)).collect();
        Self { digits, text }
    }

    /// Digit values (0-9), check digit last
    pub fn digits(&self) -> &[u8; 8] {
        &self.digits
    }

    /// The 7 payload digits
    pub fn payload(&self) -> &[u8] {
        &self.digits[..7]
    }

    /// The check digit
    pub fn check_digit(&self) -> u8 {
        self.digits[7]
    }

    /// Identifier as an 8 character string
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        checksum::validate(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
