/// EAN-8 check digit computation and identifier validation
use crate::error::IdentifierError;
use crate::models::Identifier;

/// Compute the check digit over the 7 payload digits.
///
/// Weights alternate 3, 1, 3, ... starting at index 0.
pub fn check_digit(payload: &[u8; 7]) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 3 } else { 1 };
            weight * d as u32
        })
        .sum();
    ((10 - (sum % 10)) % 10) as u8
}

/// Validate an identifier string.
///
/// Non-digit input is reported as [`IdentifierError::InvalidFormat`], kept
/// apart from a failing check digit.
pub fn validate(identifier: &str) -> Result<Identifier, IdentifierError> {
    let bytes = identifier.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(IdentifierError::InvalidFormat {
            input: identifier.to_string(),
        });
    }

    let mut digits = [0u8; 8];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    validate_digits(digits)
}

/// Validate already-split digits (each 0-9).
pub fn validate_digits(digits: [u8; 8]) -> Result<Identifier, IdentifierError> {
    if digits.iter().any(|&d| d > 9) {
        return Err(IdentifierError::InvalidFormat {
            input: digits.iter().map(|d| d.to_string()).collect(),
        });
    }
    let mut payload = [0u8; 7];
    payload.copy_from_slice(&digits[..7]);
    let expected = check_digit(&payload);
    if expected != digits[7] {
        return Err(IdentifierError::ChecksumMismatch {
            expected,
            found: digits[7],
        });
    }
    Ok(Identifier::from_validated(digits))
}

/// Boolean form of [`validate`].
pub fn is_valid(identifier: &str) -> bool {
    validate(identifier).is_ok()
}
