//! Conversions between binary, decimal and hexadecimal.
//!
//! Binary strings are written `0b` followed by binary digits and hexadecimal strings `0x`
//! followed by upper case hex digits. Values are limited to what fits in a non-negative `i32`:
//! at most 32 binary digits or 8 hex digits, and with all of them present the top bit must be
//! clear.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::converter;
//!
//! assert_eq!(converter::binary_to_decimal("0b1010").unwrap(), 10);
//! assert_eq!(converter::decimal_to_binary(10).unwrap(), "0b1010");
//! assert_eq!(converter::binary_to_hex("0b11111").unwrap(), "0x1F");
//! assert_eq!(converter::hex_to_binary("0x1F").unwrap(), "0b00011111");
//! ```

/// The longest run of binary digits accepted after `0b`.
const MAX_BINARY_DIGITS: usize = 32;

/// The longest run of hex digits accepted after `0x`.
const MAX_HEX_DIGITS: usize = 8;

/// Reasons a conversion refuses its input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Not `0b` followed by 1 to 32 binary digits that fit in an `i32`.
    #[error("malformed binary string {0:?}: expected `0b` followed by 1 to 32 binary digits no larger than 0x7FFFFFFF")]
    MalformedBinary(String),
    /// Not `0x` followed by 1 to 8 upper case hex digits that fit in an `i32`.
    #[error("malformed hexadecimal string {0:?}: expected `0x` followed by 1 to 8 hex digits no larger than 0x7FFFFFFF")]
    MalformedHex(String),
    /// Only non-negative numbers are converted.
    #[error("cannot convert negative number {0}")]
    Negative(i32),
}

/// Parses a binary string into the number it represents.
///
/// # Examples
///
/// ```
/// use ordered_tree::converter::{self, ConvertError};
///
/// assert_eq!(converter::binary_to_decimal("0b0"), Ok(0));
/// assert_eq!(converter::binary_to_decimal("0b110"), Ok(6));
/// assert_eq!(
///     converter::binary_to_decimal("110"),
///     Err(ConvertError::MalformedBinary("110".to_string()))
/// );
/// ```
pub fn binary_to_decimal(binary: &str) -> Result<i32, ConvertError> {
    let digits = binary_digits(binary)?;
    let value = digits
        .bytes()
        .fold(0, |value, digit| (value << 1) | i32::from(digit - b'0'));

    Ok(value)
}

/// Rewrites a binary string in hexadecimal. The binary digits are padded on the left to a whole
/// number of nibbles and every nibble becomes one hex digit, so leading zero nibbles survive.
pub fn binary_to_hex(binary: &str) -> Result<String, ConvertError> {
    let digits = binary_digits(binary)?;
    let padding = (4 - digits.len() % 4) % 4;
    let padded: Vec<u8> = std::iter::repeat(b'0')
        .take(padding)
        .chain(digits.bytes())
        .collect();

    let mut hex = String::with_capacity(2 + padded.len() / 4);
    hex.push_str("0x");
    for nibble in padded.chunks(4) {
        let value = nibble
            .iter()
            .fold(0, |value, digit| (value << 1) | u32::from(digit - b'0'));
        // A nibble is always a valid hex digit.
        if let Some(digit) = std::char::from_digit(value, 16) {
            hex.push(digit.to_ascii_uppercase());
        }
    }

    Ok(hex)
}

/// Writes a non-negative number as a binary string without leading zeros.
///
/// # Examples
///
/// ```
/// use ordered_tree::converter::{self, ConvertError};
///
/// assert_eq!(converter::decimal_to_binary(0).unwrap(), "0b0");
/// assert_eq!(converter::decimal_to_binary(5).unwrap(), "0b101");
/// assert_eq!(converter::decimal_to_binary(-1), Err(ConvertError::Negative(-1)));
/// ```
pub fn decimal_to_binary(decimal: i32) -> Result<String, ConvertError> {
    if decimal < 0 {
        log::debug!("rejected negative number {}", decimal);
        return Err(ConvertError::Negative(decimal));
    }

    Ok(format!("0b{:b}", decimal))
}

/// Rewrites a hexadecimal string in binary, four binary digits per hex digit.
pub fn hex_to_binary(hex: &str) -> Result<String, ConvertError> {
    let digits = hex_digits(hex)?;

    let mut binary = String::with_capacity(2 + 4 * digits.len());
    binary.push_str("0b");
    for digit in digits.chars() {
        // `hex_digits` only lets hex digits through.
        if let Some(value) = digit.to_digit(16) {
            binary.push_str(&format!("{:04b}", value));
        }
    }

    Ok(binary)
}

/// The digits of a well formed binary string.
fn binary_digits(binary: &str) -> Result<&str, ConvertError> {
    let malformed = || {
        log::debug!("rejected malformed binary string {:?}", binary);
        ConvertError::MalformedBinary(binary.to_string())
    };

    let digits = binary.strip_prefix("0b").ok_or_else(malformed)?;
    if digits.is_empty()
        || digits.len() > MAX_BINARY_DIGITS
        || !digits.bytes().all(|digit| matches!(digit, b'0' | b'1'))
    {
        return Err(malformed());
    }
    // 32 digits only fit in an `i32` when the top bit is clear.
    if digits.len() == MAX_BINARY_DIGITS && digits.starts_with('1') {
        return Err(malformed());
    }

    Ok(digits)
}

/// The digits of a well formed hexadecimal string.
fn hex_digits(hex: &str) -> Result<&str, ConvertError> {
    let malformed = || {
        log::debug!("rejected malformed hexadecimal string {:?}", hex);
        ConvertError::MalformedHex(hex.to_string())
    };

    let digits = hex.strip_prefix("0x").ok_or_else(malformed)?;
    if digits.is_empty()
        || digits.len() > MAX_HEX_DIGITS
        || !digits
            .bytes()
            .all(|digit| matches!(digit, b'0'..=b'9' | b'A'..=b'F'))
    {
        return Err(malformed());
    }
    // Eight digits only fit in an `i32` when the top bit is clear.
    if digits.len() == MAX_HEX_DIGITS && digits.as_bytes()[0] > b'7' {
        return Err(malformed());
    }

    Ok(digits)
}
