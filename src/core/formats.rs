//! Textual and binary views of a [`UVoxId`].
//!
//! Every view is keyed to the canonical 24-byte big-endian block and decodes
//! back to the identical identifier.
//!
//! | View              | Shape                                             |
//! |-------------------|---------------------------------------------------|
//! | Binary            | 24 raw bytes                                      |
//! | Hex               | `16-16-16` lowercase hex digits                   |
//! | Base-32 (grouped) | `uvoxid:` + three 13-symbol groups joined by `-`  |
//! | Base-32 (flat)    | one 39-symbol string, no prefix                   |
//! | Base-64           | 32 URL-safe symbols, no padding                   |
//! | Decimal           | the 192-bit value in base 10, no leading zeros    |
//!
//! Base-32 text is produced upper case and decoded case-insensitively.

use crate::core::constants::{BYTE_LEN, DISPLAY_WIDTH, GROUP_BYTES, GROUP_SEPARATOR, PREFIX};
use crate::core::identifier::UVoxId;
use crate::util::error::UVoxError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use data_encoding::BASE32_NOPAD;
use std::fmt;
use std::str::FromStr;

const HEX_DIGITS: usize = BYTE_LEN * 2;
const HEX_GROUP: usize = GROUP_BYTES * 2;
const BASE32_GROUP: usize = (GROUP_BYTES * 8).div_ceil(5);
// Largest power of ten that fits in a u64.
const DECIMAL_CHUNK: u128 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// Returns the canonical 24-byte big-endian form.
pub fn uvoxid_to_bin(id: &UVoxId) -> [u8; BYTE_LEN] {
    id.to_be_bytes()
}

/// Reassembles an identifier from exactly 24 bytes.
///
/// # Errors
///
/// - [`UVoxError::Length`] - input is not 24 bytes long
pub fn bin_to_uvoxid(bytes: &[u8]) -> Result<UVoxId, UVoxError> {
    let block: &[u8; BYTE_LEN] = bytes.try_into().map_err(|_| UVoxError::Length {
        expected: BYTE_LEN,
        actual: bytes.len(),
    })?;
    Ok(UVoxId::from_be_bytes(block))
}

/// Renders the identifier as 48 lowercase hex digits grouped `16-16-16`.
///
/// # Example
/// ```
/// use uvoxid::{encode_uvoxid, uvoxid_to_hex};
///
/// let id = encode_uvoxid(1, 0, 0);
/// assert_eq!(
///     uvoxid_to_hex(&id),
///     "0000000000000001-00000000055d4a80-000000000aba9500"
/// );
/// ```
pub fn uvoxid_to_hex(id: &UVoxId) -> String {
    let [r, lat, lon] = id.limbs();
    format!("{:016x}-{:016x}-{:016x}", r, lat, lon)
}

/// Parses hex text back into an identifier.
///
/// Separators are stripped and an optional `0x` prefix is accepted. Shorter
/// input is read as a number and zero-extended; longer input is accepted only
/// if the excess leading digits are zero.
///
/// # Errors
///
/// - [`UVoxError::Encoding`] - empty input, a non-hex character, or a value
///   wider than 192 bits
pub fn hex_to_uvoxid(text: &str) -> Result<UVoxId, UVoxError> {
    let body = text.trim();
    let body = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .unwrap_or(body);
    let digits: String = body.chars().filter(|c| *c != GROUP_SEPARATOR).collect();

    if digits.is_empty() {
        return Err(UVoxError::Encoding("empty hex string".to_string()));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(UVoxError::Encoding(format!(
            "invalid hex character {:?}",
            bad
        )));
    }

    let digits = if digits.len() > HEX_DIGITS {
        let (excess, rest) = digits.split_at(digits.len() - HEX_DIGITS);
        if excess.bytes().any(|b| b != b'0') {
            return Err(UVoxError::Encoding(
                "hex value is wider than 192 bits".to_string(),
            ));
        }
        rest.to_string()
    } else {
        format!("{:0>width$}", digits, width = HEX_DIGITS)
    };

    let mut limbs = [0u64; 3];
    for (limb, start) in limbs.iter_mut().zip((0..HEX_DIGITS).step_by(HEX_GROUP)) {
        *limb = u64::from_str_radix(&digits[start..start + HEX_GROUP], 16)
            .map_err(|e| UVoxError::Encoding(e.to_string()))?;
    }
    Ok(UVoxId::from_limbs(limbs))
}

/// Renders the grouped Base-32 form, `uvoxid:<r>-<lat>-<lon>`.
///
/// Each 8-byte field is encoded on its own, so group boundaries line up
/// with field boundaries and two ids can be compared field by field.
///
/// # Example
/// ```
/// use uvoxid::{encode_uvoxid, uvoxid_to_base32, EARTH_RADIUS_UM};
///
/// let text = uvoxid_to_base32(&encode_uvoxid(EARTH_RADIUS_UM, 0, 0));
/// assert!(text.starts_with("uvoxid:"));
/// assert_eq!(text.matches('-').count(), 2);
/// ```
pub fn uvoxid_to_base32(id: &UVoxId) -> String {
    let bytes = id.to_be_bytes();
    let groups: Vec<String> = bytes
        .chunks_exact(GROUP_BYTES)
        .map(|chunk| BASE32_NOPAD.encode(chunk))
        .collect();
    let separator = GROUP_SEPARATOR.to_string();
    format!("{}{}", PREFIX, groups.join(separator.as_str()))
}

/// Parses the grouped Base-32 form. The `uvoxid:` prefix is optional.
///
/// # Errors
///
/// - [`UVoxError::Encoding`] - not three groups, or a symbol outside the
///   Base-32 alphabet
/// - [`UVoxError::Length`] - a group does not decode to 8 bytes
pub fn base32_to_uvoxid(text: &str) -> Result<UVoxId, UVoxError> {
    let body = text.trim();
    let body = strip_prefix_ignore_case(body, PREFIX).unwrap_or(body);

    let groups: Vec<&str> = body.split(GROUP_SEPARATOR).collect();
    if groups.len() != 3 {
        return Err(UVoxError::Encoding(format!(
            "expected 3 Base-32 groups, got {}",
            groups.len()
        )));
    }

    let mut bytes = [0u8; BYTE_LEN];
    for (chunk, group) in bytes.chunks_exact_mut(GROUP_BYTES).zip(groups) {
        let decoded = decode_base32(group)?;
        if decoded.len() != GROUP_BYTES {
            return Err(UVoxError::Length {
                expected: GROUP_BYTES,
                actual: decoded.len(),
            });
        }
        chunk.copy_from_slice(&decoded);
    }
    Ok(UVoxId::from_be_bytes(&bytes))
}

/// Renders the flat Base-32 form: the whole 24-byte block as 39 symbols.
pub fn uvoxid_to_base32_flat(id: &UVoxId) -> String {
    BASE32_NOPAD.encode(&id.to_be_bytes())
}

/// Parses the flat Base-32 form.
///
/// # Errors
///
/// - [`UVoxError::Encoding`] - a symbol outside the Base-32 alphabet
/// - [`UVoxError::Length`] - the text does not decode to 24 bytes
pub fn base32_flat_to_uvoxid(text: &str) -> Result<UVoxId, UVoxError> {
    let decoded = decode_base32(text.trim())?;
    bin_to_uvoxid(&decoded)
}

/// Renders the 24-byte block as URL-safe Base-64 without padding.
pub fn uvoxid_to_base64(id: &UVoxId) -> String {
    URL_SAFE_NO_PAD.encode(id.to_be_bytes())
}

/// Parses the URL-safe Base-64 form.
///
/// # Errors
///
/// - [`UVoxError::Encoding`] - invalid Base-64
/// - [`UVoxError::Length`] - the text does not decode to 24 bytes
pub fn base64_to_uvoxid(text: &str) -> Result<UVoxId, UVoxError> {
    let decoded = URL_SAFE_NO_PAD.decode(text.trim())?;
    bin_to_uvoxid(&decoded)
}

/// Renders the identifier as an unsigned base-10 integer.
///
/// # Example
/// ```
/// use uvoxid::{UVoxId, uvoxid_to_decimal};
///
/// assert_eq!(uvoxid_to_decimal(&UVoxId::from_limbs([0, 1, 0])), "18446744073709551616");
/// assert_eq!(uvoxid_to_decimal(&UVoxId::ZERO), "0");
/// ```
pub fn uvoxid_to_decimal(id: &UVoxId) -> String {
    let mut limbs = id.limbs();
    let mut chunks: Vec<u64> = Vec::new();
    loop {
        let mut rem: u128 = 0;
        for limb in limbs.iter_mut() {
            let current = (rem << 64) | u128::from(*limb);
            *limb = (current / DECIMAL_CHUNK) as u64;
            rem = current % DECIMAL_CHUNK;
        }
        chunks.push(rem as u64);
        if limbs == [0; 3] {
            break;
        }
    }

    let mut chunks = chunks.into_iter().rev();
    let mut out = chunks.next().map(|c| c.to_string()).unwrap_or_default();
    for chunk in chunks {
        out.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
    }
    out
}

/// Parses an unsigned base-10 integer. Leading zeros are accepted.
///
/// # Errors
///
/// - [`UVoxError::Encoding`] - empty input, a non-digit character, or a value
///   wider than 192 bits
pub fn decimal_to_uvoxid(text: &str) -> Result<UVoxId, UVoxError> {
    let digits = text.trim();
    if digits.is_empty() {
        return Err(UVoxError::Encoding("empty decimal string".to_string()));
    }

    let mut limbs = [0u64; 3];
    for c in digits.chars() {
        let digit = c.to_digit(10).ok_or_else(|| {
            UVoxError::Encoding(format!("invalid decimal character {:?}", c))
        })?;
        let mut carry = u128::from(digit);
        for limb in limbs.iter_mut().rev() {
            let current = u128::from(*limb) * 10 + carry;
            *limb = current as u64;
            carry = current >> 64;
        }
        if carry != 0 {
            return Err(UVoxError::Encoding(
                "decimal value is wider than 192 bits".to_string(),
            ));
        }
    }
    Ok(UVoxId::from_limbs(limbs))
}

fn decode_base32(text: &str) -> Result<Vec<u8>, UVoxError> {
    let upper = text.to_ascii_uppercase();
    Ok(BASE32_NOPAD.decode(upper.as_bytes())?)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

fn is_grouped_hex(text: &str) -> bool {
    let groups: Vec<&str> = text.split(GROUP_SEPARATOR).collect();
    groups.len() == 3
        && groups
            .iter()
            .all(|g| g.len() == HEX_GROUP && g.chars().all(|c| c.is_ascii_hexdigit()))
}

fn is_decimal(text: &str) -> bool {
    let all_digits = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    // 39 symbols drawn only from 2-7 is also valid flat Base-32.
    let flat_shaped =
        text.len() == DISPLAY_WIDTH && text.bytes().all(|b| (b'2'..=b'7').contains(&b));
    all_digits && !flat_shaped
}

fn is_grouped_base32(text: &str) -> bool {
    let groups: Vec<&str> = text.split(GROUP_SEPARATOR).collect();
    groups.len() == 3
        && groups.iter().all(|g| {
            g.len() == BASE32_GROUP
                && g.chars()
                    .all(|c| c.is_ascii_alphabetic() || ('2'..='7').contains(&c))
        })
}

/// Textual views an identifier can be rendered to or parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Hex,
    Base32,
    Base32Flat,
    Base64,
    Decimal,
}

impl Format {
    pub fn render(&self, id: &UVoxId) -> String {
        match self {
            Format::Hex => uvoxid_to_hex(id),
            Format::Base32 => uvoxid_to_base32(id),
            Format::Base32Flat => uvoxid_to_base32_flat(id),
            Format::Base64 => uvoxid_to_base64(id),
            Format::Decimal => uvoxid_to_decimal(id),
        }
    }

    pub fn parse(&self, text: &str) -> Result<UVoxId, UVoxError> {
        match self {
            Format::Hex => hex_to_uvoxid(text),
            Format::Base32 => base32_to_uvoxid(text),
            Format::Base32Flat => base32_flat_to_uvoxid(text),
            Format::Base64 => base64_to_uvoxid(text),
            Format::Decimal => decimal_to_uvoxid(text),
        }
    }

    /// Guesses the view a piece of text is written in.
    ///
    /// `uvoxid:` or a `13-13-13` Base-32 layout selects grouped Base-32, `0x`
    /// or a `16-16-16` layout selects hex, plain digits select decimal, and
    /// anything else is read as flat Base-32. Base-64 is never guessed.
    ///
    /// Digits `0`, `1`, `8` and `9` are outside the Base-32 alphabet. The one
    /// all-digit shape that is also valid flat Base-32, 39 symbols from `2-7`,
    /// is read as flat Base-32.
    pub fn detect(text: &str) -> Format {
        let text = text.trim();
        if strip_prefix_ignore_case(text, PREFIX).is_some() {
            Format::Base32
        } else if text.starts_with("0x") || text.starts_with("0X") || is_grouped_hex(text) {
            Format::Hex
        } else if is_decimal(text) {
            Format::Decimal
        } else if is_grouped_base32(text) {
            Format::Base32
        } else {
            Format::Base32Flat
        }
    }
}

impl FromStr for Format {
    type Err = UVoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Format::Hex),
            "base32" | "b32" | "grouped" => Ok(Format::Base32),
            "flat" | "base32-flat" | "b32flat" => Ok(Format::Base32Flat),
            "base64" | "b64" => Ok(Format::Base64),
            "decimal" | "dec" => Ok(Format::Decimal),
            other => Err(UVoxError::Decode(format!("unknown format: {}", other))),
        }
    }
}

impl fmt::Display for UVoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&uvoxid_to_base32(self))
    }
}

impl FromStr for UVoxId {
    type Err = UVoxError;

    /// Parses any textual view, detecting which one with [`Format::detect`].
    ///
    /// # Errors
    ///
    /// - [`UVoxError::Decode`] - the input is empty
    /// - whatever the detected view's parser reports otherwise
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(UVoxError::Decode("empty identifier".to_string()));
        }
        Format::detect(s).parse(s)
    }
}
