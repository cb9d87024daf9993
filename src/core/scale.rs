use crate::core::constants::{TOTAL_BITS, VOXEL_SIZE_M};
use crate::core::identifier::UVoxId;
use crate::core::tolerance::check_sig_chars;
use crate::util::error::UVoxError;
use serde::Serialize;

/// Physical size represented by the bits an identifier leaves unused.
///
/// `meters = 1e-6 * 2^unused_bits`, with `label` a human readable form such
/// as `~2.10 m resolution`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub unused_bits: usize,
    pub meters: f64,
    pub label: String,
}

impl Resolution {
    pub fn from_unused_bits(unused_bits: usize) -> Self {
        let meters = VOXEL_SIZE_M * 2f64.powi(unused_bits as i32);
        Self {
            unused_bits,
            meters,
            label: format!("~{} resolution", format_length(meters)),
        }
    }

    /// Resolution implied by a precision alone, independent of any value.
    ///
    /// # Example
    /// ```
    /// use uvoxid::Resolution;
    ///
    /// # fn main() -> Result<(), uvoxid::UVoxError> {
    /// let full = Resolution::from_precision(38)?;
    /// assert_eq!(full.unused_bits, 2);
    /// assert!(full.label.contains("µm"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`UVoxError::Range`] - `sig_chars` is above 38
    pub fn from_precision(sig_chars: usize) -> Result<Self, UVoxError> {
        let keep_bits = check_sig_chars(sig_chars)?;
        Ok(Self::from_unused_bits(TOTAL_BITS - keep_bits))
    }

    /// Resolution derived from the bit length of the value itself.
    ///
    /// Values with many leading zero bits (near the origin) report a coarser
    /// resolution than their precision warrants. Kept for consumers that
    /// expect this reading; prefer [`Resolution::from_precision`].
    pub fn from_value(id: &UVoxId) -> Self {
        Self::from_unused_bits(TOTAL_BITS - id.bit_length())
    }
}

/// Formats a length in meters with the coarsest unit it is at least 1 of.
pub fn format_length(meters: f64) -> String {
    if meters >= 1_000.0 {
        format!("{:.2} km", meters / 1_000.0)
    } else if meters >= 1.0 {
        format!("{:.2} m", meters)
    } else if meters >= 0.01 {
        format!("{:.2} cm", meters * 100.0)
    } else if meters >= 0.001 {
        format!("{:.2} mm", meters * 1_000.0)
    } else if meters >= 1e-6 {
        format!("{:.2} µm", meters * 1e6)
    } else if meters >= 1e-9 {
        format!("{:.2} nm", meters * 1e9)
    } else {
        format!("{:.2e} m", meters)
    }
}

/// Parses any textual identifier and reports its value-derived resolution.
///
/// The text must be a complete identifier. Dropping trailing symbols does not
/// coarsen it; use [`Resolution::from_precision`] to ask about fewer symbols.
///
/// # Errors
///
/// Whatever [`UVoxId::from_str`](std::str::FromStr) reports for the text.
pub fn uvoxid_scale(text: &str) -> Result<Resolution, UVoxError> {
    let id: UVoxId = text.parse()?;
    Ok(Resolution::from_value(&id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::EARTH_RADIUS_UM;
    use crate::core::formats::uvoxid_to_base32;
    use crate::core::identifier::encode_uvoxid;

    #[test]
    fn test_precision_resolution() -> Result<(), UVoxError> {
        let full = Resolution::from_precision(38)?;
        assert!((full.meters - 4e-6).abs() < 1e-12);
        assert_eq!(full.label, "~4.00 µm resolution");

        let coarse = Resolution::from_precision(30)?;
        assert_eq!(coarse.unused_bits, 42);
        assert!(coarse.meters > full.meters);
        assert!(coarse.label.ends_with("km resolution"));
        Ok(())
    }

    #[test]
    fn test_precision_out_of_range() {
        assert!(matches!(
            Resolution::from_precision(39),
            Err(UVoxError::Range { .. })
        ));
    }

    #[test]
    fn test_value_resolution_depends_on_magnitude() {
        let far = encode_uvoxid(u64::MAX, 0, 0);
        let near = encode_uvoxid(1, 0, 0);
        assert_eq!(Resolution::from_value(&far).unused_bits, 0);
        assert_eq!(Resolution::from_value(&near).unused_bits, 63);
        assert_eq!(Resolution::from_value(&UVoxId::ZERO).unused_bits, 192);
    }

    #[test]
    fn test_uvoxid_scale_from_text() -> Result<(), UVoxError> {
        let id = encode_uvoxid(EARTH_RADIUS_UM, 0, 0);
        let res = uvoxid_scale(&uvoxid_to_base32(&id))?;
        assert_eq!(res.unused_bits, TOTAL_BITS - id.bit_length());
        assert!(uvoxid_scale("").is_err());
        Ok(())
    }

    #[test]
    fn test_uvoxid_scale_rejects_shortened_text() -> Result<(), UVoxError> {
        let text = uvoxid_to_base32(&encode_uvoxid(EARTH_RADIUS_UM, 0, 0));
        let shortened = &text[..text.len() - 10];
        assert!(uvoxid_scale(shortened).is_err());

        let coarse = Resolution::from_precision(30)?;
        assert!(coarse.meters > 1e-6);
        Ok(())
    }

    #[test]
    fn test_format_length_units() {
        assert_eq!(format_length(2_500.0), "2.50 km");
        assert_eq!(format_length(3.0), "3.00 m");
        assert_eq!(format_length(0.05), "5.00 cm");
        assert_eq!(format_length(0.002), "2.00 mm");
        assert_eq!(format_length(1e-6), "1.00 µm");
        assert_eq!(format_length(5e-9), "5.00 nm");
        assert_eq!(format_length(1e-12), "1.00e-12 m");
    }
}
