//! Precision truncation in Base-32 symbol units.
//!
//! Each Base-32 symbol carries 5 bits, so keeping `n` significant symbols
//! keeps the top `5 * n` bits of the 192-bit value. At most 38 symbols
//! (190 bits) are meaningful; the lowest 2 bits are always dropped by a
//! truncation.

use crate::core::constants::{
    BITS_PER_SYMBOL, DISPLAY_WIDTH, MAX_SIG_CHARS, PAD_SYMBOL, PREFIX, TOTAL_BITS,
};
use crate::core::formats::uvoxid_to_base32_flat;
use crate::core::identifier::UVoxId;
use crate::util::error::UVoxError;

pub(crate) fn check_sig_chars(sig_chars: usize) -> Result<usize, UVoxError> {
    if sig_chars > MAX_SIG_CHARS {
        return Err(UVoxError::Range {
            sig_chars,
            max: MAX_SIG_CHARS,
        });
    }
    Ok(sig_chars * BITS_PER_SYMBOL)
}

/// Zeroes everything below the top `sig_chars` Base-32 symbols.
///
/// The result is a new identifier; truncation is idempotent.
///
/// # Example
/// ```
/// use uvoxid::{encode_uvoxid, truncate_to_tolerance, EARTH_RADIUS_UM};
///
/// # fn main() -> Result<(), uvoxid::UVoxError> {
/// let id = encode_uvoxid(EARTH_RADIUS_UM, 25_760_000, -80_190_000);
/// let coarse = truncate_to_tolerance(&id, 6)?;
/// assert_eq!(truncate_to_tolerance(&coarse, 6)?, coarse);
/// assert!(truncate_to_tolerance(&id, 39).is_err());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`UVoxError::Range`] - `sig_chars` is above 38
pub fn truncate_to_tolerance(id: &UVoxId, sig_chars: usize) -> Result<UVoxId, UVoxError> {
    let keep_bits = check_sig_chars(sig_chars)?;
    debug_assert!(keep_bits <= TOTAL_BITS);
    Ok(*id & UVoxId::high_bits_mask(keep_bits))
}

/// True when both identifiers agree on their top `sig_chars` symbols.
///
/// # Errors
///
/// - [`UVoxError::Range`] - `sig_chars` is above 38
pub fn equal_within_tolerance(
    a: &UVoxId,
    b: &UVoxId,
    sig_chars: usize,
) -> Result<bool, UVoxError> {
    Ok(truncate_to_tolerance(a, sig_chars)? == truncate_to_tolerance(b, sig_chars)?)
}

/// Renders the identifier at `sig_chars` precision for display.
///
/// The first `sig_chars` symbols of the flat Base-32 form of the truncated
/// value are kept and the rest is padded with `A` up to 39 symbols, behind
/// the `uvoxid:` prefix. The padding carries no precision, so the result is
/// not a grouped identifier and is rejected by the grouped parser.
///
/// # Errors
///
/// - [`UVoxError::Range`] - `sig_chars` is above 38
pub fn snap_to_tolerance(id: &UVoxId, sig_chars: usize) -> Result<String, UVoxError> {
    let truncated = truncate_to_tolerance(id, sig_chars)?;
    let flat = uvoxid_to_base32_flat(&truncated);

    let mut snapped = String::with_capacity(PREFIX.len() + DISPLAY_WIDTH);
    snapped.push_str(PREFIX);
    snapped.push_str(&flat[..sig_chars]);
    snapped.extend(std::iter::repeat_n(PAD_SYMBOL, DISPLAY_WIDTH - sig_chars));
    Ok(snapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::EARTH_RADIUS_UM;
    use crate::core::formats::base32_to_uvoxid;
    use crate::core::identifier::encode_uvoxid;
    use proptest::prelude::*;

    fn miami() -> UVoxId {
        encode_uvoxid(EARTH_RADIUS_UM, 25_760_000, -80_190_000)
    }

    #[test]
    fn test_truncate_zero_and_max() -> Result<(), UVoxError> {
        assert_eq!(truncate_to_tolerance(&UVoxId::MAX, 0)?, UVoxId::ZERO);

        let full = truncate_to_tolerance(&UVoxId::MAX, 38)?;
        assert_eq!(full.limbs(), [u64::MAX, u64::MAX, u64::MAX << 2]);
        Ok(())
    }

    #[test]
    fn test_truncate_out_of_range() {
        assert_eq!(
            truncate_to_tolerance(&miami(), 39),
            Err(UVoxError::Range {
                sig_chars: 39,
                max: 38
            })
        );
        assert!(equal_within_tolerance(&miami(), &miami(), 100).is_err());
        assert!(snap_to_tolerance(&miami(), 39).is_err());
    }

    #[test]
    fn test_truncate_does_not_touch_input() -> Result<(), UVoxError> {
        let id = miami();
        let copy = id;
        let _ = truncate_to_tolerance(&id, 3)?;
        assert_eq!(id, copy);
        Ok(())
    }

    #[test]
    fn test_equal_within_tolerance_low_symbols() -> Result<(), UVoxError> {
        let a = encode_uvoxid(EARTH_RADIUS_UM, 25_760_000, -80_190_000);
        let b = encode_uvoxid(EARTH_RADIUS_UM, 25_760_000, -80_189_000);

        assert!(equal_within_tolerance(&a, &b, 6)?);
        assert!(!equal_within_tolerance(&a, &b, 38)?);
        Ok(())
    }

    #[test]
    fn test_nearby_points_match_at_six_symbols() -> Result<(), UVoxError> {
        let a = encode_uvoxid(EARTH_RADIUS_UM, 25_760_000, -80_190_000);
        let b = encode_uvoxid(EARTH_RADIUS_UM, 25_760_001, -80_190_001);

        assert_ne!(a, b);
        assert!(equal_within_tolerance(&a, &b, 6)?);
        assert_eq!(snap_to_tolerance(&a, 6)?, snap_to_tolerance(&b, 6)?);
        Ok(())
    }

    #[test]
    fn test_snap_shape() -> Result<(), UVoxError> {
        let id = miami();
        for sig_chars in [0, 1, 6, 20, 38] {
            let snapped = snap_to_tolerance(&id, sig_chars)?;
            assert!(snapped.starts_with("uvoxid:"));
            let body = &snapped["uvoxid:".len()..];
            assert_eq!(body.len(), 39);
            assert!(body[sig_chars..].chars().all(|c| c == 'A'));
        }
        assert_eq!(snap_to_tolerance(&id, 0)?, format!("uvoxid:{}", "A".repeat(39)));
        Ok(())
    }

    #[test]
    fn test_snapped_text_is_not_an_identifier() -> Result<(), UVoxError> {
        let snapped = snap_to_tolerance(&miami(), 6)?;
        assert!(base32_to_uvoxid(&snapped).is_err());
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]
        #[test]
        fn random_test_truncate_idempotent(limbs in any::<[u64; 3]>(), n in 0usize..=38) {
            let id = UVoxId::from_limbs(limbs);
            let once = truncate_to_tolerance(&id, n).unwrap();
            prop_assert_eq!(truncate_to_tolerance(&once, n).unwrap(), once);
        }

        #[test]
        fn random_test_truncate_monotone(limbs in any::<[u64; 3]>(), n1 in 0usize..=38, n2 in 0usize..=38) {
            let (lo, hi) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
            let id = UVoxId::from_limbs(limbs);
            let direct = truncate_to_tolerance(&id, lo).unwrap();
            let staged = truncate_to_tolerance(&truncate_to_tolerance(&id, hi).unwrap(), lo).unwrap();
            prop_assert_eq!(direct, staged);
            prop_assert!(direct <= id);
        }

        #[test]
        fn random_test_tolerance_symmetric(a in any::<[u64; 3]>(), b in any::<[u64; 3]>(), n in 0usize..=38) {
            let (a, b) = (UVoxId::from_limbs(a), UVoxId::from_limbs(b));
            prop_assert_eq!(
                equal_within_tolerance(&a, &b, n).unwrap(),
                equal_within_tolerance(&b, &a, n).unwrap()
            );
            prop_assert!(equal_within_tolerance(&a, &a, n).unwrap());
        }

        #[test]
        fn random_test_snap_matches_truncated_flat(limbs in any::<[u64; 3]>(), n in 0usize..=38) {
            let id = UVoxId::from_limbs(limbs);
            let truncated = truncate_to_tolerance(&id, n).unwrap();
            let expected = format!("uvoxid:{}", uvoxid_to_base32_flat(&truncated));
            prop_assert_eq!(snap_to_tolerance(&id, n).unwrap(), expected);
        }
    }
}
