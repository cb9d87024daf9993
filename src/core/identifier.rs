use crate::core::constants::{BYTE_LEN, FIELD_BITS, GROUP_BYTES, LAT_OFFSET, LON_OFFSET, TOTAL_BITS};
use crate::util::coord::{Coordinate, degrees_to_microdeg};
use crate::util::error::UVoxError;
use serde::{Deserialize, Serialize};
use std::ops::BitAnd;

/// A 192-bit packed identifier for a point in spherical space.
///
/// The value is stored as three big-endian 64-bit limbs, which line up
/// exactly with the three packed fields:
///
/// | Bits        | Limb | Field                                   |
/// |-------------|------|-----------------------------------------|
/// | `[128:192)` | 0    | radius in micrometers                   |
/// | `[64:128)`  | 1    | latitude microdegrees + `LAT_OFFSET`    |
/// | `[0:64)`    | 2    | longitude microdegrees + `LON_OFFSET`   |
///
/// Because the limbs are most-significant first, the derived ordering is the
/// numeric ordering of the underlying 192-bit integer.
///
/// On the wire (serde) an identifier is its grouped Base-32 string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct UVoxId([u64; 3]);

impl UVoxId {
    /// The all-zero identifier.
    pub const ZERO: UVoxId = UVoxId([0; 3]);

    /// The largest representable identifier (2^192 - 1).
    pub const MAX: UVoxId = UVoxId([u64::MAX; 3]);

    /// Encodes a `(lon, lat)` tuple or `Point` in degrees at `radius_um`.
    ///
    /// Angles are rounded to the nearest microdegree.
    pub fn from_degrees(radius_um: u64, coord: &impl Coordinate) -> Self {
        encode_uvoxid(
            radius_um,
            degrees_to_microdeg(coord.lat_deg()),
            degrees_to_microdeg(coord.lon_deg()),
        )
    }

    /// Builds an identifier from its big-endian limbs.
    pub const fn from_limbs(limbs: [u64; 3]) -> Self {
        Self(limbs)
    }

    /// Returns the big-endian limbs `[radius, latitude, longitude]`.
    pub const fn limbs(&self) -> [u64; 3] {
        self.0
    }

    /// Raw radius field, bits `[128:192)`.
    pub const fn radius_field(&self) -> u64 {
        self.0[0]
    }

    /// Raw offset latitude field, bits `[64:128)`.
    pub const fn lat_field(&self) -> u64 {
        self.0[1]
    }

    /// Raw offset longitude field, bits `[0:64)`.
    pub const fn lon_field(&self) -> u64 {
        self.0[2]
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 3]
    }

    /// Number of bits needed to represent the value (0 for zero).
    pub fn bit_length(&self) -> usize {
        for (i, limb) in self.0.iter().enumerate() {
            if *limb != 0 {
                let limb_top = TOTAL_BITS - i * FIELD_BITS;
                return limb_top - limb.leading_zeros() as usize;
            }
        }
        0
    }

    /// A mask keeping the top `keep_bits` bits of a 192-bit value.
    ///
    /// `keep_bits` above 192 is treated as 192.
    pub fn high_bits_mask(keep_bits: usize) -> Self {
        let mut limbs = [0u64; 3];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let in_limb = keep_bits.saturating_sub(i * FIELD_BITS).min(FIELD_BITS);
            *limb = match in_limb {
                0 => 0,
                n if n == FIELD_BITS => u64::MAX,
                n => u64::MAX << (FIELD_BITS - n),
            };
        }
        Self(limbs)
    }

    /// Canonical 24-byte big-endian serialization.
    pub fn to_be_bytes(&self) -> [u8; BYTE_LEN] {
        let mut out = [0u8; BYTE_LEN];
        for (chunk, limb) in out.chunks_exact_mut(GROUP_BYTES).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Reassembles an identifier from its 24-byte big-endian form.
    pub fn from_be_bytes(bytes: &[u8; BYTE_LEN]) -> Self {
        let mut limbs = [0u64; 3];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(GROUP_BYTES)) {
            let mut buf = [0u8; GROUP_BYTES];
            buf.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(buf);
        }
        Self(limbs)
    }
}

impl BitAnd for UVoxId {
    type Output = UVoxId;

    fn bitand(self, rhs: UVoxId) -> UVoxId {
        UVoxId([
            self.0[0] & rhs.0[0],
            self.0[1] & rhs.0[1],
            self.0[2] & rhs.0[2],
        ])
    }
}

impl From<[u8; BYTE_LEN]> for UVoxId {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self::from_be_bytes(&bytes)
    }
}

impl From<UVoxId> for [u8; BYTE_LEN] {
    fn from(id: UVoxId) -> Self {
        id.to_be_bytes()
    }
}

impl TryFrom<&[u8]> for UVoxId {
    type Error = UVoxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        crate::core::formats::bin_to_uvoxid(bytes)
    }
}

impl TryFrom<String> for UVoxId {
    type Error = UVoxError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UVoxId> for String {
    fn from(id: UVoxId) -> Self {
        id.to_string()
    }
}

/// Packs a spherical coordinate into a [`UVoxId`].
///
/// Latitude and longitude are shifted by fixed offsets so that negative
/// angles need no sign bit. The shift wraps modulo 2^64 and no range
/// checking is done: out-of-range angles are stored bit-for-bit and
/// decode back to the same values.
///
/// # Example
/// ```
/// use uvoxid::{encode_uvoxid, decode_uvoxid};
///
/// let id = encode_uvoxid(6_371_000_000_000, 25_760_000, -80_190_000);
/// assert_eq!(decode_uvoxid(&id), (6_371_000_000_000, 25_760_000, -80_190_000));
/// ```
pub fn encode_uvoxid(radius_um: u64, lat_microdeg: i64, lon_microdeg: i64) -> UVoxId {
    let lat_encoded = (lat_microdeg as u64).wrapping_add(LAT_OFFSET);
    let lon_encoded = (lon_microdeg as u64).wrapping_add(LON_OFFSET);
    UVoxId([radius_um, lat_encoded, lon_encoded])
}

/// Unpacks a [`UVoxId`] into `(radius_um, lat_microdeg, lon_microdeg)`.
///
/// Exact left inverse of [`encode_uvoxid`]. Never fails: every 192-bit value
/// decodes, however implausible the resulting coordinates are.
pub fn decode_uvoxid(id: &UVoxId) -> (u64, i64, i64) {
    let lat_microdeg = id.lat_field().wrapping_sub(LAT_OFFSET) as i64;
    let lon_microdeg = id.lon_field().wrapping_sub(LON_OFFSET) as i64;
    (id.radius_field(), lat_microdeg, lon_microdeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::EARTH_RADIUS_UM;
    use proptest::prelude::*;

    #[test]
    fn test_encode_decode_earth_origin() {
        let id = encode_uvoxid(EARTH_RADIUS_UM, 0, 0);
        assert_eq!(decode_uvoxid(&id), (EARTH_RADIUS_UM, 0, 0));
    }

    #[test]
    fn test_field_layout() {
        let id = encode_uvoxid(7, -90_000_000, -180_000_000);
        assert_eq!(id.limbs(), [7, 0, 0]);

        let id = encode_uvoxid(1, 90_000_000, 180_000_000);
        assert_eq!(id.radius_field(), 1);
        assert_eq!(id.lat_field(), 180_000_000);
        assert_eq!(id.lon_field(), 360_000_000);
    }

    #[test]
    fn test_from_degrees_rounds_to_microdegrees() {
        let id = UVoxId::from_degrees(EARTH_RADIUS_UM, &(-80.1900004, 25.7599996));
        assert_eq!(decode_uvoxid(&id), (EARTH_RADIUS_UM, 25_760_000, -80_190_000));

        let point = geo_types::Point::new(-80.19, 25.76);
        assert_eq!(UVoxId::from_degrees(EARTH_RADIUS_UM, &point), id);
    }

    #[test]
    fn test_latitude_order_preserved() {
        let south = encode_uvoxid(EARTH_RADIUS_UM, -45_000_000, 0);
        let north = encode_uvoxid(EARTH_RADIUS_UM, 45_000_000, 0);
        assert!(south < north);
    }

    #[test]
    fn test_out_of_range_values_are_reversible() {
        let id = encode_uvoxid(0, i64::MIN, i64::MAX);
        assert_eq!(decode_uvoxid(&id), (0, i64::MIN, i64::MAX));

        let id = encode_uvoxid(u64::MAX, 500_000_000, -999_000_000);
        assert_eq!(decode_uvoxid(&id), (u64::MAX, 500_000_000, -999_000_000));
    }

    #[test]
    fn test_any_value_decodes() {
        let (r, lat, lon) = decode_uvoxid(&UVoxId::MAX);
        assert_eq!(r, u64::MAX);
        assert_eq!(lat, (u64::MAX - LAT_OFFSET) as i64);
        assert_eq!(lon, (u64::MAX - LON_OFFSET) as i64);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(UVoxId::ZERO.bit_length(), 0);
        assert_eq!(UVoxId::MAX.bit_length(), 192);
        assert_eq!(UVoxId::from_limbs([0, 0, 1]).bit_length(), 1);
        assert_eq!(UVoxId::from_limbs([0, 1, 0]).bit_length(), 65);
        assert_eq!(UVoxId::from_limbs([1, 0, 0]).bit_length(), 129);
    }

    #[test]
    fn test_high_bits_mask() {
        assert_eq!(UVoxId::high_bits_mask(0), UVoxId::ZERO);
        assert_eq!(UVoxId::high_bits_mask(192), UVoxId::MAX);
        assert_eq!(UVoxId::high_bits_mask(300), UVoxId::MAX);
        assert_eq!(
            UVoxId::high_bits_mask(70).limbs(),
            [u64::MAX, 0xFC00_0000_0000_0000, 0]
        );
        assert_eq!(
            UVoxId::high_bits_mask(190).limbs(),
            [u64::MAX, u64::MAX, !0b11]
        );
    }

    #[test]
    fn test_bytes_big_endian() {
        let id = UVoxId::from_limbs([1, 2, 3]);
        let bytes = id.to_be_bytes();
        assert_eq!(bytes[7], 1);
        assert_eq!(bytes[15], 2);
        assert_eq!(bytes[23], 3);
        assert_eq!(UVoxId::from_be_bytes(&bytes), id);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn random_test_round_trip(r in any::<u64>(), lat in any::<i64>(), lon in any::<i64>()) {
            let id = encode_uvoxid(r, lat, lon);
            prop_assert_eq!(decode_uvoxid(&id), (r, lat, lon));
        }

        #[test]
        fn random_test_ordering_matches_bytes(a in any::<[u64; 3]>(), b in any::<[u64; 3]>()) {
            let (a, b) = (UVoxId::from_limbs(a), UVoxId::from_limbs(b));
            prop_assert_eq!(a.cmp(&b), a.to_be_bytes().cmp(&b.to_be_bytes()));
        }
    }
}
