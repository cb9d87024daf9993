pub mod constants;
pub mod formats;
pub mod identifier;
pub mod scale;
pub mod tolerance;

pub use constants::{
    BYTE_LEN, DISPLAY_WIDTH, EARTH_RADIUS_UM, LAT_OFFSET, LON_OFFSET, MAX_SIG_CHARS, PREFIX,
    TOTAL_BITS,
};
pub use formats::{
    Format, base32_flat_to_uvoxid, base32_to_uvoxid, base64_to_uvoxid, bin_to_uvoxid,
    decimal_to_uvoxid, hex_to_uvoxid, uvoxid_to_base32, uvoxid_to_base32_flat, uvoxid_to_base64,
    uvoxid_to_bin, uvoxid_to_decimal, uvoxid_to_hex,
};
pub use identifier::{UVoxId, decode_uvoxid, encode_uvoxid};
pub use scale::{Resolution, format_length, uvoxid_scale};
pub use tolerance::{equal_within_tolerance, snap_to_tolerance, truncate_to_tolerance};
