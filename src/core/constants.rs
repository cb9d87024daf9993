/// Total width of an identifier in bits
pub const TOTAL_BITS: usize = 192;

/// Width of each packed field (radius, latitude, longitude)
pub const FIELD_BITS: usize = 64;

/// Length of the canonical big-endian binary form
pub const BYTE_LEN: usize = TOTAL_BITS / 8;

/// Bytes per field in the binary form, one Base-32 group each
pub const GROUP_BYTES: usize = FIELD_BITS / 8;

/// Offset added to latitude microdegrees before packing
pub const LAT_OFFSET: u64 = 90_000_000;

/// Offset added to longitude microdegrees before packing
pub const LON_OFFSET: u64 = 180_000_000;

/// Bits carried by one Base-32 symbol
pub const BITS_PER_SYMBOL: usize = 5;

/// Maximum number of significant Base-32 symbols (190 bits)
pub const MAX_SIG_CHARS: usize = TOTAL_BITS / BITS_PER_SYMBOL;

/// Length of the flat Base-32 form and of snapped strings
pub const DISPLAY_WIDTH: usize = TOTAL_BITS.div_ceil(BITS_PER_SYMBOL);

/// Base-32 symbol for zero, used to pad snapped strings
pub const PAD_SYMBOL: char = 'A';

/// Prefix of the grouped Base-32 form
pub const PREFIX: &str = "uvoxid:";

/// Separator between groups in the hex and grouped Base-32 forms
pub const GROUP_SEPARATOR: char = '-';

/// Edge length of one radial voxel step in meters (1 µm)
pub const VOXEL_SIZE_M: f64 = 1e-6;

/// Mean Earth radius in micrometers
pub const EARTH_RADIUS_UM: u64 = 6_371_000_000_000;

/// WGS84 equatorial radius in micrometers
pub const R_EQ_UM: u64 = 6_378_137_000_000;

/// WGS84 polar radius in micrometers
pub const R_POL_UM: u64 = 6_356_752_000_000;
