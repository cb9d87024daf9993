/// Error type for uvoxid operations.
#[derive(Debug, Clone, PartialEq)]
pub enum UVoxError {
    /// A precision argument is outside `0..=max` significant symbols.
    Range { sig_chars: usize, max: usize },
    /// A binary payload does not have the expected byte length.
    Length { expected: usize, actual: usize },
    /// Hex, Base-32 or Base-64 text could not be parsed.
    Encoding(String),
    /// Two voxels were required to share a shell but have different radii.
    ShellMismatch { r1: u64, r2: u64 },
    /// The input cannot be interpreted as an identifier at all.
    Decode(String),
    /// The unit name is not in the conversion table.
    UnsupportedUnit(String),
    /// A length or radius value is invalid (e.g., negative).
    InvalidDimension(String),
}

impl std::fmt::Display for UVoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UVoxError::Range { sig_chars, max } => {
                write!(f, "sig_chars {} out of range, max is {}", sig_chars, max)
            }
            UVoxError::Length { expected, actual } => {
                write!(f, "Expected {} bytes, got {}", expected, actual)
            }
            UVoxError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            UVoxError::ShellMismatch { r1, r2 } => write!(
                f,
                "Both voxels must be on the same spherical shell (radius {} != {})",
                r1, r2
            ),
            UVoxError::Decode(msg) => write!(f, "Decode error: {}", msg),
            UVoxError::UnsupportedUnit(unit) => write!(f, "Unsupported unit: {}", unit),
            UVoxError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
        }
    }
}

impl std::error::Error for UVoxError {}

impl From<data_encoding::DecodeError> for UVoxError {
    fn from(e: data_encoding::DecodeError) -> Self {
        UVoxError::Encoding(e.to_string())
    }
}

impl From<base64::DecodeError> for UVoxError {
    fn from(e: base64::DecodeError) -> Self {
        UVoxError::Encoding(e.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UVoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = UVoxError::Range {
            sig_chars: 39,
            max: 38,
        };
        assert_eq!(err.to_string(), "sig_chars 39 out of range, max is 38");

        let err = UVoxError::Length {
            expected: 24,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Expected 24 bytes, got 3");

        let err = UVoxError::UnsupportedUnit("furlong".into());
        assert_eq!(err.to_string(), "Unsupported unit: furlong");
    }

    #[test]
    fn test_from_base32_error() {
        let err = data_encoding::BASE32_NOPAD.decode(b"1").unwrap_err();
        assert!(matches!(UVoxError::from(err), UVoxError::Encoding(_)));
    }
}
