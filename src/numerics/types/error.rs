// src/numerics/types/error.rs
// Errors for the checked vector entry points.

/// Errors returned by the checked conversions and the checked projection.
///
/// The arithmetic operators never produce these: they follow the numeric
/// semantics of the element type and leave NaN/inf detection to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Cannot project onto a zero-length vector")]
    ZeroLengthTarget,

    #[error("Invalid element {index} in {input:?}")]
    Parse { index: usize, input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VectorError::LengthMismatch { expected: 3, actual: 5 };
        assert_eq!(err.to_string(), "Length mismatch: expected 3 elements, got 5");

        let err = VectorError::Parse { index: 1, input: "(1, x)".to_string() };
        assert_eq!(err.to_string(), "Invalid element 1 in \"(1, x)\"");
    }
}
