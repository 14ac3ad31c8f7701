//! Point errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PointError>;

/// Everything that can go wrong when filling in a point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointError {
    /// A convenience setter or slice was given the wrong number of components.
    #[error("Dimension mismatch: expected {expected} components, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Line point normal index past the end.
    #[error("Normal index {index} out of range for {len} normals")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

impl PointError {
    pub fn mismatch(expected: usize, found: usize) -> Self {
        PointError::DimensionMismatch { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_numbers() {
        let err = PointError::mismatch(2, 3);
        assert_eq!(
            err.to_string(), "Dimension mismatch: expected 2 components, got 3"
        );

        let err = PointError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Normal index 4 out of range for 2 normals");

        let err = PointError::FieldNotFound("FA".to_owned());
        assert_eq!(err.to_string(), "Field not found: FA");
    }
}
