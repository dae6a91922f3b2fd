use thiserror::Error;

/// Binary account-layout codec errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("buffer too short: layout spans {needed} bytes, only {available} remain")]
    BufferTooShort { needed: usize, available: usize },

    #[error("field `{field}` out of range: {reason}")]
    FieldOutOfRange { field: &'static str, reason: String },

    #[error("record is missing field `{0}`")]
    MissingField(&'static str),

    #[error("type mismatch for field `{0}`")]
    TypeMismatch(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_buffer_too_short() {
        let err = LayoutError::BufferTooShort {
            needed: 363,
            available: 362,
        };
        assert_eq!(
            err.to_string(),
            "buffer too short: layout spans 363 bytes, only 362 remain"
        );
    }

    #[test]
    fn display_field_out_of_range() {
        let err = LayoutError::FieldOutOfRange {
            field: "nonce",
            reason: "256 does not fit in 1 byte(s)".into(),
        };
        assert_eq!(
            err.to_string(),
            "field `nonce` out of range: 256 does not fit in 1 byte(s)"
        );
    }

    #[test]
    fn display_missing_field() {
        let err = LayoutError::MissingField("isInitialized");
        assert_eq!(err.to_string(), "record is missing field `isInitialized`");
    }

    #[test]
    fn display_type_mismatch() {
        let err = LayoutError::TypeMismatch("fees");
        assert_eq!(err.to_string(), "type mismatch for field `fees`");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(LayoutError::MissingField("nonce"));
        assert!(err.to_string().contains("nonce"));
    }
}
