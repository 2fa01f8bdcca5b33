use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScamIntelError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for ScamIntelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type ScamIntelResult<T> = Result<T, ScamIntelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_variant_kind() {
        let err = ScamIntelError::Validation("weights must sum to 1.0".to_owned());
        assert_eq!(err.to_string(), "validation error: weights must sum to 1.0");
    }

    #[test]
    fn io_error_converts_into_io_variant() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "input.json");
        let err: ScamIntelError = io.into();
        assert!(matches!(err, ScamIntelError::Io(ref msg) if msg.contains("input.json")));
    }
}
