use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    #[error("Invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },
}

impl MapperError {
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        tracing::warn!(kind, value = %value, "rejected enum value");
        MapperError::InvalidEnumValue { kind, value }
    }
}

pub type MapperResult<T> = Result<T, MapperError>;
