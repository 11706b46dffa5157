use crate::Schema;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

/// A document value could not be built from its declarative description.
#[derive(Debug, Error, PartialEq)]
pub enum ConstructionError {
    #[error("invalid document: {0}")]
    Invalid(String),

    #[error("`{value}` is not a valid {domain}")]
    UnknownVariant { domain: &'static str, value: String },
}

impl ConstructionError {
    pub fn invalid(err: impl fmt::Display) -> Self {
        ConstructionError::Invalid(err.to_string())
    }

    pub fn unknown_variant(domain: &'static str, value: &str) -> Self {
        ConstructionError::UnknownVariant {
            domain,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SerializationError {
    /// The tree holds something the canonical form cannot represent,
    /// typically a map keyed by a non-scalar value.
    #[error("serialization contract violation: {0}")]
    ContractViolation(String),

    #[error("JSON emission failed: {0}")]
    Json(#[source] serde_json::Error),

    #[error("YAML emission failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SerializationError {
    pub fn contract_violation(err: impl fmt::Display) -> Self {
        SerializationError::ContractViolation(err.to_string())
    }
}

impl serde::ser::Error for SerializationError {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        SerializationError::contract_violation(msg)
    }
}

/// A cross-field rule failed on a structurally valid schema.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{location}: {message}")]
pub struct ValidationError {
    /// JSON pointer of the offending schema inside the document.
    pub location: String,
    pub message: String,
    pub schema: Box<Schema>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
