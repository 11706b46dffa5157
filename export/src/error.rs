use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Arg(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error(transparent)]
    Schema(#[from] openapi_om_schema::Error),
}

impl From<openapi_om_schema::ConstructionError> for Error {
    fn from(value: openapi_om_schema::ConstructionError) -> Self {
        Error::Schema(value.into())
    }
}

impl From<openapi_om_schema::SerializationError> for Error {
    fn from(value: openapi_om_schema::SerializationError) -> Self {
        Error::Schema(value.into())
    }
}

impl From<openapi_om_schema::ValidationErrors> for Error {
    fn from(value: openapi_om_schema::ValidationErrors) -> Self {
        Error::Schema(value.into())
    }
}

impl Error {
    pub fn arg(msg: &str) -> Self {
        Error::Arg(msg.to_string())
    }

    /// Logger setup failed, so nothing can be reported through `log`.
    pub fn is_logger(&self) -> bool {
        matches!(self, Error::Logger(_))
    }
}
