//! Builds model values from declarative descriptions keyed by public names.

use crate::error::ConstructionError;
use crate::model::Any;
use serde::de::DeserializeOwned;

pub fn from_value<T>(value: Any) -> Result<T, ConstructionError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(ConstructionError::invalid)
}

pub fn from_json<T>(content: &str) -> Result<T, ConstructionError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(content).map_err(ConstructionError::invalid)
}

pub fn from_yaml<T>(content: &str) -> Result<T, ConstructionError>
where
    T: DeserializeOwned,
{
    serde_yaml::from_str(content).map_err(ConstructionError::invalid)
}
