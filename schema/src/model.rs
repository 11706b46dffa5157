use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

// ---------------------------------------------------------------------------

/// Free-form value: examples, defaults, link parameters, callbacks.
pub type Any = serde_json::Value;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BooleanOr<T> {
    Boolean(bool),
    Value(T),
}

// ---------------------------------------------------------------------------

/// Map of HTTP status code to value, with the optional `default` entry.
///
/// Codes are written as strings (`"200"`), the only key form JSON allows.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpStatuses<T> {
    pub default: Option<T>,
    pub values: BTreeMap<u16, T>,
}

impl<T> Default for HttpStatuses<T> {
    fn default() -> Self {
        HttpStatuses::<T> {
            default: None,
            values: BTreeMap::new(),
        }
    }
}

impl<T> HttpStatuses<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, status: u16, value: T) -> Self {
        self.values.insert(status, value);
        self
    }

    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    pub fn get(&self, status: u16) -> Option<&T> {
        self.values.get(&status)
    }

    /// Every entry with the key as it appears on the wire.
    pub fn entries(&self) -> impl Iterator<Item = (String, &T)> {
        self.default
            .iter()
            .map(|v| ("default".to_string(), v))
            .chain(self.values.iter().map(|(k, v)| (k.to_string(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.values.is_empty()
    }
}

impl<T> FromIterator<(u16, T)> for HttpStatuses<T> {
    fn from_iter<I: IntoIterator<Item = (u16, T)>>(iter: I) -> Self {
        HttpStatuses {
            default: None,
            values: iter.into_iter().collect(),
        }
    }
}

enum StatusKey {
    Default,
    Code(u16),
}

struct StatusKeyVisitor;

impl<'de> Visitor<'de> for StatusKeyVisitor {
    type Value = StatusKey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an HTTP status code or `default`")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match u16::try_from(v) {
            Ok(code) if (100..=599).contains(&code) => Ok(StatusKey::Code(code)),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v == "default" {
            return Ok(StatusKey::Default);
        }
        match v.parse::<u64>() {
            Ok(code) => self.visit_u64(code),
            Err(_) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for StatusKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StatusKeyVisitor)
    }
}

struct HttpStatusesVisitor<T> {
    marker: PhantomData<HttpStatuses<T>>,
}

impl<T> Default for HttpStatusesVisitor<T> {
    fn default() -> Self {
        HttpStatusesVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for HttpStatusesVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = HttpStatuses<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("OpenAPI responses object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = HttpStatuses::<T>::default();
        while let Some(key) = access.next_key::<StatusKey>()? {
            match key {
                StatusKey::Default => map.default = Some(access.next_value()?),
                StatusKey::Code(code) => {
                    map.values.insert(code, access.next_value()?);
                }
            }
        }
        Ok(map)
    }
}

impl<T> Serialize for HttpStatuses<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.values.len() + usize::from(self.default.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (k, v) in self.entries() {
            map.serialize_entry(&k, v)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for HttpStatuses<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(HttpStatusesVisitor::default())
    }
}
