//! Turns a document tree into its canonical mapping and emits it as text.
//!
//! The typed path goes through serde: unset fields are skipped by the model's
//! `skip_serializing_if`, reserved-word fields carry their public key through
//! `rename`, and enum or integer map keys are written as their wire string.
//! [`remove_nulls`] then drops whatever null entries remain in mappings,
//! e.g. inside free-form example values.
//!
//! ```
//! use openapi_om_schema::{Canonicalizer, Info, OpenApi, Paths};
//! use serde_json::json;
//!
//! let doc = OpenApi::new(Info::new("title", "0.1"), Paths::new());
//! let value = Canonicalizer::new().canonicalize(&doc).unwrap();
//! assert_eq!(
//!     json!({
//!         "info": {"title": "title", "version": "0.1"},
//!         "openapi": "3.0.1",
//!         "paths": {},
//!         "servers": [{"description": "Default server", "url": "/"}],
//!     }),
//!     value
//! );
//! ```

use crate::error::{ConstructionError, SerializationError};
use crate::keys::KeyCheck;
use crate::names::FieldNaming;
use log::{debug, trace, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(ConstructionError::unknown_variant("output format", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Canonicalizer {
    naming: FieldNaming,
    pretty: bool,
}

impl Canonicalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Naming policy used by [`Canonicalizer::canonicalize_raw`].
    pub fn with_naming(naming: FieldNaming) -> Self {
        Canonicalizer {
            naming,
            ..Self::default()
        }
    }

    /// Indent JSON output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn naming(&self) -> FieldNaming {
        self.naming
    }

    pub fn canonicalize<T>(&self, value: &T) -> Result<Value, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        KeyCheck::check(value)?;
        let mut canonical =
            serde_json::to_value(value).map_err(SerializationError::contract_violation)?;
        remove_nulls(&mut canonical);
        debug!("canonicalized {} value", std::any::type_name::<T>());
        Ok(canonical)
    }

    /// Canonicalizes an untyped mapping: keys are mapped to public names
    /// with the configured [`FieldNaming`], then nulls are removed.
    ///
    /// Every mapping key is subject to renaming, including user-chosen names
    /// such as schema property names.
    pub fn canonicalize_raw(&self, value: Value) -> Value {
        let mut canonical = self.rename_keys(value);
        remove_nulls(&mut canonical);
        canonical
    }

    fn rename_keys(&self, value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut renamed = Map::with_capacity(map.len());
                for (key, v) in map {
                    let public = self.naming.public_key(&key);
                    if public != key {
                        trace!("renaming `{key}` to `{public}`");
                    }
                    let public = public.to_string();
                    if renamed.contains_key(&public) {
                        warn!("`{key}` overrides an existing `{public}` entry");
                    }
                    renamed.insert(public, self.rename_keys(v));
                }
                Value::Object(renamed)
            }
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|v| self.rename_keys(v)).collect())
            }
            scalar => scalar,
        }
    }

    pub fn to_json<T>(&self, value: &T) -> Result<String, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        let canonical = self.canonicalize(value)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&canonical)
        } else {
            serde_json::to_string(&canonical)
        };
        text.map_err(SerializationError::Json)
    }

    pub fn to_yaml<T>(&self, value: &T) -> Result<String, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        let canonical = self.canonicalize(value)?;
        Ok(serde_yaml::to_string(&canonical)?)
    }

    pub fn emit<T>(&self, value: &T, format: Format) -> Result<String, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        match format {
            Format::Json => self.to_json(value),
            Format::Yaml => self.to_yaml(value),
        }
    }
}

/// Removes null-valued entries from every mapping in the tree.
///
/// Sequence elements are never removed, a `null` inside a list stays. A
/// mapping emptied by the removal stays as an empty mapping.
pub fn remove_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(remove_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(remove_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        construct, ContentType, Header, HttpMethod, HttpStatuses, Info, MediaType, OpenApi,
        Operation, Parameter, ParameterLocation, Path as PathItem, Paths, RequestBody, Response,
        Schema, SchemaType, SecurityScheme, SecuritySchemeApiKey, SecuritySchemeLocation, Tag,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn minimal() -> OpenApi {
        OpenApi::new(Info::new("title", "0.1"), Paths::new())
    }

    fn pets() -> OpenApi {
        let pet = Schema::object([
            ("id", Schema::new(SchemaType::Integer)),
            ("name", Schema::new(SchemaType::String)),
        ])
        .with_required(["id"]);
        let list = Operation {
            operation_id: Some("listPets".to_string()),
            parameters: Some(vec![Parameter::new("limit", ParameterLocation::Query)
                .with_schema(Schema::new(SchemaType::Integer))]),
            ..Operation::new(HttpStatuses::new().with(
                200,
                Response::new("A list of pets").with_content(
                    ContentType::Json,
                    MediaType::new(Schema::array(Schema::component("Pet"))),
                ),
            ))
        };
        let mut content = BTreeMap::new();
        content.insert(ContentType::Json, MediaType::new(Schema::component("Pet")));
        let create = Operation {
            request_body: Some(RequestBody {
                required: true,
                ..RequestBody::new(content)
            }),
            ..Operation::new(HttpStatuses::new().with(201, Response::new("Created")))
        };
        let mut paths = Paths::new();
        paths.insert(
            "/pets".to_string(),
            PathItem::new()
                .with_operation(HttpMethod::Get, list)
                .with_operation(HttpMethod::Post, create),
        );
        let mut schemas = BTreeMap::new();
        schemas.insert("Pet".to_string(), pet);
        schemas.insert(
            "NotPet".to_string(),
            Schema {
                not_: Some(Box::new(Schema::component("Pet"))),
                ..Default::default()
            },
        );
        let mut security_schemes = BTreeMap::new();
        security_schemes.insert(
            "key".to_string(),
            SecurityScheme::ApiKey(SecuritySchemeApiKey {
                description: None,
                name: "X-Key".to_string(),
                in_: SecuritySchemeLocation::Header,
            }),
        );
        let mut headers = BTreeMap::new();
        headers.insert(
            "X-Rate".to_string(),
            Header {
                schema_: Some(Schema::new(SchemaType::Integer)),
                ..Default::default()
            },
        );
        OpenApi::new(Info::new("Petstore", "1.0.0"), paths)
            .with_tags(vec![Tag::new("pets")])
            .with_components(crate::Components {
                schemas: Some(schemas),
                security_schemes: Some(security_schemes),
                headers: Some(headers),
                ..Default::default()
            })
    }

    fn collect_keys(value: &Value, keys: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    keys.push(k.clone());
                    collect_keys(v, keys);
                }
            }
            Value::Array(items) => items.iter().for_each(|v| collect_keys(v, keys)),
            _ => {}
        }
    }

    #[test]
    fn canonicalize_minimal_document() {
        let value = Canonicalizer::new().canonicalize(&minimal()).unwrap();
        assert_eq!(
            json!({
                "info": {"title": "title", "version": "0.1"},
                "openapi": "3.0.1",
                "paths": {},
                "servers": [{"description": "Default server", "url": "/"}],
            }),
            value
        );
    }

    #[test]
    fn canonicalize_tag_default_description() {
        let value = Canonicalizer::new().canonicalize(&Tag::new("Orders")).unwrap();
        assert_eq!(json!({"name": "Orders", "description": ""}), value);
    }

    #[test]
    fn canonicalize_default_servers() {
        let value = minimal().as_value().unwrap();
        assert_eq!(
            json!([{"url": "/", "description": "Default server"}]),
            value["servers"]
        );
    }

    #[test]
    fn remove_nulls_keeps_list_nulls() {
        let mut value = json!({
            "key1": [
                {
                    "subkey1": null,
                    "subkey2": {"subkey4": null},
                    "subkey3": [null],
                }
            ],
            "key2": null,
        });
        remove_nulls(&mut value);
        assert_eq!(
            json!({"key1": [{"subkey2": {}, "subkey3": [null]}]}),
            value
        );
    }

    #[test]
    fn remove_nulls_scalar_untouched() {
        let mut value = Value::Null;
        remove_nulls(&mut value);
        assert_eq!(Value::Null, value);
    }

    #[test]
    fn canonicalize_drops_null_example_entries() {
        let media = MediaType {
            example: Some(json!({"name": "rex", "tag": null, "aliases": [null]})),
            ..MediaType::new(Schema::new(SchemaType::Object))
        };
        let value = Canonicalizer::new().canonicalize(&media).unwrap();
        assert_eq!(
            json!({
                "schema": {"type": "object"},
                "example": {"name": "rex", "aliases": [null]},
            }),
            value
        );
    }

    #[test]
    fn canonicalize_renames_reserved_fields() {
        let value = pets().as_value().unwrap();
        let mut keys = vec![];
        collect_keys(&value, &mut keys);
        for public in ["in", "not", "schema"] {
            assert!(keys.iter().any(|k| k == public), "missing `{public}`");
        }
        for internal in ["in_", "not_", "schema_"] {
            assert!(!keys.iter().any(|k| k == internal), "found `{internal}`");
        }
    }

    #[test]
    fn canonicalize_rekeys_enum_maps() {
        let response = Response::new("ok")
            .with_content(ContentType::Json, MediaType::new(Schema::default()))
            .with_content(ContentType::Html, MediaType::new(Schema::default()));
        let value = Canonicalizer::new().canonicalize(&response).unwrap();
        let content = value["content"].as_object().unwrap();
        let keys: Vec<&str> = content.keys().map(String::as_str).collect();
        assert_eq!(vec!["application/json", "text/html"], keys);
    }

    #[test]
    fn canonicalize_rekeys_methods_and_status_codes() {
        let value = pets().as_value().unwrap();
        let path = &value["paths"]["/pets"];
        assert!(path["get"]["responses"]["200"].is_object());
        assert!(path["post"]["responses"]["201"].is_object());
        assert_eq!(json!(true), path["post"]["requestBody"]["required"]);
    }

    #[test]
    fn canonicalize_round_trip_is_idempotent() {
        let canonicalizer = Canonicalizer::new();
        for doc in [minimal(), pets()] {
            let first = canonicalizer.canonicalize(&doc).unwrap();
            let rebuilt: OpenApi = construct::from_value(first.clone()).unwrap();
            assert_eq!(doc, rebuilt);
            let second = canonicalizer.canonicalize(&rebuilt).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn canonicalize_non_scalar_key_is_contract_violation() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "a");
        let err = Canonicalizer::new().canonicalize(&map).unwrap_err();
        assert!(matches!(err, SerializationError::ContractViolation(_)));
    }

    #[test]
    fn canonicalize_bool_key_is_contract_violation() {
        let map = BTreeMap::from([(true, "a")]);
        let err = Canonicalizer::new().canonicalize(&map).unwrap_err();
        assert!(matches!(err, SerializationError::ContractViolation(_)));
        assert!(Canonicalizer::new().to_yaml(&map).is_err());
    }

    #[test]
    fn canonicalize_bool_key_nested() {
        let media = MediaType::new(Schema::new(SchemaType::Object));
        let wrapped = BTreeMap::from([("media", BTreeMap::from([(false, media)]))]);
        let err = Canonicalizer::new().to_json(&wrapped).unwrap_err();
        assert!(matches!(err, SerializationError::ContractViolation(_)));
    }

    #[test]
    fn canonicalize_raw_explicit_naming() {
        let raw = json!({
            "name": "id",
            "in_": "path",
            "schema_": {"type": "string", "not_": {"type": "null"}},
            "style_": null,
            "items_": "kept",
        });
        let value = Canonicalizer::new().canonicalize_raw(raw);
        assert_eq!(
            json!({
                "name": "id",
                "in": "path",
                "schema": {"type": "string", "not": {"type": "null"}},
                "items_": "kept",
            }),
            value
        );
    }

    #[test]
    fn canonicalize_raw_strip_trailing_underscores() {
        let raw = json!({"in__": "query", "list": [{"schema_": {}}, null]});
        let value =
            Canonicalizer::with_naming(FieldNaming::StripTrailingUnderscores).canonicalize_raw(raw);
        assert_eq!(json!({"in": "query", "list": [{"schema": {}}, null]}), value);
    }

    #[test]
    fn to_json_minimal_document() {
        let s = Canonicalizer::new().to_json(&minimal()).unwrap();
        assert_eq!(
            "{\"info\":{\"title\":\"title\",\"version\":\"0.1\"},\"openapi\":\"3.0.1\",\"paths\":{},\"servers\":[{\"description\":\"Default server\",\"url\":\"/\"}]}",
            s
        );
    }

    #[test]
    fn to_json_pretty() {
        let s = Canonicalizer::new()
            .pretty(true)
            .to_json(&Tag::new("Orders"))
            .unwrap();
        assert_eq!("{\n  \"description\": \"\",\n  \"name\": \"Orders\"\n}", s);
    }

    #[test]
    fn to_yaml_matches_json_structure() {
        let canonicalizer = Canonicalizer::new();
        let doc = pets();
        let yaml = canonicalizer.emit(&doc, Format::Yaml).unwrap();
        let json = canonicalizer.emit(&doc, Format::Json).unwrap();
        let from_yaml: Value = serde_yaml::from_str(&yaml).unwrap();
        let from_json: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn format_from_str_and_path() {
        assert_eq!(Ok(Format::Yaml), "yml".parse::<Format>());
        assert!("toml".parse::<Format>().is_err());
        assert_eq!(Some(Format::Json), Format::from_path(Path::new("out.json")));
        assert_eq!(None, Format::from_path(Path::new("out")));
    }
}
