//! Optional cross-field checks over a built document.
//!
//! Nothing here runs during construction or serialization. Call
//! [`Validator::validate`] explicitly; the default validator carries
//! [`ObjectSchemaRule`] and more rules can be plugged in.

use crate::error::{ValidationError, ValidationErrors};
use crate::model::BooleanOr;
use crate::{
    ContentType, Header, MediaType, OpenApi, Operation, Parameter, RequestBody, Response, Schema,
    SchemaType,
};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// A check applied to every schema reachable from the document root.
pub trait SchemaRule {
    fn check(&self, location: &str, schema: &Schema) -> Vec<ValidationError>;
}

/// `type: object` schemas must define `properties` and `required`, and every
/// required name must be a declared property listed once.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectSchemaRule;

impl SchemaRule for ObjectSchemaRule {
    fn check(&self, location: &str, schema: &Schema) -> Vec<ValidationError> {
        if schema.r#type != Some(SchemaType::Object) || schema.is_reference() {
            return vec![];
        }

        let error = |message: String| ValidationError {
            location: location.to_string(),
            message,
            schema: Box::new(schema.clone()),
        };

        let Some(properties) = &schema.properties else {
            return vec![error("object schema should define `properties`".to_string())];
        };
        let Some(required) = &schema.required else {
            return vec![error("object schema should define `required`".to_string())];
        };

        let mut errors = vec![];

        let mut seen = BTreeSet::new();
        let duplicates: BTreeSet<&str> = required
            .iter()
            .map(String::as_str)
            .filter(|name| !seen.insert(*name))
            .collect();
        if !duplicates.is_empty() {
            let names: Vec<&str> = duplicates.into_iter().collect();
            errors.push(error(format!(
                "`required` lists properties more than once: {}",
                names.join(", ")
            )));
        }

        let unknown: BTreeSet<&str> = required
            .iter()
            .map(String::as_str)
            .filter(|name| !properties.contains_key(*name))
            .collect();
        if !unknown.is_empty() {
            let names: Vec<&str> = unknown.into_iter().collect();
            errors.push(error(format!(
                "required properties missing from `properties`: {}",
                names.join(", ")
            )));
        }

        errors
    }
}

pub struct Validator {
    rules: Vec<Box<dyn SchemaRule>>,
}

impl Default for Validator {
    fn default() -> Self {
        Validator::empty().with_rule(ObjectSchemaRule)
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator without any rule.
    pub fn empty() -> Self {
        Validator { rules: vec![] }
    }

    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: SchemaRule + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn validate(&self, doc: &OpenApi) -> Result<(), ValidationErrors> {
        let mut errors = vec![];

        if let Some(components) = &doc.components {
            for (name, schema) in components.schemas.iter().flatten() {
                let location = pointer("/components/schemas", name);
                self.walk_schema(&location, schema, &mut errors);
            }
            for (name, response) in components.responses.iter().flatten() {
                let location = pointer("/components/responses", name);
                self.walk_response(&location, response, &mut errors);
            }
            for (name, parameter) in components.parameters.iter().flatten() {
                let location = pointer("/components/parameters", name);
                self.walk_parameter(&location, parameter, &mut errors);
            }
            for (name, body) in components.request_bodies.iter().flatten() {
                let location = pointer("/components/requestBodies", name);
                self.walk_request_body(&location, body, &mut errors);
            }
            for (name, header) in components.headers.iter().flatten() {
                let location = pointer("/components/headers", name);
                self.walk_header(&location, header, &mut errors);
            }
        }

        for (path, item) in &doc.paths {
            let location = pointer("/paths", path);
            self.walk_parameters(&location, item.parameters.as_deref(), &mut errors);
            for (method, operation) in &item.operations {
                let location = pointer(&location, method.as_str());
                self.walk_operation(&location, operation, &mut errors);
            }
        }

        debug!("validation found {} error(s)", errors.len());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Checks one schema and everything nested in it.
    pub fn validate_schema(&self, location: &str, schema: &Schema) -> Vec<ValidationError> {
        let mut errors = vec![];
        self.walk_schema(location, schema, &mut errors);
        errors
    }

    fn walk_operation(
        &self,
        location: &str,
        operation: &Operation,
        errors: &mut Vec<ValidationError>,
    ) {
        self.walk_parameters(location, operation.parameters.as_deref(), errors);
        if let Some(body) = &operation.request_body {
            self.walk_request_body(&pointer(location, "requestBody"), body, errors);
        }
        for (status, response) in operation.responses.entries() {
            let responses = pointer(location, "responses");
            self.walk_response(&pointer(&responses, &status), response, errors);
        }
    }

    fn walk_parameters(
        &self,
        location: &str,
        parameters: Option<&[Parameter]>,
        errors: &mut Vec<ValidationError>,
    ) {
        let base = pointer(location, "parameters");
        for (i, parameter) in parameters.unwrap_or_default().iter().enumerate() {
            self.walk_parameter(&pointer(&base, &i.to_string()), parameter, errors);
        }
    }

    fn walk_parameter(
        &self,
        location: &str,
        parameter: &Parameter,
        errors: &mut Vec<ValidationError>,
    ) {
        if let Some(schema) = &parameter.schema_ {
            self.walk_schema(&pointer(location, "schema"), schema, errors);
        }
    }

    fn walk_header(&self, location: &str, header: &Header, errors: &mut Vec<ValidationError>) {
        if let Some(schema) = &header.schema_ {
            self.walk_schema(&pointer(location, "schema"), schema, errors);
        }
    }

    fn walk_request_body(
        &self,
        location: &str,
        body: &RequestBody,
        errors: &mut Vec<ValidationError>,
    ) {
        self.walk_content(&pointer(location, "content"), &body.content, errors);
    }

    fn walk_response(
        &self,
        location: &str,
        response: &Response,
        errors: &mut Vec<ValidationError>,
    ) {
        for (name, header) in response.headers.iter().flatten() {
            let headers = pointer(location, "headers");
            self.walk_header(&pointer(&headers, name), header, errors);
        }
        if let Some(content) = &response.content {
            self.walk_content(&pointer(location, "content"), content, errors);
        }
    }

    fn walk_content(
        &self,
        location: &str,
        content: &BTreeMap<ContentType, MediaType>,
        errors: &mut Vec<ValidationError>,
    ) {
        for (content_type, media) in content {
            let media_location = pointer(location, content_type.as_str());
            self.walk_schema(&pointer(&media_location, "schema"), &media.schema_, errors);
        }
    }

    fn walk_schema(&self, location: &str, schema: &Schema, errors: &mut Vec<ValidationError>) {
        for rule in &self.rules {
            errors.extend(rule.check(location, schema));
        }

        for (name, property) in schema.properties.iter().flatten() {
            let properties = pointer(location, "properties");
            self.walk_schema(&pointer(&properties, name), property, errors);
        }
        if let Some(items) = &schema.items {
            self.walk_schema(&pointer(location, "items"), items, errors);
        }
        if let Some(additional) = &schema.additional_properties {
            if let BooleanOr::Value(additional) = additional.as_ref() {
                let location = pointer(location, "additionalProperties");
                self.walk_schema(&location, additional, errors);
            }
        }
        for (key, members) in [
            ("allOf", &schema.all_of),
            ("anyOf", &schema.any_of),
            ("oneOf", &schema.one_of),
        ] {
            let base = pointer(location, key);
            for (i, member) in members.iter().flatten().enumerate() {
                self.walk_schema(&pointer(&base, &i.to_string()), member, errors);
            }
        }
        if let Some(not) = &schema.not_ {
            self.walk_schema(&pointer(location, "not"), not, errors);
        }
    }
}

/// Appends one JSON pointer token (RFC 6901 escaping).
fn pointer(base: &str, token: &str) -> String {
    format!("{base}/{}", token.replace('~', "~0").replace('/', "~1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Components, HttpMethod, HttpStatuses, Info, ParameterLocation, Path, Paths};

    fn document(schema: Schema) -> OpenApi {
        let op = Operation {
            parameters: Some(vec![
                Parameter::new("filter", ParameterLocation::Query).with_schema(schema.clone())
            ]),
            ..Operation::new(HttpStatuses::new().with(
                200,
                Response::new("ok").with_content(ContentType::Json, MediaType::new(schema.clone())),
            ))
        };
        let mut paths = Paths::new();
        paths.insert(
            "/pets/{id}".to_string(),
            Path::new().with_operation(HttpMethod::Get, op),
        );
        let mut schemas = BTreeMap::new();
        schemas.insert("Pet".to_string(), schema);
        OpenApi::new(Info::new("t", "1"), paths).with_components(Components {
            schemas: Some(schemas),
            ..Default::default()
        })
    }

    #[test]
    fn object_rule_accepts_consistent_schema() {
        let schema =
            Schema::object([("id", Schema::new(SchemaType::Integer))]).with_required(["id"]);
        assert_eq!(Ok(()), Validator::new().validate(&document(schema)));
    }

    #[test]
    fn object_rule_missing_properties() {
        let errors = ObjectSchemaRule.check("/x", &Schema::new(SchemaType::Object));
        assert_eq!(1, errors.len());
        assert_eq!("/x", errors[0].location);
        assert_eq!("object schema should define `properties`", errors[0].message);
    }

    #[test]
    fn object_rule_missing_required() {
        let schema = Schema::object([("id", Schema::new(SchemaType::Integer))]);
        let errors = ObjectSchemaRule.check("/x", &schema);
        assert_eq!("object schema should define `required`", errors[0].message);
        assert_eq!(schema, *errors[0].schema);
    }

    #[test]
    fn object_rule_unknown_required() {
        let schema = Schema::object([("id", Schema::new(SchemaType::Integer))])
            .with_required(["name", "id", "age"]);
        let errors = ObjectSchemaRule.check("/x", &schema);
        assert_eq!(
            "required properties missing from `properties`: age, name",
            errors[0].message
        );
    }

    #[test]
    fn object_rule_duplicate_required() {
        let schema = Schema {
            required: Some(vec!["id".into(), "name".into(), "id".into(), "tag".into()]),
            ..Schema::object([
                ("id", Schema::new(SchemaType::Integer)),
                ("name", Schema::new(SchemaType::String)),
            ])
        };
        let errors = ObjectSchemaRule.check("/x", &schema);
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            vec![
                "`required` lists properties more than once: id",
                "required properties missing from `properties`: tag",
            ],
            messages
        );
    }

    #[test]
    fn object_rule_ignores_other_types_and_refs() {
        assert!(ObjectSchemaRule.check("/x", &Schema::new(SchemaType::String)).is_empty());
        let reference = Schema {
            r#type: Some(SchemaType::Object),
            ..Schema::component("Pet")
        };
        assert!(ObjectSchemaRule.check("/x", &reference).is_empty());
    }

    #[test]
    fn validate_reports_every_location() {
        let errors = Validator::new()
            .validate(&document(Schema::new(SchemaType::Object)))
            .unwrap_err();
        let locations: Vec<&str> = errors.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(
            vec![
                "/components/schemas/Pet",
                "/paths/~1pets~1{id}/get/parameters/0/schema",
                "/paths/~1pets~1{id}/get/responses/200/content/application~1json/schema",
            ],
            locations
        );
    }

    #[test]
    fn validate_nested_schemas() {
        let bad = Schema::new(SchemaType::Object);
        let schema = Schema {
            all_of: Some(vec![Schema::default(), bad.clone()]),
            not_: Some(Box::new(bad.clone())),
            ..Schema::array(bad)
        };
        let errors = Validator::new().validate_schema("", &schema);
        let locations: Vec<&str> = errors.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(vec!["/items", "/allOf/1", "/not"], locations);
    }

    #[test]
    fn empty_validator_accepts_anything() {
        let doc = document(Schema::new(SchemaType::Object));
        assert_eq!(Ok(()), Validator::empty().validate(&doc));
    }

    struct NoDescription;

    impl SchemaRule for NoDescription {
        fn check(&self, location: &str, schema: &Schema) -> Vec<ValidationError> {
            match schema.description {
                Some(_) => vec![],
                None => vec![ValidationError {
                    location: location.to_string(),
                    message: "missing description".to_string(),
                    schema: Box::new(schema.clone()),
                }],
            }
        }
    }

    #[test]
    fn validate_with_custom_rule() {
        let doc = document(Schema::new(SchemaType::String));
        let errors = Validator::empty()
            .with_rule(NoDescription)
            .validate(&doc)
            .unwrap_err();
        assert_eq!(3, errors.len());
    }
}
