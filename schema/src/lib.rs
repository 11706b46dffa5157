pub mod canonical;
pub mod construct;
pub mod enums;
pub mod error;
mod keys;
pub mod model;
pub mod names;
pub mod validate;

// https://spec.openapis.org/oas/v3.0.1

pub use self::canonical::{remove_nulls, Canonicalizer, Format};
pub use self::enums::{
    ContentType, HttpMethod, ParameterLocation, PropertyFormat, SchemaType,
    SecuritySchemeLocation, SecuritySchemeType,
};
pub use self::error::{
    ConstructionError, Error, Result, SerializationError, ValidationError, ValidationErrors,
};
pub use self::model::{Any, BooleanOr, HttpStatuses};
pub use self::names::FieldNaming;
pub use self::validate::{ObjectSchemaRule, SchemaRule, Validator};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

pub const OPENAPI_VERSION: &str = "3.0.1";

fn default_openapi_version() -> String {
    OPENAPI_VERSION.to_string()
}

/// The server list used when a document declares none.
pub fn default_servers() -> Vec<Server> {
    vec![Server::new("/").with_description("Default server")]
}

fn servers_or_default<'de, D>(deserializer: D) -> std::result::Result<Vec<Server>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Server>>::deserialize(deserializer)?
        .filter(|servers| !servers.is_empty())
        .unwrap_or_else(default_servers))
}

fn serialize_servers<S>(servers: &[Server], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if servers.is_empty() {
        default_servers().serialize(serializer)
    } else {
        servers.serialize(serializer)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OpenApi {
    #[serde(default = "default_openapi_version")]
    pub openapi: String,

    pub info: Info,

    // An empty list is written as the default server list.
    #[serde(
        default = "default_servers",
        deserialize_with = "servers_or_default",
        serialize_with = "serialize_servers"
    )]
    pub servers: Vec<Server>,

    pub paths: Paths,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "externalDocs")]
    pub external_docs: Option<ExternalDocumentation>,
}

impl OpenApi {
    pub fn new(info: Info, paths: Paths) -> Self {
        OpenApi {
            openapi: default_openapi_version(),
            info,
            servers: default_servers(),
            paths,
            components: None,
            security: None,
            tags: None,
            external_docs: None,
        }
    }

    /// Replaces the server list; an empty list keeps the default server.
    pub fn with_servers(mut self, servers: Vec<Server>) -> Self {
        self.servers = if servers.is_empty() {
            default_servers()
        } else {
            servers
        };
        self
    }

    pub fn with_components(mut self, components: Components) -> Self {
        self.components = Some(components);
        self
    }

    pub fn with_security(mut self, security: Vec<SecurityRequirement>) -> Self {
        self.security = Some(security);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_external_docs(mut self, external_docs: ExternalDocumentation) -> Self {
        self.external_docs = Some(external_docs);
        self
    }

    pub fn as_value(&self) -> std::result::Result<Any, SerializationError> {
        Canonicalizer::new().canonicalize(self)
    }

    pub fn as_json(&self) -> std::result::Result<String, SerializationError> {
        Canonicalizer::new().to_json(self)
    }

    pub fn as_yaml(&self) -> std::result::Result<String, SerializationError> {
        Canonicalizer::new().to_yaml(self)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Info {
    pub title: String,

    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "termsOfService")]
    pub terms_of_service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Info {
            title: title.into(),
            version: version.into(),
            description: None,
            terms_of_service: None,
            contact: None,
            license: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct License {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Server {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<BTreeMap<String, ServerVariable>>,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Server {
            url: url.into(),
            description: None,
            variables: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ServerVariable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#enum: Option<Vec<String>>,

    pub default: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<BTreeMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<BTreeMap<String, Response>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Parameter>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<BTreeMap<String, Example>>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "requestBodies")]
    pub request_bodies: Option<BTreeMap<String, RequestBody>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Header>>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "securitySchemes")]
    pub security_schemes: Option<BTreeMap<String, SecurityScheme>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, Link>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<BTreeMap<String, Callback>>,
}

pub type Paths = BTreeMap<String, Path>;

/// A path item. Operations are keyed by method and written inline next to
/// the shared fields (`get`, `post`, ...).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Path {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub operations: BTreeMap<HttpMethod, Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, method: HttpMethod, operation: Operation) -> Self {
        self.operations.insert(method, operation);
        self
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.get(&method)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Operation {
    pub responses: Responses,

    #[serde(skip_serializing_if = "Option::is_none", rename = "operationId")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "requestBody")]
    pub request_body: Option<RequestBody>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "externalDocs")]
    pub external_docs: Option<ExternalDocumentation>,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<BTreeMap<String, Callback>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

impl Operation {
    pub fn new(responses: Responses) -> Self {
        Operation {
            responses,
            operation_id: None,
            request_body: None,
            tags: None,
            parameters: None,
            summary: None,
            description: None,
            external_docs: None,
            deprecated: false,
            servers: None,
            callbacks: None,
            security: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExternalDocumentation {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in", alias = "in_")]
    pub in_: ParameterLocation,

    #[serde(default)]
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "allowEmptyValue")]
    pub allow_empty_value: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "schema", alias = "schema_")]
    pub schema_: Option<Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "allowReserved")]
    pub allow_reserved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Any>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<BTreeMap<String, Example>>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, in_: ParameterLocation) -> Self {
        Parameter {
            name: name.into(),
            in_,
            required: false,
            description: None,
            allow_empty_value: false,
            deprecated: None,
            schema_: None,
            style: None,
            explode: None,
            allow_reserved: None,
            example: None,
            examples: None,
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema_ = Some(schema);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RequestBody {
    pub content: BTreeMap<ContentType, MediaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,
}

impl RequestBody {
    pub fn new(content: BTreeMap<ContentType, MediaType>) -> Self {
        RequestBody {
            content,
            description: None,
            required: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MediaType {
    #[serde(rename = "schema", alias = "schema_")]
    pub schema_: Schema,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Any>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<BTreeMap<String, Example>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<BTreeMap<String, Encoding>>,
}

impl MediaType {
    pub fn new(schema: Schema) -> Self {
        MediaType {
            schema_: schema,
            example: None,
            examples: None,
            encoding: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none", rename = "contentType")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Header>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "allowReserved")]
    pub allow_reserved: Option<bool>,
}

pub type Responses = HttpStatuses<Response>;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Response {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Header>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, Link>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<ContentType, MediaType>>,
}

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        Response {
            description: description.into(),
            headers: None,
            links: None,
            content: None,
        }
    }

    pub fn with_content(mut self, content_type: ContentType, media: MediaType) -> Self {
        self.content
            .get_or_insert_with(BTreeMap::new)
            .insert(content_type, media);
        self
    }
}

/// Kept opaque: expression → path item, passed through untouched.
pub type Callback = BTreeMap<String, Any>;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Any>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "externalValue")]
    pub external_value: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none", rename = "operationRef")]
    pub operation_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "operationId")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Any>>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "requestBody")]
    pub request_body: Option<Any>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Header {
    #[serde(default)]
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "allowEmptyValue")]
    pub allow_empty_value: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "schema", alias = "schema_")]
    pub schema_: Option<Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Any>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<BTreeMap<String, Example>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none", rename = "externalDocs")]
    pub external_docs: Option<ExternalDocumentation>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            description: String::new(),
            external_docs: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Schema {
    // Points into `components/schemas`; see `Schema::component`.
    #[serde(skip_serializing_if = "Option::is_none", rename = "$ref")]
    pub r#ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<PropertyFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "additionalProperties"
    )]
    pub additional_properties: Option<Box<BooleanOr<Schema>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#enum: Option<Vec<Any>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Any>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Any>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "readOnly")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "writeOnly")]
    pub write_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "multipleOf")]
    pub multiple_of: Option<serde_json::Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<serde_json::Number>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "exclusiveMinimum")]
    pub exclusive_minimum: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<serde_json::Number>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "exclusiveMaximum")]
    pub exclusive_maximum: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "minLength")]
    pub min_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "maxLength")]
    pub max_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "minItems")]
    pub min_items: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "maxItems")]
    pub max_items: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "uniqueItems")]
    pub unique_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "minProperties")]
    pub min_properties: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "maxProperties")]
    pub max_properties: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "allOf")]
    pub all_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "anyOf")]
    pub any_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "oneOf")]
    pub one_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "not", alias = "not_")]
    pub not_: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "externalDocs")]
    pub external_docs: Option<ExternalDocumentation>,
}

impl Schema {
    pub fn new(r#type: SchemaType) -> Self {
        Schema {
            r#type: Some(r#type),
            ..Default::default()
        }
    }

    /// A `$ref` to a schema registered under `components/schemas`.
    pub fn component(name: &str) -> Self {
        Schema {
            r#ref: Some(format!("#/components/schemas/{name}")),
            ..Default::default()
        }
    }

    pub fn array(items: Schema) -> Self {
        Schema {
            r#type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Schema {
            r#type: Some(SchemaType::Object),
            properties: Some(
                properties
                    .into_iter()
                    .map(|(k, v)| (k.into(), v))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: PropertyFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets `required`, keeping the first occurrence of repeated names.
    pub fn with_required<I, K>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut names: Vec<String> = vec![];
        for name in required.into_iter().map(Into::into) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        self.required = Some(names);
        self
    }

    pub fn is_reference(&self) -> bool {
        self.r#ref.is_some()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Discriminator {
    #[serde(rename = "propertyName")]
    pub property_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Xml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    #[serde(rename = "apiKey")]
    ApiKey(SecuritySchemeApiKey),

    #[serde(rename = "http")]
    Http(SecuritySchemeHttp),

    #[serde(rename = "oauth2")]
    OAuth2(SecuritySchemeOAuth2),

    #[serde(rename = "openIdConnect")]
    OpenIdConnect(SecuritySchemeOpenIdConnect),
}

impl SecurityScheme {
    pub fn kind(&self) -> SecuritySchemeType {
        match self {
            SecurityScheme::ApiKey(_) => SecuritySchemeType::ApiKey,
            SecurityScheme::Http(_) => SecuritySchemeType::Http,
            SecurityScheme::OAuth2(_) => SecuritySchemeType::OAuth2,
            SecurityScheme::OpenIdConnect(_) => SecuritySchemeType::OpenIdConnect,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SecuritySchemeApiKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub name: String,

    #[serde(rename = "in", alias = "in_")]
    pub in_: SecuritySchemeLocation,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SecuritySchemeHttp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub scheme: String,

    #[serde(skip_serializing_if = "Option::is_none", rename = "bearerFormat")]
    pub bearer_format: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SecuritySchemeOAuth2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub flows: OAuthFlows,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SecuritySchemeOpenIdConnect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "openIdConnectUrl")]
    pub open_id_connect_url: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "clientCredentials")]
    pub client_credentials: Option<OAuthFlow>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "authorizationCode")]
    pub authorization_code: Option<OAuthFlow>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none", rename = "authorizationUrl")]
    pub authorization_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "tokenUrl")]
    pub token_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", rename = "refreshUrl")]
    pub refresh_url: Option<String>,

    #[serde(default)]
    pub scopes: BTreeMap<String, String>,
}

/// Kept opaque: scheme name → required scopes.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;
