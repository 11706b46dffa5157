// https://spec.openapis.org/oas/v3.0.1

use crate::error::ConstructionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed value domain whose variants travel as fixed strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($domain:tt) {
            $($variant:ident => $wire:tt,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConstructionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ConstructionError::unknown_variant($domain, s)),
                }
            }
        }
    };
}

wire_enum! {
    /// Media types usable as `content` keys.
    pub enum ContentType ("content type") {
        Any => "*/*",
        Json => "application/json",
        Application => "application/*",
        Xml => "application/xml",
        FormUrlEncoded => "application/x-www-form-urlencoded",
        OctetStream => "application/octet-stream",
        Html => "text/html",
        Plain => "text/plain",
        TextCsv => "text/csv",
        MultipartFormData => "multipart/form-data",
    }
}

wire_enum! {
    // https://spec.openapis.org/oas/v3.0.1#parameter-locations
    pub enum ParameterLocation ("parameter location") {
        Query => "query",
        Header => "header",
        Path => "path",
        Cookie => "cookie",
    }
}

wire_enum! {
    pub enum SecuritySchemeLocation ("security scheme location") {
        Query => "query",
        Header => "header",
        Cookie => "cookie",
    }
}

wire_enum! {
    pub enum SchemaType ("schema type") {
        Null => "null",
        Integer => "integer",
        String => "string",
        Object => "object",
        Array => "array",
        Number => "number",
        Boolean => "boolean",
    }
}

wire_enum! {
    // https://spec.openapis.org/oas/v3.0.1#data-types
    pub enum PropertyFormat ("property format") {
        Int32 => "int32",
        Int64 => "int64",
        Float => "float",
        Double => "double",
        Byte => "byte",
        Binary => "binary",
        Date => "date",
        DateTime => "date-time",
        Password => "password",
    }
}

wire_enum! {
    pub enum SecuritySchemeType ("security scheme type") {
        ApiKey => "apiKey",
        Http => "http",
        OAuth2 => "oauth2",
        OpenIdConnect => "openIdConnect",
    }
}

wire_enum! {
    /// Operation slots of a path item.
    pub enum HttpMethod ("HTTP method") {
        Get => "get",
        Put => "put",
        Post => "post",
        Delete => "delete",
        Options => "options",
        Head => "head",
        Patch => "patch",
        Trace => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_wire_string() {
        assert_eq!("application/json", ContentType::Json.as_str());
        assert_eq!(
            "\"multipart/form-data\"",
            serde_json::to_string(&ContentType::MultipartFormData).unwrap()
        );
    }

    #[test]
    fn content_type_from_str() {
        assert_eq!(Ok(ContentType::Any), "*/*".parse::<ContentType>());
        assert_eq!(
            Err(ConstructionError::unknown_variant(
                "content type",
                "image/png"
            )),
            "image/png".parse::<ContentType>()
        );
    }

    #[test]
    fn every_variant_parses_back() {
        for m in HttpMethod::ALL {
            assert_eq!(Ok(*m), m.as_str().parse::<HttpMethod>());
        }
        for t in SchemaType::ALL {
            assert_eq!(Ok(*t), t.to_string().parse::<SchemaType>());
        }
    }

    #[test]
    fn serde_parameter_location() {
        let r = serde_json::from_str::<ParameterLocation>("\"cookie\"").unwrap();
        assert_eq!(ParameterLocation::Cookie, r);
        assert!(serde_json::from_str::<ParameterLocation>("\"body\"").is_err());
    }

    #[test]
    fn serde_security_scheme_location_rejects_path() {
        assert!(serde_json::from_str::<SecuritySchemeLocation>("\"path\"").is_err());
    }

    #[test]
    fn display_property_format() {
        assert_eq!("date-time", PropertyFormat::DateTime.to_string());
    }
}
