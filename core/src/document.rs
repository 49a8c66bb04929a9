#![deny(missing_docs)]

//! # Generated Document
//!
//! Paths, operations and definitions of one generated API description.
//! Maps preserve insertion order so that identical inputs yield identical
//! output.

use crate::caching::Caching;
use crate::schema::Schema;
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// HTTP methods the generator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Lower-case key used in the Paths object.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    /// URL path segment.
    Path,
    /// URL query string.
    Query,
    /// Request body.
    Body,
}

impl ParameterLocation {
    /// Wire name (`in` field).
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Body => "body",
        }
    }
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Location.
    pub location: ParameterLocation,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Body schema; path and query parameters are plain strings.
    pub schema: Option<Schema>,
}

impl Parameter {
    /// Required string path parameter.
    pub fn path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Path,
            description: None,
            required: true,
            schema: None,
        }
    }

    /// Optional string query parameter.
    pub fn query(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Query,
            description: Some(description.into()),
            required: false,
            schema: None,
        }
    }

    /// Body parameter with the given schema.
    pub fn body(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Body,
            description: None,
            required: true,
            schema: Some(schema),
        }
    }
}

/// A response header declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Description.
    pub description: String,
    /// Default (and expected) value.
    pub default_value: String,
}

/// A response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Description.
    pub description: String,
    /// Body schema.
    pub schema: Option<Schema>,
    /// Declared headers.
    pub headers: IndexMap<String, Header>,
}

impl Response {
    /// A response declaring the `Cache-Control` header of `caching`.
    pub fn new(caching: Caching) -> Self {
        let mut headers = IndexMap::new();
        headers.insert(
            Caching::HEADER.to_string(),
            Header {
                description: caching.description().to_string(),
                default_value: caching.header_value().to_string(),
            },
        );
        Self {
            description: "OK".to_string(),
            schema: None,
            headers,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the body schema.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// A single operation on a path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operation {
    /// Grouping tags.
    pub tags: Vec<String>,
    /// Description, citing the RO spec section.
    pub description: Option<String>,
    /// Response media types.
    pub produces: Vec<String>,
    /// Request media types.
    pub consumes: Vec<String>,
    /// Parameters, in order.
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code.
    pub responses: IndexMap<u16, Response>,
}

impl Operation {
    /// An empty operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a response media type.
    pub fn with_produces(mut self, media_type: impl Into<String>) -> Self {
        self.produces.push(media_type.into());
        self
    }

    /// Adds a request media type.
    pub fn with_consumes(mut self, media_type: impl Into<String>) -> Self {
        self.consumes.push(media_type.into());
        self
    }

    /// Appends a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Sets the response for a status code.
    pub fn with_response(mut self, status: u16, response: Response) -> Self {
        self.responses.insert(status, response);
        self
    }
}

/// The operations available on one path template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathItem {
    /// Operations keyed by method, in insertion order.
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl PathItem {
    /// A path item with a single operation.
    pub fn with(method: HttpMethod, operation: Operation) -> Self {
        let mut operations = IndexMap::new();
        operations.insert(method, operation);
        Self { operations }
    }

    /// The operation for `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.get(&method)
    }
}

/// Top-level document metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Optional description.
    pub description: Option<String>,
}

/// The aggregate output of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Metadata.
    pub info: Info,
    /// Base path every path template is relative to.
    pub base_path: String,
    /// Path templates in insertion order.
    pub paths: IndexMap<String, PathItem>,
    /// Named schema definitions in insertion order.
    pub definitions: IndexMap<String, Schema>,
}

impl GeneratedDocument {
    /// An empty document.
    pub fn new(info: Info, base_path: impl Into<String>) -> Self {
        Self {
            info,
            base_path: base_path.into(),
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
        }
    }

    /// The path item for a template, if present.
    pub fn path(&self, template: &str) -> Option<&PathItem> {
        self.paths.get(template)
    }

    /// The named definition, if present.
    pub fn definition(&self, name: &str) -> Option<&Schema> {
        self.definitions.get(name)
    }

    /// Every definition name referenced from any operation or definition.
    pub fn referenced_names(&self) -> IndexSet<String> {
        let mut refs = IndexSet::new();
        for item in self.paths.values() {
            for operation in item.operations.values() {
                for parameter in &operation.parameters {
                    if let Some(schema) = &parameter.schema {
                        schema.collect_refs(&mut refs);
                    }
                }
                for response in operation.responses.values() {
                    if let Some(schema) = &response.schema {
                        schema.collect_refs(&mut refs);
                    }
                }
            }
        }
        for schema in self.definitions.values() {
            schema.collect_refs(&mut refs);
        }
        refs
    }

    /// Referenced names that have no definition.
    pub fn dangling_references(&self) -> Vec<String> {
        self.referenced_names()
            .into_iter()
            .filter(|name| !self.definitions.contains_key(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> Info {
        Info {
            title: "Test".into(),
            version: "0.0.0".into(),
            description: None,
        }
    }

    #[test]
    fn test_response_declares_cache_header() {
        let response = Response::new(Caching::UserInfo);
        let header = response.headers.get("Cache-Control").unwrap();
        assert_eq!(header.default_value, "max-age=3600");
        assert_eq!(response.description, "OK");
    }

    #[test]
    fn test_dangling_references() {
        let mut doc = GeneratedDocument::new(info(), "/restful/");
        let op = Operation::new().with_response(
            200,
            Response::new(Caching::Transactional).with_schema(Schema::reference("CustomerRepr")),
        );
        doc.paths
            .insert("/x".into(), PathItem::with(HttpMethod::Get, op));
        assert_eq!(doc.dangling_references(), vec!["CustomerRepr".to_string()]);

        doc.definitions
            .insert("CustomerRepr".into(), Schema::empty_object());
        assert!(doc.dangling_references().is_empty());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Post.as_str(), "post");
    }
}
