#![deny(missing_docs)]

//! # Rendering
//!
//! Serializes a `GeneratedDocument` to Swagger 2.0 JSON or YAML.
//! Key order follows the document, so output is byte-stable.

use crate::document::{
    GeneratedDocument, Header, Operation, Parameter, ParameterLocation, Response,
};
use crate::error::{AppError, AppResult};
use crate::schema::Schema;
use serde_json::{json, Map, Value};
use std::path::Path;
use std::str::FromStr;

/// Swagger version emitted in the `swagger` field.
pub const SWAGGER_VERSION: &str = "2.0";

/// Output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl Format {
    /// Infers the format from a file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl FromStr for Format {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(AppError::UnknownFormat(s.to_string())),
        }
    }
}

/// Renders the document in the requested format.
pub fn render(document: &GeneratedDocument, format: Format) -> AppResult<String> {
    let value = document_to_value(document);
    match format {
        Format::Json => serde_json::to_string_pretty(&value)
            .map_err(|e| AppError::Serialization(format!("Failed to render JSON: {}", e))),
        Format::Yaml => serde_yaml::to_string(&value)
            .map_err(|e| AppError::Serialization(format!("Failed to render YAML: {}", e))),
    }
}

/// The Swagger 2.0 object model of a document.
pub fn document_to_value(document: &GeneratedDocument) -> Value {
    let mut info = Map::new();
    info.insert("title".into(), json!(document.info.title));
    info.insert("version".into(), json!(document.info.version));
    if let Some(description) = &document.info.description {
        info.insert("description".into(), json!(description));
    }

    let mut paths = Map::new();
    for (template, item) in &document.paths {
        let operations: Map<String, Value> = item
            .operations
            .iter()
            .map(|(method, op)| (method.as_str().to_string(), operation_to_value(op)))
            .collect();
        paths.insert(template.clone(), Value::Object(operations));
    }

    let definitions: Map<String, Value> = document
        .definitions
        .iter()
        .map(|(name, schema)| (name.clone(), schema_to_value(schema)))
        .collect();

    json!({
        "swagger": SWAGGER_VERSION,
        "info": info,
        "basePath": document.base_path,
        "paths": paths,
        "definitions": definitions,
    })
}

/// A schema as a Swagger Schema Object.
pub fn schema_to_value(schema: &Schema) -> Value {
    let mut out = Map::new();
    match schema {
        Schema::Ref(name) => {
            out.insert("$ref".into(), json!(format!("#/definitions/{}", name)));
        }
        Schema::Object(o) => {
            out.insert("type".into(), json!("object"));
            insert_opt(&mut out, "description", o.description.as_deref());
            if !o.properties.is_empty() {
                let properties: Map<String, Value> = o
                    .properties
                    .iter()
                    .map(|(name, s)| (name.clone(), schema_to_value(s)))
                    .collect();
                out.insert("properties".into(), Value::Object(properties));
            }
            if !o.required.is_empty() {
                out.insert("required".into(), json!(o.required));
            }
        }
        Schema::Array(a) => {
            out.insert("type".into(), json!("array"));
            insert_opt(&mut out, "description", a.description.as_deref());
            out.insert("items".into(), schema_to_value(&a.items));
        }
        Schema::Primitive(p) => {
            out.insert("type".into(), json!(p.primitive.as_str()));
            insert_opt(&mut out, "format", p.format.as_deref());
            if !p.enum_values.is_empty() {
                out.insert("enum".into(), json!(p.enum_values));
            }
            insert_opt(&mut out, "description", p.description.as_deref());
        }
    }
    Value::Object(out)
}

fn operation_to_value(operation: &Operation) -> Value {
    let mut out = Map::new();
    if !operation.tags.is_empty() {
        out.insert("tags".into(), json!(operation.tags));
    }
    insert_opt(&mut out, "description", operation.description.as_deref());
    if !operation.consumes.is_empty() {
        out.insert("consumes".into(), json!(operation.consumes));
    }
    if !operation.produces.is_empty() {
        out.insert("produces".into(), json!(operation.produces));
    }
    if !operation.parameters.is_empty() {
        let parameters: Vec<Value> = operation.parameters.iter().map(parameter_to_value).collect();
        out.insert("parameters".into(), Value::Array(parameters));
    }
    let responses: Map<String, Value> = operation
        .responses
        .iter()
        .map(|(status, response)| (status.to_string(), response_to_value(response)))
        .collect();
    out.insert("responses".into(), Value::Object(responses));
    Value::Object(out)
}

fn parameter_to_value(parameter: &Parameter) -> Value {
    let mut out = Map::new();
    out.insert("name".into(), json!(parameter.name));
    out.insert("in".into(), json!(parameter.location.as_str()));
    insert_opt(&mut out, "description", parameter.description.as_deref());
    out.insert("required".into(), json!(parameter.required));
    match (parameter.location, &parameter.schema) {
        (ParameterLocation::Body, Some(schema)) => {
            out.insert("schema".into(), schema_to_value(schema));
        }
        _ => {
            out.insert("type".into(), json!("string"));
        }
    }
    Value::Object(out)
}

fn response_to_value(response: &Response) -> Value {
    let mut out = Map::new();
    out.insert("description".into(), json!(response.description));
    if !response.headers.is_empty() {
        let headers: Map<String, Value> = response
            .headers
            .iter()
            .map(|(name, header)| (name.clone(), header_to_value(header)))
            .collect();
        out.insert("headers".into(), Value::Object(headers));
    }
    if let Some(schema) = &response.schema {
        out.insert("schema".into(), schema_to_value(schema));
    }
    Value::Object(out)
}

fn header_to_value(header: &Header) -> Value {
    json!({
        "type": "string",
        "description": header.description,
        "default": header.default_value,
    })
}

fn insert_opt(out: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.insert(key.to_string(), json!(value));
    }
}
