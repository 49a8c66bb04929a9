#![deny(missing_docs)]

//! # Schema Values
//!
//! The generator's own schema representation. Values are built once and not
//! mutated after being placed in a document; `render` translates them to the
//! Swagger 2.0 wire shape.

use indexmap::{IndexMap, IndexSet};

/// JSON primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// `boolean`
    Boolean,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `string`
    String,
}

impl PrimitiveType {
    /// Wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::String => "string",
        }
    }
}

/// An inline scalar schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveSchema {
    /// The JSON type.
    pub primitive: PrimitiveType,
    /// Optional format (`int64`, `date-time`, `uuid`, ...).
    pub format: Option<String>,
    /// Allowed values; empty means unrestricted.
    pub enum_values: Vec<String>,
    /// Optional description.
    pub description: Option<String>,
}

/// An object schema with named properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectSchema {
    /// Optional description.
    pub description: Option<String>,
    /// Properties in insertion order.
    pub properties: IndexMap<String, Schema>,
    /// Names of required properties.
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// An object schema with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds (or replaces) a property.
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Marks a property as required. Duplicates are ignored.
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }
}

/// An array schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySchema {
    /// Schema of each element.
    pub items: Box<Schema>,
    /// Optional description.
    pub description: Option<String>,
}

/// A schema: a named reference or an inline definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// Reference to a named definition.
    Ref(String),
    /// Inline object.
    Object(ObjectSchema),
    /// Inline array.
    Array(ArraySchema),
    /// Inline scalar.
    Primitive(PrimitiveSchema),
}

impl Schema {
    /// Reference to the named definition.
    pub fn reference(name: impl Into<String>) -> Self {
        Schema::Ref(name.into())
    }

    /// `{"type": "object"}` with nothing else.
    pub fn empty_object() -> Self {
        Schema::Object(ObjectSchema::new())
    }

    /// Array whose elements match `items`.
    pub fn array_of(items: Schema) -> Self {
        Schema::Array(ArraySchema {
            items: Box::new(items),
            description: None,
        })
    }

    /// Unformatted scalar of the given type.
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Schema::Primitive(PrimitiveSchema {
            primitive,
            format: None,
            enum_values: Vec::new(),
            description: None,
        })
    }

    /// Scalar of the given type and format.
    pub fn formatted(primitive: PrimitiveType, format: &str) -> Self {
        Schema::Primitive(PrimitiveSchema {
            primitive,
            format: Some(format.to_string()),
            enum_values: Vec::new(),
            description: None,
        })
    }

    /// Plain string.
    pub fn string() -> Self {
        Self::primitive(PrimitiveType::String)
    }

    /// String restricted to the given values, in order.
    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema::Primitive(PrimitiveSchema {
            primitive: PrimitiveType::String,
            format: None,
            enum_values: values.into_iter().map(Into::into).collect(),
            description: None,
        })
    }

    /// Sets the description on any inline schema. References are returned unchanged.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Schema::Ref(_) => {}
            Schema::Object(o) => o.description = Some(text.into()),
            Schema::Array(a) => a.description = Some(text.into()),
            Schema::Primitive(p) => p.description = Some(text.into()),
        }
        self
    }

    /// Name of the referenced definition, if this is a reference.
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            Schema::Ref(name) => Some(name),
            _ => None,
        }
    }

    /// Collects every definition name referenced anywhere in this schema tree.
    pub fn collect_refs(&self, out: &mut IndexSet<String>) {
        match self {
            Schema::Ref(name) => {
                out.insert(name.clone());
            }
            Schema::Object(o) => {
                for property in o.properties.values() {
                    property.collect_refs(out);
                }
            }
            Schema::Array(a) => a.items.collect_refs(out),
            Schema::Primitive(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_deduplicated() {
        let o = ObjectSchema::new()
            .with_property("rel", Schema::string())
            .with_required("rel")
            .with_required("rel");
        assert_eq!(o.required, vec!["rel".to_string()]);
    }

    #[test]
    fn test_collect_refs_nested() {
        let schema = Schema::Object(
            ObjectSchema::new()
                .with_property("links", Schema::array_of(Schema::reference("LinkRepr")))
                .with_property("owner", Schema::reference("HrefRepr"))
                .with_property("name", Schema::string()),
        );
        let mut refs = IndexSet::new();
        schema.collect_refs(&mut refs);
        let refs: Vec<_> = refs.into_iter().collect();
        assert_eq!(refs, vec!["LinkRepr".to_string(), "HrefRepr".to_string()]);
    }

    #[test]
    fn test_description_ignored_on_reference() {
        let r = Schema::reference("X").with_description("ignored");
        assert_eq!(r, Schema::Ref("X".into()));
    }
}
