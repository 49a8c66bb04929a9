#![deny(missing_docs)]

//! # Value Property Factory
//!
//! Maps scalar runtime types to inline primitive schemas.
//! Handles the built-in value types, application enums, and any custom value
//! types registered by plugins. Types with no mapping are references to other
//! generated schemas; absence is the only negative signal.

use crate::metamodel::RuntimeClass;
use crate::schema::{PrimitiveType, Schema};

/// Decides whether a custom mapping applies to a runtime class.
pub type ValuePredicate = Box<dyn Fn(&RuntimeClass<'_>) -> bool>;

/// Builds the schema for a runtime class accepted by the paired predicate.
pub type ValueConstructor = Box<dyn Fn(&RuntimeClass<'_>) -> Schema>;

/// Contributes custom value type mappings to a factory.
pub trait ValuePropertyPlugin {
    /// Registers this plugin's mappings.
    fn register(&self, factory: &mut ValuePropertyFactory);
}

/// Resolves runtime classes to primitive schemas.
///
/// Custom mappings are consulted first, in registration order, before the
/// built-in table.
#[derive(Default)]
pub struct ValuePropertyFactory {
    custom: Vec<(ValuePredicate, ValueConstructor)>,
}

impl ValuePropertyFactory {
    /// A factory with only the built-in mappings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom `(predicate, constructor)` mapping.
    pub fn register<P, C>(&mut self, predicate: P, constructor: C)
    where
        P: Fn(&RuntimeClass<'_>) -> bool + 'static,
        C: Fn(&RuntimeClass<'_>) -> Schema + 'static,
    {
        self.custom.push((Box::new(predicate), Box::new(constructor)));
    }

    /// Applies a plugin, builder style.
    pub fn with_plugin(mut self, plugin: &dyn ValuePropertyPlugin) -> Self {
        plugin.register(&mut self);
        self
    }

    /// The primitive schema for `class`, or `None` if it is not a value type.
    pub fn resolve(&self, class: &RuntimeClass<'_>) -> Option<Schema> {
        if let Some((_, constructor)) = self.custom.iter().find(|(accepts, _)| accepts(class)) {
            return Some(constructor(class));
        }
        if let Some(schema) = builtin(class.name) {
            return Some(schema);
        }
        class
            .enum_constants
            .map(|constants| Schema::string_enum(constants.iter().cloned()))
    }

    /// Convenience for a plain class name.
    pub fn resolve_name(&self, class_name: &str) -> Option<Schema> {
        self.resolve(&RuntimeClass::named(class_name))
    }
}

impl std::fmt::Debug for ValuePropertyFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValuePropertyFactory")
            .field("custom", &self.custom.len())
            .finish()
    }
}

/// True if the built-in table has a mapping for `class_name`.
pub fn is_builtin_value_class(class_name: &str) -> bool {
    builtin(class_name).is_some()
}

/// The built-in table, keyed by exact class name.
fn builtin(class_name: &str) -> Option<Schema> {
    use PrimitiveType::*;

    let schema = match class_name {
        "boolean" | "java.lang.Boolean" => Schema::primitive(Boolean),

        "byte" | "java.lang.Byte" | "short" | "java.lang.Short" | "int"
        | "java.lang.Integer" => Schema::formatted(Integer, "int32"),
        "long" | "java.lang.Long" | "java.math.BigInteger" => Schema::formatted(Integer, "int64"),

        "java.math.BigDecimal" => Schema::primitive(Number),
        "float" | "java.lang.Float" => Schema::formatted(Number, "float"),
        "double" | "java.lang.Double" => Schema::formatted(Number, "double"),

        "char" | "java.lang.Character" | "java.lang.String" => Schema::primitive(String),
        "java.util.UUID" => Schema::formatted(String, "uuid"),

        "java.time.LocalDate" | "org.joda.time.LocalDate" | "java.sql.Date" => {
            Schema::formatted(String, "date")
        }
        "java.util.Date"
        | "java.sql.Timestamp"
        | "java.time.LocalDateTime"
        | "java.time.OffsetDateTime"
        | "java.time.ZonedDateTime"
        | "org.joda.time.DateTime"
        | "org.joda.time.LocalDateTime" => Schema::formatted(String, "date-time"),

        // Binary content travels base64 encoded
        "byte[]"
        | "java.lang.Byte[]"
        | "org.apache.isis.applib.value.Blob"
        | "org.apache.isis.applib.value.Clob" => Schema::formatted(String, "byte"),

        _ => return None,
    };
    Some(schema)
}
