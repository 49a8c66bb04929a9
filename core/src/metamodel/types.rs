#![deny(missing_docs)]

//! # Metamodel Descriptors
//!
//! Read-only view of the introspected domain model.
//!
//! Member kinds and type kinds are closed enums, resolved once when the
//! metamodel is loaded, so the generator matches on them instead of probing
//! facets repeatedly.

use serde::{Deserialize, Serialize};

/// Class names the runtime uses for "no value".
const VOID_CLASSES: &[&str] = &["void", "java.lang.Void"];

/// The untyped escape hatch.
const OBJECT_CLASS: &str = "java.lang.Object";

/// The raw enum supertype (not a concrete enum).
const RAW_ENUM_CLASS: &str = "java.lang.Enum";

/// Collection interfaces exposed without further detail.
const RAW_COLLECTION_CLASSES: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.SortedSet",
    "java.util.Map",
    "java.lang.Iterable",
];

/// Structural kind of a type, resolved during metamodel loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeKind {
    /// A value (scalar) type such as `String` or an application enum.
    Value,
    /// An addressable entity, view model or service.
    #[default]
    Reference,
    /// A parented or free-standing collection.
    Collection {
        /// Class name of the element type (the "type of" facet), if known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        element: Option<String>,
    },
}

/// How a domain service is surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NatureOfService {
    /// Menu actions in every viewer, plus contributions.
    View,
    /// Menu actions only.
    ViewMenuOnly,
    /// Contributed actions only; no menu of its own.
    ViewContributionsOnly,
    /// Menu actions exposed only through the REST API.
    ViewRestOnly,
    /// Internal domain service, never surfaced.
    Domain,
}

impl NatureOfService {
    /// True if the service contributes a menu of its own.
    pub fn is_menu_exposed(self) -> bool {
        matches!(
            self,
            NatureOfService::View | NatureOfService::ViewMenuOnly | NatureOfService::ViewRestOnly
        )
    }
}

/// Semantics of an action, which drive the HTTP method used to invoke it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ActionSemantics {
    /// Query-only; no side effects.
    Safe,
    /// Query-only and the result may be cached for the request.
    SafeAndRequestCacheable,
    /// Mutating, but repeat invocations have the same effect.
    Idempotent,
    /// As `Idempotent`, with a confirmation prompt in the UI.
    IdempotentAreYouSure,
    /// Mutating, with effects that accumulate.
    #[default]
    NonIdempotent,
    /// As `NonIdempotent`, with a confirmation prompt in the UI.
    NonIdempotentAreYouSure,
}

impl ActionSemantics {
    /// True for side-effect free actions.
    pub fn is_safe_in_nature(self) -> bool {
        matches!(
            self,
            ActionSemantics::Safe | ActionSemantics::SafeAndRequestCacheable
        )
    }

    /// True for mutating actions that may be repeated safely.
    pub fn is_idempotent_in_nature(self) -> bool {
        matches!(
            self,
            ActionSemantics::Idempotent | ActionSemantics::IdempotentAreYouSure
        )
    }
}

/// Audience category of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    /// Ordinary end-user action.
    #[default]
    User,
    /// Only available when prototyping.
    Prototype,
    /// Framework diagnostics.
    Debug,
}

/// A single action parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// Parameter identifier.
    pub id: String,
    /// Class name of the parameter type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A scalar (one-to-one) association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// Property identifier.
    pub id: String,
    /// Class name of the property type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A one-to-many association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDescriptor {
    /// Collection identifier.
    pub id: String,
    /// Class name of the element type.
    pub element_type: String,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An invokable action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    /// Action identifier.
    pub id: String,
    /// Class name of the return type; `None` means void.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Element type when the action returns a collection ("type of" facet).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    /// Declared parameters, in order.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Invocation semantics.
    #[serde(default)]
    pub semantics: ActionSemantics,
    /// Audience category.
    #[serde(default)]
    pub action_type: ActionType,
    /// Class name of the mixin or service contributing this action, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributed_by: Option<String>,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "camelCase")]
pub enum Member {
    /// Scalar association.
    Property(PropertyDescriptor),
    /// One-to-many association.
    Collection(CollectionDescriptor),
    /// Invokable action.
    Action(ActionDescriptor),
}

impl Member {
    /// Member identifier regardless of kind.
    pub fn id(&self) -> &str {
        match self {
            Member::Property(p) => &p.id,
            Member::Collection(c) => &c.id,
            Member::Action(a) => &a.id,
        }
    }
}

/// One introspected domain type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Stable type identifier (the object type / service id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    /// Fully qualified runtime class name.
    pub class_name: String,
    /// Structural kind.
    #[serde(flatten)]
    pub kind: TypeKind,
    /// Present when the type is a domain service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature_of_service: Option<NatureOfService>,
    /// Contributes behaviour to another type.
    #[serde(default)]
    pub mixin: bool,
    /// Abstract types are never addressable.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// View models are always exposable.
    #[serde(default)]
    pub view_model: bool,
    /// Constants of an application enum, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_constants: Option<Vec<String>>,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties, collections and actions, in declaration order.
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeDescriptor {
    /// Creates a reference type with no members.
    pub fn new(object_type: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            object_type: Some(object_type.into()),
            class_name: class_name.into(),
            kind: TypeKind::Reference,
            nature_of_service: None,
            mixin: false,
            is_abstract: false,
            view_model: false,
            enum_constants: None,
            description: None,
            members: Vec::new(),
        }
    }

    /// Creates a value type, keyed only by its class name.
    pub fn value(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        Self {
            object_type: Some(class_name.clone()),
            kind: TypeKind::Value,
            ..Self::new(String::new(), class_name)
        }
    }

    /// Creates an application enum (a value type with constants).
    pub fn enumeration(class_name: impl Into<String>, constants: &[&str]) -> Self {
        Self {
            enum_constants: Some(constants.iter().map(|c| c.to_string()).collect()),
            ..Self::value(class_name)
        }
    }

    /// Marks the type as a domain service of the given nature.
    pub fn with_nature_of_service(mut self, nature: NatureOfService) -> Self {
        self.nature_of_service = Some(nature);
        self
    }

    /// Sets the structural kind.
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the type as a view model.
    pub fn with_view_model(mut self, view_model: bool) -> Self {
        self.view_model = view_model;
        self
    }

    /// Marks the type as a mixin.
    pub fn with_mixin(mut self, mixin: bool) -> Self {
        self.mixin = mixin;
        self
    }

    /// Marks the type as abstract.
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Appends a member.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Runtime class view used by the value property factory.
    pub fn runtime_class(&self) -> RuntimeClass<'_> {
        RuntimeClass {
            name: &self.class_name,
            enum_constants: self.enum_constants.as_deref(),
        }
    }

    /// True for domain services (a nature-of-service facet is present).
    pub fn is_service(&self) -> bool {
        self.nature_of_service.is_some()
    }

    /// True for value types.
    pub fn is_value(&self) -> bool {
        matches!(self.kind, TypeKind::Value)
    }

    /// True for parented or free-standing collections.
    pub fn is_collection(&self) -> bool {
        matches!(self.kind, TypeKind::Collection { .. })
    }

    /// Element class name of a collection type ("type of" facet).
    pub fn element_type(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Collection { element } => element.as_deref(),
            _ => None,
        }
    }

    /// Properties, in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.members.iter().filter_map(|m| match m {
            Member::Property(p) => Some(p),
            _ => None,
        })
    }

    /// Collections, in declaration order.
    pub fn collections(&self) -> impl Iterator<Item = &CollectionDescriptor> {
        self.members.iter().filter_map(|m| match m {
            Member::Collection(c) => Some(c),
            _ => None,
        })
    }

    /// Actions, in declaration order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.members.iter().filter_map(|m| match m {
            Member::Action(a) => Some(a),
            _ => None,
        })
    }
}

/// Borrowed view of a runtime class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeClass<'a> {
    /// Fully qualified class name.
    pub name: &'a str,
    /// Enum constants, when the class is an application enum.
    pub enum_constants: Option<&'a [String]>,
}

impl<'a> RuntimeClass<'a> {
    /// A plain class with no enum constants.
    pub fn named(name: &'a str) -> Self {
        Self {
            name,
            enum_constants: None,
        }
    }

    /// `void` or its boxed form.
    pub fn is_void(&self) -> bool {
        is_void_class(self.name)
    }

    /// Exactly `java.lang.Object`.
    pub fn is_object(&self) -> bool {
        self.name == OBJECT_CLASS
    }

    /// Exactly the raw enum supertype.
    pub fn is_raw_enum(&self) -> bool {
        self.name == RAW_ENUM_CLASS
    }

    /// An application enum.
    pub fn is_enum(&self) -> bool {
        self.enum_constants.is_some()
    }

    /// Raw collection interface, array or void.
    pub fn is_raw_collection_or_array_or_void(&self) -> bool {
        RAW_COLLECTION_CLASSES.contains(&self.name) || self.name.ends_with("[]") || self.is_void()
    }
}

/// True for `void` / `java.lang.Void`.
pub fn is_void_class(name: &str) -> bool {
    VOID_CLASSES.contains(&name)
}
