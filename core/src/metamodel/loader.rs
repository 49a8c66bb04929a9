#![deny(missing_docs)]

//! # Specification Loader
//!
//! The read contract the generator consumes, plus an in-memory `Metamodel`
//! that implements it. A metamodel can be assembled from descriptors in code
//! or loaded from a YAML / JSON dump of an introspected application.

use crate::error::{AppError, AppResult};
use crate::metamodel::types::{is_void_class, Member, TypeDescriptor, TypeKind};
use crate::value_property::is_builtin_value_class;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Read access to the full set of introspected types.
///
/// Enumeration order must be stable for the lifetime of the loader; the
/// generator emits paths and definitions in exactly this order.
pub trait SpecificationLoader {
    /// Every type known to the metamodel, in load order.
    fn all_specifications(&self) -> &[TypeDescriptor];

    /// Looks a type up by its runtime class name.
    fn lookup(&self, class_name: &str) -> Option<&TypeDescriptor>;
}

/// On-disk shape of a metamodel dump.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetamodelDump {
    /// Introspected types.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

/// An immutable, fully-resolved metamodel.
#[derive(Debug, Clone, Default)]
pub struct Metamodel {
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

impl Metamodel {
    /// Builds a metamodel, checking that every type reference resolves.
    ///
    /// Void and built-in value classes referenced by members but not declared
    /// are registered implicitly, after the declared types. Any other dangling
    /// reference, or a class declared twice, is an error.
    pub fn new(types: Vec<TypeDescriptor>) -> AppResult<Self> {
        let mut model = Metamodel {
            types: Vec::with_capacity(types.len()),
            index: HashMap::new(),
        };

        for ty in types {
            model.insert(ty)?;
        }

        let referenced: Vec<String> = model
            .types
            .iter()
            .flat_map(referenced_classes)
            .map(str::to_string)
            .collect();

        for class_name in referenced {
            if model.index.contains_key(&class_name) {
                continue;
            }
            if is_void_class(&class_name) || is_builtin_value_class(&class_name) {
                debug!(class = %class_name, "Implicitly registering built-in type");
                model.insert(TypeDescriptor::value(class_name))?;
            } else {
                return Err(AppError::Metamodel(format!(
                    "Unresolved type reference '{}'",
                    class_name
                )));
            }
        }

        model.check_element_chains()?;
        Ok(model)
    }

    /// Parses a metamodel dump from YAML.
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        let dump: MetamodelDump = serde_yaml::from_str(yaml).map_err(|e| {
            AppError::Serialization(format!("Failed to parse metamodel YAML: {}", e))
        })?;
        Self::new(dump.types)
    }

    /// Parses a metamodel dump from JSON.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let dump: MetamodelDump = serde_json::from_str(json).map_err(|e| {
            AppError::Serialization(format!("Failed to parse metamodel JSON: {}", e))
        })?;
        Self::new(dump.types)
    }

    /// Number of registered types, including implicit ones.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Collection element chains must terminate.
    fn check_element_chains(&self) -> AppResult<()> {
        for start in &self.types {
            let mut seen = HashSet::new();
            let mut current = start;
            while let TypeKind::Collection {
                element: Some(element),
            } = &current.kind
            {
                if !seen.insert(current.class_name.as_str()) {
                    return Err(AppError::Metamodel(format!(
                        "Collection element chain of '{}' is cyclic",
                        start.class_name
                    )));
                }
                match self.lookup(element) {
                    Some(next) => current = next,
                    None => break,
                }
            }
        }
        Ok(())
    }

    fn insert(&mut self, ty: TypeDescriptor) -> AppResult<()> {
        if self.index.contains_key(&ty.class_name) {
            return Err(AppError::Metamodel(format!(
                "Type '{}' declared more than once",
                ty.class_name
            )));
        }
        self.index.insert(ty.class_name.clone(), self.types.len());
        self.types.push(ty);
        Ok(())
    }
}

impl SpecificationLoader for Metamodel {
    fn all_specifications(&self) -> &[TypeDescriptor] {
        &self.types
    }

    fn lookup(&self, class_name: &str) -> Option<&TypeDescriptor> {
        self.index.get(class_name).map(|&i| &self.types[i])
    }
}

/// Every class name a type refers to through its kind or members.
fn referenced_classes(ty: &TypeDescriptor) -> Vec<&str> {
    let mut names = Vec::new();
    if let TypeKind::Collection {
        element: Some(element),
    } = &ty.kind
    {
        names.push(element.as_str());
    }
    for member in &ty.members {
        match member {
            Member::Property(p) => names.push(p.type_name.as_str()),
            Member::Collection(c) => names.push(c.element_type.as_str()),
            Member::Action(a) => {
                names.extend(a.return_type.as_deref());
                names.extend(a.element_type.as_deref());
                names.extend(a.parameters.iter().map(|p| p.type_name.as_str()));
            }
        }
    }
    names
}
