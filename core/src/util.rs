#![deny(missing_docs)]

//! # Membership & Visibility Utilities
//!
//! Stateless predicates deciding which types and members are exposed to an
//! audience, member enumeration with those filters applied, and a few
//! formatting helpers shared by the generators.

use crate::error::{AppError, AppResult};
use crate::metamodel::{
    ActionDescriptor, CollectionDescriptor, PropertyDescriptor, RuntimeClass, SpecificationLoader,
    TypeDescriptor,
};
use crate::strategies::ClassExcluder;
use crate::visibility::Visibility;

/// Citation of a Restful Objects spec section.
pub fn ro_spec(section: &str) -> String {
    format!("RO Spec v1.0, section {}", section)
}

/// The object type (identity facet) of a type.
///
/// A missing object type means the type was never fully introspected; that
/// is a precondition violation, not a recoverable condition.
pub fn object_type_for(ty: &TypeDescriptor) -> AppResult<&str> {
    ty.object_type
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::MissingObjectType {
            class_name: ty.class_name.clone(),
        })
}

/// The service id of a domain service (its object type).
pub fn service_id_for(ty: &TypeDescriptor) -> AppResult<&str> {
    object_type_for(ty)
}

/// True if the type may be shown to the public audience.
///
/// View models, values, raw collections, arrays and void are visible; a
/// collection type is visible when its element type is.
pub fn is_visible_for_public(ty: &TypeDescriptor, loader: &dyn SpecificationLoader) -> bool {
    let mut current = ty;
    // A well-formed element chain is acyclic, so it cannot be longer than the model.
    for _ in 0..=loader.all_specifications().len() {
        if current.view_model
            || current.is_value()
            || current.runtime_class().is_raw_collection_or_array_or_void()
        {
            return true;
        }
        match current.element_type().and_then(|e| loader.lookup(e)) {
            Some(element) if current.is_collection() => current = element,
            _ => return false,
        }
    }
    false
}

/// Visibility of a type referenced by class name.
///
/// Unresolved names are hidden unless their shape alone makes them visible.
fn is_class_visible_for_public(class_name: &str, loader: &dyn SpecificationLoader) -> bool {
    match loader.lookup(class_name) {
        Some(ty) => is_visible_for_public(ty, loader),
        // void, raw collections and arrays are visible by shape alone
        None => RuntimeClass::named(class_name).is_raw_collection_or_array_or_void(),
    }
}

/// True if the action may be shown to the public audience.
///
/// The return type, the element type of a returned collection, and every
/// parameter type must all be visible; one hidden parameter hides the action.
pub fn is_action_visible_for_public(
    action: &ActionDescriptor,
    loader: &dyn SpecificationLoader,
) -> bool {
    let return_visible = action
        .return_type
        .as_deref()
        .map_or(true, |r| is_class_visible_for_public(r, loader));
    let element_visible = action
        .element_type
        .as_deref()
        .map_or(true, |e| is_class_visible_for_public(e, loader));

    return_visible
        && element_visible
        && action
            .parameters
            .iter()
            .all(|p| is_class_visible_for_public(&p.type_name, loader))
}

/// True if the property may be shown to the public audience.
pub fn is_property_visible_for_public(
    property: &PropertyDescriptor,
    loader: &dyn SpecificationLoader,
) -> bool {
    is_class_visible_for_public(&property.type_name, loader)
}

/// True if the collection may be shown to the public audience.
pub fn is_collection_visible_for_public(
    collection: &CollectionDescriptor,
    loader: &dyn SpecificationLoader,
) -> bool {
    is_class_visible_for_public(&collection.element_type, loader)
}

/// Exposed properties of a type, in declaration order.
pub fn properties_of<'a>(
    ty: &'a TypeDescriptor,
    visibility: Visibility,
    loader: &dyn SpecificationLoader,
) -> Vec<&'a PropertyDescriptor> {
    ty.properties()
        .filter(|p| !visibility.is_public() || is_property_visible_for_public(p, loader))
        .collect()
}

/// Exposed collections of a type, in declaration order.
pub fn collections_of<'a>(
    ty: &'a TypeDescriptor,
    visibility: Visibility,
    loader: &dyn SpecificationLoader,
) -> Vec<&'a CollectionDescriptor> {
    ty.collections()
        .filter(|c| !visibility.is_public() || is_collection_visible_for_public(c, loader))
        .collect()
}

/// Exposed actions of a type, in declaration order.
///
/// Only the action types of `visibility` are considered; excluded actions
/// never appear, and at public visibility hidden actions are dropped.
pub fn actions_of<'a>(
    ty: &'a TypeDescriptor,
    visibility: Visibility,
    loader: &dyn SpecificationLoader,
    excluder: &dyn ClassExcluder,
) -> Vec<&'a ActionDescriptor> {
    let action_types = visibility.action_types();
    ty.actions()
        .filter(|a| action_types.contains(&a.action_type))
        .filter(|a| !excluder.exclude_action(a))
        .filter(|a| !visibility.is_public() || is_action_visible_for_public(a, loader))
        .collect()
}
