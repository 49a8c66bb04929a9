#![deny(missing_docs)]

//! # Generation Strategy Traits
//!
//! Pluggable policies consulted by the generator: which types and actions are
//! framework internals to leave out, and which tag groups each operation.

use crate::metamodel::{ActionDescriptor, TypeDescriptor};

/// Decides which types and actions are excluded from the generated API.
///
/// Exclusion applies at every visibility level.
pub trait ClassExcluder {
    /// True if the type must not be exposed.
    fn exclude_type(&self, ty: &TypeDescriptor) -> bool;

    /// True if the action must not be exposed.
    fn exclude_action(&self, action: &ActionDescriptor) -> bool;
}

/// Groups operations under UI tags.
pub trait Tagger {
    /// Tag for an operation on the given class.
    ///
    /// # Arguments
    ///
    /// * `class_name` - Fully qualified class name of the owning type.
    /// * `fallback` - Tag to use when no rule applies.
    fn tag_for(&self, class_name: &str, fallback: Option<&str>) -> String;
}
