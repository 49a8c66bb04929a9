#![deny(missing_docs)]

//! # Metamodel Contract
//!
//! - **types**: type and member descriptors.
//! - **loader**: the `SpecificationLoader` read contract and the in-memory `Metamodel`.

pub mod loader;
pub mod types;

pub use loader::{Metamodel, MetamodelDump, SpecificationLoader};
pub use types::{
    ActionDescriptor, ActionSemantics, ActionType, CollectionDescriptor, Member, NatureOfService,
    ParameterDescriptor, PropertyDescriptor, RuntimeClass, TypeDescriptor, TypeKind,
};
