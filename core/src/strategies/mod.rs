#![deny(missing_docs)]

//! # Strategies
//!
//! Pluggable policies injected into the generator.
//!
//! - **traits**: `ClassExcluder` and `Tagger`.
//! - **defaults**: prefix-based exclusion and package-based tagging.

pub mod defaults;
pub mod traits;

// Re-export for easier access downstream
pub use defaults::{DefaultClassExcluder, DefaultTagger};
pub use traits::{ClassExcluder, Tagger};
