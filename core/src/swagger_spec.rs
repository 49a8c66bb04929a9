#![deny(missing_docs)]

//! # Supporting Resources Spec
//!
//! A standalone document describing only the Restful Objects supporting
//! resources and the link schemas, independent of any metamodel.

use crate::document::{GeneratedDocument, Info};
use crate::generation::context::GenerationContext;
use crate::generation::supporting::{
    append_link_definitions, append_supporting_resources, SupportingCaching,
};
use crate::generation::DEFAULT_API_VERSION;
use tracing::info;

/// Title of the supporting-resources document.
pub const SUPPORTING_TITLE: &str = "Restful Objects supporting resources";

/// Generator for the supporting-resources document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerSpec {
    base_path: String,
    api_version: String,
}

impl SwaggerSpec {
    /// A generator for the given base path.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Sets `info.version`.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Produces the document. Home page and version are cached long term.
    pub fn generate(&self) -> GeneratedDocument {
        info!(base_path = %self.base_path, "Generating supporting resources spec");
        let info = Info {
            title: SUPPORTING_TITLE.to_string(),
            version: self.api_version.clone(),
            description: None,
        };
        let mut ctx = GenerationContext::new(GeneratedDocument::new(info, self.base_path.clone()));
        append_supporting_resources(&mut ctx, SupportingCaching::LONG_TERM);
        append_link_definitions(&mut ctx);
        ctx.backfill_orphans();
        ctx.finish()
    }
}
