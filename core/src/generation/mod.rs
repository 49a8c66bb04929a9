#![deny(missing_docs)]

//! # Generation
//!
//! Walks the metamodel and assembles a complete Swagger 2.0 description of
//! the Restful Objects API it implies.
//!
//! - **context**: per-call state and the reference bookkeeping.
//! - **supporting**: fixed RO supporting resources and link schemas.
//! - **types**: type-to-schema resolution.
//! - **services**: the domain service pass.
//! - **objects**: the domain object pass.
//! - **actions**: invoke paths shared by both passes.
//!
//! The passes run in a fixed order and follow the loader's enumeration order,
//! so the same metamodel always yields the same document.

pub mod actions;
pub mod context;
pub mod objects;
pub mod services;
pub mod supporting;
pub mod types;

use crate::document::{GeneratedDocument, Info};
use crate::error::AppResult;
use crate::metamodel::SpecificationLoader;
use crate::strategies::{ClassExcluder, DefaultClassExcluder, DefaultTagger, Tagger};
use crate::value_property::ValuePropertyFactory;
use crate::visibility::Visibility;
use context::GenerationContext;
use supporting::SupportingCaching;
use tracing::info;

pub use context::{orphans, ReferenceSet};

/// Default API version stamped into `info.version`.
pub const DEFAULT_API_VERSION: &str = "0.0.0";

/// Media types shared by object, service and invoke operations.
pub(crate) mod media {
    /// The framework's simplified representation.
    pub const ISIS_V1: &str = "application/json;profile=urn:org.apache.isis/v1";
    /// As `ISIS_V1`, without the `$$` metadata.
    pub const ISIS_V1_SUPPRESSED: &str =
        "application/json;profile=urn:org.apache.isis/v1;suppress=true";
    /// RO object representation.
    pub const RO_OBJECT: &str = "application/json;profile=urn:org.restfulobjects:repr-types/object";
    /// RO collection representation.
    pub const RO_OBJECT_COLLECTION: &str =
        "application/json;profile=urn:org.restfulobjects:repr-types/object-collection";
    /// RO action result representation.
    pub const RO_ACTION_RESULT: &str =
        "application/json;profile=urn:org.restfulobjects:repr-types/action-result";
    /// Request bodies.
    pub const JSON: &str = "application/json";
}

/// The orchestrator of one or more generation calls over a metamodel.
pub struct Generation<'a> {
    base_path: String,
    visibility: Visibility,
    api_version: String,
    loader: &'a dyn SpecificationLoader,
    value_properties: ValuePropertyFactory,
    class_excluder: Box<dyn ClassExcluder + 'a>,
    tagger: Box<dyn Tagger + 'a>,
}

impl<'a> Generation<'a> {
    /// A generator with the default strategies and value mappings.
    pub fn new(
        base_path: impl Into<String>,
        visibility: Visibility,
        loader: &'a dyn SpecificationLoader,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            visibility,
            api_version: DEFAULT_API_VERSION.to_string(),
            loader,
            value_properties: ValuePropertyFactory::new(),
            class_excluder: Box::new(DefaultClassExcluder::new()),
            tagger: Box::new(DefaultTagger::new()),
        }
    }

    /// Sets `info.version`.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Replaces the value property factory (e.g. one with plugins applied).
    pub fn with_value_properties(mut self, factory: ValuePropertyFactory) -> Self {
        self.value_properties = factory;
        self
    }

    /// Replaces the exclusion policy.
    pub fn with_class_excluder(mut self, excluder: impl ClassExcluder + 'a) -> Self {
        self.class_excluder = Box::new(excluder);
        self
    }

    /// Replaces the tagging policy.
    pub fn with_tagger(mut self, tagger: impl Tagger + 'a) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    /// The requested visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Produces one complete document.
    ///
    /// Fails, without a partial result, if an admitted type has no object type.
    pub fn generate(&self) -> AppResult<GeneratedDocument> {
        info!(
            visibility = %self.visibility,
            base_path = %self.base_path,
            types = self.loader.all_specifications().len(),
            "Generating Swagger spec"
        );

        let info = Info {
            title: format!("{} API", self.visibility),
            version: self.api_version.clone(),
            description: Some(format!(
                "Swagger spec generated from the Restful Objects metamodel; visibility: {}",
                self.visibility
            )),
        };
        let mut ctx = GenerationContext::new(GeneratedDocument::new(info, self.base_path.clone()));

        supporting::append_supporting_resources(&mut ctx, SupportingCaching::STANDARD);
        supporting::append_link_definitions(&mut ctx);
        self.append_service_paths_and_definitions(&mut ctx)?;
        self.append_object_paths_and_definitions(&mut ctx)?;
        let backfilled = ctx.backfill_orphans();

        let document = ctx.finish();
        info!(
            paths = document.paths.len(),
            definitions = document.definitions.len(),
            orphans = backfilled.len(),
            "Swagger spec generated"
        );
        Ok(document)
    }
}

impl std::fmt::Debug for Generation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generation")
            .field("base_path", &self.base_path)
            .field("visibility", &self.visibility)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}
