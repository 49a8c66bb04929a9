#![deny(missing_docs)]

//! # Swagger Service
//!
//! The entry point a host application calls: one configuration, any
//! metamodel, any visibility, rendered text out.

use crate::error::AppResult;
use crate::generation::{Generation, DEFAULT_API_VERSION};
use crate::metamodel::SpecificationLoader;
use crate::render::{render, Format};
use crate::swagger_spec::SwaggerSpec;
use crate::value_property::{ValuePropertyFactory, ValuePropertyPlugin};
use crate::visibility::Visibility;

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/restful/";

/// Settings shared by every generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerConfig {
    /// Base path of the Restful Objects viewer.
    pub base_path: String,
    /// Version stamped into `info.version`.
    pub api_version: String,
}

impl Default for SwaggerConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl SwaggerConfig {
    /// Sets the base path.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Sets the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }
}

/// Generates and renders API descriptions.
#[derive(Default)]
pub struct SwaggerService {
    config: SwaggerConfig,
    plugins: Vec<Box<dyn ValuePropertyPlugin>>,
}

impl SwaggerService {
    /// A service with the given configuration.
    pub fn new(config: SwaggerConfig) -> Self {
        Self {
            config,
            plugins: Vec::new(),
        }
    }

    /// Adds a value property plugin, applied on every call.
    pub fn with_plugin(mut self, plugin: impl ValuePropertyPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &SwaggerConfig {
        &self.config
    }

    /// Renders the API of `loader` as seen by `visibility`.
    pub fn generate(
        &self,
        loader: &dyn SpecificationLoader,
        visibility: Visibility,
        format: Format,
    ) -> AppResult<String> {
        let factory = self
            .plugins
            .iter()
            .fold(ValuePropertyFactory::new(), |factory, plugin| {
                factory.with_plugin(plugin.as_ref())
            });
        let document = Generation::new(self.config.base_path.clone(), visibility, loader)
            .with_api_version(self.config.api_version.clone())
            .with_value_properties(factory)
            .generate()?;
        render(&document, format)
    }

    /// Renders the supporting-resources document.
    pub fn generate_supporting(&self, format: Format) -> AppResult<String> {
        let document = SwaggerSpec::new(self.config.base_path.clone())
            .with_api_version(self.config.api_version.clone())
            .generate();
        render(&document, format)
    }
}

impl std::fmt::Debug for SwaggerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwaggerService")
            .field("config", &self.config)
            .field("plugins", &self.plugins.len())
            .finish()
    }
}
