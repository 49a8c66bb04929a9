//! # Object Pass
//!
//! Addressable domain object types become `/objects/{type}/{objectId}`, one
//! path per exposed collection, and one invoke path per exposed action.

use crate::caching::Caching;
use crate::document::{HttpMethod, Operation, Parameter, Response};
use crate::error::AppResult;
use crate::generation::actions::{InvokeTarget, OBJECT_ID_PARAM};
use crate::generation::context::GenerationContext;
use crate::generation::supporting::{array_of_links, LINK_REPR};
use crate::generation::types::repr_name;
use crate::generation::{media, Generation};
use crate::metamodel::{CollectionDescriptor, PropertyDescriptor, TypeDescriptor};
use crate::schema::{ObjectSchema, Schema};
use crate::util::{
    actions_of, collections_of, is_visible_for_public, object_type_for, properties_of, ro_spec,
};
use tracing::debug;

/// Definition name of a type's pure Restful Objects representation.
pub fn restful_objects_repr_name(object_type: &str) -> String {
    format!("{}RestfulObjectsRepr", object_type)
}

impl Generation<'_> {
    pub(crate) fn append_object_paths_and_definitions(
        &self,
        ctx: &mut GenerationContext,
    ) -> AppResult<()> {
        for ty in self.loader.all_specifications() {
            if !self.is_addressable(ty) {
                continue;
            }

            let properties = properties_of(ty, self.visibility, self.loader);
            let collections = collections_of(ty, self.visibility, self.loader);
            if properties.is_empty() && collections.is_empty() {
                debug!(class = %ty.class_name, "Skipping object without exposed state");
                continue;
            }

            let object_type = object_type_for(ty)?;
            self.append_object_path(ctx, ty, object_type, &properties, &collections)?;
            for collection in &collections {
                self.append_collection_path(ctx, ty, object_type, collection)?;
            }

            let actions = actions_of(ty, self.visibility, self.loader, &*self.class_excluder);
            for action in actions {
                self.append_invoke_path(ctx, ty, InvokeTarget::Object(object_type), action)?;
            }
        }
        Ok(())
    }

    /// Services, mixins, abstract and value types are never addressable;
    /// neither are excluded types or, at public visibility, hidden ones.
    fn is_addressable(&self, ty: &TypeDescriptor) -> bool {
        if ty.is_service() || ty.mixin || ty.is_abstract || ty.is_value() {
            return false;
        }
        if self.visibility.is_public() && !is_visible_for_public(ty, self.loader) {
            debug!(class = %ty.class_name, "Skipping object not visible to the public");
            return false;
        }
        if self.class_excluder.exclude_type(ty) {
            debug!(class = %ty.class_name, "Skipping excluded object");
            return false;
        }
        true
    }

    fn append_object_path(
        &self,
        ctx: &mut GenerationContext,
        ty: &TypeDescriptor,
        object_type: &str,
        properties: &[&PropertyDescriptor],
        collections: &[&CollectionDescriptor],
    ) -> AppResult<()> {
        let definition = repr_name(object_type);
        let schema = ctx.reference(definition.clone());

        let operation = Operation::new()
            .with_tag(self.tagger.tag_for(&ty.class_name, Some(object_type)))
            .with_description(ro_spec("14.1"))
            .with_parameter(Parameter::path(OBJECT_ID_PARAM))
            .with_produces(media::ISIS_V1)
            .with_produces(media::ISIS_V1_SUPPRESSED)
            .with_produces(media::RO_OBJECT)
            .with_response(
                200,
                Response::new(Caching::Transactional)
                    .with_description(format!(
                        "{} , if Accept: application/json;profile=urn:org.apache.isis/v1",
                        object_type
                    ))
                    .with_schema(schema),
            );
        ctx.add_operation(
            format!("/objects/{}/{{{}}}", object_type, OBJECT_ID_PARAM),
            HttpMethod::Get,
            operation,
        );

        let restful_objects = ObjectSchema::new()
            .with_description(ro_spec("14.4"))
            .with_property("title", Schema::string())
            .with_property("domainType", Schema::string_enum([object_type]))
            .with_property("instanceId", Schema::string())
            .with_property("members", Schema::empty_object())
            .with_property("links", array_of_links(ctx))
            .with_required("title")
            .with_required("domainType")
            .with_required("instanceId");
        ctx.define(
            restful_objects_repr_name(object_type),
            Schema::Object(restful_objects),
        );

        let mut repr = ObjectSchema::new()
            .with_description(format!("{} ({})", object_type, ty.class_name));
        for property in properties {
            let mut schema = self.property_schema(ctx, &property.type_name);
            if let Some(text) = &property.description {
                schema = schema.with_description(text.clone());
            }
            repr = repr.with_property(property.id.clone(), schema);
        }
        for collection in collections {
            let element = self.loader.lookup(&collection.element_type);
            let mut schema = self.array_schema_of(ctx, element)?;
            if let Some(text) = &collection.description {
                schema = schema.with_description(text.clone());
            }
            repr = repr.with_property(collection.id.clone(), schema);
        }
        repr = repr
            .with_property("$$href", Schema::string().with_description("link to this object"))
            .with_property("$$title", Schema::string().with_description("title of this object"))
            .with_property(
                "$$instanceId",
                Schema::string().with_description("instance id of this object"),
            )
            .with_property("$$ro", ctx.reference(LINK_REPR))
            .with_required("$$href")
            .with_required("$$title")
            .with_required("$$instanceId");
        ctx.define(definition, Schema::Object(repr));
        Ok(())
    }

    fn append_collection_path(
        &self,
        ctx: &mut GenerationContext,
        ty: &TypeDescriptor,
        object_type: &str,
        collection: &CollectionDescriptor,
    ) -> AppResult<()> {
        let mut description = ro_spec("17.1");
        if let Some(text) = collection.description.as_deref().filter(|d| !d.is_empty()) {
            description.push_str(": ");
            description.push_str(text);
        }

        let element = self.loader.lookup(&collection.element_type);
        let schema = self.array_schema_of(ctx, element)?;
        let operation = Operation::new()
            .with_tag(self.tagger.tag_for(&ty.class_name, Some(object_type)))
            .with_description(description)
            .with_parameter(Parameter::path(OBJECT_ID_PARAM))
            .with_produces(media::ISIS_V1)
            .with_produces(media::ISIS_V1_SUPPRESSED)
            .with_produces(media::RO_OBJECT_COLLECTION)
            .with_response(
                200,
                Response::new(Caching::Transactional)
                    .with_description(format!("{}.{}", object_type, collection.id))
                    .with_schema(schema),
            );
        ctx.add_operation(
            format!(
                "/objects/{}/{{{}}}/collections/{}",
                object_type, OBJECT_ID_PARAM, collection.id
            ),
            HttpMethod::Get,
            operation,
        );
        Ok(())
    }
}
