//! # Service Pass
//!
//! Domain services become `/services/{serviceId}` plus one invoke path per
//! exposed action. Which natures of service appear depends on the audience.

use crate::caching::Caching;
use crate::document::{HttpMethod, Operation, Response};
use crate::error::AppResult;
use crate::generation::actions::InvokeTarget;
use crate::generation::context::GenerationContext;
use crate::generation::supporting::array_of_links;
use crate::generation::types::repr_name;
use crate::generation::{media, Generation};
use crate::metamodel::{NatureOfService, TypeDescriptor};
use crate::schema::{ObjectSchema, Schema};
use crate::util::{actions_of, ro_spec, service_id_for};
use crate::visibility::Visibility;
use tracing::debug;

/// True if a service of this nature is part of the API at `visibility`.
pub fn admits_nature(visibility: Visibility, nature: NatureOfService) -> bool {
    if !nature.is_menu_exposed() {
        return false;
    }
    nature == NatureOfService::ViewRestOnly || !visibility.is_public()
}

impl Generation<'_> {
    pub(crate) fn append_service_paths_and_definitions(
        &self,
        ctx: &mut GenerationContext,
    ) -> AppResult<()> {
        for ty in self.loader.all_specifications() {
            let Some(nature) = ty.nature_of_service else {
                continue;
            };
            if !admits_nature(self.visibility, nature) {
                debug!(class = %ty.class_name, ?nature, "Skipping service by nature");
                continue;
            }
            if self.class_excluder.exclude_type(ty) {
                debug!(class = %ty.class_name, "Skipping excluded service");
                continue;
            }

            let actions = actions_of(
                ty,
                self.visibility,
                self.loader,
                &*self.class_excluder,
            );
            if actions.is_empty() {
                debug!(class = %ty.class_name, "Skipping service without exposed actions");
                continue;
            }

            let service_id = service_id_for(ty)?;
            self.append_service_path(ctx, ty, service_id);
            for action in actions {
                self.append_invoke_path(ctx, ty, InvokeTarget::Service(service_id), action)?;
            }
        }
        Ok(())
    }

    fn append_service_path(
        &self,
        ctx: &mut GenerationContext,
        ty: &TypeDescriptor,
        service_id: &str,
    ) {
        let definition = repr_name(service_id);
        let schema = ctx.reference(definition.clone());

        let operation = Operation::new()
            .with_tag(self.tagger.tag_for(&ty.class_name, Some(service_id)))
            .with_description(ro_spec("15.1"))
            .with_produces(media::RO_OBJECT)
            .with_produces(media::ISIS_V1)
            .with_produces(media::ISIS_V1_SUPPRESSED)
            .with_response(
                200,
                Response::new(Caching::Transactional)
                    .with_description(service_id)
                    .with_schema(schema),
            );
        ctx.add_operation(format!("/services/{}", service_id), HttpMethod::Get, operation);

        let repr = ObjectSchema::new()
            .with_description(format!("{} ({})", service_id, ty.class_name))
            .with_property("title", Schema::string())
            .with_property("serviceId", Schema::string())
            .with_property("members", Schema::empty_object())
            .with_property("links", array_of_links(ctx))
            .with_required("title")
            .with_required("serviceId");
        ctx.define(definition, Schema::Object(repr));
    }
}
