#![deny(missing_docs)]

//! # Action Invoke Paths
//!
//! One invoke path per exposed action, for services and objects alike.
//!
//! The action's semantics choose the protocol shape:
//! - safe: `GET`, arguments as query parameters plus the combined
//!   `x-isis-querystring` parameter when there is at least one argument;
//! - idempotent: `PUT` with a JSON body;
//! - otherwise: `POST` with a JSON body.
//!
//! A body has one entry per parameter, each wrapping its argument in `value`.

use crate::caching::Caching;
use crate::document::{HttpMethod, Operation, Parameter, Response};
use crate::error::AppResult;
use crate::generation::context::GenerationContext;
use crate::generation::{media, Generation};
use crate::metamodel::{ActionDescriptor, TypeDescriptor};
use crate::schema::{ObjectSchema, Schema};
use crate::util::ro_spec;
use tracing::debug;

/// Name of the query parameter carrying every argument, base64 encoded.
pub const QUERYSTRING_PARAM: &str = "x-isis-querystring";

/// Name of the path parameter identifying an object instance.
pub const OBJECT_ID_PARAM: &str = "objectId";

/// The resource an action is invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeTarget<'a> {
    /// A domain service, by service id.
    Service(&'a str),
    /// An instance of a domain object type, by object type.
    Object(&'a str),
}

impl InvokeTarget<'_> {
    /// Identifier of the owning type.
    pub fn owner_id(&self) -> &str {
        match self {
            InvokeTarget::Service(id) | InvokeTarget::Object(id) => id,
        }
    }

    /// Path template of the invoke resource.
    pub fn invoke_path(&self, action_id: &str) -> String {
        match self {
            InvokeTarget::Service(id) => format!("/services/{}/actions/{}/invoke", id, action_id),
            InvokeTarget::Object(id) => format!(
                "/objects/{}/{{{}}}/actions/{}/invoke",
                id, OBJECT_ID_PARAM, action_id
            ),
        }
    }
}

/// HTTP method implied by the action's semantics.
pub fn invoke_method(action: &ActionDescriptor) -> HttpMethod {
    if action.semantics.is_safe_in_nature() {
        HttpMethod::Get
    } else if action.semantics.is_idempotent_in_nature() {
        HttpMethod::Put
    } else {
        HttpMethod::Post
    }
}

impl Generation<'_> {
    /// Appends the invoke path of `action` on `owner`.
    pub(crate) fn append_invoke_path(
        &self,
        ctx: &mut GenerationContext,
        owner: &TypeDescriptor,
        target: InvokeTarget<'_>,
        action: &ActionDescriptor,
    ) -> AppResult<()> {
        let owner_id = target.owner_id();
        let method = invoke_method(action);
        debug!(owner = %owner_id, action = %action.id, %method, "Appending invoke path");

        let mut description = format!(
            "{}: (invoke) resource of {}#{}",
            ro_spec("19.1"),
            owner_id,
            action.id
        );
        if let Some(text) = action.description.as_deref().filter(|d| !d.is_empty()) {
            description.push_str(". ");
            description.push_str(text);
        }

        let mut operation = Operation::new()
            .with_tag(self.tagger.tag_for(&owner.class_name, Some(owner_id)))
            .with_description(description)
            .with_produces(media::ISIS_V1)
            .with_produces(media::ISIS_V1_SUPPRESSED)
            .with_produces(media::RO_ACTION_RESULT);

        if let InvokeTarget::Object(_) = target {
            operation = operation.with_parameter(Parameter::path(OBJECT_ID_PARAM));
        }

        operation = match method {
            HttpMethod::Get => with_query_parameters(operation, action),
            _ => operation
                .with_consumes(media::JSON)
                .with_parameter(Parameter::body("body", self.body_schema(ctx, action))),
        };

        let response = Response::new(Caching::Transactional)
            .with_description(format!("{}#{}", owner_id, action.id))
            .with_schema(self.action_return_schema(ctx, action)?);
        operation = operation.with_response(200, response);

        ctx.add_operation(target.invoke_path(&action.id), method, operation);
        Ok(())
    }

    /// Object schema with one `{ value }` entry per parameter.
    fn body_schema(&self, ctx: &mut GenerationContext, action: &ActionDescriptor) -> Schema {
        let body = action
            .parameters
            .iter()
            .fold(ObjectSchema::new(), |body, parameter| {
                let mut entry = ObjectSchema::new()
                    .with_property("value", self.property_schema(ctx, &parameter.type_name));
                if let Some(text) = &parameter.description {
                    entry = entry.with_description(text.clone());
                }
                body.with_property(parameter.id.clone(), Schema::Object(entry))
            });
        Schema::Object(body)
    }
}

/// One query parameter per declared parameter, plus the combined one.
fn with_query_parameters(operation: Operation, action: &ActionDescriptor) -> Operation {
    let mut operation = action.parameters.iter().fold(operation, |op, parameter| {
        let description = match parameter.description.as_deref() {
            Some(text) if !text.is_empty() => format!("{}: {}", ro_spec("2.9.1"), text),
            _ => ro_spec("2.9.1"),
        };
        op.with_parameter(Parameter::query(parameter.id.clone(), description))
    });

    if !action.parameters.is_empty() {
        operation = operation.with_parameter(Parameter::query(
            QUERYSTRING_PARAM,
            format!(
                "{}: all (formal) arguments as base64 encoded string",
                ro_spec("2.10")
            ),
        ));
    }
    operation
}
