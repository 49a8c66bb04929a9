#![deny(missing_docs)]

//! # Supporting Resources
//!
//! The fixed scaffolding every Restful Objects API exposes regardless of the
//! domain model: home page, user, services list and version, plus the shared
//! link schemas.

use crate::caching::Caching;
use crate::document::{HttpMethod, Operation, Response};
use crate::generation::context::GenerationContext;
use crate::schema::{ObjectSchema, Schema};
use crate::util::ro_spec;

/// Tag grouping the supporting resources.
pub const SUPPORTING_TAG: &str = ". restful objects supporting resources";

/// Definition name of the full hyperlink schema.
pub const LINK_REPR: &str = "LinkRepr";

/// Definition name of the abbreviated hyperlink schema.
pub const HREF_REPR: &str = "HrefRepr";

const HOME_PAGE_REPR: &str = "RestfulObjectsSupportingHomePageRepr";
const USER_REPR: &str = "RestfulObjectsSupportingUserRepr";
const SERVICES_REPR: &str = "RestfulObjectsSupportingServicesRepr";
const VERSION_REPR: &str = "RestfulObjectsSupportingVersionRepr";

/// Caching class of each supporting resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportingCaching {
    /// `/`
    pub home: Caching,
    /// `/user`
    pub user: Caching,
    /// `/services`
    pub services: Caching,
    /// `/version`
    pub version: Caching,
}

impl SupportingCaching {
    /// Used by the full generator.
    pub const STANDARD: SupportingCaching = SupportingCaching {
        home: Caching::NonExpiring,
        user: Caching::UserInfo,
        services: Caching::UserInfo,
        version: Caching::NonExpiring,
    };

    /// Used by the supporting-resources generator.
    pub const LONG_TERM: SupportingCaching = SupportingCaching {
        home: Caching::LongTerm,
        user: Caching::UserInfo,
        services: Caching::UserInfo,
        version: Caching::LongTerm,
    };
}

/// Appends `/`, `/user`, `/services` and `/version` with their definitions.
pub fn append_supporting_resources(ctx: &mut GenerationContext, caching: SupportingCaching) {
    append_supporting_path(ctx, "/", "5.1", "home-page", caching.home, HOME_PAGE_REPR);
    let home = ObjectSchema::new()
        .with_description(ro_spec("5.2"))
        .with_property("links", array_of_links(ctx))
        .with_property("extensions", Schema::empty_object())
        .with_required("links");
    ctx.define(HOME_PAGE_REPR, Schema::Object(home));

    append_supporting_path(ctx, "/user", "6.1", "user", caching.user, USER_REPR);
    let user = ObjectSchema::new()
        .with_description(ro_spec("6.2"))
        .with_property("userName", Schema::string())
        .with_property("friendlyName", Schema::string())
        .with_property("email", Schema::string())
        .with_property("roles", Schema::array_of(Schema::string()))
        .with_property("links", array_of_links(ctx))
        .with_required("userName")
        .with_required("roles");
    ctx.define(USER_REPR, Schema::Object(user));

    append_supporting_path(ctx, "/services", "7.1", "list", caching.services, SERVICES_REPR);
    let services = ObjectSchema::new()
        .with_description(ro_spec("7.2"))
        .with_property("value", array_of_links(ctx))
        .with_property("links", array_of_links(ctx))
        .with_property("extensions", Schema::empty_object())
        .with_required("value");
    ctx.define(SERVICES_REPR, Schema::Object(services));

    append_supporting_path(ctx, "/version", "8.1", "version", caching.version, VERSION_REPR);
    let capabilities = ObjectSchema::new()
        .with_property("blobsClobs", Schema::string())
        .with_property("deleteObjects", Schema::string())
        .with_property("domainModel", Schema::string())
        .with_property("validateOnly", Schema::string())
        .with_property("protoPersistentObjects", Schema::string());
    let version = ObjectSchema::new()
        .with_description(ro_spec("8.2"))
        .with_property("specVersion", Schema::string())
        .with_property("implVersion", Schema::string())
        .with_property("optionalCapabilities", Schema::Object(capabilities))
        .with_property("links", array_of_links(ctx))
        .with_required("specVersion");
    ctx.define(VERSION_REPR, Schema::Object(version));
}

/// Appends the `LinkRepr` and `HrefRepr` definitions.
pub fn append_link_definitions(ctx: &mut GenerationContext) {
    let link = ObjectSchema::new()
        .with_description(ro_spec("2.7"))
        .with_property(
            "rel",
            Schema::string()
                .with_description("the relationship of the resource to this referencing resource"),
        )
        .with_property(
            "href",
            Schema::string().with_description("the hyperlink reference (URL) of the resource"),
        )
        .with_property("title", Schema::string().with_description("title to render"))
        .with_property(
            "method",
            Schema::string_enum(["GET", "POST", "PUT", "DELETE"])
                .with_description("HTTP verb to access"),
        )
        .with_property(
            "type",
            Schema::string().with_description("Content-Type recognized by the resource (for href)"),
        )
        .with_property(
            "arguments",
            Schema::empty_object().with_description("optional arguments"),
        )
        .with_property("value", Schema::empty_object().with_description("optional value"))
        .with_required("rel")
        .with_required("href")
        .with_required("method");
    ctx.define(LINK_REPR, Schema::Object(link));

    let href = ObjectSchema::new()
        .with_description(
            "Abbreviated version of the Link resource, used primarily to reference non-value objects",
        )
        .with_property(
            "href",
            Schema::string().with_description("the hyperlink reference (URL) of the resource"),
        )
        .with_required("href");
    ctx.define(HREF_REPR, Schema::Object(href));
}

/// Array of `LinkRepr`, recorded as a reference.
pub fn array_of_links(ctx: &mut GenerationContext) -> Schema {
    Schema::array_of(ctx.reference(LINK_REPR))
}

fn append_supporting_path(
    ctx: &mut GenerationContext,
    template: &str,
    section: &str,
    repr_type: &str,
    caching: Caching,
    definition: &str,
) {
    let schema = ctx.reference(definition);
    let operation = Operation::new()
        .with_tag(SUPPORTING_TAG)
        .with_description(ro_spec(section))
        .with_produces(format!(
            "application/json;profile=urn:org.restfulobjects:repr-types/{}",
            repr_type
        ))
        .with_response(200, Response::new(caching).with_schema(schema));
    ctx.add_operation(template, HttpMethod::Get, operation);
}
