use pretty_assertions::assert_eq;
use roapi_core::document::ParameterLocation;
use roapi_core::generation::supporting::{HREF_REPR, LINK_REPR};
use roapi_core::metamodel::{
    ActionDescriptor, ActionSemantics, Member, NatureOfService, ParameterDescriptor,
    PropertyDescriptor, RuntimeClass,
};
use roapi_core::{
    render, AppError, Format, GeneratedDocument, Generation, HttpMethod, Metamodel, Schema,
    SwaggerSpec, TypeDescriptor, ValuePropertyFactory, ValuePropertyPlugin, Visibility,
};

const METAMODEL: &str = r#"
types:
  - objectType: dom.CustomerMenu
    className: dom.CustomerMenu
    kind: reference
    natureOfService: viewRestOnly
    members:
      - member: action
        id: findByName
        semantics: safe
        returnType: java.util.List
        elementType: dom.Customer
        parameters:
          - id: name
            type: java.lang.String
            description: part of the name
      - member: action
        id: create
        semantics: nonIdempotent
        returnType: dom.Customer
        parameters:
          - id: name
            type: java.lang.String
          - id: grade
            type: dom.Grade
      - member: action
        id: dashboard
        semantics: safe
        returnType: dom.Dashboard
  - objectType: dom.AdminMenu
    className: dom.AdminMenu
    kind: reference
    natureOfService: view
    members:
      - member: action
        id: resetAll
        semantics: idempotent
        parameters:
          - id: before
            type: java.time.LocalDate
          - id: reason
            type: java.lang.String
            description: audit note
      - member: action
        id: dumpState
        semantics: safe
        actionType: prototype
  - objectType: dom.Customer
    className: dom.Customer
    kind: reference
    members:
      - member: property
        id: name
        type: java.lang.String
      - member: property
        id: grade
        type: dom.Grade
      - member: property
        id: since
        type: java.time.LocalDate
      - member: collection
        id: orders
        elementType: dom.Order
        description: orders placed
      - member: action
        id: placeOrder
        semantics: nonIdempotent
        returnType: dom.Order
  - objectType: dom.Order
    className: dom.Order
    kind: reference
    members:
      - member: property
        id: number
        type: java.lang.Long
      - member: property
        id: customer
        type: dom.Customer
  - objectType: dom.Dashboard
    className: dom.Dashboard
    kind: reference
    viewModel: true
    members:
      - member: property
        id: customerCount
        type: int
  - objectType: dom.Grade
    className: dom.Grade
    kind: value
    enumConstants: [GOLD, SILVER, BRONZE]
  - objectType: java.util.List
    className: java.util.List
    kind: collection
"#;

fn model() -> Metamodel {
    Metamodel::from_yaml_str(METAMODEL).unwrap()
}

fn generate(model: &Metamodel, visibility: Visibility) -> GeneratedDocument {
    Generation::new("/restful/", visibility, model)
        .generate()
        .unwrap()
}

fn path_keys(doc: &GeneratedDocument) -> Vec<&str> {
    doc.paths.keys().map(String::as_str).collect()
}

#[test]
fn test_empty_application_has_only_supporting_resources() {
    let empty = Metamodel::new(vec![]).unwrap();
    let doc = generate(&empty, Visibility::Private);

    assert_eq!(path_keys(&doc), vec!["/", "/user", "/services", "/version"]);
    assert!(doc.definition(LINK_REPR).is_some());
    assert!(doc.definition(HREF_REPR).is_some());
    assert_eq!(doc.info.title, "private API");
    assert_eq!(doc.base_path, "/restful/");
}

#[test]
fn test_private_paths_in_loader_order() {
    let doc = generate(&model(), Visibility::Private);

    assert_eq!(
        path_keys(&doc),
        vec![
            "/",
            "/user",
            "/services",
            "/version",
            "/services/dom.CustomerMenu",
            "/services/dom.CustomerMenu/actions/findByName/invoke",
            "/services/dom.CustomerMenu/actions/create/invoke",
            "/services/dom.CustomerMenu/actions/dashboard/invoke",
            "/services/dom.AdminMenu",
            "/services/dom.AdminMenu/actions/resetAll/invoke",
            "/objects/dom.Customer/{objectId}",
            "/objects/dom.Customer/{objectId}/collections/orders",
            "/objects/dom.Customer/{objectId}/actions/placeOrder/invoke",
            "/objects/dom.Order/{objectId}",
            "/objects/dom.Dashboard/{objectId}",
        ]
    );
}

#[test]
fn test_prototype_actions_need_prototyping_visibility() {
    let doc = generate(&model(), Visibility::PrivateWithPrototyping);
    assert!(doc
        .path("/services/dom.AdminMenu/actions/dumpState/invoke")
        .is_some());
}

#[test]
fn test_safe_action_uses_query_parameters() {
    let doc = generate(&model(), Visibility::Private);
    let item = doc
        .path("/services/dom.CustomerMenu/actions/findByName/invoke")
        .unwrap();
    assert_eq!(item.operations.len(), 1);
    let get = item.operation(HttpMethod::Get).unwrap();

    let names: Vec<&str> = get.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["name", "x-isis-querystring"]);
    assert!(get
        .parameters
        .iter()
        .all(|p| p.location == ParameterLocation::Query));
    assert_eq!(
        get.parameters[0].description.as_deref(),
        Some("RO Spec v1.0, section 2.9.1: part of the name")
    );

    let response = &get.responses[&200u16];
    assert_eq!(
        response.schema,
        Some(Schema::array_of(Schema::reference("dom.CustomerRepr")))
    );
    assert_eq!(response.description, "dom.CustomerMenu#findByName");
}

#[test]
fn test_mutating_actions_take_a_body() {
    let doc = generate(&model(), Visibility::Private);

    let create = doc
        .path("/services/dom.CustomerMenu/actions/create/invoke")
        .unwrap()
        .operation(HttpMethod::Post)
        .unwrap();
    assert_eq!(create.consumes, vec!["application/json"]);
    assert_eq!(create.parameters.len(), 1);
    let body = &create.parameters[0];
    assert_eq!(body.name, "body");
    assert_eq!(body.location, ParameterLocation::Body);
    match body.schema.as_ref().unwrap() {
        Schema::Object(o) => {
            let keys: Vec<&str> = o.properties.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["name", "grade"]);
            match &o.properties["grade"] {
                Schema::Object(entry) => match &entry.properties["value"] {
                    Schema::Primitive(p) => {
                        assert_eq!(p.enum_values, vec!["GOLD", "SILVER", "BRONZE"])
                    }
                    other => panic!("Expected enum, got {:?}", other),
                },
                other => panic!("Expected value wrapper, got {:?}", other),
            }
        }
        other => panic!("Expected object body, got {:?}", other),
    }

    let reset = doc
        .path("/services/dom.AdminMenu/actions/resetAll/invoke")
        .unwrap();
    assert_eq!(reset.operations.len(), 1);
    let put = reset.operation(HttpMethod::Put).unwrap();
    assert_eq!(put.responses[&200u16].schema, Some(Schema::empty_object()));
    assert_eq!(put.consumes, vec!["application/json"]);
    assert_eq!(put.parameters.len(), 1);
    assert_eq!(put.parameters[0].location, ParameterLocation::Body);
    match put.parameters[0].schema.as_ref().unwrap() {
        Schema::Object(o) => {
            let keys: Vec<&str> = o.properties.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["before", "reason"]);
            match &o.properties["before"] {
                Schema::Object(entry) => match &entry.properties["value"] {
                    Schema::Primitive(p) => assert_eq!(p.format.as_deref(), Some("date")),
                    other => panic!("Expected date, got {:?}", other),
                },
                other => panic!("Expected value wrapper, got {:?}", other),
            }
            match &o.properties["reason"] {
                Schema::Object(entry) => {
                    assert_eq!(entry.description.as_deref(), Some("audit note"));
                    assert_eq!(entry.properties["value"], Schema::string());
                }
                other => panic!("Expected value wrapper, got {:?}", other),
            }
        }
        other => panic!("Expected object body, got {:?}", other),
    }
}

#[test]
fn test_object_representation() {
    let doc = generate(&model(), Visibility::Private);
    match doc.definition("dom.CustomerRepr").unwrap() {
        Schema::Object(o) => {
            match &o.properties["since"] {
                Schema::Primitive(p) => assert_eq!(p.format.as_deref(), Some("date")),
                other => panic!("Expected date, got {:?}", other),
            }
            assert_eq!(
                o.properties["orders"],
                Schema::array_of(Schema::reference("dom.OrderRepr"))
                    .with_description("orders placed")
            );
        }
        other => panic!("Expected object, got {:?}", other),
    }
    match doc.definition("dom.OrderRepr").unwrap() {
        Schema::Object(o) => {
            assert_eq!(o.properties["customer"], Schema::reference(HREF_REPR))
        }
        other => panic!("Expected object, got {:?}", other),
    }

    let collection = doc
        .path("/objects/dom.Customer/{objectId}/collections/orders")
        .unwrap()
        .operation(HttpMethod::Get)
        .unwrap();
    assert_eq!(
        collection.description.as_deref(),
        Some("RO Spec v1.0, section 17.1: orders placed")
    );
    assert_eq!(collection.parameters[0].name, "objectId");
    assert!(collection.parameters[0].required);
}

#[test]
fn test_public_exposes_only_visible_surface() {
    let doc = generate(&model(), Visibility::Public);

    assert_eq!(
        path_keys(&doc),
        vec![
            "/",
            "/user",
            "/services",
            "/version",
            "/services/dom.CustomerMenu",
            "/services/dom.CustomerMenu/actions/dashboard/invoke",
            "/objects/dom.Dashboard/{objectId}",
        ]
    );
    assert_eq!(doc.info.title, "public API");
}

#[test]
fn test_visibility_is_monotonic() {
    let m = model();
    let public = generate(&m, Visibility::Public);
    let private = generate(&m, Visibility::Private);
    let prototyping = generate(&m, Visibility::PrivateWithPrototyping);

    assert!(public.paths.keys().all(|k| private.paths.contains_key(k)));
    assert!(private.paths.keys().all(|k| prototyping.paths.contains_key(k)));
}

#[test]
fn test_every_reference_is_defined() {
    let m = model();
    for visibility in Visibility::ALL {
        let doc = generate(&m, visibility);
        assert_eq!(doc.dangling_references(), Vec::<String>::new());
    }
}

#[test]
fn test_generation_is_deterministic() {
    let m = model();
    let first = render(&generate(&m, Visibility::Private), Format::Json).unwrap();
    let second = render(&generate(&m, Visibility::Private), Format::Json).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unreached_reference_is_backfilled() {
    // A service returning an entity that has no exposed state of its own
    let m = Metamodel::new(vec![
        TypeDescriptor::new("dom.Menu", "dom.Menu")
            .with_nature_of_service(NatureOfService::ViewRestOnly)
            .with_member(Member::Action(ActionDescriptor {
                id: "latest".into(),
                return_type: Some("dom.Token".into()),
                element_type: None,
                parameters: vec![],
                semantics: ActionSemantics::Safe,
                action_type: Default::default(),
                contributed_by: None,
                description: None,
            })),
        TypeDescriptor::new("dom.Token", "dom.Token"),
    ])
    .unwrap();
    let doc = generate(&m, Visibility::Private);
    assert_eq!(doc.definition("dom.TokenRepr"), Some(&Schema::empty_object()));
    assert!(doc.dangling_references().is_empty());
}

/// Maps `dom.Money` onto a named definition of its own.
struct MoneyPlugin;

impl ValuePropertyPlugin for MoneyPlugin {
    fn register(&self, factory: &mut ValuePropertyFactory) {
        factory.register(
            |class: &RuntimeClass<'_>| class.name == "dom.Money",
            |_: &RuntimeClass<'_>| Schema::reference("MoneyRepr"),
        );
    }
}

#[test]
fn test_plugin_references_are_backfilled() {
    let m = Metamodel::new(vec![
        TypeDescriptor::new("dom.Invoice", "dom.Invoice").with_member(Member::Property(
            PropertyDescriptor {
                id: "total".into(),
                type_name: "dom.Money".into(),
                description: None,
            },
        )),
        TypeDescriptor::value("dom.Money"),
    ])
    .unwrap();

    let doc = Generation::new("/restful/", Visibility::Private, &m)
        .with_value_properties(ValuePropertyFactory::new().with_plugin(&MoneyPlugin))
        .generate()
        .unwrap();

    match doc.definition("dom.InvoiceRepr").unwrap() {
        Schema::Object(o) => assert_eq!(o.properties["total"], Schema::reference("MoneyRepr")),
        other => panic!("Expected object, got {:?}", other),
    }
    assert_eq!(doc.definition("MoneyRepr"), Some(&Schema::empty_object()));
    assert_eq!(doc.dangling_references(), Vec::<String>::new());
}

#[test]
fn test_default_package_types_are_tagged_by_identifier() {
    let m = Metamodel::new(vec![
        TypeDescriptor::new("crm.Ledger", "Ledger")
            .with_member(Member::Property(PropertyDescriptor {
                id: "balance".into(),
                type_name: "java.lang.Long".into(),
                description: None,
            }))
            .with_member(Member::Action(ActionDescriptor {
                id: "close".into(),
                return_type: None,
                element_type: None,
                parameters: vec![],
                semantics: ActionSemantics::NonIdempotent,
                action_type: Default::default(),
                contributed_by: None,
                description: None,
            })),
        TypeDescriptor::new("crm.Desk", "Desk")
            .with_nature_of_service(NatureOfService::ViewRestOnly)
            .with_member(Member::Action(ActionDescriptor {
                id: "open".into(),
                return_type: Some("Ledger".into()),
                element_type: None,
                parameters: vec![],
                semantics: ActionSemantics::Safe,
                action_type: Default::default(),
                contributed_by: None,
                description: None,
            })),
    ])
    .unwrap();
    let doc = generate(&m, Visibility::Private);

    let tags = |path: &str, method: HttpMethod| {
        doc.path(path).unwrap().operation(method).unwrap().tags.clone()
    };
    assert_eq!(tags("/services/crm.Desk", HttpMethod::Get), vec!["crm.Desk"]);
    assert_eq!(
        tags("/services/crm.Desk/actions/open/invoke", HttpMethod::Get),
        vec!["crm.Desk"]
    );
    assert_eq!(
        tags("/objects/crm.Ledger/{objectId}", HttpMethod::Get),
        vec!["crm.Ledger"]
    );
    assert_eq!(
        tags("/objects/crm.Ledger/{objectId}/actions/close/invoke", HttpMethod::Post),
        vec!["crm.Ledger"]
    );
}

#[test]
fn test_missing_object_type_fails_fast() {
    let anonymous = TypeDescriptor::new("", "dom.Anonymous")
        .with_nature_of_service(NatureOfService::ViewRestOnly)
        .with_member(Member::Action(ActionDescriptor {
            id: "ping".into(),
            return_type: None,
            element_type: None,
            parameters: vec![ParameterDescriptor {
                id: "message".into(),
                type_name: "java.lang.String".into(),
                description: None,
            }],
            semantics: ActionSemantics::Safe,
            action_type: Default::default(),
            contributed_by: None,
            description: None,
        }));
    let m = Metamodel::new(vec![anonymous]).unwrap();

    let err = Generation::new("/restful/", Visibility::Private, &m)
        .generate()
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingObjectType { ref class_name } if class_name == "dom.Anonymous"
    ));
}

#[test]
fn test_yaml_rendering_of_full_document() {
    let yaml = render(&generate(&model(), Visibility::Private), Format::Yaml).unwrap();
    let value: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["swagger"], "2.0");
    assert_eq!(
        value["paths"]["/services/dom.AdminMenu/actions/resetAll/invoke"]["put"]["parameters"][0]
            ["in"],
        "body"
    );
    assert_eq!(
        value["definitions"]["dom.CustomerRepr"]["properties"]["grade"]["enum"],
        serde_json::json!(["GOLD", "SILVER", "BRONZE"])
    );
}

#[test]
fn test_supporting_spec_matches_generator_scaffolding() {
    let supporting = SwaggerSpec::new("/restful/").generate();
    let full = generate(&Metamodel::new(vec![]).unwrap(), Visibility::Private);
    assert_eq!(
        supporting.paths.keys().collect::<Vec<_>>(),
        full.paths.keys().collect::<Vec<_>>()
    );
    assert_eq!(
        supporting.definitions.keys().collect::<Vec<_>>(),
        full.definitions.keys().collect::<Vec<_>>()
    );
}
