#![deny(missing_docs)]

//! # Type-to-Schema Resolution
//!
//! How a metamodel type appears inside an operation or object schema.
//! Whole-type returns of values are opaque objects; values only get their
//! concrete primitive schema when they appear as a property. Reference types
//! become `<ObjectType>Repr` references, which are recorded so the final pass
//! can backfill any that never receive a body.

use crate::error::AppResult;
use crate::generation::context::GenerationContext;
use crate::generation::supporting::HREF_REPR;
use crate::generation::Generation;
use crate::metamodel::{ActionDescriptor, TypeDescriptor};
use crate::schema::Schema;
use crate::util::object_type_for;

/// Definition name of a type's simplified representation.
pub fn repr_name(object_type: &str) -> String {
    format!("{}Repr", object_type)
}

impl Generation<'_> {
    /// Schema of a whole-type return or array element.
    pub(crate) fn schema_for_type(
        &self,
        ctx: &mut GenerationContext,
        ty: Option<&TypeDescriptor>,
    ) -> AppResult<Schema> {
        let Some(ty) = ty else {
            return Ok(Schema::empty_object());
        };
        let class = ty.runtime_class();

        if class.is_void() || self.value_properties.resolve(&class).is_some() {
            return Ok(Schema::empty_object());
        }
        if ty.is_collection() {
            if let Some(element) = ty.element_type() {
                return self.array_schema_of(ctx, self.loader.lookup(element));
            }
        }
        if class.is_object() {
            return Ok(Schema::empty_object());
        }
        if class.is_raw_enum() {
            return Ok(Schema::string());
        }

        let object_type = object_type_for(ty)?;
        Ok(ctx.reference(repr_name(object_type)))
    }

    /// As `schema_for_type`, by class name; `None` means void.
    pub(crate) fn schema_for_class(
        &self,
        ctx: &mut GenerationContext,
        class_name: Option<&str>,
    ) -> AppResult<Schema> {
        let ty = class_name.and_then(|name| self.loader.lookup(name));
        self.schema_for_type(ctx, ty)
    }

    /// Array whose items are `schema_for_type(element)`.
    pub(crate) fn array_schema_of(
        &self,
        ctx: &mut GenerationContext,
        element: Option<&TypeDescriptor>,
    ) -> AppResult<Schema> {
        Ok(Schema::array_of(self.schema_for_type(ctx, element)?))
    }

    /// Schema of a property or parameter value.
    ///
    /// Values get their primitive schema; anything else is a lightweight
    /// `HrefRepr` link, never an inlined object.
    pub(crate) fn property_schema(&self, ctx: &mut GenerationContext, class_name: &str) -> Schema {
        let resolved = match self.loader.lookup(class_name) {
            Some(ty) => self.value_properties.resolve(&ty.runtime_class()),
            None => self.value_properties.resolve_name(class_name),
        };
        match resolved {
            Some(schema) => ctx.track(schema),
            None => ctx.reference(HREF_REPR),
        }
    }

    /// Response schema of an action invocation.
    ///
    /// An element-type facet means a collection of that element; otherwise
    /// the return type is resolved as a whole.
    pub(crate) fn action_return_schema(
        &self,
        ctx: &mut GenerationContext,
        action: &ActionDescriptor,
    ) -> AppResult<Schema> {
        if let Some(element) = action.element_type.as_deref() {
            if let Some(element_ty) = self.loader.lookup(element) {
                return self.array_schema_of(ctx, Some(element_ty));
            }
        }
        self.schema_for_class(ctx, action.return_type.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{GeneratedDocument, Info};
    use crate::metamodel::{Metamodel, SpecificationLoader, TypeKind};
    use crate::schema::PrimitiveType;
    use crate::visibility::Visibility;

    fn model() -> Metamodel {
        Metamodel::new(vec![
            TypeDescriptor::new("dom.Customer", "dom.Customer"),
            TypeDescriptor::new("dom.Customers", "dom.Customers").with_kind(
                TypeKind::Collection {
                    element: Some("dom.Customer".into()),
                },
            ),
            TypeDescriptor::new("java.lang.Object", "java.lang.Object"),
            TypeDescriptor::new("java.lang.Enum", "java.lang.Enum"),
            TypeDescriptor::enumeration("dom.Grade", &["A", "B"]),
            TypeDescriptor::value("java.lang.String"),
            TypeDescriptor::value("void"),
        ])
        .unwrap()
    }

    fn context() -> GenerationContext {
        GenerationContext::new(GeneratedDocument::new(
            Info {
                title: "t".into(),
                version: "0".into(),
                description: None,
            },
            "/",
        ))
    }

    #[test]
    fn test_schema_for_type_cases() {
        let m = model();
        let g = Generation::new("/", Visibility::Private, &m);
        let mut ctx = context();
        let mut resolve = |name: Option<&str>| g.schema_for_class(&mut ctx, name).unwrap();

        assert_eq!(resolve(None), Schema::empty_object());
        assert_eq!(resolve(Some("void")), Schema::empty_object());
        assert_eq!(resolve(Some("java.lang.String")), Schema::empty_object());
        assert_eq!(resolve(Some("dom.Grade")), Schema::empty_object());
        assert_eq!(resolve(Some("java.lang.Object")), Schema::empty_object());
        assert_eq!(resolve(Some("java.lang.Enum")), Schema::string());
        assert_eq!(
            resolve(Some("dom.Customer")),
            Schema::reference("dom.CustomerRepr")
        );
        assert_eq!(
            resolve(Some("dom.Customers")),
            Schema::array_of(Schema::reference("dom.CustomerRepr"))
        );

        let referenced: Vec<&String> = ctx.references().referenced().iter().collect();
        assert_eq!(referenced, vec!["dom.CustomerRepr"]);
    }

    #[test]
    fn test_property_schema_uses_primitive_or_href() {
        let m = model();
        let g = Generation::new("/", Visibility::Private, &m);
        let mut ctx = context();

        match g.property_schema(&mut ctx, "dom.Grade") {
            Schema::Primitive(p) => {
                assert_eq!(p.primitive, PrimitiveType::String);
                assert_eq!(p.enum_values, vec!["A", "B"]);
            }
            other => panic!("Expected enum string, got {:?}", other),
        }
        assert_eq!(
            g.property_schema(&mut ctx, "dom.Customer"),
            Schema::reference(HREF_REPR)
        );
    }

    #[test]
    fn test_action_return_with_element_facet() {
        let m = model();
        let g = Generation::new("/", Visibility::Private, &m);
        let mut ctx = context();
        let action = ActionDescriptor {
            id: "all".into(),
            return_type: Some("dom.Customers".into()),
            element_type: Some("dom.Customer".into()),
            parameters: vec![],
            semantics: Default::default(),
            action_type: Default::default(),
            contributed_by: None,
            description: None,
        };
        assert_eq!(
            g.action_return_schema(&mut ctx, &action).unwrap(),
            Schema::array_of(Schema::reference("dom.CustomerRepr"))
        );
        assert!(m.lookup("dom.Customer").is_some());
    }

    #[test]
    fn test_reference_without_object_type_fails() {
        let mut anonymous = TypeDescriptor::new("x", "dom.Anonymous");
        anonymous.object_type = None;
        let m = Metamodel::new(vec![anonymous]).unwrap();
        let g = Generation::new("/", Visibility::Private, &m);
        let mut ctx = context();
        assert!(g.schema_for_class(&mut ctx, Some("dom.Anonymous")).is_err());
    }
}
