#![deny(missing_docs)]

//! # Generation Context
//!
//! All state of one generation call: the document under construction and the
//! set of referenced / defined schema names. Threaded explicitly through the
//! passes and consumed when the document is finished.

use crate::document::{GeneratedDocument, HttpMethod, Operation};
use crate::schema::{ObjectSchema, Schema};
use indexmap::IndexSet;
use tracing::debug;

/// Schema names referenced by and defined in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    referenced: IndexSet<String>,
    defined: IndexSet<String>,
}

impl ReferenceSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reference to `name` and returns the reference schema.
    pub fn reference(&mut self, name: impl Into<String>) -> Schema {
        let name = name.into();
        self.referenced.insert(name.clone());
        Schema::Ref(name)
    }

    /// Records that `name` has a body.
    pub fn define(&mut self, name: impl Into<String>) {
        self.defined.insert(name.into());
    }

    /// Every name referenced so far, in first-reference order.
    pub fn referenced(&self) -> &IndexSet<String> {
        &self.referenced
    }

    /// Every name defined so far, in definition order.
    pub fn defined(&self) -> &IndexSet<String> {
        &self.defined
    }

    /// True once every referenced name is defined.
    pub fn is_complete(&self) -> bool {
        self.referenced.is_subset(&self.defined)
    }
}

/// Names referenced but never defined, in first-reference order.
pub fn orphans(referenced: &IndexSet<String>, defined: &IndexSet<String>) -> Vec<String> {
    referenced.difference(defined).cloned().collect()
}

/// Mutable state of a single generation call.
#[derive(Debug)]
pub struct GenerationContext {
    document: GeneratedDocument,
    references: ReferenceSet,
}

impl GenerationContext {
    /// Starts from an empty document.
    pub fn new(document: GeneratedDocument) -> Self {
        Self {
            document,
            references: ReferenceSet::new(),
        }
    }

    /// Records a reference and returns the reference schema.
    pub fn reference(&mut self, name: impl Into<String>) -> Schema {
        self.references.reference(name)
    }

    /// Adds a named definition. A later definition of the same name replaces
    /// the body but keeps the original position.
    pub fn define(&mut self, name: impl Into<String>, schema: Schema) {
        let name = name.into();
        self.references.define(name.clone());
        self.document.definitions.insert(name, schema);
    }

    /// Adds an operation to a path template, creating the path item if needed.
    pub fn add_operation(
        &mut self,
        template: impl Into<String>,
        method: HttpMethod,
        operation: Operation,
    ) {
        self.document
            .paths
            .entry(template.into())
            .or_default()
            .operations
            .insert(method, operation);
    }

    /// Records every reference inside `schema` and returns it unchanged.
    ///
    /// Needed for schemas built outside the context, such as plugin mappings.
    pub fn track(&mut self, schema: Schema) -> Schema {
        let mut names = IndexSet::new();
        schema.collect_refs(&mut names);
        for name in names {
            self.references.reference(name);
        }
        schema
    }

    /// The reference bookkeeping so far.
    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    /// The document so far.
    pub fn document(&self) -> &GeneratedDocument {
        &self.document
    }

    /// Gives every orphaned reference an empty placeholder definition.
    ///
    /// References are taken from the document itself as well as from the
    /// bookkeeping. Returns the names that were backfilled.
    pub fn backfill_orphans(&mut self) -> Vec<String> {
        for name in self.document.referenced_names() {
            self.references.reference(name);
        }
        let missing = orphans(self.references.referenced(), self.references.defined());
        for name in &missing {
            debug!(definition = %name, "Backfilling orphaned reference");
            self.define(name.clone(), Schema::Object(ObjectSchema::new()));
        }
        missing
    }

    /// Consumes the context, yielding the document.
    pub fn finish(self) -> GeneratedDocument {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Info;

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
    fn test_orphans_pure() {
        let referenced: IndexSet<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let defined: IndexSet<String> = ["B"].iter().map(|s| s.to_string()).collect();
        assert_eq!(orphans(&referenced, &defined), vec!["A", "C"]);
    }

    #[test]
    fn test_backfill_completes_reference_set() {
        let mut ctx = context();
        let r = ctx.reference("CustomerRepr");
        assert_eq!(r.ref_name(), Some("CustomerRepr"));
        ctx.define("LinkRepr", Schema::empty_object());
        assert!(!ctx.references().is_complete());

        let filled = ctx.backfill_orphans();
        assert_eq!(filled, vec!["CustomerRepr"]);
        assert!(ctx.references().is_complete());
        assert_eq!(
            ctx.document().definition("CustomerRepr"),
            Some(&Schema::empty_object())
        );
        // Nothing left to fill on a second pass
        assert!(ctx.backfill_orphans().is_empty());
    }

    #[test]
    fn test_backfill_sees_untracked_document_refs() {
        let mut ctx = context();
        // Added without going through `reference`
        ctx.define(
            "OrderRepr",
            Schema::Object(ObjectSchema::new().with_property("total", Schema::reference("Money"))),
        );
        assert!(ctx.references().is_complete());

        assert_eq!(ctx.backfill_orphans(), vec!["Money"]);
        assert!(ctx.document().dangling_references().is_empty());
    }

    #[test]
    fn test_track_records_nested_refs() {
        let mut ctx = context();
        let schema = ctx.track(Schema::array_of(Schema::reference("Money")));
        assert_eq!(schema, Schema::array_of(Schema::reference("Money")));
        let referenced: Vec<&String> = ctx.references().referenced().iter().collect();
        assert_eq!(referenced, vec!["Money"]);
    }

    #[test]
    fn test_operations_merge_into_one_path_item() {
        let mut ctx = context();
        ctx.add_operation("/x", HttpMethod::Get, Operation::new());
        ctx.add_operation("/x", HttpMethod::Post, Operation::new());
        let doc = ctx.finish();
        assert_eq!(doc.paths.len(), 1);
        assert_eq!(doc.path("/x").unwrap().operations.len(), 2);
    }
}
