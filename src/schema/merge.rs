//! The merger: folds observed values into schema nodes
//!
//! Every merge has a defined action: seed a fresh node when nothing exists
//! for a (field, category) pair, otherwise update the existing node in
//! place. There is no failure path anywhere in this module.

use mongodb::bson::{Bson, Document};

use super::types::{
    classify, ArrayNode, CategoryMap, Classified, RecordNode, ScalarNode, ScalarType, SchemaNode,
    SchemaTree,
};

impl SchemaTree {
    /// Fold one document into the tree
    ///
    /// Classifies and merges every top-level field, exactly as if the
    /// document were the child of the implicit root record. Merges are
    /// strictly sequential: each one mutates state the next depends on.
    pub fn merge_document(&mut self, document: &Document) {
        self.root.merge_document(document);
    }
}

impl RecordNode {
    /// Merge one record's fields into this node
    ///
    /// The field set is the union across all merged records; keys are never
    /// deleted.
    pub fn merge_document(&mut self, document: &Document) {
        for (key, value) in document {
            self.fields.entry(key.clone()).or_default().observe(value);
        }
    }
}

impl CategoryMap {
    /// Fold one observed value into the slot for its category
    pub fn observe(&mut self, value: &Bson) {
        match classify(value) {
            Classified::Record(document) => self
                .record
                .get_or_insert_with(RecordNode::default)
                .merge_document(document),
            Classified::Array(elements) => self
                .array
                .get_or_insert_with(ArrayNode::default)
                .merge_elements(elements),
            Classified::Scalar(tag) => self
                .scalar
                .get_or_insert_with(ScalarNode::default)
                .insert(tag),
        }
    }
}

impl ArrayNode {
    /// Merge every element of an incoming array into the variant list
    ///
    /// Element order within the array is irrelevant to the final schema;
    /// only the set of distinct variant categories matters. The variant
    /// lookup is a linear scan, quadratic in the number of genuinely
    /// distinct shapes per array; that cardinality stays small in practice.
    pub fn merge_elements(&mut self, elements: &[Bson]) {
        for element in elements {
            self.merge_element(element);
        }
    }

    fn merge_element(&mut self, element: &Bson) {
        match classify(element) {
            Classified::Record(document) => {
                for variant in &mut self.variants {
                    if let SchemaNode::Record(node) = variant {
                        node.merge_document(document);
                        return;
                    }
                }
                self.variants
                    .push(SchemaNode::seed(Classified::Record(document)));
            }
            Classified::Array(elements) => {
                for variant in &mut self.variants {
                    if let SchemaNode::Array(node) = variant {
                        node.merge_elements(elements);
                        return;
                    }
                }
                self.variants
                    .push(SchemaNode::seed(Classified::Array(elements)));
            }
            Classified::Scalar(tag) => {
                for variant in &mut self.variants {
                    if let SchemaNode::Scalar(node) = variant {
                        node.insert(tag);
                        return;
                    }
                }
                self.variants.push(SchemaNode::Scalar(ScalarNode::with(tag)));
            }
        }
    }
}

impl ScalarNode {
    /// Add a type tag if not already present
    ///
    /// Insertion order is preserved, never re-sorted.
    pub fn insert(&mut self, tag: ScalarType) {
        if !self.types.contains(&tag) {
            self.types.push(tag);
        }
    }
}

impl SchemaNode {
    /// Construct a fresh node seeded from one classified value
    pub(crate) fn seed(classified: Classified<'_>) -> SchemaNode {
        match classified {
            Classified::Record(document) => {
                let mut node = RecordNode::default();
                node.merge_document(document);
                SchemaNode::Record(node)
            }
            Classified::Array(elements) => {
                let mut node = ArrayNode::default();
                node.merge_elements(elements);
                SchemaNode::Array(node)
            }
            Classified::Scalar(tag) => SchemaNode::Scalar(ScalarNode::with(tag)),
        }
    }
}
