//! The serializer: renders schema nodes to plain nested JSON
//!
//! Category tags serialize as the literal strings `"object"`, `"list"` and
//! `"single_type"`. Scalar tag lists keep first-seen order; array variant
//! lists keep first-created order.

use serde_json::{Map, Value};

use super::types::{ArrayNode, CategoryMap, RecordNode, ScalarNode, SchemaNode, SchemaTree};

impl SchemaTree {
    /// Serialize the whole tree: field name to category-tagged children
    pub fn to_json(&self) -> Value {
        self.root.to_json()
    }
}

impl RecordNode {
    /// Serialize as a mapping from field name to tagged category map
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for (name, categories) in &self.fields {
            out.insert(name.clone(), categories.to_json());
        }
        Value::Object(out)
    }
}

impl CategoryMap {
    /// Serialize as a mapping from category tag to the serialized child
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        if let Some(node) = &self.record {
            out.insert("object".to_string(), node.to_json());
        }
        if let Some(node) = &self.array {
            out.insert("list".to_string(), node.to_json());
        }
        if let Some(node) = &self.scalar {
            out.insert("single_type".to_string(), node.to_json());
        }
        Value::Object(out)
    }
}

impl ArrayNode {
    /// Serialize as an ordered list of tagged variants, first-created order
    pub fn to_json(&self) -> Value {
        Value::Array(self.variants.iter().map(SchemaNode::to_json).collect())
    }
}

impl ScalarNode {
    /// Serialize as a single tag string, or a first-seen-ordered list of
    /// tag strings when more than one type was observed
    pub fn to_json(&self) -> Value {
        match self.types.as_slice() {
            [single] => Value::String(single.as_str().to_string()),
            many => Value::Array(
                many.iter()
                    .map(|tag| Value::String(tag.as_str().to_string()))
                    .collect(),
            ),
        }
    }
}

impl SchemaNode {
    /// Serialize as a one-key mapping from this node's category tag to its
    /// serialized content
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        match self {
            SchemaNode::Record(node) => {
                out.insert("object".to_string(), node.to_json());
            }
            SchemaNode::Array(node) => {
                out.insert("list".to_string(), node.to_json());
            }
            SchemaNode::Scalar(node) => {
                out.insert("single_type".to_string(), node.to_json());
            }
        }
        Value::Object(out)
    }
}
