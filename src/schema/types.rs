//! Schema node data model and value classification

use mongodb::bson::{Bson, Document};
use std::collections::BTreeMap;

// ============================================================================
// Categories
// ============================================================================

/// Structural category of an observed value
///
/// Exactly one category applies to any single value. A field path may still
/// accumulate several categories over a scan when different documents present
/// different shapes for the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Key/value mapping (embedded document)
    Record,
    /// Ordered sequence of values
    Array,
    /// Everything else: text, numbers, booleans, timestamps, null, ids, blobs
    Scalar,
}

impl Category {
    /// Classify a BSON value into its structural category
    pub fn of(value: &Bson) -> Category {
        classify(value).category()
    }

    /// The literal tag this category serializes under
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Record => "object",
            Category::Array => "list",
            Category::Scalar => "single_type",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Scalar type tags
// ============================================================================

/// Stable tag identifying a scalar's concrete runtime type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// 32- or 64-bit integer
    Int,
    /// 64-bit floating point
    Float,
    /// UTF-8 text
    Str,
    /// Boolean
    Bool,
    /// Null, and the deprecated BSON undefined
    Null,
    /// UTC datetime
    DateTime,
    /// Internal BSON timestamp
    Timestamp,
    /// Unique object identifier
    ObjectId,
    /// 128-bit decimal
    Decimal128,
    /// Binary blob
    Binary,
    /// Regular expression
    Regex,
    /// JavaScript code, with or without scope
    JavaScript,
    /// Symbol (deprecated BSON type, kept distinct from text)
    Symbol,
    /// DBPointer (deprecated BSON type)
    DbPointer,
    /// MinKey sentinel
    MinKey,
    /// MaxKey sentinel
    MaxKey,
}

impl ScalarType {
    /// The tag string used in serialized schemas
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Str => "str",
            ScalarType::Bool => "bool",
            ScalarType::Null => "NoneType",
            ScalarType::DateTime => "datetime",
            ScalarType::Timestamp => "timestamp",
            ScalarType::ObjectId => "ObjectId",
            ScalarType::Decimal128 => "decimal128",
            ScalarType::Binary => "binary",
            ScalarType::Regex => "regex",
            ScalarType::JavaScript => "javascript",
            ScalarType::Symbol => "symbol",
            ScalarType::DbPointer => "dbpointer",
            ScalarType::MinKey => "minkey",
            ScalarType::MaxKey => "maxkey",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Classification
// ============================================================================

/// A value classified into its structural category, with the payload the
/// merger needs to act on it
#[derive(Debug, Clone, Copy)]
pub enum Classified<'a> {
    /// An embedded document
    Record(&'a Document),
    /// An array of values
    Array(&'a [Bson]),
    /// A scalar, reduced to its type tag
    Scalar(ScalarType),
}

impl Classified<'_> {
    /// The category of the classified value
    pub fn category(&self) -> Category {
        match self {
            Classified::Record(_) => Category::Record,
            Classified::Array(_) => Category::Array,
            Classified::Scalar(_) => Category::Scalar,
        }
    }
}

/// Classify any BSON value
///
/// Total over every representable value. Strings classify as scalars, never
/// as arrays, even though they are iterable character sequences.
pub fn classify(value: &Bson) -> Classified<'_> {
    match value {
        Bson::Document(document) => Classified::Record(document),
        Bson::Array(elements) => Classified::Array(elements),
        Bson::Int32(_) | Bson::Int64(_) => Classified::Scalar(ScalarType::Int),
        Bson::Double(_) => Classified::Scalar(ScalarType::Float),
        Bson::String(_) => Classified::Scalar(ScalarType::Str),
        Bson::Boolean(_) => Classified::Scalar(ScalarType::Bool),
        Bson::Null | Bson::Undefined => Classified::Scalar(ScalarType::Null),
        Bson::DateTime(_) => Classified::Scalar(ScalarType::DateTime),
        Bson::Timestamp(_) => Classified::Scalar(ScalarType::Timestamp),
        Bson::ObjectId(_) => Classified::Scalar(ScalarType::ObjectId),
        Bson::Decimal128(_) => Classified::Scalar(ScalarType::Decimal128),
        Bson::Binary(_) => Classified::Scalar(ScalarType::Binary),
        Bson::RegularExpression(_) => Classified::Scalar(ScalarType::Regex),
        Bson::JavaScriptCode(_) | Bson::JavaScriptCodeWithScope(_) => {
            Classified::Scalar(ScalarType::JavaScript)
        }
        Bson::Symbol(_) => Classified::Scalar(ScalarType::Symbol),
        Bson::DbPointer(_) => Classified::Scalar(ScalarType::DbPointer),
        Bson::MinKey => Classified::Scalar(ScalarType::MinKey),
        Bson::MaxKey => Classified::Scalar(ScalarType::MaxKey),
    }
}

// ============================================================================
// Schema nodes
// ============================================================================

/// Accumulator for one field path under one category
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Shapes observed for a record-valued field
    Record(RecordNode),
    /// Shapes observed for an array-valued field
    Array(ArrayNode),
    /// Scalar types observed for a field
    Scalar(ScalarNode),
}

impl SchemaNode {
    /// The category this node accumulates
    pub fn category(&self) -> Category {
        match self {
            SchemaNode::Record(_) => Category::Record,
            SchemaNode::Array(_) => Category::Array,
            SchemaNode::Scalar(_) => Category::Scalar,
        }
    }
}

/// Set of scalar type tags observed for one field path
///
/// Insertion order is first-seen order and is preserved into the serialized
/// output; membership has set semantics (no duplicates).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScalarNode {
    pub(crate) types: Vec<ScalarType>,
}

impl ScalarNode {
    /// Node seeded with a single type tag
    pub fn with(tag: ScalarType) -> Self {
        Self { types: vec![tag] }
    }

    /// Observed type tags in first-seen order
    pub fn types(&self) -> &[ScalarType] {
        &self.types
    }
}

/// Distinct variant nodes observed among the elements of an array field
///
/// At most one variant exists per category: all record-shaped elements merge
/// into one Record variant, all scalar elements share one Scalar variant no
/// matter how many distinct scalar types appear. Variants keep the order in
/// which they were first created.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayNode {
    pub(crate) variants: Vec<SchemaNode>,
}

impl ArrayNode {
    /// Variant nodes in first-created order
    pub fn variants(&self) -> &[SchemaNode] {
        &self.variants
    }
}

/// Shapes observed for a record: field name to category map
///
/// Every key ever seen is retained permanently; a key absent from one
/// document is simply untouched by that document's merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordNode {
    pub(crate) fields: BTreeMap<String, CategoryMap>,
}

impl RecordNode {
    /// All observed fields and their category maps
    pub fn fields(&self) -> &BTreeMap<String, CategoryMap> {
        &self.fields
    }

    /// Category map for a single field, if the field was ever observed
    pub fn field(&self, name: &str) -> Option<&CategoryMap> {
        self.fields.get(name)
    }

    /// True if no field has been observed yet
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Per-category accumulators for one field path
///
/// One typed slot per category, so the map can never hold two nodes under
/// the same category key. A field observed with different shapes across
/// documents fills several slots and is reported as polymorphic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryMap {
    pub(crate) record: Option<RecordNode>,
    pub(crate) array: Option<ArrayNode>,
    pub(crate) scalar: Option<ScalarNode>,
}

impl CategoryMap {
    /// Record accumulator, if the field was ever record-shaped
    pub fn record(&self) -> Option<&RecordNode> {
        self.record.as_ref()
    }

    /// Array accumulator, if the field was ever array-shaped
    pub fn array(&self) -> Option<&ArrayNode> {
        self.array.as_ref()
    }

    /// Scalar accumulator, if the field was ever scalar
    pub fn scalar(&self) -> Option<&ScalarNode> {
        self.scalar.as_ref()
    }

    /// Categories observed so far, in serialization order
    pub fn categories(&self) -> Vec<Category> {
        let mut out = Vec::new();
        if self.record.is_some() {
            out.push(Category::Record);
        }
        if self.array.is_some() {
            out.push(Category::Array);
        }
        if self.scalar.is_some() {
            out.push(Category::Scalar);
        }
        out
    }

    /// True if the field has not been observed under any category
    pub fn is_empty(&self) -> bool {
        self.record.is_none() && self.array.is_none() && self.scalar.is_none()
    }
}

// ============================================================================
// Schema tree
// ============================================================================

/// Accumulated schema for one collection's sample
///
/// The tree is created empty at the start of a collection's scan, mutated
/// once per document by the merger, and serialized exactly once at the end.
/// Merging never deletes entries; the tree only grows for the duration of a
/// scan. Documents merge as if they were children of this implicit root
/// record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaTree {
    pub(crate) root: RecordNode,
}

impl SchemaTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Root record: field name to category map
    pub fn root(&self) -> &RecordNode {
        &self.root
    }

    /// Category map for a top-level field, if observed
    pub fn field(&self, name: &str) -> Option<&CategoryMap> {
        self.root.field(name)
    }

    /// True if no document has been merged yet
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
