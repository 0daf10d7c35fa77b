//! Schema engine tests

use super::*;
use mongodb::bson::{bson, doc, Bson};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn tree_of(documents: &[mongodb::bson::Document]) -> SchemaTree {
    let mut tree = SchemaTree::new();
    for document in documents {
        tree.merge_document(document);
    }
    tree
}

// ============================================================================
// Classifier
// ============================================================================

#[test_case(bson!({"a": 1}), Category::Record; "document is record")]
#[test_case(bson!([1, 2]), Category::Array; "array is array")]
#[test_case(bson!("hello"), Category::Scalar; "text is scalar, not array")]
#[test_case(bson!(""), Category::Scalar; "empty text is scalar")]
#[test_case(bson!(42), Category::Scalar; "integer is scalar")]
#[test_case(bson!(2.5), Category::Scalar; "double is scalar")]
#[test_case(bson!(true), Category::Scalar; "boolean is scalar")]
#[test_case(Bson::Null, Category::Scalar; "null is scalar")]
#[test_case(Bson::ObjectId(mongodb::bson::oid::ObjectId::new()), Category::Scalar; "object id is scalar")]
#[test_case(Bson::DateTime(mongodb::bson::DateTime::from_millis(0)), Category::Scalar; "datetime is scalar")]
#[test_case(bson!({}), Category::Record; "empty document is record")]
#[test_case(bson!([]), Category::Array; "empty array is array")]
fn test_classify_category(value: Bson, expected: Category) {
    assert_eq!(Category::of(&value), expected);
}

#[test]
fn test_scalar_type_tags() {
    let cases: Vec<(Bson, &str)> = vec![
        (bson!(1), "int"),
        (Bson::Int64(9), "int"),
        (bson!(1.5), "float"),
        (bson!("x"), "str"),
        (bson!(false), "bool"),
        (Bson::Null, "NoneType"),
        (Bson::Undefined, "NoneType"),
        (
            Bson::DateTime(mongodb::bson::DateTime::from_millis(0)),
            "datetime",
        ),
        (
            Bson::ObjectId(mongodb::bson::oid::ObjectId::new()),
            "ObjectId",
        ),
        (
            Bson::Timestamp(mongodb::bson::Timestamp { time: 0, increment: 0 }),
            "timestamp",
        ),
    ];

    for (value, tag) in cases {
        match classify(&value) {
            Classified::Scalar(scalar) => assert_eq!(scalar.as_str(), tag),
            other => panic!("expected scalar for {value:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_category_tags() {
    assert_eq!(Category::Record.as_str(), "object");
    assert_eq!(Category::Array.as_str(), "list");
    assert_eq!(Category::Scalar.as_str(), "single_type");
    assert_eq!(Category::Scalar.to_string(), "single_type");
}

// ============================================================================
// Merger: core behavior
// ============================================================================

#[test]
fn test_scalar_types_accumulate_across_documents() {
    let tree = tree_of(&[doc! {"a": 1}, doc! {"a": "x"}]);

    assert_eq!(
        tree.to_json(),
        json!({"a": {"single_type": ["int", "str"]}})
    );
}

#[test]
fn test_record_fields_union_across_documents() {
    let tree = tree_of(&[doc! {"a": {"b": 1}}, doc! {"a": {"c": 2}}]);

    assert_eq!(
        tree.to_json(),
        json!({
            "a": {
                "object": {
                    "b": {"single_type": "int"},
                    "c": {"single_type": "int"},
                }
            }
        })
    );
}

#[test]
fn test_scalar_array_elements_collapse_into_one_variant() {
    let tree = tree_of(&[doc! {"a": [1, 2, "x"]}]);

    assert_eq!(
        tree.to_json(),
        json!({"a": {"list": [{"single_type": ["int", "str"]}]}})
    );
}

#[test]
fn test_record_array_elements_merge_into_one_variant() {
    let tree = tree_of(&[doc! {"a": [{"x": 1}]}, doc! {"a": [{"x": 2}, {"y": 3}]}]);

    assert_eq!(
        tree.to_json(),
        json!({
            "a": {
                "list": [{
                    "object": {
                        "x": {"single_type": "int"},
                        "y": {"single_type": "int"},
                    }
                }]
            }
        })
    );
}

#[test]
fn test_null_is_a_distinct_scalar_type() {
    let tree = tree_of(&[doc! {"a": Bson::Null}, doc! {"a": 5}]);

    assert_eq!(
        tree.to_json(),
        json!({"a": {"single_type": ["NoneType", "int"]}})
    );
}

// ============================================================================
// Merger: properties
// ============================================================================

#[test]
fn test_merge_is_idempotent_under_duplicate_documents() {
    let document = doc! {
        "id": 7,
        "name": "Ada",
        "tags": ["a", "b"],
        "address": {"city": "x", "zip": 1234},
    };

    let once = tree_of(&[document.clone()]);
    let twice = tree_of(&[document.clone(), document]);

    assert_eq!(once.to_json(), twice.to_json());
}

#[test]
fn test_scalar_type_order_follows_arrival_order() {
    let d1 = doc! {"a": 1};
    let d2 = doc! {"a": "x"};

    let forward = tree_of(&[d1.clone(), d2.clone()]);
    let reverse = tree_of(&[d2, d1]);

    assert_eq!(
        forward.to_json(),
        json!({"a": {"single_type": ["int", "str"]}})
    );
    assert_eq!(
        reverse.to_json(),
        json!({"a": {"single_type": ["str", "int"]}})
    );
}

#[test]
fn test_text_field_is_scalar_not_array() {
    let tree = tree_of(&[doc! {"a": "hello"}]);

    assert_eq!(tree.to_json(), json!({"a": {"single_type": "str"}}));

    let categories = tree.field("a").unwrap().categories();
    assert_eq!(categories, vec![Category::Scalar]);
}

#[test]
fn test_recategorized_field_keeps_both_categories() {
    let tree = tree_of(&[doc! {"a": 1}, doc! {"a": {"b": 2}}]);

    assert_eq!(
        tree.to_json(),
        json!({
            "a": {
                "object": {"b": {"single_type": "int"}},
                "single_type": "int",
            }
        })
    );

    let field = tree.field("a").unwrap();
    assert!(field.record().is_some());
    assert!(field.scalar().is_some());
    assert!(field.array().is_none());
}

#[test]
fn test_array_variants_keep_first_created_order() {
    let scalar_first = tree_of(&[doc! {"a": [1]}, doc! {"a": [{"x": 1}]}]);
    assert_eq!(
        scalar_first.to_json(),
        json!({
            "a": {"list": [
                {"single_type": "int"},
                {"object": {"x": {"single_type": "int"}}},
            ]}
        })
    );

    let record_first = tree_of(&[doc! {"a": [{"x": 1}]}, doc! {"a": [1]}]);
    assert_eq!(
        record_first.to_json(),
        json!({
            "a": {"list": [
                {"object": {"x": {"single_type": "int"}}},
                {"single_type": "int"},
            ]}
        })
    );
}

#[test]
fn test_every_element_of_an_array_is_merged() {
    // Mixed array in a single document: both variants must appear even
    // though the scalar variant matches before the record element arrives.
    let tree = tree_of(&[doc! {"a": [1, {"x": 2}, "s", {"y": 3}]}]);

    assert_eq!(
        tree.to_json(),
        json!({
            "a": {"list": [
                {"single_type": ["int", "str"]},
                {"object": {
                    "x": {"single_type": "int"},
                    "y": {"single_type": "int"},
                }},
            ]}
        })
    );
}

#[test]
fn test_nested_arrays() {
    let tree = tree_of(&[doc! {"a": [[1], ["x"]]}]);

    assert_eq!(
        tree.to_json(),
        json!({"a": {"list": [{"list": [{"single_type": ["int", "str"]}]}]}})
    );
}

#[test]
fn test_keys_are_never_deleted() {
    let tree = tree_of(&[doc! {"a": 1, "b": 2}, doc! {"a": 3}]);

    assert!(tree.field("a").is_some());
    assert!(tree.field("b").is_some());
    assert_eq!(
        tree.to_json(),
        json!({
            "a": {"single_type": "int"},
            "b": {"single_type": "int"},
        })
    );
}

#[test]
fn test_deeply_nested_records() {
    let tree = tree_of(&[doc! {"l1": {"l2": {"l3": {"value": 42}}}}]);

    assert_eq!(
        tree.to_json(),
        json!({
            "l1": {"object": {
                "l2": {"object": {
                    "l3": {"object": {
                        "value": {"single_type": "int"},
                    }},
                }},
            }},
        })
    );
}

#[test]
fn test_empty_document_and_empty_array() {
    let mut tree = SchemaTree::new();
    assert!(tree.is_empty());

    tree.merge_document(&doc! {});
    assert!(tree.is_empty());
    assert_eq!(tree.to_json(), json!({}));

    tree.merge_document(&doc! {"a": []});
    assert!(!tree.is_empty());
    assert_eq!(tree.to_json(), json!({"a": {"list": []}}));
}

#[test]
fn test_empty_embedded_document() {
    let tree = tree_of(&[doc! {"a": {}}]);
    assert_eq!(tree.to_json(), json!({"a": {"object": {}}}));
}

#[test]
fn test_scalar_node_is_a_set() {
    let mut node = ScalarNode::with(ScalarType::Int);
    node.insert(ScalarType::Str);
    node.insert(ScalarType::Int);
    node.insert(ScalarType::Str);

    assert_eq!(node.types(), &[ScalarType::Int, ScalarType::Str]);
}

#[test]
fn test_single_type_serializes_as_string_not_list() {
    let tree = tree_of(&[doc! {"a": 1}, doc! {"a": 2}]);

    assert_eq!(tree.to_json(), json!({"a": {"single_type": "int"}}));
}

#[test]
fn test_int32_and_int64_share_one_tag() {
    let tree = tree_of(&[doc! {"a": Bson::Int32(1)}, doc! {"a": Bson::Int64(2)}]);

    assert_eq!(tree.to_json(), json!({"a": {"single_type": "int"}}));
}

#[test]
fn test_store_native_scalar_types() {
    let tree = tree_of(&[doc! {
        "_id": mongodb::bson::oid::ObjectId::new(),
        "created": mongodb::bson::DateTime::from_millis(0),
    }]);

    assert_eq!(
        tree.to_json(),
        json!({
            "_id": {"single_type": "ObjectId"},
            "created": {"single_type": "datetime"},
        })
    );
}
