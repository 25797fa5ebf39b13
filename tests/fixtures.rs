// tests/fixtures.rs
//
// Documents produced by the editor, checked in both directions.

mod common;

use common::*;
use logic_markup::{parse, print, SyntaxNode};

const COLORS: &str = include_str!("fixtures/colors.xml");
const RECORD: &str = include_str!("fixtures/record.xml");
const TOP_LEVEL: &str = include_str!("fixtures/top_level_declarations.xml");
const TOP_LEVEL_JSON: &str = include_str!("fixtures/top_level_declarations.json");

fn colors_tree() -> SyntaxNode {
    program(vec![
        declaration(import("Prelude")),
        declaration(namespace(
            "Colors",
            vec![
                typed_variable("a", "Color", color("#FF3409")),
                namespace("Nested", vec![typed_variable("b", "Color", color("#3449FF"))]),
            ],
        )),
    ])
}

fn record_tree() -> SyntaxNode {
    top_level(vec![record(
        "ThemedColor",
        vec![
            typed_variable("light", "Color", color("white")),
            typed_variable("dark", "Color", color("black")),
        ],
    )])
}

fn top_level_tree() -> SyntaxNode {
    top_level(vec![
        import("Prelude"),
        typed_variable("x", "Number", number(123.0)),
        namespace("Test", vec![typed_variable("b", "Boolean", boolean(false))]),
    ])
}

#[test]
fn fixtures_parse_to_expected_trees() {
    for (name, text, expected) in [
        ("colors", COLORS, colors_tree()),
        ("record", RECORD, record_tree()),
        ("top_level_declarations", TOP_LEVEL, top_level_tree()),
    ] {
        let parsed = parse(text)
            .unwrap_or_else(|error| panic!("{name}: {error}"))
            .normalize_ids();
        assert_eq!(parsed, expected, "{name}");
    }
}

#[test]
fn fixtures_print_byte_for_byte() {
    for (name, text, tree) in [
        ("colors", COLORS, colors_tree()),
        ("record", RECORD, record_tree()),
        ("top_level_declarations", TOP_LEVEL, top_level_tree()),
    ] {
        assert_eq!(print(&tree), text.trim_end(), "{name}");
    }
}

#[test]
fn json_document_matches_markup() {
    let from_json: SyntaxNode = serde_json::from_str(TOP_LEVEL_JSON).unwrap();
    assert_eq!(from_json, top_level_tree());
    assert_eq!(print(&from_json), TOP_LEVEL.trim_end());
}

#[test]
fn json_form_uses_type_and_data_tags() {
    let value = serde_json::to_value(parse(TOP_LEVEL).unwrap().normalize_ids()).unwrap();
    assert_eq!(value["type"], "topLevelDeclarations");

    let variable = &value["data"]["declarations"][1];
    assert_eq!(variable["type"], "variable");
    assert_eq!(variable["data"]["annotation"]["type"], "typeIdentifier");
    assert_eq!(variable["data"]["annotation"]["data"]["identifier"]["isPlaceholder"], false);
    assert_eq!(variable["data"]["initializer"]["data"]["literal"]["data"]["value"], 123.0);
    assert_eq!(value["data"]["declarations"][3]["type"], "placeholder");
}
