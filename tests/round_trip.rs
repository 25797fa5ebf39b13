// tests/round_trip.rs

mod common;

use common::*;
use logic_markup::annotation;
use logic_markup::markup::WriterOptions;
use logic_markup::tables::MAX_DEPTH;
use logic_markup::{
    parse, print, ConversionTables, ErrorKind, Parser, Printer, SequentialIds, SourceContext,
    SyntaxNode,
};

fn round_trip(tree: &SyntaxNode) -> SyntaxNode {
    let text = print(tree);
    parse(&text)
        .unwrap_or_else(|error| panic!("printed text failed to parse: {error}\n{text}"))
        .normalize_ids()
}

fn bare(tree: &SyntaxNode) -> String {
    Printer::default()
        .with_options(WriterOptions {
            indent: 2,
            declaration: false,
        })
        .print(tree)
}

/// A program touching every node kind the markup can carry.
fn kitchen_sink() -> SyntaxNode {
    program(vec![
        declaration(import("Prelude")),
        declaration(namespace(
            "Theme",
            vec![
                typed_variable("primary", "Color", color("#FF3409")),
                typed_variable("size", "Number", number(1.5)),
                typed_variable("offset", "Number", number(-2.0)),
                typed_variable("enabled", "Boolean", boolean(false)),
                typed_variable("title", "String", string("a < b & \"c\"\nnext")),
                typed_variable("empty", "String", string("")),
                record(
                    "ThemedColor",
                    vec![
                        typed_variable("light", "Color", color("white")),
                        typed_variable("dark", "Color", color("black")),
                    ],
                ),
                namespace("Nested", vec![]),
            ],
        )),
        declaration(variable(
            "sizes",
            Some(type_named("Array", vec![type_named("Number", vec![])])),
            Some(literal(array(vec![literal(number(1.0)), literal(number(2.0))]))),
        )),
        declaration(variable(
            "none",
            Some(type_named("Array", vec![type_named("Number", vec![])])),
            Some(literal(array(vec![]))),
        )),
        declaration(variable(
            "mismatched",
            Some(type_named("Color", vec![])),
            Some(literal(string("red"))),
        )),
        declaration(variable(
            "lookup",
            Some(type_named(
                "Map",
                vec![
                    type_named("String", vec![]),
                    type_named("List", vec![type_named("Int", vec![]), type_named("Float", vec![])]),
                ],
            )),
            Some(call(
                member(identifier("Colors"), "lookup"),
                vec![
                    argument(Some("key"), literal(string("primary"))),
                    argument(None, literal(array(vec![literal(boolean(true))]))),
                    argument(None, call(identifier("now"), vec![])),
                ],
            )),
        )),
        declaration(variable("alias", None, Some(identifier("primary")))),
        declaration(variable("pending", Some(type_named("Number", vec![])), None)),
    ])
}

// ---
// Round trips
// ---

#[test]
fn every_kind_round_trips_modulo_ids() {
    let tree = kitchen_sink();
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn top_level_declarations_round_trip() {
    let tree = top_level(vec![
        import("Prelude"),
        typed_variable("x", "Number", number(123.0)),
        namespace("Test", vec![typed_variable("b", "Boolean", boolean(false))]),
        record("Empty", vec![]),
    ]);
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn empty_containers_round_trip() {
    for tree in [top_level(vec![]), program(vec![]), namespace("N", vec![])] {
        assert_eq!(round_trip(&tree), tree);
    }
}

#[test]
fn printing_is_idempotent_through_parse() {
    let first = print(&kitchen_sink());
    let second = print(&parse(&first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn parsing_mints_fresh_ids() {
    let text = print(&kitchen_sink());
    let a = parse(&text).unwrap();
    let b = parse(&text).unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.normalize_ids(), b.normalize_ids());
}

#[test]
fn sequential_ids_are_deterministic() {
    let text = r#"<Declarations><ImportDeclaration name="Prelude"/></Declarations>"#;
    let parse_with_counter = || {
        Parser::new(ConversionTables::standard(), SequentialIds::new())
            .parse(&SourceContext::anonymous(text))
            .unwrap()
    };
    let tree = parse_with_counter();
    assert_eq!(tree, parse_with_counter());
    assert_eq!(
        serde_json::to_value(&tree).unwrap()["data"]["declarations"][0]["data"]["name"]["id"],
        "0"
    );
}

#[test]
fn deepest_supported_nesting_round_trips() {
    let mut tree = namespace("leaf", vec![]);
    for _ in 1..MAX_DEPTH {
        tree = namespace("n", vec![tree]);
    }
    assert_eq!(round_trip(&tree), tree);

    let too_deep = print(&namespace("n", vec![tree]));
    assert_eq!(parse(&too_deep).unwrap_err().kind(), ErrorKind::MalformedMarkup);
}

// ---
// Placeholder erasure
// ---

#[test]
fn placeholders_never_reach_markup() {
    let text = print(&kitchen_sink());
    assert!(!text.contains("Placeholder"), "{text}");
}

#[test]
fn call_argument_placeholder_is_dropped_and_restored() {
    let tree = call(identifier("f"), vec![argument(None, literal(number(1.0)))]);
    assert_eq!(
        bare(&tree),
        "<FunctionCallExpression>\n  <IdentifierExpression name=\"f\"/>\n  <Argument>\n    <Literal type=\"Number\" value=\"1\"/>\n  </Argument>\n</FunctionCallExpression>"
    );

    let SyntaxNode::FunctionCallExpression { arguments, .. } = round_trip(&tree) else {
        panic!("expected a function call");
    };
    assert_eq!(arguments.len(), 2);
    assert!(arguments[1].is_placeholder());
}

// ---
// Compact literals
// ---

#[test]
fn unannotated_literal_variable_prints_compact() {
    let tree = variable("x", None, Some(literal(boolean(true))));
    assert_eq!(
        print(&tree),
        "<?xml version=\"1.0\"?>\n<Variable name=\"x\" type=\"Boolean\" value=\"true\"/>"
    );

    let parsed = round_trip(&tree);
    assert_eq!(parsed, typed_variable("x", "Boolean", boolean(true)));
}

#[test]
fn annotation_disagreeing_with_literal_prints_child() {
    let tree = variable("c", Some(type_named("Color", vec![])), Some(literal(string("red"))));
    assert_eq!(
        bare(&tree),
        "<Variable name=\"c\" type=\"Color\">\n  <Literal type=\"String\" value=\"red\"/>\n</Variable>"
    );
}

#[test]
fn array_variable_uses_item_children() {
    let tree = variable(
        "xs",
        Some(type_named("Array", vec![type_named("Number", vec![])])),
        Some(literal(array(vec![literal(number(1.0))]))),
    );
    assert_eq!(
        bare(&tree),
        "<Variable name=\"xs\" type=\"Array(Number)\">\n  <Literal type=\"Number\" value=\"1\"/>\n</Variable>"
    );
}

// ---
// Declaration wrapping
// ---

#[test]
fn declarations_print_with_prefixed_element_names() {
    let tree = program(vec![
        declaration(import("Prelude")),
        declaration(namespace("Colors", vec![])),
        declaration(typed_variable("x", "Number", number(1.0))),
    ]);
    assert_eq!(
        bare(&tree),
        "<Program>\n  <Declaration.ImportDeclaration name=\"Prelude\"/>\n  <Declaration.Namespace name=\"Colors\"/>\n  <Declaration.Variable name=\"x\" type=\"Number\" value=\"1\"/>\n</Program>"
    );
    assert_eq!(round_trip(&tree), tree);
}

#[test]
fn unsupported_declaration_prefix_fails() {
    for text in ["<Declaration.Record name=\"R\"/>", "<Declaration.Foo/>"] {
        assert_eq!(parse(text).unwrap_err().kind(), ErrorKind::UnrecognizedNode, "{text}");
    }
}

// ---
// Annotation codec
// ---

#[test]
fn optional_string_annotation_decodes() {
    let decoded = annotation::deserialize("Optional(String)", &mut SequentialIds::new());
    let mut normalized = variable("v", Some(decoded), None).normalize_ids();
    let SyntaxNode::Variable { annotation, .. } = &mut normalized else {
        unreachable!();
    };
    assert_eq!(
        annotation.take(),
        Some(type_named("Optional", vec![type_named("String", vec![])]))
    );
}

#[test]
fn nested_generic_annotations_round_trip() {
    let tree = variable(
        "m",
        Some(type_named(
            "Map",
            vec![
                type_named("List", vec![type_named("Int", vec![]), type_named("Float", vec![])]),
                type_named("Bool", vec![]),
            ],
        )),
        None,
    );
    assert_eq!(bare(&tree), "<Variable name=\"m\" type=\"Map(List(Int,Float),Bool)\"/>");
    assert_eq!(round_trip(&tree), tree);
}

// ---
// Failures
// ---

#[test]
fn unknown_element_fails_instead_of_defaulting() {
    let error = parse("<Frobnicate/>").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnrecognizedNode);
    assert!(error.to_string().contains("Frobnicate"));
}

#[test]
fn malformed_text_fails_with_location() {
    let error = parse("<?xml version=\"1.0\"?>\n<Program>\n  <Declaration.ImportDeclaration name=\"Prelude\">\n</Program>")
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MalformedMarkup);
    let logic_markup::ParseError::MalformedMarkup { span, .. } = error else {
        unreachable!();
    };
    assert!(span.is_some());
}
