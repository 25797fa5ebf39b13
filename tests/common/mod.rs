//! Tree builders shared by the integration tests.
//!
//! Every id is `"0"`, matching [`SyntaxNode::normalize_ids`], so built trees
//! compare equal to parsed trees after normalisation.

#![allow(dead_code)]

use logic_markup::{Identifier, Pattern, SyntaxNode, TypeAnnotation};

pub fn placeholder() -> SyntaxNode {
    SyntaxNode::placeholder("0")
}

pub fn pattern(name: &str) -> Pattern {
    Pattern::new("0", name)
}

pub fn type_named(name: &str, generic_arguments: Vec<TypeAnnotation>) -> TypeAnnotation {
    TypeAnnotation::TypeIdentifier {
        id: "0".into(),
        identifier: Identifier::new("0", name),
        generic_arguments,
    }
}

pub fn literal(literal: SyntaxNode) -> SyntaxNode {
    SyntaxNode::LiteralExpression {
        id: "0".into(),
        literal: Box::new(literal),
    }
}

pub fn boolean(value: bool) -> SyntaxNode {
    SyntaxNode::Boolean {
        id: "0".into(),
        value,
    }
}

pub fn number(value: f64) -> SyntaxNode {
    SyntaxNode::Number {
        id: "0".into(),
        value,
    }
}

pub fn string(value: &str) -> SyntaxNode {
    SyntaxNode::String {
        id: "0".into(),
        value: value.into(),
    }
}

pub fn color(value: &str) -> SyntaxNode {
    SyntaxNode::Color {
        id: "0".into(),
        value: value.into(),
    }
}

/// Appends the trailing placeholder.
pub fn array(mut items: Vec<SyntaxNode>) -> SyntaxNode {
    items.push(placeholder());
    SyntaxNode::Array {
        id: "0".into(),
        value: items,
    }
}

pub fn identifier(name: &str) -> SyntaxNode {
    SyntaxNode::IdentifierExpression {
        id: "0".into(),
        identifier: Identifier::new("0", name),
    }
}

pub fn variable(
    name: &str,
    annotation: Option<TypeAnnotation>,
    initializer: Option<SyntaxNode>,
) -> SyntaxNode {
    SyntaxNode::Variable {
        id: "0".into(),
        name: pattern(name),
        annotation,
        initializer: initializer.map(Box::new),
    }
}

/// A variable annotated with a plain type and initialized with a literal.
pub fn typed_variable(name: &str, type_name: &str, value: SyntaxNode) -> SyntaxNode {
    variable(name, Some(type_named(type_name, vec![])), Some(literal(value)))
}

pub fn import(name: &str) -> SyntaxNode {
    SyntaxNode::ImportDeclaration {
        id: "0".into(),
        name: pattern(name),
    }
}

pub fn declaration(content: SyntaxNode) -> SyntaxNode {
    SyntaxNode::Declaration {
        id: "0".into(),
        content: Box::new(content),
    }
}

/// Appends the trailing placeholder.
pub fn namespace(name: &str, mut declarations: Vec<SyntaxNode>) -> SyntaxNode {
    declarations.push(placeholder());
    SyntaxNode::Namespace {
        id: "0".into(),
        name: pattern(name),
        declarations,
    }
}

/// Appends the trailing placeholder.
pub fn record(name: &str, mut declarations: Vec<SyntaxNode>) -> SyntaxNode {
    declarations.push(placeholder());
    SyntaxNode::Record {
        id: "0".into(),
        name: pattern(name),
        generic_parameters: vec![],
        declarations,
    }
}

/// Appends the trailing placeholder.
pub fn top_level(mut declarations: Vec<SyntaxNode>) -> SyntaxNode {
    declarations.push(placeholder());
    SyntaxNode::TopLevelDeclarations {
        id: "0".into(),
        declarations,
    }
}

/// Appends the trailing placeholder.
pub fn program(mut block: Vec<SyntaxNode>) -> SyntaxNode {
    block.push(placeholder());
    SyntaxNode::Program {
        id: "0".into(),
        block,
    }
}

pub fn argument(label: Option<&str>, expression: SyntaxNode) -> SyntaxNode {
    SyntaxNode::Argument {
        id: "0".into(),
        label: label.map(String::from),
        expression: Box::new(expression),
    }
}

/// Appends the trailing placeholder when there is at least one argument.
pub fn call(callee: SyntaxNode, mut arguments: Vec<SyntaxNode>) -> SyntaxNode {
    if !arguments.is_empty() {
        arguments.push(placeholder());
    }
    SyntaxNode::FunctionCallExpression {
        id: "0".into(),
        expression: Box::new(callee),
        arguments,
    }
}

pub fn member(expression: SyntaxNode, member_name: &str) -> SyntaxNode {
    SyntaxNode::MemberExpression {
        id: "0".into(),
        expression: Box::new(expression),
        member_name: Identifier::new("0", member_name),
    }
}
