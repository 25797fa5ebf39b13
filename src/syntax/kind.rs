//! Fieldless tags for syntax node kinds and the named fields a node exposes.
//!
//! Lookup tables are keyed by these tags rather than by strings so that adding a
//! node kind is checked by the compiler in every table and every match arm.

use std::fmt;

/// The kind tag of a [`SyntaxNode`](super::SyntaxNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Program,
    TopLevelDeclarations,
    Namespace,
    Record,
    ImportDeclaration,
    Declaration,
    Variable,
    LiteralExpression,
    Boolean,
    Number,
    String,
    Color,
    Array,
    IdentifierExpression,
    FunctionCallExpression,
    Argument,
    MemberExpression,
    Placeholder,
}

impl NodeKind {
    pub const ALL: [NodeKind; 18] = [
        NodeKind::Program,
        NodeKind::TopLevelDeclarations,
        NodeKind::Namespace,
        NodeKind::Record,
        NodeKind::ImportDeclaration,
        NodeKind::Declaration,
        NodeKind::Variable,
        NodeKind::LiteralExpression,
        NodeKind::Boolean,
        NodeKind::Number,
        NodeKind::String,
        NodeKind::Color,
        NodeKind::Array,
        NodeKind::IdentifierExpression,
        NodeKind::FunctionCallExpression,
        NodeKind::Argument,
        NodeKind::MemberExpression,
        NodeKind::Placeholder,
    ];

    /// The camelCase tag used in the JSON document form.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::TopLevelDeclarations => "topLevelDeclarations",
            NodeKind::Namespace => "namespace",
            NodeKind::Record => "record",
            NodeKind::ImportDeclaration => "importDeclaration",
            NodeKind::Declaration => "declaration",
            NodeKind::Variable => "variable",
            NodeKind::LiteralExpression => "literalExpression",
            NodeKind::Boolean => "boolean",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Color => "color",
            NodeKind::Array => "array",
            NodeKind::IdentifierExpression => "identifierExpression",
            NodeKind::FunctionCallExpression => "functionCallExpression",
            NodeKind::Argument => "argument",
            NodeKind::MemberExpression => "memberExpression",
            NodeKind::Placeholder => "placeholder",
        }
    }

    /// Kinds that may stand in a literal expression.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            NodeKind::Boolean
                | NodeKind::Number
                | NodeKind::String
                | NodeKind::Color
                | NodeKind::Array
        )
    }

    /// Looks up a kind by its camelCase tag.
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of a node's data record that the lookup tables can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // child slots
    Content,
    Initializer,
    Literal,
    Expression,
    Block,
    Declarations,
    Arguments,
    Value,
    // projections
    Name,
    MemberName,
    Annotation,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Content => "content",
            Field::Initializer => "initializer",
            Field::Literal => "literal",
            Field::Expression => "expression",
            Field::Block => "block",
            Field::Declarations => "declarations",
            Field::Arguments => "arguments",
            Field::Value => "value",
            Field::Name => "name",
            Field::MemberName => "memberName",
            Field::Annotation => "annotation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
