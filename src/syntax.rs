//! Syntax tree types for the Logic language.
//!
//! A [`SyntaxNode`] is a closed set of variants, each carrying an id and a data
//! record. The serde representation matches the JSON document form used by
//! the editor: `{"type": "variable", "data": {"id": ..., "name": ...}}`.

use serde::{Deserialize, Serialize};

pub mod kind;

pub use kind::{Field, NodeKind};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A named binding: the target of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub name: String,
}

/// A named reference used by expressions and type annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub id: String,
    pub is_placeholder: bool,
    pub string: String,
}

/// A named type plus its generic arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum TypeAnnotation {
    TypeIdentifier {
        id: String,
        identifier: Identifier,
        #[serde(default)]
        generic_arguments: Vec<TypeAnnotation>,
    },
}

/// One construct of the Logic language.
///
/// Lists that end in an editor insertion point (declarations, blocks, call
/// arguments, array values) hold exactly one trailing [`SyntaxNode::Placeholder`]
/// when non-empty. The markup encoding never materialises that sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "data",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum SyntaxNode {
    Program {
        id: String,
        block: Vec<SyntaxNode>,
    },
    TopLevelDeclarations {
        id: String,
        declarations: Vec<SyntaxNode>,
    },
    Namespace {
        id: String,
        name: Pattern,
        declarations: Vec<SyntaxNode>,
    },
    Record {
        id: String,
        name: Pattern,
        #[serde(default)]
        generic_parameters: Vec<Pattern>,
        declarations: Vec<SyntaxNode>,
    },
    ImportDeclaration {
        id: String,
        name: Pattern,
    },
    /// Statement wrapper around an import, namespace or variable declaration.
    Declaration {
        id: String,
        content: Box<SyntaxNode>,
    },
    Variable {
        id: String,
        name: Pattern,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotation: Option<TypeAnnotation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initializer: Option<Box<SyntaxNode>>,
    },
    LiteralExpression {
        id: String,
        literal: Box<SyntaxNode>,
    },
    Boolean {
        id: String,
        value: bool,
    },
    Number {
        id: String,
        value: f64,
    },
    String {
        id: String,
        value: String,
    },
    Color {
        id: String,
        value: String,
    },
    Array {
        id: String,
        value: Vec<SyntaxNode>,
    },
    IdentifierExpression {
        id: String,
        identifier: Identifier,
    },
    FunctionCallExpression {
        id: String,
        expression: Box<SyntaxNode>,
        arguments: Vec<SyntaxNode>,
    },
    Argument {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        expression: Box<SyntaxNode>,
    },
    MemberExpression {
        id: String,
        expression: Box<SyntaxNode>,
        member_name: Identifier,
    },
    /// An empty slot kept for editor insertion. Carries no semantic content.
    Placeholder {
        id: String,
    },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Pattern {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Identifier {
    pub fn new(id: impl Into<String>, string: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_placeholder: false,
            string: string.into(),
        }
    }
}

impl TypeAnnotation {
    /// The identifier string at the root of the annotation (`Array` for `Array(Number)`).
    pub fn root_name(&self) -> &str {
        match self {
            TypeAnnotation::TypeIdentifier { identifier, .. } => &identifier.string,
        }
    }

    /// True for a bare type identifier with no generic arguments named `name`.
    pub fn is_plain(&self, name: &str) -> bool {
        match self {
            TypeAnnotation::TypeIdentifier {
                identifier,
                generic_arguments,
                ..
            } => generic_arguments.is_empty() && identifier.string == name,
        }
    }

    fn for_each_id_mut(&mut self, f: &mut dyn FnMut(&mut String)) {
        match self {
            TypeAnnotation::TypeIdentifier {
                id,
                identifier,
                generic_arguments,
            } => {
                f(id);
                f(&mut identifier.id);
                for argument in generic_arguments {
                    argument.for_each_id_mut(f);
                }
            }
        }
    }
}

impl SyntaxNode {
    pub fn placeholder(id: impl Into<String>) -> Self {
        SyntaxNode::Placeholder { id: id.into() }
    }

    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------

    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Program { .. } => NodeKind::Program,
            SyntaxNode::TopLevelDeclarations { .. } => NodeKind::TopLevelDeclarations,
            SyntaxNode::Namespace { .. } => NodeKind::Namespace,
            SyntaxNode::Record { .. } => NodeKind::Record,
            SyntaxNode::ImportDeclaration { .. } => NodeKind::ImportDeclaration,
            SyntaxNode::Declaration { .. } => NodeKind::Declaration,
            SyntaxNode::Variable { .. } => NodeKind::Variable,
            SyntaxNode::LiteralExpression { .. } => NodeKind::LiteralExpression,
            SyntaxNode::Boolean { .. } => NodeKind::Boolean,
            SyntaxNode::Number { .. } => NodeKind::Number,
            SyntaxNode::String { .. } => NodeKind::String,
            SyntaxNode::Color { .. } => NodeKind::Color,
            SyntaxNode::Array { .. } => NodeKind::Array,
            SyntaxNode::IdentifierExpression { .. } => NodeKind::IdentifierExpression,
            SyntaxNode::FunctionCallExpression { .. } => NodeKind::FunctionCallExpression,
            SyntaxNode::Argument { .. } => NodeKind::Argument,
            SyntaxNode::MemberExpression { .. } => NodeKind::MemberExpression,
            SyntaxNode::Placeholder { .. } => NodeKind::Placeholder,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SyntaxNode::Program { id, .. }
            | SyntaxNode::TopLevelDeclarations { id, .. }
            | SyntaxNode::Namespace { id, .. }
            | SyntaxNode::Record { id, .. }
            | SyntaxNode::ImportDeclaration { id, .. }
            | SyntaxNode::Declaration { id, .. }
            | SyntaxNode::Variable { id, .. }
            | SyntaxNode::LiteralExpression { id, .. }
            | SyntaxNode::Boolean { id, .. }
            | SyntaxNode::Number { id, .. }
            | SyntaxNode::String { id, .. }
            | SyntaxNode::Color { id, .. }
            | SyntaxNode::Array { id, .. }
            | SyntaxNode::IdentifierExpression { id, .. }
            | SyntaxNode::FunctionCallExpression { id, .. }
            | SyntaxNode::Argument { id, .. }
            | SyntaxNode::MemberExpression { id, .. }
            | SyntaxNode::Placeholder { id } => id,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SyntaxNode::Placeholder { .. })
    }

    /// Nodes that may stand in a declarations list.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            SyntaxNode::Variable { .. }
                | SyntaxNode::Namespace { .. }
                | SyntaxNode::Record { .. }
                | SyntaxNode::ImportDeclaration { .. }
                | SyntaxNode::Placeholder { .. }
        )
    }

    /// Nodes that may stand in an expression position.
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            SyntaxNode::IdentifierExpression { .. }
                | SyntaxNode::FunctionCallExpression { .. }
                | SyntaxNode::LiteralExpression { .. }
                | SyntaxNode::MemberExpression { .. }
        )
    }

    // ------------------------------------------------------------------------
    // Field access by table entry
    // ------------------------------------------------------------------------

    /// The node stored in a singular child slot, if this node has that slot and it is filled.
    pub fn child(&self, field: Field) -> Option<&SyntaxNode> {
        match (self, field) {
            (SyntaxNode::Declaration { content, .. }, Field::Content) => Some(content),
            (SyntaxNode::Variable { initializer, .. }, Field::Initializer) => {
                initializer.as_deref()
            }
            (SyntaxNode::LiteralExpression { literal, .. }, Field::Literal) => Some(literal),
            (SyntaxNode::Argument { expression, .. }, Field::Expression)
            | (SyntaxNode::MemberExpression { expression, .. }, Field::Expression)
            | (SyntaxNode::FunctionCallExpression { expression, .. }, Field::Expression) => {
                Some(expression)
            }
            _ => None,
        }
    }

    /// The list stored in a plural child slot.
    pub fn children(&self, field: Field) -> Option<&[SyntaxNode]> {
        match (self, field) {
            (SyntaxNode::Program { block, .. }, Field::Block) => Some(block),
            (SyntaxNode::TopLevelDeclarations { declarations, .. }, Field::Declarations)
            | (SyntaxNode::Namespace { declarations, .. }, Field::Declarations)
            | (SyntaxNode::Record { declarations, .. }, Field::Declarations) => {
                Some(declarations)
            }
            (SyntaxNode::FunctionCallExpression { arguments, .. }, Field::Arguments) => {
                Some(arguments)
            }
            (SyntaxNode::Array { value, .. }, Field::Value) => Some(value),
            _ => None,
        }
    }

    pub fn pattern(&self, field: Field) -> Option<&Pattern> {
        match (self, field) {
            (SyntaxNode::Namespace { name, .. }, Field::Name)
            | (SyntaxNode::Record { name, .. }, Field::Name)
            | (SyntaxNode::ImportDeclaration { name, .. }, Field::Name)
            | (SyntaxNode::Variable { name, .. }, Field::Name) => Some(name),
            _ => None,
        }
    }

    pub fn identifier(&self, field: Field) -> Option<&Identifier> {
        match (self, field) {
            (SyntaxNode::MemberExpression { member_name, .. }, Field::MemberName) => {
                Some(member_name)
            }
            _ => None,
        }
    }

    pub fn annotation(&self, field: Field) -> Option<&TypeAnnotation> {
        match (self, field) {
            (SyntaxNode::Variable { annotation, .. }, Field::Annotation) => annotation.as_ref(),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------------

    /// Visits every id in the tree: node ids, pattern, identifier and annotation ids.
    pub fn for_each_id_mut(&mut self, f: &mut dyn FnMut(&mut String)) {
        match self {
            SyntaxNode::Program { id, block } => {
                f(id);
                block.iter_mut().for_each(|node| node.for_each_id_mut(f));
            }
            SyntaxNode::TopLevelDeclarations { id, declarations } => {
                f(id);
                declarations
                    .iter_mut()
                    .for_each(|node| node.for_each_id_mut(f));
            }
            SyntaxNode::Namespace {
                id,
                name,
                declarations,
            } => {
                f(id);
                f(&mut name.id);
                declarations
                    .iter_mut()
                    .for_each(|node| node.for_each_id_mut(f));
            }
            SyntaxNode::Record {
                id,
                name,
                generic_parameters,
                declarations,
            } => {
                f(id);
                f(&mut name.id);
                generic_parameters
                    .iter_mut()
                    .for_each(|parameter| f(&mut parameter.id));
                declarations
                    .iter_mut()
                    .for_each(|node| node.for_each_id_mut(f));
            }
            SyntaxNode::ImportDeclaration { id, name } => {
                f(id);
                f(&mut name.id);
            }
            SyntaxNode::Declaration { id, content } => {
                f(id);
                content.for_each_id_mut(f);
            }
            SyntaxNode::Variable {
                id,
                name,
                annotation,
                initializer,
            } => {
                f(id);
                f(&mut name.id);
                if let Some(annotation) = annotation {
                    annotation.for_each_id_mut(f);
                }
                if let Some(initializer) = initializer {
                    initializer.for_each_id_mut(f);
                }
            }
            SyntaxNode::LiteralExpression { id, literal } => {
                f(id);
                literal.for_each_id_mut(f);
            }
            SyntaxNode::Array { id, value } => {
                f(id);
                value.iter_mut().for_each(|node| node.for_each_id_mut(f));
            }
            SyntaxNode::IdentifierExpression { id, identifier } => {
                f(id);
                f(&mut identifier.id);
            }
            SyntaxNode::FunctionCallExpression {
                id,
                expression,
                arguments,
            } => {
                f(id);
                expression.for_each_id_mut(f);
                arguments.iter_mut().for_each(|node| node.for_each_id_mut(f));
            }
            SyntaxNode::Argument { id, expression, .. } => {
                f(id);
                expression.for_each_id_mut(f);
            }
            SyntaxNode::MemberExpression {
                id,
                expression,
                member_name,
            } => {
                f(id);
                expression.for_each_id_mut(f);
                f(&mut member_name.id);
            }
            SyntaxNode::Boolean { id, .. }
            | SyntaxNode::Number { id, .. }
            | SyntaxNode::String { id, .. }
            | SyntaxNode::Color { id, .. }
            | SyntaxNode::Placeholder { id } => f(id),
        }
    }

    /// Replaces every id in the tree with `"0"`, for comparing trees modulo identity.
    pub fn normalize_ids(mut self) -> Self {
        self.for_each_id_mut(&mut |id| {
            id.clear();
            id.push('0');
        });
        self
    }
}
