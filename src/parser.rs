//! Markup text → syntax tree.
//!
//! Text is read into a generic [`Element`] tree, then walked back into a
//! [`SyntaxNode`]. Every node and sub-record gets a fresh id from the
//! parser's [`IdGenerator`], and the trailing placeholders the printer left out
//! are re-inserted.

use crate::annotation;
use crate::errors::ParseError;
use crate::ids::{IdGenerator, UuidIds};
use crate::markup::{self, Element};
use crate::source::SourceContext;
use crate::syntax::{Field, Identifier, NodeKind, Pattern, SyntaxNode};
use crate::tables::{
    ConversionTables, ARRAY_TYPE, DECLARATION_CONTENT, DECLARATION_PREFIX, MAX_DEPTH,
};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse markup text with the standard tables and random ids.
///
/// Parsing is the inverse of [`print`](crate::print) modulo ids, with one
/// exception: a compact `Variable` always gets its annotation from `type`, so
/// an unannotated variable with a scalar literal initializer comes back
/// annotated with the literal's type. Nesting deeper than
/// [`MAX_DEPTH`] elements is rejected as malformed.
pub fn parse(text: &str) -> Result<SyntaxNode, ParseError> {
    Parser::default().parse(&SourceContext::anonymous(text))
}

/// Configurable parser over a set of conversion tables and an id source.
#[derive(Debug, Clone)]
pub struct Parser<'t, G> {
    tables: &'t ConversionTables,
    ids: G,
}

impl Default for Parser<'static, UuidIds> {
    fn default() -> Self {
        Self::new(ConversionTables::standard(), UuidIds)
    }
}

impl<'t, G: IdGenerator> Parser<'t, G> {
    pub fn new(tables: &'t ConversionTables, ids: G) -> Self {
        Self { tables, ids }
    }

    /// Parse the text held by `source`. Errors point into `source`.
    pub fn parse(&mut self, source: &SourceContext) -> Result<SyntaxNode, ParseError> {
        let root = markup::read(source)?;
        tracing::debug!(source = %source.name, root = %root.name, "parsing markup document");
        self.from_markup(&root, source)
    }

    /// Build a syntax tree from an already-read element tree.
    pub fn from_markup(
        &mut self,
        root: &Element,
        source: &SourceContext,
    ) -> Result<SyntaxNode, ParseError> {
        Builder {
            tables: self.tables,
            ids: &mut self.ids,
            source,
            depth: 0,
        }
        .node(root)
    }
}

// ============================================================================
// TREE BUILDING
// ============================================================================

struct Builder<'a> {
    tables: &'a ConversionTables,
    ids: &'a mut dyn IdGenerator,
    source: &'a SourceContext,
    depth: usize,
}

/// Slot contents collected before a node is assembled.
#[derive(Default)]
struct Fields {
    single: Option<SyntaxNode>,
    plural: Vec<SyntaxNode>,
    pattern: Option<Pattern>,
    identifier: Option<Identifier>,
}

impl Builder<'_> {
    fn node(&mut self, element: &Element) -> Result<SyntaxNode, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::malformed(
                self.source,
                format!("nesting deeper than {MAX_DEPTH} elements at `{}`", element.name),
                None,
            ));
        }

        self.depth += 1;
        let node = self.dispatch(&element.name, element);
        self.depth -= 1;
        node
    }

    /// Special-cased element names first, then the table-driven default.
    fn dispatch(&mut self, name: &str, element: &Element) -> Result<SyntaxNode, ParseError> {
        tracing::trace!(element = name, "building node");

        match name {
            "IdentifierExpression" => Ok(SyntaxNode::IdentifierExpression {
                id: self.ids.next_id(),
                identifier: self.identifier_from(element),
            }),
            "Record" => self.record(element),
            "Literal" => self.literal(element),
            "Variable" => self.variable(name, element),
            _ => match name.strip_prefix(DECLARATION_PREFIX) {
                Some(inner) => self.declaration(name, inner, element),
                None => self.standard(name, element),
            },
        }
    }

    // ------------------------------------------------------------------------
    // Special cases
    // ------------------------------------------------------------------------

    fn declaration(
        &mut self,
        name: &str,
        inner: &str,
        element: &Element,
    ) -> Result<SyntaxNode, ParseError> {
        let recognized = DECLARATION_CONTENT
            .iter()
            .any(|kind| self.tables.element_name(*kind) == inner);
        if !recognized {
            return Err(ParseError::unrecognized(name));
        }

        let content = self.dispatch(inner, element)?;
        Ok(SyntaxNode::Declaration {
            id: self.ids.next_id(),
            content: Box::new(content),
        })
    }

    fn record(&mut self, element: &Element) -> Result<SyntaxNode, ParseError> {
        let declarations = self
            .nodes(&element.children)?
            .into_iter()
            .filter(SyntaxNode::is_declaration)
            .collect();

        Ok(SyntaxNode::Record {
            id: self.ids.next_id(),
            name: self.pattern_from(element),
            generic_parameters: Vec::new(),
            declarations: self.restore(NodeKind::Record, declarations),
        })
    }

    /// `<Literal type="T" value="v">` is a literal expression wrapping a `<T value="v">` leaf.
    fn literal(&mut self, element: &Element) -> Result<SyntaxNode, ParseError> {
        let mut leaf = Element::new(element.attribute("type").unwrap_or_default())
            .with_children(element.children.iter().cloned());
        if let Some(value) = element.attribute("value") {
            leaf = leaf.with_attribute("value", value);
        }

        let expression = Element::new(self.tables.element_name(NodeKind::LiteralExpression))
            .with_child(leaf);
        self.standard(&expression.name, &expression)
    }

    fn variable(&mut self, name: &str, element: &Element) -> Result<SyntaxNode, ParseError> {
        let type_name = element.attribute("type");

        if let (Some(type_name), Some(value)) = (type_name, element.attribute("value")) {
            if let Some(kind) = self.tables.compact_kind(type_name) {
                let literal = self.scalar_literal(kind, Some(value))?;
                return Ok(SyntaxNode::Variable {
                    id: self.ids.next_id(),
                    name: self.pattern_from(element),
                    annotation: Some(annotation::deserialize(type_name, self.ids)),
                    initializer: Some(Box::new(SyntaxNode::LiteralExpression {
                        id: self.ids.next_id(),
                        literal: Box::new(literal),
                    })),
                });
            }
        }

        if let Some(type_name) = type_name {
            let annotation = annotation::deserialize(type_name, self.ids);
            if annotation.root_name() == ARRAY_TYPE {
                let items = self
                    .nodes(&element.children)?
                    .into_iter()
                    .filter(SyntaxNode::is_expression)
                    .collect();
                let array = SyntaxNode::Array {
                    id: self.ids.next_id(),
                    value: self.restore(NodeKind::Array, items),
                };
                return Ok(SyntaxNode::Variable {
                    id: self.ids.next_id(),
                    name: self.pattern_from(element),
                    annotation: Some(annotation),
                    initializer: Some(Box::new(SyntaxNode::LiteralExpression {
                        id: self.ids.next_id(),
                        literal: Box::new(array),
                    })),
                });
            }
        }

        self.standard(name, element)
    }

    // ------------------------------------------------------------------------
    // Default path
    // ------------------------------------------------------------------------

    fn standard(&mut self, name: &str, element: &Element) -> Result<SyntaxNode, ParseError> {
        let kind = self
            .tables
            .kind_for_element(name)
            .ok_or_else(|| ParseError::unrecognized(name))?;

        let mut fields = Fields::default();

        if kind == NodeKind::FunctionCallExpression {
            if let Some((callee, arguments)) = element.children.split_first() {
                fields.single = Some(self.node(callee)?);
                let arguments = self.nodes(arguments)?;
                fields.plural = if arguments.is_empty() {
                    arguments
                } else {
                    self.restore(kind, arguments)
                };
            }
        } else if self.tables.singular_slot(kind).is_some() {
            if let Some(child) = element.children.first() {
                fields.single = Some(self.node(child)?);
            }
        } else if self.tables.plural_slot(kind).is_some() {
            let items = self.nodes(&element.children)?;
            fields.plural = self.restore(kind, items);
        }

        if self.tables.pattern_slot(kind).is_some() {
            fields.pattern = Some(self.pattern_from(element));
        }
        if self.tables.identifier_slot(kind).is_some() {
            fields.identifier = Some(self.identifier_from(element));
        }

        self.assemble(kind, name, element, fields)
    }

    /// Builds the typed node for `kind` from collected slot contents and the
    /// element's remaining attributes.
    fn assemble(
        &mut self,
        kind: NodeKind,
        name: &str,
        element: &Element,
        fields: Fields,
    ) -> Result<SyntaxNode, ParseError> {
        let Fields {
            single,
            plural,
            pattern,
            identifier,
        } = fields;
        let id = self.ids.next_id();

        let node = match kind {
            NodeKind::Program => SyntaxNode::Program { id, block: plural },
            NodeKind::TopLevelDeclarations => SyntaxNode::TopLevelDeclarations {
                id,
                declarations: plural,
            },
            NodeKind::Namespace => SyntaxNode::Namespace {
                id,
                name: self.pattern_or(pattern, element),
                declarations: plural,
            },
            NodeKind::Record => SyntaxNode::Record {
                id,
                name: self.pattern_or(pattern, element),
                generic_parameters: Vec::new(),
                declarations: plural,
            },
            NodeKind::ImportDeclaration => SyntaxNode::ImportDeclaration {
                id,
                name: self.pattern_or(pattern, element),
            },
            NodeKind::Declaration => SyntaxNode::Declaration {
                id,
                content: self.require(single, name, Field::Content)?,
            },
            NodeKind::Variable => {
                let annotation = match self.tables.annotation_slot(kind) {
                    Some(_) => element
                        .attribute("type")
                        .map(|text| annotation::deserialize(text, self.ids)),
                    None => None,
                };
                SyntaxNode::Variable {
                    id,
                    name: self.pattern_or(pattern, element),
                    annotation,
                    initializer: single.map(Box::new),
                }
            }
            NodeKind::LiteralExpression => {
                let literal = self.require(single, name, Field::Literal)?;
                if !literal.kind().is_literal() {
                    return Err(ParseError::malformed(
                        self.source,
                        format!(
                            "`{}` is not a literal kind",
                            self.tables.element_name(literal.kind())
                        ),
                        None,
                    )
                    .with_help("literal types are `Boolean`, `Number`, `String`, `Color` and `Array`"));
                }
                SyntaxNode::LiteralExpression { id, literal }
            }
            NodeKind::Boolean | NodeKind::Number | NodeKind::String | NodeKind::Color => {
                return self.scalar_literal_with_id(kind, id, element.attribute("value"));
            }
            NodeKind::Array => SyntaxNode::Array { id, value: plural },
            NodeKind::IdentifierExpression => SyntaxNode::IdentifierExpression {
                id,
                identifier: self.identifier_or(identifier, element),
            },
            NodeKind::FunctionCallExpression => SyntaxNode::FunctionCallExpression {
                id,
                expression: self.require(single, name, Field::Expression)?,
                arguments: plural,
            },
            NodeKind::Argument => SyntaxNode::Argument {
                id,
                label: element.attribute("label").map(String::from),
                expression: self.require(single, name, Field::Expression)?,
            },
            NodeKind::MemberExpression => SyntaxNode::MemberExpression {
                id,
                expression: self.require(single, name, Field::Expression)?,
                member_name: self.identifier_or(identifier, element),
            },
            NodeKind::Placeholder => SyntaxNode::Placeholder { id },
        };

        Ok(node)
    }

    // ------------------------------------------------------------------------
    // Literals
    // ------------------------------------------------------------------------

    fn scalar_literal(
        &mut self,
        kind: NodeKind,
        value: Option<&str>,
    ) -> Result<SyntaxNode, ParseError> {
        let id = self.ids.next_id();
        self.scalar_literal_with_id(kind, id, value)
    }

    fn scalar_literal_with_id(
        &self,
        kind: NodeKind,
        id: String,
        value: Option<&str>,
    ) -> Result<SyntaxNode, ParseError> {
        let value = value.unwrap_or_default();
        match kind {
            NodeKind::Boolean => Ok(SyntaxNode::Boolean {
                id,
                value: value == "true",
            }),
            NodeKind::Number => {
                let number = value.trim().parse::<f64>().map_err(|_| {
                    ParseError::malformed(
                        self.source,
                        format!("invalid number literal `{value}`"),
                        None,
                    )
                })?;
                Ok(SyntaxNode::Number { id, value: number })
            }
            NodeKind::String => Ok(SyntaxNode::String {
                id,
                value: value.to_string(),
            }),
            NodeKind::Color => Ok(SyntaxNode::Color {
                id,
                value: value.to_string(),
            }),
            other => Err(ParseError::unrecognized(self.tables.element_name(other))),
        }
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn nodes(&mut self, elements: &[Element]) -> Result<Vec<SyntaxNode>, ParseError> {
        elements.iter().map(|element| self.node(element)).collect()
    }

    /// Appends the trailing placeholder for kinds whose plural slot is implicit.
    fn restore(&mut self, kind: NodeKind, items: Vec<SyntaxNode>) -> Vec<SyntaxNode> {
        match self.tables.plural_slot(kind) {
            Some(slot) => slot.restore(items, self.ids),
            None => items,
        }
    }

    fn pattern_from(&mut self, element: &Element) -> Pattern {
        Pattern::new(
            self.ids.next_id(),
            element.attribute("name").unwrap_or_default(),
        )
    }

    fn pattern_or(&mut self, pattern: Option<Pattern>, element: &Element) -> Pattern {
        match pattern {
            Some(pattern) => pattern,
            None => self.pattern_from(element),
        }
    }

    fn identifier_from(&mut self, element: &Element) -> Identifier {
        Identifier::new(
            self.ids.next_id(),
            element.attribute("name").unwrap_or_default(),
        )
    }

    fn identifier_or(&mut self, identifier: Option<Identifier>, element: &Element) -> Identifier {
        match identifier {
            Some(identifier) => identifier,
            None => self.identifier_from(element),
        }
    }

    fn require(
        &self,
        child: Option<SyntaxNode>,
        element: &str,
        field: Field,
    ) -> Result<Box<SyntaxNode>, ParseError> {
        child.map(Box::new).ok_or_else(|| {
            ParseError::malformed(
                self.source,
                format!("`{element}` is missing its `{field}` child"),
                None,
            )
        })
    }
}
