//! Syntax tree → markup text.
//!
//! The printer walks a [`SyntaxNode`] into a generic [`Element`] tree, guided by
//! the [`ConversionTables`], and hands it to the markup writer. It is total
//! over trees that satisfy the trailing-placeholder invariant and nest no
//! deeper than [`MAX_DEPTH`](crate::tables::MAX_DEPTH), the same bound the
//! parser enforces.

use crate::annotation;
use crate::markup::{self, Element, WriterOptions};
use crate::syntax::{NodeKind, SyntaxNode, TypeAnnotation};
use crate::tables::{ConversionTables, ARRAY_TYPE, DECLARATION_PREFIX, LITERAL_ELEMENT};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Print a syntax tree with the standard tables and default layout.
///
/// `root` must nest no deeper than [`MAX_DEPTH`](crate::tables::MAX_DEPTH)
/// levels. Parsing the output yields `root` modulo ids, except that a
/// variable printed in compact form always comes back with an annotation.
pub fn print(root: &SyntaxNode) -> String {
    Printer::default().print(root)
}

/// Configurable printer over a set of conversion tables.
#[derive(Debug, Clone, Copy)]
pub struct Printer<'t> {
    tables: &'t ConversionTables,
    options: WriterOptions,
}

impl Default for Printer<'static> {
    fn default() -> Self {
        Self::new(ConversionTables::standard())
    }
}

impl<'t> Printer<'t> {
    pub fn new(tables: &'t ConversionTables) -> Self {
        Self {
            tables,
            options: WriterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    /// Print `root` to markup text.
    pub fn print(&self, root: &SyntaxNode) -> String {
        tracing::debug!(kind = %root.kind(), "printing syntax tree");
        markup::write(&self.to_markup(root), &self.options)
    }

    /// The generic markup tree for `node`, before serialization.
    pub fn to_markup(&self, node: &SyntaxNode) -> Element {
        let kind = node.kind();
        let mut element = Element::new(self.tables.element_name(kind));
        self.project_attributes(node, &mut element);

        match node {
            SyntaxNode::Argument { label, .. } => {
                if let Some(label) = label {
                    element.attributes.insert("label".into(), label.clone());
                }
            }
            SyntaxNode::Variable {
                annotation,
                initializer: Some(initializer),
                ..
            } => {
                if let Some(shorthand) =
                    self.variable_shorthand(&element, annotation.as_ref(), initializer)
                {
                    return shorthand;
                }
            }
            SyntaxNode::Record {
                name, declarations, ..
            } => {
                element.attributes.insert("name".into(), name.name.clone());
                element.children = self.print_list(kind, declarations);
                return element;
            }
            SyntaxNode::Declaration { content, .. } => {
                let mut wrapped = self.to_markup(content);
                wrapped.name = format!("{DECLARATION_PREFIX}{}", wrapped.name);
                return wrapped;
            }
            SyntaxNode::Boolean { .. }
            | SyntaxNode::Number { .. }
            | SyntaxNode::String { .. }
            | SyntaxNode::Color { .. } => {
                if let Some(value) = literal_value(node) {
                    element.attributes.insert("value".into(), value);
                }
            }
            SyntaxNode::LiteralExpression { literal, .. } => {
                return self.collapse_literal(literal);
            }
            SyntaxNode::IdentifierExpression { identifier, .. } => {
                element
                    .attributes
                    .insert("name".into(), identifier.string.clone());
            }
            SyntaxNode::FunctionCallExpression {
                expression,
                arguments,
                ..
            } => {
                element.children.push(self.to_markup(expression));
                element.children.extend(self.print_list(kind, arguments));
                return element;
            }
            _ => {}
        }

        self.print_slot(node, kind, element)
    }

    // ------------------------------------------------------------------------
    // Shaping
    // ------------------------------------------------------------------------

    /// Copies pattern, identifier and annotation projections into flat attributes.
    fn project_attributes(&self, node: &SyntaxNode, element: &mut Element) {
        let kind = node.kind();

        if let Some(pattern) = self
            .tables
            .pattern_slot(kind)
            .and_then(|field| node.pattern(field))
        {
            element
                .attributes
                .insert("name".into(), pattern.name.clone());
        }

        if let Some(identifier) = self
            .tables
            .identifier_slot(kind)
            .and_then(|field| node.identifier(field))
        {
            element
                .attributes
                .insert("name".into(), identifier.string.clone());
        }

        if let Some(annotation) = self
            .tables
            .annotation_slot(kind)
            .and_then(|field| node.annotation(field))
        {
            element
                .attributes
                .insert("type".into(), annotation::serialize(annotation));
        }
    }

    /// Compact leaf form for scalar literal initializers, or the array
    /// shorthand whose children are the array items.
    ///
    /// Returns `None` when the annotation disagrees with the literal, in which
    /// case the initializer is printed as an ordinary child.
    fn variable_shorthand(
        &self,
        element: &Element,
        annotation: Option<&TypeAnnotation>,
        initializer: &SyntaxNode,
    ) -> Option<Element> {
        let SyntaxNode::LiteralExpression { literal, .. } = initializer else {
            return None;
        };

        if let Some(type_name) = self.tables.compact_element(literal.kind()) {
            if !annotation.map_or(true, |annotation| annotation.is_plain(type_name)) {
                return None;
            }
            let mut compact = element.clone();
            compact.attributes.insert("type".into(), type_name.into());
            compact
                .attributes
                .insert("value".into(), literal_value(literal)?);
            return Some(compact);
        }

        if let SyntaxNode::Array { value, .. } = &**literal {
            if annotation.is_some_and(|annotation| annotation.root_name() == ARRAY_TYPE) {
                let mut array = element.clone();
                array.children = self.print_list(NodeKind::Array, value);
                return Some(array);
            }
        }

        None
    }

    /// `literalExpression` collapses into one `Literal` element carrying the
    /// inner literal's element name as `type`.
    fn collapse_literal(&self, literal: &SyntaxNode) -> Element {
        let inner = self.to_markup(literal);
        let mut element = Element::new(LITERAL_ELEMENT).with_attribute("type", inner.name);
        if let Some(value) = inner.attributes.get("value") {
            element.attributes.insert("value".into(), value.clone());
        }
        element.children = inner.children;
        element
    }

    // ------------------------------------------------------------------------
    // Slots
    // ------------------------------------------------------------------------

    fn print_slot(&self, node: &SyntaxNode, kind: NodeKind, mut element: Element) -> Element {
        if let Some(field) = self.tables.singular_slot(kind) {
            if let Some(child) = node.child(field) {
                element.children.push(self.to_markup(child));
            }
        } else if let Some(slot) = self.tables.plural_slot(kind) {
            if let Some(items) = node.children(slot.field) {
                element.children = self.print_list(kind, items);
            }
        }
        element
    }

    /// Prints a list, dropping the trailing placeholder when the kind's plural
    /// slot is flagged implicit.
    fn print_list(&self, kind: NodeKind, items: &[SyntaxNode]) -> Vec<Element> {
        let visible = match self.tables.plural_slot(kind) {
            Some(slot) => slot.visible(items),
            None => items,
        };
        visible.iter().map(|item| self.to_markup(item)).collect()
    }
}

/// The `value` attribute text of a scalar literal.
fn literal_value(node: &SyntaxNode) -> Option<String> {
    match node {
        SyntaxNode::Boolean { value, .. } => Some(value.to_string()),
        SyntaxNode::Number { value, .. } => Some(value.to_string()),
        SyntaxNode::String { value, .. } | SyntaxNode::Color { value, .. } => Some(value.clone()),
        _ => None,
    }
}
