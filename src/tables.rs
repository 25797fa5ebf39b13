//! Lookup tables shared by the printer and the parser.
//!
//! The tables declare, per node kind, how a node maps onto a markup element:
//! its element name, which child slot it has, which nested records are
//! projected into flat attributes, and which literal kinds have a compact
//! single-attribute form. Both directions consult the same value, so the
//! encoding stays symmetric.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ids::IdGenerator;
use crate::syntax::{Field, NodeKind, SyntaxNode};

static STANDARD: Lazy<ConversionTables> = Lazy::new(ConversionTables::build);

/// Element-name prefix marking a declaration wrapper (`Declaration.Variable`).
pub const DECLARATION_PREFIX: &str = "Declaration.";

/// Node kinds a `Declaration.` prefix may wrap.
pub const DECLARATION_CONTENT: [NodeKind; 3] = [
    NodeKind::ImportDeclaration,
    NodeKind::Namespace,
    NodeKind::Variable,
];

/// Element name of a collapsed literal expression.
pub const LITERAL_ELEMENT: &str = "Literal";

/// Root type identifier selecting the array-valued variable shorthand.
pub const ARRAY_TYPE: &str = "Array";

/// Deepest element nesting the parser accepts, counting the root as 1.
///
/// Printer and parser both recurse once per level; trees deeper than this are
/// outside what either direction supports.
pub const MAX_DEPTH: usize = 64;

// ============================================================================
// PLURAL SLOTS
// ============================================================================

/// A list-valued child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralSlot {
    pub field: Field,
    /// The in-memory list ends in a placeholder that markup never carries.
    pub implicit_placeholder: bool,
}

impl PluralSlot {
    /// The items that appear in markup: a trailing placeholder is dropped.
    pub fn visible<'n>(&self, items: &'n [SyntaxNode]) -> &'n [SyntaxNode] {
        match items.split_last() {
            Some((last, rest)) if self.implicit_placeholder && last.is_placeholder() => rest,
            _ => items,
        }
    }

    /// Re-inserts the trailing placeholder dropped by [`PluralSlot::visible`].
    ///
    /// Placeholders already among `items` are discarded first, so an implicit
    /// slot always ends up with exactly one.
    pub fn restore(
        &self,
        mut items: Vec<SyntaxNode>,
        ids: &mut dyn IdGenerator,
    ) -> Vec<SyntaxNode> {
        if self.implicit_placeholder {
            items.retain(|item| !item.is_placeholder());
            items.push(SyntaxNode::placeholder(ids.next_id()));
        }
        items
    }
}

// ============================================================================
// TABLES
// ============================================================================

/// The conversion tables. Build once, share by reference, never mutate.
#[derive(Debug, Clone)]
pub struct ConversionTables {
    renames: HashMap<NodeKind, &'static str>,
    singular: HashMap<NodeKind, Field>,
    plural: HashMap<NodeKind, PluralSlot>,
    patterns: HashMap<NodeKind, Field>,
    identifiers: HashMap<NodeKind, Field>,
    annotations: HashMap<NodeKind, Field>,
    compact_literals: Vec<(NodeKind, &'static str)>,
}

impl ConversionTables {
    /// The process-wide standard tables.
    pub fn standard() -> &'static ConversionTables {
        &STANDARD
    }

    fn build() -> Self {
        let implicit = |field| PluralSlot {
            field,
            implicit_placeholder: true,
        };

        Self {
            renames: HashMap::from([(NodeKind::TopLevelDeclarations, "Declarations")]),
            singular: HashMap::from([
                (NodeKind::Declaration, Field::Content),
                (NodeKind::Variable, Field::Initializer),
                (NodeKind::LiteralExpression, Field::Literal),
                (NodeKind::Argument, Field::Expression),
                (NodeKind::MemberExpression, Field::Expression),
            ]),
            plural: HashMap::from([
                (NodeKind::Program, implicit(Field::Block)),
                (NodeKind::Namespace, implicit(Field::Declarations)),
                (NodeKind::TopLevelDeclarations, implicit(Field::Declarations)),
                (NodeKind::Record, implicit(Field::Declarations)),
                (NodeKind::FunctionCallExpression, implicit(Field::Arguments)),
                (NodeKind::Array, implicit(Field::Value)),
            ]),
            patterns: HashMap::from([
                (NodeKind::ImportDeclaration, Field::Name),
                (NodeKind::Variable, Field::Name),
                (NodeKind::Namespace, Field::Name),
            ]),
            identifiers: HashMap::from([(NodeKind::MemberExpression, Field::MemberName)]),
            annotations: HashMap::from([(NodeKind::Variable, Field::Annotation)]),
            compact_literals: vec![
                (NodeKind::Boolean, "Boolean"),
                (NodeKind::Number, "Number"),
                (NodeKind::String, "String"),
                (NodeKind::Color, "Color"),
            ],
        }
    }

    // ------------------------------------------------------------------------
    // Element names
    // ------------------------------------------------------------------------

    /// The markup element name for a node kind.
    pub fn element_name(&self, kind: NodeKind) -> String {
        match self.renames.get(&kind) {
            Some(renamed) => (*renamed).to_string(),
            None => upper_first(kind.as_str()),
        }
    }

    /// The node kind an element name denotes, reversing [`ConversionTables::element_name`].
    pub fn kind_for_element(&self, element: &str) -> Option<NodeKind> {
        let renamed = self
            .renames
            .iter()
            .find(|(_, name)| **name == element)
            .map(|(kind, _)| *kind);
        renamed.or_else(|| NodeKind::from_tag(&lower_first(element)))
    }

    // ------------------------------------------------------------------------
    // Slots and projections
    // ------------------------------------------------------------------------

    pub fn singular_slot(&self, kind: NodeKind) -> Option<Field> {
        self.singular.get(&kind).copied()
    }

    pub fn plural_slot(&self, kind: NodeKind) -> Option<PluralSlot> {
        self.plural.get(&kind).copied()
    }

    pub fn pattern_slot(&self, kind: NodeKind) -> Option<Field> {
        self.patterns.get(&kind).copied()
    }

    pub fn identifier_slot(&self, kind: NodeKind) -> Option<Field> {
        self.identifiers.get(&kind).copied()
    }

    pub fn annotation_slot(&self, kind: NodeKind) -> Option<Field> {
        self.annotations.get(&kind).copied()
    }

    // ------------------------------------------------------------------------
    // Compact literals
    // ------------------------------------------------------------------------

    /// The compact-form element name of a literal kind (`number` → `Number`).
    pub fn compact_element(&self, kind: NodeKind) -> Option<&'static str> {
        self.compact_literals
            .iter()
            .find(|(literal, _)| *literal == kind)
            .map(|(_, element)| *element)
    }

    /// The literal kind a compact-form element name denotes (`Number` → `number`).
    pub fn compact_kind(&self, element: &str) -> Option<NodeKind> {
        self.compact_literals
            .iter()
            .find(|(_, name)| *name == element)
            .map(|(kind, _)| *kind)
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
