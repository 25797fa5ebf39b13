//! Flat string form of type annotations: `Identifier` or `Identifier(arg1,arg2,...)`.
//!
//! Generic arguments are split on commas at parenthesis depth zero, so nested
//! generics such as `Map(String,List(Int,Float))` decode to the tree they were
//! printed from.

use crate::ids::IdGenerator;
use crate::syntax::{Identifier, TypeAnnotation};

/// Renders an annotation into its attribute form.
pub fn serialize(annotation: &TypeAnnotation) -> String {
    match annotation {
        TypeAnnotation::TypeIdentifier {
            identifier,
            generic_arguments,
            ..
        } => {
            if generic_arguments.is_empty() {
                return identifier.string.clone();
            }
            let arguments = generic_arguments
                .iter()
                .map(serialize)
                .collect::<Vec<_>>()
                .join(",");
            format!("{}({})", identifier.string, arguments)
        }
    }
}

/// Parses the attribute form back into an annotation with fresh ids.
///
/// Never fails: text without parentheses is a bare identifier, and a `(` with
/// no closing `)` leaves the prefix as the identifier with no arguments.
pub fn deserialize(text: &str, ids: &mut dyn IdGenerator) -> TypeAnnotation {
    let open = text.find('(');
    let close = text.rfind(')');

    let name = match open {
        Some(open) => &text[..open],
        None => text,
    };

    let generic_arguments = match (open, close) {
        (Some(open), Some(close)) if close > open => {
            split_top_level(&text[open + 1..close])
                .into_iter()
                .map(|argument| deserialize(argument, ids))
                .collect()
        }
        _ => Vec::new(),
    };

    TypeAnnotation::TypeIdentifier {
        id: ids.next_id(),
        identifier: Identifier::new(ids.next_id(), name),
        generic_arguments,
    }
}

/// Splits on commas that are not nested inside parentheses. Pieces are trimmed
/// and an all-blank argument list yields no pieces.
fn split_top_level(arguments: &str) -> Vec<&str> {
    if arguments.trim().is_empty() {
        return Vec::new();
    }

    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in arguments.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(arguments[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    pieces.push(arguments[start..].trim());
    pieces
}
