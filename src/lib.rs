//! Bidirectional conversion between Logic syntax trees and a tree-markup text form.
//!
//! [`print`] renders a [`SyntaxNode`] as markup; [`parse`] reads markup back
//! into a tree with fresh ids. Both directions are driven by the same
//! [`ConversionTables`].

pub mod annotation;
pub mod cli;
pub mod errors;
pub mod ids;
pub mod markup;
pub mod parser;
pub mod printer;
pub mod source;
pub mod syntax;
pub mod tables;

pub use errors::{print_error, ErrorKind, ParseError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use parser::{parse, Parser};
pub use printer::{print, Printer};
pub use source::SourceContext;
pub use syntax::{Field, Identifier, NodeKind, Pattern, SyntaxNode, TypeAnnotation};
pub use tables::ConversionTables;
