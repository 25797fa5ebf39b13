//! Parse errors.
//!
//! Parsing has exactly two failure modes: the text is not well-formed markup,
//! or a well-formed element does not denote a known syntax node kind. There is
//! no best-effort recovery; a failure never yields a partial tree.
//!
//! Printing has no error path.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::source::SourceContext;

/// Failure to turn markup text into a syntax tree.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("Malformed markup: {reason}")]
    #[diagnostic(code(logic_markup::parse::malformed))]
    MalformedMarkup {
        reason: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("malformed here")]
        span: Option<SourceSpan>,
        #[help]
        help: Option<String>,
    },

    #[error("Unrecognized node: `{element}`")]
    #[diagnostic(
        code(logic_markup::parse::unrecognized_node),
        help(
            "element names denote Logic syntax node kinds such as `Variable`, `Namespace` or \
             `Declarations`; `Declaration.` only prefixes `ImportDeclaration`, `Namespace` and `Variable`"
        )
    )]
    UnrecognizedNode { element: String },
}

/// Fieldless classification of [`ParseError`], for matching without caring about payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedMarkup,
    UnrecognizedNode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedMarkup => "MalformedMarkup",
            ErrorKind::UnrecognizedNode => "UnrecognizedNode",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MalformedMarkup { .. } => ErrorKind::MalformedMarkup,
            ParseError::UnrecognizedNode { .. } => ErrorKind::UnrecognizedNode,
        }
    }

    /// A malformed-markup error pointing into `source`.
    pub fn malformed(
        source: &SourceContext,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Self {
        ParseError::MalformedMarkup {
            reason: reason.into(),
            src: source.to_named_source(),
            span,
            help: None,
        }
    }

    pub fn unrecognized(element: impl Into<String>) -> Self {
        ParseError::UnrecognizedNode {
            element: element.into(),
        }
    }

    /// Attaches a help message. Only malformed-markup errors carry custom help.
    pub fn with_help(mut self, message: impl Into<String>) -> Self {
        if let ParseError::MalformedMarkup { help, .. } = &mut self {
            *help = Some(message.into());
        }
        self
    }
}

/// Prints a diagnostic report for any miette error to stderr.
///
/// Use this for user-facing error display in the CLI.
pub fn print_error(error: impl Diagnostic + Send + Sync + 'static) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
