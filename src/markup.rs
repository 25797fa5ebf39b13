//! Generic tree-markup library.
//!
//! A small XML-like model with no semantic variants: an [`Element`] value, a
//! [`write`]r that serializes it to indented text, and a [`read`]er that parses
//! text back. The Logic printer and parser sit on top of this module.

mod element;
pub mod reader;
pub mod writer;

pub use element::Element;
pub use reader::read;
pub use writer::{write, WriterOptions, XML_DECLARATION};
