//! Command-line arguments and subcommands for `logic-markup`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::markup::WriterOptions;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "logic-markup",
    version,
    about = "Convert Logic syntax trees to and from their markup form."
)]
pub struct MarkupArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Log conversion steps to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Markup layout flags shared by every subcommand that prints markup.
#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Spaces per nesting level.
    #[arg(long, global = true, default_value_t = 2)]
    pub indent: usize,

    /// Omit the `<?xml version="1.0"?>` prolog.
    #[arg(long, global = true)]
    pub no_declaration: bool,
}

impl LayoutArgs {
    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            indent: self.indent,
            declaration: !self.no_declaration,
        }
    }
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a markup file and print it in canonical form.
    Format {
        /// The markup file to format.
        #[arg(required = true)]
        file: PathBuf,
        /// Exit with an error and show a diff if the file is not canonical.
        #[arg(long, conflicts_with = "write")]
        check: bool,
        /// Rewrite the file in place.
        #[arg(long)]
        write: bool,
    },
    /// Parse a markup file and print its syntax tree as JSON.
    ToJson {
        /// The markup file to convert.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Read a JSON syntax tree and print it as markup.
    FromJson {
        /// The JSON file to convert.
        #[arg(required = true)]
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_layout_flags_follow_subcommand() {
        let args = MarkupArgs::parse_from([
            "logic-markup",
            "format",
            "doc.xml",
            "--indent",
            "4",
            "--no-declaration",
        ]);
        let options = args.layout.writer_options();
        assert_eq!(options.indent, 4);
        assert!(!options.declaration);
        assert!(matches!(args.command, Command::Format { check: false, write: false, .. }));
    }

    #[test]
    fn check_and_write_conflict() {
        let result = MarkupArgs::try_parse_from([
            "logic-markup",
            "format",
            "doc.xml",
            "--check",
            "--write",
        ]);
        assert!(result.is_err());
    }
}
