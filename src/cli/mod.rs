//! The `logic-markup` command-line interface.
//!
//! Thin orchestration over the library: read a file, convert it, and write the
//! result to stdout or back to disk. Failures are rendered as miette reports.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use miette::Diagnostic;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, MarkupArgs};
use crate::errors::{print_error, ParseError};
use crate::markup::WriterOptions;
use crate::source::SourceContext;
use crate::syntax::SyntaxNode;
use crate::{Parser, Printer};

pub mod args;
pub mod output;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "LOGIC_MARKUP_LOG";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Could not read `{}`", .path.display())]
    #[diagnostic(code(logic_markup::cli::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write `{}`", .path.display())]
    #[diagnostic(code(logic_markup::cli::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` is not a JSON syntax tree", .path.display())]
    #[diagnostic(
        code(logic_markup::cli::json),
        help("expected a node such as {{\"type\": \"program\", \"data\": {{...}}}}")
    )]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("`{}` is not in canonical form", .path.display())]
    #[diagnostic(
        code(logic_markup::cli::not_formatted),
        help("run `logic-markup format --write` to rewrite it")
    )]
    NotFormatted { path: PathBuf },
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = MarkupArgs::parse();
    init_tracing(args.verbose);

    let options = args.layout.writer_options();
    let result = match &args.command {
        Command::Format { file, check, write } => handle_format(file, *check, *write, options),
        Command::ToJson { file } => handle_to_json(file),
        Command::FromJson { file } => handle_from_json(file, options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(error);
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr `fmt` subscriber filtered by [`LOG_ENV`], then `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ============================================================================
// SUBCOMMANDS
// ============================================================================

fn handle_format(
    path: &Path,
    check: bool,
    write: bool,
    options: WriterOptions,
) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tree = Parser::default().parse(&source)?;
    let canonical = Printer::default().with_options(options).print(&tree);

    if check {
        let current = source.content.trim_end();
        if current == canonical {
            return Ok(());
        }
        output::print_format_diff(&source.name, current, &canonical);
        return Err(CliError::NotFormatted {
            path: path.to_path_buf(),
        });
    }

    if write {
        tracing::info!(file = %path.display(), "rewriting in canonical form");
        return fs::write(path, format!("{canonical}\n")).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    output::print_document(&canonical);
    Ok(())
}

fn handle_to_json(path: &Path) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tree = Parser::default().parse(&source)?;
    let json = serde_json::to_string_pretty(&tree).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    output::print_document(&json);
    Ok(())
}

fn handle_from_json(path: &Path, options: WriterOptions) -> Result<(), CliError> {
    let source = read_source(path)?;
    let tree: SyntaxNode =
        serde_json::from_str(&source.content).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    output::print_document(&Printer::default().with_options(options).print(&tree));
    Ok(())
}

fn read_source(path: &Path) -> Result<SourceContext, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceContext::from_file(path.display().to_string(), content))
}
