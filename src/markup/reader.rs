//! Reads markup text into an [`Element`] tree.
//!
//! The grammar lives in `grammar.pest`. Child order and attribute order are
//! preserved; attribute values come back unescaped.

use miette::SourceSpan;
use pest::{error::InputLocation, iterators::Pair, Parser};
use pest_derive::Parser;

use super::Element;
use crate::errors::ParseError;
use crate::source::SourceContext;

#[derive(Parser)]
#[grammar = "markup/grammar.pest"]
struct MarkupParser;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse markup text into its root element.
pub fn read(source: &SourceContext) -> Result<Element, ParseError> {
    let document = MarkupParser::parse(Rule::document, &source.content)
        .map_err(|error| convert_parse_error(error, source))?
        .next()
        .ok_or_else(|| ParseError::malformed(source, "empty document", None))?;

    let root = document
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::element)
        .ok_or_else(|| ParseError::malformed(source, "document has no root element", None))?;

    build_element(root, source)
}

// ============================================================================
// TREE BUILDING
// ============================================================================

fn build_element(pair: Pair<'_, Rule>, source: &SourceContext) -> Result<Element, ParseError> {
    let mut element = Element::default();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::name => element.name = inner.as_str().to_string(),
            Rule::attribute => {
                let span = to_source_span(&inner);
                let (key, value) = build_attribute(inner, source)?;
                if element.attributes.contains_key(&key) {
                    return Err(ParseError::malformed(
                        source,
                        format!("duplicate attribute `{key}` on `{}`", element.name),
                        Some(span),
                    ));
                }
                element.attributes.insert(key, value);
            }
            Rule::element => element.children.push(build_element(inner, source)?),
            _ => {}
        }
    }

    Ok(element)
}

fn build_attribute(
    pair: Pair<'_, Rule>,
    source: &SourceContext,
) -> Result<(String, String), ParseError> {
    let span = to_source_span(&pair);
    let mut key = String::new();
    let mut value = String::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::name => key = inner.as_str().to_string(),
            Rule::double_quoted | Rule::single_quoted => {
                value = unescape(inner.as_str())
                    .map_err(|reason| ParseError::malformed(source, reason, Some(span)))?;
            }
            _ => {}
        }
    }

    Ok((key, value))
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Decodes predefined entities and numeric character references.
fn unescape(raw: &str) -> Result<String, String> {
    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let semi = after
            .find(';')
            .ok_or_else(|| format!("unterminated character reference in `{raw}`"))?;
        let entity = &after[..semi];
        let decoded = match entity {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            numeric if numeric.starts_with("#x") || numeric.starts_with("#X") => {
                decode_code_point(&numeric[2..], 16, entity)?
            }
            numeric if numeric.starts_with('#') => decode_code_point(&numeric[1..], 10, entity)?,
            other => return Err(format!("unknown character reference `&{other};`")),
        };
        result.push(decoded);
        rest = &after[semi + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

fn decode_code_point(digits: &str, radix: u32, entity: &str) -> Result<char, String> {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("invalid character reference `&{entity};`"))
}

fn to_source_span(pair: &Pair<'_, Rule>) -> SourceSpan {
    let span = pair.as_span();
    SourceSpan::from(span.start()..span.end())
}

fn convert_parse_error(error: pest::error::Error<Rule>, source: &SourceContext) -> ParseError {
    let span = match error.location {
        InputLocation::Pos(pos) => SourceSpan::from(pos..pos),
        InputLocation::Span((start, end)) => SourceSpan::from(start..end),
    };

    let reason = if source.content.trim().is_empty() {
        "document is empty".to_string()
    } else {
        error.variant.message().into_owned()
    };

    ParseError::malformed(source, reason, Some(span))
        .with_help("every element must be closed by a matching `</Name>` or written as `<Name/>`")
}
