//! Language-pack file format parser.
//!
//! Parses `.rstlang` files containing directive and role sections.

use rstlang_semantics::NameKind;
use winnow::combinator::{alt, delimited, opt, peek, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{Entry, LanguagePack, Section};
use super::error::ParseError;

const EXPECTED_SECTION: &str = "expected `directives {` or `roles {`";
const EXPECTED_ENTRY: &str = "expected `name = canonical;` or `}`";

/// Parse an entire `.rstlang` file.
///
/// ```
/// use rstlang::parser::parse_file;
/// use rstlang::NameKind;
///
/// let pack = parse_file(r#"
///     directives {
///         note = note;
///         disabled footnotes = footnotes; // pending upstream support
///     }
/// "#).unwrap();
///
/// let directives = pack.section(NameKind::Directive).unwrap();
/// assert_eq!(directives.entries.len(), 2);
/// assert!(directives.entries[1].disabled);
/// assert!(pack.section(NameKind::Role).is_none());
/// ```
pub fn parse_file(input: &str) -> Result<LanguagePack, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut remaining = input;
    let mut pack = LanguagePack::default();

    loop {
        let _ = skip_ws_and_comments(&mut remaining);
        if remaining.is_empty() {
            return Ok(pack);
        }

        let (line, column) = calculate_position(input, remaining);
        let kind = section_header(&mut remaining)
            .map_err(|_| syntax_error(input, remaining, EXPECTED_SECTION))?;
        if pack.section(kind).is_some() {
            return Err(ParseError::DuplicateSection {
                line,
                column,
                section: kind.section_keyword().to_string(),
            });
        }

        let mut entries = Vec::new();
        loop {
            let _ = skip_ws_and_comments(&mut remaining);
            if remaining.is_empty() {
                let (line, column) = calculate_position(input, remaining);
                return Err(ParseError::UnexpectedEof { line, column });
            }
            if let Some(rest) = remaining.strip_prefix('}') {
                remaining = rest;
                break;
            }

            let (entry_line, _) = calculate_position(input, remaining);
            let (disabled, name, canonical) = entry(&mut remaining)
                .map_err(|_| syntax_error(input, remaining, EXPECTED_ENTRY))?;
            entries.push(Entry {
                name,
                canonical,
                disabled,
                line: entry_line,
            });
        }

        pack.sections.push(Section {
            kind,
            line,
            entries,
        });
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

fn syntax_error(original: &str, remaining: &str, expected: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    let found = match remaining.chars().next() {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    };
    ParseError::Syntax {
        line,
        column,
        message: format!("{expected}, found {found}"),
    }
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse a section header: `directives {` or `roles {`.
fn section_header(input: &mut &str) -> ModalResult<NameKind> {
    terminated(
        take_while(1.., |c: char| c.is_ascii_alphabetic())
            .verify_map(NameKind::from_section_keyword),
        (skip_ws_and_comments, '{'),
    )
    .parse_next(input)
}

/// Parse an entry: `[disabled] name = canonical;`
///
/// `disabled` is only a keyword when another name follows it, so a
/// localized name spelled `disabled` still parses as an active entry.
/// Comments may sit between the keyword and the name.
fn entry(input: &mut &str) -> ModalResult<(bool, String, String)> {
    let disabled = opt(terminated(
        "disabled",
        (ws_only, skip_ws_and_comments, peek(name_token)),
    ))
    .parse_next(input)?
    .is_some();
    let name = name_token(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let canonical = name_token(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok((disabled, name, canonical))
}

/// Parse a name: bare word or double-quoted string.
fn name_token(input: &mut &str) -> ModalResult<String> {
    alt((quoted_name, bare_name)).parse_next(input)
}

/// Parse a bare name: letters and digits of any script, `-`, and `_`.
fn bare_name(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '-' || c == '_')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse a quoted name: "..." with `\"` and `\\` escapes.
fn quoted_name(input: &mut &str) -> ModalResult<String> {
    let name: String = delimited('"', repeat(1.., quoted_char), '"').parse_next(input)?;
    Ok(name)
}

/// Parse one character inside a quoted name.
fn quoted_char(input: &mut &str) -> ModalResult<char> {
    alt((
        preceded('\\', one_of(['"', '\\'])),
        none_of(['"', '\\', '\n']),
    ))
    .parse_next(input)
}
