//! Structured scanning of generated binding sources.
//!
//! The scanner turns a source unit into an ordered list of [`Declaration`]s
//! (kind, name, generics, attached attributes, line range) while keeping
//! every original line verbatim, so callers can rewrite individual lines and
//! write the rest back byte-for-byte.
//!
//! Only headers at column 0 count as declarations. Indented `pub struct`
//! lines belong to nested items and are ignored, and lines inside a
//! declaration body are never scanned for further declarations.

use tracing::debug;

use ffi_serde_model::{Attribute, Declaration, DeclarationKind};

use crate::error::{Result, ScanError};

/// A source unit split into lines, with the declarations found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    lines: Vec<String>,
    declarations: Vec<Declaration>,
}

impl SourceUnit {
    /// Lines with their terminators kept.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Declarations in source order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|decl| decl.name == name)
    }

    /// Reassembles the original text.
    pub fn text(&self) -> String {
        self.lines.concat()
    }
}

/// Scans `text` into a [`SourceUnit`].
///
/// # Errors
///
/// Fails on a header that does not match the generator's shape, or on an
/// attribute or body that never closes. These indicate the input is not
/// what the binding generator produces, and continuing would risk emitting
/// wrong code.
pub fn scan(text: &str) -> Result<SourceUnit> {
    let lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    let mut declarations = Vec::new();
    let mut pending: Vec<Attribute> = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        let trimmed = line.trim_start();

        if trimmed.starts_with("#[") {
            let attribute = read_attribute(&lines, index)?;
            index = attribute.lines.end;
            pending.push(attribute);
            continue;
        }

        if trimmed.trim_end().is_empty() || trimmed.starts_with("//") {
            index += 1;
            continue;
        }

        if let Some((kind, rest)) = declaration_header(line) {
            let (name, generics) = parse_name(rest)
                .map_err(|reason| ScanError::malformed(index + 1, line, reason))?;
            let end = item_end(&lines, index)?;
            declarations.push(Declaration {
                kind,
                name,
                generics,
                attributes: std::mem::take(&mut pending),
                header_line: index,
                lines: index..end,
            });
            index = end;
            continue;
        }

        pending.clear();
        index += 1;
    }

    debug!(
        lines = lines.len(),
        declarations = declarations.len(),
        "scanned source unit"
    );
    Ok(SourceUnit {
        lines,
        declarations,
    })
}

fn declaration_header(line: &str) -> Option<(DeclarationKind, &str)> {
    if let Some(rest) = line.strip_prefix("pub struct ") {
        Some((DeclarationKind::Struct, rest))
    } else {
        line.strip_prefix("pub union ")
            .map(|rest| (DeclarationKind::Union, rest))
    }
}

/// Splits the text after the kind keyword into a name and optional generics.
fn parse_name(rest: &str) -> std::result::Result<(String, Option<String>), String> {
    let rest = rest.trim_start();
    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..name_len];
    if name.is_empty() {
        return Err("missing type name".to_string());
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("type name `{name}` starts with a digit"));
    }

    let mut after = &rest[name_len..];
    let mut generics = None;
    if after.starts_with('<') {
        let close = matching_angle(after).ok_or("unterminated generic parameter list")?;
        generics = Some(after[..=close].to_string());
        after = &after[close + 1..];
    }

    match after.chars().next() {
        None => Ok((name.to_string(), generics)),
        Some(c) if c.is_whitespace() || matches!(c, '{' | '(' | ';') => {
            Ok((name.to_string(), generics))
        }
        Some(other) => Err(format!("unexpected `{other}` after type name")),
    }
}

fn matching_angle(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn read_attribute(lines: &[String], start: usize) -> Result<Attribute> {
    let mut code = CodeChars::default();
    let mut depth = 0usize;
    for (index, line) in lines.iter().enumerate().skip(start) {
        let closed = code.visit(line, |c| match c {
            '[' => {
                depth += 1;
                false
            }
            ']' => {
                depth = depth.saturating_sub(1);
                depth == 0
            }
            _ => false,
        });
        if closed {
            return Ok(Attribute::new(start..index + 1, lines[start..=index].concat()));
        }
    }
    Err(ScanError::UnterminatedAttribute { line: start + 1 })
}

/// Returns the exclusive end line of the item whose header is at `header`.
fn item_end(lines: &[String], header: usize) -> Result<usize> {
    let mut code = CodeChars::default();
    let mut braces = 0usize;
    let mut nesting = 0usize;
    let mut opened = false;
    for (index, line) in lines.iter().enumerate().skip(header) {
        let closed = code.visit(line, |c| match c {
            '{' => {
                braces += 1;
                opened = true;
                false
            }
            '}' => {
                braces = braces.saturating_sub(1);
                opened && braces == 0
            }
            '(' | '[' => {
                nesting += 1;
                false
            }
            ')' | ']' => {
                nesting = nesting.saturating_sub(1);
                false
            }
            ';' => braces == 0 && nesting == 0,
            _ => false,
        });
        if closed {
            return Ok(index + 1);
        }
    }
    Err(ScanError::UnterminatedDeclaration { line: header + 1 })
}

/// Walks code characters, skipping string literal contents and line comments.
///
/// String state carries over between lines.
#[derive(Debug, Default)]
struct CodeChars {
    in_string: bool,
    escaped: bool,
}

impl CodeChars {
    /// Feeds each code character of `line` to `stop`; returns true as soon as `stop` does.
    fn visit(&mut self, line: &str, mut stop: impl FnMut(char) -> bool) -> bool {
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == '"' {
                    self.in_string = false;
                }
                continue;
            }
            match c {
                '"' => self.in_string = true,
                '/' if chars.peek() == Some(&'/') => return false,
                _ => {
                    if stop(c) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
