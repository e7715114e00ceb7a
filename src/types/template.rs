//! Description templates with named `{placeholder}` slots.
//!
//! `{{` and `}}` produce literal braces. Placeholder names follow Rust identifier rules.

use crate::types::alloc_type::String;
use core::fmt::{self, Write};

/// A template could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` or `}` without its partner, at the given byte offset.
    Unbalanced(usize),
    /// The text between braces at the given byte offset is not an identifier.
    BadName(usize),
    /// No value was available for the named placeholder.
    Missing(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbalanced(at) => write!(f, "unbalanced brace at byte {at}"),
            Self::BadName(at) => write!(f, "invalid placeholder name at byte {at}"),
            Self::Missing(name) => write!(f, "no argument named `{name}`"),
        }
    }
}

impl core::error::Error for TemplateError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Slot(&'a str),
}

/// Splits a template into literal text and placeholder slots.
struct Pieces<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Result<Piece<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.src[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let start = self.pos;

        if rest.starts_with("{{") {
            self.pos += 2;
            return Some(Ok(Piece::Text("{")));
        }
        if rest.starts_with("}}") {
            self.pos += 2;
            return Some(Ok(Piece::Text("}")));
        }
        if rest.starts_with('}') {
            self.pos = self.src.len();
            return Some(Err(TemplateError::Unbalanced(start)));
        }
        if let Some(body) = rest.strip_prefix('{') {
            let Some(end) = body.find('}') else {
                self.pos = self.src.len();
                return Some(Err(TemplateError::Unbalanced(start)));
            };
            let name = &body[..end];
            self.pos += end + 2;
            if !is_identifier(name) {
                self.pos = self.src.len();
                return Some(Err(TemplateError::BadName(start)));
            }
            return Some(Ok(Piece::Slot(name)));
        }

        let end = rest.find(['{', '}']).unwrap_or(rest.len());
        self.pos += end;
        Some(Ok(Piece::Text(&rest[..end])))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[inline]
fn pieces(template: &str) -> Pieces<'_> {
    Pieces { src: template, pos: 0 }
}

/// Yields every placeholder name in template order, repeats included.
///
/// # Examples
///
/// ```
/// use exhaust_rail::types::template::placeholders;
///
/// let names: Result<Vec<_>, _> = placeholders("Object {obj} has no attribute {attr}").collect();
/// assert_eq!(names.unwrap(), ["obj", "attr"]);
/// ```
pub fn placeholders(template: &str) -> impl Iterator<Item = Result<&str, TemplateError>> + '_ {
    pieces(template).filter_map(|piece| match piece {
        Ok(Piece::Slot(name)) => Some(Ok(name)),
        Ok(Piece::Text(_)) => None,
        Err(e) => Some(Err(e)),
    })
}

/// Renders `template`, asking `lookup` for the value of each placeholder.
///
/// # Examples
///
/// ```
/// use exhaust_rail::types::template::render;
///
/// let out = render("{a},{b}:", |name| match name {
///     "a" => Some(1),
///     "b" => Some(2),
///     _ => None,
/// });
/// assert_eq!(out.unwrap(), "1,2:");
/// ```
pub fn render<F, D>(template: &str, mut lookup: F) -> Result<String, TemplateError>
where
    F: FnMut(&str) -> Option<D>,
    D: fmt::Display,
{
    let mut out = String::with_capacity(template.len());
    for piece in pieces(template) {
        match piece? {
            Piece::Text(text) => out.push_str(text),
            Piece::Slot(name) => {
                let value = lookup(name).ok_or_else(|| TemplateError::Missing(name.into()))?;
                // Writing into a String cannot fail.
                let _ = write!(out, "{value}");
            }
        }
    }
    Ok(out)
}
