//! GON encoder — renders a value tree back into GON text.
//!
//! The output is a valid, re-parseable document but not a copy of the
//! source: comments, whitespace and separators are gone.
//!
//! - Null → `null`
//! - String, Number, Bool → the literal text kept from parsing. Strings that
//!   would not survive re-tokenizing (empty, or containing whitespace,
//!   structural characters, separators, `#`, `"` or `\`) are quoted with
//!   `\\`, `\"` and `\n` escapes. Member names follow the same rule.
//! - Object → `{` newline, one `name value` line per member, `}` newline
//! - Array → `[` elements separated by spaces `]` newline
//!
//! Objects are written member by member, so a redefined name is written
//! twice and re-parses to the same tree.

use crate::error::{GonError, Result};
use crate::types::Kind;
use crate::value::Value;

/// Serialize `value` to GON text.
pub fn to_text(value: &Value<'_>) -> String {
    let mut out = String::new();
    encode_value(value, &mut out);
    out
}

/// Serialize an object in file form: members on their own lines, no braces.
///
/// Anything other than an object is a type error; if the hook continues the
/// value is rendered with [`to_text`].
pub fn to_document_text(value: &Value<'_>) -> Result<String> {
    if value.kind() != Kind::Object {
        value.document().report(GonError::Type {
            operation: "save",
            expected: "an object",
            found: value.kind(),
        })?;
        return Ok(to_text(value));
    }
    let mut out = String::new();
    for child in value.children() {
        encode_member(&child, &mut out);
    }
    Ok(out)
}

fn encode_value(value: &Value<'_>, out: &mut String) {
    let node = value.node();
    match node.kind {
        Kind::Null => out.push_str("null"),
        Kind::String => encode_string(&node.text, out),
        Kind::Number | Kind::Bool => out.push_str(&node.text),
        Kind::Object => {
            out.push_str("{\n");
            for child in value.children() {
                encode_member(&child, out);
            }
            out.push_str("}\n");
        }
        Kind::Array => {
            out.push('[');
            for (i, child) in value.children().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                encode_value(&child, out);
            }
            out.push_str("]\n");
        }
    }
}

fn encode_member(child: &Value<'_>, out: &mut String) {
    encode_string(child.name(), out);
    out.push(' ');
    encode_value(child, out);
    out.push('\n');
}

/// Write `s` bare when it re-tokenizes to itself, quoted otherwise.
fn encode_string(s: &str, out: &mut String) {
    if !needs_quotes(s) {
        out.push_str(s);
        return;
    }
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.chars().any(|c| {
            matches!(
                c,
                ' ' | '\t'
                    | '\r'
                    | '\n'
                    | '{'
                    | '}'
                    | '['
                    | ']'
                    | '='
                    | ','
                    | ':'
                    | '#'
                    | '"'
                    | '\\'
            )
        })
}

/// One line per node: `<name> is <kind> <value>`, composites bracketed by
/// their opening line and a closing `}` or `]` line.
pub fn debug_dump(value: &Value<'_>) -> String {
    let mut out = String::new();
    dump_value(value, &mut out);
    out
}

fn dump_value(value: &Value<'_>, out: &mut String) {
    let node = value.node();
    let name = &node.name;
    match node.kind {
        Kind::Null => out.push_str(&format!("{name} is null\n")),
        Kind::String => out.push_str(&format!("{name} is string \"{}\"\n", node.text)),
        Kind::Number => out.push_str(&format!("{name} is number {}\n", node.int)),
        Kind::Bool => out.push_str(&format!("{name} is bool {}\n", node.boolean)),
        Kind::Object => {
            out.push_str(&format!("{name} is object {{\n"));
            for child in value.children() {
                dump_value(&child, out);
            }
            out.push_str("}\n");
        }
        Kind::Array => {
            out.push_str(&format!("{name} is array [\n"));
            for child in value.children() {
                dump_value(&child, out);
            }
            out.push_str("]\n");
        }
    }
}
