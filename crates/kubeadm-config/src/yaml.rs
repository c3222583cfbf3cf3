//! Canonical block-style YAML rendering.
//!
//! The value is first serialized into a [`serde_yaml::Value`] tree, then
//! emitted by hand so the output does not depend on the encoder's own
//! layout choices:
//!
//! - mapping keys are sorted byte-wise at every level
//! - nested mappings indent two spaces, sequences sit at their key's indent
//! - empty strings print as `""`, empty collections as `{}` / `[]`,
//!   unset values as `null`
//! - strings that would read back as something other than the same string
//!   are double-quoted, with YAML escapes for breaks and non-printables
//! - tagged values keep their tag in front of the value

use std::fmt::Write as _;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, Result};

const INDENT: usize = 2;

/// Render `value` as canonical block YAML. Every line ends with `\n`.
///
/// # Errors
///
/// Returns `Yaml` if the value cannot be serialized, or `UnsupportedValue`
/// if the tree contains non-scalar mapping keys.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let tree = serde_yaml::to_value(value)?;
    let mut out = String::new();
    emit_document(&tree, &mut out)?;
    Ok(out)
}

fn emit_document(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Mapping(map) if !map.is_empty() => emit_mapping(map, 0, "", out),
        Value::Sequence(seq) if !seq.is_empty() => emit_sequence(seq, 0, "", out),
        Value::Tagged(tagged) if is_block(&tagged.value) => {
            out.push_str(&format!("{}\n", tagged.tag));
            emit_block(&tagged.value, 0, "", out)
        }
        other => {
            out.push_str(&inline(other, "")?);
            out.push('\n');
            Ok(())
        }
    }
}

/// Non-empty collections take their own lines; everything else fits inline.
fn is_block(value: &Value) -> bool {
    match value {
        Value::Mapping(map) => !map.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        _ => false,
    }
}

fn emit_block(value: &Value, indent: usize, path: &str, out: &mut String) -> Result<()> {
    match value {
        Value::Mapping(map) => emit_mapping(map, indent, path, out),
        Value::Sequence(seq) => emit_sequence(seq, indent, path, out),
        other => {
            let pad = " ".repeat(indent);
            let scalar = inline(other, path)?;
            out.push_str(&format!("{pad}{scalar}\n"));
            Ok(())
        }
    }
}

fn emit_mapping(map: &Mapping, indent: usize, path: &str, out: &mut String) -> Result<()> {
    let mut entries = map
        .iter()
        .map(|(key, value)| Ok((scalar_key(key, path)?, value)))
        .collect::<Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.0.name.cmp(&b.0.name));

    let pad = " ".repeat(indent);
    for (key, value) in entries {
        let child = child_path(path, &key.name);
        let text = key.text;
        match value {
            Value::Mapping(nested) if !nested.is_empty() => {
                out.push_str(&format!("{pad}{text}:\n"));
                emit_mapping(nested, indent + INDENT, &child, out)?;
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push_str(&format!("{pad}{text}:\n"));
                emit_sequence(items, indent, &child, out)?;
            }
            Value::Tagged(tagged) if is_block(&tagged.value) => {
                out.push_str(&format!("{pad}{text}: {}\n", tagged.tag));
                emit_block(&tagged.value, indent + INDENT, &child, out)?;
            }
            _ => {
                let scalar = inline(value, &child)?;
                out.push_str(&format!("{pad}{text}: {scalar}\n"));
            }
        }
    }
    Ok(())
}

fn emit_sequence(items: &[Value], indent: usize, path: &str, out: &mut String) -> Result<()> {
    let pad = " ".repeat(indent);
    for (i, item) in items.iter().enumerate() {
        let child = format!("{path}[{i}]");
        match item {
            Value::Mapping(nested) if !nested.is_empty() => {
                let mut block = String::new();
                emit_mapping(nested, indent + INDENT, &child, &mut block)?;
                out.push_str(&hang_on_dash(&block, indent));
            }
            Value::Sequence(inner) if !inner.is_empty() => {
                let mut block = String::new();
                emit_sequence(inner, indent + INDENT, &child, &mut block)?;
                out.push_str(&hang_on_dash(&block, indent));
            }
            Value::Tagged(tagged) if is_block(&tagged.value) => {
                out.push_str(&format!("{pad}- {}\n", tagged.tag));
                emit_block(&tagged.value, indent + INDENT, &child, out)?;
            }
            _ => {
                let scalar = inline(item, &child)?;
                out.push_str(&format!("{pad}- {scalar}\n"));
            }
        }
    }
    Ok(())
}

/// Replace the leading indent of the block's first line with `- `.
fn hang_on_dash(block: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let first = &block[indent + INDENT..];
    format!("{pad}- {first}")
}

/// Render a value that fits on one line.
fn inline(value: &Value, path: &str) -> Result<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(quote(s)),
        Value::Mapping(map) if map.is_empty() => Ok("{}".to_string()),
        Value::Sequence(seq) if seq.is_empty() => Ok("[]".to_string()),
        Value::Mapping(_) | Value::Sequence(_) => Err(ConfigError::unsupported(
            path,
            "collection cannot be rendered inline",
        )),
        Value::Tagged(tagged) => Ok(format!("{} {}", tagged.tag, inline(&tagged.value, path)?)),
    }
}

/// A mapping key: `name` orders entries, `text` is what gets printed.
struct Key {
    name: String,
    text: String,
}

fn scalar_key(key: &Value, path: &str) -> Result<Key> {
    match key {
        Value::Mapping(_) | Value::Sequence(_) | Value::Tagged(_) => Err(
            ConfigError::unsupported(path, "mapping key must be a scalar"),
        ),
        Value::String(s) => Ok(Key {
            name: s.clone(),
            text: quote(s),
        }),
        other => {
            let text = inline(other, path)?;
            Ok(Key {
                name: text.clone(),
                text,
            })
        }
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Quote a string scalar when reading it back plain would change its meaning.
fn quote(s: &str) -> String {
    if needs_quotes(s) {
        double_quoted(s)
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };
    if s.trim() != s {
        return true;
    }
    if matches!(
        first,
        '-' | '?' | ':' | ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\''
            | '"' | '%' | '@' | '`'
    ) {
        return true;
    }
    if s.contains(": ") || s.contains(" #") || s.ends_with(':') {
        return true;
    }
    if s.chars().any(|c| c.is_control() || is_line_break(c) || !is_printable(c)) {
        return true;
    }
    is_reserved_word(s) || looks_numeric(s)
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// The YAML 1.2 printable character set, minus the byte order mark.
fn is_printable(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | ' '..='~'
            | '\u{85}'
            | '\u{A0}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    ) && c != '\u{FEFF}'
}

/// Double-quoted scalar using YAML escapes, so the result is one line of
/// printable characters.
fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{B}' => out.push_str("\\v"),
            '\u{C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\u{1B}' => out.push_str("\\e"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if !is_printable(c) => {
                let code = u32::from(c);
                let _ = match code {
                    0..=0xFF => write!(out, "\\x{code:02X}"),
                    0x100..=0xFFFF => write!(out, "\\u{code:04X}"),
                    _ => write!(out, "\\U{code:08X}"),
                };
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Words YAML 1.1 or 1.2 resolve to null or a boolean.
fn is_reserved_word(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "~" | "null" | "true" | "false" | "yes" | "no" | "on" | "off" | "y" | "n"
    )
}

fn looks_numeric(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    if matches!(
        lower.trim_start_matches(['+', '-']),
        ".inf" | ".nan" | "inf" | "nan" | "infinity"
    ) {
        return true;
    }
    if lower.parse::<f64>().is_ok() {
        return true;
    }
    let digits = lower.trim_start_matches(['+', '-']);
    for prefix in ["0x", "0o", "0b"] {
        if let Some(rest) = digits.strip_prefix(prefix) {
            if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_hexdigit() || c == '_') {
                return true;
            }
        }
    }
    // YAML 1.1 allows `_` separators and sexagesimal `1:30`.
    digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '_' | ':'))
}
