use owo_colors::{OwoColorize, Stream};
use serde_json::Value as JsonValue;

use crate::util::CliResult;

pub fn render_json(value: &JsonValue, compact: bool) -> CliResult<String> {
    let text =
        if compact { serde_json::to_string(value)? } else { serde_json::to_string_pretty(value)? };
    Ok(text)
}

/// Indented outline: `key: value` per line, `-` per sequence element, nested
/// containers one level deeper. Colour follows what stdout supports.
pub fn render_text(value: &JsonValue) -> String {
    let mut out = String::new();
    write_outline(&mut out, value, 0);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn write_outline(out: &mut String, value: &JsonValue, depth: usize) {
    match value {
        JsonValue::Object(map) if !map.is_empty() => {
            for (key, item) in map {
                indent(out, depth);
                out.push_str(&colorize_key(key));
                out.push(':');
                write_entry(out, item, depth);
            }
        }
        JsonValue::Array(items) if !items.is_empty() => {
            for item in items {
                indent(out, depth);
                out.push('-');
                write_entry(out, item, depth);
            }
        }
        leaf => {
            indent(out, depth);
            out.push_str(&colorize_value(leaf));
            out.push('\n');
        }
    }
}

fn write_entry(out: &mut String, item: &JsonValue, depth: usize) {
    if is_nested(item) {
        out.push('\n');
        write_outline(out, item, depth + 1);
    } else {
        out.push(' ');
        out.push_str(&colorize_value(item));
        out.push('\n');
    }
}

fn is_nested(value: &JsonValue) -> bool {
    match value {
        JsonValue::Object(map) => !map.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn format_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => serde_json::to_string(text)
            .unwrap_or_else(|_| format!("\"{}\"", text.replace('"', "\\\""))),
        other => other.to_string(),
    }
}

fn colorize_key(key: &str) -> String {
    key.if_supports_color(Stream::Stdout, |text| text.bold().fg_rgb::<79, 166, 255>().to_string())
        .to_string()
}

fn colorize_value(value: &JsonValue) -> String {
    format_value(value)
        .if_supports_color(Stream::Stdout, |text| text.fg_rgb::<136, 192, 74>().to_string())
        .to_string()
}
