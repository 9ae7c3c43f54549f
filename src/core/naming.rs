use crate::domain::model::NamedChild;
use serde_json::Value;
use unicode_normalization::char::is_combining_mark;

pub const UNNAMED: &str = "unnamed";

/// Finds a display name for a UI node.
///
/// Order: `params.name`, then `name`, then the first non-empty name found
/// depth-first in `children`. A present `name` key ends the lookup for that
/// node even when its value is empty or not a string; only string values
/// are returned.
pub fn resolve_name(value: &Value) -> Option<&str> {
    let obj = value.as_object()?;

    if let Some(name) = obj
        .get("params")
        .and_then(Value::as_object)
        .and_then(|params| params.get("name"))
    {
        return name.as_str();
    }

    if let Some(name) = obj.get("name") {
        return name.as_str();
    }

    obj.get("children")
        .and_then(Value::as_array)?
        .iter()
        .filter_map(resolve_name)
        .find(|name| !name.is_empty())
}

/// 找不到名稱時使用位置編號 `child_<index>`
pub fn name_child(index: usize, child: Value) -> NamedChild {
    let name = match resolve_name(&child) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("child_{}", index),
    };
    NamedChild { index, name, child }
}

/// Letters and numbers only: alphabetic marks and enclosed letters
/// (`Ⓐ`, Indic vowel signs) are not letters and get dropped.
fn is_letter_or_number(c: char) -> bool {
    if c.is_numeric() {
        return true;
    }
    c.is_alphabetic() && !is_combining_mark(c) && !is_enclosed_letter(c)
}

fn is_enclosed_letter(c: char) -> bool {
    matches!(
        c,
        '\u{24B6}'..='\u{24E9}'
            | '\u{1F130}'..='\u{1F149}'
            | '\u{1F150}'..='\u{1F169}'
            | '\u{1F170}'..='\u{1F189}'
    )
}

pub fn sanitize_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|&c| is_letter_or_number(c) || c == '-' || c == '_')
        .collect();
    let safe = safe.trim_end();

    if safe.is_empty() {
        UNNAMED.to_string()
    } else {
        safe.to_string()
    }
}
