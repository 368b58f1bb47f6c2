use std::collections::HashMap;

use serde_json::value::RawValue;

/// Looks up `path` in a JSON body and renders the hit as a string.
///
/// Segments are separated by `.`; `\.` keeps a literal dot inside a key. A
/// numeric segment (or a `name[3]` suffix) indexes an array and `#` on an
/// array yields its length. A body that is not JSON, a missing path and
/// `null` all render as the empty string.
///
/// Strings render unquoted. Integers, objects and arrays render exactly as
/// written in the body. Other numbers render in plain decimal notation
/// (`1.0` as `1`, `1e2` as `100`).
#[must_use]
pub fn lookup_string(body: &[u8], path: &str) -> String {
    let Ok(root) = serde_json::from_slice::<&RawValue>(body) else {
        return String::new();
    };
    lookup(root, path).map(render).unwrap_or_default()
}

fn lookup<'doc>(root: &'doc RawValue, path: &str) -> Option<LookupHit<'doc>> {
    if path.is_empty() {
        return None;
    }
    let mut current = root;
    for segment in split_segments(path) {
        let (key, indexes) = split_index_suffix(&segment);
        if !key.is_empty() {
            if key == "#" {
                return array_items(current).map(|items| LookupHit::Count(items.len()));
            }
            current = step(current, key)?;
        }
        for index in indexes {
            current = array_items(current)?.get(index).copied()?;
        }
    }
    Some(LookupHit::Value(current))
}

enum LookupHit<'doc> {
    Value(&'doc RawValue),
    Count(usize),
}

fn step<'doc>(current: &'doc RawValue, key: &str) -> Option<&'doc RawValue> {
    match current.get().as_bytes().first().copied() {
        Some(b'{') => object_fields(current)?.get(key).copied(),
        Some(b'[') => {
            let index = key.parse::<usize>().ok()?;
            array_items(current)?.get(index).copied()
        }
        Some(_) | None => None,
    }
}

fn object_fields(value: &RawValue) -> Option<HashMap<String, &RawValue>> {
    serde_json::from_str(value.get()).ok()
}

fn array_items(value: &RawValue) -> Option<Vec<&RawValue>> {
    if !value.get().starts_with('[') {
        return None;
    }
    serde_json::from_str(value.get()).ok()
}

fn render(hit: LookupHit<'_>) -> String {
    match hit {
        LookupHit::Count(count) => count.to_string(),
        LookupHit::Value(raw) => render_raw(raw.get()),
    }
}

fn render_raw(text: &str) -> String {
    match text.as_bytes().first().copied() {
        Some(b'"') => serde_json::from_str::<String>(text).unwrap_or_default(),
        Some(b'n') | None => String::new(),
        Some(b'{' | b'[' | b't' | b'f') => text.to_owned(),
        Some(_) => render_number(text),
    }
}

fn render_number(text: &str) -> String {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return text.to_owned();
    }
    text.parse::<f64>()
        .map_or_else(|_| text.to_owned(), |number| number.to_string())
}

fn split_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if !current.is_empty() || !segments.is_empty() {
        segments.push(current);
    }
    segments
}

/// Splits `items[2][0]` into `("items", [2, 0])`. Anything that is not a
/// well-formed index suffix stays part of the key.
fn split_index_suffix(segment: &str) -> (&str, Vec<usize>) {
    let mut key = segment;
    let mut indexes = Vec::new();
    while let Some(open) = key.rfind('[') {
        let Some(inner) = key
            .strip_suffix(']')
            .and_then(|rest| rest.get(open.saturating_add(1)..))
        else {
            break;
        };
        let Ok(index) = inner.parse::<usize>() else {
            break;
        };
        indexes.push(index);
        key = key.get(..open).unwrap_or_default();
    }
    indexes.reverse();
    (key, indexes)
}
