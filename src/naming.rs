//! Naming helpers shared by the photo sources.
//!
//! Content directories and files may carry an optional `NNN-` ordering prefix
//! (`010-nature/`, `003-sunrise.jpg`). The prefix only orders entries; the
//! folder key and titles use the remainder.
//!
//! - `010-nature` → sequence `Some(10)`, name `nature`
//! - `nature` → sequence `None`, name `nature`
//! - `007` → sequence `Some(7)`, name `` (empty)

/// Split an optional `NNN-` prefix off `name`.
pub fn split_sequence(name: &str) -> (Option<u32>, &str) {
    if let Some((prefix, rest)) = name.split_once('-')
        && let Ok(num) = prefix.parse::<u32>()
    {
        return (Some(num), rest);
    }
    match name.parse::<u32>() {
        Ok(num) => (Some(num), ""),
        Err(_) => (None, name),
    }
}

/// Sort key for prefixed entries: numbered entries first by number, then
/// unnumbered ones, ties broken by the full name.
pub fn sort_key(name: &str) -> (u32, String) {
    let (seq, _) = split_sequence(name);
    (seq.unwrap_or(u32::MAX), name.to_string())
}

/// Upper-case the first character: `portraits` → `Portraits`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display title for a file stem: prefix dropped, dashes to spaces.
/// A bare number falls back to the stem itself.
pub fn display_title(stem: &str) -> String {
    let (_, name) = split_sequence(stem);
    if name.is_empty() {
        stem.to_string()
    } else {
        name.replace('-', " ")
    }
}
