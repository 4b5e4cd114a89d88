//! Token-level transforms.
//! Every function is a pure `&str` transform; classification never looks beyond the single token.

/// Render the long form of a flag: `--{name}`.
pub(crate) fn long(name: &str) -> String {
    format!("--{name}")
}

/// Render the short form of a flag: `-{key}`.
pub(crate) fn short(key: char) -> String {
    format!("-{key}")
}

/// Whether the token reads as a bracketed item.
/// The test is purely structural: a `[` prefix and a `]` suffix.
pub(crate) fn is_item(token: &str) -> bool {
    token.starts_with('[') && token.ends_with(']')
}

/// Normalize a bracketed item by dropping every bracket character.
/// All brackets are dropped, not just the outer pair: `[[x]]` normalizes to `x`, not `[x]`.
pub(crate) fn strip_item(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, '[' | ']'))
        .collect()
}
