//! Identifier sanitization.
//!
//! Schema names are emitted verbatim unless they collide with a Rust
//! keyword. Keywords become raw identifiers; the four keywords that cannot
//! be raw get a trailing underscore.

use crate::error::CodegenError;
use std::borrow::Cow;

/// Names rewritten to raw identifiers.
const RAW_KEYWORDS: &[&str] = &[
    // Schema field names known to collide.
    "type", "id", "async",
    // Strict keywords.
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn", "for", "if",
    "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static",
    "struct", "trait", "true", "unsafe", "use", "where", "while", "await", "dyn",
    // Reserved keywords.
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const SUFFIXED_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Maps a schema name to a name safe to use as a Rust identifier.
///
/// Total and idempotent: sanitizing a sanitized name returns it unchanged.
#[must_use]
pub fn sanitize_ident(name: &str) -> Cow<'_, str> {
    if RAW_KEYWORDS.contains(&name) {
        Cow::Owned(format!("r#{name}"))
    } else if SUFFIXED_KEYWORDS.contains(&name) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Returns true if `name` is an ASCII identifier (`[A-Za-z_][A-Za-z0-9_]*`, not `_`).
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    head_ok && name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates a schema name and sanitizes it.
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` if the name cannot be an identifier.
pub fn rust_ident<'a>(name: &'a str, context: &str) -> Result<Cow<'a, str>, CodegenError> {
    if !is_identifier(name) {
        return Err(CodegenError::InvalidIdentifier {
            name: name.to_string(),
            context: context.to_string(),
        });
    }
    Ok(sanitize_ident(name))
}
