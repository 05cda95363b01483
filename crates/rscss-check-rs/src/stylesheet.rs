//! Qualified-rule discovery in CSS source.
//!
//! A shallow scanner that yields each rule's selector prelude and its byte
//! offset; the selector engine does the rest. Comments, strings, and
//! declaration blocks are skipped; conditional group at-rules (`@media`,
//! `@supports`, ...) are entered so their inner rules are found. Nested
//! rules inside declaration blocks are not resolved. Unbalanced input ends
//! the scan silently.

use source_map::ByteOffset;
use text_size::TextSize;

/// One selector found in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    /// The selector text, trimmed.
    pub text: String,
    /// The byte offset of the selector's first character in the file.
    pub offset: ByteOffset,
}

/// At-rules whose blocks contain rules rather than declarations.
const GROUP_AT_RULES: &[&str] = &["media", "supports", "layer", "container", "scope"];

/// Scans CSS source for qualified-rule selectors.
pub fn scan(source: &str) -> Vec<SelectorEntry> {
    let mut entries = Vec::new();
    scan_rules(source, 0, source.len(), &mut entries);
    entries
}

fn scan_rules(source: &str, start: usize, end: usize, entries: &mut Vec<SelectorEntry>) {
    let bytes = source.as_bytes();
    let mut i = start;
    let mut prelude_start = start;

    while i < end {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i, end),
            b'"' | b'\'' => i = skip_string(bytes, i, end),
            b'{' => {
                // Blanking comments keeps every byte offset intact.
                let prelude = blank_comments(&source[prelude_start..i]);
                let close = find_block_end(bytes, i, end);
                if is_group_at_rule(&prelude) {
                    scan_rules(source, i + 1, close, entries);
                } else if !prelude.trim_start().starts_with('@') {
                    push_selectors(&prelude, prelude_start, entries);
                }
                i = (close + 1).min(end);
                prelude_start = i;
            }
            b'}' | b';' => {
                i += 1;
                prelude_start = i;
            }
            _ => i += 1,
        }
    }
}

/// Splits a prelude on top-level commas and records each selector.
///
/// `base` is the prelude's byte offset in the file.
fn push_selectors(prelude: &str, base: usize, entries: &mut Vec<SelectorEntry>) {
    let bytes = prelude.as_bytes();
    let end = prelude.len();
    let mut depth = 0usize;
    let mut piece_start = 0usize;
    let mut i = 0usize;

    while i < end {
        match bytes[i] {
            b'"' | b'\'' => i = skip_string(bytes, i, end),
            b'(' | b'[' => {
                depth += 1;
                i += 1;
            }
            b')' | b']' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            b',' if depth == 0 => {
                push_entry(prelude, piece_start, i, base, entries);
                i += 1;
                piece_start = i;
            }
            _ => i += 1,
        }
    }
    push_entry(prelude, piece_start, end, base, entries);
}

fn push_entry(
    prelude: &str,
    start: usize,
    end: usize,
    base: usize,
    entries: &mut Vec<SelectorEntry>,
) {
    let piece = &prelude[start..end];
    let trimmed = piece.trim();
    if trimmed.is_empty() {
        return;
    }
    let leading = piece.len() - piece.trim_start().len();
    entries.push(SelectorEntry {
        text: trimmed.to_string(),
        offset: TextSize::from((base + start + leading) as u32),
    });
}

/// Replaces comment bytes with spaces, leaving offsets and strings intact.
fn blank_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = bytes.to_vec();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let after = skip_comment(bytes, i, bytes.len());
                for byte in &mut out[i..after] {
                    *byte = b' ';
                }
                i = after;
            }
            b'"' | b'\'' => i = skip_string(bytes, i, bytes.len()),
            _ => i += 1,
        }
    }
    // Replaced bytes are ASCII spaces, everything else is untouched.
    String::from_utf8(out).unwrap_or_else(|_| text.to_string())
}

/// Returns the index of the `}` closing the block opened at `open`, or
/// `end` if the block never closes.
fn find_block_end(bytes: &[u8], open: usize, end: usize) -> usize {
    let mut depth = 1usize;
    let mut i = open + 1;
    while i < end {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i, end),
            b'"' | b'\'' => i = skip_string(bytes, i, end),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    end
}

/// Returns the index just past `*/`, or `end` for an unterminated comment.
fn skip_comment(bytes: &[u8], start: usize, end: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < end {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    end
}

/// Returns the index just past the closing quote, or `end` for an
/// unterminated string.
fn skip_string(bytes: &[u8], start: usize, end: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < end {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    end
}

fn is_group_at_rule(prelude: &str) -> bool {
    let Some(rest) = prelude.trim_start().strip_prefix('@') else {
        return false;
    };
    let keyword: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    GROUP_AT_RULES.contains(&keyword.as_str())
}
