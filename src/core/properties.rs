//! Canonical properties-file codec
//!
//! Stores revision properties in escaped `key=value` line format with sorted
//! keys, no date comment and fixed `\n` line terminators, so two runs against
//! the same commit produce byte-identical files regardless of host platform
//! or insertion order.

use std::collections::BTreeMap;
use std::io::{self, Write};

pub const COMMIT_DATE_ISO_PROPERTY: &str = "commitDateISO";
pub const COMMIT_DATE_PROPERTY: &str = "commitDate";
pub const LONG_COMMIT_HASH_PROPERTY: &str = "longCommitHash";
pub const SHORT_COMMIT_HASH_PROPERTY: &str = "shortCommitHash";
pub const REPO_STATUS_PROPERTY: &str = "repoStatus";

pub const STATUS_CLEAN: &str = "clean";
pub const STATUS_DIRTY: &str = "dirty";
pub const STATUS_UNKNOWN: &str = "unknown";

const HEX: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Ordered string-to-string property set with unique keys.
///
/// Keys iterate in lexicographic order whatever the insertion order was, which
/// is what makes the serialized form canonical. Unrecognized keys (merged
/// dependency metadata and the like) are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionProperties {
    entries: BTreeMap<String, String>,
}

impl RevisionProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to the canonical escaped text format.
    ///
    /// An optional comment becomes a single `# `-prefixed first line. No
    /// timestamp comment is ever written.
    pub fn write_to<W: Write>(&self, out: &mut W, comment: Option<&str>) -> io::Result<usize> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        if let Some(comment) = comment {
            lines.push(format!("# {}", comment));
        }
        for (key, value) in self.iter() {
            lines.push(format!("{}={}", escape(key, true), escape(value, false)));
        }
        write_lines(&lines, out)
    }

    /// Serialized form as bytes. The escaped text is pure ASCII, so the
    /// result is valid in any single-byte-safe charset.
    pub fn to_bytes(&self, comment: Option<&str>) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, comment)
            .expect("writing to a Vec cannot fail");
        buf
    }

    /// Read back the escaped text format. Comment lines (`#` or `!`) and
    /// blank lines are skipped; escapes are reversed.
    pub fn parse(text: &str) -> Self {
        let mut props = Self::new();
        for line in text.lines() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            let (raw_key, raw_value) = split_entry(trimmed);
            props.set(unescape(raw_key), unescape(raw_value));
        }
        props
    }
}

/// Write each line followed by a single `\n`, independent of host platform,
/// flushing on every exit path.
pub fn write_lines<W: Write>(lines: &[String], out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Escape one key or value. Spaces are only escaped in keys.
fn escape(input: &str, escape_space: bool) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ' ' => {
                if escape_space {
                    out.push_str("\\ ");
                } else {
                    out.push(' ');
                }
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{c}' => out.push_str("\\f"),
            '#' | '=' | '!' | ':' => {
                out.push('\\');
                out.push(ch);
            }
            c if ('\u{21}'..='\u{7e}').contains(&c) => out.push(c),
            c => push_unicode_escape(c, &mut out),
        }
    }
    out
}

/// `\uXXXX` with uppercase hex digits, one escape per UTF-16 unit so that
/// standard properties readers reassemble non-BMP characters correctly.
fn push_unicode_escape(c: char, out: &mut String) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        out.push('\\');
        out.push('u');
        for shift in [12u16, 8, 4, 0] {
            out.push(HEX[((*unit >> shift) & 0xF) as usize]);
        }
    }
}

/// Split a logical line at the first unescaped `=` or `:`.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], &line[i + 1..]),
            _ => {}
        }
    }
    (line, "")
}

fn unescape(input: &str) -> String {
    let mut units: Vec<u16> = Vec::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            push_units(ch, &mut units);
            continue;
        }
        match chars.next() {
            Some('n') => units.push(b'\n' as u16),
            Some('r') => units.push(b'\r' as u16),
            Some('t') => units.push(b'\t' as u16),
            Some('f') => units.push(0x0c),
            Some('u') => {
                let mut value: u16 = 0;
                let mut valid = true;
                let mut digits = String::new();
                for _ in 0..4 {
                    match chars.next() {
                        Some(d) if d.is_ascii_hexdigit() => {
                            digits.push(d);
                            value = value * 16 + d.to_digit(16).unwrap_or(0) as u16;
                        }
                        _ => {
                            valid = false;
                            break;
                        }
                    }
                }
                if valid {
                    units.push(value);
                } else {
                    // malformed escape, keep it literally
                    push_units('u', &mut units);
                    for d in digits.chars() {
                        push_units(d, &mut units);
                    }
                }
            }
            Some(other) => push_units(other, &mut units),
            None => units.push(b'\\' as u16),
        }
    }
    String::from_utf16_lossy(&units)
}

fn push_units(c: char, units: &mut Vec<u16>) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}
