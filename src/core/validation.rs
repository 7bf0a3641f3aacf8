//! Validation for task configuration values
//!
//! Both checks run before any git work so that malformed configuration fails
//! the build instead of producing half-written artifacts.

/// Validate a fully qualified generated-type name: every dot-separated
/// segment must be a well-formed identifier.
pub fn validate_type_name(fqn: &str) -> Result<(), String> {
    if fqn.is_empty() {
        return Err("Type name cannot be empty".to_string());
    }
    for part in fqn.split('.') {
        validate_name_part(part, fqn)?;
    }
    Ok(())
}

fn validate_name_part(part: &str, fqn: &str) -> Result<(), String> {
    let mut chars = part.chars().enumerate();
    match chars.next() {
        None => {
            return Err(format!("Type name '{}' contains an empty segment", fqn));
        }
        Some((_, c)) if c.is_alphabetic() || c == '_' => {}
        Some((_, c)) => {
            return Err(format!(
                "Type name contains invalid first character '{}', which cannot \
                 begin an identifier: '{}'",
                c, part
            ));
        }
    }
    for (i, c) in chars {
        if !c.is_alphanumeric() && c != '_' {
            return Err(format!(
                "Type name contains invalid character '{}' at index {}, which \
                 cannot be part of an identifier: '{}'",
                c, i, part
            ));
        }
    }
    Ok(())
}

/// Character encodings the generated source file can be written in.
///
/// A small closed set rather than a general transcoder: the properties file
/// is always emitted in the ASCII-safe escaped form, so the encoding only
/// governs the generated module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceEncoding {
    #[default]
    Utf8,
    Iso8859_1,
    UsAscii,
}

impl SourceEncoding {
    /// Resolve an encoding name, accepting the usual aliases. Unknown names
    /// are an error the caller treats as fatal.
    pub fn resolve(name: &str) -> Result<Self, String> {
        let canonical = name.trim().to_ascii_lowercase().replace('_', "-");
        match canonical.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "latin-1" | "latin1" => Ok(Self::Iso8859_1),
            "us-ascii" | "ascii" => Ok(Self::UsAscii),
            _ => Err(format!("Could not find encoding '{}'", name)),
        }
    }

    /// Encode text, substituting `?` for unmappable characters.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Iso8859_1 => text
                .chars()
                .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
                .collect(),
            Self::UsAscii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_type_name() {
        assert!(validate_type_name("com.example.RevisionInfo").is_ok());
        assert!(validate_type_name("RevisionInfo").is_ok());
        assert!(validate_type_name("_private.Info").is_ok());
        assert!(validate_type_name("").is_err());
        assert!(validate_type_name("com..example").is_err());
        assert!(validate_type_name("com.1example.Info").is_err());
        assert!(validate_type_name("com.exa-mple.Info").is_err());
        assert!(validate_type_name("com.example.Revision Info").is_err());
    }

    #[test]
    fn test_resolve_encoding() {
        assert_eq!(SourceEncoding::resolve("UTF-8").unwrap(), SourceEncoding::Utf8);
        assert_eq!(SourceEncoding::resolve("utf8").unwrap(), SourceEncoding::Utf8);
        assert_eq!(
            SourceEncoding::resolve("ISO-8859-1").unwrap(),
            SourceEncoding::Iso8859_1
        );
        assert_eq!(
            SourceEncoding::resolve("ISO_8859_1").unwrap(),
            SourceEncoding::Iso8859_1
        );
        assert_eq!(
            SourceEncoding::resolve("US-ASCII").unwrap(),
            SourceEncoding::UsAscii
        );
        assert!(SourceEncoding::resolve("KOI8-R").is_err());
        assert!(SourceEncoding::resolve("").is_err());
    }

    #[test]
    fn test_encode_substitutes_unmappable() {
        assert_eq!(SourceEncoding::Utf8.encode("søren"), "søren".as_bytes());
        assert_eq!(SourceEncoding::Iso8859_1.encode("søren"), b"s\xf8ren");
        assert_eq!(SourceEncoding::Iso8859_1.encode("日本"), b"??");
        assert_eq!(SourceEncoding::UsAscii.encode("søren"), b"s?ren");
    }
}
