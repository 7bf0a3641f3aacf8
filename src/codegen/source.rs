//! Rust source rendering for the generated revision module
//!
//! The artifact is a module of `pub static` items: a module cannot be
//! constructed, and statics (unlike consts) keep per-build values out of the
//! object code of downstream consumers. Constants appear in sorted
//! property-key order, derived constants after.

use std::collections::HashSet;

use crate::core::date_parser;
use crate::core::identity::ProjectIdentity;
use crate::core::properties::{
    RevisionProperties, COMMIT_DATE_ISO_PROPERTY, LONG_COMMIT_HASH_PROPERTY, REPO_STATUS_PROPERTY,
    STATUS_CLEAN, STATUS_UNKNOWN,
};
use crate::core::strings;

pub const GENERATOR_NAME: &str = "revision-info";

/// Render the module source for a fully qualified target name.
pub fn render_module(fqn: &str, props: &RevisionProperties, project: &ProjectIdentity) -> String {
    let type_name = strings::type_name_for(fqn);
    let mut out = String::with_capacity(1024);
    out.push_str(&format!(
        "//! `{}`: revision metadata for `{}:{}`.\n//!\n//! Generated by {}. Do not edit.\n\n",
        type_name, project.group_id, project.artifact_id, GENERATOR_NAME
    ));

    let mut written: HashSet<String> = HashSet::new();
    for (key, value) in props.iter() {
        if key == COMMIT_DATE_ISO_PROPERTY {
            // folded into COMMIT_TIMESTAMP below
            continue;
        }
        let name = strings::bicapitalized_to_constant_name(key);
        out.push_str(&format!(
            "pub static {}: &str = {};\n",
            name,
            string_literal(value)
        ));
        written.insert(name);
    }

    let timestamp = date_parser::commit_timestamp(props);
    out.push_str(&format!("pub static COMMIT_TIMESTAMP: i64 = {};\n", timestamp));
    out.push_str(&format!(
        "pub static GROUP_ID: &str = {};\n",
        string_literal(&project.group_id)
    ));
    out.push_str(&format!(
        "pub static ARTIFACT_ID: &str = {};\n",
        string_literal(&project.artifact_id)
    ));
    // A property that already produced a VERSION constant wins; the other
    // derived names carry no such check.
    if !written.contains("VERSION") {
        out.push_str(&format!(
            "pub static VERSION: &str = {};\n",
            string_literal(&project.version)
        ));
    }

    let revision = format!(
        "{}:{}:{};{}-{}",
        project.group_id,
        project.artifact_id,
        project.version,
        props.get(LONG_COMMIT_HASH_PROPERTY).unwrap_or("?"),
        props.get(REPO_STATUS_PROPERTY).unwrap_or(STATUS_UNKNOWN)
    );
    out.push_str(&format!(
        "pub static REVISION: &str = {};\n",
        string_literal(&revision)
    ));

    let clean = props.get(REPO_STATUS_PROPERTY) == Some(STATUS_CLEAN);
    out.push_str(&format!("pub static CLEAN_REPO: bool = {};\n", clean));
    out
}

/// Escape a value into a valid Rust string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{{{:X}}}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
