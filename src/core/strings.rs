//! Small string helpers shared by the codec and the source generator.

use std::path::PathBuf;

/// Convert a bicapitalized property key to a constant name, inserting an
/// underscore before each uppercase letter that follows a non-uppercase,
/// non-underscore character, then uppercasing the whole key.
///
/// `commitDateISO` becomes `COMMIT_DATE_ISO`, `repoStatus` becomes
/// `REPO_STATUS`, and an already-underscored key is left segmented as-is.
pub fn bicapitalized_to_constant_name(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len() + 4);
    let mut last_caps = false;
    for (i, c) in prop.chars().enumerate() {
        let caps = c.is_uppercase();
        if i != 0 && caps && !last_caps && !out.ends_with('_') {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        last_caps = caps;
    }
    out
}

/// Last dot-separated segment of a fully qualified name.
pub fn type_name_for(fqn: &str) -> &str {
    match fqn.rfind('.') {
        Some(ix) => &fqn[ix + 1..],
        None => fqn,
    }
}

/// Relative source path for a fully qualified name: dots become path
/// separators and the source-file extension is appended.
pub fn fqn_to_source_path(fqn: &str) -> PathBuf {
    let mut path: PathBuf = fqn.split('.').collect();
    path.set_extension("rs");
    path
}
