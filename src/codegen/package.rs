//! Default package inference over compile source roots
//!
//! Finds the shallowest package that directly contains at least one source
//! file. Used only when no explicit generated-type name is configured;
//! finding nothing just disables auto-naming.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Extensions that mark a directory as containing sources.
const SOURCE_EXTENSIONS: &[&str] = &["rs"];

/// The package with the fewest segments (ties broken by shortest name)
/// among those directly containing a source file, or `None` when no source
/// root yields one. A source file directly in a root maps to the empty
/// package.
pub fn least_package_with_source_file(source_roots: &[PathBuf]) -> Option<String> {
    let mut packages: BTreeSet<String> = BTreeSet::new();
    for root in source_roots {
        if !root.is_dir() {
            continue;
        }
        let mut dirs: BTreeSet<PathBuf> = BTreeSet::new();
        scan(root, &mut dirs);
        for dir in dirs {
            if let Ok(rel) = dir.strip_prefix(root) {
                let package = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join(".");
                packages.insert(package);
            }
        }
    }
    packages
        .into_iter()
        .min_by(|a, b| dot_count(a).cmp(&dot_count(b)).then(a.len().cmp(&b.len())))
}

fn scan(dir: &Path, dirs: &mut BTreeSet<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("Could not list {}: {}", dir.display(), err);
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan(&path, dirs);
        } else if has_source_extension(&path) {
            dirs.insert(dir.to_path_buf());
        }
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

fn dot_count(s: &str) -> usize {
    s.chars().filter(|c| *c == '.').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "pub fn placeholder() {}\n").unwrap();
    }

    #[test]
    fn test_picks_shallowest_package() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a/b/c/deep.rs");
        touch(dir.path(), "a/top.rs");
        let result = least_package_with_source_file(&[dir.path().to_path_buf()]);
        assert_eq!(result.as_deref(), Some("a"));
    }

    #[test]
    fn test_tie_breaks_on_shortest_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "longer/one.rs");
        touch(dir.path(), "ab/two.rs");
        let result = least_package_with_source_file(&[dir.path().to_path_buf()]);
        assert_eq!(result.as_deref(), Some("ab"));
    }

    #[test]
    fn test_directories_without_sources_do_not_qualify() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        touch(dir.path(), "a/b/notes.txt");
        assert_eq!(
            least_package_with_source_file(&[dir.path().to_path_buf()]),
            None
        );
    }

    #[test]
    fn test_source_in_root_maps_to_empty_package() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "main.rs");
        touch(dir.path(), "pkg/lib.rs");
        assert_eq!(
            least_package_with_source_file(&[dir.path().to_path_buf()]).as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_missing_roots_yield_none() {
        assert_eq!(
            least_package_with_source_file(&[PathBuf::from("/no/such/root")]),
            None
        );
        assert_eq!(least_package_with_source_file(&[]), None);
    }

    #[test]
    fn test_merges_packages_across_roots() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        touch(first.path(), "x/y/deep.rs");
        touch(second.path(), "z/top.rs");
        let roots = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(least_package_with_source_file(&roots).as_deref(), Some("z"));
    }
}
