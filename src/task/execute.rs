//! Task execution pipeline
//!
//! Validation first, then extraction, then artifact writing. Writes are not
//! transactional: parent directories are created, content is written, and a
//! partial file from a crash is healed by the next run's full regeneration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::{package, source};
use crate::core::strings;
use crate::core::validation::{self, SourceEncoding};
use crate::git::revision::RevisionSource;

use super::config::{TaskConfig, DEFAULT_TYPE_NAME};
use super::error::{TaskError, TaskResult};

/// Files written by one run, plus whatever recoverable trouble came up.
#[derive(Debug, Default)]
pub struct TaskOutcome {
    pub properties_file: Option<PathBuf>,
    pub source_file: Option<PathBuf>,
    pub warnings: String,
}

pub fn execute(config: &TaskConfig) -> TaskResult<TaskOutcome> {
    let mut outcome = TaskOutcome::default();
    if config.skip {
        log::info!("revision-info skipped by configuration");
        return Ok(outcome);
    }
    if config.project.is_pom() {
        log::debug!("revision-info ignoring POM project");
        return Ok(outcome);
    }

    // Malformed configuration fails before any git work.
    if let Some(fqn) = config.explicit_type_name() {
        validation::validate_type_name(fqn).map_err(TaskError::config)?;
    }
    let encoding = match config.encoding.as_deref() {
        Some(name) => SourceEncoding::resolve(name).map_err(TaskError::config)?,
        None => SourceEncoding::default(),
    };

    let extraction = RevisionSource::new(config.git_binary_dirs.clone()).extract(&config.start_dir);
    outcome.warnings = extraction.errors;
    if !outcome.warnings.is_empty() {
        log::warn!("{}", outcome.warnings);
    }
    let Some(props) = extraction.properties else {
        if outcome.warnings.is_empty() {
            log::warn!("Failed to get git revision info and did not write properties file");
        }
        return Ok(outcome);
    };

    let properties_file = config.properties_output_file();
    create_parent_dirs(&properties_file)?;
    let comment = format!("Generated by {}", source::GENERATOR_NAME);
    fs::write(&properties_file, props.to_bytes(Some(&comment)))
        .map_err(|e| TaskError::io(&properties_file, e))?;
    log::info!("Generated revision info to {}", properties_file.display());
    outcome.properties_file = Some(properties_file);

    if let Some(fqn) = resolved_type_name(config) {
        let source_text = source::render_module(&fqn, &props, &config.project);
        let source_file = config
            .generated_sources_dir
            .join(strings::fqn_to_source_path(&fqn));
        create_parent_dirs(&source_file)?;
        fs::write(&source_file, encoding.encode(&source_text))
            .map_err(|e| TaskError::io(&source_file, e))?;
        log::info!("Generating module {} in {}", fqn, source_file.display());
        outcome.source_file = Some(source_file);
    }
    Ok(outcome)
}

fn create_parent_dirs(file: &Path) -> TaskResult<()> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
    }
    Ok(())
}

/// The target name for generation: explicit configuration wins; otherwise
/// auto mode appends the default simple name to the inferred package.
fn resolved_type_name(config: &TaskConfig) -> Option<String> {
    if let Some(fqn) = config.explicit_type_name() {
        return Some(fqn.to_string());
    }
    if config.auto {
        if let Some(pkg) = package::least_package_with_source_file(&config.source_roots) {
            return Some(if pkg.is_empty() {
                DEFAULT_TYPE_NAME.to_string()
            } else {
                format!("{}.{}", pkg, DEFAULT_TYPE_NAME)
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::ProjectIdentity;
    use crate::task::config::NO_TYPE_NAME;

    fn base_config(start_dir: &Path, output_dir: &Path) -> TaskConfig {
        TaskConfig {
            project: ProjectIdentity::new("com.example", "foo-bar", "1.0", "jar"),
            output_dir: output_dir.to_path_buf(),
            generated_sources_dir: output_dir.join("generated-sources"),
            type_name: NO_TYPE_NAME.to_string(),
            auto: true,
            source_roots: Vec::new(),
            encoding: None,
            git_binary_dirs: Vec::new(),
            start_dir: start_dir.to_path_buf(),
            skip: false,
        }
    }

    #[test]
    fn test_skip_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = base_config(dir.path(), &dir.path().join("target"));
        config.skip = true;
        let outcome = execute(&config).unwrap();
        assert!(outcome.properties_file.is_none());
        assert!(outcome.source_file.is_none());
    }

    #[test]
    fn test_pom_packaging_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = base_config(dir.path(), &dir.path().join("target"));
        config.project.packaging = "pom".to_string();
        let outcome = execute(&config).unwrap();
        assert!(outcome.properties_file.is_none());
    }

    #[test]
    fn test_invalid_type_name_is_fatal_before_git_work() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = base_config(dir.path(), &dir.path().join("target"));
        config.type_name = "com.exa mple.Info".to_string();
        let err = execute(&config).unwrap_err();
        assert!(matches!(err, TaskError::Configuration { .. }));
    }

    #[test]
    fn test_unknown_encoding_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = base_config(dir.path(), &dir.path().join("target"));
        config.encoding = Some("KOI8-R".to_string());
        let err = execute(&config).unwrap_err();
        assert_eq!(err.to_string(), "Could not find encoding 'KOI8-R'");
    }

    #[test]
    fn test_no_repository_yields_no_artifacts_but_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = base_config(dir.path(), &dir.path().join("target"));
        let outcome = execute(&config).unwrap();
        assert!(outcome.properties_file.is_none());
        assert!(outcome.source_file.is_none());
    }

    #[test]
    fn test_resolved_type_name_prefers_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = base_config(dir.path(), &dir.path().join("target"));
        config.type_name = "com.example.Info".to_string();
        assert_eq!(
            resolved_type_name(&config).as_deref(),
            Some("com.example.Info")
        );
    }

    #[test]
    fn test_resolved_type_name_from_inference() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("src");
        std::fs::create_dir_all(root.join("com")).unwrap();
        std::fs::write(root.join("com/lib.rs"), "").unwrap();
        let mut config = base_config(dir.path(), &dir.path().join("target"));
        config.source_roots = vec![root];
        assert_eq!(
            resolved_type_name(&config).as_deref(),
            Some("com.RevisionInfo")
        );
        config.auto = false;
        assert_eq!(resolved_type_name(&config), None);
    }
}
