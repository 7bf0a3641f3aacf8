//! Task configuration supplied by the surrounding build

use std::path::PathBuf;

use crate::core::identity::ProjectIdentity;

/// Sentinel meaning "do not generate a source module".
pub const NO_TYPE_NAME: &str = "none";
/// Simple name used for the generated module in auto mode.
pub const DEFAULT_TYPE_NAME: &str = "RevisionInfo";

#[derive(Debug, Clone)]
pub struct TaskConfig {
    pub project: ProjectIdentity,
    /// Build output directory; the properties file lands under it.
    pub output_dir: PathBuf,
    /// Destination directory for generated sources.
    pub generated_sources_dir: PathBuf,
    /// Fully qualified name of the module to generate, or `none`.
    pub type_name: String,
    /// Infer a target package when no explicit name is given.
    pub auto: bool,
    /// Compile source roots scanned by package inference.
    pub source_roots: Vec<PathBuf>,
    /// Encoding name for the generated source file; UTF-8 when absent.
    pub encoding: Option<String>,
    /// Extra directories searched for the git binary before `PATH`.
    pub git_binary_dirs: Vec<PathBuf>,
    /// Directory from which the repository root is searched upward.
    pub start_dir: PathBuf,
    pub skip: bool,
}

impl TaskConfig {
    /// Fixed relative location of the properties file under the output
    /// directory.
    pub fn properties_output_file(&self) -> PathBuf {
        self.output_dir.join("classes/META-INF").join(format!(
            "{}.{}.versions.properties",
            self.project.group_id, self.project.artifact_id
        ))
    }

    /// The explicitly configured type name, unless disabled.
    pub fn explicit_type_name(&self) -> Option<&str> {
        match self.type_name.as_str() {
            "" | NO_TYPE_NAME => None,
            other => Some(other),
        }
    }
}
