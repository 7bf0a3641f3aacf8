//! Command line arguments for the standalone binary
//!
//! Mirrors the parameters a build-tool integration would inject: project
//! coordinates, output locations, generation target and flags.

use clap::Parser;
use std::path::PathBuf;

use crate::core::identity::ProjectIdentity;
use crate::task::config::{TaskConfig, NO_TYPE_NAME};

#[derive(Parser, Debug, Clone)]
#[command(name = "revision-info")]
#[command(about = "Extracts git revision info into a properties file and an optional generated module")]
#[command(version)]
pub struct Args {
    /// Directory from which to search upward for the repository root
    #[arg(short = 'r', long = "repo", value_name = "PATH", default_value = ".")]
    pub repository: PathBuf,

    /// Build output directory (the properties file lands under it)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = "target")]
    pub output_dir: PathBuf,

    /// Destination directory for generated sources (defaults to
    /// <output-dir>/generated-sources)
    #[arg(long = "gen-sources-dir", value_name = "DIR")]
    pub gen_sources_dir: Option<PathBuf>,

    /// Fully qualified name of the module to generate ('none' disables)
    #[arg(long = "type-name", value_name = "NAME", default_value = NO_TYPE_NAME)]
    pub type_name: String,

    /// Disable package inference when no explicit type name is given
    #[arg(long = "no-auto")]
    pub no_auto: bool,

    /// Compile source root scanned for the default target package (repeatable)
    #[arg(long = "source-root", value_name = "DIR")]
    pub source_roots: Vec<PathBuf>,

    /// Group id recorded in the generated artifacts
    #[arg(long = "group-id", value_name = "ID")]
    pub group_id: String,

    /// Artifact id recorded in the generated artifacts
    #[arg(long = "artifact-id", value_name = "ID")]
    pub artifact_id: String,

    /// Project version recorded in the generated artifacts
    #[arg(long = "project-version", value_name = "VERSION")]
    pub project_version: String,

    /// Packaging kind; 'pom' projects are skipped
    #[arg(long = "packaging", value_name = "KIND", default_value = "jar")]
    pub packaging: String,

    /// Encoding for the generated source file
    #[arg(long = "encoding", value_name = "NAME")]
    pub encoding: Option<String>,

    /// Extra directory searched for the git binary before PATH (repeatable)
    #[arg(long = "git-binary-dir", value_name = "DIR")]
    pub git_binary_dirs: Vec<PathBuf>,

    /// Skip execution entirely
    #[arg(long = "skip")]
    pub skip: bool,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> TaskConfig {
        let generated_sources_dir = self
            .gen_sources_dir
            .unwrap_or_else(|| self.output_dir.join("generated-sources"));
        TaskConfig {
            project: ProjectIdentity::new(
                self.group_id,
                self.artifact_id,
                self.project_version,
                self.packaging,
            ),
            output_dir: self.output_dir,
            generated_sources_dir,
            type_name: self.type_name,
            auto: !self.no_auto,
            source_roots: self.source_roots,
            encoding: self.encoding,
            git_binary_dirs: self.git_binary_dirs,
            start_dir: self.repository,
            skip: self.skip,
        }
    }
}
