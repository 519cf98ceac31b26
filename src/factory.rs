// file: src/factory.rs
// version: 1.0.0
// guid: 2ac6b649-cf18-4fa0-8030-ec8ce99e4d39

//! Ansible command factory
//!
//! Validates a project base directory and the two tool executables once, at
//! construction time. A factory that exists is a factory whose inputs were
//! valid; the creator operations never fail afterwards.

use crate::commands::{AnsibleGalaxy, AnsiblePlaybook};
use crate::error::{ConfigurationError, Result};
use crate::process::ProcessBuilder;
use crate::resolver::{ExecutableResolver, PathResolver};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default playbook executable name looked up in PATH
pub const DEFAULT_PLAYBOOK_COMMAND: &str = "ansible-playbook";

/// Default galaxy executable name looked up in PATH
pub const DEFAULT_GALAXY_COMMAND: &str = "ansible-galaxy";

/// Factory for pre-configured ansible process builders
///
/// Holds the validated base directory and the two validated command strings.
/// Immutable after construction; each creator call hands out a fresh,
/// independent builder.
#[derive(Debug, Clone)]
pub struct Ansible {
    base_dir: PathBuf,
    playbook_command: String,
    galaxy_command: String,
}

impl Ansible {
    /// Create a factory rooted at `base_dir` with both tools resolved from PATH
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_commands(base_dir, "", "")
    }

    /// Create a factory with explicit executable paths
    ///
    /// An empty command string selects the default tool name for that slot,
    /// resolved through PATH.
    pub fn with_commands(
        base_dir: impl AsRef<Path>,
        playbook_command: impl Into<String>,
        galaxy_command: impl Into<String>,
    ) -> Result<Self> {
        Self::with_resolver(base_dir, playbook_command, galaxy_command, &PathResolver)
    }

    /// Create a factory with an injected executable resolver
    ///
    /// The resolver is consulted only for empty command slots; explicit paths
    /// are validated against the filesystem.
    pub fn with_resolver(
        base_dir: impl AsRef<Path>,
        playbook_command: impl Into<String>,
        galaxy_command: impl Into<String>,
        resolver: &dyn ExecutableResolver,
    ) -> Result<Self> {
        // Directory check runs before any command validation.
        let base_dir = check_dir(base_dir.as_ref())?;
        let playbook_command =
            check_command(playbook_command.into(), DEFAULT_PLAYBOOK_COMMAND, resolver)?;
        let galaxy_command =
            check_command(galaxy_command.into(), DEFAULT_GALAXY_COMMAND, resolver)?;

        debug!(
            base_dir = %base_dir.display(),
            playbook = %playbook_command,
            galaxy = %galaxy_command,
            "ansible factory ready"
        );

        Ok(Self {
            base_dir,
            playbook_command,
            galaxy_command,
        })
    }

    /// AnsiblePlaybook instance creator
    pub fn playbook(&self) -> AnsiblePlaybook {
        AnsiblePlaybook::new(self.create_process(&self.playbook_command))
    }

    /// AnsibleGalaxy instance creator
    pub fn galaxy(&self) -> AnsibleGalaxy {
        AnsibleGalaxy::new(self.create_process(&self.galaxy_command))
    }

    /// Base directory of the ansible project structure
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Validated playbook command (explicit path or bare default name)
    pub fn playbook_command(&self) -> &str {
        &self.playbook_command
    }

    /// Validated galaxy command (explicit path or bare default name)
    pub fn galaxy_command(&self) -> &str {
        &self.galaxy_command
    }

    fn create_process(&self, prefix: &str) -> ProcessBuilder {
        ProcessBuilder::new(prefix)
    }
}

/// Check that the base directory exists as a directory
fn check_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(ConfigurationError::BaseDirNotFound(dir.to_path_buf()));
    }
    debug!("validated project root {}", dir.display());
    Ok(dir.to_path_buf())
}

/// Validate one command slot, falling back to the default tool name when empty
fn check_command(
    command: String,
    default: &str,
    resolver: &dyn ExecutableResolver,
) -> Result<String> {
    if command.is_empty() {
        // The resolved path is only probed for presence; the bare name is
        // what gets stored and ends up on the command line.
        return match resolver.resolve(default) {
            Some(path) => {
                debug!("resolved default {} at {}", default, path.display());
                Ok(default.to_string())
            }
            None => Err(ConfigurationError::ToolNotInPath(default.to_string())),
        };
    }

    let path = Path::new(&command);
    if !path.is_file() {
        return Err(ConfigurationError::CommandNotFound(command));
    }
    if !is_executable(path) {
        return Err(ConfigurationError::CommandNotExecutable(command));
    }
    debug!("validated command {}", command);
    Ok(command)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
