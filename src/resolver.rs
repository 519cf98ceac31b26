// file: src/resolver.rs
// version: 1.0.0
// guid: bb5aefa6-b70e-43a7-bc8c-aee39c05d149

//! Executable lookup capability
//!
//! The factory only consults the resolver when a command slot is left empty;
//! explicit paths are validated against the filesystem directly. The trait
//! exists so tests can substitute a fake instead of depending on host PATH
//! contents.

use std::path::PathBuf;
use tracing::debug;

/// PATH-style lookup for a named executable
pub trait ExecutableResolver {
    /// Locate `name`, returning its full path if it is available
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Default resolver backed by the ambient PATH
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl ExecutableResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => Some(path),
            Err(err) => {
                debug!("lookup for {} failed: {}", name, err);
                None
            }
        }
    }
}
