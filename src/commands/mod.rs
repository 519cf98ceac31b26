// file: src/commands/mod.rs
// version: 1.0.0
// guid: ad322bba-1e30-49af-8476-6a53994a366f

//! Command wrappers produced by the factory
//!
//! One thin wrapper type per ansible tool, plus the trait they share. The
//! wrappers carry a pre-configured process builder; composing tool arguments
//! and spawning are left to the caller.

pub mod galaxy;
pub mod playbook;

pub use galaxy::AnsibleGalaxy;
pub use playbook::AnsiblePlaybook;

use crate::process::ProcessBuilder;

/// Common surface of the command wrappers
pub trait AnsibleCommand {
    /// Borrow the underlying process builder
    fn process(&self) -> &ProcessBuilder;

    /// Consume the wrapper and take the process builder
    fn into_process(self) -> ProcessBuilder
    where
        Self: Sized;
}
