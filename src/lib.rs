// file: src/lib.rs
// version: 1.0.0
// guid: 2c42eb2e-ce61-41f6-a2cc-8193f3dd8d43

//! # ansible-wrapper
//!
//! Validated process-builder factory for the `ansible-playbook` and
//! `ansible-galaxy` executables.
//!
//! The [`Ansible`] factory checks its inputs once, at construction time: the
//! project base directory must exist, and each tool is either an explicit
//! existing-and-executable file path or the bare default name confirmed
//! resolvable in PATH. Afterwards the creator operations hand out fresh
//! [`ProcessBuilder`] values, pre-configured with the tool as the invocation
//! prefix, for the caller to extend and spawn.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ansible_wrapper::{Ansible, AnsibleCommand};
//!
//! let ansible = Ansible::new("/srv/ansible")?;
//! let status = ansible
//!     .playbook()
//!     .into_process()
//!     .arg("site.yml")
//!     .into_command()
//!     .status()?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod factory;
pub mod process;
pub mod resolver;

pub use commands::{AnsibleCommand, AnsibleGalaxy, AnsiblePlaybook};
pub use error::{ConfigurationError, Result};
pub use factory::{Ansible, DEFAULT_GALAXY_COMMAND, DEFAULT_PLAYBOOK_COMMAND};
pub use process::ProcessBuilder;
pub use resolver::{ExecutableResolver, PathResolver};

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
