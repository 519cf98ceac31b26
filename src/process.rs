// file: src/process.rs
// version: 1.0.0
// guid: a8af1e9a-2acd-456a-9d4e-bbde3cc0717f

//! Process invocation builder
//!
//! A not-yet-executed command line: a fixed executable prefix plus whatever
//! arguments, environment entries and working directory the caller appends.
//! Converting into a [`std::process::Command`] is pure construction; spawning
//! and output handling stay with the caller.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Builder for a single external command invocation
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    prefix: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a builder for the given executable prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
        }
    }

    /// The executable this builder will invoke
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add an environment entry for the child process
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Set the working directory for the child process
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Arguments appended so far, in order
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Environment entries appended so far
    pub fn get_envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// Working directory, if one was set
    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Render the prefix and arguments as a single display line
    pub fn command_line(&self) -> String {
        let mut line = self.prefix.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Convert into a ready-to-spawn [`Command`]
    pub fn into_command(self) -> Command {
        let mut command = Command::new(&self.prefix);
        command.args(&self.args);
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_new_builder_has_only_prefix() {
        let process = ProcessBuilder::new("ansible-playbook");
        assert_eq!(process.prefix(), "ansible-playbook");
        assert!(process.get_args().is_empty());
        assert!(process.get_envs().is_empty());
        assert!(process.get_current_dir().is_none());
    }

    #[test]
    fn test_arguments_accumulate_in_order() {
        let process = ProcessBuilder::new("ansible-playbook")
            .arg("site.yml")
            .args(["--check", "--diff"])
            .arg("-vvv");
        assert_eq!(
            process.get_args(),
            &["site.yml", "--check", "--diff", "-vvv"]
        );
    }

    #[test]
    fn test_command_line_rendering() {
        let process = ProcessBuilder::new("ansible-galaxy")
            .arg("install")
            .arg("-r")
            .arg("requirements.yml");
        assert_eq!(
            process.command_line(),
            "ansible-galaxy install -r requirements.yml"
        );
    }

    #[test]
    fn test_into_command_carries_configuration() {
        let command = ProcessBuilder::new("ansible-playbook")
            .arg("site.yml")
            .env("ANSIBLE_FORCE_COLOR", "1")
            .current_dir("/tmp")
            .into_command();

        assert_eq!(command.get_program(), OsStr::new("ansible-playbook"));
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("site.yml")]);
        assert_eq!(command.get_current_dir(), Some(Path::new("/tmp")));
        let envs: Vec<_> = command.get_envs().collect();
        assert!(envs.contains(&(OsStr::new("ANSIBLE_FORCE_COLOR"), Some(OsStr::new("1")))));
    }

    #[test]
    fn test_clone_is_independent() {
        let base = ProcessBuilder::new("ansible-playbook");
        let extended = base.clone().arg("site.yml");
        assert!(base.get_args().is_empty());
        assert_eq!(extended.get_args(), &["site.yml"]);
    }
}
