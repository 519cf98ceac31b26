// file: src/commands/playbook.rs
// version: 1.0.0
// guid: 1bba7a87-89d6-4343-a442-97f4f2bfae86

use crate::commands::AnsibleCommand;
use crate::process::ProcessBuilder;

/// Wrapper around a pre-configured `ansible-playbook` invocation
#[derive(Debug, Clone)]
pub struct AnsiblePlaybook {
    process: ProcessBuilder,
}

impl AnsiblePlaybook {
    pub(crate) fn new(process: ProcessBuilder) -> Self {
        Self { process }
    }
}

impl AnsibleCommand for AnsiblePlaybook {
    fn process(&self) -> &ProcessBuilder {
        &self.process
    }

    fn into_process(self) -> ProcessBuilder {
        self.process
    }
}
