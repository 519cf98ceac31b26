// file: src/commands/galaxy.rs
// version: 1.0.0
// guid: d3a8c06f-bd81-4ab6-9a65-93edd8c62689

use crate::commands::AnsibleCommand;
use crate::process::ProcessBuilder;

/// Wrapper around a pre-configured `ansible-galaxy` invocation
#[derive(Debug, Clone)]
pub struct AnsibleGalaxy {
    process: ProcessBuilder,
}

impl AnsibleGalaxy {
    pub(crate) fn new(process: ProcessBuilder) -> Self {
        Self { process }
    }
}

impl AnsibleCommand for AnsibleGalaxy {
    fn process(&self) -> &ProcessBuilder {
        &self.process
    }

    fn into_process(self) -> ProcessBuilder {
        self.process
    }
}
