use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::core::runner::ProcessRunner;
use crate::models::operation::{OperationMode, OperationOptions, OperationOutcome};

/// Launcher and script implementing the scan/backup command-line contract.
pub const TOOL_PROGRAM: &str = "py";
pub const TOOL_SCRIPT: &str = "backup_saves.py";

/// Translates the two domain operations into tool invocations. All save
/// detection and copying lives in the external tool; outcomes pass through
/// verbatim. Concurrent calls each spawn their own child, callers serialize
/// if they want to.
pub struct OperationGateway {
    program: String,
    script: String,
    root: Utf8PathBuf,
}

impl OperationGateway {
    pub fn new(root: &Utf8Path) -> Self {
        Self::with_tool(TOOL_PROGRAM, TOOL_SCRIPT, root)
    }

    /// Overridable tool location, used by tests to substitute a scripted
    /// stand-in for the real tool.
    pub fn with_tool(program: &str, script: &str, root: &Utf8Path) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
            root: root.to_owned(),
        }
    }

    /// `<script> [--scan-only] --verbose [--game <name>]`. The filter flag is
    /// emitted only for a non-empty filter, as a discrete argument pair.
    pub fn build_args(&self, mode: OperationMode, options: &OperationOptions) -> Vec<String> {
        let mut args = vec![self.script.clone()];
        if mode == OperationMode::Scan {
            args.push("--scan-only".into());
        }
        args.push("--verbose".into());
        if let Some(game) = options.game.as_deref().filter(|g| !g.is_empty()) {
            args.push("--game".into());
            args.push(game.into());
        }
        args
    }

    pub async fn run(&self, mode: OperationMode, options: &OperationOptions) -> OperationOutcome {
        let args = self.build_args(mode, options);
        info!("running {:?} operation in {}", mode, self.root);
        ProcessRunner::run(&self.program, &args, &self.root).await
    }

    pub async fn scan(&self, options: &OperationOptions) -> OperationOutcome {
        self.run(OperationMode::Scan, options).await
    }

    pub async fn backup(&self, options: &OperationOptions) -> OperationOutcome {
        self.run(OperationMode::Backup, options).await
    }
}
