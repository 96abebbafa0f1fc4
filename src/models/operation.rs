use serde::{Deserialize, Serialize};
use specta::Type;

/// How the external tool is invoked: report findings only, or copy saves.
#[derive(Type, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMode {
    Scan,
    Backup,
}

/// Caller-supplied options for one operation. No defaults beyond "no filter".
#[derive(Type, Serialize, Deserialize, Clone, Debug, Default)]
pub struct OperationOptions {
    pub game: Option<String>,
}

/// Terminal result of one tool invocation. `output` collects everything the
/// tool wrote to stdout in arrival order; `error` carries stderr, or a
/// synthetic message when the process never started.
#[derive(Type, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum OperationOutcome {
    Success { output: String },
    Failure { output: String, error: String },
}
