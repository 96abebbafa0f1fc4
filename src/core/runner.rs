use std::process::Stdio;
use std::time::Duration;

use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

use crate::models::operation::OperationOutcome;

/// Reported when the tool exits nonzero without writing anything to stderr.
pub const FAILURE_FALLBACK: &str = "Process failed";

/// Generic subprocess execution. Spawns exactly one child per call with a
/// discrete argument list (no shell interpolation), buffers both output
/// streams, and resolves a single terminal `OperationOutcome` once the
/// process exits. A process that cannot be started at all is a distinct
/// failure path from a nonzero exit: it carries no output and a platform
/// message instead of captured stderr.
pub struct ProcessRunner;

impl ProcessRunner {
    pub async fn run(program: &str, args: &[String], cwd: &Utf8Path) -> OperationOutcome {
        Self::run_with_timeout(program, args, cwd, None).await
    }

    /// Like `run`, but kills the child and reports a failure if it has not
    /// exited within `limit`.
    pub async fn run_with_timeout(
        program: &str,
        args: &[String],
        cwd: &Utf8Path,
        limit: Option<Duration>,
    ) -> OperationOutcome {
        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("spawning {} {:?} in {}", program, args, cwd);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                return OperationOutcome::Failure {
                    output: String::new(),
                    error: e.to_string(),
                }
            }
        };

        let collected = match limit {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(done) => done,
                // Dropping the wait future kills the child via kill_on_drop.
                Err(_) => {
                    return OperationOutcome::Failure {
                        output: String::new(),
                        error: format!("{} timed out after {}s", program, limit.as_secs()),
                    }
                }
            },
            None => child.wait_with_output().await,
        };

        let output = match collected {
            Ok(output) => output,
            Err(e) => {
                return OperationOutcome::Failure {
                    output: String::new(),
                    error: e.to_string(),
                }
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if output.status.success() {
            debug!("{} exited cleanly", program);
            return OperationOutcome::Success { output: stdout };
        }

        debug!("{} exited with {:?}", program, output.status.code());
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        OperationOutcome::Failure {
            output: stdout,
            error: if stderr.is_empty() {
                FAILURE_FALLBACK.to_string()
            } else {
                stderr
            },
        }
    }
}
