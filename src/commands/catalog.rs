use tauri::State;
use tracing::instrument;

use crate::core::diagnostics::LogSink;
use crate::core::registry::AppRegistry;
use crate::core::{catalog, run_log};
use crate::models::catalog::Catalog;
use crate::models::error::SkError;
use crate::models::run_log::RunLog;

// Filesystem walks run on a blocking thread so they never park the async
// runtime.

#[tauri::command]
#[specta::specta]
#[instrument(skip(state))]
pub async fn list_backups(state: State<'_, AppRegistry>) -> Result<Catalog, SkError> {
    let backups_dir = state.paths.backups.clone();

    tauri::async_runtime::spawn_blocking(move || catalog::list_backups(&backups_dir, &mut LogSink))
        .await
        .map_err(|e| SkError::AsyncRuntimeError(e.to_string()))?
}

#[tauri::command]
#[specta::specta]
#[instrument(skip(state))]
pub async fn get_logs(state: State<'_, AppRegistry>) -> Result<Vec<RunLog>, SkError> {
    let logs_dir = state.paths.logs.clone();

    tauri::async_runtime::spawn_blocking(move || run_log::list_logs(&logs_dir, &mut LogSink))
        .await
        .map_err(|e| SkError::AsyncRuntimeError(e.to_string()))?
}
