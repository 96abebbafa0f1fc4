use tauri::State;
use tracing::instrument;

use crate::core::registry::AppRegistry;
use crate::models::error::SkError;
use crate::models::operation::{OperationOptions, OperationOutcome};

// Both commands hand the outcome back as a value: a tool failure is a typed
// result the frontend renders, not an IPC error.

#[tauri::command]
#[specta::specta]
#[instrument(skip(state))]
pub async fn scan_saves(
    state: State<'_, AppRegistry>,
    options: OperationOptions,
) -> Result<OperationOutcome, SkError> {
    Ok(state.gateway.scan(&options).await)
}

#[tauri::command]
#[specta::specta]
#[instrument(skip(state))]
pub async fn backup_saves(
    state: State<'_, AppRegistry>,
    options: OperationOptions,
) -> Result<OperationOutcome, SkError> {
    Ok(state.gateway.backup(&options).await)
}
