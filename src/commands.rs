pub mod catalog;
pub mod operation;

use crate::config::AppSettings;
use tracing::error;

#[tauri::command]
#[specta::specta]
pub fn get_app_settings() -> Option<AppSettings> {
    match AppSettings::load() {
        Ok(settings) => Some(settings),
        Err(err) => {
            error!("Error while sending app settings to frontend: {:?}", err);
            None
        }
    }
}
