use camino::{Utf8Path, Utf8PathBuf};
use tracing::warn;

use crate::config::AppSettings;
use crate::core::operation::OperationGateway;
use crate::models::paths::AppPathRules;

/// App state built once at startup and managed by the shell: the resolved
/// application root, the on-disk layout underneath it, and the gateway to
/// the external tool. Reads recompute from disk every time, so nothing in
/// here mutates after construction.
pub struct AppRegistry {
    pub root: Utf8PathBuf,
    pub paths: AppPathRules,
    pub gateway: OperationGateway,
}

impl AppRegistry {
    pub fn new() -> Self {
        let settings = AppSettings::load().unwrap_or_else(|e| {
            warn!("falling back to default settings: {:?}", e);
            AppSettings::default()
        });
        Self::with_root(&resolve_root(settings))
    }

    pub fn with_root(root: &Utf8Path) -> Self {
        Self {
            root: root.to_owned(),
            paths: AppPathRules::new(root),
            gateway: OperationGateway::new(root),
        }
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_root(settings: AppSettings) -> Utf8PathBuf {
    let canonical = dunce::canonicalize(&settings.root).unwrap_or(settings.root);
    Utf8PathBuf::from_path_buf(canonical).unwrap_or_else(|p| {
        warn!("non-UTF-8 root {:?}, using the current directory", p);
        Utf8PathBuf::from(".")
    })
}
