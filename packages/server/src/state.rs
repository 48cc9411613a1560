use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Shared per-process state. Cloned into every request; `db` is the pooled
/// persistence handle that handlers pass explicitly into the query layer.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}
