use std::sync::Arc;

use plaza_storage::ObjectStorage;

use crate::config::ServerConfig;
use crate::mailer::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: plaza_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Object storage for uploaded files (flyers, resource files).
    pub storage: Arc<dyn ObjectStorage>,
    /// SMTP mailer for feedback responses; `None` when unconfigured.
    pub mailer: Option<Arc<Mailer>>,
}
