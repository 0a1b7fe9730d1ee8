use std::sync::Arc;

use pawsona_db::store::{JobStore, RedemptionStore};
use pawsona_provider::ImageProvider;
use pawsona_worker::WorkerConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Everything is behind `Arc`, so cloning is cheap. Handlers reach
/// storage and the provider only through trait objects; which adapters
/// sit behind them is decided once, at startup.
#[derive(Clone)]
pub struct AppState {
    /// Generation job storage.
    pub jobs: Arc<dyn JobStore>,
    /// Redemption code storage (adapter chosen by the startup schema
    /// probe).
    pub codes: Arc<dyn RedemptionStore>,
    /// Image generation provider client.
    pub provider: Arc<dyn ImageProvider>,
    /// Worker polling cadence.
    pub worker: WorkerConfig,
    /// Database pool, when running against Postgres. `None` in
    /// memory-backed setups; the health check then skips the DB probe.
    pub pool: Option<pawsona_db::DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
