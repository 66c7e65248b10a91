mod config;
mod repos;
pub mod seed;
mod services;
mod snapshot;
mod system;

pub use config::{Config, TelegramConfig};
pub use repos::Repos;
pub use services::{IMessenger, TelegramMessenger};
pub use snapshot::{RenewalSnapshot, SnapshotLoader};
use std::sync::Arc;
use std::time::Duration;
pub use system::{FixedSys, ISys, RealSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    /// Outbound transport for reminder dispatches. `None` means dispatches
    /// are recorded as `queued` instead of being delivered.
    pub messenger: Option<Arc<dyn IMessenger>>,
    pub snapshots: Arc<SnapshotLoader>,
}

/// Sets up the infrastructure context given the environment. The storage
/// variant is selected exactly once here and never switched at runtime:
/// `DATABASE_URL` selects postgres, otherwise `STATE_FILE` selects the
/// file-backed store, otherwise everything lives in memory.
pub async fn setup_context() -> Context {
    let config = Config::new();
    let sys: Arc<dyn ISys> = Arc::new(RealSys {});
    let now_ms = sys.get_timestamp_millis();

    let seed = match &config.seed_data_path {
        Some(path) => match seed::load_state(path, now_ms) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Could not load seed data: {:?}", e);
                None
            }
        },
        None => None,
    };

    let repos = if let Some(database_url) = &config.database_url {
        info!("Using postgres backed repositories");
        Repos::create_postgres(database_url, seed.clone())
            .await
            .expect("Postgres credentials must be set and valid")
    } else if let Some(state_file) = &config.state_file {
        info!("Using file backed repositories at {}", state_file.display());
        Repos::create_file(state_file, config.seed_data_path.as_deref(), now_ms)
            .expect("State file must be readable and writable")
    } else {
        info!("No DATABASE_URL or STATE_FILE set. Using in-memory repositories.");
        Repos::create_inmemory(seed.clone())
    };

    let messenger: Option<Arc<dyn IMessenger>> = match &config.telegram {
        Some(telegram) => Some(Arc::new(
            TelegramMessenger::new(
                telegram,
                Duration::from_millis(config.dispatch_timeout_millis),
            )
            .expect("To build the Telegram client"),
        )),
        None => None,
    };

    let fallback = seed.map(|state| RenewalSnapshot {
        resources: state.resources,
        reminders: state.reminders,
    });
    let snapshots = Arc::new(SnapshotLoader::new(
        Duration::from_millis(config.snapshot_timeout_millis),
        fallback,
    ));

    Context {
        repos,
        config,
        sys,
        messenger,
        snapshots,
    }
}
