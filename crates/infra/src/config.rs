use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Postgres connection string. When set, the durable repositories are
    /// used; otherwise `state_file` or the in-memory variant.
    pub database_url: Option<String>,
    /// Path of the JSON file state for the file-backed repositories
    pub state_file: Option<PathBuf>,
    /// Optional seed data file used to populate an empty store
    pub seed_data_path: Option<PathBuf>,
    /// Telegram credentials. When absent, reminder dispatches are recorded
    /// as `queued` instead of being delivered.
    pub telegram: Option<TelegramConfig>,
    /// Upper bound in millis for one outbound Telegram delivery. Exceeding
    /// it counts as a delivery failure.
    pub dispatch_timeout_millis: u64,
    /// Upper bound in millis for loading the calendar snapshot from the
    /// repositories before falling back to the seed snapshot.
    pub snapshot_timeout_millis: u64,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "4000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let telegram = match (
            std::env::var("TELEGRAM_BOT_TOKEN"),
            std::env::var("TELEGRAM_CHAT_ID"),
        ) {
            (Ok(bot_token), Ok(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
            _ => {
                info!("TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set. Reminder dispatches will be recorded as queued.");
                None
            }
        };

        Self {
            port,
            database_url: std::env::var("DATABASE_URL").ok(),
            state_file: std::env::var("STATE_FILE").ok().map(PathBuf::from),
            seed_data_path: std::env::var("SEED_DATA_PATH").ok().map(PathBuf::from),
            telegram,
            dispatch_timeout_millis: 5_000,
            snapshot_timeout_millis: 3_000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
