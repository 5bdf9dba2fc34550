use std::time::Duration;

use clap::Parser;
use explorer_engine::ChatSettings;
use log::LevelFilter;

use super::logging::LogDestination;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Ask an agent network a question through the explorer chat backend.
#[derive(Parser, Debug, Clone)]
#[command(name = "explorer_app", version)]
pub struct Args {
    /// Origin and base path the backend API is mounted under.
    #[arg(long, env = "EXPLORER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Give up on the backend after this many seconds. Waits forever when unset.
    #[arg(long, env = "EXPLORER_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, value_enum, env = "EXPLORER_LOG", default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(long, env = "EXPLORER_LOG_LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Ask this question once and exit instead of prompting.
    #[arg(long)]
    pub question: Option<String>,

    /// Agent description URL; the default agent is used when empty.
    #[arg(long, default_value = "")]
    pub agent_url: String,
}

impl Args {
    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ChatSettings::new(self.base_url.clone())
        }
    }
}
