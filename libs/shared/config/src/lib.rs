use std::env;
use chrono::NaiveDateTime;
use tracing::warn;

const FIXED_NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Pins the service clock to one instant (QA, demos). `None` uses the
    /// device's local wall clock.
    pub fixed_now: Option<NaiveDateTime>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            fixed_now: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using {}", defaults.server_host);
                    defaults.server_host.clone()
                }),
            server_port: match env::var("SERVER_PORT") {
                Ok(value) => value.parse().unwrap_or_else(|_| {
                    warn!("SERVER_PORT '{}' is not a valid port, using {}", value, defaults.server_port);
                    defaults.server_port
                }),
                Err(_) => defaults.server_port,
            },
            fixed_now: env::var("SCHEDULE_STATUS_FIXED_NOW")
                .ok()
                .and_then(|value| Self::parse_fixed_now(&value)),
        };

        if config.is_clock_pinned() {
            warn!("Schedule status clock pinned to {:?}", config.fixed_now);
        }

        config
    }

    pub fn parse_fixed_now(value: &str) -> Option<NaiveDateTime> {
        match NaiveDateTime::parse_from_str(value.trim(), FIXED_NOW_FORMAT) {
            Ok(instant) => Some(instant),
            Err(_) => {
                warn!("SCHEDULE_STATUS_FIXED_NOW '{}' is not YYYY-MM-DDTHH:MM:SS, ignoring", value);
                None
            }
        }
    }

    pub fn is_clock_pinned(&self) -> bool {
        self.fixed_now.is_some()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
