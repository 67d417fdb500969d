use crate::core::services::IdStrategy;
use dotenv::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub id_strategy: IdStrategy,
    pub seed_demo_users: bool,
    /// Raw route parameter naming the user the edit screen opens on.
    pub edit_user_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            id_strategy: env::var("ID_STRATEGY")
                .ok()
                .and_then(|v| {
                    v.parse::<IdStrategy>()
                        .map_err(|e| warn!("{}, falling back to monotonic ids", e))
                        .ok()
                })
                .unwrap_or_default(),
            seed_demo_users: env::var("SEED_DEMO_USERS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            edit_user_id: env::var("EDIT_USER_ID").ok().filter(|v| !v.trim().is_empty()),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
