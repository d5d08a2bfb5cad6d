use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SlangError;

/// Environment variable that supplies the Telegram token when the config leaves it empty.
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Top-level slangbot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Language for bot replies ("English" or "Russian").
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            language: default_language(),
            log_level: default_log_level(),
        }
    }
}

/// Where the slang dictionary lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_dictionary_path")]
    pub path: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
        }
    }
}

/// Users allowed to mutate the dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub user_ids: Vec<i64>,
}

impl AdminConfig {
    /// Whether `sender_id` (platform string form) belongs to an admin.
    pub fn is_admin(&self, sender_id: &str) -> bool {
        sender_id
            .parse::<i64>()
            .map(|id| self.user_ids.contains(&id))
            .unwrap_or(false)
    }
}

/// Size limits for outgoing text and per-chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
            history_limit: default_history_limit(),
        }
    }
}

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    pub telegram: Option<TelegramConfig>,
}

/// Telegram bot config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: String,
    /// Empty = allow all.
    #[serde(default)]
    pub allowed_users: Vec<i64>,
}

// --- Default value functions ---

fn default_name() -> String {
    "SlangTranslater".to_string()
}
fn default_language() -> String {
    "English".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_dictionary_path() -> String {
    "slang_dict.json".to_string()
}
fn default_max_message_length() -> usize {
    4096
}
fn default_history_limit() -> usize {
    50
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Pick the Telegram token: the configured one wins, the environment fills a blank.
fn resolve_bot_token(configured: &str, from_env: Option<String>) -> String {
    if !configured.trim().is_empty() {
        return configured.to_string();
    }
    from_env.unwrap_or_default()
}

impl Config {
    /// Fill values that may come from the environment.
    fn apply_env(&mut self) {
        if let Some(ref mut tg) = self.channel.telegram {
            tg.bot_token = resolve_bot_token(&tg.bot_token, std::env::var(TELEGRAM_TOKEN_ENV).ok());
        }
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist; callers report that
/// once logging is up.
pub fn load(path: &str) -> Result<Config, SlangError> {
    let path = Path::new(path);
    let mut config = if !path.exists() {
        Config::default()
    } else {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SlangError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        parse(&content)?
    };

    config.apply_env();
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, SlangError> {
    toml::from_str(content).map_err(|e| SlangError::Config(format!("failed to parse config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.bot.name, "SlangTranslater");
        assert_eq!(cfg.bot.language, "English");
        assert_eq!(cfg.dictionary.path, "slang_dict.json");
        assert_eq!(cfg.limits.max_message_length, 4096);
        assert_eq!(cfg.limits.history_limit, 50);
        assert!(cfg.admin.user_ids.is_empty());
        assert!(cfg.channel.telegram.is_none());
    }

    #[test]
    fn test_full_config_from_toml() {
        let toml_str = r#"
            [bot]
            language = "Russian"

            [dictionary]
            path = "~/slang/dict.json"

            [admin]
            user_ids = [1447955117]

            [limits]
            history_limit = 5

            [channel.telegram]
            enabled = true
            bot_token = "123:abc"
            allowed_users = [1, 2]
        "#;
        let cfg = parse(toml_str).unwrap();
        assert_eq!(cfg.bot.language, "Russian");
        assert_eq!(cfg.bot.log_level, "info");
        assert_eq!(cfg.dictionary.path, "~/slang/dict.json");
        assert_eq!(cfg.limits.history_limit, 5);
        assert_eq!(cfg.limits.max_message_length, 4096);
        let tg = cfg.channel.telegram.unwrap();
        assert!(tg.enabled);
        assert_eq!(tg.bot_token, "123:abc");
        assert_eq!(tg.allowed_users, vec![1, 2]);
        assert!(cfg.admin.is_admin("1447955117"));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = parse("[bot\nname = ").unwrap_err();
        assert!(matches!(err, SlangError::Config(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = load("/nonexistent/__slangbot_config__.toml").unwrap();
        assert_eq!(cfg.dictionary.path, "slang_dict.json");
    }

    #[test]
    fn test_is_admin_rejects_unknown_and_garbage() {
        let admin = AdminConfig {
            user_ids: vec![42],
        };
        assert!(admin.is_admin("42"));
        assert!(!admin.is_admin("43"));
        assert!(!admin.is_admin("not-a-number"));
        assert!(!AdminConfig::default().is_admin("42"));
    }

    #[test]
    fn test_resolve_bot_token() {
        assert_eq!(resolve_bot_token("cfg", Some("env".into())), "cfg");
        assert_eq!(resolve_bot_token("", Some("env".into())), "env");
        assert_eq!(resolve_bot_token("  ", None), "");
    }

    #[test]
    fn test_shellexpand_leaves_plain_paths() {
        assert_eq!(shellexpand("slang_dict.json"), "slang_dict.json");
        assert_eq!(shellexpand("/abs/path.json"), "/abs/path.json");
    }
}
