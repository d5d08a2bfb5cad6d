mod commands;
mod gateway;
mod i18n;
mod keyboards;

use clap::{Parser, Subcommand};
use slang_channels::telegram::TelegramChannel;
use slang_core::{config, shellexpand, traits::Channel};
use slang_dictionary::Dictionary;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "slangbot",
    version,
    about = "Slang ↔ plain language translator bot for Telegram"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Telegram bot.
    Start,
    /// Show configuration, dictionary stats and channel readiness.
    Status,
    /// Translate text once and print the result.
    Translate {
        /// Translate plain language into slang instead.
        #[arg(short, long)]
        reverse: bool,
        /// The text to translate.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Search the dictionary.
    Search {
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Add or replace a dictionary word.
    Add {
        slang: String,
        normal: String,
        explanation: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_notice = missing_config_notice(&cli.config);
    let cfg = config::load(&cli.config)?;

    // The filter falls back to `bot.log_level`, so logging starts after the config loads.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.bot.log_level)),
        )
        .init();

    if let Some(notice) = config_notice {
        info!("{notice}");
    }

    let dictionary = Dictionary::load(shellexpand(&cfg.dictionary.path));

    match cli.command {
        Commands::Start => {
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();

            if let Some(ref tg) = cfg.channel.telegram {
                if tg.enabled {
                    if tg.bot_token.is_empty() {
                        anyhow::bail!(
                            "Telegram is enabled but bot_token is empty. \
                             Set it in config.toml or TELEGRAM_BOT_TOKEN env var."
                        );
                    }
                    let channel = TelegramChannel::new(tg.clone(), cfg.limits.max_message_length);
                    channels.insert("telegram".to_string(), Arc::new(channel));
                }
            }

            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Enable at least one channel in config.toml.");
            }

            println!("{} — starting bot...", cfg.bot.name);
            let mut gw = gateway::Gateway::new(dictionary, channels, &cfg);
            gw.run().await?;
        }
        Commands::Status => {
            println!("{} — Status Check\n", cfg.bot.name);
            println!("Config: {}", cli.config);
            println!("Language: {}", cfg.bot.language);
            println!();

            let stats = dictionary.stats();
            println!("  dictionary: {}", dictionary.path().display());
            println!("  words: {}", stats.total_words);
            println!("  file size: {}", i18n::format_bytes(stats.file_size_bytes));
            println!("  admins: {}", cfg.admin.user_ids.len());
            println!();

            if let Some(ref tg) = cfg.channel.telegram {
                println!(
                    "  telegram: {}",
                    if tg.enabled && !tg.bot_token.is_empty() {
                        "configured"
                    } else if tg.enabled {
                        "enabled but missing bot_token"
                    } else {
                        "disabled"
                    }
                );
            } else {
                println!("  telegram: not configured");
            }
        }
        Commands::Translate { reverse, text } => {
            if text.is_empty() {
                anyhow::bail!("no text provided. Usage: slangbot translate [--reverse] <text>");
            }
            let text = text.join(" ");
            let (translation, explanation) = if reverse {
                dictionary.translate_normal_to_slang(&text)
            } else {
                dictionary.translate_slang_to_normal(&text)
            };
            println!("{translation}\n\n{explanation}");
        }
        Commands::Search { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                anyhow::bail!("no query provided. Usage: slangbot search <query>");
            }
            let words = dictionary.search(&query);
            if words.is_empty() {
                println!("{}", i18n::t("no_results", &cfg.bot.language));
            } else {
                println!("{}", i18n::search_results(&cfg.bot.language, query.trim(), &words));
            }
        }
        Commands::Add {
            slang,
            normal,
            explanation,
        } => {
            if !dictionary.add_word(&slang, &normal, &explanation) {
                anyhow::bail!(
                    "failed to add '{slang}' to {}",
                    dictionary.path().display()
                );
            }
            println!("{}", i18n::word_added(&cfg.bot.language, &slang.trim().to_lowercase()));
        }
    }

    Ok(())
}

/// Notice for a config path that does not exist; logged once tracing is up.
fn missing_config_notice(path: &str) -> Option<String> {
    (!Path::new(path).exists()).then(|| format!("Config file not found at {path}, using defaults"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_notice() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("config.toml");
        let absent = absent.to_str().unwrap();
        assert_eq!(
            missing_config_notice(absent),
            Some(format!("Config file not found at {absent}, using defaults"))
        );

        std::fs::write(absent, "[bot]\n").unwrap();
        assert_eq!(missing_config_notice(absent), None);
    }
}
