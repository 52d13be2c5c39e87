use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/nbbang.toml";
const MAX_PARTICIPANTS: usize = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Participants on the roster at startup.
    pub participants: usize,
    pub name_prefix: String,
    pub currency_suffix: String,
    /// Log file path. Logging is off when unset.
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            participants: engine::DEFAULT_PARTICIPANTS,
            name_prefix: engine::DEFAULT_NAME_PREFIX.to_string(),
            currency_suffix: engine::money::DEFAULT_SUFFIX.to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "nbbang", about = "Split shared expenses in the terminal")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the number of participants at startup (2 to 100).
    #[arg(long)]
    participants: Option<usize>,
    /// Override the prefix of generated participant names.
    #[arg(long)]
    name_prefix: Option<String>,
    /// Override the suffix printed after amounts.
    #[arg(long)]
    currency_suffix: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("NBBANG"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(participants) = args.participants {
        settings.participants = participants;
    }
    if let Some(name_prefix) = args.name_prefix {
        settings.name_prefix = name_prefix;
    }
    if let Some(currency_suffix) = args.currency_suffix {
        settings.currency_suffix = currency_suffix;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &AppConfig) -> Result<()> {
    if settings.participants < engine::PROTECTED_POSITIONS {
        return Err(config::ConfigError::Message(format!(
            "participants must be at least {}, got {}",
            engine::PROTECTED_POSITIONS,
            settings.participants
        ))
        .into());
    }
    if settings.participants > MAX_PARTICIPANTS {
        return Err(config::ConfigError::Message(format!(
            "participants must be at most {MAX_PARTICIPANTS}, got {}",
            settings.participants
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["nbbang", "--config", "does/not/exist.toml"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_apply_without_file() {
        let settings = resolve(args(&[])).unwrap();
        assert_eq!(settings.participants, 2);
        assert_eq!(settings.name_prefix, "사용자");
        assert_eq!(settings.currency_suffix, "원");
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn cli_overrides_win() {
        let settings = resolve(args(&[
            "--participants",
            "4",
            "--name-prefix",
            "Guest",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(settings.participants, 4);
        assert_eq!(settings.name_prefix, "Guest");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn fewer_than_two_participants_is_rejected() {
        let err = resolve(args(&["--participants", "1"])).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn oversized_roster_is_rejected() {
        let err = resolve(args(&["--participants", "4000000000"])).unwrap_err();
        assert!(err.to_string().contains("at most 100"));
        assert!(resolve(args(&["--participants", "100"])).is_ok());
    }
}
