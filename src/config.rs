use std::env;
use std::path::PathBuf;

use chrono::FixedOffset;

use crate::error::AppError;
use crate::state::DEFAULT_UTC_OFFSET_MINUTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub event_buffer_size: usize,
    pub submit_delay_ms: u64,
    pub store_dir: Option<PathBuf>,
    pub strict_lookups: bool,
    pub seed_sample_spots: bool,
    pub utc_offset: FixedOffset,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: parse_log_format(env::var("LOG_FORMAT").ok().as_deref())?,
            event_buffer_size: parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            submit_delay_ms: parse_or_default("SUBMIT_DELAY_MS", 1500)?,
            store_dir: env::var("STORE_DIR")
                .ok()
                .filter(|raw| !raw.trim().is_empty())
                .map(PathBuf::from),
            strict_lookups: parse_or_default("STRICT_LOOKUPS", false)?,
            seed_sample_spots: parse_or_default("SEED_SAMPLE_SPOTS", true)?,
            utc_offset: utc_offset(parse_or_default(
                "UTC_OFFSET_MINUTES",
                DEFAULT_UTC_OFFSET_MINUTES,
            )?)?,
        })
    }
}

fn parse_log_format(raw: Option<&str>) -> Result<LogFormat, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("compact") => Ok(LogFormat::Compact),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(AppError::Internal(format!(
            "invalid LOG_FORMAT: {other}, expected compact or json"
        ))),
    }
}

fn utc_offset(minutes: i32) -> Result<FixedOffset, AppError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| AppError::Internal(format!("invalid UTC_OFFSET_MINUTES: {minutes}")))
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
