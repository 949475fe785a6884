use std::path::PathBuf;
use std::str::FromStr;

use crate::models::ChartOptions;
use crate::services::bar_service::{DEFAULT_GLYPH, MAX_BAR_WIDTH};
use crate::services::chart_service::parse_colors;
use crate::utils::errors::ConfigError;

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Simple,
    Full,
    Image,
    All,
}

impl FromStr for Command {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Command::Simple),
            "full" | "report" => Ok(Command::Full),
            "image" | "chart" => Ok(Command::Image),
            "all" => Ok(Command::All),
            other => Err(ConfigError::UnknownCommand(other.to_string())),
        }
    }
}

/// Runtime configuration, read from `PAGESTATS_*` environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub dataset_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub glyph: String,
    pub faults_width: usize,
    pub simple_width: usize,
    pub rates_width: usize,
    pub chart: ChartOptions,
}

impl Config {
    /// Build from the process environment (after `.env` has been loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let command = match get("PAGESTATS_REPORT") {
            Some(v) => v.parse()?,
            None => Command::Full,
        };

        let (width, height) = match get("PAGESTATS_CHART_SIZE") {
            Some(v) => parse_size("PAGESTATS_CHART_SIZE", &v)?,
            None => (1200, 600),
        };

        let colors_raw = get("PAGESTATS_COLORS").unwrap_or_else(|| "green,orange,blue,red".to_string());
        let colors = parse_colors(&colors_raw).map_err(|reason| ConfigError::InvalidValue {
            key: "PAGESTATS_COLORS".to_string(),
            value: colors_raw.clone(),
            reason,
        })?;

        Ok(Config {
            command,
            dataset_path: get("PAGESTATS_DATASET").map(PathBuf::from),
            output_path: get("PAGESTATS_OUTPUT").map(PathBuf::from),
            glyph: get("PAGESTATS_GLYPH").unwrap_or_else(|| DEFAULT_GLYPH.to_string()),
            faults_width: parse_width("PAGESTATS_FAULTS_WIDTH", get("PAGESTATS_FAULTS_WIDTH"), 40)?,
            simple_width: parse_width("PAGESTATS_SIMPLE_WIDTH", get("PAGESTATS_SIMPLE_WIDTH"), 20)?,
            rates_width: parse_width("PAGESTATS_RATES_WIDTH", get("PAGESTATS_RATES_WIDTH"), 30)?,
            chart: ChartOptions {
                output_dir: PathBuf::from(
                    get("PAGESTATS_CHART_DIR").unwrap_or_else(|| "charts".to_string()),
                ),
                width,
                height,
                colors,
            },
        })
    }

    /// Override the command with the first positional argument, if any
    pub fn with_command_arg(mut self, arg: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(arg) = arg {
            self.command = arg.parse()?;
        }
        Ok(self)
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_width(key: &str, raw: Option<String>, default: usize) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid(key, &raw, "width must be at least 1")),
        Ok(width) if width > MAX_BAR_WIDTH => Err(invalid(
            key,
            &raw,
            &format!("width must be at most {}", MAX_BAR_WIDTH),
        )),
        Ok(width) => Ok(width),
        Err(_) => Err(invalid(key, &raw, "expected a positive integer")),
    }
}

/// Parse `WxH`, e.g. `1200x600`
fn parse_size(key: &str, raw: &str) -> Result<(u32, u32), ConfigError> {
    let (w, h) = raw
        .trim()
        .to_lowercase()
        .split_once('x')
        .map(|(w, h)| (w.trim().parse::<u32>(), h.trim().parse::<u32>()))
        .ok_or_else(|| invalid(key, raw, "expected WIDTHxHEIGHT"))?;

    match (w, h) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(invalid(key, raw, "expected two positive integers")),
    }
}
