use crate::config::Config;
use crate::error::StatusError;
use crate::log_reader::{read_relevant_line, DDCLIENT_MARKER};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

pub const NO_STATUS: &str = "No status found";
pub const NO_TIMESTAMP: &str = "No timestamp found";
pub const NO_IP: &str = "No IP address found";

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static UPDATE_STATUS_RE: OnceLock<Regex> = OnceLock::new();
static UPDATE_TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();
static UPDATE_IP_RE: OnceLock<Regex> = OnceLock::new();
static HEALTHCHECK_STATUS_RE: OnceLock<Regex> = OnceLock::new();
static HEALTHCHECK_TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();
static LEGACY_HEALTHCHECK_RE: OnceLock<Regex> = OnceLock::new();

fn update_status_re() -> &'static Regex {
    UPDATE_STATUS_RE.get_or_init(|| {
        Regex::new(r"\[DDCLIENT\] \| \[\d{4}-\d{2}-\d{2}_\d{2}:\d{2}:\d{2}\]: (\w+):").unwrap()
    })
}

fn update_timestamp_re() -> &'static Regex {
    UPDATE_TIMESTAMP_RE.get_or_init(|| {
        Regex::new(r"\[DDCLIENT\] \| \[(\d{4}-\d{2}-\d{2}_\d{2}:\d{2}:\d{2})\]:").unwrap()
    })
}

// Octets are deliberately not range-checked: 999.999.999.999 matches.
fn update_ip_re() -> &'static Regex {
    UPDATE_IP_RE.get_or_init(|| {
        Regex::new(r"IP address set to (\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b)").unwrap()
    })
}

fn healthcheck_status_re() -> &'static Regex {
    HEALTHCHECK_STATUS_RE.get_or_init(|| {
        Regex::new(r"\[HEALTHCHECK\] \| \[\d{4}-\d{2}-\d{2}_\d{2}:\d{2}:\d{2}\]: (.+)").unwrap()
    })
}

fn healthcheck_timestamp_re() -> &'static Regex {
    HEALTHCHECK_TIMESTAMP_RE.get_or_init(|| {
        Regex::new(r"\[HEALTHCHECK\] \| \[(\d{4}-\d{2}-\d{2}_\d{2}:\d{2}:\d{2})\]:").unwrap()
    })
}

// Older notifier lines: `[YYYY-MM-DD_HH:MM:SS] | OK`.
fn legacy_healthcheck_re() -> &'static Regex {
    LEGACY_HEALTHCHECK_RE.get_or_init(|| {
        Regex::new(r"\[\d{4}-\d{2}-\d{2}_\d{2}:\d{2}:\d{2}\] \| (\w+)").unwrap()
    })
}

// ---------------------------------------------------------------------------
// LogSource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSource {
    /// `ddclient.log`, filtered to `[DDCLIENT]` records.
    Update,
    /// `healthcheck.log`, last line only.
    Healthcheck,
}

impl LogSource {
    pub fn path(self, config: &Config) -> &Path {
        match self {
            LogSource::Update => &config.ddclient_log,
            LogSource::Healthcheck => &config.healthcheck_log,
        }
    }

    pub fn marker(self) -> Option<&'static str> {
        match self {
            LogSource::Update => Some(DDCLIENT_MARKER),
            LogSource::Healthcheck => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    UpdateStatus,
    UpdateTimestamp,
    UpdateIp,
    HealthcheckStatus,
    HealthcheckTimestamp,
    /// Health-check status in the older `[TS] | STATUS` layout. Served only
    /// under its own route, not part of [`Field::all`].
    LegacyHealthcheckStatus,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::UpdateStatus,
            Field::UpdateTimestamp,
            Field::UpdateIp,
            Field::HealthcheckStatus,
            Field::HealthcheckTimestamp,
        ]
    }

    pub fn source(self) -> LogSource {
        match self {
            Field::UpdateStatus | Field::UpdateTimestamp | Field::UpdateIp => LogSource::Update,
            Field::HealthcheckStatus
            | Field::HealthcheckTimestamp
            | Field::LegacyHealthcheckStatus => LogSource::Healthcheck,
        }
    }

    /// Key used in the JSON response body for this field.
    pub fn json_key(self) -> &'static str {
        match self {
            Field::UpdateStatus => "last_update_status",
            Field::UpdateTimestamp => "last_update_timestamp",
            Field::UpdateIp => "last_update_ip",
            Field::HealthcheckStatus => "last_healthcheck_status",
            Field::HealthcheckTimestamp => "last_healthcheck_timestamp",
            Field::LegacyHealthcheckStatus => "last_healthcheck",
        }
    }

    /// String rendered when the line is absent or does not match.
    pub fn not_found(self) -> &'static str {
        match self {
            Field::UpdateStatus
            | Field::HealthcheckStatus
            | Field::LegacyHealthcheckStatus => NO_STATUS,
            Field::UpdateTimestamp | Field::HealthcheckTimestamp => NO_TIMESTAMP,
            Field::UpdateIp => NO_IP,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Field::UpdateStatus => update_status_re(),
            Field::UpdateTimestamp => update_timestamp_re(),
            Field::UpdateIp => update_ip_re(),
            Field::HealthcheckStatus => healthcheck_status_re(),
            Field::HealthcheckTimestamp => healthcheck_timestamp_re(),
            Field::LegacyHealthcheckStatus => legacy_healthcheck_re(),
        }
    }

    /// Apply this field's pattern to a single log line.
    pub fn extract(self, line: &str) -> Option<String> {
        let caps = self.pattern().captures(line)?;
        let value = caps.get(1)?.as_str().trim_end();
        if value.is_empty() {
            return None;
        }
        Some(value.to_string())
    }

    /// Read the relevant line from this field's log and extract the value.
    pub fn lookup(self, config: &Config) -> Extraction {
        let source = self.source();
        match read_relevant_line(source.path(config), source.marker()) {
            Ok(Some(line)) => match self.extract(&line) {
                Some(value) => Extraction::Found(value),
                None => Extraction::NotFound,
            },
            Ok(None) => Extraction::NotFound,
            Err(e) if e.is_missing_log() => {
                tracing::debug!(field = %self, error = %e, "log not present yet");
                Extraction::Failed(e)
            }
            Err(e) => {
                tracing::warn!(field = %self, error = %e, "log read failed");
                Extraction::Failed(e)
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Outcome of looking up one field. Kept typed so callers and tests can tell
/// the cases apart; [`Extraction::render`] flattens it for the wire.
#[derive(Debug)]
pub enum Extraction {
    Found(String),
    NotFound,
    Failed(StatusError),
}

impl Extraction {
    /// Flatten to the string reported to clients.
    ///
    /// A missing log file renders as the field's "not found" sentinel, the
    /// same as a log with no matching line. Other failures render as their
    /// error message.
    pub fn render(self, field: Field) -> String {
        match self {
            Extraction::Found(value) => value,
            Extraction::NotFound => field.not_found().to_string(),
            Extraction::Failed(e) if e.is_missing_log() => field.not_found().to_string(),
            Extraction::Failed(e) => e.to_string(),
        }
    }

    pub fn found(&self) -> Option<&str> {
        match self {
            Extraction::Found(value) => Some(value),
            _ => None,
        }
    }
}
