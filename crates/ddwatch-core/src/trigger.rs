use crate::config::Config;
use crate::error::{Result, StatusError};
use crate::log_reader::DDCLIENT_MARKER;
use serde::Serialize;
use std::io::Write as _;
use std::path::Path;
use std::process::Command;

/// Timestamp layout shared by the ddclient and health-check logs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

#[derive(Debug, Clone, Serialize)]
pub struct TriggerOutcome {
    /// Captured stdout then stderr, trailing whitespace removed.
    pub output: String,
    pub timestamp: String,
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn now_stamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// The exact record appended to the update log for one run.
///
/// Multi-line output is folded onto one line, joined by single spaces, so
/// every run is exactly one `[DDCLIENT]` line.
pub fn format_record(timestamp: &str, output: &str) -> String {
    let folded = output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{DDCLIENT_MARKER} | [{timestamp}]: {folded}\n")
}

/// Run ddclient once in the foreground and append its output to the update
/// log as a single `[DDCLIENT]` record.
///
/// A non-zero exit status is not an error; whatever ddclient printed is still
/// recorded and returned. No timeout is applied.
pub fn run_update_client(config: &Config) -> Result<TriggerOutcome> {
    let program = config.ddclient_bin.display().to_string();
    let args = config.ddclient_args();

    tracing::info!(program = %program, args = ?args, "running ddclient");

    let out = Command::new(&config.ddclient_bin)
        .args(&args)
        .output()
        .map_err(|source| StatusError::Spawn {
            program: program.clone(),
            source,
        })?;

    let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
    output.push_str(&String::from_utf8_lossy(&out.stderr));
    let output = output.trim_end().to_string();

    let exit_code = out.status.code();
    if !out.status.success() {
        tracing::warn!(program = %program, exit_code = ?exit_code, "ddclient exited unsuccessfully");
    }

    let timestamp = now_stamp();
    append_record(&config.ddclient_log, &format_record(&timestamp, &output))?;
    tracing::info!(log = %config.ddclient_log.display(), %timestamp, "ddclient run recorded");

    Ok(TriggerOutcome {
        output,
        timestamp,
        exit_code,
    })
}

/// Append one record with a single write. The file is created if needed and
/// never truncated.
fn append_record(path: &Path, record: &str) -> Result<()> {
    let append_err = |source| StatusError::AppendLog {
        path: path.to_path_buf(),
        source,
    };
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(append_err)?;
    f.write_all(record.as_bytes()).map_err(append_err)?;
    Ok(())
}
