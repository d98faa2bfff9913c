use crate::output::print_json;
use anyhow::Context;
use ddwatch_core::{config::Config, trigger::run_update_client};

/// Run ddclient once. Unlike the HTTP endpoint, failures exit non-zero.
pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let outcome = run_update_client(config).context("ddclient run failed")?;
    if json {
        return print_json(&outcome);
    }
    println!("{}", outcome.output);
    Ok(())
}
