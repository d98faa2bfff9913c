use crate::output::{print_json, print_pairs};
use ddwatch_core::{config::Config, status::StatusReport};

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let report = StatusReport::collect(config);
    if json {
        return print_json(&report);
    }
    print_pairs(&report.rows());
    Ok(())
}
