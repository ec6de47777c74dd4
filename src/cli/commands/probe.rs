//! Run a single probe expression

use std::process::ExitCode;

use hostaudit::adapters::host::SystemHost;
use hostaudit::core::services::{evaluate_subrule, execute_subrule};
use hostaudit::output::{OutputMode, ProbeOutput};

/// Execute `expression` on the local host and print the verdict
pub fn probe(expression: &str, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let observation = execute_subrule(expression, &SystemHost::new());
    let verdict = evaluate_subrule(&observation);
    let passed = verdict.passed;

    ProbeOutput::new(&observation, verdict).render(mode);

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
