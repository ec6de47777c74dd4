//! List loaded rules

use std::path::Path;
use std::process::ExitCode;

use hostaudit::adapters::yaml::load_all_rules;
use hostaudit::output::{OutputMode, RuleInfo, RuleListOutput};

/// Print the rules found in `rules_dir`
pub fn list(rules_dir: &Path, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let rules = load_all_rules(rules_dir)?;

    let output = RuleListOutput {
        rules: rules
            .into_iter()
            .map(|rule| RuleInfo {
                id: rule.id,
                subrules: rule.rules.len(),
                title: rule.title,
                condition: rule.condition,
            })
            .collect(),
    };
    output.render(mode);

    Ok(ExitCode::SUCCESS)
}
