//! Scan the host and write reports

use std::process::ExitCode;

use log::info;

use crate::cli::app::ScanArgs;
use hostaudit::adapters::host::SystemHost;
use hostaudit::adapters::report::{ReportMeta, write_html_report, write_json_report};
use hostaudit::adapters::yaml::load_all_rules;
use hostaudit::config::Config;
use hostaudit::core::services::Scanner;
use hostaudit::output::{OutputMode, ScanOutput};

/// Load rules, scan the local host, report
///
/// Returns a failure exit code when any rule fails.
pub fn scan(mut config: Config, args: &ScanArgs, mode: OutputMode) -> anyhow::Result<ExitCode> {
    apply_overrides(&mut config, args);

    let rules = load_all_rules(&config.scan.rules_dir)?;
    let results = Scanner::new(SystemHost::new()).scan(&rules);

    if !args.no_report {
        let meta = ReportMeta {
            host: config.report.host.clone(),
            os: config.report.os.clone(),
            benchmark: config.report.benchmark.clone(),
        };
        write_json_report(&config.report.json, &results, &meta)?;
        write_html_report(&config.report.html, &results, &meta)?;
        info!("JSON report saved to: {}", config.report.json.display());
        info!("HTML report saved to: {}", config.report.html.display());
    }

    let output = ScanOutput::new(results);
    output.render(mode);

    if output.summary.failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn apply_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(rules) = &args.rules {
        config.scan.rules_dir.clone_from(rules);
    }
    if let Some(json) = &args.json_report {
        config.report.json.clone_from(json);
    }
    if let Some(html) = &args.html_report {
        config.report.html.clone_from(html);
    }
    if let Some(host) = &args.host {
        config.report.host.clone_from(host);
    }
    if let Some(os) = &args.os {
        config.report.os.clone_from(os);
    }
    if let Some(benchmark) = &args.benchmark {
        config.report.benchmark.clone_from(benchmark);
    }
}
