//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use super::commands;
use hostaudit::config::Config;
use hostaudit::output::OutputMode;

/// hostaudit - Host compliance auditing
#[derive(Parser, Debug)]
#[command(
    name = "hostaudit",
    version,
    about = "Audit host configuration against compliance rules",
    long_about = "Audit a host's configuration against SCA-style compliance rules.\n\n\
                  Each rule probes registry values, files or command output and\n\
                  passes or fails under an all/any/none condition."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./hostaudit.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run all rules and write reports
    Scan(ScanArgs),

    /// Run a single probe expression and show its verdict
    Probe {
        /// Probe expression, e.g. "f:/etc/shadow -> exists"
        expression: String,
    },

    /// List the rules that would be evaluated
    List {
        /// Directory containing .yml rule files
        #[arg(long, value_name = "DIR")]
        rules: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Options for `scan`; each overrides the config file
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Directory containing .yml rule files
    #[arg(long, value_name = "DIR")]
    pub rules: Option<PathBuf>,

    /// Path to JSON report
    #[arg(long = "json-report", value_name = "PATH")]
    pub json_report: Option<PathBuf>,

    /// Path to HTML report
    #[arg(long = "html-report", value_name = "PATH")]
    pub html_report: Option<PathBuf>,

    /// Host name shown in reports
    #[arg(long)]
    pub host: Option<String>,

    /// OS name shown in reports
    #[arg(long)]
    pub os: Option<String>,

    /// Benchmark name shown in reports
    #[arg(long)]
    pub benchmark: Option<String>,

    /// Skip writing report files
    #[arg(long)]
    pub no_report: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Scan(args)) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::scan(config, &args, output_mode)
        },
        Some(Command::Probe { expression }) => commands::probe(&expression, output_mode),
        Some(Command::List { rules }) => {
            let config = Config::load(cli.config.as_deref())?;
            let dir = rules.unwrap_or(config.scan.rules_dir);
            commands::list(&dir, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("hostaudit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("hostaudit v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'hostaudit --help' for usage");
                println!("Run 'hostaudit scan --rules <dir>' to audit this host");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
