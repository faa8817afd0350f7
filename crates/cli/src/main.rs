// stocklens CLI - FBA / storefront inventory reconciliation

mod exit_codes;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{
    recon_exit_code, EXIT_DISCREPANCIES, EXIT_INVALID_CONFIG, EXIT_RUNTIME, EXIT_SUCCESS,
};
use stocklens_recon::config::ReconConfig;
use stocklens_recon::loader::load_csv_records;
use stocklens_recon::model::{InventoryRecord, Source};
use stocklens_recon::report;

#[derive(Parser)]
#[command(name = "slens")]
#[command(about = "Reconcile FBA and storefront inventory ledgers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a reconciliation from a TOML config file
    #[command(after_help = "\
Examples:
  slens run daily.recon.toml
  slens run daily.recon.toml --output report.csv
  slens run daily.recon.toml --json")]
    Run {
        /// Path to the .recon.toml config file
        config: PathBuf,

        /// Write the CSV report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the full JSON report to stdout instead of the CSV
        #[arg(long)]
        json: bool,
    },

    /// Validate a config file without running
    #[command(after_help = "\
Examples:
  slens validate daily.recon.toml")]
    Validate {
        /// Path to the .recon.toml config file
        config: PathBuf,
    },
}

struct CliError {
    code: u8,
    message: String,
}

fn cli_err(code: u8, message: impl Into<String>) -> CliError {
    CliError {
        code,
        message: message.into(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            output,
            json,
        } => cmd_run(config, output, json),
        Commands::Validate { config } => cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            ExitCode::from(e.code)
        }
    }
}

fn load_ledger(
    config: &ReconConfig,
    base_dir: &Path,
    source: Source,
) -> Result<Vec<InventoryRecord>, CliError> {
    let source_config = config.sources.get(source);
    let path = base_dir.join(&source_config.file);
    let data = std::fs::read_to_string(&path)
        .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot read {}: {e}", path.display())))?;
    load_csv_records(source, &data, &source_config.columns)
        .map_err(|e| cli_err(recon_exit_code(&e), e.to_string()))
}

fn cmd_run(config_path: PathBuf, output: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot read config: {e}")))?;
    let config = ReconConfig::from_toml(&config_str)
        .map_err(|e| cli_err(EXIT_INVALID_CONFIG, e.to_string()))?;

    // Ledger paths resolve relative to the config file's directory.
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let fba = load_ledger(&config, base_dir, Source::Fba)?;
    let storefront = load_ledger(&config, base_dir, Source::Storefront)?;

    let result = stocklens_recon::run(&config, &fba, &storefront)
        .map_err(|e| cli_err(recon_exit_code(&e), e.to_string()))?;
    let report_bytes =
        report::to_csv(&result).map_err(|e| cli_err(recon_exit_code(&e), e.to_string()))?;

    // The --output flag wins over the config's output path; flag paths
    // are relative to the working directory, config paths to the config.
    let report_path = output.or_else(|| {
        config
            .output
            .report
            .as_ref()
            .map(|p| base_dir.join(p))
    });

    if let Some(ref path) = report_path {
        std::fs::write(path, &report_bytes)
            .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot write report: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| cli_err(EXIT_RUNTIME, format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    } else if report_path.is_none() {
        std::io::stdout()
            .write_all(&report_bytes)
            .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot write report: {e}")))?;
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "recon '{}': {} SKUs — {} matched, {} mismatched, {} missing in FBA, {} missing in storefront",
        result.meta.config_name,
        s.total_rows,
        s.matched,
        s.mismatched,
        s.missing_in_fba,
        s.missing_in_storefront,
    );

    if !s.is_clean() {
        return Err(cli_err(EXIT_DISCREPANCIES, "discrepancies found"));
    }

    Ok(())
}

fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| cli_err(EXIT_RUNTIME, format!("cannot read config: {e}")))?;

    match ReconConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: recon '{}' ({} vs {})",
                config.name, config.sources.fba.file, config.sources.storefront.file,
            );
            Ok(())
        }
        Err(e) => Err(cli_err(EXIT_INVALID_CONFIG, e.to_string())),
    }
}
