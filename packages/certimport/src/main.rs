//! Main entry point for the certimport CLI application

use std::process::ExitCode;

use certimport::cli::{Cli, normalize_legacy_flags};
use certimport::{AcmInterface, CertImportError, ImportConfig, ImportResult, Progress, report};
use certimport_common::LoggingTransformer;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    // Initialize structured logging
    LoggingTransformer::init();

    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    let use_json = cli.json;

    let outcome = cli.into_config().and_then(run);
    match outcome {
        Ok(result) => {
            if use_json {
                println!("{}", report::success_json(&result));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let kind = e.kind();
            LoggingTransformer::log_failure(kind, &e);
            if use_json {
                println!("{}", report::failure_json(&e));
            } else {
                eprintln!("{}", report::failure_message(&e));
            }
            if let CertImportError::Usage(_) = e {
                eprintln!();
                eprintln!("{}", Cli::command().render_help());
            }
            ExitCode::from(kind.exit_code())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn run(config: ImportConfig) -> Result<ImportResult, CertImportError> {
    let mut acm = AcmInterface::new();
    if config.json {
        let mut progress = Progress::new(std::io::sink());
        certimport::import_certificate(&config, &mut acm, &mut progress).await
    } else {
        let mut progress = Progress::new(std::io::stdout().lock());
        certimport::import_certificate(&config, &mut acm, &mut progress).await
    }
}
