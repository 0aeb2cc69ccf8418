use crate::cli::BatchArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use exchange::workflows::{self, progress::ProgressReporter};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub fn run(args: BatchArgs, config: &PartialConfig, quiet: bool) -> Result<()> {
    let batch_config = config.resolve_batch(&args)?;
    debug!(
        "Skipping header lines: {:?}",
        batch_config.header_lines().collect::<Vec<_>>()
    );
    let raw = read_input(args.input.as_deref())?;

    let reporter = match progress_handler(quiet) {
        Some(handler) => ProgressReporter::with_callback(handler.get_callback()),
        None => ProgressReporter::new(),
    };

    info!("Invoking the batch evaluation workflow...");
    match workflows::batch::run(&raw, &batch_config, &reporter) {
        Some(report) => {
            info!("Writing {} verdict(s) to stdout.", report.len());
            println!("{}", report.render());
        }
        None => {
            warn!("Batch input holds no line count; nothing to evaluate.");
        }
    }

    Ok(())
}

/// The stderr progress bar, or `None` when output is quiet.
fn progress_handler(quiet: bool) -> Option<CliProgressHandler> {
    (!quiet).then(CliProgressHandler::new)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading batch input from {:?}", path);
            std::fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            info!("Reading batch input from standard input.");
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
