use crate::cli::CheckArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::table::format_counts_table;
use exchange::workflows::analyze::{Analysis, analyze};
use tracing::info;

pub fn run(args: CheckArgs, config: &PartialConfig) -> Result<()> {
    let show_counts = config.resolve_show_counts(&args);
    let analysis = analyze(&args.equation)?;
    info!(
        "Analyzed '{}': {} atom(s) in, {} atom(s) out.",
        args.equation,
        analysis.left_total(),
        analysis.right_total()
    );

    println!("{}", render(&analysis, show_counts));
    Ok(())
}

fn render(analysis: &Analysis, show_counts: bool) -> String {
    if show_counts {
        format!("{}\n\n{}", analysis.verdict, format_counts_table(analysis))
    } else {
        analysis.verdict.to_string()
    }
}
