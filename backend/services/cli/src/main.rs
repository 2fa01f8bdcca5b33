mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use scamintel_config::{init_tracing, AppConfig};
use scamintel_scoring::ScamIntelligenceSystem;

use crate::cli::Cli;
use crate::output::Report;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&config.log_level).context("failed to initialize logging")?;

    tracing::debug!(service = "scamintel", "starting");

    let input = args.to_input().context("failed to build analysis input")?;
    let system = ScamIntelligenceSystem::new();
    tracing::debug!(policy = ?system.policy(), "scoring policy");
    let result = system.analyze(&input);

    let report = Report::new(&result, &config);
    println!(
        "{}",
        report
            .to_json(args.compact)
            .context("failed to render report")?
    );
    Ok(())
}
