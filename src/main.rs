use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use production_mix::chart::{render_svg, ChartSpec};
use production_mix::cli::Cli;
use production_mix::config::Config;
use production_mix::report::describe_failure;
use production_mix::{logger, Analysis, Report};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration rejected: {}", e);
            eprintln!("Invalid input: {}", e);
            return ExitCode::from(2);
        }
    };
    info!(request = ?config.request, "computing optimal production mix");

    let analysis = match Analysis::run(&config.request, config.output.samples) {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("unable to solve: {}", e);
            eprintln!("{}", describe_failure(&e));
            return ExitCode::FAILURE;
        }
    };
    println!(
        "{}",
        Report::new(&config.request, &analysis.plan, &config.output.currency)
    );

    if let Err(e) = write_chart(&config, &analysis) {
        error!("{:#}", e);
        eprintln!("The chart could not be drawn: {:#}", e);
        return ExitCode::from(3);
    }
    ExitCode::SUCCESS
}

fn write_chart(config: &Config, analysis: &Analysis) -> anyhow::Result<()> {
    let Some(path) = &config.output.chart else {
        return Ok(());
    };
    let spec = ChartSpec::new(&config.request, analysis);
    render_svg(&spec, path).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "chart saved");
    println!("Chart of the feasible region saved to {}", path.display());
    Ok(())
}
