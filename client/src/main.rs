//! Vision client CLI entry point

use clap::Parser;
use tracing::{error, info};

use vision_client::cli::{Cli, Commands, RunArgs};
use vision_client::logging;
use vision_client::suite::{CheckStatus, FixturePaths, RunPlan, SuiteRunner};
use vision_client_common::config::ProviderConfig;

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            if let Err(code) = run(args).await {
                std::process::exit(code);
            }
        }
    }
}

async fn run(args: RunArgs) -> Result<(), i32> {
    let mut config = ProviderConfig::from_env();
    if let Some(timeout_secs) = args.timeout_secs {
        config.run_timeout_secs = timeout_secs;
    }

    let plan = match args.run_id {
        Some(run_id) => RunPlan::new(run_id),
        None => RunPlan::generate(),
    }
    .with_teardown(args.teardown || config.teardown);

    let fixtures = FixturePaths::from_dir(&args.fixtures_dir);

    let runner = SuiteRunner::new(config).map_err(|e| {
        error!("{}", e);
        2
    })?;

    info!(run_id = %plan.run_id, "starting integration run");
    let report = runner.run(&plan, &fixtures).await.map_err(|e| {
        error!("{}", e);
        2
    })?;

    for check in &report.checks {
        match &check.status {
            CheckStatus::Passed => println!("PASS  {}", check.name),
            CheckStatus::Failed(message) => println!("FAIL  {} - {}", check.name, message),
            CheckStatus::Skipped => println!("SKIP  {}", check.name),
        }
    }
    println!(
        "{} passed, {} failed, {} skipped (collection: {})",
        report.passed_count(),
        report.failed_count(),
        report.skipped_count(),
        report.collection_id
    );

    if report.is_success() {
        Ok(())
    } else {
        Err(1)
    }
}
