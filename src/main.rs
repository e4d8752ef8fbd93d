use anyhow::Result;
use clap::{error::ErrorKind, CommandFactory, Parser};

use statbot::{
    app::get_config_dir,
    cli::Cli,
    constants::LOG_FILE_NAME,
    runtime::{resolve_config, Orchestrator, ScriptRunner},
    utils::{init_logger, log_error, LogTarget},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    if let Err(message) = cli.validate() {
        Cli::command().error(ErrorKind::ArgumentConflict, message).exit();
    }

    // Set up logging if verbose; the TUI owns stderr, so it logs to a file
    if cli.verbose {
        let target = if cli.is_interactive() {
            LogTarget::File(get_config_dir()?.join(LOG_FILE_NAME))
        } else {
            LogTarget::Stderr
        };
        init_logger("debug", target)?;
    }

    // Check if running in non-interactive mode
    if !cli.presses.is_empty() {
        run_non_interactive(cli)
    } else {
        // Create and run the orchestrator for interactive mode
        let orchestrator = Orchestrator::new(cli)?;
        orchestrator.run().await
    }
}

/// Replay the --press ids and print the transcript
fn run_non_interactive(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let runner = ScriptRunner::new(&config);

    let result = runner.execute(&cli.presses);
    let formatted = runner.format_result(&result, cli.output_format)?;
    println!("{}", formatted);

    // Exit with appropriate code
    if !result.ignored.is_empty() {
        log_error("[script]", format!("{} press(es) ignored", result.ignored.len()));
        std::process::exit(1);
    }

    Ok(())
}
