use check_file_changed::app::{handle_fatal_error, init_logging, AppConfig};
use check_file_changed::cli::{execute_command, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    match run(cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => handle_fatal_error(e, verbose),
    }
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = AppConfig::new(cli.verbose)?;
    init_logging(&config);
    execute_command(cli.command, &config).await
}
