use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use casinobot::adapter::inbound::cli::command::{
    AccountCommand, CheckCommand, Cli, Commands,
};
use casinobot::adapter::inbound::cli::output::{self, OutputConfig};
use casinobot::adapter::inbound::cli::{account, check, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose), &cli.color);

    let result = match &cli.command {
        Commands::Run(args) => {
            tokio::select! {
                result = run::execute(args) => result,
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    Ok(())
                }
            }
        }
        Commands::Check(CheckCommand::Config(arg)) => check::config::execute_config(&arg.config),
        Commands::Account(AccountCommand::Balance(args)) => account::balance(args),
        Commands::Account(AccountCommand::Credit(args)) => account::credit(args),
        Commands::Account(AccountCommand::History(args)) => account::history(args),
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
