use std::process::ExitCode;

use clap::Parser;
use menu_imagery::interfaces::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    menu_imagery::init_tracing();

    match menu_imagery::run(Cli::parse()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
