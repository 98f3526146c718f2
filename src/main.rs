use opamp::cli::{Cli, CliHandler};
use log::error;
use std::process;

#[tokio::main]
async fn main() {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ Argument parsing failed: {}", e);
            process::exit(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            error!("Run failed: {:?}", e);
            eprintln!("❌ {}", e);
            if e.is_model_call_error() {
                eprintln!("Please check your API key and model settings, then try again");
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
