mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use gigya::common::{AnyResult, logger};
use gigya::configs::Config;
use gigya::{GigyaClient, Params};
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AnyResult<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    logger::init(config.logging.as_ref());
    debug!("Loaded configuration for domain {}", config.client.domain);

    let client = GigyaClient::new(config.client)?;

    match cli.command {
        Commands::Call {
            service,
            method,
            params,
        } => {
            let params: Params = params.into_iter().collect();
            let result = client.call(&service, &method, params).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::ValidateUser {
            uid,
            timestamp,
            signature,
        } => report(client.validate_user_signature(&uid, &timestamp, &signature)),
        Commands::ValidateFriend {
            uid,
            timestamp,
            friend_uid,
            signature,
        } => report(client.validate_friend_signature(&uid, &timestamp, &friend_uid, &signature)),
    }

    Ok(())
}

fn report(valid: bool) {
    println!("{}", if valid { "valid" } else { "invalid" });
}
