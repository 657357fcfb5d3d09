/*
[INPUT]:  CLI arguments, YAML configuration file, wallet JSON files
[OUTPUT]: Validation verdicts, granted roles and decoded claims on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or subcommands
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tokengate_auth_cli::{ServiceConfig, inspect_token, resolve_roles, summarize};

#[derive(Parser, Debug)]
#[command(name = "tokengate-auth", version, about = "Authentication configuration and token-gate checks")]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a configuration file and print what it enables
    CheckConfig {
        #[arg(long = "config", value_name = "PATH")]
        config_path: PathBuf,
    },
    /// Print the roles the token gate grants to a wallet
    ResolveRoles {
        #[arg(long = "config", value_name = "PATH")]
        config_path: PathBuf,
        #[arg(long = "wallet", value_name = "PATH")]
        wallet_path: PathBuf,
        /// Subscription plans treated as active (default: all)
        #[arg(long = "plan", value_name = "PLAN")]
        plans: Vec<String>,
        /// Periodicities treated as active (default: all)
        #[arg(long = "periodicity", value_name = "PERIODICITY")]
        periodicities: Vec<String>,
    },
    /// Validate a token's shape and print its unverified claims
    InspectToken {
        #[arg(value_name = "TOKEN")]
        token: String,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::CheckConfig { config_path } => {
            info!(config_path = %config_path.display(), "checking configuration");
            let config = ServiceConfig::from_file(&config_path).context("load config")?;
            let summary = summarize(&config.auth);
            println!("{}", serde_json::to_string_pretty(&summary)?);
            info!("configuration valid");
        }
        Command::ResolveRoles {
            config_path,
            wallet_path,
            plans,
            periodicities,
        } => {
            let config = ServiceConfig::from_file(&config_path).context("load config")?;
            let roles = resolve_roles(&config.auth, &wallet_path, &plans, &periodicities)?;
            println!("{}", serde_json::to_string(&roles)?);
        }
        Command::InspectToken { token } => {
            let claims = inspect_token(&token)?;
            println!("{}", serde_json::to_string_pretty(&claims)?);
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
