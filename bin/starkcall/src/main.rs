mod cli;
mod config_loader;

use anyhow::{Context, Result};
use clap::Parser;
use starkcall_common::utils::logging::init_logging;
use starkcall_core::{create_abi_parser, get_selector, CallArg, CallData};
use tracing::{debug, info};

fn main() -> Result<()> {
    // 1. Parse CLI
    let args = cli::Cli::parse();

    // 2. Load config and setup logging
    let config = config_loader::load_app_config(&args.config)?;
    init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    debug!("Loaded config from {:?}", args.config);

    // 3. Run command
    match args.command {
        cli::Commands::Selector { value } => {
            println!("{}", get_selector(&value));
        }
        cli::Commands::Legacy { abi } => {
            let parser = create_abi_parser(config_loader::load_abi(&abi)?);
            let legacy = serde_json::to_string_pretty(&parser.legacy_format())?;
            println!("{}", legacy);
        }
        cli::Commands::Method { abi, name } => {
            let parser = create_abi_parser(config_loader::load_abi(&abi)?);
            let method = parser
                .get_method(&name)?
                .with_context(|| format!("Method {} not found", name))?;
            println!("{}", serde_json::to_string_pretty(method)?);
        }
        cli::Commands::Validate {
            abi,
            method,
            args: raw_args,
            kind,
        } => {
            let calldata = CallData::new(config_loader::load_abi(&abi)?);
            let values: Vec<serde_json::Value> =
                serde_json::from_str(&raw_args).context("Arguments must be a JSON array")?;
            let call_args: Vec<CallArg> = values.into_iter().map(CallArg::from).collect();

            calldata.validate(kind.into(), &method, &call_args)?;
            info!("{} arguments of {} are valid", call_args.len(), method);
            println!("ok");
        }
    }

    Ok(())
}
