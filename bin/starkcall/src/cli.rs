use clap::{Parser, Subcommand, ValueEnum};
use starkcall_core::ValidateType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "starkcall")]
#[command(about = "Starknet ABI, selector and calldata toolkit", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "starkcall.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the selector of an entry point name, decimal or hex value
    Selector { value: String },

    /// Print an ABI flattened into the legacy format
    Legacy {
        #[arg(short, long, value_name = "FILE")]
        abi: PathBuf,
    },

    /// Print the signature of a function
    Method {
        #[arg(short, long, value_name = "FILE")]
        abi: PathBuf,

        name: String,
    },

    /// Validate call arguments given as a JSON array
    Validate {
        #[arg(short, long, value_name = "FILE")]
        abi: PathBuf,

        #[arg(short, long)]
        method: String,

        #[arg(long, value_name = "JSON", default_value = "[]")]
        args: String,

        #[arg(short, long, value_enum, default_value_t = Kind::Invoke)]
        kind: Kind,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Invoke,
    Call,
    Deploy,
}

impl From<Kind> for ValidateType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Invoke => ValidateType::Invoke,
            Kind::Call => ValidateType::Call,
            Kind::Deploy => ValidateType::Deploy,
        }
    }
}
