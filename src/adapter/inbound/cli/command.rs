//! Command-line interface definitions.
//!
//! Defines the CLI structure for the cdp-wallet application using `clap`.
//! Each subcommand maps onto exactly one wallet operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::network::{BASE_SEPOLIA, DEFAULT_TOKEN};

/// Coinbase Wallet API v2 App
#[derive(Parser, Debug)]
#[command(name = "cdp-wallet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (default: INFO)
    #[arg(long, global = true, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Path to an optional TOML configuration file
    #[arg(long, global = true, default_value = "cdp-wallet.toml")]
    pub config: PathBuf,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Exit with a non-zero status when the operation fails
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Log severity accepted by `--log-level`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[default]
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Equivalent `tracing` filter directive. `CRITICAL` has no tracing
    /// counterpart and maps to `error`.
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an Externally Owned Account (EOA) wallet
    CreateEoa(CreateEoaArgs),

    /// Create a Smart Contract wallet
    CreateSmart(CreateSmartArgs),

    /// Fund a wallet with a specified token on a specified network
    FundWallet(FundWalletArgs),

    /// Transfer token from smart wallet to a specified EOA wallet
    #[command(name = "transfer-baseeth")]
    TransferBaseEth(TransferBaseEthArgs),
}

/// Arguments for `create-eoa`.
#[derive(Parser, Debug)]
pub struct CreateEoaArgs {
    /// Name assigned to the account created for future reference (Default: None)
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for `create-smart`.
#[derive(Parser, Debug)]
pub struct CreateSmartArgs {
    /// Address of owner wallet if previously created (Default: None)
    #[arg(long)]
    pub owner_address: Option<String>,
}

/// Arguments for `fund-wallet`.
#[derive(Parser, Debug)]
pub struct FundWalletArgs {
    /// The wallet address for faucet funding. If not set, a new smart wallet will be created (Default: None)
    #[arg(long)]
    pub address: Option<String>,

    /// The network for faucet funding
    #[arg(long, default_value = BASE_SEPOLIA)]
    pub network: String,

    /// The token for faucet funding
    #[arg(long, default_value = DEFAULT_TOKEN)]
    pub token: String,
}

/// Arguments for `transfer-baseeth`.
///
/// The address flags are optional at the parser level; the command handler
/// checks them so it can report the missing flag in its own words.
#[derive(Parser, Debug)]
pub struct TransferBaseEthArgs {
    /// The smart wallet address to transfer token from
    #[arg(long)]
    pub from_smart_address: Option<String>,

    /// The smart wallet address' owner to sign transactions
    #[arg(long)]
    pub from_smart_owner: Option<String>,

    /// Destination address for transfer
    #[arg(long)]
    pub to_address: Option<String>,

    /// ETH amount to transfer
    #[arg(long, default_value = "0")]
    pub amount: String,
}
