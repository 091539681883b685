//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use shopfloor_core::BaseUrl;
use shopfloor_core::types::DEFAULT_BASE_URL;
use shopfloor_http::RefreshGuard;

use crate::commands::{directory, login, plans, product, qr, scan, step};

/// Shop-floor work tracking from the terminal.
#[derive(Parser, Debug)]
#[command(name = "shopfloor")]
#[command(author, version = env!("SHOPFLOOR_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection and storage settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// API root URL
    #[arg(long, env = "SHOPFLOOR_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: BaseUrl,

    /// Credential file (defaults to the platform data directory)
    #[arg(long, env = "SHOPFLOOR_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// When to stop refreshing a rejected token: chain or header
    #[arg(long, default_value = "chain", global = true)]
    pub refresh_guard: RefreshGuard,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store credentials and obtain a session token
    Login(login::LoginArgs),

    /// Forget credentials, token and profile
    Logout,

    /// Show the registered user of this device
    Whoami,

    /// Handle a scanned product label or registration code
    Scan(scan::ScanArgs),

    /// Product operations
    Product(product::ProductCommand),

    /// Product step operations
    Step(step::StepCommand),

    /// List production processes
    Processes(directory::ListArgs),

    /// List employees
    Employees(directory::ListArgs),

    /// Day plan operations
    Plans(plans::PlansCommand),

    /// Print an employee's registration QR payload
    Qr(qr::QrArgs),
}
