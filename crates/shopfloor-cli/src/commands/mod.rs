//! Subcommand implementations.

pub mod directory;
pub mod login;
pub mod plans;
pub mod product;
pub mod qr;
pub mod scan;
pub mod step;

use anyhow::Result;

use crate::cli::Commands;
use crate::context::AppContext;

pub async fn handle(cmd: Commands, ctx: &AppContext) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::login(args, ctx).await,
        Commands::Logout => login::logout(ctx),
        Commands::Whoami => login::whoami(ctx),
        Commands::Scan(args) => scan::run(args, ctx).await,
        Commands::Product(cmd) => product::handle(cmd, ctx).await,
        Commands::Step(cmd) => step::handle(cmd, ctx).await,
        Commands::Processes(args) => directory::processes(args, ctx).await,
        Commands::Employees(args) => directory::employees(args, ctx).await,
        Commands::Plans(cmd) => plans::handle(cmd, ctx).await,
        Commands::Qr(args) => qr::run(args, ctx).await,
    }
}
