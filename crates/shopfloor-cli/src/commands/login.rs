//! Login, logout and whoami.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use shopfloor_core::{CredentialStore, Credentials, LoginExchange};
use shopfloor_http::HttpLoginExchange;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Login identifier (email)
    #[arg(long)]
    pub identifier: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

pub async fn login(args: LoginArgs, ctx: &AppContext) -> Result<()> {
    let credentials = Credentials::new(&args.identifier, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let token = HttpLoginExchange::new(&ctx.config)?
        .exchange(&credentials)
        .await
        .context("Failed to login")?;

    ctx.store
        .save_credentials(&credentials)
        .context("Failed to save credentials")?;
    ctx.store
        .save_token(&token)
        .context("Failed to save session token")?;

    output::success("Logged in successfully");
    println!();
    output::field("Identifier", credentials.identifier());
    output::field("Server", ctx.config.base_url.as_str());

    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    ctx.store.clear().context("Failed to clear credential store")?;
    output::success("Logged out");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> Result<()> {
    let credentials = ctx
        .store
        .credentials()
        .context("Failed to read credential store")?
        .context("This device is not registered. Run 'shopfloor login' or scan a registration code.")?;

    output::field("Identifier", credentials.identifier());
    if let Some(profile) = ctx.store.profile()? {
        output::field("Name", &profile.display_name);
        output::field("Role", profile.role.as_str());
    }
    let has_token = ctx.store.token()?.is_some();
    output::field("Session", if has_token { "cached" } else { "none" });
    output::field("Server", ctx.config.base_url.as_str());
    output::field("Store", &ctx.store.path().display().to_string());

    Ok(())
}
