//! Employee registration QR payload.

use anyhow::{Context, Result};
use clap::Args;

use shopfloor_core::Repository;

use crate::context::AppContext;

#[derive(Args, Debug)]
pub struct QrArgs {
    pub employee_id: i64,
}

pub async fn run(args: QrArgs, ctx: &AppContext) -> Result<()> {
    let qr = ctx
        .repository
        .employee_qr(args.employee_id)
        .await
        .context("Failed to fetch QR payload")?;

    println!("{}", qr.to_qr_content());
    Ok(())
}
