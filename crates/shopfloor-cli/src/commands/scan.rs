//! Scan command: product labels and registration codes.

use anyhow::{Context, Result};
use clap::Args;

use shopfloor_core::model::{DeviceInfo, ProductCreate};
use shopfloor_core::{Lookup, Repository, Scan, decode_scan, register_device};

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Raw scanned payload
    pub payload: String,

    /// Create the product on this process when it does not exist yet
    #[arg(long)]
    pub process: Option<i64>,
}

pub async fn run(args: ScanArgs, ctx: &AppContext) -> Result<()> {
    match decode_scan(&args.payload)? {
        Scan::Product(serial) => match ctx.repository.product(&serial).await? {
            Lookup::Found(product) => {
                output::product(&product);
                Ok(())
            }
            Lookup::Absent { message, .. } => {
                let Some(process_id) = args.process else {
                    anyhow::bail!("{}: {} (pass --process <id> to create it)", serial, message);
                };
                let product = ctx
                    .repository
                    .create_product(&ProductCreate::new(serial, process_id))
                    .await
                    .context("Failed to create product")?;
                output::success("Product created");
                output::product(&product);
                Ok(())
            }
        },
        Scan::Registration(code) => {
            let user = register_device(
                &ctx.repository,
                ctx.store.as_ref(),
                &code,
                &DeviceInfo::host(),
            )
            .await
            .context("Failed to register device")?;

            output::success("Device registered");
            output::field("Identifier", user.credentials.identifier());
            output::field("Name", &user.profile.display_name);
            output::field("Role", user.profile.role.as_str());
            Ok(())
        }
    }
}
