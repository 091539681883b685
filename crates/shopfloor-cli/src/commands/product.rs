//! Product subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use shopfloor_core::model::{ProductCreate, ProductStatus};
use shopfloor_core::{Lookup, Repository, SerialNumber};

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct ProductCommand {
    #[command(subcommand)]
    pub command: ProductSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductSubcommand {
    /// Look up a product by serial number
    Get {
        serial: SerialNumber,
        /// Print the raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a product on a process
    Create {
        serial: SerialNumber,
        #[arg(long)]
        process: i64,
    },

    /// Scrap, rework or restore a product
    Status { product_id: i64, status: StatusArg },

    /// Move a product to another process
    Process { product_id: i64, process_id: i64 },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum StatusArg {
    Normal,
    Rework,
    Scrap,
}

impl From<StatusArg> for ProductStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Normal => ProductStatus::Normal,
            StatusArg::Rework => ProductStatus::Rework,
            StatusArg::Scrap => ProductStatus::Scrap,
        }
    }
}

pub async fn handle(cmd: ProductCommand, ctx: &AppContext) -> Result<()> {
    let repo = &ctx.repository;

    match cmd.command {
        ProductSubcommand::Get { serial, json } => match repo.product(&serial).await? {
            Lookup::Found(product) if json => output::json_pretty(&product)?,
            Lookup::Found(product) => output::product(&product),
            Lookup::Absent { message, .. } => anyhow::bail!("{}: {}", serial, message),
        },
        ProductSubcommand::Create { serial, process } => {
            let product = repo
                .create_product(&ProductCreate::new(serial, process))
                .await
                .context("Failed to create product")?;
            output::success("Product created");
            output::product(&product);
        }
        ProductSubcommand::Status { product_id, status } => {
            let product = repo
                .change_product_status(product_id, status.into())
                .await
                .context("Failed to change product status")?;
            output::success("Status changed");
            output::product(&product);
        }
        ProductSubcommand::Process {
            product_id,
            process_id,
        } => {
            let product = repo
                .change_product_process(product_id, process_id)
                .await
                .context("Failed to change product process")?;
            output::success("Process changed");
            output::product(&product);
        }
    }

    Ok(())
}
