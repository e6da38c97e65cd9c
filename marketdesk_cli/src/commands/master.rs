use anyhow::Result;
use clap::{Args, Subcommand};
use marketdesk_lib::Client;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_rows, OutputFormat};

#[derive(Args)]
pub struct MasterArgs {
    #[command(subcommand)]
    pub command: MasterCommand,
}

#[derive(Subcommand)]
pub enum MasterCommand {
    /// Top-level product categories
    Categories,
    /// Sub-categories of one category
    SubCategories {
        #[arg(long)]
        category_id: i64,
    },
    /// Brands, optionally narrowed by search text and sub-category
    Brands {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        sub_category_id: Option<i64>,
    },
    /// Sizes, optionally narrowed to one category
    Sizes {
        #[arg(long)]
        category_id: Option<i64>,
    },
    /// Colors
    Colors,
    /// Materials
    Materials,
    /// Item conditions
    Conditions,
}

#[derive(Tabled, Serialize)]
struct LookupRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

pub async fn run(args: &MasterArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let rows = match &args.command {
        MasterCommand::Categories => client
            .get_categories()
            .await
            .map_err(|e| anyhow::anyhow!(e.display_message()))?
            .data
            .into_iter()
            .map(|c| LookupRow {
                id: c.id,
                name: c.name,
            })
            .collect::<Vec<_>>(),
        MasterCommand::SubCategories { category_id } => client
            .get_sub_categories(*category_id)
            .await
            .map_err(|e| anyhow::anyhow!(e.display_message()))?
            .data
            .into_iter()
            .map(|s| LookupRow {
                id: s.id,
                name: s.name,
            })
            .collect(),
        MasterCommand::Brands {
            search,
            sub_category_id,
        } => client
            .get_brands(search, *sub_category_id)
            .await
            .map_err(|e| anyhow::anyhow!(e.display_message()))?
            .data
            .into_iter()
            .map(|b| LookupRow {
                id: b.id,
                name: b.name,
            })
            .collect(),
        MasterCommand::Sizes { category_id } => client
            .get_sizes(*category_id)
            .await
            .map_err(|e| anyhow::anyhow!(e.display_message()))?
            .data
            .into_iter()
            .map(|s| LookupRow {
                id: s.id,
                name: s.name,
            })
            .collect(),
        MasterCommand::Colors => client
            .get_colors()
            .await
            .map_err(|e| anyhow::anyhow!(e.display_message()))?
            .data
            .into_iter()
            .map(|c| LookupRow {
                id: c.id,
                name: c.name,
            })
            .collect(),
        MasterCommand::Materials => client
            .get_materials()
            .await
            .map_err(|e| anyhow::anyhow!(e.display_message()))?
            .data
            .into_iter()
            .map(|m| LookupRow {
                id: m.id,
                name: m.name,
            })
            .collect(),
        MasterCommand::Conditions => client
            .get_conditions()
            .await
            .map_err(|e| anyhow::anyhow!(e.display_message()))?
            .data
            .into_iter()
            .map(|c| LookupRow {
                id: c.id,
                name: c.name,
            })
            .collect(),
    };

    if rows.is_empty() {
        println!("No entries");
        return Ok(());
    }
    print_rows(rows, format)
}
