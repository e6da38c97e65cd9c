mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use marketdesk_lib::{Client, SessionStore};

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "marketdesk")]
#[command(about = "Administer the marketplace backend from the terminal")]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit user accounts
    Users(commands::users::UsersArgs),
    /// Browse, edit, and bulk-create product listings
    Products(Box<commands::products::ProductsArgs>),
    /// Browse orders
    Orders(commands::orders::OrdersArgs),
    /// Browse and decide return requests
    Returns(commands::returns::ReturnsArgs),
    /// Browse and answer contact enquiries
    Enquiries(commands::enquiries::EnquiriesArgs),
    /// Browse escrow-provider transactions
    Transactions(commands::transactions::TransactionsArgs),
    /// Show dashboard headline counters
    Stats,
    /// List master-data lookup tables
    Master(commands::master::MasterArgs),
    /// Save or clear the persisted staff session
    Auth(commands::auth::AuthArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marketdesk=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let config = Config::from_env()?;
    let store = SessionStore::new(&config.session_path);

    // Auth commands manage the session file and need no API client.
    if let Commands::Auth(args) = &cli.command {
        return commands::auth::run(args, &store);
    }

    let mut client = Client::new(&config.api_url);
    if let Some(session) = store.load()? {
        client = client.with_token(&session.token);
    }

    match &cli.command {
        Commands::Users(args) => commands::users::run(args, &client, &config, &format).await?,
        Commands::Products(args) => {
            commands::products::run(args.as_ref(), &client, &format).await?
        }
        Commands::Orders(args) => commands::orders::run(args, &client, &format).await?,
        Commands::Returns(args) => commands::returns::run(args, &client, &format).await?,
        Commands::Enquiries(args) => commands::enquiries::run(args, &client, &format).await?,
        Commands::Transactions(args) => {
            commands::transactions::run(args, &client, &format).await?
        }
        Commands::Stats => commands::stats::run(&client, &format).await?,
        Commands::Master(args) => commands::master::run(args, &client, &format).await?,
        Commands::Auth(_) => unreachable!("handled above"),
    }

    Ok(())
}
