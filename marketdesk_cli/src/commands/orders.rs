use anyhow::Result;
use clap::{Args, Subcommand};
use marketdesk_lib::display::{format_price, format_timestamp};
use marketdesk_lib::types::Order;
use marketdesk_lib::{Client, DetailState, DetailView, ListState, ListView, OrderQuery, Query};

use crate::output::{build_order_rows, print_json, print_page_footer, print_rows, OutputFormat};

#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders
    List(OrdersListArgs),
    /// Show one order with its tracking block
    Show(OrderShowArgs),
}

#[derive(Args)]
pub struct OrdersListArgs {
    /// Free-text search over order numbers and parties
    #[arg(long)]
    pub search: Option<String>,

    /// Order status filter
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: i64,

    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

#[derive(Args)]
pub struct OrderShowArgs {
    /// Order id
    pub id: i64,
}

pub async fn run(args: &OrdersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        OrdersCommand::List(list) => run_list(list, client, format).await,
        OrdersCommand::Show(show) => run_show(show, client, format).await,
    }
}

async fn run_list(args: &OrdersListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: ListView<Order, Option<String>> = ListView::new(args.status.clone());
    let mut params = view.start();
    if let Some(search) = args.search.as_deref() {
        params = view.submit_search(search);
    }
    if args.page > 1 {
        params = view.set_page(args.page);
    }

    let mut query = OrderQuery::default()
        .with_page(params.page)
        .with_limit(args.limit);
    if !params.search.is_empty() {
        query = query.with_search(&params.search);
    }
    if let Some(status) = params.filter.as_deref() {
        query = query.with_status(status);
    }

    let outcome = client.get_orders(&query).await;
    view.resolve(
        outcome
            .map(|resp| (resp.data, resp.pagination))
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        ListState::Populated(_) => {
            print_rows(build_order_rows(view.rows()), format)?;
            print_page_footer(view.pagination(), format);
            Ok(())
        }
        ListState::Empty => {
            println!("No orders found");
            Ok(())
        }
        ListState::Errored(message) => anyhow::bail!(message.clone()),
        ListState::Idle | ListState::Loading => unreachable!("fetch already resolved"),
    }
}

async fn run_show(args: &OrderShowArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: DetailView<Order> = DetailView::new();
    let outcome = client.get_order(args.id).await;
    view.resolve(
        outcome
            .map(|envelope| envelope.data)
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        DetailState::Loaded(order) => {
            match format {
                OutputFormat::Table => print_detail(order),
                _ => print_json(order)?,
            }
            Ok(())
        }
        DetailState::NotFound => {
            println!("Order {} not found", args.id);
            Ok(())
        }
        DetailState::Failed(message) => anyhow::bail!(message.clone()),
        DetailState::Loading => unreachable!("fetch already resolved"),
    }
}

fn print_detail(order: &Order) {
    println!(
        "Order #{} ({})",
        order.id,
        order.order_no.as_deref().unwrap_or("-")
    );
    println!(
        "  Amount:  {}",
        order
            .amount
            .map(format_price)
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Status:  {}", order.status.as_deref().unwrap_or("-"));
    if let Some(product) = &order.product {
        println!(
            "  Product: #{} {}",
            product.id,
            product.title.as_deref().unwrap_or("-")
        );
    }
    println!("  Placed:  {}", format_timestamp(order.created_at.as_ref()));
    if let Some(tracking) = &order.tracking {
        println!(
            "  Tracking: {} {} ({})",
            tracking.carrier.as_deref().unwrap_or("-"),
            tracking.tracking_number.as_deref().unwrap_or("-"),
            tracking.status.as_deref().unwrap_or("-")
        );
    }
}
