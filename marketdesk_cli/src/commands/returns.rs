use anyhow::Result;
use clap::{Args, Subcommand};
use marketdesk_lib::display::format_timestamp;
use marketdesk_lib::types::ReturnRequest;
use marketdesk_lib::{
    Client, DetailState, DetailView, ListState, ListView, Query, ReturnRequestQuery,
};

use crate::output::{
    build_return_request_rows, print_json, print_page_footer, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct ReturnsArgs {
    #[command(subcommand)]
    pub command: ReturnsCommand,
}

#[derive(Subcommand)]
pub enum ReturnsCommand {
    /// List return requests
    List(ReturnsListArgs),
    /// Show one return request
    Show(ReturnShowArgs),
    /// Approve the return request attached to an order
    Approve(ReturnDecisionArgs),
    /// Reject the return request attached to an order
    Reject(ReturnDecisionArgs),
}

#[derive(Args)]
pub struct ReturnsListArgs {
    #[arg(long)]
    pub search: Option<String>,

    /// Lifecycle filter: pending, approved, or rejected
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: i64,

    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

#[derive(Args)]
pub struct ReturnShowArgs {
    /// Return request id
    pub id: i64,
}

#[derive(Args)]
pub struct ReturnDecisionArgs {
    /// Id of the order the return request belongs to
    pub order_id: i64,
}

pub async fn run(args: &ReturnsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ReturnsCommand::List(list) => run_list(list, client, format).await,
        ReturnsCommand::Show(show) => run_show(show, client, format).await,
        ReturnsCommand::Approve(decision) => {
            let envelope = client
                .approve_return_request(decision.order_id)
                .await
                .map_err(|e| anyhow::anyhow!(e.display_message()))?;
            println!(
                "{}",
                envelope
                    .message
                    .as_deref()
                    .unwrap_or("Return request approved")
            );
            Ok(())
        }
        ReturnsCommand::Reject(decision) => {
            let envelope = client
                .reject_return_request(decision.order_id)
                .await
                .map_err(|e| anyhow::anyhow!(e.display_message()))?;
            println!(
                "{}",
                envelope
                    .message
                    .as_deref()
                    .unwrap_or("Return request rejected")
            );
            Ok(())
        }
    }
}

async fn run_list(args: &ReturnsListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: ListView<ReturnRequest, Option<String>> = ListView::new(args.status.clone());
    let mut params = view.start();
    if let Some(search) = args.search.as_deref() {
        params = view.submit_search(search);
    }
    if args.page > 1 {
        params = view.set_page(args.page);
    }

    let mut query = ReturnRequestQuery::default()
        .with_page(params.page)
        .with_limit(args.limit);
    if !params.search.is_empty() {
        query = query.with_search(&params.search);
    }
    if let Some(status) = params.filter.as_deref() {
        query = query.with_status(status);
    }

    let outcome = client.get_return_requests(&query).await;
    view.resolve(
        outcome
            .map(|resp| (resp.data, resp.pagination))
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        ListState::Populated(_) => {
            print_rows(build_return_request_rows(view.rows()), format)?;
            print_page_footer(view.pagination(), format);
            Ok(())
        }
        ListState::Empty => {
            println!("No return requests found");
            Ok(())
        }
        ListState::Errored(message) => anyhow::bail!(message.clone()),
        ListState::Idle | ListState::Loading => unreachable!("fetch already resolved"),
    }
}

async fn run_show(args: &ReturnShowArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: DetailView<ReturnRequest> = DetailView::new();
    let outcome = client.get_return_request(args.id).await;
    view.resolve(
        outcome
            .map(|envelope| envelope.data)
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        DetailState::Loaded(request) => {
            match format {
                OutputFormat::Table => print_detail(request),
                _ => print_json(request)?,
            }
            Ok(())
        }
        DetailState::NotFound => {
            println!("Return request {} not found", args.id);
            Ok(())
        }
        DetailState::Failed(message) => anyhow::bail!(message.clone()),
        DetailState::Loading => unreachable!("fetch already resolved"),
    }
}

fn print_detail(request: &ReturnRequest) {
    println!("Return request #{}", request.id);
    println!(
        "  Order:  {}",
        request
            .order_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Reason: {}", request.reason.as_deref().unwrap_or("-"));
    println!("  Status: {}", request.status.as_deref().unwrap_or("-"));
    println!(
        "  Opened: {}",
        format_timestamp(request.created_at.as_ref())
    );
    if let Some(order) = &request.order {
        println!(
            "  Order No: {} ({})",
            order.order_no.as_deref().unwrap_or("-"),
            order.status.as_deref().unwrap_or("-")
        );
    }
}
