use anyhow::Result;
use clap::{Args, Subcommand};
use marketdesk_lib::display::format_timestamp;
use marketdesk_lib::types::{ContactEnquiry, EnquiryReply};
use marketdesk_lib::{Client, DetailState, DetailView, EnquiryQuery, ListState, ListView, Query};

use crate::output::{build_enquiry_rows, print_json, print_page_footer, print_rows, OutputFormat};

#[derive(Args)]
pub struct EnquiriesArgs {
    #[command(subcommand)]
    pub command: EnquiriesCommand,
}

#[derive(Subcommand)]
pub enum EnquiriesCommand {
    /// List contact enquiries
    List(EnquiriesListArgs),
    /// Show one enquiry with its full message
    Show(EnquiryShowArgs),
    /// Send a staff reply to an enquiry
    Reply(EnquiryReplyArgs),
}

#[derive(Args)]
pub struct EnquiriesListArgs {
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// Enquiry category (e.g. order, account, other)
    #[arg(long = "type")]
    pub query_type: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: i64,

    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

#[derive(Args)]
pub struct EnquiryShowArgs {
    /// Enquiry id
    pub id: i64,
}

#[derive(Args)]
pub struct EnquiryReplyArgs {
    /// Enquiry id
    pub id: i64,

    /// Reply text sent to the enquirer
    #[arg(long)]
    pub message: String,
}

#[derive(Clone, Default)]
struct EnquiryFilter {
    status: Option<String>,
    query_type: Option<String>,
}

pub async fn run(args: &EnquiriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        EnquiriesCommand::List(list) => run_list(list, client, format).await,
        EnquiriesCommand::Show(show) => run_show(show, client, format).await,
        EnquiriesCommand::Reply(reply) => run_reply(reply, client, format).await,
    }
}

async fn run_list(args: &EnquiriesListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let filter = EnquiryFilter {
        status: args.status.clone(),
        query_type: args.query_type.clone(),
    };
    let mut view: ListView<ContactEnquiry, EnquiryFilter> = ListView::new(filter);
    let mut params = view.start();
    if let Some(search) = args.search.as_deref() {
        params = view.submit_search(search);
    }
    if args.page > 1 {
        params = view.set_page(args.page);
    }

    let mut query = EnquiryQuery::default()
        .with_page(params.page)
        .with_limit(args.limit);
    if !params.search.is_empty() {
        query = query.with_search(&params.search);
    }
    if let Some(status) = params.filter.status.as_deref() {
        query = query.with_status(status);
    }
    if let Some(query_type) = params.filter.query_type.as_deref() {
        query = query.with_query_type(query_type);
    }

    let outcome = client.get_enquiries(&query).await;
    view.resolve(
        outcome
            .map(|resp| (resp.data, resp.pagination))
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        ListState::Populated(_) => {
            print_rows(build_enquiry_rows(view.rows()), format)?;
            print_page_footer(view.pagination(), format);
            Ok(())
        }
        ListState::Empty => {
            println!("No enquiries found");
            Ok(())
        }
        ListState::Errored(message) => anyhow::bail!(message.clone()),
        ListState::Idle | ListState::Loading => unreachable!("fetch already resolved"),
    }
}

async fn run_show(args: &EnquiryShowArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: DetailView<ContactEnquiry> = DetailView::new();
    let outcome = client.get_enquiry(args.id).await;
    view.resolve(
        outcome
            .map(|envelope| envelope.data)
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        DetailState::Loaded(enquiry) => {
            match format {
                OutputFormat::Table => print_detail(enquiry),
                _ => print_json(enquiry)?,
            }
            Ok(())
        }
        DetailState::NotFound => {
            println!("Enquiry {} not found", args.id);
            Ok(())
        }
        DetailState::Failed(message) => anyhow::bail!(message.clone()),
        DetailState::Loading => unreachable!("fetch already resolved"),
    }
}

fn print_detail(enquiry: &ContactEnquiry) {
    println!(
        "Enquiry #{}: {}",
        enquiry.id,
        enquiry.subject.as_deref().unwrap_or("-")
    );
    println!(
        "  From:     {} <{}>",
        enquiry.name.as_deref().unwrap_or("-"),
        enquiry.email.as_deref().unwrap_or("-")
    );
    println!("  Type:     {}", enquiry.query_type.as_deref().unwrap_or("-"));
    println!("  Status:   {}", enquiry.status.as_deref().unwrap_or("-"));
    println!(
        "  Received: {}",
        format_timestamp(enquiry.created_at.as_ref())
    );
    if let Some(message) = enquiry.message.as_deref() {
        if !message.is_empty() {
            println!("  Message:  {}", message);
        }
    }
}

async fn run_reply(args: &EnquiryReplyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let reply = EnquiryReply {
        message: args.message.clone(),
    };
    let envelope = client
        .reply_to_enquiry(args.id, &reply)
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;

    match format {
        OutputFormat::Table => {
            println!("{}", envelope.message.as_deref().unwrap_or("Reply sent"))
        }
        _ => print_json(&envelope.data)?,
    }
    Ok(())
}
