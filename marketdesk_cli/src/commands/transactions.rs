use anyhow::Result;
use clap::Args;
use marketdesk_lib::types::TrustapTransaction;
use marketdesk_lib::{Client, ListState, ListView, Query, TransactionQuery};

use crate::output::{build_transaction_rows, print_page_footer, print_rows, OutputFormat};

#[derive(Args)]
pub struct TransactionsArgs {
    #[arg(long)]
    pub search: Option<String>,

    /// Claim/lifecycle status filter
    #[arg(long)]
    pub status: Option<String>,

    /// Payment status filter, separate from --status
    #[arg(long)]
    pub pay_status: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: i64,

    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

#[derive(Clone, Default)]
struct TransactionFilter {
    status: Option<String>,
    pay_status: Option<String>,
}

pub async fn run(args: &TransactionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let filter = TransactionFilter {
        status: args.status.clone(),
        pay_status: args.pay_status.clone(),
    };
    let mut view: ListView<TrustapTransaction, TransactionFilter> = ListView::new(filter);
    let mut params = view.start();
    if let Some(search) = args.search.as_deref() {
        params = view.submit_search(search);
    }
    if args.page > 1 {
        params = view.set_page(args.page);
    }

    let mut query = TransactionQuery::default()
        .with_page(params.page)
        .with_limit(args.limit);
    if !params.search.is_empty() {
        query = query.with_search(&params.search);
    }
    if let Some(status) = params.filter.status.as_deref() {
        query = query.with_status(status);
    }
    if let Some(pay_status) = params.filter.pay_status.as_deref() {
        query = query.with_pay_status(pay_status);
    }

    let outcome = client.get_transactions(&query).await;
    view.resolve(
        outcome
            .map(|resp| (resp.data, resp.pagination))
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        ListState::Populated(_) => {
            print_rows(build_transaction_rows(view.rows()), format)?;
            print_page_footer(view.pagination(), format);
            Ok(())
        }
        ListState::Empty => {
            println!("No transactions found");
            Ok(())
        }
        ListState::Errored(message) => anyhow::bail!(message.clone()),
        ListState::Idle | ListState::Loading => unreachable!("fetch already resolved"),
    }
}
