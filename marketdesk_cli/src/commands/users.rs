use anyhow::Result;
use clap::{Args, Subcommand};
use marketdesk_lib::display::{format_price, format_timestamp};
use marketdesk_lib::images::image_url;
use marketdesk_lib::paginator::Paginator;
use marketdesk_lib::types::{User, UserUpdate};
use marketdesk_lib::{
    Client, DetailState, DetailView, ListState, ListView, Query, ReviewsQuery, TabFetch, UserOrdersQuery,
    UserProductsQuery, UserQuery, UserTab, UserTabs,
};

use crate::config::Config;
use crate::output::{
    build_order_rows, build_product_rows, build_review_rows, build_user_rows, build_wallet_rows,
    print_json, print_page_footer, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List user accounts
    List(UsersListArgs),
    /// Show one user, optionally with one of its data tabs
    Show(UserShowArgs),
    /// Update a user's profile fields
    Update(UserUpdateArgs),
}

#[derive(Args)]
pub struct UsersListArgs {
    /// Free-text search over name and email
    #[arg(long)]
    pub search: Option<String>,

    /// Account type filter (e.g. buyer, seller)
    #[arg(long = "type")]
    pub user_type: Option<String>,

    #[arg(long, default_value_t = 1)]
    pub page: i64,

    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

#[derive(Args)]
pub struct UserShowArgs {
    /// User id
    pub id: i64,

    /// Data tab to load: products, orders, transactions,
    /// reviews-received, or reviews-given
    #[arg(long)]
    pub tab: Option<String>,

    /// Page within the selected tab
    #[arg(long, default_value_t = 1)]
    pub tab_page: i64,
}

#[derive(Args)]
pub struct UserUpdateArgs {
    /// User id
    pub id: i64,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub verified: Option<bool>,
}

pub async fn run(
    args: &UsersArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    match &args.command {
        UsersCommand::List(list) => run_list(list, client, format).await,
        UsersCommand::Show(show) => run_show(show, client, config, format).await,
        UsersCommand::Update(update) => run_update(update, client, format).await,
    }
}

async fn run_list(args: &UsersListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: ListView<User, Option<String>> = ListView::new(args.user_type.clone());
    let mut params = view.start();
    if let Some(search) = args.search.as_deref() {
        params = view.submit_search(search);
    }
    if args.page > 1 {
        params = view.set_page(args.page);
    }

    let mut query = UserQuery::default()
        .with_page(params.page)
        .with_limit(args.limit);
    if !params.search.is_empty() {
        query = query.with_search(&params.search);
    }
    if let Some(user_type) = params.filter.as_deref() {
        query = query.with_user_type(user_type);
    }

    let outcome = client.get_users(&query).await;
    view.resolve(
        outcome
            .map(|resp| (resp.data, resp.pagination))
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        ListState::Populated(_) => {
            print_rows(build_user_rows(view.rows()), format)?;
            print_page_footer(view.pagination(), format);
            Ok(())
        }
        ListState::Empty => {
            println!("No users found");
            Ok(())
        }
        ListState::Errored(message) => anyhow::bail!(message.clone()),
        ListState::Idle | ListState::Loading => unreachable!("fetch already resolved"),
    }
}

async fn run_show(
    args: &UserShowArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let mut view: DetailView<User> = DetailView::new();
    let outcome = client.get_user(args.id).await;
    view.resolve(
        outcome
            .map(|envelope| envelope.data)
            .map_err(|e| e.display_message()),
    );

    let user = match view.state() {
        DetailState::Loaded(user) => user,
        DetailState::NotFound => {
            println!("User {} not found", args.id);
            return Ok(());
        }
        DetailState::Failed(message) => anyhow::bail!(message.clone()),
        DetailState::Loading => unreachable!("fetch already resolved"),
    };

    let tab = match args.tab.as_deref() {
        None | Some("overview") => UserTab::Overview,
        Some("products") => UserTab::Products,
        Some("orders") => UserTab::Orders,
        Some("transactions") => UserTab::Transactions,
        Some("reviews-received") => UserTab::ReviewsReceived,
        Some("reviews-given") => UserTab::ReviewsGiven,
        Some(other) => anyhow::bail!(
            "Unknown tab '{}': expected products, orders, transactions, reviews-received, or reviews-given",
            other
        ),
    };

    if tab == UserTab::Overview {
        match format {
            OutputFormat::Table => {
                print_overview(user, config);
                // Escrow info is supplementary; a failure only hides the line.
                match client.get_user_trustap_info(args.id).await {
                    Ok(envelope) => {
                        if let Some(account) = envelope.data {
                            println!(
                                "  Escrow:   {} ({}), balance {}",
                                account.account_id.as_deref().unwrap_or("-"),
                                account.status.as_deref().unwrap_or("-"),
                                account
                                    .balance
                                    .map(format_price)
                                    .unwrap_or_else(|| "-".to_string())
                            );
                        }
                    }
                    Err(e) => tracing::warn!("Escrow info fetch failed: {}", e),
                }
            }
            _ => print_json(user)?,
        }
        return Ok(());
    }

    let mut tabs = UserTabs::new();
    let mut pending_balance = None;
    if let Some(fetch) = tabs.select(tab) {
        pending_balance = load_tab(fetch, &mut tabs, client, args.id).await;
    }
    if args.tab_page > 1 {
        if let Some(fetch) = tabs.set_page(args.tab_page) {
            load_tab(fetch, &mut tabs, client, args.id).await;
        }
    }

    match tab {
        UserTab::Overview => {}
        UserTab::Products => {
            print_rows(build_product_rows(tabs.products.rows()), format)?;
            print_page_footer(tabs.products.meta(), format);
        }
        UserTab::Orders => {
            print_rows(build_order_rows(tabs.orders.rows()), format)?;
            print_page_footer(tabs.orders.meta(), format);
        }
        UserTab::Transactions => {
            print_rows(build_wallet_rows(tabs.transactions.current()), format)?;
            print_page_footer(&tabs.transactions.meta(), format);
            if let Some(balance) = pending_balance {
                if matches!(format, OutputFormat::Table) {
                    println!("Pending balance: {}", format_price(balance));
                }
            }
        }
        UserTab::ReviewsReceived => {
            print_rows(build_review_rows(tabs.reviews_received.rows()), format)?;
            print_page_footer(tabs.reviews_received.meta(), format);
        }
        UserTab::ReviewsGiven => {
            print_rows(build_review_rows(tabs.reviews_given.rows()), format)?;
            print_page_footer(tabs.reviews_given.meta(), format);
        }
    }
    Ok(())
}

/// Runs one sub-collection fetch. A failure here leaves the tab empty
/// instead of failing the whole screen; only the user-info fetch is fatal.
/// Returns the wallet's pending balance when that tab was fetched.
async fn load_tab(
    fetch: TabFetch,
    tabs: &mut UserTabs,
    client: &Client,
    user_id: i64,
) -> Option<f64> {
    match fetch {
        TabFetch::Products { page } => {
            let query = UserProductsQuery::default().with_page(page);
            match client.get_user_products(user_id, &query).await {
                Ok(resp) => tabs.products.accept(resp.data, resp.pagination),
                Err(e) => {
                    tracing::warn!("Products tab fetch failed: {}", e);
                    tabs.products.accept(Vec::new(), None);
                }
            }
            None
        }
        TabFetch::Orders { page } => {
            let query = UserOrdersQuery::default().with_page(page);
            match client.get_user_orders(user_id, &query).await {
                Ok(resp) => tabs.orders.accept(resp.data, resp.pagination),
                Err(e) => {
                    tracing::warn!("Orders tab fetch failed: {}", e);
                    tabs.orders.accept(Vec::new(), None);
                }
            }
            None
        }
        TabFetch::WalletHistory => match client.get_user_transactions(user_id).await {
            Ok(history) => {
                let pending = history.pending_balance;
                tabs.accept_transactions(history.data);
                Some(pending)
            }
            Err(e) => {
                tracing::warn!("Wallet history fetch failed: {}", e);
                tabs.accept_transactions(Vec::new());
                None
            }
        },
        TabFetch::ReviewsReceived { page } => {
            let query = ReviewsQuery::default().with_page(page);
            match client.get_user_reviews_received(user_id, &query).await {
                Ok(resp) => tabs.reviews_received.accept(resp.data, resp.pagination),
                Err(e) => {
                    tracing::warn!("Received reviews tab fetch failed: {}", e);
                    tabs.reviews_received.accept(Vec::new(), None);
                }
            }
            None
        }
        TabFetch::ReviewsGiven { page } => {
            let query = ReviewsQuery::default().with_page(page);
            match client.get_user_reviews_given(user_id, &query).await {
                Ok(resp) => tabs.reviews_given.accept(resp.data, resp.pagination),
                Err(e) => {
                    tracing::warn!("Given reviews tab fetch failed: {}", e);
                    tabs.reviews_given.accept(Vec::new(), None);
                }
            }
            None
        }
    }
}

fn print_overview(user: &User, config: &Config) {
    println!("User #{}: {}", user.id, user.display_name());
    println!("  Email:    {}", user.email.as_deref().unwrap_or("-"));
    println!("  Phone:    {}", user.phone.as_deref().unwrap_or("-"));
    println!("  Type:     {}", user.user_type.as_deref().unwrap_or("-"));
    println!("  Status:   {}", user.status.as_deref().unwrap_or("-"));
    println!(
        "  Verified: {}",
        match user.is_verified {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        }
    );
    if let Some(rating) = user.rating {
        println!("  Rating:   {:.1}", rating);
    }
    println!("  Joined:   {}", format_timestamp(user.created_at.as_ref()));
    if let Some(path) = user.profile_img.as_deref() {
        if let Some(url) = image_url(&config.image_url, path) {
            println!("  Photo:    {}", url);
        }
    }
}

async fn run_update(args: &UserUpdateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let update = UserUpdate {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        status: args.status.clone(),
        is_verified: args.verified,
    };

    let envelope = client
        .update_user(args.id, &update)
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;

    match format {
        OutputFormat::Table => println!(
            "{}",
            envelope.message.as_deref().unwrap_or("User updated")
        ),
        _ => print_json(&envelope.data)?,
    }
    Ok(())
}
