use std::io;

use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use marketdesk_lib::display::{format_price, format_timestamp, status_label};
use marketdesk_lib::paginator::{page_items, range_text, PageItem};
use marketdesk_lib::types::{
    ContactEnquiry, Order, Pagination, Product, ReturnRequest, Review, TrustapTransaction, User,
    WalletTransaction,
};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    user_type: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Verified")]
    #[serde(rename = "Verified")]
    verified: String,
    #[tabled(rename = "Joined")]
    #[serde(rename = "Joined")]
    joined: String,
}

#[derive(Tabled, Serialize)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Images")]
    #[serde(rename = "Images")]
    images: usize,
    #[tabled(rename = "Listed")]
    #[serde(rename = "Listed")]
    listed: String,
}

#[derive(Tabled, Serialize)]
pub struct OrderRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Order No")]
    #[serde(rename = "Order No")]
    order_no: String,
    #[tabled(rename = "Buyer")]
    #[serde(rename = "Buyer")]
    buyer: String,
    #[tabled(rename = "Seller")]
    #[serde(rename = "Seller")]
    seller: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Placed")]
    #[serde(rename = "Placed")]
    placed: String,
}

#[derive(Tabled, Serialize)]
pub struct ReturnRequestRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Order")]
    #[serde(rename = "Order")]
    order_id: String,
    #[tabled(rename = "Reason")]
    #[serde(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Opened")]
    #[serde(rename = "Opened")]
    opened: String,
}

#[derive(Tabled, Serialize)]
pub struct EnquiryRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "From")]
    #[serde(rename = "From")]
    from: String,
    #[tabled(rename = "Subject")]
    #[serde(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    query_type: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Received")]
    #[serde(rename = "Received")]
    received: String,
}

#[derive(Tabled, Serialize)]
pub struct TransactionRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Transaction")]
    #[serde(rename = "Transaction")]
    transaction_id: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Payment")]
    #[serde(rename = "Payment")]
    pay_status: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
pub struct ReviewRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Comment")]
    #[serde(rename = "Comment")]
    comment: String,
    #[tabled(rename = "Reviewer")]
    #[serde(rename = "Reviewer")]
    reviewer: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
}

#[derive(Tabled, Serialize)]
pub struct WalletRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    tx_type: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
}

// -- Row builders --

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

pub fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            name: u.display_name(),
            email: or_dash(u.email.as_deref()),
            user_type: or_dash(u.user_type.as_deref()),
            status: status_label(u.status.as_deref()),
            verified: match u.is_verified {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => "-".to_string(),
            },
            joined: format_timestamp(u.created_at.as_ref()),
        })
        .collect()
}

pub fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            title: or_dash(p.title.as_deref()),
            price: p.price.map(format_price).unwrap_or_else(|| "-".to_string()),
            status: p
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            images: p.images.len(),
            listed: format_timestamp(p.created_at.as_ref()),
        })
        .collect()
}

pub fn build_order_rows(orders: &[Order]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.id,
            order_no: or_dash(o.order_no.as_deref()),
            buyer: o
                .buyer
                .as_ref()
                .map(|b| party_name(b.first_name.as_deref(), b.last_name.as_deref()))
                .unwrap_or_else(|| "-".to_string()),
            seller: o
                .seller
                .as_ref()
                .map(|s| party_name(s.first_name.as_deref(), s.last_name.as_deref()))
                .unwrap_or_else(|| "-".to_string()),
            amount: o.amount.map(format_price).unwrap_or_else(|| "-".to_string()),
            status: status_label(o.status.as_deref()),
            placed: format_timestamp(o.created_at.as_ref()),
        })
        .collect()
}

fn party_name(first: Option<&str>, last: Option<&str>) -> String {
    match (first, last) {
        (Some(f), Some(l)) => format!("{} {}", f, l),
        (Some(f), None) => f.to_string(),
        (None, Some(l)) => l.to_string(),
        (None, None) => "-".to_string(),
    }
}

pub fn build_return_request_rows(requests: &[ReturnRequest]) -> Vec<ReturnRequestRow> {
    requests
        .iter()
        .map(|r| ReturnRequestRow {
            id: r.id,
            order_id: r
                .order_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            reason: or_dash(r.reason.as_deref()),
            status: status_label(r.status.as_deref()),
            opened: format_timestamp(r.created_at.as_ref()),
        })
        .collect()
}

pub fn build_enquiry_rows(enquiries: &[ContactEnquiry]) -> Vec<EnquiryRow> {
    enquiries
        .iter()
        .map(|e| EnquiryRow {
            id: e.id,
            from: or_dash(e.name.as_deref()),
            subject: or_dash(e.subject.as_deref()),
            query_type: or_dash(e.query_type.as_deref()),
            status: status_label(e.status.as_deref()),
            received: format_timestamp(e.created_at.as_ref()),
        })
        .collect()
}

pub fn build_transaction_rows(transactions: &[TrustapTransaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id,
            transaction_id: or_dash(t.transaction_id.as_deref()),
            amount: t.amount.map(format_price).unwrap_or_else(|| "-".to_string()),
            status: status_label(t.status.as_deref()),
            pay_status: status_label(t.pay_status.as_deref()),
            created: format_timestamp(t.created_at.as_ref()),
        })
        .collect()
}

pub fn build_review_rows(reviews: &[Review]) -> Vec<ReviewRow> {
    reviews
        .iter()
        .map(|r| ReviewRow {
            id: r.id,
            rating: r
                .rating
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".to_string()),
            comment: or_dash(r.comment.as_deref()),
            reviewer: or_dash(r.reviewer_name.as_deref()),
            date: format_timestamp(r.created_at.as_ref()),
        })
        .collect()
}

pub fn build_wallet_rows(rows: &[WalletTransaction]) -> Vec<WalletRow> {
    rows.iter()
        .map(|t| WalletRow {
            id: t.id,
            tx_type: or_dash(t.tx_type.as_deref()),
            amount: t.amount.map(format_price).unwrap_or_else(|| "-".to_string()),
            description: or_dash(t.description.as_deref()),
            status: status_label(t.status.as_deref()),
            date: format_timestamp(t.created_at.as_ref()),
        })
        .collect()
}

// -- Printing --

pub fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table.with(Style::sharp());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the page bar and the "Showing X to Y of Z" footer under a table.
/// Hidden for single-page results and for non-table formats.
pub fn print_page_footer(meta: &Pagination, format: &OutputFormat) {
    if !matches!(format, OutputFormat::Table) {
        return;
    }
    let items = page_items(meta);
    if items.is_empty() {
        return;
    }
    println!("{}", render_page_bar(&items));
    println!("Showing {}", range_text(meta));
}

fn render_page_bar(items: &[PageItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Previous { enabled: true } => "Prev".to_string(),
            PageItem::Previous { enabled: false } => "(Prev)".to_string(),
            PageItem::Page { number, current: true } => format!("[{}]", number),
            PageItem::Page { number, current: false } => number.to_string(),
            PageItem::Ellipsis => "…".to_string(),
            PageItem::Next { enabled: true } => "Next".to_string(),
            PageItem::Next { enabled: false } => "(Next)".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
