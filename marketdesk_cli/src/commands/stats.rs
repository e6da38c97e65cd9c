use anyhow::Result;
use marketdesk_lib::display::format_price;
use marketdesk_lib::Client;

use crate::output::{print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let envelope = client
        .get_dashboard_stats()
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;
    let stats = envelope.data.unwrap_or_default();

    match format {
        OutputFormat::Table => {
            println!("Users:                   {}", stats.total_users);
            println!("Products:                {}", stats.total_products);
            println!("Orders:                  {}", stats.total_orders);
            println!("Revenue:                 {}", format_price(stats.total_revenue));
            println!("Pending return requests: {}", stats.pending_return_requests);
            println!("Open enquiries:          {}", stats.open_enquiries);
        }
        _ => print_json(&stats)?,
    }
    Ok(())
}
