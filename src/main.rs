#![allow(clippy::result_large_err)]

use chrono::Utc;
use dotenvy::dotenv;
use restaurant_backoffice::{
    config::{self, database},
    core::{
        ReorderAction, ReorderEngine,
        store::{CatalogStore, OrderStore},
    },
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; DATABASE_URL may also be set externally
    dotenv().ok();

    // 3. Load and validate the reorder policy
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Open the database, creating missing tables
    let db = database::init_database()
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    let engine = ReorderEngine::new(app_config.reorder);
    let now = Utc::now();

    // 5. Low-stock report
    let items = db.list_items().await?;
    let low: Vec<_> = items
        .iter()
        .filter(|entry| ReorderEngine::is_low_stock(&entry.item))
        .collect();
    info!(total = items.len(), low = low.len(), "Inventory checked");
    for entry in low {
        let item = &entry.item;
        let suggested = engine.suggested_quantity(item, ReorderAction::Immediate);
        match entry.suppliers.first() {
            Some(supplier) => info!(
                item = %item.name,
                quantity = item.quantity,
                threshold = item.min_threshold,
                suggested,
                unit = %item.unit,
                supplier = %supplier.name,
                "Low stock"
            ),
            None => warn!(item = %item.name, suggested, "Low stock, no supplier linked"),
        }
    }

    // 6. Open orders with projected arrival
    for entry in db.list_orders().await? {
        let order = &entry.order;
        if order.status.is_terminal() {
            continue;
        }
        let arrival = engine.project_arrival(order.order_date);
        info!(
            order_number = order.order_number,
            status = %order.status,
            total = order.total_cost,
            days_until_arrival = ReorderEngine::days_until_arrival(arrival, now),
            accepts_items = order.accepts_items_at(now),
            "Open purchase order"
        );
    }

    Ok(())
}
