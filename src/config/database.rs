//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated with `Schema::create_table_from_entity`, so the schema always
//! matches the entity definitions without hand-written SQL.

use crate::entities::{
    InventoryItem, InventorySupplier, PurchaseOrder, PurchaseOrderItem, Supplier, SupplierProduct,
};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, Schema, sea_query::TableCreateStatement,
};
use tracing::{debug, info, instrument};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/backoffice.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling back
/// to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

fn table_statements(schema: &Schema) -> [TableCreateStatement; 6] {
    // Parent tables before the tables that reference them.
    [
        schema.create_table_from_entity(InventoryItem),
        schema.create_table_from_entity(Supplier),
        schema.create_table_from_entity(SupplierProduct),
        schema.create_table_from_entity(InventorySupplier),
        schema.create_table_from_entity(PurchaseOrder),
        schema.create_table_from_entity(PurchaseOrderItem),
    ]
}

/// Creates all back-office tables from the entity definitions.
///
/// Fails if any table already exists; see [`ensure_tables`] for existing databases.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    for statement in &table_statements(&Schema::new(builder)) {
        db.execute(builder.build(statement)).await?;
    }
    Ok(())
}

/// Creates whichever back-office tables are missing.
pub async fn ensure_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    for mut statement in table_statements(&Schema::new(builder)) {
        statement.if_not_exists();
        db.execute(builder.build(&statement)).await?;
    }
    Ok(())
}

/// Connects to [`get_database_url`] and makes sure the schema is in place.
#[instrument]
pub async fn init_database() -> Result<DatabaseConnection> {
    let url = get_database_url();
    if let Some(dir) = sqlite_parent_dir(&url) {
        std::fs::create_dir_all(dir)?;
    }
    debug!("Initializing database connection to: {}", url);
    let db = Database::connect(&url).await?;

    info!("Database connection opened. Ensuring tables are created...");
    ensure_tables(&db).await?;
    Ok(db)
}

/// Directory holding a file-backed `SQLite` database, if the URL names one.
fn sqlite_parent_dir(url: &str) -> Option<&str> {
    let path = url.strip_prefix("sqlite://")?;
    let path = path.split('?').next()?;
    let (dir, _file) = path.rsplit_once('/')?;
    (!dir.is_empty()).then_some(dir)
}
