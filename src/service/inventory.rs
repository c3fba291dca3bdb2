use crate::db::models::CarListing;
use crate::db::seed::seed_inventory;
use crate::db::sqlite::InventoryStorage;
use crate::error::HubError;
use tracing::info;

/// Flattened make/model listing. An empty make table is seeded first; the
/// seed is idempotent, so concurrent first requests cannot duplicate rows.
pub async fn list_cars(storage: &InventoryStorage) -> Result<Vec<CarListing>, HubError> {
    if storage.count_makes().await? == 0 {
        info!("car make store is empty; seeding inventory");
        seed_inventory(storage.pool()).await?;
    }
    storage.list_cars().await
}
