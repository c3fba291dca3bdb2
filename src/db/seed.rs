//! Reference inventory data and the idempotent seeding step.

use crate::db::sqlite::SqlitePool;
use crate::error::HubError;
use tracing::{debug, info};

pub struct SeedMake {
    pub name: &'static str,
    pub description: &'static str,
    pub models: &'static [SeedModel],
}

pub struct SeedModel {
    pub name: &'static str,
    pub body_type: &'static str,
    pub year: i64,
}

const fn model(name: &'static str, body_type: &'static str, year: i64) -> SeedModel {
    SeedModel {
        name,
        body_type,
        year,
    }
}

pub const INVENTORY: &[SeedMake] = &[
    SeedMake {
        name: "NISSAN",
        description: "Great cars. Japanese technology",
        models: &[
            model("Pathfinder", "SUV", 2023),
            model("Qashqai", "SUV", 2023),
            model("XTRAIL", "SUV", 2023),
        ],
    },
    SeedMake {
        name: "Mercedes",
        description: "Great cars. German technology",
        models: &[
            model("A-Class", "SUV", 2023),
            model("C-Class", "SUV", 2023),
            model("E-Class", "SUV", 2023),
        ],
    },
    SeedMake {
        name: "Audi",
        description: "Great cars. German technology",
        models: &[
            model("A4", "SUV", 2023),
            model("A5", "SUV", 2023),
            model("A6", "SUV", 2023),
        ],
    },
    SeedMake {
        name: "Kia",
        description: "Great cars. Korean technology",
        models: &[
            model("Sorrento", "SUV", 2023),
            model("Carnival", "SUV", 2023),
            model("Cerato", "Sedan", 2023),
        ],
    },
    SeedMake {
        name: "Toyota",
        description: "Great cars. Japanese technology",
        models: &[
            model("Corolla", "Sedan", 2023),
            model("Camry", "Sedan", 2023),
            model("Kluger", "SUV", 2023),
        ],
    },
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub makes_inserted: u64,
    pub models_inserted: u64,
}

/// Insert [`INVENTORY`] in one transaction. Rows that already exist are left
/// untouched, so repeated or concurrent runs never duplicate anything.
pub async fn seed_inventory(pool: &SqlitePool) -> Result<SeedReport, HubError> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for make in INVENTORY {
        let res = sqlx::query(
            "INSERT INTO car_makes (name, description) VALUES (?, ?) ON CONFLICT(name) DO NOTHING",
        )
        .bind(make.name)
        .bind(make.description)
        .execute(&mut *tx)
        .await?;
        report.makes_inserted += res.rows_affected();

        let rec: (i64,) = sqlx::query_as("SELECT id FROM car_makes WHERE name = ?")
            .bind(make.name)
            .fetch_one(&mut *tx)
            .await?;
        let make_id = rec.0;

        for m in make.models {
            let res = sqlx::query(
                r#"
                INSERT INTO car_models (car_make_id, name, body_type, year)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(car_make_id, name) DO NOTHING
                "#,
            )
            .bind(make_id)
            .bind(m.name)
            .bind(m.body_type)
            .bind(m.year)
            .execute(&mut *tx)
            .await?;
            report.models_inserted += res.rows_affected();
        }
        debug!(make = make.name, make_id, "seeded make");
    }

    tx.commit().await?;
    info!(
        makes = report.makes_inserted,
        models = report.models_inserted,
        "inventory seed applied"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::{InventoryStorage, connect};

    #[tokio::test]
    async fn seeding_twice_inserts_nothing_the_second_time() {
        let pool = connect("sqlite::memory:").await.unwrap();
        let first = seed_inventory(&pool).await.unwrap();
        let expected_models: usize = INVENTORY.iter().map(|m| m.models.len()).sum();
        assert_eq!(first.makes_inserted as usize, INVENTORY.len());
        assert_eq!(first.models_inserted as usize, expected_models);

        let second = seed_inventory(&pool).await.unwrap();
        assert_eq!(second, SeedReport::default());

        let storage = InventoryStorage::new(pool);
        assert_eq!(storage.count_makes().await.unwrap() as usize, INVENTORY.len());
        assert_eq!(storage.list_cars().await.unwrap().len(), expected_models);
    }

    #[tokio::test]
    async fn models_reference_their_make() {
        let pool = connect("sqlite::memory:").await.unwrap();
        seed_inventory(&pool).await.unwrap();

        let kia_models: Vec<(String, String, i64)> = sqlx::query_as(
            r#"
            SELECT m.name, m.body_type, m.year
            FROM car_models m
            JOIN car_makes k ON k.id = m.car_make_id
            WHERE k.name = ?
            ORDER BY m.id
            "#,
        )
        .bind("Kia")
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<&str> = kia_models.iter().map(|(name, _, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Sorrento", "Carnival", "Cerato"]);
        assert_eq!(kia_models[2].1, "Sedan");
        assert!(kia_models.iter().all(|(_, _, year)| *year == 2023));
    }
}
