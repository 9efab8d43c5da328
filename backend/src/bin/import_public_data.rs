//! Import public fitness measurement data into public_physical_records
//!
//! Usage: import-public-data <file.csv>
//!
//! The CSV must carry gender, age, category and measured value columns;
//! header names are matched loosely so differently-labelled exports
//! (e.g. "category_name", "measured_value") still import. The category
//! column may hold either a category id or a category name.

use anyhow::{bail, Context, Result};
use gymgrade_backend::config::AppConfig;
use gymgrade_backend::db;
use gymgrade_backend::repositories::{
    CreatePublicPhysicalRecord, PublicPhysicalRecordRepository, TestCategoryRepository,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{info, warn};

/// Column indexes resolved from the CSV header row
struct Columns {
    gender: usize,
    age: usize,
    category: usize,
    value: usize,
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<Columns> {
    let mut gender = None;
    let mut age = None;
    let mut category = None;
    let mut value = None;

    for (idx, header) in headers.iter().enumerate() {
        let name = header.trim().to_lowercase();
        if name.contains("gender") {
            gender = Some(idx);
        } else if name.contains("age") {
            age = Some(idx);
        } else if name.contains("category") || name.contains("item") {
            category = Some(idx);
        } else if name.contains("value") || name.contains("measure") {
            value = Some(idx);
        }
    }

    match (gender, age, category, value) {
        (Some(gender), Some(age), Some(category), Some(value)) => Ok(Columns {
            gender,
            age,
            category,
            value,
        }),
        _ => bail!(
            "CSV header must contain gender, age, category and value columns, got: {:?}",
            headers
        ),
    }
}

fn parse_gender(raw: &str) -> Result<String> {
    match raw.trim().to_uppercase().as_str() {
        "M" | "MALE" => Ok("M".to_string()),
        "F" | "FEMALE" => Ok("F".to_string()),
        other => bail!("unrecognized gender: {}", other),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CSV_FILE_PATH").ok())
        .context("usage: import-public-data <file.csv>")?;

    let config = AppConfig::load()?;
    let pool = db::create_pool(&config.database.url, config.database.max_connections).await?;

    let mut reader = csv::Reader::from_path(&path)
        .with_context(|| format!("failed to open {}", path))?;
    let columns = resolve_columns(reader.headers()?)?;

    // Category column accepts either ids or names
    let categories = TestCategoryRepository::list(&pool).await?;
    let by_name: HashMap<String, i32> = categories
        .iter()
        .map(|c| (c.name.trim().to_lowercase(), c.id))
        .collect();
    let known_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();

    let mut imported = 0u64;
    let mut skipped = 0u64;

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let row = line + 2; // header occupies line 1

        let result = async {
            let gender = parse_gender(&record[columns.gender])?;
            let age: i32 = record[columns.age]
                .trim()
                .parse()
                .context("bad age value")?;
            let value: Decimal = record[columns.value]
                .trim()
                .parse()
                .context("bad measured value")?;

            let raw_category = record[columns.category].trim();
            let category_id = match raw_category.parse::<i32>() {
                Ok(id) if known_ids.contains(&id) => id,
                _ => *by_name
                    .get(&raw_category.to_lowercase())
                    .with_context(|| format!("unknown category: {}", raw_category))?,
            };

            PublicPhysicalRecordRepository::create(
                &pool,
                CreatePublicPhysicalRecord {
                    gender,
                    age,
                    category_id,
                    measured_value: value,
                },
            )
            .await?;

            Ok::<(), anyhow::Error>(())
        }
        .await;

        match result {
            Ok(()) => imported += 1,
            Err(e) => {
                warn!(row, "skipping row: {:#}", e);
                skipped += 1;
            }
        }
    }

    info!(imported, skipped, "import finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_loose_header_names() {
        let headers = csv::StringRecord::from(vec![
            "Gender",
            "AGE",
            "category_name",
            "measured_value",
        ]);
        let columns = resolve_columns(&headers).unwrap();
        assert_eq!(columns.gender, 0);
        assert_eq!(columns.age, 1);
        assert_eq!(columns.category, 2);
        assert_eq!(columns.value, 3);
    }

    #[test]
    fn rejects_missing_columns() {
        let headers = csv::StringRecord::from(vec!["gender", "age"]);
        assert!(resolve_columns(&headers).is_err());
    }

    #[test]
    fn normalizes_gender_spellings() {
        assert_eq!(parse_gender("male").unwrap(), "M");
        assert_eq!(parse_gender(" F ").unwrap(), "F");
        assert!(parse_gender("x").is_err());
    }
}
