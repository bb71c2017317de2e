//! # Seed Data Generator
//!
//! Fills an empty `fruits` table with a sample catalogue for development.
//!
//! ## Usage
//! ```bash
//! # Insert the whole catalogue
//! FRUIT_DB_USER=root cargo run -p fruit-db --bin seed
//!
//! # Insert only the first 10 fruits
//! FRUIT_DB_USER=root cargo run -p fruit-db --bin seed -- --count 10
//! ```
//!
//! The table must already exist (see `schema/fruits.sql`). Seeding is
//! skipped when the table holds any rows.

use std::env;
use std::time::Instant;

use fruit_core::NewFruit;
use fruit_db::{Database, DbConfig, FruitStore};

/// Sample fruits grouped by category: (name, price, stock).
const CATALOGUE: &[(&str, &[(&str, i64, i64)])] = &[
    (
        "Pome",
        &[
            ("Apple", 10000, 30),
            ("Pineapple", 20000, 15),
            ("Pear", 12000, 25),
            ("Quince", 18000, 5),
        ],
    ),
    (
        "Tropical",
        &[
            ("Mango", 15000, 50),
            ("Banana", 8000, 120),
            ("Papaya", 9000, 40),
            ("Rambutan", 14000, 60),
            ("Mangosteen", 25000, 20),
            ("Durian", 60000, 8),
            ("Salak", 11000, 45),
        ],
    ),
    (
        "Citrus",
        &[
            ("Orange", 13000, 70),
            ("Lemon", 16000, 35),
            ("Lime", 7000, 80),
            ("Pomelo", 22000, 12),
        ],
    ),
    (
        "Berry",
        &[
            ("Strawberry", 35000, 18),
            ("Blueberry", 55000, 10),
            ("Grape", 30000, 28),
        ],
    ),
    (
        "Melon",
        &[
            ("Watermelon", 24000, 14),
            ("Cantaloupe", 21000, 16),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let total: usize = CATALOGUE.iter().map(|(_, fruits)| fruits.len()).sum();
    let mut count = total;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(total);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Fruit Store Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of fruits to insert (default: {total})");
                println!("  -h, --help         Show this help message");
                println!();
                println!("Connection settings come from FRUIT_DB_* environment variables.");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = DbConfig::from_env()?;

    println!("🌱 Fruit Store Seed Data Generator");
    println!("==================================");
    println!("Database: {}", config.redacted_url());
    println!("Fruits:   {}", count.min(total));
    println!();

    let db = Database::new(config).await?;
    println!("✓ Connected to database");

    let repo = db.fruits();

    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Table already has {} fruits", existing);
        println!("  Skipping seed to avoid duplicates.");
        db.close().await;
        return Ok(());
    }

    println!();
    println!("Inserting fruits...");

    let start = Instant::now();
    let mut inserted = 0;

    let fruits = CATALOGUE.iter().flat_map(|(category, fruits)| {
        fruits.iter().map(move |(name, price, stock)| NewFruit {
            name: name.to_string(),
            category: category.to_string(),
            price: *price,
            stock: *stock,
        })
    });

    for fruit in fruits.take(count) {
        match repo.insert(&fruit).await {
            Ok(id) => {
                inserted += 1;
                println!("  #{:<4} {}", id, fruit.name);
            }
            Err(e) => eprintln!("Failed to insert {}: {}", fruit.name, e),
        }
    }

    println!();
    println!("✓ Inserted {} fruits in {:?}", inserted, start.elapsed());

    let apples = repo.search_by_name("apple").await?;
    println!("  Search 'apple': {} results", apples.row_count());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
