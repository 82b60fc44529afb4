//! # Seed Data Generator
//!
//! Populates the database with test vouchers for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 vouchers (default)
//! cargo run -p voucher-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p voucher-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p voucher-db --bin seed -- --db ./data/vouchers.db
//! ```
//!
//! ## Generated Vouchers
//! Creates voucher codes across marketing campaigns:
//! - Welcome offers (WELCOME-…)
//! - Seasonal sales (SUMMER-…, WINTER-…)
//! - Loyalty rewards (VIP-…)
//!
//! Each voucher has:
//! - Unique code: `{CAMPAIGN}{PERCENT}-{INDEX}`
//! - Discount tier: 5%, 10%, 25%, or 50%
//! - used = false

use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voucher_db::{Database, DbConfig};

/// Campaign prefixes for realistic test codes
const CAMPAIGNS: &[&str] = &["WELCOME", "SUMMER", "WINTER", "VIP", "FLASH"];

/// Discount tiers in whole percent
const DISCOUNT_TIERS: &[u8] = &[5, 10, 25, 50];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; default to info with query-level detail from
    // this workspace
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,voucher=debug,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./vouchers_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Voucher Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of vouchers to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./vouchers_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Voucher Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!("Vouchers: {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing vouchers
    let existing = db.vouchers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} vouchers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate vouchers
    println!();
    println!("Generating vouchers...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: for index in 0.. {
        for campaign in CAMPAIGNS {
            if generated >= count {
                break 'outer;
            }

            let discount = DISCOUNT_TIERS[(index + generated) % DISCOUNT_TIERS.len()];
            let code = format!("{}{}-{:04}", campaign, discount, index);

            if let Err(e) = db.vouchers().insert(&code, discount).await {
                eprintln!("Failed to insert {}: {}", code, e);
                continue;
            }

            generated += 1;

            if generated % 100 == 0 {
                println!("  Generated {} vouchers...", generated);
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} vouchers in {:?}", generated, elapsed);

    // Verify lookups work against the fresh data
    println!();
    println!("Verifying lookups...");
    let sample = db.vouchers().list(5).await?;
    for voucher in &sample {
        let found = db.vouchers().get_by_code(&voucher.code).await?;
        info!(code = %voucher.code, found = found.is_some(), "Lookup verified");
        println!(
            "  {} → {}% off, used: {}",
            voucher.code, voucher.discount_percent, voucher.used
        );
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
