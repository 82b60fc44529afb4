//! # Voucher Repository
//!
//! Database operations for vouchers, and the concrete [`VoucherStore`]
//! implementation injected into the core service.
//!
//! ## Key Operations
//! - Lookup by code (the business key)
//! - Insert with store-assigned UUID
//! - Mark-used flag flip
//!
//! ## Record Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              How Rows Become Domain Types                               │
//! │                                                                         │
//! │  SELECT ... FROM vouchers                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  VoucherRecord (sqlx::FromRow, SQLite column types)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  voucher_core::Voucher (domain type, u8 discount)                      │
//! │                                                                         │
//! │  The core never sees a row; the record type absorbs the column         │
//! │  representation (INTEGER discount, INTEGER used flag).                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use voucher_core::store::VoucherStore;
use voucher_core::{CoreResult, DiscountPercent, Voucher};

/// Repository for voucher database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = VoucherRepository::new(pool);
///
/// // Lookup by code
/// let voucher = repo.get_by_code("WELCOME10").await?;
///
/// // Insert a new code
/// let voucher = repo.insert("WELCOME10", 10).await?;
/// ```
#[derive(Debug, Clone)]
pub struct VoucherRepository {
    pool: SqlitePool,
}

/// Row representation of a voucher.
///
/// SQLite stores the discount as INTEGER; the CHECK constraint keeps it
/// within 0-100, so the narrowing into the domain type cannot truncate.
#[derive(Debug, Clone, sqlx::FromRow)]
struct VoucherRecord {
    id: String,
    code: String,
    discount_percent: i64,
    used: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VoucherRecord> for Voucher {
    fn from(record: VoucherRecord) -> Self {
        Voucher {
            id: record.id,
            code: record.code,
            discount_percent: record.discount_percent as u8,
            used: record.used,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl VoucherRepository {
    /// Creates a new VoucherRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VoucherRepository { pool }
    }

    /// Gets a voucher by its code.
    ///
    /// ## Arguments
    /// * `code` - Voucher code (e.g., "WELCOME10")
    ///
    /// ## Returns
    /// * `Ok(Some(Voucher))` - Voucher found
    /// * `Ok(None)` - Voucher not found
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<Voucher>> {
        debug!(code = %code, "Looking up voucher");

        let record = sqlx::query_as::<_, VoucherRecord>(
            r#"
            SELECT id, code, discount_percent, used, created_at, updated_at
            FROM vouchers
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Voucher::from))
    }

    /// Inserts a new, unused voucher.
    ///
    /// The repository assigns the UUID and timestamps.
    ///
    /// ## Arguments
    /// * `code` - Voucher code (must be unique)
    /// * `discount_percent` - Whole percentage off, 0-100
    ///
    /// ## Returns
    /// * `Ok(Voucher)` - Inserted voucher with generated fields
    /// * `Err(DbError::UniqueViolation)` - Code already exists
    pub async fn insert(&self, code: &str, discount_percent: u8) -> DbResult<Voucher> {
        debug!(code = %code, discount = %discount_percent, "Inserting voucher");

        let now = Utc::now();
        let voucher = Voucher {
            id: generate_voucher_id(),
            code: code.to_string(),
            discount_percent,
            used: false,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO vouchers (id, code, discount_percent, used, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&voucher.id)
        .bind(&voucher.code)
        .bind(voucher.discount_percent as i64)
        .bind(voucher.used)
        .bind(voucher.created_at)
        .bind(voucher.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(voucher)
    }

    /// Marks a voucher as used.
    ///
    /// ## Arguments
    /// * `code` - Code of the voucher being redeemed
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No voucher with this code
    pub async fn mark_used(&self, code: &str) -> DbResult<()> {
        debug!(code = %code, "Marking voucher used");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE vouchers
            SET used = 1, updated_at = ?2
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Voucher", code));
        }

        Ok(())
    }

    /// Lists vouchers ordered by creation time.
    ///
    /// ## Usage
    /// Diagnostics and the seed binary's verification pass.
    pub async fn list(&self, limit: u32) -> DbResult<Vec<Voucher>> {
        let records = sqlx::query_as::<_, VoucherRecord>(
            r#"
            SELECT id, code, discount_percent, used, created_at, updated_at
            FROM vouchers
            ORDER BY created_at
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Voucher::from).collect())
    }

    /// Counts total vouchers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vouchers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// VoucherStore Implementation
// =============================================================================

/// The production store behind [`voucher_core::VoucherService`].
///
/// `DbError` converts into `CoreError` at this boundary: constraint
/// violations become the domain's Conflict, everything else surfaces as a
/// store failure.
#[async_trait]
impl VoucherStore for VoucherRepository {
    async fn get_voucher_by_code(&self, code: &str) -> CoreResult<Option<Voucher>> {
        Ok(self.get_by_code(code).await?)
    }

    async fn insert_voucher(&self, code: &str, discount: DiscountPercent) -> CoreResult<Voucher> {
        Ok(self.insert(code, discount.percent()).await?)
    }

    async fn use_voucher(&self, code: &str) -> CoreResult<()> {
        Ok(self.mark_used(code).await?)
    }
}

/// Helper to generate a new voucher ID.
///
/// ## Usage
/// ```rust,ignore
/// let id = generate_voucher_id();
/// ```
pub fn generate_voucher_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use voucher_core::{CoreError, Money, VoucherService};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    #[tokio::test]
    async fn test_insert_and_get_by_code() {
        let db = test_db().await;
        let repo = db.vouchers();

        let inserted = repo.insert("WELCOME10", 10).await.unwrap();
        assert_eq!(inserted.code, "WELCOME10");
        assert_eq!(inserted.discount_percent, 10);
        assert!(!inserted.used);

        let fetched = repo.get_by_code("WELCOME10").await.unwrap().unwrap();
        assert_eq!(fetched.id, inserted.id);
        assert_eq!(fetched.code, "WELCOME10");
        assert_eq!(fetched.discount_percent, 10);
        assert!(!fetched.used);
    }

    #[tokio::test]
    async fn test_get_by_code_missing_returns_none() {
        let db = test_db().await;
        let repo = db.vouchers();

        assert!(repo.get_by_code("NOPE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_code_hits_unique_index() {
        let db = test_db().await;
        let repo = db.vouchers();

        repo.insert("WELCOME10", 10).await.unwrap();
        let err = repo.insert("WELCOME10", 25).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_mark_used_flips_flag() {
        let db = test_db().await;
        let repo = db.vouchers();

        repo.insert("WELCOME10", 10).await.unwrap();
        repo.mark_used("WELCOME10").await.unwrap();

        let voucher = repo.get_by_code("WELCOME10").await.unwrap().unwrap();
        assert!(voucher.used);
    }

    #[tokio::test]
    async fn test_mark_used_missing_voucher() {
        let db = test_db().await;
        let repo = db.vouchers();

        let err = repo.mark_used("NOPE").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let db = test_db().await;
        let repo = db.vouchers();

        repo.insert("A1", 5).await.unwrap();
        repo.insert("B2", 10).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.list(10).await.unwrap().len(), 2);
    }

    /// End-to-end: the core service wired to the real SQLite store.
    #[tokio::test]
    async fn test_service_over_sqlite_store() {
        let db = test_db().await;
        let service = VoucherService::new(db.vouchers());

        service.create_voucher("WELCOME10", 10).await.unwrap();

        // Duplicate creation surfaces the domain Conflict
        let err = service.create_voucher("WELCOME10", 10).await.unwrap_err();
        match err {
            CoreError::Conflict { message } => assert_eq!(message, "Voucher already exist."),
            other => panic!("expected Conflict, got {other:?}"),
        }

        // Redemption computes the discount and consumes the voucher
        let redemption = service
            .apply_voucher("WELCOME10", Money::from_cents(15000))
            .await
            .unwrap();
        assert_eq!(redemption.final_amount_cents, 13500);
        assert!(redemption.applied);

        let voucher = db.vouchers().get_by_code("WELCOME10").await.unwrap().unwrap();
        assert!(voucher.used);
    }
}
