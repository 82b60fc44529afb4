//! # Voucher Store Contract
//!
//! The injectable persistence seam for voucher records.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Injection Explained                            │
//! │                                                                         │
//! │  VoucherService<S: VoucherStore>                                       │
//! │       │                                                                 │
//! │       ├── production: S = voucher_db::VoucherRepository (SQLite)       │
//! │       │                                                                 │
//! │       └── tests:      S = in-memory double recording every call        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Core logic never names a database                                   │
//! │  • Tests can assert "insert was never invoked"                         │
//! │  • Persistence can be swapped without touching business rules          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations are expected to keep `code` unique; the service checks
//! before inserting, and a store-level unique constraint backstops the
//! lookup-then-insert window.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{DiscountPercent, Voucher};

/// Persistence operations the voucher logic depends on.
///
/// All methods return [`CoreResult`]; infrastructure failures surface as
/// [`crate::error::CoreError::Store`], uniqueness/existence failures as
/// [`crate::error::CoreError::Conflict`].
#[async_trait]
pub trait VoucherStore: Send + Sync {
    /// Looks up a voucher by its code.
    ///
    /// ## Returns
    /// * `Ok(Some(Voucher))` - Voucher found
    /// * `Ok(None)` - No voucher with this code
    async fn get_voucher_by_code(&self, code: &str) -> CoreResult<Option<Voucher>>;

    /// Inserts a new, unused voucher and returns the stored record.
    ///
    /// The store assigns the identifier and timestamps; the returned
    /// voucher has `used == false`.
    async fn insert_voucher(&self, code: &str, discount: DiscountPercent) -> CoreResult<Voucher>;

    /// Marks the voucher with the given code as used.
    async fn use_voucher(&self, code: &str) -> CoreResult<()>;
}
