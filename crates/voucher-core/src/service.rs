//! # Voucher Service
//!
//! The two voucher operations: create a unique code, and apply a code to a
//! purchase amount.
//!
//! ## Application Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    apply_voucher Flow                                   │
//! │                                                                         │
//! │  apply_voucher("WELCOME10", $150.00)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.get_voucher_by_code("WELCOME10")                                │
//! │       │                                                                 │
//! │       ├── None → Conflict("Voucher does not exist.")                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  final = amount - (amount × discount / 100)   ← always computed        │
//! │       │                                                                 │
//! │       ├── amount ≥ $1.00 → store.use_voucher(code), applied = true     │
//! │       │                                                                 │
//! │       └── amount < $1.00 → voucher untouched,  applied = false         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  VoucherRedemption { amount, discount, final_amount, applied }         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::store::VoucherStore;
use crate::types::{DiscountPercent, Voucher, VoucherRedemption};
use crate::validation::{validate_amount_cents, validate_discount_percent, validate_voucher_code};
use crate::MIN_REDEEMABLE_AMOUNT_CENTS;

/// Voucher business logic over an injected store.
///
/// ## Usage
/// ```rust,ignore
/// let service = VoucherService::new(db.vouchers());
///
/// let voucher = service.create_voucher("WELCOME10", 10).await?;
/// let redemption = service.apply_voucher("WELCOME10", Money::from_cents(15000)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct VoucherService<S> {
    store: S,
}

impl<S: VoucherStore> VoucherService<S> {
    /// Creates a new VoucherService over the given store.
    pub fn new(store: S) -> Self {
        VoucherService { store }
    }

    /// Creates a new voucher with a unique code.
    ///
    /// ## Arguments
    /// * `code` - Discount code customers will type (unique)
    /// * `discount_percent` - Whole percentage off, 0-100
    ///
    /// ## Returns
    /// * `Ok(Voucher)` - Stored voucher with `used == false`
    /// * `Err(CoreError::Conflict)` - A voucher with this code already
    ///   exists; the store's insert is never invoked in this case
    /// * `Err(CoreError::Validation)` - Malformed code or out-of-range
    ///   discount
    pub async fn create_voucher(&self, code: &str, discount_percent: u8) -> CoreResult<Voucher> {
        validate_voucher_code(code)?;
        validate_discount_percent(discount_percent)?;

        if self.store.get_voucher_by_code(code).await?.is_some() {
            return Err(CoreError::conflict("Voucher already exist."));
        }

        self.store
            .insert_voucher(code, DiscountPercent::from_percent(discount_percent))
            .await
    }

    /// Applies a voucher to a purchase amount.
    ///
    /// The discounted total is always computed from the formula
    /// `amount - (amount × discount / 100)`, but the voucher is only
    /// consumed (marked used) when the amount reaches the redeemable
    /// minimum. Below the minimum the caller still sees what the discount
    /// would have been, with `applied == false`.
    ///
    /// ## Arguments
    /// * `code` - Discount code to redeem
    /// * `amount` - Purchase total the discount applies to
    ///
    /// ## Returns
    /// * `Ok(VoucherRedemption)` - Outcome including the final amount
    /// * `Err(CoreError::Conflict)` - No voucher with this code exists
    /// * `Err(CoreError::Validation)` - Non-positive amount
    pub async fn apply_voucher(&self, code: &str, amount: Money) -> CoreResult<VoucherRedemption> {
        validate_amount_cents(amount.cents())?;

        let voucher = self
            .store
            .get_voucher_by_code(code)
            .await?
            .ok_or_else(|| CoreError::conflict("Voucher does not exist."))?;

        // TODO: decide whether redeeming an already-used voucher should be
        // rejected; today `used` is never checked and the voucher re-applies.
        let discount = voucher.discount();
        let final_amount = amount.apply_discount(discount);

        let applied = amount.cents() >= MIN_REDEEMABLE_AMOUNT_CENTS;
        if applied {
            self.store.use_voucher(code).await?;
        }

        Ok(VoucherRedemption {
            amount_cents: amount.cents(),
            discount_percent: discount.percent(),
            final_amount_cents: final_amount.cents(),
            applied,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory store double that records every mutating call, so tests
    /// can assert not just outcomes but which collaborator operations ran.
    ///
    /// Clones share state, letting the test keep a handle while the
    /// service owns its copy.
    #[derive(Clone, Default)]
    struct RecordingStore {
        vouchers: Arc<Mutex<HashMap<String, Voucher>>>,
        insert_calls: Arc<Mutex<Vec<String>>>,
        use_calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingStore {
        fn with_voucher(code: &str, discount_percent: u8, used: bool) -> Self {
            let store = RecordingStore::default();
            let now = Utc::now();
            store.vouchers.lock().unwrap().insert(
                code.to_string(),
                Voucher {
                    id: format!("test-{code}"),
                    code: code.to_string(),
                    discount_percent,
                    used,
                    created_at: now,
                    updated_at: now,
                },
            );
            store
        }

        fn insert_count(&self) -> usize {
            self.insert_calls.lock().unwrap().len()
        }

        fn use_count(&self) -> usize {
            self.use_calls.lock().unwrap().len()
        }

        fn is_used(&self, code: &str) -> bool {
            self.vouchers.lock().unwrap()[code].used
        }
    }

    #[async_trait]
    impl VoucherStore for RecordingStore {
        async fn get_voucher_by_code(&self, code: &str) -> CoreResult<Option<Voucher>> {
            Ok(self.vouchers.lock().unwrap().get(code).cloned())
        }

        async fn insert_voucher(
            &self,
            code: &str,
            discount: DiscountPercent,
        ) -> CoreResult<Voucher> {
            self.insert_calls.lock().unwrap().push(code.to_string());
            let now = Utc::now();
            let voucher = Voucher {
                id: format!("test-{code}"),
                code: code.to_string(),
                discount_percent: discount.percent(),
                used: false,
                created_at: now,
                updated_at: now,
            };
            self.vouchers
                .lock()
                .unwrap()
                .insert(code.to_string(), voucher.clone());
            Ok(voucher)
        }

        async fn use_voucher(&self, code: &str) -> CoreResult<()> {
            self.use_calls.lock().unwrap().push(code.to_string());
            let mut vouchers = self.vouchers.lock().unwrap();
            let voucher = vouchers
                .get_mut(code)
                .ok_or_else(|| CoreError::conflict("Voucher does not exist."))?;
            voucher.used = true;
            voucher.updated_at = Utc::now();
            Ok(())
        }
    }

    fn assert_conflict(err: CoreError, expected: &str) {
        match err {
            CoreError::Conflict { message } => assert_eq!(message, expected),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_voucher_with_novel_code() {
        let store = RecordingStore::default();
        let service = VoucherService::new(store.clone());

        let voucher = service.create_voucher("WELCOME10", 10).await.unwrap();

        assert_eq!(voucher.code, "WELCOME10");
        assert_eq!(voucher.discount_percent, 10);
        assert!(!voucher.used);
        assert_eq!(store.insert_count(), 1);
    }

    #[tokio::test]
    async fn test_create_voucher_with_taken_code_conflicts() {
        let store = RecordingStore::with_voucher("WELCOME10", 10, false);
        let service = VoucherService::new(store.clone());

        let err = service.create_voucher("WELCOME10", 25).await.unwrap_err();

        assert_conflict(err, "Voucher already exist.");
        // The existence check must short-circuit before insert
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_create_voucher_rejects_malformed_code() {
        let store = RecordingStore::default();
        let service = VoucherService::new(store.clone());

        let err = service.create_voucher("not a code", 10).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_create_voucher_rejects_discount_over_100() {
        let store = RecordingStore::default();
        let service = VoucherService::new(store.clone());

        let err = service.create_voucher("BIGSALE", 101).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_apply_voucher_with_unknown_code_conflicts() {
        let store = RecordingStore::default();
        let service = VoucherService::new(store.clone());

        let err = service
            .apply_voucher("NOPE", Money::from_cents(15000))
            .await
            .unwrap_err();

        assert_conflict(err, "Voucher does not exist.");
        assert_eq!(store.use_count(), 0);
    }

    #[tokio::test]
    async fn test_apply_voucher_above_minimum_consumes_voucher() {
        let store = RecordingStore::with_voucher("WELCOME10", 10, false);
        let service = VoucherService::new(store.clone());

        let redemption = service
            .apply_voucher("WELCOME10", Money::from_cents(150))
            .await
            .unwrap();

        assert_eq!(redemption.amount_cents, 150);
        assert_eq!(redemption.discount_percent, 10);
        assert_eq!(redemption.final_amount_cents, 135);
        assert!(redemption.applied);
        assert_eq!(store.use_count(), 1);
        assert!(store.is_used("WELCOME10"));
    }

    #[tokio::test]
    async fn test_apply_voucher_below_minimum_does_not_consume() {
        let store = RecordingStore::with_voucher("FREEBIE", 0, false);
        let service = VoucherService::new(store.clone());

        let redemption = service
            .apply_voucher("FREEBIE", Money::from_cents(10))
            .await
            .unwrap();

        // Zero discount: the formula still yields the original amount
        assert_eq!(redemption.amount_cents, 10);
        assert_eq!(redemption.final_amount_cents, 10);
        assert!(!redemption.applied);
        assert_eq!(store.use_count(), 0);
        assert!(!store.is_used("FREEBIE"));
    }

    #[tokio::test]
    async fn test_apply_voucher_below_minimum_still_reports_formula() {
        let store = RecordingStore::with_voucher("HALF", 50, false);
        let service = VoucherService::new(store.clone());

        let redemption = service
            .apply_voucher("HALF", Money::from_cents(80))
            .await
            .unwrap();

        // Not applied, but the caller still sees what 50% would have been
        assert_eq!(redemption.final_amount_cents, 40);
        assert!(!redemption.applied);
        assert_eq!(store.use_count(), 0);
    }

    #[tokio::test]
    async fn test_apply_voucher_at_exact_minimum_applies() {
        let store = RecordingStore::with_voucher("EDGE", 10, false);
        let service = VoucherService::new(store.clone());

        let redemption = service
            .apply_voucher("EDGE", Money::from_cents(MIN_REDEEMABLE_AMOUNT_CENTS))
            .await
            .unwrap();

        assert!(redemption.applied);
        assert_eq!(redemption.final_amount_cents, 90);
    }

    #[tokio::test]
    async fn test_apply_voucher_rejects_non_positive_amount() {
        let store = RecordingStore::with_voucher("WELCOME10", 10, false);
        let service = VoucherService::new(store.clone());

        let err = service
            .apply_voucher("WELCOME10", Money::zero())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(store.use_count(), 0);
    }

    /// Documents the current re-application behavior: `used` is not
    /// consulted, so a used voucher discounts again.
    #[tokio::test]
    async fn test_apply_voucher_does_not_check_used_flag() {
        let store = RecordingStore::with_voucher("TWICE", 10, true);
        let service = VoucherService::new(store.clone());

        let redemption = service
            .apply_voucher("TWICE", Money::from_cents(200))
            .await
            .unwrap();

        assert!(redemption.applied);
        assert_eq!(redemption.final_amount_cents, 180);
        assert_eq!(store.use_count(), 1);
    }

    #[tokio::test]
    async fn test_final_amount_matches_formula_across_pairs() {
        for (amount, percent) in [
            (150_i64, 10_u8),
            (100, 0),
            (100, 100),
            (9999, 33),
            (250, 25),
            (1_000_000, 7),
        ] {
            let store = RecordingStore::with_voucher("FORMULA", percent, false);
            let service = VoucherService::new(store.clone());

            let redemption = service
                .apply_voucher("FORMULA", Money::from_cents(amount))
                .await
                .unwrap();

            let expected = amount - (amount * percent as i64) / 100;
            assert_eq!(
                redemption.final_amount_cents, expected,
                "amount {amount} at {percent}%"
            );
        }
    }
}
