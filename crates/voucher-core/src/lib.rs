//! # voucher-core: Pure Business Logic for the Voucher Service
//!
//! This crate is the **heart** of the voucher feature. It contains all
//! business logic as pure functions over an injected store, with zero I/O
//! dependencies of its own.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Voucher Service Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 API Layer (external collaborator)               │   │
//! │  │    POST /vouchers ──► POST /vouchers/apply                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ voucher-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  service  │  │ validation│  │   │
//! │  │   │  Voucher  │  │   Money   │  │  create   │  │   rules   │  │   │
//! │  │   │ Redemption│  │ Discounts │  │  apply    │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • STORE VIA TRAIT          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ VoucherStore (trait)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  voucher-db (Database Layer)                    │   │
//! │  │           SQLite queries, migrations, repository                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Voucher, DiscountPercent, VoucherRedemption)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`store`] - The VoucherStore contract implemented by persistence
//! - [`service`] - The two voucher operations
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: Every rule is deterministic given the store contents
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use voucher_core::{Money, VoucherService};
//!
//! let service = VoucherService::new(store);
//!
//! // Mint a code
//! service.create_voucher("WELCOME10", 10).await?;
//!
//! // Redeem it against a $150.00 order
//! let redemption = service
//!     .apply_voucher("WELCOME10", Money::from_cents(15000))
//!     .await?;
//! assert_eq!(redemption.final_amount_cents, 13500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use voucher_core::Money` instead of
// `use voucher_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use service::VoucherService;
pub use store::VoucherStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum purchase amount, in cents, for a voucher to actually redeem.
///
/// ## Business Reason
/// Vouchers below this order size are quoted but not consumed: the caller
/// gets the would-be discount back with `applied == false`. Keeps codes
/// from being burned on trivial purchases.
pub const MIN_REDEEMABLE_AMOUNT_CENTS: i64 = 100;

/// Maximum length of a voucher code.
///
/// ## Business Reason
/// Codes are typed by customers at checkout; anything longer than this is
/// a paste error, not a code.
pub const MAX_CODE_LENGTH: usize = 50;

/// Maximum discount percentage.
///
/// A voucher can make an order free (100%), never negative.
pub const MAX_DISCOUNT_PERCENT: u8 = 100;
