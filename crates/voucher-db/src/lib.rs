//! # voucher-db: Database Layer for the Voucher Service
//!
//! This crate provides the concrete voucher store. It uses SQLite for
//! storage with sqlx for async operations, and implements the
//! `VoucherStore` contract defined in `voucher-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Voucher Data Flow                                 │
//! │                                                                         │
//! │  VoucherService (voucher-core)                                         │
//! │       │ VoucherStore trait                                              │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    voucher-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (voucher.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ VoucherRepo   │    │ 001_vouchers │  │   │
//! │  │   │ Connection    │    │               │    │   .sql       │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (./vouchers.db, WAL mode)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types and the CoreError boundary mapping
//! - [`repository`] - The voucher repository / VoucherStore implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use voucher_core::{Money, VoucherService};
//! use voucher_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/vouchers.db")).await?;
//!
//! // Wire the core service to the SQLite store
//! let service = VoucherService::new(db.vouchers());
//! let redemption = service
//!     .apply_voucher("WELCOME10", Money::from_cents(15000))
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::voucher::VoucherRepository;
