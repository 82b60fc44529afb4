//! # Repository Module
//!
//! Database repository implementations for the voucher store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  VoucherService (voucher-core)                                         │
//! │       │                                                                 │
//! │       │  store.get_voucher_by_code("WELCOME10")                        │
//! │       ▼                                                                 │
//! │  VoucherRepository                                                     │
//! │  ├── get_by_code(&self, code)                                          │
//! │  ├── insert(&self, code, discount_percent)                             │
//! │  └── mark_used(&self, code)                                            │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • The core tests against a double, not this crate                     │
//! │  • SQL is isolated in one place                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`VoucherRepository`] - Voucher lookup, insert, and mark-used
//!
//! [`VoucherRepository`]: voucher::VoucherRepository

pub mod voucher;
