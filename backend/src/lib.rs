//! # Expense Tracker Backend
//!
//! Stores expense records in SQLite and serves them over a JSON HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! REST layer (rest)        routing, contract validation, CORS
//!     ↓
//! Domain (domain)          Expense / NewExpense
//!     ↓
//! Storage (db)             ExpenseStore, request-scoped Session
//! ```
//!
//! Request and response contracts live in the `shared` crate.

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod rest;

pub use config::Config;
pub use db::{ExpenseStore, Session};
pub use error::ApiError;
pub use rest::{create_router, AppState};
