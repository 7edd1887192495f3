//! # Domain Models
//!
//! The expense entity as the storage layer owns it. API contracts live in the
//! `shared` crate and are converted to and from these types by
//! [`crate::rest::mappers::ExpenseMapper`].

/// A persisted expense. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}
