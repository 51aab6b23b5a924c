//! Shift Pricing Engine for pharmacy shift postings
//!
//! This crate computes the dynamic hourly rate floor for a shift from how
//! far ahead it is, aggregates multi-date schedules into hours and pay,
//! validates schedule entries, and quotes cancellation penalties. The
//! [`api`] module exposes the same calculations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
