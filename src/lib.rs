//! Faculty Qualification Evaluation Engine
//!
//! This crate decides whether a faculty member's intellectual-contribution and
//! professional-activity record satisfies category-specific accreditation
//! requirements for a given evaluation window, after applying exemptions, and
//! projects that status across rolling multi-year windows to flag future risk.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
