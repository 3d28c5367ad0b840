#![deny(warnings)]
//! Calculation tools for the Reckon ecosystem.
//!
//! This crate provides the `ToolHandler` trait, the five built-in calculation
//! handlers (arithmetic, year-over-year growth, month-over-month growth,
//! percentage, proportion), the fixed `HandlerRegistry` they are looked up in,
//! and the batch dispatcher that runs a heterogeneous list of calculations
//! with per-item failure isolation.
//!
//! Everything here is synchronous, stateless and side-effect-free; the
//! registry is safe to share across threads without locking.

/// Batch dispatch across the handler registry
pub mod dispatcher;
/// Argument-extraction fault types
pub mod error;
/// Shared display-string and rounding helpers
pub mod format;
/// The `ToolHandler` trait and typed argument accessors
pub mod handler;
/// Built-in calculation tools
pub mod ops;
/// Success/failure result union and per-tool payloads
pub mod outcome;
/// Fixed kind-to-handler registry
pub mod registry;

pub use dispatcher::{BatchItem, BatchOutcome, CalculationRequest, batch_calculate, dispatch};
pub use error::CalcError;
pub use handler::{Arguments, HandlerResult, ToolHandler};
pub use outcome::{ToolOutput, ToolResult};
pub use registry::HandlerRegistry;
