//! Top-level module for the frequency modeling system.
//!
//! The model is split along its lifecycle:
//! - [`frequency_table`] builds the read-only model from a training sequence
//! - [`stream`] turns a table into an unbounded generation stream
//! - [`predictor`] answers one-shot most-likely-next-symbol queries
//! - [`transitions`] holds the per-context successor bookkeeping

/// Frequency table built once from a training sequence.
///
/// Maps every fixed-length context to the multiset of symbols observed
/// immediately after it, and picks uniform random contexts for seeding.
pub mod frequency_table;

/// One-shot most-likely-next-symbol prediction over a recent history.
pub mod predictor;

/// Lazy, unbounded generation stream with mixup and dead-end recovery.
pub mod stream;

/// Observed successors of a single context, with weighted random sampling.
pub mod transitions;
