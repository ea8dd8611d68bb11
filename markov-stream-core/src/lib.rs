//! Variable-order frequency modeling over sequences of arbitrary symbols.
//!
//! This crate provides a modular frequency-model system including:
//! - Frequency tables over any `Eq + Hash + Clone` symbol type
//! - Lazy, unbounded stochastic generation with periodic reseeding
//! - Most-likely-next-symbol prediction with an observable fallback
//!
//! A table is built once from a finite training sequence and is read-only
//! afterward, so one table can feed any number of independent generation
//! streams and prediction calls.

/// Error types shared by stream construction and prediction.
pub mod error;

/// Core frequency model: table builder, stream generator and predictor.
///
/// This module exposes the model types; successor bookkeeping lives in its
/// own submodule because it appears in the public lookup API.
pub mod model;
