use std::hash::Hash;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::ModelError;

use super::frequency_table::FrequencyTable;

/// Outcome of a next-symbol prediction.
///
/// `Observed` carries the most frequently recorded successor of the queried
/// context. `Fallback` means the context had no recorded continuation and
/// the carried symbol is a uniformly random element of the recency window
/// instead: a best-effort guess, distinguishable from a real prediction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prediction<T> {
	Observed(T),
	Fallback(T),
}

impl<T> Prediction<T> {
	/// The predicted symbol, however it was produced.
	pub fn symbol(&self) -> &T {
		match self {
			Self::Observed(symbol) | Self::Fallback(symbol) => symbol,
		}
	}

	/// Consumes the prediction and returns the symbol.
	pub fn into_inner(self) -> T {
		match self {
			Self::Observed(symbol) | Self::Fallback(symbol) => symbol,
		}
	}

	/// True when the symbol is a recovery guess rather than an observed
	/// continuation.
	pub fn is_fallback(&self) -> bool {
		matches!(self, Self::Fallback(_))
	}
}

/// Predicts the most likely next symbol after `history`.
///
/// Builds a throwaway frequency table of the given order from `history`,
/// looks up the trailing `order` symbols and returns their most frequent
/// recorded successor. The call is stateless: nothing survives between
/// invocations and `history` is never modified.
///
/// When the trailing context was never observed with a continuation (too
/// little history, or an order longer than any repeated pattern), the
/// prediction falls back to a uniformly random element of the trailing
/// window rather than failing.
///
/// For repeated queries against the same history, build one
/// [`FrequencyTable`] and call [`FrequencyTable::most_likely`] per query
/// instead.
///
/// # Errors
/// Returns [`ModelError::EmptyModel`] only when there is nothing to draw
/// from at all, i.e. `history` is empty.
pub fn predict_from_history<T, R>(
	history: &[T],
	order: usize,
	rng: &mut R,
) -> Result<Prediction<T>, ModelError>
where
	T: Eq + Hash + Clone,
	R: Rng + ?Sized,
{
	let table = FrequencyTable::build(history.iter().cloned(), order);
	let window = &history[history.len().saturating_sub(order)..];

	if let Some(symbol) = table.most_likely(window) {
		return Ok(Prediction::Observed(symbol.clone()));
	}

	// The trailing context was never observed with a continuation; guess
	// from the recency window instead of failing.
	debug!("context unseen in training history, guessing from the recency window");
	match window.choose(rng) {
		Some(symbol) => Ok(Prediction::Fallback(symbol.clone())),
		None => Err(ModelError::EmptyModel),
	}
}
