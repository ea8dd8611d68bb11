use std::collections::VecDeque;
use std::hash::Hash;

use log::{debug, warn};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error::ModelError;

use super::frequency_table::FrequencyTable;

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
	/// Opens an unbounded generation stream over this table.
	///
	/// Each call returns a fresh independent stream with its own recent
	/// history; pulling from one stream never affects another. Randomness
	/// comes from the thread-local generator; use [`stream_with_rng`] to
	/// inject a seedable one.
	///
	/// # Errors
	/// Returns [`ModelError::EmptyModel`] if the table has no contexts and
	/// [`ModelError::InvalidMixupPeriod`] for a zero `mixup_period`.
	///
	/// [`stream_with_rng`]: FrequencyTable::stream_with_rng
	pub fn stream(
		&self,
		mixup_period: Option<u64>,
	) -> Result<SymbolStream<'_, T, ThreadRng>, ModelError> {
		self.stream_with_rng(mixup_period, rand::rng())
	}

	/// Opens an unbounded generation stream driven by the given RNG.
	///
	/// With a seeded RNG the stream is fully reproducible: seed choices and
	/// weighted sampling both draw from `rng` alone.
	pub fn stream_with_rng<R: Rng>(
		&self,
		mixup_period: Option<u64>,
		rng: R,
	) -> Result<SymbolStream<'_, T, R>, ModelError> {
		SymbolStream::new(self, mixup_period, rng)
	}
}

/// A lazy, infinite stream of symbols drawn from a [`FrequencyTable`].
///
/// The stream emits the symbols of a uniformly chosen known context, then
/// repeatedly samples a successor of the trailing `order` symbols it has
/// emitted, weighted by observed frequency. Work happens only when the
/// consumer asks for the next element; bound the stream externally with
/// `Iterator::take` or similar.
///
/// ## Behavior
/// - A context with no recorded continuation reseeds the stream at a fresh
///   random context instead of ending it; each such recovery is counted.
/// - When a mixup period is set, a forced reseed replaces the ordinary
///   sampling step each time the number of emitted symbols reaches a
///   positive multiple of the period.
///
/// ## Invariants
/// - At every sampling step, the lookup context is exactly the trailing
///   `order` symbols most recently emitted by this same stream, in order
/// - `next` never returns `None`
#[derive(Debug)]
pub struct SymbolStream<'a, T, R> {
	table: &'a FrequencyTable<T>,

	rng: R,

	/// The trailing `order` emitted symbols, oldest first.
	recent: Vec<T>,

	/// Symbols queued by the latest seed and not yet emitted.
	pending: VecDeque<T>,

	mixup_period: Option<u64>,

	/// Emission count at the time of the latest mixup, so one multiple
	/// triggers at most one forced reseed.
	last_mixup: u64,

	emitted: u64,
	recoveries: u64,
	mixups: u64,
}

impl<'a, T: Eq + Hash + Clone, R: Rng> SymbolStream<'a, T, R> {
	fn new(
		table: &'a FrequencyTable<T>,
		mixup_period: Option<u64>,
		rng: R,
	) -> Result<Self, ModelError> {
		if mixup_period == Some(0) {
			return Err(ModelError::InvalidMixupPeriod);
		}
		if table.is_empty() {
			return Err(ModelError::EmptyModel);
		}

		let mut stream = Self {
			table,
			rng,
			recent: Vec::with_capacity(table.order()),
			pending: VecDeque::with_capacity(table.order()),
			mixup_period,
			last_mixup: 0,
			emitted: 0,
			recoveries: 0,
			mixups: 0,
		};
		stream.reseed();
		Ok(stream)
	}

	/// Queues the symbols of a uniformly chosen known context for emission.
	fn reseed(&mut self) {
		if let Some(context) = self.table.random_context(&mut self.rng) {
			self.pending.extend(context.iter().cloned());
		}
	}

	/// Pushes `symbol` through the recent-history buffer and returns it.
	fn emit(&mut self, symbol: T) -> T {
		let order = self.table.order();
		if order > 0 {
			if self.recent.len() == order {
				self.recent.remove(0);
			}
			self.recent.push(symbol.clone());
		}
		self.emitted += 1;
		symbol
	}

	fn mixup_due(&self) -> bool {
		match self.mixup_period {
			Some(period) => {
				self.emitted > 0
					&& self.emitted % period == 0
					&& self.emitted != self.last_mixup
			}
			None => false,
		}
	}

	/// Total number of symbols emitted so far.
	pub fn emitted(&self) -> u64 {
		self.emitted
	}

	/// Number of times a dead-end context forced a reseed.
	pub fn recoveries(&self) -> u64 {
		self.recoveries
	}

	/// Number of forced reseeds triggered by the mixup period.
	pub fn mixups(&self) -> u64 {
		self.mixups
	}
}

impl<T: Eq + Hash + Clone, R: Rng> Iterator for SymbolStream<'_, T, R> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		loop {
			// Drain the latest seed before sampling again
			if let Some(symbol) = self.pending.pop_front() {
				return Some(self.emit(symbol));
			}

			if self.mixup_due() {
				debug!("mixup after {} symbols, reseeding", self.emitted);
				self.mixups += 1;
				self.last_mixup = self.emitted;
				self.reseed();
				continue;
			}

			let next = self
				.table
				.successors(&self.recent)
				.and_then(|transitions| transitions.sample(&mut self.rng))
				.cloned();

			match next {
				Some(symbol) => return Some(self.emit(symbol)),
				None => {
					// Dead end: the trailing context has no recorded
					// continuation. Reseed and keep the stream alive.
					self.recoveries += 1;
					warn!("no recorded continuation for the current context, reseeding");
					self.reseed();
				}
			}
		}
	}
}
