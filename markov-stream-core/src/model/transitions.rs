use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use serde::{Deserialize, Serialize};


/// Observed successors of a single context.
///
/// A `Transitions` value is one node of the frequency model: for every
/// symbol ever seen immediately after its context it stores the number of
/// times that continuation was observed.
///
/// Conceptually this is a node in a Markov chain where outgoing edges are
/// weighted by their number of observations.
///
/// ## Responsibilities
/// - Accumulate successor occurrences while the table is built
/// - Sample a successor with probability proportional to its count
/// - Return the most frequently observed successor
///
/// ## Invariants
/// - Each recorded count is strictly positive
/// - `seen` holds every distinct successor exactly once, in the order each
///   was first observed; sampling and arg-max iterate in that order, so
///   outcomes are reproducible under a seeded RNG
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Eq + Hash"))]
pub struct Transitions<T> {
	/// Occurrence count per successor symbol.
	counts: HashMap<T, usize>,
	/// Distinct successors in first-observed order.
	seen: Vec<T>,
}

impl<T: Eq + Hash + Clone> Transitions<T> {
	/// Creates an empty successor multiset.
	pub(crate) fn new() -> Self {
		Self {
			counts: HashMap::new(),
			seen: Vec::new(),
		}
	}

	/// Records one occurrence of a transition toward `successor`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise a new transition is created with an initial count of 1.
	pub(crate) fn record(&mut self, successor: T) {
		if !self.counts.contains_key(&successor) {
			self.seen.push(successor.clone());
		}
		*self.counts.entry(successor).or_insert(0) += 1;
	}

	/// Number of times `symbol` was observed after this context.
	pub fn count(&self, symbol: &T) -> usize {
		self.counts.get(symbol).copied().unwrap_or(0)
	}

	/// Total number of observations across all successors.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Distinct successors in first-observed order.
	pub fn symbols(&self) -> impl Iterator<Item = &T> {
		self.seen.iter()
	}

	/// Samples a successor using weighted random sampling.
	///
	/// The probability of selecting a symbol is proportional to its
	/// occurrence count: count(s) / total().
	///
	/// This method performs an O(n) cumulative subtraction over the
	/// successors in first-observed order.
	///
	/// Returns `None` if no successor was ever recorded.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
		let total = self.total();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for symbol in &self.seen {
			let occurrence = self.count(symbol);
			if r < occurrence {
				return Some(symbol);
			}
			r -= occurrence;
		}

		// Unreachable: r starts below the sum of all occurrences
		None
	}

	/// The successor with the highest occurrence count.
	///
	/// Ties break toward the successor that was observed first, so the
	/// result is deterministic for a given training sequence.
	///
	/// Returns `None` if no successor was ever recorded.
	pub fn most_frequent(&self) -> Option<&T> {
		let mut best: Option<(&T, usize)> = None;
		for symbol in &self.seen {
			let occurrence = self.count(symbol);
			match best {
				Some((_, count)) if occurrence <= count => (),
				_ => best = Some((symbol, occurrence)),
			}
		}
		best.map(|(symbol, _)| symbol)
	}
}

impl<T: Eq + Hash> PartialEq for Transitions<T> {
	fn eq(&self, other: &Self) -> bool {
		self.counts == other.counts && self.seen == other.seen
	}
}

impl<T: Eq + Hash> Eq for Transitions<T> {}
