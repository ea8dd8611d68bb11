use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::transitions::Transitions;

/// A variable-order frequency model over a sequence of symbols.
///
/// The table maps every context (an ordered run of exactly `order` symbols)
/// to the multiset of symbols observed immediately after it in the training
/// sequence. It is built once and read-only afterward, so one table can be
/// shared by any number of generation streams and prediction calls.
///
/// # Responsibilities
/// - Build the model from a training sequence in a single pass
/// - Look up the observed successors of a context
/// - Pick a uniform random known context to seed generation
///
/// # Invariants
/// - Every context key holds exactly `order` symbols
/// - For any context, the sum of its successor counts equals the number of
///   times that context appeared as a length-`order` prefix immediately
///   followed by a successor in the training sequence
/// - `known` lists every context key exactly once, in first-observed order
///
/// A table with zero contexts is valid but cannot seed generation.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Eq + Hash"))]
pub struct FrequencyTable<T> {
	/// The context length the model conditions on.
	order: usize,

	/// Mapping from a fixed-length context to its observed successors.
	contexts: HashMap<Vec<T>, Transitions<T>>,

	/// Context keys in first-observed order, for uniform seed choices that
	/// stay reproducible under a seeded RNG.
	known: Vec<Vec<T>>,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
	/// Builds a frequency table of the given order from a training sequence.
	///
	/// Slides a window of `order + 1` symbols across the input with stride
	/// one: the first `order` elements form the context, the last is the
	/// successor. Each window increments one successor count.
	///
	/// The whole input is consumed in a single pass over one bounded buffer;
	/// the input is never re-scanned.
	///
	/// # Notes
	/// - An input shorter than `order + 1` symbols yields an empty table,
	///   not an error.
	/// - Identical input and order always produce an identical table,
	///   including iteration orders.
	pub fn build<I>(symbols: I, order: usize) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut table = Self {
			order,
			contexts: HashMap::new(),
			known: Vec::new(),
		};

		let mut window: VecDeque<T> = VecDeque::with_capacity(order + 1);
		for symbol in symbols {
			window.push_back(symbol);
			if window.len() < order + 1 {
				continue;
			}
			let context: Vec<T> = window.iter().take(order).cloned().collect();
			if let Some(successor) = window.back() {
				table.record(context, successor.clone());
			}
			window.pop_front();
		}

		table
	}

	/// Records one observation of `successor` following `context`.
	fn record(&mut self, context: Vec<T>, successor: T) {
		if !self.contexts.contains_key(&context) {
			self.known.push(context.clone());
		}
		self.contexts
			.entry(context)
			.or_insert_with(Transitions::new)
			.record(successor);
	}

	/// The context length this table conditions on.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct contexts in the table.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// The observed successors of `context`, if that context ever appeared
	/// in the training sequence with a continuation.
	pub fn successors(&self, context: &[T]) -> Option<&Transitions<T>> {
		self.contexts.get(context)
	}

	/// The most frequently observed successor of `context`.
	///
	/// Ties break toward the successor observed first. Returns `None` when
	/// the context is unknown.
	pub fn most_likely(&self, context: &[T]) -> Option<&T> {
		self.contexts.get(context)?.most_frequent()
	}

	/// Picks one known context uniformly at random.
	///
	/// Useful for starting or reseeding a generation stream.
	/// Returns `None` if the table has no contexts.
	pub fn random_context<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&[T]> {
		self.known.choose(rng).map(Vec::as_slice)
	}

	/// Iterates over every context and its successors, in first-observed
	/// context order.
	pub fn contexts(&self) -> impl Iterator<Item = (&[T], &Transitions<T>)> {
		self.known
			.iter()
			.filter_map(|context| Some((context.as_slice(), self.contexts.get(context)?)))
	}
}

impl<T: Eq + Hash> PartialEq for FrequencyTable<T> {
	fn eq(&self, other: &Self) -> bool {
		self.order == other.order && self.contexts == other.contexts && self.known == other.known
	}
}

impl<T: Eq + Hash> Eq for FrequencyTable<T> {}
