use markov_stream_core::model::frequency_table::FrequencyTable;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn chars(s: &str) -> Vec<char> {
	s.chars().collect()
}

#[test]
fn concrete_counts_for_order_one() {
	// a b a b a c
	let table = FrequencyTable::build(chars("ababac"), 1);

	assert_eq!(table.len(), 2);
	assert_eq!(table.order(), 1);

	let after_a = table.successors(&['a']).unwrap();
	assert_eq!(after_a.count(&'b'), 2);
	assert_eq!(after_a.count(&'c'), 1);
	assert_eq!(after_a.total(), 3);
	assert_eq!(after_a.len(), 2);

	let after_b = table.successors(&['b']).unwrap();
	assert_eq!(after_b.count(&'a'), 2);
	assert_eq!(after_b.total(), 2);
	assert_eq!(after_b.len(), 1);
}

#[test]
fn counts_are_conserved() {
	let corpus = chars("the quick brown fox jumps over the lazy dog the end");
	for order in 0..4 {
		let table = FrequencyTable::build(corpus.iter().cloned(), order);
		for (context, transitions) in table.contexts() {
			let occurrences = corpus
				.windows(order + 1)
				.filter(|window| &window[..order] == context)
				.count();
			assert_eq!(
				transitions.total(),
				occurrences,
				"order {order}, context {context:?}"
			);
		}
	}
}

#[test]
fn building_is_deterministic() {
	let corpus = chars("mississippi");
	let first = FrequencyTable::build(corpus.iter().cloned(), 2);
	let second = FrequencyTable::build(corpus.iter().cloned(), 2);
	assert_eq!(first, second);
}

#[test]
fn input_shorter_than_window_yields_empty_table() {
	assert!(FrequencyTable::<char>::build([], 0).is_empty());
	assert!(FrequencyTable::<char>::build([], 3).is_empty());
	assert!(FrequencyTable::build(chars("ab"), 2).is_empty());
	assert!(!FrequencyTable::build(chars("abc"), 2).is_empty());
}

#[test]
fn order_zero_uses_a_single_empty_context() {
	let table = FrequencyTable::build(chars("aab"), 0);

	assert_eq!(table.len(), 1);
	let all = table.successors(&[]).unwrap();
	assert_eq!(all.count(&'a'), 2);
	assert_eq!(all.count(&'b'), 1);
}

#[test]
fn most_likely_breaks_ties_toward_first_observed() {
	// 'b' and 'c' both follow 'a' once; 'b' was seen first
	let table = FrequencyTable::build(chars("abac"), 1);
	assert_eq!(table.most_likely(&['a']), Some(&'b'));
}

#[test]
fn most_likely_is_none_for_unknown_contexts() {
	let table = FrequencyTable::build(chars("ababac"), 1);
	assert_eq!(table.most_likely(&['z']), None);
}

#[test]
fn random_context_is_a_known_context() {
	let table = FrequencyTable::build(chars("abracadabra"), 2);
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..20 {
		let context = table.random_context(&mut rng).unwrap();
		assert_eq!(context.len(), 2);
		assert!(table.successors(context).is_some());
	}
}

#[test]
fn random_context_is_none_on_an_empty_table() {
	let table = FrequencyTable::<char>::build([], 1);
	let mut rng = StdRng::seed_from_u64(7);
	assert!(table.random_context(&mut rng).is_none());
}

#[test]
fn sampling_follows_observed_frequencies() {
	let table = FrequencyTable::build(chars("ababac"), 1);
	let after_a = table.successors(&['a']).unwrap();

	let mut rng = StdRng::seed_from_u64(42);
	let draws = 3000;
	let bs = (0..draws)
		.filter(|_| after_a.sample(&mut rng) == Some(&'b'))
		.count();

	// Expect roughly two thirds of the draws to land on 'b'
	assert!((1800..=2200).contains(&bs), "got {bs} 'b' draws out of {draws}");
}

#[test]
fn successor_iteration_keeps_first_observed_order() {
	let table = FrequencyTable::build(chars("ababac"), 1);
	let after_a = table.successors(&['a']).unwrap();
	let in_order: Vec<&char> = after_a.symbols().collect();
	assert_eq!(in_order, [&'b', &'c']);
}
