use markov_stream_core::error::ModelError;
use markov_stream_core::model::frequency_table::FrequencyTable;
use markov_stream_core::model::predictor::{Prediction, predict_from_history};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn chars(s: &str) -> Vec<char> {
	s.chars().collect()
}

#[test]
fn predicts_the_most_frequent_continuation() {
	// a b a b a: 'b' followed 'a' twice, nothing else ever followed 'a'
	let history = chars("ababa");
	let mut rng = StdRng::seed_from_u64(1);

	let prediction = predict_from_history(&history, 1, &mut rng).unwrap();
	assert_eq!(prediction, Prediction::Observed('b'));
	assert!(!prediction.is_fallback());
}

#[test]
fn unseen_context_falls_back_to_the_recency_window() {
	// (b, c) never appears as a context with a continuation
	let history = chars("abc");
	let mut rng = StdRng::seed_from_u64(2);

	let prediction = predict_from_history(&history, 2, &mut rng).unwrap();
	assert!(prediction.is_fallback());
	assert!(['b', 'c'].contains(prediction.symbol()));
}

#[test]
fn fallback_never_panics_over_many_shapes() {
	let mut rng = StdRng::seed_from_u64(3);
	let corpus = chars("xyzzyxzyx");
	for len in 1..=corpus.len() {
		for order in 0..=4 {
			let prediction = predict_from_history(&corpus[..len], order, &mut rng);
			assert!(prediction.is_ok(), "len {len} order {order}");
		}
	}
}

#[test]
fn empty_history_cannot_predict() {
	let mut rng = StdRng::seed_from_u64(4);
	let outcome = predict_from_history::<char, _>(&[], 1, &mut rng);
	assert_eq!(outcome, Err(ModelError::EmptyModel));
}

#[test]
fn ties_break_toward_the_first_observed_successor() {
	// 'b' and 'c' each follow 'a' once; 'b' came first
	let history = chars("abaca");
	let mut rng = StdRng::seed_from_u64(5);

	let prediction = predict_from_history(&history, 1, &mut rng).unwrap();
	assert_eq!(prediction, Prediction::Observed('b'));
}

#[test]
fn order_zero_predicts_the_overall_mode() {
	let history = chars("aaba");
	let mut rng = StdRng::seed_from_u64(6);

	let prediction = predict_from_history(&history, 0, &mut rng).unwrap();
	assert_eq!(prediction, Prediction::Observed('a'));
}

#[test]
fn two_step_prediction_reuses_one_table() {
	let table = FrequencyTable::build(chars("ababac"), 1);

	assert_eq!(table.most_likely(&['a']), Some(&'b'));
	assert_eq!(table.most_likely(&['b']), Some(&'a'));
	assert_eq!(table.most_likely(&['z']), None);
}

#[test]
fn prediction_accessors_expose_the_symbol() {
	let observed = Prediction::Observed('x');
	assert_eq!(observed.symbol(), &'x');
	assert_eq!(observed.into_inner(), 'x');

	let fallback = Prediction::Fallback('y');
	assert!(fallback.is_fallback());
	assert_eq!(fallback.into_inner(), 'y');
}
