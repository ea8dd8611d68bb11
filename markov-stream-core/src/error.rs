use thiserror::Error;

/// Failures surfaced by stream construction and prediction.
///
/// Only an unusable model is reported as an error. Every other anomaly the
/// model meets (a mid-stream context with no recorded continuation, an
/// unseen prediction context) is absorbed by a defined recovery action, so
/// a single bad context never breaks the infinite-stream contract.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelError {
	/// The table has no recorded context to seed generation from.
	#[error("frequency table has no known contexts to seed from")]
	EmptyModel,

	/// A mixup period of zero symbols was requested.
	#[error("mixup period must be at least one symbol")]
	InvalidMixupPeriod,
}
