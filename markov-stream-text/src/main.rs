use std::fs;
use std::path::PathBuf;

use clap::Parser;
use markov_stream_core::model::frequency_table::FrequencyTable;

/// Generates text using Markov chain inspired techniques.
#[derive(Parser)]
#[command(about = "Generates text using Markov chain inspired techniques")]
struct Args {
	/// The file to learn from
	file_in: PathBuf,

	/// The file to save the generated text to
	file_out: PathBuf,

	/// The number of words to generate
	#[arg(long, default_value_t = 250)]
	length: usize,

	/// The length of history to base decisions on
	#[arg(long, default_value_t = 2)]
	history_length: usize,

	/// Force a random transition after this many words to prevent staleness
	#[arg(long)]
	mixup_period: Option<u64>,
}

/// Lowercases a document and splits it into words.
fn read_words(contents: &str) -> Vec<String> {
	contents.split_whitespace().map(str::to_lowercase).collect()
}

/// Joins words with spaces, breaking lines at the given column width.
fn wrap_words(words: &[String], width: usize) -> String {
	let mut out = String::new();
	let mut line_len = 0;
	for word in words {
		if line_len == 0 {
			out.push_str(word);
			line_len = word.len();
		} else if line_len + 1 + word.len() > width {
			out.push('\n');
			out.push_str(word);
			line_len = word.len();
		} else {
			out.push(' ');
			out.push_str(word);
			line_len += 1 + word.len();
		}
	}
	out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let words = read_words(&fs::read_to_string(&args.file_in)?);
	let table = FrequencyTable::build(words, args.history_length);

	let generated: Vec<String> = table
		.stream(args.mixup_period)?
		.take(args.length)
		.collect();

	fs::write(&args.file_out, wrap_words(&generated, 80))?;
	Ok(())
}
