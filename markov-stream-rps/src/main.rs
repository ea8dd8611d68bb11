use std::io::{self, BufRead, Write};

use clap::Parser;
use markov_stream_core::model::predictor::{Prediction, predict_from_history};
use rand::Rng;

/// Plays rock-paper-scissors and learns to anticipate its opponent.
#[derive(Parser)]
#[command(about = "Plays rock-paper-scissors and learns to anticipate its opponent")]
struct Args {
	/// The length of history to base predictions on
	#[arg(long, default_value_t = 3)]
	history_length: usize,

	/// Play against a built-in bot instead of stdin
	#[arg(long)]
	computer: bool,

	/// Number of turns to play in bot mode
	#[arg(long, default_value_t = 100)]
	turns: usize,
}

/// One rock-paper-scissors move.
///
/// Derived structural equality and hash make moves usable as model symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Move {
	Rock,
	Paper,
	Scissors,
}

impl Move {
	/// The move this one defeats.
	fn beats(self) -> Self {
		match self {
			Move::Rock => Move::Scissors,
			Move::Paper => Move::Rock,
			Move::Scissors => Move::Paper,
		}
	}

	/// The move that defeats this one.
	fn loses_to(self) -> Self {
		match self {
			Move::Rock => Move::Paper,
			Move::Paper => Move::Scissors,
			Move::Scissors => Move::Rock,
		}
	}

	/// Reads a move from the first letter of the input, if any.
	fn parse(input: &str) -> Option<Self> {
		match input.trim().chars().next()?.to_ascii_lowercase() {
			'r' => Some(Move::Rock),
			'p' => Some(Move::Paper),
			's' => Some(Move::Scissors),
			_ => None,
		}
	}

	fn letter(self) -> char {
		match self {
			Move::Rock => 'r',
			Move::Paper => 'p',
			Move::Scissors => 's',
		}
	}
}

/// The bot favors rock half of the time.
fn bot_move<R: Rng>(rng: &mut R) -> Move {
	match rng.random_range(0..4) {
		0 | 1 => Move::Rock,
		2 => Move::Paper,
		_ => Move::Scissors,
	}
}

fn uniform_move<R: Rng>(rng: &mut R) -> Move {
	match rng.random_range(0..3) {
		0 => Move::Rock,
		1 => Move::Paper,
		_ => Move::Scissors,
	}
}

/// Asks for a move on stdin until the input parses.
///
/// Returns `None` once stdin is closed.
fn ask(stdin: &io::Stdin) -> Option<Move> {
	loop {
		print!("Please type in \"r\", \"p\" or \"s\": ");
		io::stdout().flush().ok()?;

		let mut line = String::new();
		if stdin.lock().read_line(&mut line).ok()? == 0 {
			return None;
		}
		if let Some(choice) = Move::parse(&line) {
			return Some(choice);
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let mut rng = rand::rng();
	let stdin = io::stdin();
	let mut history: Vec<Move> = Vec::new();
	let mut wins = 0u32;
	let mut losses = 0u32;

	loop {
		if args.computer && history.len() >= args.turns {
			break;
		}

		// Anticipate the opponent before seeing their move
		let guess = if history.is_empty() {
			Prediction::Fallback(uniform_move(&mut rng))
		} else {
			let order = args.history_length.min(history.len() - 1);
			predict_from_history(&history, order, &mut rng)?
		};
		let counter = guess.symbol().loses_to();

		let opponent = if args.computer {
			let choice = bot_move(&mut rng);
			println!("Bot plays {}", choice.letter());
			Some(choice)
		} else {
			ask(&stdin)
		};
		let Some(opponent) = opponent else {
			break;
		};
		history.push(opponent);

		if counter.beats() == opponent {
			wins += 1;
			println!(
				"I win, I chose {}, you chose {}",
				counter.letter(),
				opponent.letter()
			);
		} else if counter.loses_to() == opponent {
			losses += 1;
			println!(
				"I lose, I chose {}, you chose {}",
				counter.letter(),
				opponent.letter()
			);
		} else {
			println!("Tie, we both chose {}", counter.letter());
		}

		let how = if guess.is_fallback() { "guessed" } else { "predicted" };
		println!("I {} you would choose {}", how, guess.symbol().letter());

		if wins + losses > 0 {
			println!(
				"My win rate is {:.1}%",
				100.0 * f64::from(wins) / f64::from(wins + losses)
			);
		}
	}

	Ok(())
}
