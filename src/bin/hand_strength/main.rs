mod tracing_args;

use std::process::ExitCode;

use clap::Parser;
use hand_strength::core::{parse_cards, Card, CardParseError, InvalidHandError};
use hand_strength::holdem::{EquityCalculator, EquityResult};
use thiserror::Error;
use tracing::debug;

/// Hole cards plus the full board.
const NUM_CARDS: usize = 7;

#[derive(Parser, Debug)]
#[command(
    name = "hand_strength",
    about = "Win, split and loss rates for a hold'em hand on the river",
    long_about = "Given two hole cards and five community cards, enumerate every two card\n\
                  holding an opponent could have and report how often the hand wins,\n\
                  splits the pot or loses.\n\n\
                  Cards are a value (2-9, 10, J, Q, K, A) followed by a suit (H, S, C, D),\n\
                  for example: hand_strength AS KD 10H JH QH 2C 7D"
)]
struct Args {
    /// Tracing/logging options
    #[command(flatten)]
    tracing: tracing_args::TracingArgs,

    /// Print the result as JSON instead of percentages
    #[arg(long)]
    json: bool,

    /// Two hole cards followed by the five board cards (e.g. "10H" "AS")
    cards: Vec<String>,
}

/// Why the command line couldn't be turned into a calculation. The
/// messages are what gets printed.
#[derive(Error, Debug, PartialEq, Eq)]
enum ArgsError {
    #[error("Invalid number of arguments provided")]
    WrongCount(usize),
    #[error("Invalid arguments")]
    BadCard(#[from] CardParseError),
    #[error("Invalid arguments")]
    BadHand(#[from] InvalidHandError),
}

/// Turn the card tokens into a calculator: two hole cards then the board.
fn calculator_from_args(tokens: &[String]) -> Result<EquityCalculator, ArgsError> {
    if tokens.len() != NUM_CARDS {
        return Err(ArgsError::WrongCount(tokens.len()));
    }
    let cards: Vec<Card> = parse_cards(tokens)?;
    let (hole, board) = cards.split_at(2);
    Ok(EquityCalculator::new(hole, board)?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.tracing.init_tracing();

    let calc = match calculator_from_args(&args.cards) {
        Ok(calc) => calc,
        Err(e) => {
            debug!(error = ?e, "Rejected the command line");
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = calc.calculate();
    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize result: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&result);
    }
    ExitCode::SUCCESS
}

fn print_report(result: &EquityResult) {
    println!("Win - {:.2}%", result.win_percentage());
    println!("Split Pot - {:.2}%", result.tie_percentage());
    println!("Loss - {:.2}%", result.loss_percentage());
}

#[cfg(test)]
mod tests {
    use hand_strength::core::{Suit, Value};

    use super::*;

    fn tokens(cards: &[&str]) -> Vec<String> {
        cards.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_wrong_number_of_cards() {
        for cards in [
            &[][..],
            &["AS", "KD", "10H", "JH", "QH", "2C"][..],
            &["AS", "KD", "10H", "JH", "QH", "2C", "7D", "3S"][..],
        ] {
            let err = calculator_from_args(&tokens(cards)).unwrap_err();
            assert_eq!(ArgsError::WrongCount(cards.len()), err);
            assert_eq!("Invalid number of arguments provided", err.to_string());
        }
    }

    #[test]
    fn test_bad_token() {
        let cards = tokens(&["AS", "KD", "10H", "JX", "QH", "2C", "7D"]);
        let err = calculator_from_args(&cards).unwrap_err();
        assert_eq!(ArgsError::BadCard(CardParseError::UnexpectedSuitChar), err);
        assert_eq!("Invalid arguments", err.to_string());

        let cards = tokens(&["AS", "KD", "1H", "JH", "QH", "2C", "7D"]);
        let err = calculator_from_args(&cards).unwrap_err();
        assert_eq!("Invalid arguments", err.to_string());
    }

    #[test]
    fn test_duplicate_card() {
        let cards = tokens(&["AS", "KD", "10H", "JH", "QH", "2C", "AS"]);
        let err = calculator_from_args(&cards).unwrap_err();
        assert_eq!(
            ArgsError::BadHand(InvalidHandError::DuplicateCard(Card::new(
                Value::Ace,
                Suit::Spade
            ))),
            err
        );
        assert_eq!("Invalid arguments", err.to_string());
    }

    #[test]
    fn test_valid_cards() {
        let cards = tokens(&["AS", "KD", "10H", "JH", "QH", "2C", "7D"]);
        let calc = calculator_from_args(&cards).unwrap();
        assert_eq!(
            &[
                Card::new(Value::Ace, Suit::Spade),
                Card::new(Value::King, Suit::Diamond)
            ],
            calc.hole()
        );
        assert_eq!(5, calc.board().len());

        let result = calc.calculate();
        assert_eq!(937, result.wins);
        assert_eq!(8, result.ties);
    }

    #[test]
    fn test_parse_command_line() {
        let args = Args::try_parse_from([
            "hand_strength",
            "--json",
            "-v",
            "AS",
            "KD",
            "10H",
            "JH",
            "QH",
            "2C",
            "7D",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(1, args.tracing.verbosity);
        assert_eq!(
            tokens(&["AS", "KD", "10H", "JH", "QH", "2C", "7D"]),
            args.cards
        );
    }
}
