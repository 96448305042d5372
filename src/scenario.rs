//! Scenario model: the setup records and command list for one session.
//!
//! The native on-disk form is a whitespace-separated token stream (the
//! original program's scanner format); a JSON form is available for
//! tooling via serde. Command tokens are carried verbatim - legality is
//! decided per command at interpretation time, never at parse time, so
//! a scenario with a typo in command 7 still plays commands 1 through 6.
//!
//! Token stream layout:
//!
//! ```text
//! N                      board is N x N, coordinates 1..N
//! greenY greenX          green root figure
//! redY redX              red root figure
//! M                      coin count
//! M x (coinY coinX value)
//! P                      command count
//! P x (roleToken actionToken)
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// Initial placement of a root figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureSpawn {
    /// Row, 1-based.
    pub y: u16,
    /// Column, 1-based.
    pub x: u16,
}

/// Initial placement of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSpawn {
    /// Row, 1-based.
    pub y: u16,
    /// Column, 1-based.
    pub x: u16,
    /// Point value.
    pub value: u32,
}

/// One command: a role token and an action token, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Role token, e.g. `GREEN` or `REDCLONE`.
    pub role: String,
    /// Action token, e.g. `UP`, `STYLE`, or `COPY`.
    pub action: String,
}

/// A complete session input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Board dimension; the board is `size` x `size`.
    pub size: u16,
    /// Green root placement.
    pub green: FigureSpawn,
    /// Red root placement.
    pub red: FigureSpawn,
    /// Coin placements.
    pub coins: Vec<CoinSpawn>,
    /// Ordered command list.
    pub commands: Vec<CommandRecord>,
}

/// Preallocation ceiling for declared record counts.
///
/// Counts larger than this still parse; they just grow the vector
/// incrementally instead of reserving up front.
const PREALLOC_CAP: usize = 1024;

impl Scenario {
    /// Parse the native token-stream form.
    ///
    /// Tokens past the declared command count are ignored, matching
    /// the original program's scanner behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream ends early or a numeric record
    /// does not parse.
    pub fn parse(input: &str) -> Result<Self, ScenarioError> {
        let mut tokens = input.split_whitespace();

        let size = next_number(&mut tokens, "board size")?;
        let green = FigureSpawn {
            y: next_number(&mut tokens, "green figure row")?,
            x: next_number(&mut tokens, "green figure column")?,
        };
        let red = FigureSpawn {
            y: next_number(&mut tokens, "red figure row")?,
            x: next_number(&mut tokens, "red figure column")?,
        };

        let coin_count: usize = next_number(&mut tokens, "coin count")?;
        // Counts come from untrusted input; a hostile count must fall
        // out as UnexpectedEnd, not a capacity-overflow panic.
        let mut coins = Vec::with_capacity(coin_count.min(PREALLOC_CAP));
        for _ in 0..coin_count {
            coins.push(CoinSpawn {
                y: next_number(&mut tokens, "coin row")?,
                x: next_number(&mut tokens, "coin column")?,
                value: next_number(&mut tokens, "coin value")?,
            });
        }

        let command_count: usize = next_number(&mut tokens, "command count")?;
        let mut commands = Vec::with_capacity(command_count.min(PREALLOC_CAP));
        for _ in 0..command_count {
            commands.push(CommandRecord {
                role: next_token(&mut tokens, "command role")?.to_string(),
                action: next_token(&mut tokens, "command action")?.to_string(),
            });
        }

        Ok(Self {
            size,
            green,
            red,
            coins,
            commands,
        })
    }

    /// Load a scenario from a file.
    ///
    /// Files ending in `.json` are read as the JSON form; anything
    /// else is read as the native token stream.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or malformed content.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&text)?)
        } else {
            Self::parse(&text)
        }
    }
}

/// Pull the next token, or report which record was cut short.
fn next_token<'a, I>(tokens: &mut I, expected: &'static str) -> Result<&'a str, ScenarioError>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .next()
        .ok_or(ScenarioError::UnexpectedEnd { expected })
}

/// Pull the next token and parse it as a number.
fn next_number<'a, I, N>(tokens: &mut I, expected: &'static str) -> Result<N, ScenarioError>
where
    I: Iterator<Item = &'a str>,
    N: FromStr,
{
    let token = next_token(tokens, expected)?;
    token.parse().map_err(|_| ScenarioError::InvalidNumber {
        expected,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3
1 1
3 3
1
1 2 5
2
GREEN RIGHT
RED STYLE
";

    #[test]
    fn test_parse_sample() {
        let scenario = Scenario::parse(SAMPLE).unwrap();
        assert_eq!(scenario.size, 3);
        assert_eq!(scenario.green, FigureSpawn { y: 1, x: 1 });
        assert_eq!(scenario.red, FigureSpawn { y: 3, x: 3 });
        assert_eq!(scenario.coins, vec![CoinSpawn { y: 1, x: 2, value: 5 }]);
        assert_eq!(scenario.commands.len(), 2);
        assert_eq!(scenario.commands[0].role, "GREEN");
        assert_eq!(scenario.commands[0].action, "RIGHT");
        assert_eq!(scenario.commands[1].action, "STYLE");
    }

    #[test]
    fn test_parse_is_whitespace_agnostic() {
        let flat = "3 1 1 3 3 1 1 2 5 2 GREEN RIGHT RED STYLE";
        assert_eq!(Scenario::parse(flat).unwrap(), Scenario::parse(SAMPLE).unwrap());
    }

    #[test]
    fn test_unknown_tokens_survive_parsing() {
        let input = "2 1 1 2 2 0 1 BLUE WOBBLE";
        let scenario = Scenario::parse(input).unwrap();
        assert_eq!(scenario.commands[0].role, "BLUE");
        assert_eq!(scenario.commands[0].action, "WOBBLE");
    }

    #[test]
    fn test_truncated_input() {
        let result = Scenario::parse("3 1 1 3 3 2 1 2 5");
        assert!(matches!(
            result,
            Err(ScenarioError::UnexpectedEnd { expected: "coin row" })
        ));
    }

    #[test]
    fn test_huge_coin_count_is_an_error_not_a_panic() {
        // A declared count is untrusted; usize::MAX must surface as a
        // truncated stream, never a capacity-overflow panic.
        let result = Scenario::parse("2 1 1 2 2 18446744073709551615");
        assert!(matches!(
            result,
            Err(ScenarioError::UnexpectedEnd { expected: "coin row" })
        ));
    }

    #[test]
    fn test_huge_command_count_is_an_error_not_a_panic() {
        let result = Scenario::parse("2 1 1 2 2 0 18446744073709551615 GREEN UP");
        assert!(matches!(
            result,
            Err(ScenarioError::UnexpectedEnd { expected: "command role" })
        ));
    }

    #[test]
    fn test_garbage_number() {
        let result = Scenario::parse("three");
        assert!(matches!(
            result,
            Err(ScenarioError::InvalidNumber { expected: "board size", .. })
        ));
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let input = "2 1 1 2 2 0 0 GREEN RIGHT";
        let scenario = Scenario::parse(input).unwrap();
        assert!(scenario.commands.is_empty());
    }

    #[test]
    fn test_json_form() {
        let scenario = Scenario::parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, back);
    }
}
